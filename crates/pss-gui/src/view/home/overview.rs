//! Competition overview - the landing screen while a competition is open.
//!
//! Headline numbers, overall scoring progress, and the ways into setup
//! and scoring.

use iced::widget::{Space, button, column, container, row, scrollable, text};
use iced::{Alignment, Border, Element, Length};
use iced_fonts::lucide;
use pss_model::Competition;

use crate::component::{PageHeader, ProgressBar, save_indicator};
use crate::message::Message;
use crate::state::{AppState, Screen, SetupTab};
use crate::theme::{
    BORDER_RADIUS_MD, BORDER_WIDTH_THIN, FONT_SIZE_BODY, FONT_SIZE_HEADING, FONT_SIZE_SMALL,
    SPACING_LG, SPACING_MD, SPACING_SM, SPACING_XS, button_ghost, button_primary,
    button_secondary, colors,
};

/// Render the overview for a loaded competition.
pub fn view_overview<'a>(
    state: &'a AppState,
    competition: &'a Competition,
) -> Element<'a, Message> {
    let c = colors();

    let mut header = PageHeader::new(competition.name.clone())
        .metadata("Date", date_label(competition))
        .metadata("Sections", sections_label(competition))
        .trailing(save_indicator(
            state.save_state,
            state.last_save_error.as_deref(),
        ));
    if state.dirty_tracker.is_dirty() {
        header = header.badge("Unsaved", c.status_warning);
    }

    let stats = row![
        stat_card(
            lucide::list().size(18).color(c.accent_primary),
            competition.station_count(),
            "Stations",
        ),
        Space::new().width(SPACING_MD),
        stat_card(
            lucide::house().size(18).color(c.accent_primary),
            competition.group_count(),
            "Groups",
        ),
        Space::new().width(SPACING_MD),
        stat_card(
            lucide::users().size(18).color(c.accent_primary),
            competition.patrol_count(),
            "Patrols",
        ),
    ]
    .width(Length::Fill);

    let (entered, possible) = competition.scoring_progress();
    let progress_value = if possible == 0 {
        0.0
    } else {
        entered as f32 / possible as f32
    };
    let progress_card = card(
        column![
            row![
                text("Scoring progress")
                    .size(FONT_SIZE_BODY)
                    .color(c.text_primary),
                Space::new().width(Length::Fill),
                text(format!("{entered} of {possible} scores entered"))
                    .size(FONT_SIZE_SMALL)
                    .color(c.text_muted),
            ]
            .align_y(Alignment::Center),
            Space::new().height(SPACING_SM),
            ProgressBar::new(progress_value).show_label(true).view(),
        ]
        .width(Length::Fill)
        .into(),
    );

    let actions = row![
        button(
            row![
                lucide::settings().size(16).color(c.text_secondary),
                Space::new().width(SPACING_SM),
                text("Competition Setup").size(FONT_SIZE_BODY),
            ]
            .align_y(Alignment::Center),
        )
        .on_press(Message::Navigate(Screen::Setup(SetupTab::Details)))
        .padding([SPACING_SM, SPACING_LG])
        .style(button_secondary),
        Space::new().width(SPACING_SM),
        button(
            row![
                lucide::play().size(16).color(c.text_on_accent),
                Space::new().width(SPACING_SM),
                text("Start Scoring").size(FONT_SIZE_BODY),
            ]
            .align_y(Alignment::Center),
        )
        .on_press(Message::Navigate(Screen::Scoring))
        .padding([SPACING_SM, SPACING_LG])
        .style(button_primary),
        Space::new().width(Length::Fill),
        button(
            row![
                lucide::save().size(16).color(c.text_secondary),
                Space::new().width(SPACING_SM),
                text("Save").size(FONT_SIZE_BODY),
            ]
            .align_y(Alignment::Center),
        )
        .on_press(Message::SaveCompetition)
        .padding([SPACING_SM, SPACING_LG])
        .style(button_secondary),
        Space::new().width(SPACING_SM),
        button(
            row![
                lucide::x().size(16).color(c.text_muted),
                Space::new().width(SPACING_SM),
                text("Close").size(FONT_SIZE_BODY),
            ]
            .align_y(Alignment::Center),
        )
        .on_press(Message::CloseCompetition)
        .padding([SPACING_SM, SPACING_LG])
        .style(button_ghost),
    ]
    .align_y(Alignment::Center);

    let content = column![
        header.view(),
        Space::new().height(SPACING_LG),
        stats,
        Space::new().height(SPACING_MD),
        progress_card,
        Space::new().height(SPACING_LG),
        actions,
    ]
    .max_width(900.0)
    .width(Length::Fill);

    container(scrollable(container(content).center_x(Length::Fill)))
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(SPACING_LG)
        .style(move |_| container::Style {
            background: Some(c.background_primary.into()),
            ..Default::default()
        })
        .into()
}

fn date_label(competition: &Competition) -> String {
    competition
        .date
        .map_or_else(|| "Not set".to_string(), |d| d.format("%d %B %Y").to_string())
}

fn sections_label(competition: &Competition) -> String {
    if competition.sections.is_empty() {
        return "None".to_string();
    }
    competition
        .sections
        .iter()
        .map(|s| s.short_label())
        .collect::<Vec<_>>()
        .join(", ")
}

/// One headline number with an icon.
fn stat_card<'a>(
    icon: iced::widget::Text<'a>,
    value: usize,
    label: &'a str,
) -> Element<'a, Message> {
    let c = colors();
    card(
        row![
            icon,
            Space::new().width(SPACING_MD),
            column![
                text(value.to_string())
                    .size(FONT_SIZE_HEADING)
                    .color(c.text_primary),
                Space::new().height(SPACING_XS),
                text(label).size(FONT_SIZE_SMALL).color(c.text_muted),
            ],
        ]
        .align_y(Alignment::Center)
        .width(Length::Fill)
        .into(),
    )
}

fn card(content: Element<'_, Message>) -> Element<'_, Message> {
    let c = colors();
    container(content)
        .padding(SPACING_MD)
        .width(Length::Fill)
        .style(move |_| container::Style {
            background: Some(c.background_elevated.into()),
            border: Border {
                radius: BORDER_RADIUS_MD.into(),
                width: BORDER_WIDTH_THIN,
                color: c.border_subtle,
            },
            ..Default::default()
        })
        .into()
}
