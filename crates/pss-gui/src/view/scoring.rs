//! Scoring view: master-detail score entry.
//!
//! The master column lists stations with their completion; the detail pane
//! holds one score row per eligible patrol. Rows read from the per-patrol
//! drafts, so text the user is mid-way through typing survives re-renders
//! without touching the stored scores.

use iced::widget::{Space, button, column, container, row, scrollable, text};
use iced::{Alignment, Border, Element, Length};
use iced_fonts::lucide;
use pss_model::{Competition, Station};

use crate::component::{EmptyState, PageHeader, ProgressBar, ScoreEntry, chip, save_indicator};
use crate::message::{Message, ScoringMessage};
use crate::state::{AppState, Screen, ScoringState, SetupTab, ViewState};
use crate::theme::{
    BORDER_RADIUS_MD, BORDER_WIDTH_THIN, FONT_SIZE_BODY, FONT_SIZE_CAPTION, FONT_SIZE_SMALL,
    FONT_SIZE_SUBTITLE, MASTER_WIDTH, SPACING_LG, SPACING_MD, SPACING_SM, SPACING_XS,
    button_secondary, colors,
};

/// Render the scoring view.
pub fn view_scoring(state: &AppState) -> Element<'_, Message> {
    let c = colors();

    // Navigation guards against reaching scoring without a competition.
    let (Some(competition), ViewState::Scoring(scoring)) = (&state.competition, &state.view)
    else {
        return Space::new().into();
    };

    let header = PageHeader::new("Scoring")
        .on_back(Message::go_home())
        .trailing(save_indicator(
            state.save_state,
            state.last_save_error.as_deref(),
        ))
        .view();

    let body: Element<'_, Message> = if competition.station_count() == 0 {
        EmptyState::new(
            lucide::list().size(32).color(c.text_disabled),
            "No stations to score",
            "Set up at least one station before scoring",
        )
        .action(
            button(text("Go to Setup").size(FONT_SIZE_BODY))
                .on_press(Message::Navigate(Screen::Setup(SetupTab::Stations)))
                .padding([SPACING_XS, SPACING_MD])
                .style(button_secondary),
        )
        .view()
    } else {
        let detail: Element<'_, Message> = match scoring
            .selected_station
            .and_then(|id| competition.station(id))
        {
            Some(station) => station_detail(competition, scoring, station),
            None => EmptyState::new(
                lucide::arrow_left().size(32).color(c.text_disabled),
                "Pick a station",
                "Choose a station from the list to start entering scores",
            )
            .view(),
        };

        row![
            container(station_master(competition, scoring))
                .width(Length::Fixed(MASTER_WIDTH))
                .height(Length::Fill)
                .style(move |_| container::Style {
                    background: Some(c.background_secondary.into()),
                    border: Border {
                        width: BORDER_WIDTH_THIN,
                        color: c.border_subtle,
                        ..Default::default()
                    },
                    ..Default::default()
                }),
            container(detail).width(Length::Fill).height(Length::Fill),
        ]
        .into()
    };

    let content = column![header, Space::new().height(SPACING_MD), body].width(Length::Fill);

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(SPACING_LG)
        .style(move |_| container::Style {
            background: Some(c.background_primary.into()),
            ..Default::default()
        })
        .into()
}

/// The station list down the left edge.
fn station_master<'a>(
    competition: &'a Competition,
    scoring: &'a ScoringState,
) -> Element<'a, Message> {
    let c = colors();

    let mut list = column![
        text("Stations").size(FONT_SIZE_SMALL).color(c.text_secondary),
        Space::new().height(SPACING_SM),
    ]
    .padding(SPACING_SM)
    .width(Length::Fill);

    for station in competition.stations_by_name() {
        let selected = scoring.selected_station == Some(station.id);
        let (entered, total) = competition.station_progress(station.id);
        let fill = if total == 0 {
            0.0
        } else {
            entered as f32 / total as f32
        };

        let item = column![
            row![
                text(station.name.clone())
                    .size(FONT_SIZE_BODY)
                    .color(if selected { c.accent_primary } else { c.text_primary }),
                Space::new().width(Length::Fill),
                text(format!("{entered}/{total}"))
                    .size(FONT_SIZE_CAPTION)
                    .color(c.text_muted),
            ]
            .align_y(Alignment::Center),
            Space::new().height(SPACING_XS),
            ProgressBar::new(fill).height(4.0).view(),
        ]
        .width(Length::Fill);

        list = list.push(
            button(item)
                .on_press(Message::Scoring(ScoringMessage::StationSelected(station.id)))
                .padding(SPACING_SM)
                .width(Length::Fill)
                .style(move |_, status| {
                    let background = if selected {
                        c.accent_primary_light
                    } else if status == iced::widget::button::Status::Hovered {
                        c.background_elevated
                    } else {
                        c.transparent
                    };
                    iced::widget::button::Style {
                        background: Some(background.into()),
                        text_color: c.text_primary,
                        border: Border {
                            radius: BORDER_RADIUS_MD.into(),
                            ..Default::default()
                        },
                        ..Default::default()
                    }
                }),
        );
        list = list.push(Space::new().height(SPACING_XS));
    }

    scrollable(list).height(Length::Fill).into()
}

/// The score entry pane for the selected station.
fn station_detail<'a>(
    competition: &'a Competition,
    scoring: &'a ScoringState,
    station: &'a Station,
) -> Element<'a, Message> {
    let c = colors();

    // Station header with contact shortcut.
    let mut title_row = row![
        text(station.name.clone())
            .size(FONT_SIZE_SUBTITLE)
            .color(c.text_primary),
        Space::new().width(SPACING_SM),
        text(format!("max {}", station.max_score))
            .size(FONT_SIZE_CAPTION)
            .color(c.text_muted),
        Space::new().width(Length::Fill),
    ]
    .align_y(Alignment::Center);
    if let Some(email) = &station.leader_email {
        title_row = title_row.push(
            button(
                row![
                    lucide::external_link().size(12).color(c.text_secondary),
                    Space::new().width(SPACING_XS),
                    text("Email leader").size(FONT_SIZE_CAPTION),
                ]
                .align_y(Alignment::Center),
            )
            .on_press(Message::Scoring(ScoringMessage::EmailLeader(email.clone())))
            .padding([2.0, SPACING_SM])
            .style(button_secondary),
        );
    }

    let mut header = column![title_row].spacing(SPACING_XS);
    if !station.description.is_empty() {
        header = header.push(
            text(station.description.clone())
                .size(FONT_SIZE_SMALL)
                .color(c.text_muted),
        );
    }

    let (entered, total) = competition.station_progress(station.id);
    let progress_fill = if total == 0 {
        0.0
    } else {
        entered as f32 / total as f32
    };
    let progress = row![
        container(ProgressBar::new(progress_fill).view()).width(Length::Fill),
        Space::new().width(SPACING_SM),
        text(format!("{entered} of {total} scored"))
            .size(FONT_SIZE_CAPTION)
            .color(c.text_muted),
    ]
    .align_y(Alignment::Center);

    // Section filter, only shown when it can actually narrow anything.
    let mut filter_row = row![].spacing(SPACING_XS);
    if competition.sections.len() > 1 {
        filter_row = filter_row.push(chip(
            "All",
            scoring.section_filter.is_none(),
            Message::Scoring(ScoringMessage::SectionFilterChanged(None)),
        ));
        for section in &competition.sections {
            filter_row = filter_row.push(chip(
                section.as_str(),
                scoring.section_filter == Some(*section),
                Message::Scoring(ScoringMessage::SectionFilterChanged(Some(*section))),
            ));
        }
    }

    // One row per eligible patrol, honoring the filter.
    let mut rows = column![].spacing(SPACING_SM).width(Length::Fill);
    let mut shown = 0usize;
    for patrol in competition.patrols_for_station(station.id) {
        if let Some(filter) = scoring.section_filter
            && patrol.section != filter
        {
            continue;
        }
        let Some(draft) = scoring.drafts.get(&patrol.id) else {
            continue;
        };
        shown += 1;

        let group_name = competition
            .group(patrol.group_id)
            .map_or(String::new(), |group| group.name.clone());
        let patrol_id = patrol.id;

        rows = rows.push(
            ScoreEntry::new(
                patrol.name.clone(),
                draft.text(),
                station.max_score,
                move |text| Message::Scoring(ScoringMessage::ScoreInput { patrol_id, text }),
                Message::Scoring(ScoringMessage::ScoreSubmitted { patrol_id }),
            )
            .caption(format!("{} | {}", group_name, patrol.section.as_str()))
            .fill(draft.fill_ratio(station.max_score))
            .invalid(!draft.in_range(station.max_score))
            .view(),
        );
    }

    let body: Element<'_, Message> = if shown == 0 {
        let description = if scoring.section_filter.is_some() {
            "No eligible patrols in this section"
        } else {
            "No patrols are eligible for this station"
        };
        EmptyState::new(
            lucide::users().size(32).color(c.text_disabled),
            "Nothing to score",
            description,
        )
        .view()
    } else {
        scrollable(rows).height(Length::Fill).into()
    };

    column![
        header,
        Space::new().height(SPACING_SM),
        progress,
        Space::new().height(SPACING_MD),
        filter_row,
        Space::new().height(SPACING_MD),
        body,
    ]
    .padding([0.0, SPACING_LG])
    .width(Length::Fill)
    .into()
}
