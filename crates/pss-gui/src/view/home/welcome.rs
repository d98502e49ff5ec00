//! Welcome view - displayed when no competition is loaded.
//!
//! Shows app branding, the create-competition form, and recent files.

use iced::widget::{Space, button, column, container, row, svg, text, text_input};
use iced::{Alignment, Border, Element, Length};
use iced_fonts::lucide;

use crate::message::{HomeMessage, Message, SettingsMessage};
use crate::state::{AppState, RecentCompetition, ViewState};
use crate::theme::{
    BORDER_RADIUS_LG, BORDER_RADIUS_SM, BORDER_WIDTH_THIN, FONT_SIZE_BODY, FONT_SIZE_CAPTION,
    FONT_SIZE_DISPLAY, FONT_SIZE_SMALL, SPACING_LG, SPACING_MD, SPACING_SM, SPACING_XL, SPACING_XS,
    button_ghost, button_primary, button_secondary, colors,
};

/// Embedded SVG logo bytes.
const LOGO_SVG: &[u8] = include_bytes!("../../../assets/icon.svg");

/// Render the welcome view (no competition loaded).
pub fn view_welcome(state: &AppState) -> Element<'_, Message> {
    let c = colors();

    let new_name = match &state.view {
        ViewState::Home(home) => home.new_name.as_str(),
        _ => "",
    };

    let content = column![
        view_logo(),
        Space::new().height(SPACING_LG),
        text("Patrol Score Studio")
            .size(FONT_SIZE_DISPLAY)
            .color(c.text_primary),
        Space::new().height(SPACING_XS),
        text("Score your Scout competition, station by station")
            .size(FONT_SIZE_BODY)
            .color(c.text_muted),
        Space::new().height(SPACING_XL),
        view_create_card(new_name),
        Space::new().height(SPACING_XL),
        view_recent_competitions(state),
    ]
    .align_x(Alignment::Center)
    .max_width(520.0);

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .padding(SPACING_XL)
        .style(move |_| container::Style {
            background: Some(c.background_primary.into()),
            ..Default::default()
        })
        .into()
}

/// Render the app logo.
fn view_logo<'a>() -> Element<'a, Message> {
    let logo_handle = svg::Handle::from_memory(LOGO_SVG);
    svg(logo_handle).width(80).height(80).into()
}

/// Render the create/open card.
fn view_create_card(new_name: &str) -> Element<'_, Message> {
    let c = colors();
    let bg_elevated = c.background_elevated;
    let border_default = c.border_default;
    let border_focused = c.border_focused;
    let text_primary = c.text_primary;
    let text_muted = c.text_muted;
    let text_disabled = c.text_disabled;
    let selection = iced::Color {
        a: 0.15,
        ..c.accent_primary
    };

    let name_input = text_input("e.g. Autumn District Camp", new_name)
        .on_input(|value| Message::Home(HomeMessage::NewNameChanged(value)))
        .on_submit(Message::Home(HomeMessage::CreateCompetition))
        .padding([SPACING_SM, SPACING_MD])
        .size(FONT_SIZE_BODY)
        .style(move |_, status| {
            let border_color = match status {
                text_input::Status::Focused { .. } => border_focused,
                _ => border_default,
            };
            text_input::Style {
                background: bg_elevated.into(),
                border: Border {
                    radius: BORDER_RADIUS_SM.into(),
                    width: BORDER_WIDTH_THIN,
                    color: border_color,
                },
                icon: text_muted,
                placeholder: text_disabled,
                value: text_primary,
                selection,
            }
        });

    let create_button = button(
        row![
            lucide::plus().size(16).color(c.text_on_accent),
            Space::new().width(SPACING_SM),
            text("Create Competition").size(FONT_SIZE_BODY),
        ]
        .align_y(Alignment::Center),
    )
    .on_press_maybe(
        (!new_name.trim().is_empty()).then(|| Message::Home(HomeMessage::CreateCompetition)),
    )
    .padding([SPACING_SM, SPACING_LG])
    .style(button_primary);

    let open_button = button(
        row![
            lucide::folder_open().size(16).color(c.text_secondary),
            Space::new().width(SPACING_SM),
            text("Open Existing...").size(FONT_SIZE_BODY),
        ]
        .align_y(Alignment::Center),
    )
    .on_press(Message::OpenCompetition)
    .padding([SPACING_SM, SPACING_LG])
    .style(button_secondary);

    let card_content = column![
        text("Competition name").size(FONT_SIZE_SMALL).color(c.text_secondary),
        Space::new().height(SPACING_XS),
        name_input,
        Space::new().height(SPACING_MD),
        row![
            create_button,
            Space::new().width(SPACING_SM),
            open_button,
        ]
        .align_y(Alignment::Center),
    ]
    .width(Length::Fill);

    container(card_content)
        .padding(SPACING_LG)
        .width(Length::Fill)
        .style(move |_| container::Style {
            background: Some(bg_elevated.into()),
            border: Border {
                radius: BORDER_RADIUS_LG.into(),
                width: BORDER_WIDTH_THIN,
                color: border_default,
            },
            ..Default::default()
        })
        .into()
}

/// Render the recent competitions section.
fn view_recent_competitions(state: &AppState) -> Element<'_, Message> {
    let c = colors();
    let recents = &state.settings.general.recent_competitions;

    if recents.is_empty() {
        return Space::new().height(0.0).into();
    }

    let clear_btn: Element<'_, Message> = button(
        row![
            lucide::trash().size(12).color(c.text_muted),
            Space::new().width(4.0),
            text("Clear All").size(FONT_SIZE_CAPTION).color(c.text_muted),
        ]
        .align_y(Alignment::Center),
    )
    .on_press(Message::Settings(SettingsMessage::ClearRecentCompetitions))
    .padding([4.0, 8.0])
    .style(button_ghost)
    .into();

    let header = row![
        lucide::timer().size(14).color(c.text_secondary),
        Space::new().width(SPACING_SM),
        text("Recent Competitions")
            .size(FONT_SIZE_SMALL)
            .color(c.text_secondary),
        Space::new().width(Length::Fill),
        clear_btn,
    ]
    .align_y(Alignment::Center);

    let mut items = column![header, Space::new().height(SPACING_SM)].width(Length::Fill);
    for recent in recents {
        items = items.push(recent_item(recent));
        items = items.push(Space::new().height(SPACING_XS));
    }

    items.into()
}

/// Render one recent competition row.
fn recent_item(recent: &RecentCompetition) -> Element<'_, Message> {
    let c = colors();
    let is_missing = !recent.exists();

    let missing_badge: Element<'_, Message> = if is_missing {
        container(
            row![
                lucide::triangle_alert().size(10).color(c.status_warning),
                Space::new().width(2.0),
                text("Missing").size(9).color(c.status_warning),
            ]
            .align_y(Alignment::Center),
        )
        .padding([2.0, 4.0])
        .style(move |_| container::Style {
            background: Some(c.status_warning_light.into()),
            border: Border {
                radius: BORDER_RADIUS_SM.into(),
                ..Default::default()
            },
            ..Default::default()
        })
        .into()
    } else {
        Space::new().width(0.0).into()
    };

    let name_color = if is_missing {
        c.text_muted
    } else {
        c.text_primary
    };
    let top_row = row![
        text(&recent.display_name)
            .size(FONT_SIZE_BODY)
            .color(name_color),
        Space::new().width(SPACING_XS),
        missing_badge,
        Space::new().width(Length::Fill),
        text(recent.relative_time())
            .size(FONT_SIZE_CAPTION)
            .color(c.text_muted),
    ]
    .align_y(Alignment::Center);

    let bottom_row = text(recent.path.display().to_string())
        .size(FONT_SIZE_CAPTION)
        .color(c.text_disabled);

    let remove_btn = button(lucide::x().size(12).color(c.text_muted))
        .on_press(Message::Home(HomeMessage::RemoveRecent(recent.path.clone())))
        .padding(4.0)
        .style(button_ghost);

    let content = row![
        lucide::file_text().size(16).color(if is_missing {
            c.text_disabled
        } else {
            c.text_muted
        }),
        Space::new().width(SPACING_SM),
        column![top_row, Space::new().height(2.0), bottom_row].width(Length::Fill),
        Space::new().width(SPACING_SM),
        remove_btn,
    ]
    .align_y(Alignment::Center);

    // A missing file is still clickable; the click prunes it with a toast.
    button(content)
        .on_press(Message::Home(HomeMessage::OpenRecent(recent.path.clone())))
        .padding([SPACING_SM, SPACING_MD])
        .width(Length::Fill)
        .style(move |_, status| {
            let background = match status {
                iced::widget::button::Status::Hovered => c.background_secondary,
                _ => c.background_elevated,
            };
            iced::widget::button::Style {
                background: Some(background.into()),
                text_color: c.text_primary,
                border: Border {
                    radius: BORDER_RADIUS_SM.into(),
                    width: BORDER_WIDTH_THIN,
                    color: c.border_subtle,
                },
                ..Default::default()
            }
        })
        .into()
}
