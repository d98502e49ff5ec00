//! Settings view.
//!
//! Every control writes through [`crate::handler::SettingsHandler`], which
//! applies the change and persists the file in one step. There is no
//! apply/cancel pair; the screen always shows what is on disk.

use iced::widget::{Space, button, column, container, pick_list, row, scrollable, text, toggler};
use iced::{Alignment, Element, Length};

use crate::component::PageHeader;
use crate::message::{Message, SettingsMessage};
use crate::state::AppState;
use crate::theme::{
    FONT_SIZE_BODY, FONT_SIZE_SMALL, FONT_SIZE_SUBTITLE, SETTINGS_WIDTH, SPACING_LG, SPACING_MD,
    SPACING_SM, SPACING_XS, ThemeMode, button_secondary, colors,
};

/// Render the settings view.
pub fn view_settings(state: &AppState) -> Element<'_, Message> {
    let c = colors();

    let appearance = setting_row(
        "Appearance",
        "Light or dark, or follow the system preference",
        pick_list(
            ThemeMode::ALL.to_vec(),
            Some(state.settings.display.theme_mode),
            |mode| Message::Settings(SettingsMessage::ThemeModeSelected(mode)),
        )
        .width(Length::Fixed(200.0))
        .into(),
    );

    let auto_save = setting_row(
        "Auto-save",
        "Write changes back to the open file a few seconds after they happen",
        toggler(state.settings.general.auto_save.enabled)
            .on_toggle(|enabled| Message::Settings(SettingsMessage::AutoSaveToggled(enabled)))
            .into(),
    );

    let recent_count = state.settings.general.recent_competitions.len();
    let recent_description = match recent_count {
        0 => "Nothing to clear".to_owned(),
        1 => "1 entry on the welcome screen".to_owned(),
        n => format!("{n} entries on the welcome screen"),
    };
    let recents = setting_row(
        "Recent competitions",
        recent_description,
        button(text("Clear").size(FONT_SIZE_SMALL))
            .on_press_maybe(
                (recent_count > 0)
                    .then_some(Message::Settings(SettingsMessage::ClearRecentCompetitions)),
            )
            .padding([SPACING_XS, SPACING_MD])
            .style(button_secondary)
            .into(),
    );

    let about = row![
        text("Patrol Score Studio")
            .size(FONT_SIZE_SMALL)
            .color(c.text_muted),
        Space::new().width(SPACING_XS),
        text(format!("v{}", env!("CARGO_PKG_VERSION")))
            .size(FONT_SIZE_SMALL)
            .color(c.text_muted),
    ]
    .align_y(Alignment::Center);

    let sections = column![
        section_title("Display"),
        appearance,
        Space::new().height(SPACING_LG),
        section_title("General"),
        auto_save,
        Space::new().height(SPACING_SM),
        recents,
        Space::new().height(SPACING_LG),
        about,
    ]
    .spacing(SPACING_SM);

    let content = column![
        PageHeader::new("Settings").on_back(Message::go_home()).view(),
        Space::new().height(SPACING_MD),
        scrollable(sections).height(Length::Fill),
    ]
    .max_width(SETTINGS_WIDTH)
    .width(Length::Fill);

    container(container(content).center_x(Length::Fill))
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(SPACING_LG)
        .style(move |_| container::Style {
            background: Some(c.background_primary.into()),
            ..Default::default()
        })
        .into()
}

/// One labelled setting with its control on the trailing edge.
fn setting_row<'a>(
    title: &'a str,
    description: impl Into<String>,
    control: Element<'a, Message>,
) -> Element<'a, Message> {
    let c = colors();

    row![
        column![
            text(title).size(FONT_SIZE_BODY).color(c.text_primary),
            text(description.into())
                .size(FONT_SIZE_SMALL)
                .color(c.text_muted),
        ]
        .spacing(2.0)
        .width(Length::Fill),
        control,
    ]
    .align_y(Alignment::Center)
    .into()
}

fn section_title(title: &str) -> Element<'_, Message> {
    let c = colors();
    text(title).size(FONT_SIZE_SUBTITLE).color(c.text_secondary).into()
}
