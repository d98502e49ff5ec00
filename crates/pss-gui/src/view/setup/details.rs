//! Details tab: competition name, event date, and open sections.

use iced::widget::{Space, column, row, text};
use iced::{Element, Length};
use pss_model::{Competition, ScoutSection};

use crate::component::{TextField, chip};
use crate::message::{Message, SetupMessage};
use crate::state::SetupState;
use crate::theme::{
    FONT_SIZE_CAPTION, FONT_SIZE_SMALL, MAX_CHARS_NAME, SPACING_LG, SPACING_SM, SPACING_XS,
    colors,
};

/// Render the details tab.
pub fn view_details<'a>(
    competition: &'a Competition,
    setup: &'a SetupState,
) -> Element<'a, Message> {
    let c = colors();

    let name_field = TextField::new(
        "Competition name",
        &setup.name_draft,
        "e.g. Autumn District Camp",
        |value| Message::Setup(SetupMessage::NameChanged(value)),
    )
    .on_submit(Message::Setup(SetupMessage::NameSubmitted))
    .max_length(MAX_CHARS_NAME)
    .required(true)
    .error(if setup.name_draft.trim().is_empty() {
        Some("A name is required")
    } else {
        None
    })
    .view();

    let date_field = TextField::new(
        "Event date",
        &setup.date_draft,
        "YYYY-MM-DD",
        |value| Message::Setup(SetupMessage::DateChanged(value)),
    )
    .on_submit(Message::Setup(SetupMessage::DateSubmitted))
    .view();

    let mut section_chips = row![].spacing(SPACING_XS);
    for section in ScoutSection::ALL {
        let selected = competition.sections.contains(&section);
        section_chips = section_chips.push(chip(
            section.as_str(),
            selected,
            Message::Setup(SetupMessage::SectionToggled(section)),
        ));
    }

    let sections_block = column![
        text("Open to sections")
            .size(FONT_SIZE_SMALL)
            .color(c.text_secondary),
        Space::new().height(SPACING_XS),
        section_chips,
        Space::new().height(SPACING_XS),
        text("Patrols can only be added for sections the competition is open to")
            .size(FONT_SIZE_CAPTION)
            .color(c.text_muted),
    ];

    column![
        name_field,
        Space::new().height(SPACING_LG),
        date_field,
        Space::new().height(SPACING_XS),
        text("Press Enter to apply the date; leave empty while still planning")
            .size(FONT_SIZE_CAPTION)
            .color(c.text_muted),
        Space::new().height(SPACING_LG),
        sections_block,
        Space::new().height(SPACING_LG),
        text(format!(
            "Created {}",
            competition.created_at.format("%d %B %Y")
        ))
        .size(FONT_SIZE_CAPTION)
        .color(c.text_disabled),
        Space::new().height(SPACING_SM),
    ]
    .width(Length::Fill)
    .into()
}
