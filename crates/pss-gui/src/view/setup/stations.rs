//! Stations tab: list of activity bases and the station editor form.

use iced::widget::{Space, button, column, container, row, text, toggler};
use iced::{Alignment, Border, Element, Length};
use iced_fonts::lucide;
use pss_model::{Competition, ScoutSection, Station};

use crate::component::{EmptyState, TextField, badge, chip};
use crate::message::{Message, SetupMessage};
use crate::state::{SetupState, StationForm};
use crate::theme::{
    BORDER_RADIUS_MD, BORDER_WIDTH_THIN, FONT_SIZE_BODY, FONT_SIZE_CAPTION, FONT_SIZE_SMALL,
    FONT_SIZE_SUBTITLE, MAX_CHARS_DESCRIPTION, MAX_CHARS_NAME, SPACING_LG, SPACING_MD, SPACING_SM,
    SPACING_XS, button_danger, button_primary, button_secondary, colors,
};

/// Render the stations tab.
pub fn view_stations<'a>(
    competition: &'a Competition,
    setup: &'a SetupState,
) -> Element<'a, Message> {
    match &setup.station_form {
        Some(form) => view_station_form(form),
        None => view_station_list(competition),
    }
}

fn view_station_list(competition: &Competition) -> Element<'_, Message> {
    let c = colors();
    let stations = competition.stations_by_name();

    let new_button = button(
        row![
            lucide::plus().size(14).color(c.text_on_accent),
            Space::new().width(SPACING_XS),
            text("New Station").size(FONT_SIZE_SMALL),
        ]
        .align_y(Alignment::Center),
    )
    .on_press(Message::Setup(SetupMessage::NewStation))
    .padding([SPACING_XS, SPACING_MD])
    .style(button_primary);

    if stations.is_empty() {
        return EmptyState::new(
            lucide::list().size(32).color(c.text_disabled),
            "No stations yet",
            "Add the activity bases patrols will rotate through",
        )
        .action(new_button)
        .view();
    }

    let header = row![
        text(format!("{} stations", stations.len()))
            .size(FONT_SIZE_SMALL)
            .color(c.text_muted),
        Space::new().width(Length::Fill),
        new_button,
    ]
    .align_y(Alignment::Center);

    let mut list = column![header, Space::new().height(SPACING_MD)].width(Length::Fill);
    for station in stations {
        list = list.push(station_card(station));
        list = list.push(Space::new().height(SPACING_SM));
    }

    list.into()
}

fn station_card(station: &Station) -> Element<'_, Message> {
    let c = colors();

    let sections_label = match &station.allowed_sections {
        None => "All sections".to_string(),
        Some(sections) => sections
            .iter()
            .map(|s| s.short_label())
            .collect::<Vec<_>>()
            .join(", "),
    };

    let mut info = column![
        text(&station.name).size(FONT_SIZE_BODY).color(c.text_primary),
    ]
    .spacing(SPACING_XS)
    .width(Length::Fill);

    if !station.description.is_empty() {
        info = info.push(
            text(&station.description)
                .size(FONT_SIZE_CAPTION)
                .color(c.text_muted),
        );
    }

    let mut meta = row![
        badge(format!("Max {}", station.max_score), c.accent_primary),
        Space::new().width(SPACING_XS),
        text(sections_label)
            .size(FONT_SIZE_CAPTION)
            .color(c.text_muted),
    ]
    .align_y(Alignment::Center);
    if let Some(email) = &station.leader_email {
        meta = meta.push(Space::new().width(SPACING_SM));
        meta = meta.push(
            text(email.clone())
                .size(FONT_SIZE_CAPTION)
                .color(c.text_disabled),
        );
    }
    info = info.push(meta);

    let edit_btn = button(lucide::pencil().size(14).color(c.text_secondary))
        .on_press(Message::Setup(SetupMessage::EditStation(station.id)))
        .padding(SPACING_XS)
        .style(button_secondary);
    let delete_btn = button(lucide::trash().size(14).color(c.status_error))
        .on_press(Message::Setup(SetupMessage::DeleteStationClicked(
            station.id,
        )))
        .padding(SPACING_XS)
        .style(button_danger);

    container(
        row![
            info,
            Space::new().width(SPACING_SM),
            edit_btn,
            Space::new().width(SPACING_XS),
            delete_btn,
        ]
        .align_y(Alignment::Center),
    )
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

fn view_station_form(form: &StationForm) -> Element<'_, Message> {
    let c = colors();

    let title = if form.id.is_some() {
        "Edit Station"
    } else {
        "New Station"
    };

    let name_field = TextField::new("Name", &form.name, "e.g. Knots", |value| {
        Message::Setup(SetupMessage::StationNameChanged(value))
    })
    .max_length(MAX_CHARS_NAME)
    .required(true)
    .error(if form.name.trim().is_empty() {
        Some("A name is required")
    } else {
        None
    })
    .view();

    let description_field = TextField::new(
        "Description",
        &form.description,
        "What patrols do at this station",
        |value| Message::Setup(SetupMessage::StationDescriptionChanged(value)),
    )
    .max_length(MAX_CHARS_DESCRIPTION)
    .view();

    let max_field = TextField::new("Maximum score", &form.max_score, "10", |value| {
        Message::Setup(SetupMessage::StationMaxChanged(value))
    })
    .required(true)
    .error(if form.parsed_max().is_none() {
        Some("Enter a whole number greater than 0")
    } else {
        None
    })
    .view();

    let email_field = TextField::new(
        "Leader email",
        &form.leader_email,
        "leader@example.org (optional)",
        |value| Message::Setup(SetupMessage::StationEmailChanged(value)),
    )
    .view();

    let allow_all_row = row![
        column![
            text("Open to all sections")
                .size(FONT_SIZE_BODY)
                .color(c.text_primary),
            text("Turn off to restrict which sections attempt this station")
                .size(FONT_SIZE_CAPTION)
                .color(c.text_muted),
        ]
        .spacing(2.0)
        .width(Length::Fill),
        toggler(form.allow_all)
            .on_toggle(|v| Message::Setup(SetupMessage::StationAllowAllToggled(v))),
    ]
    .align_y(Alignment::Center);

    let mut sections_block = column![];
    if !form.allow_all {
        let mut chips = row![].spacing(SPACING_XS);
        for section in ScoutSection::ALL {
            chips = chips.push(chip(
                section.as_str(),
                form.selected_sections.contains(&section),
                Message::Setup(SetupMessage::StationSectionToggled(section)),
            ));
        }
        sections_block = sections_block.push(Space::new().height(SPACING_SM));
        sections_block = sections_block.push(chips);
        if form.selected_sections.is_empty() {
            sections_block = sections_block.push(Space::new().height(SPACING_XS));
            sections_block = sections_block.push(
                text("Pick at least one section")
                    .size(FONT_SIZE_CAPTION)
                    .color(c.status_error),
            );
        }
    }

    let buttons = row![
        Space::new().width(Length::Fill),
        button(text("Cancel").size(FONT_SIZE_BODY))
            .on_press(Message::Setup(SetupMessage::CancelStationForm))
            .padding([SPACING_XS, SPACING_MD])
            .style(button_secondary),
        Space::new().width(SPACING_SM),
        button(text("Save Station").size(FONT_SIZE_BODY))
            .on_press_maybe(
                form.is_valid()
                    .then_some(Message::Setup(SetupMessage::SaveStation)),
            )
            .padding([SPACING_XS, SPACING_MD])
            .style(button_primary),
    ]
    .align_y(Alignment::Center);

    column![
        text(title).size(FONT_SIZE_SUBTITLE).color(c.text_primary),
        Space::new().height(SPACING_LG),
        name_field,
        Space::new().height(SPACING_MD),
        description_field,
        Space::new().height(SPACING_MD),
        row![
            container(max_field).width(Length::FillPortion(1)),
            Space::new().width(SPACING_MD),
            container(email_field).width(Length::FillPortion(2)),
        ],
        Space::new().height(SPACING_MD),
        allow_all_row,
        sections_block,
        Space::new().height(SPACING_LG),
        buttons,
    ]
    .width(Length::Fill)
    .into()
}
