//! Patrols tab: the full patrol roster grouped by Scout group, and the
//! patrol editor form.

use iced::widget::{Space, button, column, container, pick_list, row, text};
use iced::{Alignment, Border, Element, Length};
use iced_fonts::lucide;
use pss_model::{Competition, Patrol, ScoutSection};

use crate::component::{EmptyState, TextField, badge};
use crate::message::{Message, SetupMessage};
use crate::state::{GroupChoice, PatrolForm, SetupState, SetupTab};
use crate::theme::{
    BORDER_RADIUS_MD, BORDER_WIDTH_THIN, FONT_SIZE_BODY, FONT_SIZE_CAPTION, FONT_SIZE_SMALL,
    FONT_SIZE_SUBTITLE, MAX_CHARS_NAME, SPACING_LG, SPACING_MD, SPACING_SM, SPACING_XS,
    button_danger, button_primary, button_secondary, colors,
};

/// Render the patrols tab.
pub fn view_patrols<'a>(
    competition: &'a Competition,
    setup: &'a SetupState,
) -> Element<'a, Message> {
    match &setup.patrol_form {
        Some(form) => view_patrol_form(competition, form),
        None => view_patrol_list(competition),
    }
}

fn view_patrol_list(competition: &Competition) -> Element<'_, Message> {
    let c = colors();

    // Patrols need a group to belong to.
    if competition.group_count() == 0 {
        return EmptyState::new(
            lucide::users().size(32).color(c.text_disabled),
            "Add a group first",
            "Every patrol belongs to a Scout group",
        )
        .action(
            button(text("Go to Groups").size(FONT_SIZE_BODY))
                .on_press(Message::Setup(SetupMessage::TabSelected(SetupTab::Groups)))
                .padding([SPACING_XS, SPACING_MD])
                .style(button_secondary),
        )
        .view();
    }

    let new_button = button(
        row![
            lucide::plus().size(14).color(c.text_on_accent),
            Space::new().width(SPACING_XS),
            text("New Patrol").size(FONT_SIZE_SMALL),
        ]
        .align_y(Alignment::Center),
    )
    .on_press(Message::Setup(SetupMessage::NewPatrol))
    .padding([SPACING_XS, SPACING_MD])
    .style(button_primary);

    if competition.patrol_count() == 0 {
        return EmptyState::new(
            lucide::users().size(32).color(c.text_disabled),
            "No patrols yet",
            "Add the patrols competing at each station",
        )
        .action(new_button)
        .view();
    }

    let header = row![
        text(format!("{} patrols", competition.patrol_count()))
            .size(FONT_SIZE_SMALL)
            .color(c.text_muted),
        Space::new().width(Length::Fill),
        new_button,
    ]
    .align_y(Alignment::Center);

    let mut list = column![header, Space::new().height(SPACING_MD)].width(Length::Fill);
    for group in competition.groups_by_name() {
        let patrols = competition.patrols_in_group(group.id);
        if patrols.is_empty() {
            continue;
        }
        list = list.push(
            text(&group.name)
                .size(FONT_SIZE_SMALL)
                .color(c.text_secondary),
        );
        list = list.push(Space::new().height(SPACING_XS));
        for patrol in patrols {
            list = list.push(patrol_card(patrol));
            list = list.push(Space::new().height(SPACING_XS));
        }
        list = list.push(Space::new().height(SPACING_SM));
    }

    list.into()
}

fn patrol_card(patrol: &Patrol) -> Element<'_, Message> {
    let c = colors();

    container(
        row![
            text(&patrol.name).size(FONT_SIZE_BODY).color(c.text_primary),
            Space::new().width(SPACING_SM),
            badge(patrol.section.as_str(), c.accent_primary),
            Space::new().width(Length::Fill),
            button(lucide::pencil().size(14).color(c.text_secondary))
                .on_press(Message::Setup(SetupMessage::EditPatrol(patrol.id)))
                .padding(SPACING_XS)
                .style(button_secondary),
            Space::new().width(SPACING_XS),
            button(lucide::trash().size(14).color(c.status_error))
                .on_press(Message::Setup(SetupMessage::DeletePatrol(patrol.id)))
                .padding(SPACING_XS)
                .style(button_danger),
        ]
        .align_y(Alignment::Center),
    )
    .padding([SPACING_SM, SPACING_MD])
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

fn view_patrol_form<'a>(
    competition: &'a Competition,
    form: &'a PatrolForm,
) -> Element<'a, Message> {
    let c = colors();

    let title = if form.id.is_some() {
        "Edit Patrol"
    } else {
        "New Patrol"
    };

    let name_field = TextField::new("Name", &form.name, "e.g. Eagles", |value| {
        Message::Setup(SetupMessage::PatrolNameChanged(value))
    })
    .max_length(MAX_CHARS_NAME)
    .required(true)
    .error(if form.name.trim().is_empty() {
        Some("A name is required")
    } else {
        None
    })
    .view();

    let group_options: Vec<GroupChoice> = competition
        .groups_by_name()
        .iter()
        .map(|group| GroupChoice {
            id: group.id,
            name: group.name.clone(),
        })
        .collect();
    let group_picker = column![
        text("Group").size(FONT_SIZE_SMALL).color(c.text_secondary),
        Space::new().height(SPACING_XS),
        pick_list(group_options, form.group.clone(), |choice| {
            Message::Setup(SetupMessage::PatrolGroupSelected(choice))
        })
        .placeholder("Pick a group")
        .width(Length::Fill),
    ];

    // Fall back to every section if the competition line-up was emptied.
    let section_options = if competition.sections.is_empty() {
        ScoutSection::ALL.to_vec()
    } else {
        competition.sections.clone()
    };
    let section_picker = column![
        text("Section").size(FONT_SIZE_SMALL).color(c.text_secondary),
        Space::new().height(SPACING_XS),
        pick_list(section_options, Some(form.section), |section| {
            Message::Setup(SetupMessage::PatrolSectionSelected(section))
        })
        .width(Length::Fill),
    ];

    let buttons = row![
        Space::new().width(Length::Fill),
        button(text("Cancel").size(FONT_SIZE_BODY))
            .on_press(Message::Setup(SetupMessage::CancelPatrolForm))
            .padding([SPACING_XS, SPACING_MD])
            .style(button_secondary),
        Space::new().width(SPACING_SM),
        button(text("Save Patrol").size(FONT_SIZE_BODY))
            .on_press_maybe(
                form.is_valid()
                    .then_some(Message::Setup(SetupMessage::SavePatrol)),
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
        row![
            container(group_picker).width(Length::FillPortion(1)),
            Space::new().width(SPACING_MD),
            container(section_picker).width(Length::FillPortion(1)),
        ],
        Space::new().height(SPACING_XS),
        text("Patrols only appear at stations their section is allowed to attempt")
            .size(FONT_SIZE_CAPTION)
            .color(c.text_muted),
        Space::new().height(SPACING_LG),
        buttons,
    ]
    .width(Length::Fill)
    .into()
}
