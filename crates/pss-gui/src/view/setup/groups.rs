//! Groups tab: inline add plus the roster of Scout groups.

use iced::widget::{Space, button, column, container, row, text, text_input};
use iced::{Alignment, Border, Element, Length};
use iced_fonts::lucide;
use pss_model::{Competition, ScoutGroup};

use crate::component::EmptyState;
use crate::message::{Message, SetupMessage};
use crate::state::SetupState;
use crate::theme::{
    BORDER_RADIUS_MD, BORDER_RADIUS_SM, BORDER_WIDTH_THIN, FONT_SIZE_BODY, FONT_SIZE_CAPTION,
    FONT_SIZE_SMALL, SPACING_MD, SPACING_SM, SPACING_XS, button_danger, button_primary,
    button_secondary, colors,
};

/// Render the groups tab.
pub fn view_groups<'a>(
    competition: &'a Competition,
    setup: &'a SetupState,
) -> Element<'a, Message> {
    let c = colors();

    let add_row = row![
        container(
            text_input("e.g. 1st Hilltop Scout Group", &setup.group_add_name)
                .on_input(|value| Message::Setup(SetupMessage::GroupAddNameChanged(value)))
                .on_submit(Message::Setup(SetupMessage::AddGroup))
                .padding([SPACING_SM, SPACING_MD])
                .size(FONT_SIZE_BODY)
                .style(input_style),
        )
        .width(Length::Fill),
        Space::new().width(SPACING_SM),
        button(
            row![
                lucide::plus().size(14).color(c.text_on_accent),
                Space::new().width(SPACING_XS),
                text("Add Group").size(FONT_SIZE_SMALL),
            ]
            .align_y(Alignment::Center),
        )
        .on_press_maybe(
            (!setup.group_add_name.trim().is_empty())
                .then_some(Message::Setup(SetupMessage::AddGroup)),
        )
        .padding([SPACING_SM, SPACING_MD])
        .style(button_primary),
    ]
    .align_y(Alignment::Center);

    let groups = competition.groups_by_name();
    let body: Element<'_, Message> = if groups.is_empty() {
        EmptyState::new(
            lucide::house().size(32).color(c.text_disabled),
            "No groups yet",
            "Patrols belong to a Scout group; add the groups attending",
        )
        .view()
    } else {
        let mut list = column![].width(Length::Fill);
        for group in groups {
            list = list.push(group_card(competition, setup, group));
            list = list.push(Space::new().height(SPACING_SM));
        }
        list.into()
    };

    column![add_row, Space::new().height(SPACING_MD), body]
        .width(Length::Fill)
        .into()
}

fn group_card<'a>(
    competition: &'a Competition,
    setup: &'a SetupState,
    group: &'a ScoutGroup,
) -> Element<'a, Message> {
    let c = colors();

    let editing = setup
        .group_form
        .as_ref()
        .filter(|form| form.id == group.id);

    let content: Element<'_, Message> = if let Some(form) = editing {
        row![
            container(
                text_input("Group name", &form.name)
                    .on_input(|value| Message::Setup(SetupMessage::GroupNameChanged(value)))
                    .on_submit(Message::Setup(SetupMessage::SaveGroup))
                    .padding([SPACING_XS, SPACING_SM])
                    .size(FONT_SIZE_BODY)
                    .style(input_style),
            )
            .width(Length::Fill),
            Space::new().width(SPACING_SM),
            button(lucide::check().size(14).color(c.text_on_accent))
                .on_press_maybe(
                    (!form.name.trim().is_empty())
                        .then_some(Message::Setup(SetupMessage::SaveGroup)),
                )
                .padding(SPACING_XS)
                .style(button_primary),
            Space::new().width(SPACING_XS),
            button(lucide::x().size(14).color(c.text_secondary))
                .on_press(Message::Setup(SetupMessage::CancelGroupForm))
                .padding(SPACING_XS)
                .style(button_secondary),
        ]
        .align_y(Alignment::Center)
        .into()
    } else {
        let patrol_count = competition.patrols_in_group(group.id).len();
        let caption = match patrol_count {
            0 => "No patrols yet".to_string(),
            1 => "1 patrol".to_string(),
            n => format!("{n} patrols"),
        };

        row![
            column![
                text(&group.name).size(FONT_SIZE_BODY).color(c.text_primary),
                text(caption).size(FONT_SIZE_CAPTION).color(c.text_muted),
            ]
            .spacing(2.0)
            .width(Length::Fill),
            Space::new().width(SPACING_SM),
            button(lucide::pencil().size(14).color(c.text_secondary))
                .on_press(Message::Setup(SetupMessage::EditGroup(group.id)))
                .padding(SPACING_XS)
                .style(button_secondary),
            Space::new().width(SPACING_XS),
            button(lucide::trash().size(14).color(c.status_error))
                .on_press(Message::Setup(SetupMessage::DeleteGroupClicked(group.id)))
                .padding(SPACING_XS)
                .style(button_danger),
        ]
        .align_y(Alignment::Center)
        .into()
    };

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

fn input_style(_theme: &iced::Theme, status: text_input::Status) -> text_input::Style {
    let c = colors();
    let border_color = match status {
        text_input::Status::Focused { .. } => c.border_focused,
        _ => c.border_default,
    };
    text_input::Style {
        background: c.background_elevated.into(),
        border: Border {
            radius: BORDER_RADIUS_SM.into(),
            width: BORDER_WIDTH_THIN,
            color: border_color,
        },
        icon: c.text_muted,
        placeholder: c.text_disabled,
        value: c.text_primary,
        selection: iced::Color {
            a: 0.15,
            ..c.accent_primary
        },
    }
}
