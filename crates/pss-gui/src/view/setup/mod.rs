//! Setup view - tabbed editing of the competition.
//!
//! Four tabs: details, stations, groups, patrols. Each tab either lists
//! entities or shows the open editor form; list and form never show at
//! the same time.

mod details;
mod groups;
mod patrols;
mod stations;

use iced::widget::{Space, column, container, scrollable};
use iced::{Element, Length};

use crate::component::{PageHeader, Tab, tab_bar};
use crate::message::{Message, SetupMessage};
use crate::state::{AppState, SetupTab, ViewState};
use crate::theme::{SPACING_LG, SPACING_MD, colors};

/// Render the setup view.
pub fn view_setup(state: &AppState) -> Element<'_, Message> {
    let c = colors();

    // Navigation guards against reaching setup without a competition.
    let (Some(competition), ViewState::Setup(setup)) = (&state.competition, &state.view) else {
        return Space::new().into();
    };

    let tabs = SetupTab::ALL
        .iter()
        .map(|tab| Tab::new(tab.label(), Message::Setup(SetupMessage::TabSelected(*tab))))
        .collect();

    let body = match setup.tab {
        SetupTab::Details => details::view_details(competition, setup),
        SetupTab::Stations => stations::view_stations(competition, setup),
        SetupTab::Groups => groups::view_groups(competition, setup),
        SetupTab::Patrols => patrols::view_patrols(competition, setup),
    };

    let content = column![
        PageHeader::new("Competition Setup")
            .on_back(Message::go_home())
            .view(),
        Space::new().height(SPACING_MD),
        tab_bar(tabs, setup.tab.index()),
        Space::new().height(SPACING_LG),
        scrollable(body).height(Length::Fill),
    ]
    .max_width(900.0)
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
