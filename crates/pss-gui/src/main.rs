//! Patrol Score Studio - Desktop GUI Application
//!
//! A desktop application for scoring Scout patrol competitions: stations,
//! groups, and patrols on one side, a score sheet per station on the other.
//!
//! Built with Iced 0.14.0 using the Elm architecture (State, Message, Update, View).

use iced::Size;
use iced::window;

use pss_gui::app::App;

/// Application entry point.
///
/// Initializes logging, then runs the Iced application with the Scout theme
/// and default window settings.
pub fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    tracing::info!("Starting Patrol Score Studio");

    // exit_on_close_request: false lets update() intercept the close button
    // and ask about unsaved changes first.
    iced::application(App::new, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .subscription(App::subscription)
        .font(iced_fonts::LUCIDE_FONT_BYTES)
        .window(window::Settings {
            size: Size::new(1280.0, 800.0),
            min_size: Some(Size::new(1024.0, 600.0)),
            icon: load_icon(),
            exit_on_close_request: false,
            ..Default::default()
        })
        .run()
}

/// Load the application icon from embedded PNG data.
fn load_icon() -> Option<window::Icon> {
    let icon_data = include_bytes!("../assets/icon.png");
    window::icon::from_file_data(icon_data, Some(image::ImageFormat::Png)).ok()
}
