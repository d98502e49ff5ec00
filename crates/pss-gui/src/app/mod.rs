//! Application wiring for Patrol Score Studio.
//!
//! Implements the Elm loop on Iced 0.14: all state changes happen in
//! [`App::update`], views are pure functions over [`AppState`]. The window
//! close request is intercepted so unsaved changes can block the quit.
//!
//! # Module Structure
//!
//! - `handler/` - Message handlers organized by screen
//! - `view/` - Pure view functions, one module per screen
//! - `state/` - [`AppState`] and per-screen view state

use iced::keyboard;
use iced::keyboard::key::Named;
use iced::widget::{Space, column, container, row, stack};
use iced::{Element, Subscription, Task, Theme, window};

use crate::component::{ToastState, view_toast};
use crate::error::GuiError;
use crate::handler::{
    DialogHandler, HomeHandler, MessageHandler, ScoringHandler, SettingsHandler, SetupHandler,
    navigation, save,
};
use crate::message::{DialogMessage, Message, ToastMessage};
use crate::state::{AppState, DialogState, PendingAction, Settings, ViewState};
use crate::theme::{current_config, scout_theme, set_theme};
use crate::view::{view_dialog, view_home, view_scoring, view_settings, view_setup};

// =============================================================================
// APPLICATION
// =============================================================================

/// Main application struct.
///
/// The root of the Iced application. It holds the application state and
/// implements the Elm architecture methods.
pub struct App {
    /// All application state.
    pub state: AppState,
}

impl App {
    /// Create a new application instance.
    ///
    /// Called once at startup. Loads settings from disk and seeds the
    /// thread-local theme context before the first view call.
    pub fn new() -> (Self, Task<Message>) {
        let settings = Settings::load();
        let state = AppState::with_settings(settings);
        set_theme(state.theme_config());

        (Self { state }, Task::none())
    }

    /// Update application state in response to a message.
    ///
    /// This is the core of the Elm architecture; every state change runs
    /// through here.
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            // =================================================================
            // Navigation
            // =================================================================
            Message::Navigate(screen) => navigation::navigate(&mut self.state, screen),

            // =================================================================
            // Screen messages
            // =================================================================
            Message::Home(msg) => HomeHandler.handle(&mut self.state, msg),
            Message::Setup(msg) => SetupHandler.handle(&mut self.state, msg),
            Message::Scoring(msg) => ScoringHandler.handle(&mut self.state, msg),
            Message::Settings(msg) => SettingsHandler.handle(&mut self.state, msg),
            Message::Dialog(msg) => DialogHandler.handle(&mut self.state, msg),

            // =================================================================
            // Competition lifecycle
            // =================================================================
            // New and Close both end on the welcome screen, so they share the
            // unsaved-changes gate.
            Message::NewCompetition | Message::CloseCompetition => {
                save::handle_new_competition(&mut self.state)
            }

            Message::OpenCompetition => save::handle_open_competition(&mut self.state),

            Message::OpenPathSelected(path) => {
                save::handle_open_path_selected(&mut self.state, path)
            }

            Message::CompetitionLoaded { path, result } => {
                save::handle_competition_loaded(&mut self.state, path, result)
            }

            // =================================================================
            // Saving
            // =================================================================
            Message::SaveCompetition => save::handle_save_competition(&mut self.state),

            Message::SaveCompetitionAs => save::handle_save_competition_as(&mut self.state),

            Message::SavePathSelected(path) => {
                save::handle_save_path_selected(&mut self.state, path)
            }

            Message::CompetitionSaved { generation, result } => {
                save::handle_competition_saved(&mut self.state, generation, result)
            }

            Message::AutoSaveTick => save::handle_auto_save_tick(&mut self.state),

            // =================================================================
            // Window & system
            // =================================================================
            Message::WindowCloseRequested => {
                // Typed-but-uncommitted scores count as changes too.
                navigation::commit_open_drafts(&mut self.state);
                if self.state.dirty_tracker.is_dirty() && self.state.has_competition() {
                    self.state.dialog =
                        Some(DialogState::UnsavedChanges(PendingAction::Quit));
                    Task::none()
                } else {
                    iced::exit()
                }
            }

            Message::SystemThemeChanged(mode) => {
                self.state.system_is_dark = matches!(mode, iced::theme::Mode::Dark);
                set_theme(self.state.theme_config());
                Task::none()
            }

            Message::KeyPressed(key, modifiers) => self.handle_key_press(key, modifiers),

            // =================================================================
            // Feedback
            // =================================================================
            Message::Toast(toast_msg) => self.handle_toast_message(toast_msg),

            Message::OpenUrl(url) => {
                if let Err(e) = open::that(&url) {
                    let error = GuiError::operation("Open link", e);
                    tracing::warn!(error = %error, url = %url, "url handoff failed");
                    self.state.toast = Some(ToastState::error(error.user_message()));
                }
                Task::none()
            }

            Message::Noop => Task::none(),
        }
    }

    /// Global keyboard shortcuts.
    fn handle_key_press(
        &mut self,
        key: keyboard::Key,
        modifiers: keyboard::Modifiers,
    ) -> Task<Message> {
        match key.as_ref() {
            // Cmd/Ctrl+N: New competition
            keyboard::Key::Character("n") if modifiers.command() && !modifiers.shift() => {
                Task::done(Message::NewCompetition)
            }

            // Cmd/Ctrl+O: Open competition (.pss file)
            keyboard::Key::Character("o") if modifiers.command() => {
                Task::done(Message::OpenCompetition)
            }

            // Cmd/Ctrl+S: Save competition
            keyboard::Key::Character("s") if modifiers.command() && !modifiers.shift() => {
                if self.state.has_competition() {
                    Task::done(Message::SaveCompetition)
                } else {
                    Task::none()
                }
            }

            // Cmd/Ctrl+Shift+S: Save competition as
            keyboard::Key::Character("s") if modifiers.command() && modifiers.shift() => {
                if self.state.has_competition() {
                    Task::done(Message::SaveCompetitionAs)
                } else {
                    Task::none()
                }
            }

            // Cmd/Ctrl+W: Close competition
            keyboard::Key::Character("w") if modifiers.command() => {
                if self.state.has_competition() {
                    Task::done(Message::CloseCompetition)
                } else {
                    Task::none()
                }
            }

            // Escape: close the open dialog, otherwise back to home
            keyboard::Key::Named(Named::Escape) => {
                if self.state.dialog.is_some() {
                    Task::done(Message::Dialog(DialogMessage::Cancel))
                } else {
                    match &self.state.view {
                        ViewState::Setup(_) | ViewState::Scoring(_) | ViewState::Settings => {
                            Task::done(Message::go_home())
                        }
                        ViewState::Home(_) => Task::none(),
                    }
                }
            }

            _ => Task::none(),
        }
    }

    /// Handle toast notification messages.
    fn handle_toast_message(&mut self, msg: ToastMessage) -> Task<Message> {
        match msg {
            ToastMessage::Dismiss => {
                self.state.toast = None;
                Task::none()
            }
            ToastMessage::Action => {
                if let Some(toast) = &self.state.toast
                    && let Some(action) = &toast.action
                    && let Err(e) = open::that(&action.url)
                {
                    tracing::warn!(error = %e, url = %action.url, "toast action failed");
                }
                self.state.toast = None;
                Task::none()
            }
        }
    }

    /// Render the current screen.
    ///
    /// A pure function over state: screen content, then the toast overlay,
    /// then the modal dialog on top.
    pub fn view(&self) -> Element<'_, Message> {
        let screen: Element<'_, Message> = match &self.state.view {
            ViewState::Home(_) => view_home(&self.state),
            ViewState::Setup(_) => view_setup(&self.state),
            ViewState::Scoring(_) => view_scoring(&self.state),
            ViewState::Settings => view_settings(&self.state),
        };

        // Toast sits above the screen at the bottom-right.
        let content: Element<'_, Message> = if let Some(toast) = &self.state.toast {
            let toast_row = row![
                Space::new().width(iced::Length::Fill),
                container(view_toast(toast)).padding([0.0, 24.0]),
            ];
            let toast_overlay = column![
                Space::new().height(iced::Length::Fill),
                toast_row,
                Space::new().height(24.0),
            ];

            stack![
                container(screen)
                    .width(iced::Length::Fill)
                    .height(iced::Length::Fill),
                toast_overlay,
            ]
            .into()
        } else {
            screen
        };

        // The modal dialog wraps everything, toast included.
        match &self.state.dialog {
            Some(dialog) => view_dialog(content, dialog, &self.state),
            None => content,
        }
    }

    /// Window title with a dirty marker.
    pub fn title(&self) -> String {
        let dirty_indicator = if self.state.dirty_tracker.is_dirty() {
            " *"
        } else {
            ""
        };

        match &self.state.competition {
            Some(competition) => format!(
                "{}{} - Patrol Score Studio",
                competition.name, dirty_indicator
            ),
            None => "Patrol Score Studio".to_owned(),
        }
    }

    /// The Iced theme derived from the active configuration.
    pub fn theme(&self) -> Theme {
        scout_theme(current_config())
    }

    /// Subscribe to runtime events.
    pub fn subscription(&self) -> Subscription<Message> {
        use iced::{system, time};
        use std::time::Duration;

        // Keyboard shortcuts
        let keyboard_sub = keyboard::listen().map(|event| match event {
            keyboard::Event::KeyPressed { key, modifiers, .. } => {
                Message::KeyPressed(key, modifiers)
            }
            _ => Message::Noop,
        });

        // System theme changes (for ThemeMode::System)
        let system_theme_sub = system::theme_changes().map(Message::SystemThemeChanged);

        // Window close events (intercepted for the unsaved-changes dialog)
        let window_sub = window::close_requests().map(|_| Message::WindowCloseRequested);

        // Toast auto-dismiss timer (5 seconds)
        let toast_sub = if self.state.toast.is_some() {
            time::every(Duration::from_secs(5)).map(|_| Message::Toast(ToastMessage::Dismiss))
        } else {
            Subscription::none()
        };

        // Auto-save timer (polls every 500ms; the handler decides whether the
        // debounce window has actually elapsed)
        let auto_save_sub =
            if self.state.settings.general.auto_save.enabled && self.state.has_competition() {
                time::every(Duration::from_millis(500)).map(|_| Message::AutoSaveTick)
            } else {
                Subscription::none()
            };

        Subscription::batch([
            keyboard_sub,
            system_theme_sub,
            window_sub,
            toast_sub,
            auto_save_sub,
        ])
    }
}
