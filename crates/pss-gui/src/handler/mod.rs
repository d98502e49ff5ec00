//! Message handler architecture for the Iced GUI.
//!
//! Each feature area gets its own handler so `App::update()` stays a thin
//! dispatch table. Handlers implement [`MessageHandler`] for their message
//! type:
//!
//! ```ignore
//! pub struct ScoringHandler;
//!
//! impl MessageHandler<ScoringMessage> for ScoringHandler {
//!     fn handle(&self, state: &mut AppState, msg: ScoringMessage) -> Task<Message> {
//!         match msg {
//!             ScoringMessage::StationSelected(id) => { /* ... */ }
//!             // ...
//!         }
//!     }
//! }
//! ```
//!
//! The main `App::update()` dispatches to the appropriate handler:
//!
//! ```ignore
//! pub fn update(&mut self, message: Message) -> Task<Message> {
//!     match message {
//!         Message::Home(msg) => HomeHandler.handle(&mut self.state, msg),
//!         Message::Scoring(msg) => ScoringHandler.handle(&mut self.state, msg),
//!         // ...
//!     }
//! }
//! ```
//!
//! Cross-cutting flows (saving, loading, navigation) live in the free-function
//! modules [`save`] and [`navigation`] because several handlers and the root
//! update loop all reach for them.

mod dialog;
mod home;
pub mod navigation;
pub mod save;
mod scoring;
mod settings;
mod setup;

use iced::Task;

use crate::message::Message;
use crate::state::AppState;

pub use dialog::DialogHandler;
pub use home::HomeHandler;
pub use scoring::ScoringHandler;
pub use settings::SettingsHandler;
pub use setup::SetupHandler;

/// Trait for handling messages in the Iced architecture.
///
/// Each handler is responsible for a single message type and receives the
/// full application state, which keeps handlers independently testable
/// without spinning up a window.
pub trait MessageHandler<M> {
    /// Handle a message, potentially mutating state and returning a follow-up task.
    ///
    /// Returns a `Task<Message>` for any async follow-up work, or
    /// `Task::none()` if handling completed synchronously.
    fn handle(&self, state: &mut AppState, msg: M) -> Task<Message>;
}
