//! View module for Patrol Score Studio.
//!
//! Views are pure functions that render UI from `AppState`. No view
//! mutates state; everything flows back through messages.
//!
//! ## Module Structure
//!
//! - `home/` - Welcome screen and competition overview
//! - `setup/` - Tabbed competition setup (details, stations, groups, patrols)
//! - `scoring.rs` - Master-detail score entry
//! - `settings.rs` - Application settings
//! - `dialog.rs` - In-window modal dialogs

pub mod dialog;
pub mod home;
pub mod scoring;
pub mod settings;
pub mod setup;

pub use dialog::view_dialog;
pub use home::view_home;
pub use scoring::view_scoring;
pub use settings::view_settings;
pub use setup::view_setup;
