//! Reusable UI components for Patrol Score Studio.
//!
//! Building blocks for constructing views:
//!
//! - **Scoring**: [`ScoreEntry`], [`save_indicator`]
//! - **Layout**: [`tab_bar`], [`PageHeader`]
//! - **Overlays**: [`modal`]
//! - **Form**: [`TextField`], [`chip`]
//! - **Feedback**: [`EmptyState`], [`ProgressBar`], [`view_toast`]
//! - **Icons**: use `iced_fonts::lucide::*` directly (see <https://lucide.dev/icons/>)
//!
//! Components use the builder pattern and return `Element<M>`, keeping
//! message types generic so they can be reused across screens.

mod empty_state;
mod modal;
mod page_header;
mod progress_bar;
mod save_indicator;
mod score_entry;
mod section_chip;
mod tab_bar;
mod text_field;
mod toast;

pub use empty_state::EmptyState;
pub use modal::modal;
pub use page_header::PageHeader;
pub use progress_bar::ProgressBar;
pub use save_indicator::save_indicator;
pub use score_entry::ScoreEntry;
pub use section_chip::{badge, chip};
pub use tab_bar::{Tab, tab_bar};
pub use text_field::TextField;
pub use toast::{ToastMessage, ToastState, ToastType, view_toast};
