//! File I/O for competition persistence.
//!
//! Saving always goes through an atomic temp-file write; loading validates
//! the header before touching the payload.

mod load;
mod save;

pub use load::{load_competition, load_competition_async};
pub use save::{save_competition, save_competition_async};
