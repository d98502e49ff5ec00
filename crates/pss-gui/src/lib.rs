//! Patrol Score Studio - GUI Library
//!
//! Core application types and modules for the Patrol Score Studio desktop
//! application.
//!
//! Built with Iced 0.14.0 using the Elm architecture.

pub mod app;
pub mod component;
pub mod error;
pub mod handler;
pub mod message;
pub mod state;
pub mod theme;
pub mod view;
