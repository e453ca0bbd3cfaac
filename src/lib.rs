//! Folio TUI Library
//!
//! Terminal portfolio application: routed content screens, an animated
//! navigation drawer, toast notifications, and a simulated sign-in flow
//! that persists a session record observable by other running instances.

pub mod app;
pub mod auth;
pub mod content;
pub mod menu;
pub mod notify;
pub mod session;
pub mod ui;
pub mod utils;

pub use app::App;
