//! Reusable UI components

pub mod drawer;
pub mod header;
