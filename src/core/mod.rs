//! Shared low-level helpers.

pub mod text_window;

pub use text_window::{display_width, truncate_to_width, wrap_to_width};
