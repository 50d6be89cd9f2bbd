//! Terminal integration (crossterm). Kept apart from `kernel` so the core has
//! no terminal dependency.

pub mod terminal_guard;

pub use terminal_guard::{restore_on_panic, TerminalGuard, TerminalRestorer};
