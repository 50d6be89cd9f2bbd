//! cwlogs - log group / log stream tab windows
//!
//! Module layout:
//! - core: width-aware text helpers
//! - kernel: headless core (resource keys, tab registry, log window, table model)
//! - kernel::services: ports (host, factory, source, formatting) and adapters
//! - views / tui: ratatui front end (feature `tui`)

pub mod core;
pub mod kernel;
#[cfg(feature = "tui")]
pub mod tui;
#[cfg(feature = "tui")]
pub mod views;
