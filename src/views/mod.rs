//! Rendering of hosted log tabs (ratatui).

pub mod log_table;
pub mod tab_bar;

pub use log_table::{fit_column_widths, LogTableWidget};
pub use tab_bar::TabBar;
