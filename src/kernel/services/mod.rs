//! Services layer (ports + adapters).
//!
//! - `ports`: contracts the log window core is written against.
//! - `adapters`: tokio, chrono, filesystem and in-memory implementations.
//! - `bus`: the single-consumer queue drained on the UI context.

pub mod adapters;
pub mod bus;
pub mod ports;

pub use bus::{ui_bus, UiBusReceiver, UiBusSender, UiMessage};
