//! Embeddable core library for dltrend.
//!
//! Provides a clap-free, I/O-abstracted entry point for rendering the
//! downloads trend chart.
//!
//! # Port traits
//!
//! All I/O is abstracted behind port traits in [`ports`]:
//! - [`Clock`](ports::Clock): the date stamped on the trailing "unreleased" record
//! - [`WritePort`](ports::WritePort): write files and create directories
//!
//! The [`adapters`] module provides the default wall-clock and filesystem implementations.
//!
//! # Entry points
//!
//! - [`run_render`](pipeline::run_render): build the series and encode the PNG
//! - [`write_chart`](pipeline::write_chart): persist the PNG, creating its directory
//! - [`run_summary`](pipeline::run_summary): the series as a table, without drawing

pub mod adapters;
pub mod pipeline;
pub mod ports;
pub mod settings;

// Re-exported so embedders don't need the domain/render crates directly.
pub use dltrend_domain::{AxisPadding, LabelOffset, LabelPlacement, Trend};
pub use dltrend_render::ChartStyle;
