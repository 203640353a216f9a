//! kpi-column: view-model and layout engine for KPI column charts.
//!
//! This crate contains the pure computation behind a categorical bar chart
//! with optional target lines, forecast bars, performance zones, and a
//! dynamic legend. Rendering, selection state, and text measurement stay on
//! the host side; the engine only decides what values, colors, and positions
//! should be drawn.

pub mod api;
pub mod core;
pub mod error;
pub mod telemetry;

pub use api::{ChartUpdate, build_update};
pub use error::{ChartError, ChartResult};
