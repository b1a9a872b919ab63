//! keyed-charts: four interactive 2-D chart components over one keyed dataset.
//!
//! Each chart adapts keyed records into chart-specific geometry, lays out
//! scales and axes once, materializes a backend-agnostic scene of draw
//! primitives, and runs a shared click/hover selection state machine whose
//! state projects to per-key visual styles.

pub mod charts;
pub mod core;
pub mod data;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use charts::{OneSidedBarChart, ParallelCoordinatesPlot, Scatterplot, TwoSidedBarChart};
pub use data::{Dataset, Record};
pub use error::{ChartError, ChartResult};
pub use interaction::{PointerEvent, SelectionState, StyleClass};
