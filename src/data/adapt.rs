//! Pure reshaping of a dataset into the coordinate arrays each chart needs.
//!
//! Adapters never touch pixels; they only reorder values and compute domain
//! bounds. Empty datasets cannot reach this module (constructor invariant).

use serde::{Deserialize, Serialize};

use crate::data::Dataset;

/// Headroom factor applied above the scatterplot's per-axis maxima.
pub const SCATTER_HEADROOM: f64 = 1.1;

/// Grouped-bar input: records flattened into alternating `(x, key)`,
/// `(y, key)` entries so paired bars sit adjacent within one group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterleavedBars {
    pub entries: Vec<(f64, String)>,
    /// Max across all x and y values; the shared value-axis ceiling.
    pub ceiling: f64,
    pub keys: Vec<String>,
}

#[must_use]
pub fn interleaved(dataset: &Dataset) -> InterleavedBars {
    let mut entries = Vec::with_capacity(dataset.len() * 2);
    let mut keys = Vec::with_capacity(dataset.len());
    let mut ceiling = f64::NEG_INFINITY;

    for record in dataset.records() {
        entries.push((record.x, record.key.clone()));
        entries.push((record.y, record.key.clone()));
        ceiling = ceiling.max(record.x).max(record.y);
        keys.push(record.key.clone());
    }

    InterleavedBars {
        entries,
        ceiling,
        keys,
    }
}

/// Shared magnitude for the diverging chart: max of (max x, max y).
/// The x scale mirrors it onto `[-domain, +domain]`.
#[must_use]
pub fn diverging_domain(dataset: &Dataset) -> f64 {
    dataset
        .records()
        .iter()
        .fold(f64::NEG_INFINITY, |acc, record| {
            acc.max(record.x).max(record.y)
        })
}

/// Independent min/max per value column, for the parallel-coordinates axes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisExtents {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

#[must_use]
pub fn axis_extents(dataset: &Dataset) -> AxisExtents {
    let mut extents = AxisExtents {
        x_min: f64::INFINITY,
        x_max: f64::NEG_INFINITY,
        y_min: f64::INFINITY,
        y_max: f64::NEG_INFINITY,
    };

    for record in dataset.records() {
        extents.x_min = extents.x_min.min(record.x);
        extents.x_max = extents.x_max.max(record.x);
        extents.y_min = extents.y_min.min(record.y);
        extents.y_max = extents.y_max.max(record.y);
    }

    extents
}

/// Per-axis scatterplot ceilings: max value inflated by 10% headroom.
#[must_use]
pub fn scatter_ceilings(dataset: &Dataset) -> (f64, f64) {
    let extents = axis_extents(dataset);
    (
        extents.x_max * SCATTER_HEADROOM,
        extents.y_max * SCATTER_HEADROOM,
    )
}
