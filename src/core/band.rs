use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

fn validate_keys_and_range(keys: &[String], range: (f64, f64)) -> ChartResult<()> {
    if keys.is_empty() {
        return Err(ChartError::InvalidData(
            "ordinal scale needs at least one key".to_owned(),
        ));
    }
    if !range.0.is_finite() || !range.1.is_finite() {
        return Err(ChartError::InvalidData(
            "scale range must be finite".to_owned(),
        ));
    }
    Ok(())
}

/// Ordinal scale mapping keys onto evenly sized bands with padding.
///
/// Inner and outer padding share one ratio, matching the banded row layout
/// of the diverging bar chart (padding 0.2). Key order is the dataset order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BandScale {
    indices: IndexMap<String, usize>,
    range_start: f64,
    step: f64,
    padding: f64,
}

impl BandScale {
    pub fn new(keys: &[String], range: (f64, f64), padding: f64) -> ChartResult<Self> {
        validate_keys_and_range(keys, range)?;
        if !padding.is_finite() || !(0.0..1.0).contains(&padding) {
            return Err(ChartError::InvalidData(
                "band padding must be in [0, 1)".to_owned(),
            ));
        }

        let mut indices = IndexMap::with_capacity(keys.len());
        for key in keys {
            if indices.insert(key.clone(), indices.len()).is_some() {
                return Err(ChartError::DuplicateKey(key.clone()));
            }
        }

        let count = keys.len() as f64;
        let span = range.1 - range.0;
        let step = span / (count + padding);

        Ok(Self {
            indices,
            range_start: range.0,
            step,
            padding,
        })
    }

    /// Pixel position of the leading edge of a key's band.
    pub fn position(&self, key: &str) -> ChartResult<f64> {
        let index = self
            .indices
            .get(key)
            .copied()
            .ok_or_else(|| ChartError::InvalidData(format!("unknown band key `{key}`")))?;
        Ok(self.range_start + self.step * (self.padding + index as f64))
    }

    #[must_use]
    pub fn bandwidth(&self) -> f64 {
        self.step * (1.0 - self.padding)
    }

    #[must_use]
    pub fn step(&self) -> f64 {
        self.step
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.indices.keys().map(String::as_str)
    }
}

/// Ordinal scale mapping keys onto evenly spaced points.
///
/// Padding is expressed in steps of outer margin; padding 1 leaves one full
/// half-step on each side, which is how the parallel-coordinates plot anchors
/// its two axis verticals inside the drawing area.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointScale {
    indices: IndexMap<String, usize>,
    range_start: f64,
    step: f64,
    padding: f64,
}

impl PointScale {
    pub fn new(keys: &[String], range: (f64, f64), padding: f64) -> ChartResult<Self> {
        validate_keys_and_range(keys, range)?;
        if !padding.is_finite() || padding < 0.0 {
            return Err(ChartError::InvalidData(
                "point padding must be finite and >= 0".to_owned(),
            ));
        }

        let mut indices = IndexMap::with_capacity(keys.len());
        for key in keys {
            if indices.insert(key.clone(), indices.len()).is_some() {
                return Err(ChartError::DuplicateKey(key.clone()));
            }
        }

        let count = keys.len() as f64;
        let span = range.1 - range.0;
        let divisor = (count - 1.0 + padding * 2.0).max(1.0);
        let step = span / divisor;

        Ok(Self {
            indices,
            range_start: range.0,
            step,
            padding,
        })
    }

    pub fn position(&self, key: &str) -> ChartResult<f64> {
        let index = self
            .indices
            .get(key)
            .copied()
            .ok_or_else(|| ChartError::InvalidData(format!("unknown point key `{key}`")))?;
        Ok(self.range_start + self.step * (self.padding + index as f64))
    }

    #[must_use]
    pub fn step(&self) -> f64 {
        self.step
    }
}
