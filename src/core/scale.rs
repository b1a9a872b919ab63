use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Linear domain-to-pixel mapping with an explicit output range.
///
/// The range may be inverted (`range.0 > range.1`) for screen-space y axes.
/// A collapsed domain (`domain.0 == domain.1`) is legal and maps every value
/// to the range midpoint, so single-record or constant-column datasets still
/// lay out. Construction validates the domain once; mapping afterwards is a
/// pure deterministic function of the input value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
    range_start: f64,
    range_end: f64,
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> ChartResult<Self> {
        let (domain_start, domain_end) = domain;
        let (range_start, range_end) = range;

        if !domain_start.is_finite() || !domain_end.is_finite() {
            return Err(ChartError::InvalidData(
                "scale domain must be finite".to_owned(),
            ));
        }
        if !range_start.is_finite() || !range_end.is_finite() {
            return Err(ChartError::InvalidData(
                "scale range must be finite".to_owned(),
            ));
        }

        Ok(Self {
            domain_start,
            domain_end,
            range_start,
            range_end,
        })
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    /// Maps a domain value to its pixel position.
    ///
    /// `domain.0` maps to `range.0` and `domain.1` to `range.1`; values in
    /// between interpolate linearly. A collapsed domain maps everything to
    /// the range midpoint.
    pub fn position(self, value: f64) -> ChartResult<f64> {
        if !value.is_finite() {
            return Err(ChartError::InvalidData("value must be finite".to_owned()));
        }

        let span = self.domain_end - self.domain_start;
        if span == 0.0 {
            return Ok((self.range_start + self.range_end) / 2.0);
        }
        let normalized = (value - self.domain_start) / span;
        Ok(self.range_start + normalized * (self.range_end - self.range_start))
    }

    /// Evenly spaced tick values across the domain, endpoints included.
    #[must_use]
    pub fn tick_values(self, count: usize) -> Vec<f64> {
        if count == 0 {
            return vec![self.domain_start];
        }

        let span = self.domain_end - self.domain_start;
        (0..=count)
            .map(|i| self.domain_start + span * (i as f64) / (count as f64))
            .collect()
    }
}
