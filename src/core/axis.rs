use serde::{Deserialize, Serialize};

use crate::core::scale::LinearScale;
use crate::error::ChartResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AxisOrientation {
    Left,
    Right,
    Bottom,
}

/// Tick label formatting policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TickFormat {
    Plain,
    /// Labels show `abs(value)`; the diverging bar chart mirrors its x axis
    /// onto the negative half but captions both sides with magnitudes.
    Absolute,
}

/// One generated tick: domain value, pixel position along the axis, caption.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisTick {
    pub value: f64,
    pub position: f64,
    pub label: String,
}

/// Tick generator for one linear axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Axis {
    pub orientation: AxisOrientation,
    pub scale: LinearScale,
    pub tick_count: usize,
    pub tick_size_px: f64,
    pub format: TickFormat,
}

impl Axis {
    #[must_use]
    pub fn new(orientation: AxisOrientation, scale: LinearScale) -> Self {
        Self {
            orientation,
            scale,
            tick_count: 10,
            tick_size_px: 6.0,
            format: TickFormat::Plain,
        }
    }

    #[must_use]
    pub fn with_tick_count(mut self, tick_count: usize) -> Self {
        self.tick_count = tick_count;
        self
    }

    #[must_use]
    pub fn with_tick_size(mut self, tick_size_px: f64) -> Self {
        self.tick_size_px = tick_size_px;
        self
    }

    #[must_use]
    pub fn with_format(mut self, format: TickFormat) -> Self {
        self.format = format;
        self
    }

    pub fn ticks(&self) -> ChartResult<Vec<AxisTick>> {
        let mut ticks = Vec::with_capacity(self.tick_count + 1);
        for value in self.scale.tick_values(self.tick_count) {
            let shown = match self.format {
                TickFormat::Plain => value,
                TickFormat::Absolute => value.abs(),
            };
            ticks.push(AxisTick {
                value,
                position: self.scale.position(value)?,
                label: format_tick(shown),
            });
        }
        Ok(ticks)
    }
}

/// Formats a tick value without trailing fractional noise.
#[must_use]
pub fn format_tick(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        let rounded = (value * 100.0).round() / 100.0;
        format!("{rounded}")
    }
}
