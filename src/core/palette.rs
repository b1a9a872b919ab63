use serde::{Deserialize, Serialize};

use crate::render::Color;

/// Which of the two dataset value columns a visual element encodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SeriesRole {
    X,
    Y,
}

/// Two-color ordinal palette shared by all charts.
///
/// Indexed by parity (`index % 2`) or by series role; the same index always
/// yields the same color, so repeated layout passes stay stable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesPalette {
    x_color: Color,
    y_color: Color,
}

impl SeriesPalette {
    #[must_use]
    pub const fn new(x_color: Color, y_color: Color) -> Self {
        Self { x_color, y_color }
    }

    #[must_use]
    pub fn by_index(self, index: usize) -> Color {
        if index % 2 == 0 {
            self.x_color
        } else {
            self.y_color
        }
    }

    #[must_use]
    pub fn by_role(self, role: SeriesRole) -> Color {
        match role {
            SeriesRole::X => self.x_color,
            SeriesRole::Y => self.y_color,
        }
    }
}
