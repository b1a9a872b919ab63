use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::error::{ChartError, ChartResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    #[must_use]
    pub const fn rgb8(red: u8, green: u8, blue: u8) -> Self {
        Self::rgb(red as f64 / 255.0, green as f64 / 255.0, blue as f64 / 255.0)
    }

    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);

    /// Parses a `#rrggbb` hex string.
    pub fn from_hex(hex: &str) -> ChartResult<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ChartError::InvalidData(format!(
                "invalid hex color `{hex}`"
            )));
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16).map_err(|err| {
                ChartError::InvalidData(format!("invalid hex color `{hex}`: {err}"))
            })
        };
        Ok(Self::rgb8(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    /// Channels quantized to 0..=255 for backends that want byte colors.
    #[must_use]
    pub fn to_rgb8(self) -> (u8, u8, u8) {
        let quantize = |channel: f64| (channel.clamp(0.0, 1.0) * 255.0).round() as u8;
        (
            quantize(self.red),
            quantize(self.green),
            quantize(self.blue),
        )
    }

    pub fn validate(self) -> ChartResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ChartError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

fn validate_finite(values: &[(&str, f64)], shape: &str) -> ChartResult<()> {
    for (name, value) in values {
        if !value.is_finite() {
            return Err(ChartError::InvalidData(format!(
                "{shape} `{name}` must be finite"
            )));
        }
    }
    Ok(())
}

fn validate_opacity(opacity: f64, shape: &str) -> ChartResult<()> {
    if !opacity.is_finite() || !(0.0..=1.0).contains(&opacity) {
        return Err(ChartError::InvalidData(format!(
            "{shape} opacity must be finite and in [0, 1]"
        )));
    }
    Ok(())
}

/// Draw command for one filled rectangle in pixel space.
///
/// `group` carries the owning record key for interaction restyling; `None`
/// marks static chrome such as legend swatches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RectPrimitive {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill: Color,
    pub fill_opacity: f64,
    pub group: Option<String>,
}

impl RectPrimitive {
    #[must_use]
    pub fn new(x: f64, y: f64, width: f64, height: f64, fill: Color, fill_opacity: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
            fill,
            fill_opacity,
            group: None,
        }
    }

    #[must_use]
    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        validate_finite(
            &[
                ("x", self.x),
                ("y", self.y),
                ("width", self.width),
                ("height", self.height),
            ],
            "rect",
        )?;
        if self.width < 0.0 || self.height < 0.0 {
            return Err(ChartError::InvalidData(
                "rect extents must be >= 0".to_owned(),
            ));
        }
        validate_opacity(self.fill_opacity, "rect")?;
        self.fill.validate()
    }
}

/// Draw command for one stroked line segment in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinePrimitive {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub stroke_width: f64,
    pub color: Color,
}

impl LinePrimitive {
    #[must_use]
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64, stroke_width: f64, color: Color) -> Self {
        Self {
            x1,
            y1,
            x2,
            y2,
            stroke_width,
            color,
        }
    }

    pub fn validate(self) -> ChartResult<()> {
        validate_finite(
            &[
                ("x1", self.x1),
                ("y1", self.y1),
                ("x2", self.x2),
                ("y2", self.y2),
            ],
            "line",
        )?;
        if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
            return Err(ChartError::InvalidData(
                "line stroke width must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PathPoint {
    pub x: f64,
    pub y: f64,
}

impl PathPoint {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Draw command for one open polyline in pixel space.
///
/// Parallel-coordinates lines hold exactly two points, so the inline
/// capacity covers the common case without heap traffic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathPrimitive {
    pub points: SmallVec<[PathPoint; 2]>,
    pub stroke: Color,
    pub stroke_width: f64,
    pub opacity: f64,
    pub group: Option<String>,
}

impl PathPrimitive {
    #[must_use]
    pub fn new(
        points: impl IntoIterator<Item = PathPoint>,
        stroke: Color,
        stroke_width: f64,
        opacity: f64,
    ) -> Self {
        Self {
            points: points.into_iter().collect(),
            stroke,
            stroke_width,
            opacity,
            group: None,
        }
    }

    #[must_use]
    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.points.len() < 2 {
            return Err(ChartError::InvalidData(
                "path needs at least two points".to_owned(),
            ));
        }
        for point in &self.points {
            validate_finite(&[("x", point.x), ("y", point.y)], "path point")?;
        }
        if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
            return Err(ChartError::InvalidData(
                "path stroke width must be finite and > 0".to_owned(),
            ));
        }
        validate_opacity(self.opacity, "path")?;
        self.stroke.validate()
    }
}

/// Draw command for one filled circle in pixel space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CirclePrimitive {
    pub cx: f64,
    pub cy: f64,
    pub radius: f64,
    pub fill: Color,
    pub fill_opacity: f64,
    pub group: Option<String>,
}

impl CirclePrimitive {
    #[must_use]
    pub fn new(cx: f64, cy: f64, radius: f64, fill: Color, fill_opacity: f64) -> Self {
        Self {
            cx,
            cy,
            radius,
            fill,
            fill_opacity,
            group: None,
        }
    }

    #[must_use]
    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        validate_finite(&[("cx", self.cx), ("cy", self.cy)], "circle")?;
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(ChartError::InvalidData(
                "circle radius must be finite and > 0".to_owned(),
            ));
        }
        validate_opacity(self.fill_opacity, "circle")?;
        self.fill.validate()
    }
}

/// Horizontal text alignment relative to `TextPrimitive::x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextHAlign {
    Left,
    Center,
    Right,
}

/// Draw command for one label in pixel space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextPrimitive {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub font_size_px: f64,
    pub color: Color,
    pub h_align: TextHAlign,
    /// Clockwise rotation around `(x, y)` in degrees.
    pub rotation_deg: f64,
}

impl TextPrimitive {
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        x: f64,
        y: f64,
        font_size_px: f64,
        color: Color,
        h_align: TextHAlign,
    ) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            font_size_px,
            color,
            h_align,
            rotation_deg: 0.0,
        }
    }

    #[must_use]
    pub fn with_rotation(mut self, rotation_deg: f64) -> Self {
        self.rotation_deg = rotation_deg;
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.text.is_empty() {
            return Err(ChartError::InvalidData(
                "text primitive must not be empty".to_owned(),
            ));
        }
        validate_finite(
            &[
                ("x", self.x),
                ("y", self.y),
                ("rotation", self.rotation_deg),
            ],
            "text",
        )?;
        if !self.font_size_px.is_finite() || self.font_size_px <= 0.0 {
            return Err(ChartError::InvalidData(
                "font size must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}
