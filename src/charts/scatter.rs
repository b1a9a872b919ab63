use crate::charts::common::{ACCENT_COLOR, BASE_COLOR, push_horizontal_axis, push_vertical_axis};
use crate::core::axis::{Axis, AxisOrientation};
use crate::core::scale::LinearScale;
use crate::core::types::Viewport;
use crate::data::adapt::scatter_ceilings;
use crate::data::dataset::Dataset;
use crate::error::ChartResult;
use crate::interaction::{PointerEvent, SelectionState, StyleClass};
use crate::render::{CirclePrimitive, Color, RenderFrame, TextHAlign, TextPrimitive};

/// Dimensions and styling for the scatterplot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScatterplotConfig {
    pub width: f64,
    pub height: f64,
    pub dot_radius: f64,
    pub resting_opacity: f64,
    pub base_color: Color,
    pub highlight_color: Color,
    pub label_font_size_px: f64,
    pub tick_count: usize,
}

impl Default for ScatterplotConfig {
    fn default() -> Self {
        Self {
            width: 500.0,
            height: 500.0,
            dot_radius: 5.0,
            resting_opacity: 0.55,
            base_color: BASE_COLOR,
            highlight_color: ACCENT_COLOR,
            label_font_size_px: 12.0,
            tick_count: 10,
        }
    }
}

impl ScatterplotConfig {
    #[must_use]
    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    #[must_use]
    pub fn with_dot_radius(mut self, dot_radius: f64) -> Self {
        self.dot_radius = dot_radius;
        self
    }
}

/// Scatterplot: one keyed dot per record with an adjacent caption, axes with
/// 10% headroom above the data maxima on both sides.
#[derive(Debug, Clone)]
pub struct Scatterplot {
    config: ScatterplotConfig,
    labels: [String; 2],
    keys: Vec<String>,
    dots: Vec<(String, f64, f64)>,
    x_scale: LinearScale,
    y_scale: LinearScale,
    viewport: Viewport,
    selection: SelectionState,
}

impl Scatterplot {
    pub fn new(dataset: &Dataset, config: ScatterplotConfig) -> ChartResult<Self> {
        let (x_ceiling, y_ceiling) = scatter_ceilings(dataset);
        let x_scale = LinearScale::new((0.0, x_ceiling), (0.0, config.width))?;
        let y_scale = LinearScale::new((0.0, y_ceiling), (config.height, 0.0))?;

        let keys: Vec<String> = dataset.keys().map(str::to_owned).collect();
        let dots = dataset
            .records()
            .iter()
            .map(|record| (record.key.clone(), record.x, record.y))
            .collect();
        let viewport = Viewport::new(config.width.ceil() as u32, config.height.ceil() as u32);

        tracing::debug!(
            records = dataset.len(),
            x_ceiling,
            y_ceiling,
            "scatterplot layout ready"
        );

        Ok(Self {
            config,
            labels: dataset.labels().clone(),
            keys,
            dots,
            x_scale,
            y_scale,
            viewport,
            selection: SelectionState::default(),
        })
    }

    /// Materializes the scene with styles projected from the current
    /// selection state. The target surface must start empty.
    pub fn frame(&self) -> ChartResult<RenderFrame> {
        let config = &self.config;
        let mut frame = RenderFrame::new(self.viewport);

        for (key, x_value, y_value) in &self.dots {
            let cx = self.x_scale.position(*x_value)?;
            let cy = self.y_scale.position(*y_value)?;
            let (fill, fill_opacity) = self.dot_style_for(key);
            frame.push_circle(
                CirclePrimitive::new(cx, cy, config.dot_radius, fill, fill_opacity)
                    .with_group(key.clone()),
            );

            // Caption to the upper right of each dot, one per record.
            frame.push_text(TextPrimitive::new(
                key.clone(),
                cx + 10.0,
                cy - 6.0,
                config.label_font_size_px,
                Color::BLACK,
                TextHAlign::Left,
            ));
        }

        let x_axis = Axis::new(AxisOrientation::Bottom, self.x_scale)
            .with_tick_count(config.tick_count);
        push_horizontal_axis(&mut frame, &x_axis, config.height, 0.0)?;
        frame.push_text(TextPrimitive::new(
            self.labels[0].clone(),
            config.width - 4.0,
            config.height - 8.0,
            13.0,
            Color::BLACK,
            TextHAlign::Right,
        ));

        let y_axis = Axis::new(AxisOrientation::Left, self.y_scale)
            .with_tick_count(config.tick_count);
        push_vertical_axis(&mut frame, &y_axis, 0.0, 0.0)?;
        // Rotated caption sits at 22% down the axis whatever the height.
        frame.push_text(
            TextPrimitive::new(
                self.labels[1].clone(),
                14.0,
                config.height * 0.22,
                13.0,
                Color::BLACK,
                TextHAlign::Center,
            )
            .with_rotation(270.0),
        );

        Ok(frame)
    }

    /// Applies one pointer event to the selection state. Events for keys the
    /// dataset does not contain are ignored.
    pub fn pointer_event(&mut self, event: &PointerEvent) {
        if !self.keys.iter().any(|key| key == event.key()) {
            tracing::debug!(key = event.key(), "ignoring pointer event for unknown key");
            return;
        }
        self.selection = self.selection.apply(event);
    }

    /// Re-projects selection styles onto an existing frame without
    /// re-running layout.
    pub fn restyle(&self, frame: &mut RenderFrame) {
        for circle in &mut frame.circles {
            if let Some(key) = &circle.group {
                let (fill, fill_opacity) = self.dot_style_for(key);
                circle.fill = fill;
                circle.fill_opacity = fill_opacity;
            }
        }
    }

    fn dot_style_for(&self, key: &str) -> (Color, f64) {
        match self.selection.style_class(key) {
            StyleClass::Resting => (self.config.base_color, self.config.resting_opacity),
            StyleClass::Highlighted => (self.config.highlight_color, 1.0),
        }
    }

    #[must_use]
    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    #[must_use]
    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn x_scale(&self) -> LinearScale {
        self.x_scale
    }

    #[must_use]
    pub fn y_scale(&self) -> LinearScale {
        self.y_scale
    }
}
