use crate::charts::common::{
    ACCENT_COLOR, AXIS_FONT_SIZE_PX, BASE_COLOR, LEGEND_RECT_SIZE, push_legend,
    push_vertical_axis,
};
use crate::core::axis::{Axis, AxisOrientation};
use crate::core::band::PointScale;
use crate::core::palette::SeriesPalette;
use crate::core::scale::LinearScale;
use crate::core::types::Viewport;
use crate::data::adapt::axis_extents;
use crate::data::dataset::Dataset;
use crate::error::ChartResult;
use crate::interaction::{PointerEvent, SelectionState, StyleClass};
use crate::render::{
    Color, PathPoint, PathPrimitive, RenderFrame, TextHAlign, TextPrimitive,
};

use super::two_sided_bar::Margins;

/// Dimensions and styling for the parallel-coordinates plot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParallelCoordinatesConfig {
    pub width: f64,
    pub height: f64,
    pub margins: Margins,
    pub resting_opacity: f64,
    pub stroke_width: f64,
    pub highlight_stroke_width: f64,
    pub base_color: Color,
    pub highlight_color: Color,
    pub palette: SeriesPalette,
    pub tick_count: usize,
}

impl Default for ParallelCoordinatesConfig {
    fn default() -> Self {
        Self {
            width: 700.0,
            height: 500.0,
            margins: Margins {
                top: 30.0,
                left: 10.0,
                right: 10.0,
                bottom: 10.0,
            },
            resting_opacity: 0.4,
            stroke_width: 2.5,
            highlight_stroke_width: 4.0,
            base_color: BASE_COLOR,
            highlight_color: ACCENT_COLOR,
            palette: SeriesPalette::new(ACCENT_COLOR, BASE_COLOR),
            tick_count: 10,
        }
    }
}

impl ParallelCoordinatesConfig {
    #[must_use]
    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }
}

/// Parallel-coordinates plot: one polyline per record connecting the two
/// axis verticals, each vertical carrying its own independent linear scale.
#[derive(Debug, Clone)]
pub struct ParallelCoordinatesPlot {
    config: ParallelCoordinatesConfig,
    labels: [String; 2],
    keys: Vec<String>,
    lines: Vec<(String, f64, f64)>,
    x_value_scale: LinearScale,
    y_value_scale: LinearScale,
    axis_positions: PointScale,
    viewport: Viewport,
    selection: SelectionState,
}

impl ParallelCoordinatesPlot {
    pub fn new(dataset: &Dataset, config: ParallelCoordinatesConfig) -> ChartResult<Self> {
        let inner_width = config.width - config.margins.left - config.margins.right;
        let inner_height = config.height - config.margins.top - config.margins.bottom;

        let extents = axis_extents(dataset);
        let x_value_scale =
            LinearScale::new((extents.x_min, extents.x_max), (inner_height, 0.0))?;
        let y_value_scale =
            LinearScale::new((extents.y_min, extents.y_max), (inner_height, 0.0))?;
        // Padding 1 leaves a half-step outer margin on each side, anchoring
        // the two axis verticals inside the drawing area.
        let axis_positions =
            PointScale::new(dataset.labels().as_slice(), (0.0, inner_width), 1.0)?;

        let keys: Vec<String> = dataset.keys().map(str::to_owned).collect();
        let lines = dataset
            .records()
            .iter()
            .map(|record| (record.key.clone(), record.x, record.y))
            .collect();
        let viewport = Viewport::new(config.width.ceil() as u32, config.height.ceil() as u32);

        tracing::debug!(
            records = dataset.len(),
            ?extents,
            "parallel-coordinates layout ready"
        );

        Ok(Self {
            config,
            labels: dataset.labels().clone(),
            keys,
            lines,
            x_value_scale,
            y_value_scale,
            axis_positions,
            viewport,
            selection: SelectionState::default(),
        })
    }

    /// Materializes the scene with styles projected from the current
    /// selection state. The target surface must start empty.
    pub fn frame(&self) -> ChartResult<RenderFrame> {
        let config = &self.config;
        let mut frame = RenderFrame::new(self.viewport);
        let offset_x = config.margins.left;
        let offset_y = config.margins.top;

        let first_axis_x = offset_x + self.axis_positions.position(&self.labels[0])?;
        let second_axis_x = offset_x + self.axis_positions.position(&self.labels[1])?;

        // One line and one caption per record, however many there are.
        for (key, x_value, y_value) in &self.lines {
            let start = PathPoint::new(
                first_axis_x,
                offset_y + self.x_value_scale.position(*x_value)?,
            );
            let end = PathPoint::new(
                second_axis_x,
                offset_y + self.y_value_scale.position(*y_value)?,
            );
            let (stroke, stroke_width, opacity) = self.line_style_for(key);
            frame.push_path(
                PathPrimitive::new([start, end], stroke, stroke_width, opacity)
                    .with_group(key.clone()),
            );

            // Caption sits a quarter of the way along the line, just above it.
            frame.push_text(TextPrimitive::new(
                key.clone(),
                start.x + (end.x - start.x) * 0.25,
                start.y + (end.y - start.y) * 0.25 - 4.0,
                12.0,
                Color::BLACK,
                TextHAlign::Center,
            ));
        }

        let first_axis = Axis::new(AxisOrientation::Left, self.x_value_scale)
            .with_tick_count(config.tick_count)
            .with_tick_size(10.0);
        push_vertical_axis(&mut frame, &first_axis, first_axis_x, offset_y)?;
        frame.push_text(TextPrimitive::new(
            self.labels[0].clone(),
            first_axis_x,
            offset_y - 15.0,
            AXIS_FONT_SIZE_PX,
            Color::BLACK,
            TextHAlign::Center,
        ));

        let second_axis = Axis::new(AxisOrientation::Right, self.y_value_scale)
            .with_tick_count(config.tick_count)
            .with_tick_size(15.0);
        push_vertical_axis(&mut frame, &second_axis, second_axis_x, offset_y)?;
        frame.push_text(TextPrimitive::new(
            self.labels[1].clone(),
            second_axis_x,
            offset_y - 15.0,
            AXIS_FONT_SIZE_PX,
            Color::BLACK,
            TextHAlign::Center,
        ));

        push_legend(
            &mut frame,
            &self.labels,
            config.palette,
            (
                config.width - config.margins.right - LEGEND_RECT_SIZE - 90.0,
                offset_y,
            ),
            config.resting_opacity,
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
        for path in &mut frame.paths {
            if let Some(key) = &path.group {
                let (stroke, stroke_width, opacity) = self.line_style_for(key);
                path.stroke = stroke;
                path.stroke_width = stroke_width;
                path.opacity = opacity;
            }
        }
    }

    fn line_style_for(&self, key: &str) -> (Color, f64, f64) {
        match self.selection.style_class(key) {
            StyleClass::Resting => (
                self.config.base_color,
                self.config.stroke_width,
                self.config.resting_opacity,
            ),
            StyleClass::Highlighted => (
                self.config.highlight_color,
                self.config.highlight_stroke_width,
                1.0,
            ),
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
    pub fn axis_positions(&self) -> &PointScale {
        &self.axis_positions
    }
}
