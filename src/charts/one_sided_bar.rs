use crate::charts::common::{
    ACCENT_COLOR, AXIS_FONT_SIZE_PX, BASE_COLOR, LEGEND_RECT_SIZE, push_horizontal_axis,
    push_legend,
};
use crate::core::axis::{Axis, AxisOrientation};
use crate::core::palette::SeriesPalette;
use crate::core::scale::LinearScale;
use crate::core::types::Viewport;
use crate::data::adapt::{InterleavedBars, interleaved};
use crate::data::dataset::Dataset;
use crate::error::ChartResult;
use crate::interaction::{PointerEvent, SelectionState, StyleClass};
use crate::render::{Color, LinePrimitive, RectPrimitive, RenderFrame, TextHAlign, TextPrimitive};

/// Dimensions and styling for the grouped one-sided bar chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OneSidedBarConfig {
    pub chart_width: f64,
    pub bar_height: f64,
    /// Vertical gap between consecutive key groups.
    pub group_gap: f64,
    /// Space left of the bars for key captions.
    pub label_gutter: f64,
    /// Space right of the bars for the legend column.
    pub legend_gutter: f64,
    /// Extra height below the bars for the value axis.
    pub axis_strip: f64,
    pub resting_opacity: f64,
    pub palette: SeriesPalette,
    pub tick_count: usize,
}

impl Default for OneSidedBarConfig {
    fn default() -> Self {
        Self {
            chart_width: 500.0,
            bar_height: 30.0,
            group_gap: 10.0,
            label_gutter: 50.0,
            legend_gutter: 250.0,
            axis_strip: 30.0,
            resting_opacity: 0.4,
            palette: SeriesPalette::new(ACCENT_COLOR, BASE_COLOR),
            tick_count: 10,
        }
    }
}

impl OneSidedBarConfig {
    #[must_use]
    pub fn with_chart_width(mut self, chart_width: f64) -> Self {
        self.chart_width = chart_width;
        self
    }

    #[must_use]
    pub fn with_resting_opacity(mut self, resting_opacity: f64) -> Self {
        self.resting_opacity = resting_opacity;
        self
    }
}

/// Grouped bar chart: each record becomes a pair of adjacent horizontal bars,
/// x above y, both keyed for interaction as one group.
#[derive(Debug, Clone)]
pub struct OneSidedBarChart {
    config: OneSidedBarConfig,
    labels: [String; 2],
    adapted: InterleavedBars,
    value_scale: LinearScale,
    chart_height: f64,
    viewport: Viewport,
    selection: SelectionState,
}

impl OneSidedBarChart {
    pub fn new(dataset: &Dataset, config: OneSidedBarConfig) -> ChartResult<Self> {
        let adapted = interleaved(dataset);
        let chart_height = config.bar_height * adapted.entries.len() as f64
            + config.group_gap * adapted.keys.len() as f64;
        let value_scale =
            LinearScale::new((0.0, adapted.ceiling), (0.0, config.chart_width))?;
        let viewport = Viewport::new(
            (config.label_gutter + config.chart_width + config.legend_gutter).ceil() as u32,
            (chart_height + config.axis_strip).ceil() as u32,
        );

        tracing::debug!(
            records = dataset.len(),
            ceiling = adapted.ceiling,
            "one-sided bar layout ready"
        );

        Ok(Self {
            config,
            labels: dataset.labels().clone(),
            adapted,
            value_scale,
            chart_height,
            viewport,
            selection: SelectionState::default(),
        })
    }

    /// Materializes the scene with styles projected from the current
    /// selection state. The target surface must start empty.
    pub fn frame(&self) -> ChartResult<RenderFrame> {
        let config = &self.config;
        let mut frame = RenderFrame::new(self.viewport);

        for (i, (value, key)) in self.adapted.entries.iter().enumerate() {
            let row_y = i as f64 * config.bar_height
                + config.group_gap * (0.5 + (i / 2) as f64);
            let width = self.value_scale.position(*value)?;
            frame.push_rect(
                RectPrimitive::new(
                    config.label_gutter,
                    row_y,
                    width,
                    config.bar_height - 1.0,
                    config.palette.by_index(i),
                    self.fill_opacity_for(key),
                )
                .with_group(key.clone()),
            );

            // One caption per group, placed on the even entry of each pair.
            if i % 2 == 0 {
                frame.push_text(TextPrimitive::new(
                    key.clone(),
                    config.label_gutter - 15.0,
                    row_y + config.bar_height + AXIS_FONT_SIZE_PX / 3.0,
                    AXIS_FONT_SIZE_PX,
                    Color::BLACK,
                    TextHAlign::Right,
                ));
            }
        }

        // Bare domain line on the left; captions live in the gutter.
        frame.push_line(LinePrimitive::new(
            config.label_gutter,
            0.0,
            config.label_gutter,
            self.chart_height,
            1.0,
            Color::BLACK,
        ));

        let value_axis = Axis::new(AxisOrientation::Bottom, self.value_scale)
            .with_tick_count(config.tick_count)
            .with_tick_size(10.0);
        push_horizontal_axis(
            &mut frame,
            &value_axis,
            self.chart_height,
            config.label_gutter,
        )?;

        push_legend(
            &mut frame,
            &self.labels,
            config.palette,
            (
                config.label_gutter + config.chart_width + 40.0 - LEGEND_RECT_SIZE,
                config.group_gap / 2.0,
            ),
            config.resting_opacity,
        );

        Ok(frame)
    }

    /// Applies one pointer event to the selection state. Events for keys the
    /// dataset does not contain are ignored.
    pub fn pointer_event(&mut self, event: &PointerEvent) {
        if !self.adapted.keys.iter().any(|key| key == event.key()) {
            tracing::debug!(key = event.key(), "ignoring pointer event for unknown key");
            return;
        }
        self.selection = self.selection.apply(event);
    }

    /// Re-projects selection styles onto an existing frame without
    /// re-running layout.
    pub fn restyle(&self, frame: &mut RenderFrame) {
        for rect in &mut frame.rects {
            if let Some(key) = &rect.group {
                rect.fill_opacity = self.fill_opacity_for(key);
            }
        }
    }

    fn fill_opacity_for(&self, key: &str) -> f64 {
        match self.selection.style_class(key) {
            StyleClass::Resting => self.config.resting_opacity,
            StyleClass::Highlighted => 1.0,
        }
    }

    #[must_use]
    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    #[must_use]
    pub fn keys(&self) -> &[String] {
        &self.adapted.keys
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn value_scale(&self) -> LinearScale {
        self.value_scale
    }
}
