use crate::charts::common::{
    ACCENT_COLOR, AXIS_FONT_SIZE_PX, BASE_COLOR, LEGEND_RECT_SIZE, push_horizontal_axis,
    push_legend,
};
use crate::core::axis::{Axis, AxisOrientation, TickFormat};
use crate::core::band::BandScale;
use crate::core::palette::{SeriesPalette, SeriesRole};
use crate::core::scale::LinearScale;
use crate::core::types::Viewport;
use crate::data::adapt::diverging_domain;
use crate::data::dataset::Dataset;
use crate::error::ChartResult;
use crate::interaction::{PointerEvent, SelectionState, StyleClass};
use crate::render::{Color, LinePrimitive, RectPrimitive, RenderFrame, TextHAlign, TextPrimitive};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Margins {
    pub top: f64,
    pub left: f64,
    pub right: f64,
    pub bottom: f64,
}

/// Dimensions and styling for the diverging two-sided bar chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TwoSidedBarConfig {
    pub width: f64,
    pub height: f64,
    pub margins: Margins,
    pub band_padding: f64,
    /// Space accounted left of the plot when placing the legend column.
    pub label_gutter: f64,
    /// Extra viewport width right of the plot for the legend column.
    pub legend_gutter: f64,
    pub resting_opacity: f64,
    pub palette: SeriesPalette,
    pub tick_count: usize,
}

impl Default for TwoSidedBarConfig {
    fn default() -> Self {
        Self {
            width: 600.0,
            height: 400.0,
            margins: Margins {
                top: 20.0,
                left: 20.0,
                right: 40.0,
                bottom: 40.0,
            },
            band_padding: 0.2,
            label_gutter: 50.0,
            legend_gutter: 150.0,
            resting_opacity: 0.4,
            palette: SeriesPalette::new(ACCENT_COLOR, BASE_COLOR),
            tick_count: 10,
        }
    }
}

impl TwoSidedBarConfig {
    #[must_use]
    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    #[must_use]
    pub fn with_band_padding(mut self, band_padding: f64) -> Self {
        self.band_padding = band_padding;
        self
    }
}

/// Diverging bar chart: per record a positive bar grows right from zero by
/// the y value and a negative bar grows left by the x value, sharing one
/// banded row and one interaction group.
#[derive(Debug, Clone)]
pub struct TwoSidedBarChart {
    config: TwoSidedBarConfig,
    labels: [String; 2],
    keys: Vec<String>,
    bars: Vec<(String, f64, f64)>,
    value_scale: LinearScale,
    band_scale: BandScale,
    viewport: Viewport,
    selection: SelectionState,
}

impl TwoSidedBarChart {
    pub fn new(dataset: &Dataset, config: TwoSidedBarConfig) -> ChartResult<Self> {
        let domain = diverging_domain(dataset);
        // Zero lands at the midpoint of the pixel range, so both halves of
        // the chart share one origin.
        let value_scale = LinearScale::new((-domain, domain), (0.0, config.width))?;
        let keys: Vec<String> = dataset.keys().map(str::to_owned).collect();
        let band_scale = BandScale::new(&keys, (0.0, config.height), config.band_padding)?;
        let bars = dataset
            .records()
            .iter()
            .map(|record| (record.key.clone(), record.x, record.y))
            .collect();
        // The legend column starts past `label_gutter + width`, so the
        // viewport carries a legend gutter beyond the horizontal margins.
        let viewport = Viewport::new(
            (config.width + config.margins.left + config.margins.right + config.legend_gutter)
                .ceil() as u32,
            (config.height + config.margins.top + config.margins.bottom).ceil() as u32,
        );

        tracing::debug!(records = dataset.len(), domain, "two-sided bar layout ready");

        Ok(Self {
            config,
            labels: dataset.labels().clone(),
            keys,
            bars,
            value_scale,
            band_scale,
            viewport,
            selection: SelectionState::default(),
        })
    }

    /// Materializes the scene with styles projected from the current
    /// selection state. The target surface must start empty.
    pub fn frame(&self) -> ChartResult<RenderFrame> {
        let config = &self.config;
        let mut frame = RenderFrame::new(self.viewport);
        let zero_x = self.value_scale.position(0.0)?;
        let bandwidth = self.band_scale.bandwidth();

        for (key, x_value, y_value) in &self.bars {
            let band_y = self.band_scale.position(key)?;
            let fill_opacity = self.fill_opacity_for(key);

            frame.push_rect(
                RectPrimitive::new(
                    zero_x,
                    band_y,
                    self.value_scale.position(*y_value)? - zero_x,
                    bandwidth,
                    config.palette.by_role(SeriesRole::Y),
                    fill_opacity,
                )
                .with_group(key.clone()),
            );

            let negative_x = self.value_scale.position(-x_value)?;
            frame.push_rect(
                RectPrimitive::new(
                    negative_x,
                    band_y,
                    zero_x - negative_x,
                    bandwidth,
                    config.palette.by_role(SeriesRole::X),
                    fill_opacity,
                )
                .with_group(key.clone()),
            );
        }

        let value_axis = Axis::new(AxisOrientation::Bottom, self.value_scale)
            .with_tick_count(config.tick_count)
            .with_format(TickFormat::Absolute);
        push_horizontal_axis(&mut frame, &value_axis, config.height, 0.0)?;

        // Key axis drawn on the shared zero origin: domain line plus one
        // caption and mark per band.
        frame.push_line(LinePrimitive::new(
            zero_x,
            0.0,
            zero_x,
            config.height,
            1.0,
            Color::BLACK,
        ));
        for key in &self.keys {
            let center_y = self.band_scale.position(key)? + bandwidth / 2.0;
            frame.push_line(LinePrimitive::new(
                zero_x - 6.0,
                center_y,
                zero_x,
                center_y,
                1.0,
                Color::BLACK,
            ));
            frame.push_text(TextPrimitive::new(
                key.clone(),
                zero_x - 9.0,
                center_y + AXIS_FONT_SIZE_PX / 3.0,
                AXIS_FONT_SIZE_PX,
                Color::BLACK,
                TextHAlign::Right,
            ));
        }

        push_legend(
            &mut frame,
            &self.labels,
            config.palette,
            (
                config.label_gutter + config.width + 40.0 - LEGEND_RECT_SIZE,
                5.0,
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
        &self.keys
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn value_scale(&self) -> LinearScale {
        self.value_scale
    }

    #[must_use]
    pub fn band_scale(&self) -> &BandScale {
        &self.band_scale
    }
}
