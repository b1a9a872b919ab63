//! Scene helpers shared by the four chart components: axis gizmos and the
//! legend column. All coordinates are absolute pixel positions within the
//! chart viewport.

use crate::core::axis::{Axis, AxisOrientation};
use crate::core::palette::SeriesPalette;
use crate::error::ChartResult;
use crate::render::{Color, LinePrimitive, RectPrimitive, RenderFrame, TextHAlign, TextPrimitive};

/// Accent color used for the first series and for highlights.
pub const ACCENT_COLOR: Color = Color::rgb8(0xED, 0x7D, 0x31);
/// Base color used for the second series and resting line/dot fills.
pub const BASE_COLOR: Color = Color::rgb8(0x31, 0xA1, 0xED);

/// Uniform tick caption size applied after axis generation.
pub(crate) const AXIS_FONT_SIZE_PX: f64 = 14.0;
pub(crate) const AXIS_STROKE_WIDTH: f64 = 1.0;

pub(crate) const LEGEND_RECT_SIZE: f64 = 18.0;
pub(crate) const LEGEND_SPACING: f64 = 4.0;

/// Emits a horizontal axis: domain line along `baseline_y`, tick marks
/// descending below it, captions under the marks. `offset_x` shifts the
/// scale's pixel range into the chart's coordinate space.
pub(crate) fn push_horizontal_axis(
    frame: &mut RenderFrame,
    axis: &Axis,
    baseline_y: f64,
    offset_x: f64,
) -> ChartResult<()> {
    let (range_start, range_end) = axis.scale.range();
    frame.push_line(LinePrimitive::new(
        offset_x + range_start.min(range_end),
        baseline_y,
        offset_x + range_start.max(range_end),
        baseline_y,
        AXIS_STROKE_WIDTH,
        Color::BLACK,
    ));

    for tick in axis.ticks()? {
        let x = offset_x + tick.position;
        frame.push_line(LinePrimitive::new(
            x,
            baseline_y,
            x,
            baseline_y + axis.tick_size_px,
            AXIS_STROKE_WIDTH,
            Color::BLACK,
        ));
        frame.push_text(TextPrimitive::new(
            tick.label,
            x,
            baseline_y + axis.tick_size_px + AXIS_FONT_SIZE_PX,
            AXIS_FONT_SIZE_PX,
            Color::BLACK,
            TextHAlign::Center,
        ));
    }

    Ok(())
}

/// Emits a vertical axis at `axis_x`: domain line, tick marks, captions.
/// `Left` puts marks and captions on the left side of the line, `Right` on
/// the right. `offset_y` shifts the scale's pixel range downward.
pub(crate) fn push_vertical_axis(
    frame: &mut RenderFrame,
    axis: &Axis,
    axis_x: f64,
    offset_y: f64,
) -> ChartResult<()> {
    let (range_start, range_end) = axis.scale.range();
    frame.push_line(LinePrimitive::new(
        axis_x,
        offset_y + range_start.min(range_end),
        axis_x,
        offset_y + range_start.max(range_end),
        AXIS_STROKE_WIDTH,
        Color::BLACK,
    ));

    let leftward = matches!(axis.orientation, AxisOrientation::Left);
    for tick in axis.ticks()? {
        let y = offset_y + tick.position;
        let (mark_end, caption_x, h_align) = if leftward {
            (
                axis_x - axis.tick_size_px,
                axis_x - axis.tick_size_px - 3.0,
                TextHAlign::Right,
            )
        } else {
            (
                axis_x + axis.tick_size_px,
                axis_x + axis.tick_size_px + 3.0,
                TextHAlign::Left,
            )
        };
        frame.push_line(LinePrimitive::new(
            axis_x,
            y,
            mark_end,
            y,
            AXIS_STROKE_WIDTH,
            Color::BLACK,
        ));
        frame.push_text(TextPrimitive::new(
            tick.label,
            caption_x,
            y + AXIS_FONT_SIZE_PX / 3.0,
            AXIS_FONT_SIZE_PX,
            Color::BLACK,
            h_align,
        ));
    }

    Ok(())
}

/// Emits the legend: one color swatch plus caption per label, stacked as a
/// fixed-position column starting at `origin`.
pub(crate) fn push_legend(
    frame: &mut RenderFrame,
    labels: &[String; 2],
    palette: SeriesPalette,
    origin: (f64, f64),
    fill_opacity: f64,
) {
    let row_height = LEGEND_RECT_SIZE + LEGEND_SPACING;
    for (i, label) in labels.iter().enumerate() {
        let y = origin.1 + row_height * i as f64;
        frame.push_rect(RectPrimitive::new(
            origin.0,
            y,
            LEGEND_RECT_SIZE,
            LEGEND_RECT_SIZE,
            palette.by_index(i),
            fill_opacity,
        ));
        frame.push_text(TextPrimitive::new(
            label.clone(),
            origin.0 + LEGEND_RECT_SIZE + LEGEND_SPACING,
            y + LEGEND_RECT_SIZE - LEGEND_SPACING,
            AXIS_FONT_SIZE_PX,
            Color::BLACK,
            TextHAlign::Left,
        ));
    }
}
