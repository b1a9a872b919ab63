use crate::error::ChartResult;
use crate::render::{Color, RenderFrame, Renderer, TextHAlign};

/// Serializes frames into standalone SVG documents.
///
/// Every call to `render` replaces the previous document, so re-rendering a
/// chart can never accumulate duplicate elements in one surface.
#[derive(Debug, Default)]
pub struct SvgRenderer {
    document: String,
}

impl SvgRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The document produced by the most recent `render` call.
    #[must_use]
    pub fn document(&self) -> &str {
        &self.document
    }
}

impl Renderer for SvgRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;

        let mut svg = String::with_capacity(4096);
        svg.push_str(&format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n",
            w = frame.viewport.width,
            h = frame.viewport.height,
        ));

        for rect in &frame.rects {
            svg.push_str(&format!(
                "  <rect x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\" fill=\"{}\" fill-opacity=\"{}\"/>\n",
                rect.x,
                rect.y,
                rect.width,
                rect.height,
                color_attr(rect.fill),
                rect.fill_opacity,
            ));
        }

        for line in &frame.lines {
            svg.push_str(&format!(
                "  <line x1=\"{:.2}\" y1=\"{:.2}\" x2=\"{:.2}\" y2=\"{:.2}\" stroke=\"{}\" stroke-width=\"{}\"/>\n",
                line.x1,
                line.y1,
                line.x2,
                line.y2,
                color_attr(line.color),
                line.stroke_width,
            ));
        }

        for path in &frame.paths {
            let mut d = String::new();
            for (i, point) in path.points.iter().enumerate() {
                let op = if i == 0 { 'M' } else { 'L' };
                d.push_str(&format!("{op}{:.2},{:.2} ", point.x, point.y));
            }
            svg.push_str(&format!(
                "  <path d=\"{}\" fill=\"none\" stroke=\"{}\" stroke-width=\"{}\" opacity=\"{}\"/>\n",
                d.trim_end(),
                color_attr(path.stroke),
                path.stroke_width,
                path.opacity,
            ));
        }

        for circle in &frame.circles {
            svg.push_str(&format!(
                "  <circle cx=\"{:.2}\" cy=\"{:.2}\" r=\"{:.2}\" fill=\"{}\" fill-opacity=\"{}\"/>\n",
                circle.cx,
                circle.cy,
                circle.radius,
                color_attr(circle.fill),
                circle.fill_opacity,
            ));
        }

        for text in &frame.texts {
            let anchor = match text.h_align {
                TextHAlign::Left => "start",
                TextHAlign::Center => "middle",
                TextHAlign::Right => "end",
            };
            let transform = if text.rotation_deg == 0.0 {
                String::new()
            } else {
                format!(
                    " transform=\"rotate({} {:.2} {:.2})\"",
                    text.rotation_deg, text.x, text.y
                )
            };
            svg.push_str(&format!(
                "  <text x=\"{:.2}\" y=\"{:.2}\" font-family=\"Open Sans, sans-serif\" font-size=\"{}\" fill=\"{}\" text-anchor=\"{anchor}\"{transform}>{}</text>\n",
                text.x,
                text.y,
                text.font_size_px,
                color_attr(text.color),
                escape_xml(&text.text),
            ));
        }

        svg.push_str("</svg>\n");
        self.document = svg;
        Ok(())
    }
}

fn color_attr(color: Color) -> String {
    let (red, green, blue) = color.to_rgb8();
    format!("rgb({red},{green},{blue})")
}

fn escape_xml(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
