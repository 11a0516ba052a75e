//! SVG generation

use facet_svg::facet_xml::SerializeOptions;
use facet_svg::{Path, PathData, Points, Polygon, Svg, SvgNode, SvgStyle, Text, facet_xml};
use glam::{DVec2, dvec2};

use super::command::{Command, DrawCommand};
use super::defaults;
use super::{ArrowStyle, Stroke, TextStyle};
use crate::errors::{Error, Result};
use crate::style::{HAlign, VAlign};
use crate::types::{BBox, Scaler};

/// Output settings for [`render_svg`].
#[derive(Debug, Clone, PartialEq)]
pub struct SvgOptions {
    /// Points per per-unit length
    pub scale: f64,
    /// Blank border around the drawing, in points
    pub margin: f64,
    pub font_size: f64,
    pub font_family: Option<String>,
}

impl Default for SvgOptions {
    fn default() -> Self {
        Self {
            scale: defaults::POINTS_PER_UNIT,
            margin: defaults::MARGIN,
            font_size: defaults::FONT_SIZE,
            font_family: None,
        }
    }
}

/// Maps per-unit plot coordinates (Y-up) to SVG points (Y-down).
#[derive(Debug, Clone)]
pub struct Frame {
    scaler: Scaler,
    min_x: f64,
    max_y: f64,
    margin: f64,
    font_size: f64,
    font_family: Option<String>,
}

impl Frame {
    pub fn to_svg(&self, p: DVec2) -> DVec2 {
        dvec2(
            self.scaler.pt(p.x - self.min_x) + self.margin,
            self.scaler.pt(self.max_y - p.y) + self.margin,
        )
    }
}

/// Serialize recorded commands into a standalone SVG document.
pub fn render_svg(commands: &[DrawCommand], options: &SvgOptions) -> Result<String> {
    let scaler = Scaler::try_new(options.scale).map_err(|reason| Error::InvalidScale {
        value: options.scale,
        reason,
    })?;

    let mut bounds = BBox::new();
    for cmd in commands {
        cmd.extend_bounds(&mut bounds);
    }
    if bounds.is_empty() {
        bounds.expand_point(DVec2::ZERO);
    }
    if !bounds.is_finite() {
        return Err(Error::InvalidBounds);
    }

    crate::log::debug!(
        min_x = bounds.min.x,
        min_y = bounds.min.y,
        max_x = bounds.max.x,
        max_y = bounds.max.y,
        commands = commands.len(),
        "render_svg bounds"
    );

    let width = scaler.pt(bounds.width()) + 2.0 * options.margin;
    let height = scaler.pt(bounds.height()) + 2.0 * options.margin;
    let frame = Frame {
        scaler,
        min_x: bounds.min.x,
        max_y: bounds.max.y,
        margin: options.margin,
        font_size: options.font_size,
        font_family: options.font_family.clone(),
    };

    let svg = Svg {
        width: None,
        height: None,
        view_box: Some(format!("0 0 {} {}", fmt_num(width), fmt_num(height))),
        children: commands.iter().flat_map(|cmd| cmd.svg_nodes(&frame)).collect(),
    };

    fn format_float(value: f64, writer: &mut dyn std::io::Write) -> std::io::Result<()> {
        write!(writer, "{}", fmt_num(value))
    }

    // Labels are plain text: every `&` and `<` is escaped by the serializer.
    let options_ser = SerializeOptions {
        float_formatter: Some(format_float),
        ..Default::default()
    };
    facet_xml::to_string_with_options(&svg, &options_ser).map_err(|e| Error::Serialize {
        message: e.to_string(),
    })
}

/// Build a style attribute from `(property, value)` pairs, in order.
pub(crate) fn svg_style_from_entries(entries: Vec<(&str, String)>) -> SvgStyle {
    entries
        .into_iter()
        .fold(SvgStyle::new(), |style, (key, value)| style.add(key, &value))
}

/// Style entries for a stroked polyline. Dash lengths scale with the line width.
pub(crate) fn line_style_entries(stroke: &Stroke) -> Vec<(&'static str, String)> {
    let mut entries = vec![
        ("fill", "none".to_string()),
        ("stroke", stroke.color.clone()),
        ("stroke-width", fmt_num(stroke.width)),
    ];
    let dashes = stroke.style.dash_pattern();
    if !dashes.is_empty() {
        let dasharray = dashes
            .iter()
            .map(|d| fmt_num(d * stroke.width))
            .collect::<Vec<_>>()
            .join(",");
        entries.push(("stroke-dasharray", dasharray));
    }
    entries
}

pub(crate) fn line_node(frame: &Frame, points: &[DVec2], stroke: &Stroke) -> Option<SvgNode> {
    let (first, rest) = points.split_first()?;
    let start = frame.to_svg(*first);
    let d = rest.iter().fold(PathData::new().m(start.x, start.y), |d, p| {
        let p = frame.to_svg(*p);
        d.l(p.x, p.y)
    });

    Some(SvgNode::Path(Path {
        d: Some(d),
        fill: None,
        stroke: None,
        stroke_width: None,
        stroke_dasharray: None,
        style: svg_style_from_entries(line_style_entries(stroke)),
    }))
}

/// Outline of an arrow in SVG points, tip at `tip`.
///
/// The first polygon is the shaft, present only when the segment is longer
/// than the head; the last is the head triangle. Head sizes are in points
/// and do not scale with the plot. A degenerate segment has no outline.
pub(crate) fn arrow_outline(start: DVec2, tip: DVec2, style: &ArrowStyle) -> Vec<Vec<DVec2>> {
    let delta = tip - start;
    let len = delta.length();
    if len < 1e-9 {
        crate::log::debug!(x = tip.x, y = tip.y, "zero-length arrow, no head drawn");
        return Vec::new();
    }

    let unit = delta / len;
    let perp = dvec2(-unit.y, unit.x);
    let base = tip - unit * style.head_length;

    let mut outline = Vec::with_capacity(2);
    if len > style.head_length {
        let half = style.width / 2.0;
        outline.push(vec![
            start + perp * half,
            base + perp * half,
            base - perp * half,
            start - perp * half,
        ]);
    }
    let half = style.head_width / 2.0;
    outline.push(vec![tip, base + perp * half, base - perp * half]);
    outline
}

pub(crate) fn arrow_nodes(
    frame: &Frame,
    from: DVec2,
    to: DVec2,
    style: &ArrowStyle,
) -> Vec<SvgNode> {
    let entries = vec![
        ("fill", style.fill_color.clone()),
        ("stroke", style.edge_color.clone()),
        ("stroke-width", fmt_num(defaults::ARROW_EDGE_WIDTH)),
    ];
    let svg_style = svg_style_from_entries(entries);

    arrow_outline(frame.to_svg(from), frame.to_svg(to), style)
        .into_iter()
        .map(|polygon| {
            let points = polygon
                .iter()
                .fold(Points::new(), |points, p| points.push(p.x, p.y));
            SvgNode::Polygon(Polygon {
                points,
                fill: None,
                stroke: None,
                stroke_width: None,
                stroke_dasharray: None,
                style: svg_style.clone(),
            })
        })
        .collect()
}

pub(crate) fn text_node(frame: &Frame, at: DVec2, text: &str, style: &TextStyle) -> Text {
    let p = frame.to_svg(at);

    // Negative because SVG Y is flipped
    let transform = (style.rotation != 0.0).then(|| {
        format!(
            "rotate({} {},{})",
            fmt_num_hi(-style.rotation),
            fmt_num(p.x),
            fmt_num(p.y)
        )
    });
    let anchor = match style.ha {
        HAlign::Left => "start",
        HAlign::Center => "middle",
        HAlign::Right => "end",
    };
    let baseline = match style.va {
        VAlign::Top => "hanging",
        VAlign::Center => "central",
        VAlign::Baseline => "alphabetic",
        VAlign::Bottom => "text-after-edge",
    };

    Text {
        x: Some(p.x),
        y: Some(p.y),
        transform,
        fill: None,
        stroke: None,
        stroke_width: None,
        style: String::new(),
        font_family: frame.font_family.clone(),
        font_style: None,
        font_weight: None,
        font_size: Some(fmt_num(frame.font_size)),
        text_anchor: Some(anchor.to_string()),
        dominant_baseline: Some(baseline.to_string()),
        content: text.to_string(),
    }
}

/// Format a number with 6 significant figures, trailing zeros trimmed.
pub(crate) fn fmt_num(value: f64) -> String {
    fmt_num_precision(value, 6)
}

/// Format a number with 10 significant figures (rotation angles).
pub(crate) fn fmt_num_hi(value: f64) -> String {
    fmt_num_precision(value, 10)
}

fn fmt_num_precision(value: f64, sig_figs: i32) -> String {
    if value == 0.0 {
        return "0".to_string();
    }

    // Round to specified significant figures
    let abs_val = value.abs();
    let magnitude = abs_val.log10().floor() as i32;
    let scale = 10_f64.powi(sig_figs - 1 - magnitude);
    let rounded = (value * scale).round() / scale;

    // Format with enough decimal places, then trim
    let decimals = (sig_figs - 1 - magnitude).max(0) as usize;
    let s = format!("{:.prec$}", rounded, prec = decimals);
    if !s.contains('.') {
        return s;
    }
    let s = s.trim_end_matches('0');
    let s = s.trim_end_matches('.');
    s.to_string()
}
