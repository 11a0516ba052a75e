//! Recorded drawing commands
//!
//! Each command is its own type that knows how to:
//! - Replay itself onto another surface
//! - Grow a bounding box to cover itself
//! - Turn itself into SVG nodes

use enum_dispatch::enum_dispatch;
use facet_svg::SvgNode;
use glam::DVec2;

use super::svg::{self, Frame};
use super::{ArrowStyle, Stroke, Surface, TextStyle};
use crate::errors::Result;
use crate::types::BBox;

/// Common behavior for all recorded commands
#[enum_dispatch]
pub trait Command {
    /// Issue this command again on `surface`.
    fn replay(&self, surface: &mut dyn Surface) -> Result<()>;

    /// Grow `bounds` to include the command's anchor points.
    fn extend_bounds(&self, bounds: &mut BBox);

    /// SVG element(s) for this command, in drawing order.
    fn svg_nodes(&self, frame: &Frame) -> Vec<SvgNode>;
}

/// A polyline
#[derive(Debug, Clone, PartialEq)]
pub struct LineCommand {
    pub points: Vec<DVec2>,
    pub stroke: Stroke,
}

impl Command for LineCommand {
    fn replay(&self, surface: &mut dyn Surface) -> Result<()> {
        surface.draw_line(&self.points, &self.stroke)
    }

    fn extend_bounds(&self, bounds: &mut BBox) {
        for p in &self.points {
            bounds.expand_point(*p);
        }
    }

    fn svg_nodes(&self, frame: &Frame) -> Vec<SvgNode> {
        svg::line_node(frame, &self.points, &self.stroke)
            .into_iter()
            .collect()
    }
}

/// A single-segment arrow, head at `to`
#[derive(Debug, Clone, PartialEq)]
pub struct ArrowCommand {
    pub from: DVec2,
    pub to: DVec2,
    pub style: ArrowStyle,
}

impl Command for ArrowCommand {
    fn replay(&self, surface: &mut dyn Surface) -> Result<()> {
        surface.draw_arrow(self.from, self.to, &self.style)
    }

    fn extend_bounds(&self, bounds: &mut BBox) {
        bounds.expand_point(self.from);
        bounds.expand_point(self.to);
    }

    fn svg_nodes(&self, frame: &Frame) -> Vec<SvgNode> {
        svg::arrow_nodes(frame, self.from, self.to, &self.style)
    }
}

/// A text label
#[derive(Debug, Clone, PartialEq)]
pub struct TextCommand {
    pub at: DVec2,
    pub text: String,
    pub style: TextStyle,
}

impl Command for TextCommand {
    fn replay(&self, surface: &mut dyn Surface) -> Result<()> {
        surface.draw_text(self.at, &self.text, &self.style)
    }

    // Empty labels take no room.
    fn extend_bounds(&self, bounds: &mut BBox) {
        if !self.text.is_empty() {
            bounds.expand_point(self.at);
        }
    }

    fn svg_nodes(&self, frame: &Frame) -> Vec<SvgNode> {
        if self.text.is_empty() {
            return Vec::new();
        }
        vec![SvgNode::Text(svg::text_node(
            frame,
            self.at,
            &self.text,
            &self.style,
        ))]
    }
}

/// Any recorded command, in issue order
#[enum_dispatch(Command)]
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Line(LineCommand),
    Arrow(ArrowCommand),
    Text(TextCommand),
}

impl DrawCommand {
    pub fn as_line(&self) -> Option<&LineCommand> {
        match self {
            DrawCommand::Line(l) => Some(l),
            _ => None,
        }
    }

    pub fn as_arrow(&self) -> Option<&ArrowCommand> {
        match self {
            DrawCommand::Arrow(a) => Some(a),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&TextCommand> {
        match self {
            DrawCommand::Text(t) => Some(t),
            _ => None,
        }
    }
}
