//! Drawing surfaces for phasors
//!
//! This module is organized into submodules:
//! - `defaults`: Default sizes and settings
//! - `command`: Recorded line / arrow / text commands
//! - `recorder`: A `Surface` that records commands (tests, SVG figures)
//! - `svg`: SVG generation from recorded commands
//!
//! Coordinates handed to a [`Surface`] are per-unit plot coordinates with
//! +y pointing up. Style sizes (line width, arrow geometry) are in points.

pub mod command;
pub mod defaults;
pub mod recorder;
pub mod svg;

pub use command::{ArrowCommand, Command, DrawCommand, LineCommand, TextCommand};
pub use recorder::Recorder;
pub use svg::{SvgOptions, render_svg};

use glam::DVec2;

use crate::errors::Result;
use crate::style::{HAlign, LineStyle, VAlign};

/// Stroke used for polylines.
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    pub color: String,
    pub style: LineStyle,
    pub width: f64,
}

impl Default for Stroke {
    fn default() -> Self {
        Self {
            color: defaults::COLOR.to_string(),
            style: LineStyle::Solid,
            width: defaults::LINE_WIDTH,
        }
    }
}

/// Style of a single-segment arrow. Arrows are always drawn solid.
#[derive(Debug, Clone, PartialEq)]
pub struct ArrowStyle {
    pub edge_color: String,
    pub fill_color: String,
    /// Shaft width in points
    pub width: f64,
    /// Head length in points
    pub head_length: f64,
    /// Full head width in points
    pub head_width: f64,
}

impl Default for ArrowStyle {
    fn default() -> Self {
        Self {
            edge_color: defaults::COLOR.to_string(),
            fill_color: defaults::COLOR.to_string(),
            width: defaults::ARROW_WIDTH,
            head_length: defaults::HEAD_LENGTH,
            head_width: defaults::HEAD_WIDTH,
        }
    }
}

/// Placement of a text label around its anchor.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TextStyle {
    pub ha: HAlign,
    pub va: VAlign,
    /// Counter-clockwise rotation in degrees
    pub rotation: f64,
}

/// The three primitives a plotting backend must provide.
pub trait Surface {
    /// Draw a polyline through `points`.
    fn draw_line(&mut self, points: &[DVec2], stroke: &Stroke) -> Result<()>;

    /// Draw an arrow from `from` with its head at `to`.
    fn draw_arrow(&mut self, from: DVec2, to: DVec2, style: &ArrowStyle) -> Result<()>;

    /// Draw `text` anchored at `at`.
    fn draw_text(&mut self, at: DVec2, text: &str, style: &TextStyle) -> Result<()>;
}

impl<S: Surface + ?Sized> Surface for &mut S {
    fn draw_line(&mut self, points: &[DVec2], stroke: &Stroke) -> Result<()> {
        (**self).draw_line(points, stroke)
    }

    fn draw_arrow(&mut self, from: DVec2, to: DVec2, style: &ArrowStyle) -> Result<()> {
        (**self).draw_arrow(from, to, style)
    }

    fn draw_text(&mut self, at: DVec2, text: &str, style: &TextStyle) -> Result<()> {
        (**self).draw_text(at, text, style)
    }
}
