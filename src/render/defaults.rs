//! Default sizes and settings (lengths in points unless noted)

/// Points per per-unit length in SVG output.
pub const POINTS_PER_UNIT: f64 = 144.0;
pub const MARGIN: f64 = 12.0;
pub const FONT_SIZE: f64 = 12.0;
/// Outline width of arrowheads; the head is always drawn solid.
pub const ARROW_EDGE_WIDTH: f64 = 1.0;

pub const COLOR: &str = "black";
pub const LINE_WIDTH: f64 = 1.0;
pub const ARROW_WIDTH: f64 = 0.2;
pub const HEAD_LENGTH: f64 = 10.0;
pub const HEAD_WIDTH: f64 = 5.0;

/// Label position along the phasor (0 = tail, 1 = head).
pub const RLABEL: f64 = 0.5;
/// Label offset along the tangential direction, per-unit.
pub const TLABEL: f64 = 0.1;
/// Fraction of the phasor after which the solid head starts.
pub const HEAD_ROOT: f64 = 0.99;
