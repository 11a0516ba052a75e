//! Display options for a single phasor.

use num_complex::Complex64;

use crate::render::{ArrowStyle, Stroke, TextStyle, defaults};
use crate::style::{HAlign, LineStyle, VAlign};
use crate::units::Quantity;

/// Every knob of [`draw_phasor`](super::draw_phasor), each independently
/// defaulted.
///
/// ```
/// use phasorplot::{PhasorOptions, style::LineStyle};
///
/// let opts = PhasorOptions::default()
///     .with_label("I₁")
///     .with_tlabel(-0.1)
///     .with_linestyle(LineStyle::Dashed)
///     .with_color("tab:red");
/// assert_eq!(opts.rlabel, 0.5);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PhasorOptions {
    /// Tail of the phasor; `None` means zero in the phasor's unit.
    pub origin: Option<Quantity<Complex64>>,
    /// Per-unit base; `None` means `abs(c)`, so a lone phasor has length 1.
    pub reference: Option<Quantity<f64>>,
    /// Per-unit sideways shift of the whole phasor.
    pub par: f64,
    /// Label position along the phasor: 0 at the tail, 1 at the head.
    pub rlabel: f64,
    /// Per-unit label offset along the tangential direction.
    pub tlabel: f64,
    pub label: String,
    pub ha: HAlign,
    pub va: VAlign,
    /// Add the phasor's own angle to the label rotation.
    pub relrot: bool,
    /// Extra label rotation in degrees.
    pub relangle: f64,
    pub color: String,
    pub linestyle: LineStyle,
    pub linewidth: f64,
    /// Arrow shaft width in points.
    pub width: f64,
    pub headlength: f64,
    pub headwidth: f64,
}

impl Default for PhasorOptions {
    fn default() -> Self {
        Self {
            origin: None,
            reference: None,
            par: 0.0,
            rlabel: defaults::RLABEL,
            tlabel: defaults::TLABEL,
            label: String::new(),
            ha: HAlign::Center,
            va: VAlign::Center,
            relrot: false,
            relangle: 0.0,
            color: defaults::COLOR.to_string(),
            linestyle: LineStyle::Solid,
            linewidth: defaults::LINE_WIDTH,
            width: defaults::ARROW_WIDTH,
            headlength: defaults::HEAD_LENGTH,
            headwidth: defaults::HEAD_WIDTH,
        }
    }
}

impl PhasorOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_origin(mut self, origin: impl Into<Quantity<Complex64>>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    pub fn with_reference(mut self, reference: impl Into<Quantity<f64>>) -> Self {
        self.reference = Some(reference.into());
        self
    }

    pub fn with_par(mut self, par: f64) -> Self {
        self.par = par;
        self
    }

    pub fn with_rlabel(mut self, rlabel: f64) -> Self {
        self.rlabel = rlabel;
        self
    }

    pub fn with_tlabel(mut self, tlabel: f64) -> Self {
        self.tlabel = tlabel;
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn with_ha(mut self, ha: HAlign) -> Self {
        self.ha = ha;
        self
    }

    pub fn with_va(mut self, va: VAlign) -> Self {
        self.va = va;
        self
    }

    pub fn with_relrot(mut self, relrot: bool) -> Self {
        self.relrot = relrot;
        self
    }

    pub fn with_relangle(mut self, degrees: f64) -> Self {
        self.relangle = degrees;
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    pub fn with_linestyle(mut self, linestyle: LineStyle) -> Self {
        self.linestyle = linestyle;
        self
    }

    pub fn with_linewidth(mut self, linewidth: f64) -> Self {
        self.linewidth = linewidth;
        self
    }

    pub fn with_width(mut self, width: f64) -> Self {
        self.width = width;
        self
    }

    pub fn with_headlength(mut self, headlength: f64) -> Self {
        self.headlength = headlength;
        self
    }

    pub fn with_headwidth(mut self, headwidth: f64) -> Self {
        self.headwidth = headwidth;
        self
    }

    /// Stroke for the shaft.
    pub fn stroke(&self) -> Stroke {
        Stroke {
            color: self.color.clone(),
            style: self.linestyle,
            width: self.linewidth,
        }
    }

    /// Style for the head; always solid and filled with the shaft color.
    pub fn arrow_style(&self) -> ArrowStyle {
        ArrowStyle {
            edge_color: self.color.clone(),
            fill_color: self.color.clone(),
            width: self.width,
            head_length: self.headlength,
            head_width: self.headwidth,
        }
    }

    pub(crate) fn text_style(&self, rotation: f64) -> TextStyle {
        TextStyle {
            ha: self.ha,
            va: self.va,
            rotation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::VOLT;

    #[test]
    fn defaults() {
        let o = PhasorOptions::default();
        assert_eq!(o.origin, None);
        assert_eq!(o.reference, None);
        assert_eq!(o.par, 0.0);
        assert_eq!(o.rlabel, 0.5);
        assert_eq!(o.tlabel, 0.1);
        assert_eq!(o.label, "");
        assert_eq!((o.ha, o.va), (HAlign::Center, VAlign::Center));
        assert!(!o.relrot);
        assert_eq!(o.relangle, 0.0);
        assert_eq!(o.color, "black");
        assert_eq!(o.linestyle, LineStyle::Solid);
        assert_eq!(o.linewidth, 1.0);
        assert_eq!((o.width, o.headlength, o.headwidth), (0.2, 10.0, 5.0));
    }

    #[test]
    fn builder_sets_fields() {
        let o = PhasorOptions::new()
            .with_origin(Complex64::new(1.0, 0.0) * VOLT)
            .with_reference(10.0 * VOLT)
            .with_par(0.05)
            .with_relrot(true)
            .with_relangle(90.0)
            .with_linewidth(2.0);
        assert_eq!(o.origin.unwrap().unit, VOLT);
        assert_eq!(o.reference.unwrap().value, 10.0);
        assert_eq!(o.par, 0.05);
        assert!(o.relrot);
        assert_eq!(o.relangle, 90.0);
        assert_eq!(o.linewidth, 2.0);
    }

    #[test]
    fn head_is_always_solid_and_filled() {
        let o = PhasorOptions::new()
            .with_color("red")
            .with_linestyle(LineStyle::Dotted);
        let head = o.arrow_style();
        assert_eq!(head.edge_color, "red");
        assert_eq!(head.fill_color, "red");
        assert_eq!(o.stroke().style, LineStyle::Dotted);
    }
}
