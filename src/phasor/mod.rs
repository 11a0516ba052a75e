//! Drawing a single phasor: a shaft, an arrowhead and a label.

mod geometry;
mod options;

pub use geometry::PhasorGeometry;
pub use options::PhasorOptions;

use num_complex::Complex64;

use crate::errors::Result;
use crate::log::debug;
use crate::render::Surface;
use crate::units::Quantity;

/// Draw the phasor `c` on `surface`.
///
/// The phasor, its origin and the reference are divided down to per-unit
/// values first. Exactly three calls then reach the surface, in order: the
/// shaft line, the arrowhead and the label. A unit mismatch is reported
/// before anything is drawn.
///
/// ```
/// use num_complex::Complex64;
/// use phasorplot::{PhasorOptions, Recorder, draw_phasor, units::VOLT};
///
/// let mut fig = Recorder::new();
/// let v = Complex64::new(0.0, 230.0) * VOLT;
/// draw_phasor(&mut fig, v, &PhasorOptions::default().with_label("V"))?;
/// assert_eq!(fig.len(), 3);
/// # Ok::<(), phasorplot::Error>(())
/// ```
pub fn draw_phasor<S: Surface + ?Sized>(
    surface: &mut S,
    c: impl Into<Quantity<Complex64>>,
    options: &PhasorOptions,
) -> Result<()> {
    let c = c.into();
    let geometry = PhasorGeometry::compute(&c, options)?;
    debug!(phasor = %c, label = %options.label, "drawing phasor");

    surface.draw_line(&geometry.shaft(), &options.stroke())?;
    let (from, to) = geometry.head();
    surface.draw_arrow(from, to, &options.arrow_style())?;
    surface.draw_text(
        geometry.label_anchor,
        &options.label,
        &options.text_style(geometry.label_rotation),
    )?;
    Ok(())
}
