//! Phasor diagrams for AC circuit analysis.
//!
//! Phasors are complex numbers, optionally tagged with a physical unit.
//! [`draw_phasor`] divides one down to per-unit coordinates and draws it as
//! a shaft, an arrowhead and a label on any [`Surface`]. [`Recorder`] is the
//! built-in surface; it keeps the drawing calls and renders them to SVG.
//!
//! ```
//! use num_complex::Complex64;
//! use phasorplot::{PhasorOptions, Recorder, SvgOptions, draw_phasor, polar};
//! use phasorplot::{types::Angle, units::{AMPERE, VOLT}};
//!
//! let v = polar(230.0 * VOLT, Angle::degrees(0.0));
//! let i = polar(5.0 * AMPERE, Angle::degrees(-30.0));
//!
//! let mut fig = Recorder::new();
//! draw_phasor(&mut fig, v, &PhasorOptions::new().with_label("V"))?;
//! draw_phasor(&mut fig, i, &PhasorOptions::new().with_label("I").with_color("red"))?;
//! let svg = fig.to_svg(&SvgOptions::default())?;
//! assert!(svg.starts_with("<svg"));
//! # Ok::<(), phasorplot::Error>(())
//! ```

#![forbid(unsafe_code)]

pub mod errors;
pub mod log;
pub mod phasor;
pub mod polar;
pub mod render;
pub mod style;
pub mod types;
pub mod units;

pub use errors::{Error, Result};
pub use phasor::{PhasorGeometry, PhasorOptions, draw_phasor};
pub use polar::{Magnitude, polar};
pub use render::{Recorder, Surface, SvgOptions};
