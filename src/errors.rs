//! Error types with diagnostics using miette
//!
//! Unit mismatches are the only error the phasor geometry raises on its own;
//! the rest come from the rendering side.

use miette::Diagnostic;
use thiserror::Error;

use crate::types::NumericError;

/// Errors raised while building or rendering phasors
#[derive(Error, Diagnostic, Debug)]
pub enum Error {
    #[error(
        "`c` ({phasor}), `origin` ({origin}) and `ref` ({reference}) must share a coherent unit"
    )]
    #[diagnostic(
        code(phasorplot::units::dimension_mismatch),
        help("express the phasor, its origin and the reference scale in the same physical dimension")
    )]
    DimensionMismatch {
        phasor: String,
        origin: String,
        reference: String,
    },

    #[error("reference magnitude must be positive and finite, got {value}")]
    #[diagnostic(
        code(phasorplot::phasor::invalid_reference),
        help("pass an explicit `ref` when drawing a zero phasor")
    )]
    InvalidReference { value: f64 },

    #[error("invalid scale {value}: {reason}")]
    #[diagnostic(code(phasorplot::render::invalid_scale))]
    InvalidScale {
        value: f64,
        #[source]
        reason: NumericError,
    },

    #[error("infinite or NaN in bounds")]
    #[diagnostic(code(phasorplot::render::invalid_bounds))]
    InvalidBounds,

    #[error("unknown {kind}: {value:?}")]
    #[diagnostic(code(phasorplot::style::unknown))]
    UnknownStyle { kind: &'static str, value: String },

    /// Failure reported by a third-party drawing surface, passed through as is.
    #[error(transparent)]
    #[diagnostic(code(phasorplot::render::surface))]
    Surface(Box<dyn std::error::Error + Send + Sync>),

    #[error("SVG serialization failed: {message}")]
    #[diagnostic(code(phasorplot::render::serialize))]
    Serialize { message: String },
}

impl Error {
    /// Wrap an error raised by an external drawing surface.
    pub fn surface(err: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Error::Surface(err.into())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
