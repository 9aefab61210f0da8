//! Core types for the QAM symbol layer
//!
//! This module defines the fundamental types used throughout the crate,
//! particularly for representing complex I/Q (In-phase/Quadrature) samples.
//!
//! ## Understanding I/Q Samples
//!
//! Digital modems represent baseband signals as complex numbers where:
//! - **I (In-phase)**: The real component, aligned with the reference carrier
//! - **Q (Quadrature)**: The imaginary component, 90° out of phase
//!
//! A QAM constellation point is one such complex number; its position on
//! the I/Q grid carries the transmitted bits.
//!
//! ```text
//!            Q (Imaginary)
//!            ^
//!            |  ·   ·   ·   ·
//!            |  ·   ·   ·   ·
//!   ---------+---------------> I (Real)
//!            |  ·   ·   ·   ·
//!            |  ·   ·   ·   ·
//! ```

use num_complex::Complex64;

/// Type alias for complex numbers using f64 precision
pub type Complex = Complex64;

/// A single I/Q sample point
pub type IQSample = Complex64;

/// A floating point sample (for real-valued signals)
pub type Sample = f64;

/// A buffer of I/Q samples
pub type IQBuffer = Vec<IQSample>;

/// Result type for symbol-layer operations
pub type DspResult<T> = Result<T, DspError>;

/// Errors that can occur in the symbol layer
///
/// All errors are configuration-time failures: per-symbol operations are
/// total functions and never fail on finite inputs.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DspError {
    #[error("Unsupported QAM order: {0}. Must be 16, 64, 256, or 1024")]
    UnsupportedOrder(usize),
}
