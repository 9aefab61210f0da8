//! Code Representations — numeric formats for bit-level decisions
//!
//! A demapped bit is carried as a signed scalar "code": its sign is the
//! hard decision and its magnitude the confidence. Downstream decoders
//! differ in what they want that scalar to be: floating point for a
//! soft-decision decoder working in natural units, or a narrow saturating
//! integer for a fixed-point decoder. The [`Code`] trait captures that
//! choice so the slicer and mapper stay independent of the numeric format.
//!
//! ## Example
//!
//! ```rust
//! use qam_core::code::Code;
//!
//! // Floating point passes the metric through unchanged.
//! assert_eq!(<f64 as Code>::quantize(0.25), 0.25);
//!
//! // i8 rounds to nearest and saturates instead of wrapping.
//! assert_eq!(<i8 as Code>::quantize(3.6), 4);
//! assert_eq!(<i8 as Code>::quantize(300.0), 127);
//! assert_eq!(<i8 as Code>::quantize(-300.0), -128);
//! ```

use std::fmt::Debug;

/// Numeric representation of one demapped bit code.
///
/// Implementations adapt a continuous slicer metric to the representation
/// a downstream decoder consumes. This is the only place numeric-format
/// adaptation happens; the slicer itself always works in `f64`.
pub trait Code: Copy + Send + Sync + Debug + 'static {
    /// Bipolar hard-decision code: −1 when `negative`, +1 otherwise.
    fn bipolar(negative: bool) -> Self;

    /// Convert a scaled soft metric into this representation.
    ///
    /// Integral representations round to nearest; `i8` additionally
    /// saturates to `[-128, 127]`. Out-of-range values are clamped,
    /// never rejected.
    fn quantize(value: f64) -> Self;

    /// Numeric level of this code, used by the symbol mapper.
    fn level(self) -> f64;
}

impl Code for f64 {
    #[inline]
    fn bipolar(negative: bool) -> Self {
        if negative {
            -1.0
        } else {
            1.0
        }
    }

    #[inline]
    fn quantize(value: f64) -> Self {
        value
    }

    #[inline]
    fn level(self) -> f64 {
        self
    }
}

impl Code for f32 {
    #[inline]
    fn bipolar(negative: bool) -> Self {
        if negative {
            -1.0
        } else {
            1.0
        }
    }

    #[inline]
    fn quantize(value: f64) -> Self {
        value as f32
    }

    #[inline]
    fn level(self) -> f64 {
        f64::from(self)
    }
}

impl Code for i8 {
    #[inline]
    fn bipolar(negative: bool) -> Self {
        if negative {
            -1
        } else {
            1
        }
    }

    #[inline]
    fn quantize(value: f64) -> Self {
        value.round().clamp(-128.0, 127.0) as i8
    }

    #[inline]
    fn level(self) -> f64 {
        f64::from(self)
    }
}
