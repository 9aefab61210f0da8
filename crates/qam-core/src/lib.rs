//! # QAM Symbol Core
//!
//! Constellation mapper/demapper for square, Gray-coded Quadrature
//! Amplitude Modulation (QAM) of orders 16, 64, 256, and 1024: the
//! symbol layer of a digital modem. It converts between groups of bits
//! and normalized complex constellation points, and converts noisy
//! received samples back into bit-level decisions, either hard (±1) or as
//! precision-scaled soft metrics for a soft-decision FEC decoder.
//!
//! Everything surrounding this layer in a full modem (pulse shaping,
//! timing/carrier recovery, error correction, framing) is an external
//! collaborator: it supplies complex samples and precision estimates and
//! consumes the bit codes or symbols produced here.
//!
//! ## Signal Flow
//!
//! ```text
//! TX: bit codes ──▶ map ──▶ I/Q symbol ──▶ (pulse shaping / upconversion)
//! RX: (carrier & timing recovery) ──▶ I/Q sample ──▶ hard / soft ──▶ FEC decoder
//! ```
//!
//! ## Example
//!
//! ```rust
//! use qam_core::{Modulation, QamOrder, SquareQam};
//!
//! // Select the order at configuration time.
//! let qam = SquareQam::<f64>::new(QamOrder::Qam64);
//! assert_eq!(qam.bits(), 6);
//!
//! // Map six bipolar codes onto a unit-energy constellation point.
//! let tx = qam.map(&[1.0, -1.0, 1.0, 1.0, -1.0, -1.0], 1);
//!
//! // Demap a (here: noiseless) received sample back to soft metrics.
//! let mut llrs = [0.0f64; 6];
//! qam.soft(&mut llrs, tx, 4.0, 1);
//! assert!(llrs[0] > 0.0 && llrs[1] < 0.0);
//! ```
//!
//! The code representation is selectable: `SquareQam<i8>` produces
//! round-and-saturate fixed-point metrics for integer decoders, while
//! `SquareQam<f64>`/`SquareQam<f32>` pass metrics through unquantized.

pub mod code;
pub mod modulation;
pub mod qam;
pub mod types;

// Re-export main types
pub use code::Code;
pub use modulation::Modulation;
pub use qam::{QamOrder, SquareQam};
pub use types::{Complex, DspError, DspResult, IQBuffer, IQSample, Sample};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::code::Code;
    pub use crate::modulation::Modulation;
    pub use crate::qam::{QamOrder, SquareQam};
    pub use crate::types::{Complex, DspResult, IQSample};
}
