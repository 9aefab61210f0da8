//! Modulation Capability — bit group ↔ constellation symbol
//!
//! The interface between the symbol layer and its neighbors: a
//! symbol-to-waveform stage calls [`Modulation::map`] to turn bit codes
//! into normalized constellation points, and the receive side calls
//! [`Modulation::hard`] or [`Modulation::soft`] to turn recovered I/Q
//! samples back into bit-level decisions for a decoder.
//!
//! Codes are bipolar: −1/+1 for hard decisions, signed confidence metrics
//! for soft decisions. The code's numeric format is chosen by the caller
//! through the [`Code`] parameter.
//!
//! ## Example
//!
//! ```rust
//! use qam_core::{Modulation, QamOrder, SquareQam};
//!
//! let qam = SquareQam::<f64>::new(QamOrder::Qam16);
//! let tx = qam.map(&[1.0, -1.0, 1.0, -1.0], 1);
//!
//! let mut rx = [0.0f64; 4];
//! qam.hard(&mut rx, tx, 1);
//! assert_eq!(rx, [1.0, -1.0, 1.0, -1.0]);
//! ```

use crate::code::Code;
use crate::types::IQSample;

/// Bit-group to constellation-symbol mapping capability.
///
/// One implementor per constellation geometry. All operations are pure:
/// the only effect is writing the caller-supplied output slice, so a
/// single instance can be shared freely across threads.
pub trait Modulation<C: Code>: Send + Sync {
    /// Number of bits carried by one symbol.
    fn bits(&self) -> usize;

    /// Write `bits()` hard decisions (−1/+1) for a received symbol.
    ///
    /// Code `j` is written to `codes[j * stride]`; `stride > 1` supports
    /// interleaved buffers. Panics if the slice is too short for the
    /// addressed slots.
    fn hard(&self, codes: &mut [C], symbol: IQSample, stride: usize);

    /// Write `bits()` quantized soft metrics for a received symbol.
    ///
    /// `precision` scales the slicer distances before quantization and is
    /// typically derived from an estimated noise variance. A precision of
    /// zero yields all-zero codes. Addressing as in [`Modulation::hard`].
    fn soft(&self, codes: &mut [C], symbol: IQSample, precision: f64, stride: usize);

    /// Reconstruct the normalized symbol from `bits()` bipolar codes.
    ///
    /// Inverse of [`Modulation::hard`] on noiseless input. Code `j` is
    /// read from `codes[j * stride]`.
    fn map(&self, codes: &[C], stride: usize) -> IQSample;

    /// Hard-demap a block of symbols into a contiguous code buffer.
    fn hard_block(&self, symbols: &[IQSample]) -> Vec<C> {
        let bits = self.bits();
        let mut codes = vec![C::quantize(0.0); symbols.len() * bits];
        for (group, &symbol) in codes.chunks_exact_mut(bits).zip(symbols) {
            self.hard(group, symbol, 1);
        }
        codes
    }

    /// Soft-demap a block of symbols into a contiguous code buffer.
    fn soft_block(&self, symbols: &[IQSample], precision: f64) -> Vec<C> {
        let bits = self.bits();
        let mut codes = vec![C::quantize(0.0); symbols.len() * bits];
        for (group, &symbol) in codes.chunks_exact_mut(bits).zip(symbols) {
            self.soft(group, symbol, precision, 1);
        }
        codes
    }

    /// Map a contiguous code buffer to symbols, one per `bits()` codes.
    ///
    /// A trailing group shorter than `bits()` is ignored.
    fn map_block(&self, codes: &[C]) -> Vec<IQSample> {
        codes
            .chunks_exact(self.bits())
            .map(|group| self.map(group, 1))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::qam::{QamOrder, SquareQam};

    #[test]
    fn test_hard_block_round_trip() {
        let qam = SquareQam::<f64>::new(QamOrder::Qam64);
        let codes: Vec<f64> = (0..24).map(|i| if i % 3 == 0 { -1.0 } else { 1.0 }).collect();
        let symbols = qam.map_block(&codes);
        assert_eq!(symbols.len(), 4);
        let recovered = qam.hard_block(&symbols);
        assert_eq!(recovered, codes);
    }

    #[test]
    fn test_soft_block_layout() {
        let qam = SquareQam::<f64>::new(QamOrder::Qam16);
        let symbols = vec![qam.map(&[1.0, 1.0, 1.0, 1.0], 1); 3];
        let metrics = qam.soft_block(&symbols, 1.0);
        assert_eq!(metrics.len(), 12);
        // Same symbol three times → same code group three times.
        assert_eq!(metrics[0..4], metrics[4..8]);
        assert_eq!(metrics[4..8], metrics[8..12]);
    }

    #[test]
    fn test_map_block_ignores_partial_group() {
        let qam = SquareQam::<f64>::new(QamOrder::Qam16);
        let codes = [1.0, 1.0, 1.0, 1.0, -1.0, -1.0];
        let symbols = qam.map_block(&codes);
        assert_eq!(symbols.len(), 1);
        assert_eq!(symbols[0], qam.map(&codes[0..4], 1));
    }

    #[test]
    fn test_empty_block() {
        let qam = SquareQam::<f64>::new(QamOrder::Qam256);
        assert!(qam.map_block(&[]).is_empty());
        assert!(qam.hard_block(&[]).is_empty());
        assert!(qam.soft_block(&[], 1.0).is_empty());
    }
}
