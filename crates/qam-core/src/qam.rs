//! Square QAM — Gray-coded constellation mapper / demapper
//!
//! Implements bit ↔ symbol conversion for square, Gray-coded QAM of orders
//! 16, 64, 256, and 1024, normalized to unit average symbol energy.
//! The demapper is a hierarchical slicer: each axis is folded around
//! successively halved amplitude thresholds, one Gray bit per fold. The
//! hard and soft paths share the same fold sequence and differ only in
//! what they record at each level: the comparison sign, or the signed
//! distance to the threshold scaled by the caller's precision.
//! GNU Radio equivalents: `constellation_decoder_cb` /
//! `constellation_soft_decoder_cf`.
//!
//! ## Example
//!
//! ```rust
//! use qam_core::{Modulation, QamOrder, SquareQam};
//!
//! let qam = SquareQam::<f64>::new(QamOrder::Qam16);
//! assert_eq!(qam.bits(), 4);
//!
//! // All-ones code word maps to the outer corner of the first quadrant.
//! let sym = qam.map(&[1.0; 4], 1);
//! assert!((sym.re - 0.9486832980505138).abs() < 1e-12);
//!
//! // Noiseless hard demapping inverts the mapping.
//! let mut codes = [0.0f64; 4];
//! qam.hard(&mut codes, sym, 1);
//! assert_eq!(codes, [1.0; 4]);
//! ```

use std::fmt;
use std::marker::PhantomData;

use serde::{Deserialize, Serialize};

use crate::code::Code;
use crate::modulation::Modulation;
use crate::types::{DspError, DspResult, IQSample};

/// Supported square QAM constellation orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QamOrder {
    /// 16-QAM: 4 bits per symbol on a 4×4 grid.
    Qam16,
    /// 64-QAM: 6 bits per symbol on an 8×8 grid.
    Qam64,
    /// 256-QAM: 8 bits per symbol on a 16×16 grid.
    Qam256,
    /// 1024-QAM: 10 bits per symbol on a 32×32 grid.
    Qam1024,
}

impl QamOrder {
    /// All supported orders, smallest first.
    pub const ALL: [QamOrder; 4] = [
        QamOrder::Qam16,
        QamOrder::Qam64,
        QamOrder::Qam256,
        QamOrder::Qam1024,
    ];

    /// Number of points in the constellation.
    pub const fn points(self) -> usize {
        match self {
            QamOrder::Qam16 => 16,
            QamOrder::Qam64 => 64,
            QamOrder::Qam256 => 256,
            QamOrder::Qam1024 => 1024,
        }
    }

    /// Bits carried by one symbol (log2 of the point count).
    pub const fn bits(self) -> usize {
        match self {
            QamOrder::Qam16 => 4,
            QamOrder::Qam64 => 6,
            QamOrder::Qam256 => 8,
            QamOrder::Qam1024 => 10,
        }
    }

    /// Bits per axis: each axis is an independent Gray-coded PAM line.
    pub const fn pam_bits(self) -> usize {
        self.bits() / 2
    }

    /// Average-energy correction factor for this grid geometry.
    ///
    /// The unit-energy amplitude step is `1 / ((√N − 1) × factor)`.
    pub const fn energy_factor(self) -> f64 {
        match self {
            QamOrder::Qam16 => 1.0540925533894596,
            QamOrder::Qam64 => 0.9258200997725516,
            QamOrder::Qam256 => 0.8692269873603529,
            QamOrder::Qam1024 => 0.8424235391742344,
        }
    }
}

impl TryFrom<usize> for QamOrder {
    type Error = DspError;

    fn try_from(points: usize) -> DspResult<Self> {
        match points {
            16 => Ok(QamOrder::Qam16),
            64 => Ok(QamOrder::Qam64),
            256 => Ok(QamOrder::Qam256),
            1024 => Ok(QamOrder::Qam1024),
            other => Err(DspError::UnsupportedOrder(other)),
        }
    }
}

impl fmt::Display for QamOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-QAM", self.points())
    }
}

/// Square Gray-coded QAM mapper/demapper.
///
/// One instance per constellation order, selected at configuration time.
/// The code type `C` fixes the numeric representation handed to the
/// downstream decoder (see [`Code`]). Instances are immutable and cheap to
/// clone; all per-symbol operations run in O(bits).
#[derive(Debug, Clone)]
pub struct SquareQam<C: Code = f64> {
    order: QamOrder,
    pam_bits: usize,
    /// Amplitude step: constellation levels sit at odd multiples of this.
    amp: f64,
    /// Distance between adjacent levels (2 × amp); soft-metric scale base.
    dist: f64,
    _code: PhantomData<C>,
}

impl<C: Code> SquareQam<C> {
    /// Create a mapper/demapper for the given order.
    pub fn new(order: QamOrder) -> Self {
        let pam_bits = order.pam_bits();
        let levels = (1usize << pam_bits) as f64;
        let rcp = (levels - 1.0) * order.energy_factor();
        Self {
            order,
            pam_bits,
            amp: 1.0 / rcp,
            dist: 2.0 / rcp,
            _code: PhantomData,
        }
    }

    /// Create from a runtime point count (16, 64, 256, or 1024).
    ///
    /// Any other value is rejected here, before any per-symbol call.
    pub fn with_points(points: usize) -> DspResult<Self> {
        Ok(Self::new(QamOrder::try_from(points)?))
    }

    /// The constellation order.
    pub fn order(&self) -> QamOrder {
        self.order
    }

    /// Amplitude step between a level and the nearest decision threshold.
    pub fn amplitude(&self) -> f64 {
        self.amp
    }

    /// Spacing between adjacent constellation levels on one axis.
    pub fn spacing(&self) -> f64 {
        self.dist
    }

    /// Average-energy correction factor of this order.
    pub fn energy_factor(&self) -> f64 {
        self.order.energy_factor()
    }

    /// All constellation points, one per code word.
    ///
    /// Point `w` is `map` of the code word whose bit `j` is +1 when bit
    /// `j` of `w` is set. Mean squared magnitude over the set is 1.
    pub fn constellation(&self) -> Vec<IQSample> {
        let bits = self.order.bits();
        (0..self.order.points())
            .map(|word| {
                let codes: Vec<C> = (0..bits).map(|j| C::bipolar((word >> j) & 1 == 0)).collect();
                self.map(&codes, 1)
            })
            .collect()
    }

    /// `i`-th decision threshold along one axis.
    #[inline]
    fn threshold(&self, i: usize) -> f64 {
        self.amp * i as f64
    }

    /// Run the per-axis folding sequence, emitting one residual per level.
    ///
    /// Level 0 is the raw axis value (sign bit). Each further level folds
    /// the magnitude around a halving threshold: the residual's sign is
    /// that level's Gray bit, its value the distance to the threshold.
    #[inline]
    fn fold_axis<F: FnMut(usize, f64)>(&self, x: f64, mut emit: F) {
        let mut residual = x;
        emit(0, residual);
        let mut step = 1usize << (self.pam_bits - 1);
        for level in 1..self.pam_bits {
            residual = residual.abs() - self.threshold(step);
            emit(level, residual);
            step >>= 1;
        }
    }

    /// Reconstruct one axis value from its codes, innermost bit first.
    #[inline]
    fn map_axis(&self, codes: &[C], axis: usize, stride: usize) -> f64 {
        let code = |level: usize| codes[(2 * level + axis) * stride].level();
        let k = self.pam_bits;
        let mut value = 0.0;
        for level in (1..k).rev() {
            value = code(level) * (value + (1usize << (k - 1 - level)) as f64);
        }
        self.amp * code(0) * (value + (1usize << (k - 1)) as f64)
    }
}

impl<C: Code> Modulation<C> for SquareQam<C> {
    fn bits(&self) -> usize {
        self.order.bits()
    }

    fn hard(&self, codes: &mut [C], symbol: IQSample, stride: usize) {
        debug_assert!(codes.len() > (self.order.bits() - 1) * stride);
        for (axis, x) in [symbol.re, symbol.im].into_iter().enumerate() {
            self.fold_axis(x, |level, residual| {
                codes[(2 * level + axis) * stride] = C::bipolar(residual < 0.0);
            });
        }
    }

    fn soft(&self, codes: &mut [C], symbol: IQSample, precision: f64, stride: usize) {
        debug_assert!(codes.len() > (self.order.bits() - 1) * stride);
        let scale = self.dist * precision;
        for (axis, x) in [symbol.re, symbol.im].into_iter().enumerate() {
            self.fold_axis(x, |level, residual| {
                codes[(2 * level + axis) * stride] = C::quantize(scale * residual);
            });
        }
    }

    fn map(&self, codes: &[C], stride: usize) -> IQSample {
        debug_assert!(codes.len() > (self.order.bits() - 1) * stride);
        IQSample::new(
            self.map_axis(codes, 0, stride),
            self.map_axis(codes, 1, stride),
        )
    }
}
