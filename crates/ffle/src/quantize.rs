//! Rescaling channel values of other bit depths to 16 bits
//!
//! Farbfeld only carries 16 bit channels, sources with a different depth have
//! their values mapped linearly from `[0, 2^depth - 1]` onto `[0, 65535]` before
//! rows reach the encoder.
use alloc::vec::Vec;

use ffle_core::bit_depth::BitDepth;

use crate::errors::EncodeErrors;

const TARGET_MAX: u128 = u16::MAX as u128;

/// Rescale `value` from `[0, source_max]` to `[0, 65535]`, rounding to nearest
///
/// `source_max` must be `2^depth - 1` for a depth in `1..=64`.
/// Values above `source_max` saturate at `65535`.
///
/// ```
/// use ffle::to_channel16;
/// assert_eq!(to_channel16(0, 255).unwrap(), 0);
/// assert_eq!(to_channel16(255, 255).unwrap(), 65535);
/// assert_eq!(to_channel16(128, 255).unwrap(), 32896);
/// ```
pub fn to_channel16(value: u64, source_max: u64) -> Result<u16, EncodeErrors> {
    // all ones: zero when one is added
    if source_max == 0 || source_max & source_max.wrapping_add(1) != 0 {
        return Err(EncodeErrors::InvalidBitDepth(64 - source_max.leading_zeros()));
    }
    Ok(rescale(value, source_max))
}

#[inline]
fn rescale(value: u64, source_max: u64) -> u16 {
    let value = u128::from(value.min(source_max));
    let source_max = u128::from(source_max);

    let scaled = (value * TARGET_MAX + source_max / 2) / source_max;
    // value <= source_max keeps this within u16
    scaled as u16
}

/// A reusable rescaler for one source bit depth
///
/// ```
/// use ffle::Quantizer;
/// let quantizer = Quantizer::new(10).unwrap();
/// assert_eq!(quantizer.to_channel16(1023), 65535);
/// assert_eq!(quantizer.quantize_row(&[0_u16, 1023]), [0, 65535]);
/// ```
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Quantizer {
    bits:      u32,
    max_value: u64
}

impl Quantizer {
    /// Create a quantizer for values of `bits` bits
    ///
    /// # Errors
    /// [`EncodeErrors::InvalidBitDepth`] unless `1 <= bits <= 64`
    pub fn new(bits: u32) -> Result<Quantizer, EncodeErrors> {
        if !(1..=64).contains(&bits) {
            return Err(EncodeErrors::InvalidBitDepth(bits));
        }
        let max_value = u64::MAX >> (64 - bits);

        Ok(Quantizer { bits, max_value })
    }

    pub const fn bits(&self) -> u32 {
        self.bits
    }

    /// Largest source value, `2^bits - 1`
    pub const fn max_value(&self) -> u64 {
        self.max_value
    }

    pub fn to_channel16(&self, value: u64) -> u16 {
        rescale(value, self.max_value)
    }

    /// Rescale a whole row of channel values
    pub fn quantize_row<V: Copy + Into<u64>>(&self, values: &[V]) -> Vec<u16> {
        values
            .iter()
            .map(|v| self.to_channel16((*v).into()))
            .collect()
    }
}

impl From<BitDepth> for Quantizer {
    fn from(depth: BitDepth) -> Self {
        Quantizer {
            bits:      depth.bits(),
            max_value: u64::from(depth.max_value())
        }
    }
}
