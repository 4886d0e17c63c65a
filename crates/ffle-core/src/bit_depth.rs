//! Image bit depth, information and manipulations

/// The bit depth of channel values.
///
/// Farbfeld stores every channel as a [`u16`] using the whole range, i.e
/// [`BitDepth::Sixteen`]. The smaller depths describe source data which
/// has to be rescaled before it can be encoded.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum BitDepth
{
    /// Eight bit depth.
    ///
    /// Values use the whole range from 0-255.
    Eight,
    /// Ten bit depth
    ///
    /// Values are stored in a [`u16`] but only use 10 bits, i.e from 0-1023.
    Ten,
    /// Twelve bit depth
    ///
    /// Values are stored in a [`u16`] but only use 12 bits.
    Twelve,
    /// Sixteen bit depth
    ///
    /// Values use the whole range i.e 0-65535.
    ///
    /// This is the only depth farbfeld files carry.
    Sixteen
}

impl Default for BitDepth
{
    fn default() -> Self
    {
        Self::Sixteen
    }
}

impl BitDepth
{
    /// Number of significant bits per channel
    ///
    /// # Example
    /// ```
    /// use ffle_core::bit_depth::BitDepth;
    /// assert_eq!(BitDepth::Twelve.bits(), 12);
    /// ```
    pub const fn bits(self) -> u32
    {
        match self
        {
            Self::Eight => 8,
            Self::Ten => 10,
            Self::Twelve => 12,
            Self::Sixteen => 16
        }
    }

    /// Get the max value supported by the bit depth
    #[rustfmt::skip]
    #[allow(clippy::zero_prefixed_literal)]
    pub const fn max_value(self) -> u16
    {
        match self
        {
            Self::Eight => (1 << 08) - 1,
            Self::Ten => (1 << 10) - 1,
            Self::Twelve => (1 << 12) - 1,
            Self::Sixteen => u16::MAX,
        }
    }

    /// Get the number of bytes needed to store a value of this depth
    ///
    /// ```
    /// use ffle_core::bit_depth::BitDepth;
    /// let depth = BitDepth::Twelve;
    /// // 12 bits is greater than 8 and less than 16
    /// assert_eq!(depth.size_of(),2);
    /// ```
    pub const fn size_of(self) -> usize
    {
        match self
        {
            Self::Eight => 1,
            Self::Ten | Self::Twelve | Self::Sixteen => 2
        }
    }
}
