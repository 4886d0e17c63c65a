//! Decoder options
//!
//! Limits and validation switches the farbfeld decoder respects.
//! The same `DecoderOptions` can be reused for every decoder instance.

/// Decoder options
///
/// Configure with the builder style setters
///
/// ```
/// use ffle_core::options::DecoderOptions;
/// let options = DecoderOptions::default()
///     .set_max_width(1024)
///     .set_max_height(768)
///     .set_strict_mode(true);
/// assert_eq!(options.max_width(), 1024);
/// ```
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct DecoderOptions
{
    /// Maximum width for which decoders will
    /// not try to decode images larger than
    /// the specified width.
    ///
    /// - Default value: 131072
    max_width:   usize,
    /// Maximum height for which decoders will not
    /// try to decode images larger than the
    /// specified height
    ///
    /// - Default value: 131072
    max_height:  usize,
    /// Treat a stream whose length disagrees with its header as an error
    ///
    /// When set to false, a stream that ends early after a whole row is only
    /// logged, and whole rows following the last declared row are still
    /// yielded with a warning.
    ///
    /// When set to true, a short stream and any byte after the last
    /// declared row return an `Err` from the row sequence.
    ///
    /// - Default value: false
    strict_mode: bool
}

impl Default for DecoderOptions
{
    fn default() -> Self
    {
        Self {
            max_width:   1 << 17,
            max_height:  1 << 17,
            strict_mode: false
        }
    }
}

impl DecoderOptions
{
    /// Get maximum width configured for which the decoder
    /// should not try to decode images greater than this width
    pub const fn max_width(&self) -> usize
    {
        self.max_width
    }

    /// Get maximum height configured for which the decoder should
    /// not try to decode images greater than this height
    pub const fn max_height(&self) -> usize
    {
        self.max_height
    }

    /// Whether the decoder checks that the stream holds exactly
    /// `height` rows
    pub const fn strict_mode(&self) -> bool
    {
        self.strict_mode
    }

    /// Set maximum width for which the decoder should not try
    /// decoding images greater than that width
    #[must_use]
    pub fn set_max_width(mut self, width: usize) -> Self
    {
        self.max_width = width;
        self
    }

    /// Set maximum height for which the decoder should not try
    /// decoding images greater than that height
    #[must_use]
    pub fn set_max_height(mut self, height: usize) -> Self
    {
        self.max_height = height;
        self
    }

    /// Set whether the decoder enforces the exact row count
    #[must_use]
    pub fn set_strict_mode(mut self, yes: bool) -> Self
    {
        self.strict_mode = yes;
        self
    }
}
