/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Encoding support for Farbfeld image format
use alloc::vec::Vec;

use ffle_core::bytestream::{ZByteWriterTrait, ZWriter};
use ffle_core::log::{debug, error, trace};

use crate::constants::FARBFELD_CHANNELS;
use crate::errors::EncodeErrors;
use crate::header::Header;
use crate::row::RowCodec;

/// A Farbfeld encoder
///
/// The encoder is created with the dimensions of the image it writes,
/// [`encode`](Self::encode) then takes any frame at least that large.
///
/// # Frames
/// A frame is a slice of rows, each row `width * 4` [`u16`] values in
/// R, G, B, A order. Anything that is `AsRef<[u16]>` works as a row.
///
/// Frames larger than the declared size are cropped to its top-left corner,
/// smaller frames are an error.
///
/// # Example
/// - Encodes a 10 by 4 RGBA image
/// ```
/// use ffle::FarbfeldEncoder;
///
/// let frame: Vec<[u16; 40]> = (0..4).map(|y| core::array::from_fn(|c| (y * 40 + c) as u16)).collect();
///
/// let mut write_to: Vec<u8> = vec![];
/// let written = FarbfeldEncoder::new(10, 4).encode(&mut write_to, &frame).unwrap();
///
/// assert_eq!(written, 16 + 10 * 4 * 8);
/// assert_eq!(written, write_to.len());
/// ```
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct FarbfeldEncoder {
    width:  u32,
    height: u32
}

impl FarbfeldEncoder {
    /// Create an encoder for images of `width` by `height` pixels
    pub const fn new(width: u32, height: u32) -> FarbfeldEncoder {
        FarbfeldEncoder { width, height }
    }

    /// Create an encoder from signed dimensions
    ///
    /// The sign is dropped, `-3` declares a width of `3`. This is the only place
    /// negative dimensions are accepted.
    ///
    /// # Errors
    /// [`EncodeErrors::TooLargeDimensions`] if a magnitude does not fit in 32 bits
    ///
    /// ```
    /// use ffle::FarbfeldEncoder;
    /// let encoder = FarbfeldEncoder::from_signed(-2, 5).unwrap();
    /// assert_eq!((encoder.width(), encoder.height()), (2, 5));
    /// assert!(FarbfeldEncoder::from_signed(1 << 32, 1).is_err());
    /// ```
    pub fn from_signed(width: i64, height: i64) -> Result<FarbfeldEncoder, EncodeErrors> {
        if width < 0 || height < 0 {
            debug!("Normalizing signed dimensions {}x{}", width, height);
        }
        let width_abs = width.unsigned_abs();
        let height_abs = height.unsigned_abs();

        let width = u32::try_from(width_abs)
            .map_err(|_| EncodeErrors::TooLargeDimensions(width_abs))?;
        let height = u32::try_from(height_abs)
            .map_err(|_| EncodeErrors::TooLargeDimensions(height_abs))?;

        Ok(FarbfeldEncoder::new(width, height))
    }

    pub const fn width(&self) -> u32 {
        self.width
    }

    pub const fn height(&self) -> u32 {
        self.height
    }

    pub const fn header(&self) -> Header {
        Header::new(self.width, self.height)
    }

    /// Exact size in bytes of the file this encoder writes
    pub const fn output_size(&self) -> u64 {
        self.header().file_size()
    }

    /// Check `frame` against the declared dimensions returning the rows to encode
    fn crop<'a, R: AsRef<[u16]>>(&self, frame: &'a [R]) -> Result<&'a [R], EncodeErrors> {
        let declared_width = self.width as usize;
        let declared_height = self.height as usize;

        let (found_width, found_height) = match frame.first() {
            None if declared_height == 0 => (declared_width, 0),
            None => return Err(EncodeErrors::BadFrameShape("frame has no rows")),
            Some(first) => {
                let channels = first.as_ref().len();

                if channels % FARBFELD_CHANNELS != 0 || (channels == 0 && declared_width != 0) {
                    return Err(EncodeErrors::BadFrameShape(
                        "row channel count is not a positive multiple of 4, pixelformat isn't RGBA"
                    ));
                }
                (channels / FARBFELD_CHANNELS, frame.len())
            }
        };

        if found_width < declared_width || found_height < declared_height {
            return Err(EncodeErrors::InsufficientPixels {
                expected: (declared_width, declared_height),
                found:    (found_width, found_height)
            });
        }
        if found_width > declared_width || found_height > declared_height {
            trace!(
                "Cropping {}x{} frame to {}x{}",
                found_width,
                found_height,
                declared_width,
                declared_height
            );
        }
        let rows = &frame[..declared_height];

        let channels = RowCodec::new(declared_width).channels();

        // later rows must be able to give a full row too
        let ragged = rows.iter().position(|row| {
            let len = row.as_ref().len();
            len % FARBFELD_CHANNELS != 0 || len < channels
        });
        if let Some(pos) = ragged {
            let len = rows[pos].as_ref().len();
            error!("Row {} has {} channels, need {}", pos, len, channels);
            return Err(EncodeErrors::BadRowLength(channels, len));
        }
        Ok(rows)
    }

    /// Encode `frame` into `sink`
    ///
    /// Writes the header, then one row at a time, then flushes the sink.
    /// The whole frame is validated before the first byte is written.
    ///
    /// # Returns
    /// The number of bytes written, always [`output_size`](Self::output_size)
    ///
    /// # Errors
    /// - [`EncodeErrors::BadFrameShape`] the first row is not made of whole RGBA pixels
    /// - [`EncodeErrors::InsufficientPixels`] the frame is narrower or shorter than declared
    /// - [`EncodeErrors::BadRowLength`] a later row is too short or not whole pixels
    /// - [`EncodeErrors::UnwritableSink`] the sink refused the header
    /// - [`EncodeErrors::IoErrors`] the sink failed after the header, the sink
    ///   then holds a partial file
    pub fn encode<T: ZByteWriterTrait, R: AsRef<[u16]>>(
        &self, sink: T, frame: &[R]
    ) -> Result<usize, EncodeErrors> {
        let rows = self.crop(frame)?;

        let codec = RowCodec::new(self.width as usize);
        let mut stream = ZWriter::new(sink);

        if let Ok(size) = usize::try_from(self.output_size()) {
            stream.reserve(size)?;
        }

        self.header()
            .write(&mut stream)
            .map_err(EncodeErrors::UnwritableSink)?;

        let mut row_bytes = Vec::with_capacity(codec.row_size());

        for row in rows {
            codec.pack_into(&row.as_ref()[..codec.channels()], &mut row_bytes)?;
            stream.write_all(&row_bytes)?;
        }
        stream.flush()?;

        Ok(stream.bytes_written())
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;
    use alloc::vec::Vec;

    use crate::encoder::FarbfeldEncoder;
    use crate::errors::EncodeErrors;

    fn gradient(width: usize, height: usize) -> Vec<Vec<u16>> {
        (0..height)
            .map(|y| (0..width * 4).map(|c| (y * 1000 + c) as u16).collect())
            .collect()
    }

    #[test]
    fn concrete_two_by_one() {
        let frame = [[0_u16, 65535, 0, 65535, 65535, 0, 0, 65535]];
        let mut out: Vec<u8> = vec![];
        FarbfeldEncoder::new(2, 1).encode(&mut out, &frame).unwrap();

        let mut expected = b"farbfeld".to_vec();
        expected.extend_from_slice(&[2, 0, 0, 0, 1, 0, 0, 0]);
        expected.extend_from_slice(&[0x00, 0x00, 0xFF, 0xFF, 0x00, 0x00, 0xFF, 0xFF]);
        expected.extend_from_slice(&[0xFF, 0xFF, 0x00, 0x00, 0x00, 0x00, 0xFF, 0xFF]);

        assert_eq!(out, expected);
    }

    #[test]
    fn crop_keeps_top_left() {
        let frame = gradient(3, 3);
        let mut out: Vec<u8> = vec![];
        let written = FarbfeldEncoder::new(2, 1).encode(&mut out, &frame).unwrap();

        assert_eq!(written, 16 + 2 * 8);
        assert_eq!(out.len(), written);
        // last channel of the cropped row is channel 7 of row 0
        assert_eq!(&out[out.len() - 2..], &7_u16.to_le_bytes());
    }

    #[test]
    fn smaller_frame_writes_nothing() {
        let mut out: Vec<u8> = vec![];
        let result = FarbfeldEncoder::new(4, 4).encode(&mut out, &gradient(4, 3));

        assert!(matches!(
            result,
            Err(EncodeErrors::InsufficientPixels {
                expected: (4, 4),
                found:    (4, 3)
            })
        ));
        assert!(out.is_empty());

        let result = FarbfeldEncoder::new(4, 4).encode(&mut out, &gradient(3, 5));
        assert!(matches!(result, Err(EncodeErrors::InsufficientPixels { .. })));
        assert!(out.is_empty());
    }

    #[test]
    fn bad_frame_shapes() {
        let mut out: Vec<u8> = vec![];
        let encoder = FarbfeldEncoder::new(1, 1);

        let no_rows: [[u16; 4]; 0] = [];
        assert!(matches!(
            encoder.encode(&mut out, &no_rows),
            Err(EncodeErrors::BadFrameShape(_))
        ));
        assert!(matches!(
            encoder.encode(&mut out, &[[1_u16, 2, 3]]),
            Err(EncodeErrors::BadFrameShape(_))
        ));
        let empty_row: [&[u16]; 1] = [&[]];
        assert!(matches!(
            encoder.encode(&mut out, &empty_row),
            Err(EncodeErrors::BadFrameShape(_))
        ));
        assert!(out.is_empty());
    }

    #[test]
    fn ragged_rows_are_rejected_up_front() {
        let mut frame = gradient(2, 3);
        frame[2].truncate(4);

        let mut out: Vec<u8> = vec![];
        let result = FarbfeldEncoder::new(2, 3).encode(&mut out, &frame);
        assert!(matches!(result, Err(EncodeErrors::BadRowLength(8, 4))));
        assert!(out.is_empty());

        // rows past the declared height are never looked at
        let written = FarbfeldEncoder::new(2, 2).encode(&mut out, &frame).unwrap();
        assert_eq!(written, 16 + 2 * 2 * 8);
    }

    #[test]
    fn empty_images() {
        let mut out: Vec<u8> = vec![];
        let no_rows: [Vec<u16>; 0] = [];
        let written = FarbfeldEncoder::new(5, 0).encode(&mut out, &no_rows).unwrap();
        assert_eq!(written, 16);
        assert_eq!(&out[8..], &[5, 0, 0, 0, 0, 0, 0, 0]);

        out.clear();
        let empty_rows: [Vec<u16>; 2] = [vec![], vec![]];
        let written = FarbfeldEncoder::new(0, 2).encode(&mut out, &empty_rows).unwrap();
        assert_eq!(written, 16);
    }

    #[test]
    fn unwritable_sink() {
        let mut storage = [0_u8; 4];
        let result = FarbfeldEncoder::new(1, 1).encode(&mut storage[..], &[[1_u16; 4]]);
        assert!(matches!(result, Err(EncodeErrors::UnwritableSink(_))));
    }

    #[test]
    fn sink_filling_up_mid_image() {
        // room for the header and one of two rows
        let mut storage = [0_u8; 16 + 8];
        let result = FarbfeldEncoder::new(1, 2).encode(&mut storage[..], &[[1_u16; 4], [2; 4]]);
        assert!(matches!(result, Err(EncodeErrors::IoErrors(_))));
        assert_eq!(&storage[..8], b"farbfeld");
    }

    #[test]
    fn output_size_is_exact() {
        for (w, h) in [(0, 0), (1, 1), (7, 3), (16, 16)] {
            let mut out: Vec<u8> = vec![];
            let encoder = FarbfeldEncoder::new(w, h);
            encoder
                .encode(&mut out, &gradient(w as usize, h as usize))
                .unwrap();
            assert_eq!(out.len() as u64, encoder.output_size());
            assert_eq!(out.len(), 16 + (w * h * 8) as usize);
        }
    }
}
