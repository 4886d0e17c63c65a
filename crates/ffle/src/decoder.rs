/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use alloc::vec;
use alloc::vec::Vec;
use core::iter::FusedIterator;

use ffle_core::bit_depth::BitDepth;
use ffle_core::bytestream::{ZByteReaderTrait, ZReader};
use ffle_core::log::{error, trace, warn};
use ffle_core::options::DecoderOptions;

use crate::constants::{FARBFELD_BIT_DEPTH, FARBFELD_HEADER_SIZE};
use crate::errors::DecodeErrors;
use crate::header::Header;
use crate::row::RowCodec;

/// Where a decoder is in its life
///
/// ```text
/// Unopened -> HeaderRead -> Streaming -> Exhausted
///                 |             |
///                 +--> Error <--+
/// ```
/// A decoder handed to the caller is always past `HeaderRead`.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum DecoderState {
    /// Nothing read yet
    Unopened,
    /// Signature and dimensions are known, limits not yet checked
    HeaderRead,
    /// Rows are being pulled
    Streaming,
    /// The source ended on a row boundary
    Exhausted,
    /// A row failed to decode, no more rows will be produced
    Error
}

/// A farbfeld decoder reading rows lazily from a byte source
///
/// The header is read and validated by [`new`](Self::new), rows are read one at a
/// time as the sequence returned by [`decode`](Self::decode) is advanced.
///
/// The decoder never closes or rewinds its source, use [`into_inner`](Self::into_inner)
/// to take it back.
pub struct FarbfeldDecoder<T: ZByteReaderTrait> {
    stream:     ZReader<T>,
    header:     Header,
    codec:      RowCodec,
    options:    DecoderOptions,
    state:      DecoderState,
    rows_read:  usize,
    row_buffer: Vec<u8>
}

impl<T: ZByteReaderTrait> FarbfeldDecoder<T> {
    /// Create a new decoder, reading and validating the header
    ///
    /// # Errors
    /// - [`DecodeErrors::BadSignature`] if the source does not start with `farbfeld`
    /// - [`DecodeErrors::Truncated`] if the source holds less than 16 bytes
    /// - [`DecodeErrors::UnreadableSource`] if the source itself fails
    pub fn new(source: T) -> Result<FarbfeldDecoder<T>, DecodeErrors> {
        Self::new_with_options(source, DecoderOptions::default())
    }

    /// Create a new decoder with non default options as opposed to
    /// `new`
    ///
    /// # Example
    /// ```
    /// use ffle::{DecodeErrors, FarbfeldDecoder, Header};
    /// use ffle_core::options::DecoderOptions;
    ///
    /// let file = Header::new(4096, 1).serialize();
    /// let options = DecoderOptions::default().set_max_width(1024);
    ///
    /// let result = FarbfeldDecoder::new_with_options(&file[..], options);
    /// assert!(matches!(result, Err(DecodeErrors::TooLargeDimensions { .. })));
    /// ```
    pub fn new_with_options(
        source: T, options: DecoderOptions
    ) -> Result<FarbfeldDecoder<T>, DecodeErrors> {
        let mut decoder = FarbfeldDecoder {
            stream: ZReader::new(source),
            header: Header::new(0, 0),
            codec: RowCodec::new(0),
            options,
            state: DecoderState::Unopened,
            rows_read: 0,
            row_buffer: vec![]
        };
        decoder.decode_headers()?;
        Ok(decoder)
    }

    fn decode_headers(&mut self) -> Result<(), DecodeErrors> {
        let mut bytes = [0; FARBFELD_HEADER_SIZE];

        let read = self.stream.fill_bytes(&mut bytes).map_err(|e| {
            self.state = DecoderState::Error;
            DecodeErrors::UnreadableSource(e)
        })?;

        self.header = Header::parse(&bytes[..read]).map_err(|e| {
            self.state = DecoderState::Error;
            e
        })?;
        self.state = DecoderState::HeaderRead;

        trace!("Image width: {}", self.header.width());
        trace!("Image height: {}", self.header.height());

        let (width, height) = self.dimensions();

        if width > self.options.max_width() {
            self.state = DecoderState::Error;
            return Err(DecodeErrors::TooLargeDimensions {
                dimension: "width",
                found:     width,
                limit:     self.options.max_width()
            });
        }
        if height > self.options.max_height() {
            self.state = DecoderState::Error;
            return Err(DecodeErrors::TooLargeDimensions {
                dimension: "height",
                found:     height,
                limit:     self.options.max_height()
            });
        }
        self.codec = RowCodec::new(width);
        self.row_buffer = vec![0; self.codec.row_size()];
        self.state = DecoderState::Streaming;

        Ok(())
    }

    /// Return the sequence of rows still in the source
    ///
    /// Each step reads exactly one row of `width * 8` bytes and yields its
    /// `width * 4` channel values. The sequence ends when the source is empty at
    /// a row boundary and yields an error if it ends inside a row.
    ///
    /// Rows handed out are not kept, and calling this again continues from
    /// where the previous sequence stopped, it never rewinds.
    pub fn decode(&mut self) -> FarbfeldRows<'_, T> {
        FarbfeldRows { decoder: self }
    }

    /// Decode every remaining row into an owned frame
    pub fn decode_frame(&mut self) -> Result<Vec<Vec<u16>>, DecodeErrors> {
        self.decode().collect()
    }

    fn fail(&mut self, err: DecodeErrors) -> Option<Result<Vec<u16>, DecodeErrors>> {
        error!("{:?}", err);
        self.state = DecoderState::Error;
        Some(Err(err))
    }

    fn next_row(&mut self) -> Option<Result<Vec<u16>, DecodeErrors>> {
        if self.state != DecoderState::Streaming {
            return None;
        }
        let height = self.height();

        if self.rows_read == height {
            if self.options.strict_mode() {
                let mut probe = [0_u8; 1];
                return match self.stream.fill_bytes(&mut probe) {
                    Ok(0) => {
                        self.state = DecoderState::Exhausted;
                        None
                    }
                    Ok(_) => self.fail(DecodeErrors::TrailingData),
                    Err(e) => self.fail(DecodeErrors::IoErrors(e))
                };
            }
        }

        let row_size = self.codec.row_size();

        if row_size == 0 {
            // zero width rows take no bytes, the header alone gives their count
            if self.rows_read < height {
                self.rows_read += 1;
                return Some(Ok(Vec::new()));
            }
            trace!("Decoded {} rows", self.rows_read);
            self.state = DecoderState::Exhausted;
            return None;
        }

        match self.stream.fill_bytes(&mut self.row_buffer) {
            Err(e) => self.fail(DecodeErrors::IoErrors(e)),
            Ok(0) => {
                if self.rows_read < height {
                    if self.options.strict_mode() {
                        return self.fail(DecodeErrors::RowCountMismatch {
                            expected: height,
                            found:    self.rows_read
                        });
                    }
                    warn!(
                        "Stream ended after {} rows, header declares {}",
                        self.rows_read, height
                    );
                }
                trace!("Decoded {} rows", self.rows_read);
                self.state = DecoderState::Exhausted;
                None
            }
            Ok(found) if found < row_size => self.fail(DecodeErrors::TruncatedRow {
                row: self.rows_read,
                expected: row_size,
                found
            }),
            Ok(_) => {
                if self.rows_read == height {
                    warn!("Data continues past the {} rows declared in the header", height);
                }
                self.rows_read += 1;
                match self.codec.unpack(&self.row_buffer) {
                    Ok(row) => Some(Ok(row)),
                    Err(e) => self.fail(e)
                }
            }
        }
    }

    /// Image width in pixels
    pub const fn width(&self) -> usize {
        self.header.width() as usize
    }

    /// Image height in pixels
    pub const fn height(&self) -> usize {
        self.header.height() as usize
    }

    /// Return the width and height of the image
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width(), self.height())
    }

    pub const fn header(&self) -> Header {
        self.header
    }

    /// Return farbfeld bit depth
    ///
    /// This is always 16
    pub const fn bit_depth(&self) -> BitDepth {
        FARBFELD_BIT_DEPTH
    }

    pub const fn state(&self) -> DecoderState {
        self.state
    }

    /// Number of rows handed out so far
    pub const fn rows_read(&self) -> usize {
        self.rows_read
    }

    pub const fn options(&self) -> &DecoderOptions {
        &self.options
    }

    /// Destroy the decoder returning the source, positioned
    /// after the last byte read
    pub fn into_inner(self) -> T {
        self.stream.consume()
    }
}

/// Lazy sequence of decoded rows, see [`FarbfeldDecoder::decode`]
///
/// Borrows the decoder mutably, so only one consumer can pull rows at a time.
pub struct FarbfeldRows<'a, T: ZByteReaderTrait> {
    decoder: &'a mut FarbfeldDecoder<T>
}

impl<T: ZByteReaderTrait> Iterator for FarbfeldRows<'_, T> {
    type Item = Result<Vec<u16>, DecodeErrors>;

    fn next(&mut self) -> Option<Self::Item> {
        self.decoder.next_row()
    }
}

impl<T: ZByteReaderTrait> FusedIterator for FarbfeldRows<'_, T> {}

#[cfg(test)]
mod tests {
    use alloc::vec;
    use alloc::vec::Vec;

    use ffle_core::bytestream::ZCursor;
    use ffle_core::options::DecoderOptions;

    use crate::decoder::{DecoderState, FarbfeldDecoder};
    use crate::errors::DecodeErrors;
    use crate::header::Header;

    fn image(width: u32, height: u32, rows: usize) -> Vec<u8> {
        let mut out = Header::new(width, height).serialize().to_vec();
        for row in 0..rows {
            for c in 0..width as usize * 4 {
                out.extend_from_slice(&((row * 100 + c) as u16).to_le_bytes());
            }
        }
        out
    }

    #[test]
    fn reads_dimensions_on_construction() {
        let decoder = FarbfeldDecoder::new(ZCursor::new(image(3, 2, 2))).unwrap();
        assert_eq!(decoder.dimensions(), (3, 2));
        assert_eq!(decoder.state(), DecoderState::Streaming);
        assert_eq!(decoder.rows_read(), 0);
    }

    #[test]
    fn rows_are_yielded_lazily() {
        let mut decoder = FarbfeldDecoder::new(ZCursor::new(image(1, 3, 3))).unwrap();
        let mut rows = decoder.decode();

        assert_eq!(rows.next().unwrap().unwrap(), [0, 1, 2, 3]);
        drop(rows);
        assert_eq!(decoder.rows_read(), 1);

        // a second sequence continues, it does not restart
        let rest = decoder.decode_frame().unwrap();
        assert_eq!(rest, vec![vec![100, 101, 102, 103], vec![200, 201, 202, 203]]);
        assert_eq!(decoder.state(), DecoderState::Exhausted);
        assert!(decoder.decode().next().is_none());
    }

    #[test]
    fn partial_trailing_row_is_an_error() {
        let mut data = image(2, 2, 2);
        data.truncate(data.len() - 3);

        let mut decoder = FarbfeldDecoder::new(ZCursor::new(data)).unwrap();
        let mut rows = decoder.decode();

        assert!(rows.next().unwrap().is_ok());
        assert!(matches!(
            rows.next(),
            Some(Err(DecodeErrors::TruncatedRow {
                row:      1,
                expected: 16,
                found:    13
            }))
        ));
        assert!(rows.next().is_none());
        drop(rows);
        assert_eq!(decoder.state(), DecoderState::Error);
    }

    #[test]
    fn lenient_short_stream_ends_quietly() {
        let mut decoder = FarbfeldDecoder::new(ZCursor::new(image(2, 5, 2))).unwrap();
        assert_eq!(decoder.decode_frame().unwrap().len(), 2);
        assert_eq!(decoder.state(), DecoderState::Exhausted);
    }

    #[test]
    fn strict_short_stream() {
        let options = DecoderOptions::default().set_strict_mode(true);
        let mut decoder =
            FarbfeldDecoder::new_with_options(ZCursor::new(image(2, 5, 2)), options).unwrap();

        assert!(matches!(
            decoder.decode_frame(),
            Err(DecodeErrors::RowCountMismatch {
                expected: 5,
                found:    2
            })
        ));
    }

    #[test]
    fn strict_trailing_data() {
        let options = DecoderOptions::default().set_strict_mode(true);
        let mut data = image(1, 1, 1);
        data.push(0);

        let mut decoder = FarbfeldDecoder::new_with_options(ZCursor::new(data), options).unwrap();
        let mut rows = decoder.decode();
        assert!(rows.next().unwrap().is_ok());
        assert!(matches!(rows.next(), Some(Err(DecodeErrors::TrailingData))));
    }

    #[test]
    fn strict_exact_stream() {
        let options = DecoderOptions::default().set_strict_mode(true);
        let mut decoder =
            FarbfeldDecoder::new_with_options(ZCursor::new(image(4, 3, 3)), options).unwrap();
        assert_eq!(decoder.decode_frame().unwrap().len(), 3);
    }

    #[test]
    fn zero_width_yields_empty_rows() {
        let mut decoder = FarbfeldDecoder::new(ZCursor::new(image(0, 9, 0))).unwrap();
        let rows = decoder.decode_frame().unwrap();
        assert_eq!(rows.len(), 9);
        assert!(rows.iter().all(Vec::is_empty));
        assert_eq!(decoder.state(), DecoderState::Exhausted);
        assert!(decoder.decode().next().is_none());
    }

    #[test]
    fn zero_width_strict_trailing_data() {
        let options = DecoderOptions::default().set_strict_mode(true);
        let mut data = image(0, 2, 0);
        data.push(1);

        let mut decoder = FarbfeldDecoder::new_with_options(ZCursor::new(data), options).unwrap();
        let mut rows = decoder.decode();
        assert_eq!(rows.next().unwrap().unwrap(), Vec::<u16>::new());
        assert_eq!(rows.next().unwrap().unwrap(), Vec::<u16>::new());
        assert!(matches!(rows.next(), Some(Err(DecodeErrors::TrailingData))));
    }

    #[test]
    fn lenient_rows_past_height_are_yielded() {
        // two rows on the wire, the header declares one
        let mut data = image(1, 1, 1);
        data.extend_from_slice(&image(1, 1, 1)[16..]);

        let mut decoder = FarbfeldDecoder::new(ZCursor::new(data)).unwrap();
        let rows = decoder.decode_frame().unwrap();
        assert_eq!(rows, vec![vec![0, 1, 2, 3], vec![0, 1, 2, 3]]);
        assert_eq!(decoder.rows_read(), 2);
        assert_eq!(decoder.state(), DecoderState::Exhausted);
    }

    #[test]
    fn limits_are_checked_before_rows() {
        let options = DecoderOptions::default().set_max_height(2);
        let result = FarbfeldDecoder::new_with_options(ZCursor::new(image(1, 3, 3)), options);
        assert!(matches!(
            result,
            Err(DecodeErrors::TooLargeDimensions {
                dimension: "height",
                found:     3,
                limit:     2
            })
        ));
    }

    #[test]
    fn source_is_returned() {
        let decoder = FarbfeldDecoder::new(ZCursor::new(image(1, 1, 1))).unwrap();
        let cursor = decoder.into_inner();
        assert_eq!(cursor.position(), 16);
        assert_eq!(cursor.remaining(), 8);
    }
}
