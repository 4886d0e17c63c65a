/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Errors possible during decoding and encoding
use core::fmt::{Debug, Display, Formatter};

use ffle_core::bytestream::ZByteIoError;

/// Possible errors that may occur during decoding
pub enum DecodeErrors {
    /// The source failed before the header could be read
    UnreadableSource(ZByteIoError),
    /// The stream does not start with `farbfeld`
    ///
    /// Carries the bytes found in place of the signature
    BadSignature([u8; 8]),
    /// The stream ended inside the header
    ///
    /// # Arguments
    /// - 1st argument is the number of bytes we expected
    /// - 2nd argument is number of bytes actually present
    Truncated(usize, usize),
    /// The stream ended part way through a row
    TruncatedRow {
        /// Zero based index of the row
        row:      usize,
        /// Size of a whole row in bytes
        expected: usize,
        /// Bytes present before the stream ended
        found:    usize
    },
    /// A row was given a byte slice of the wrong size
    ///
    /// # Arguments
    /// - 1st argument is the row size in bytes
    /// - 2nd argument is the length of the slice
    BadRowLength(usize, usize),
    /// The header declares a dimension over the configured limit
    TooLargeDimensions {
        /// `"width"` or `"height"`
        dimension: &'static str,
        found:     usize,
        limit:     usize
    },
    /// Strict mode: the stream ended after fewer rows than the header declared
    RowCountMismatch { expected: usize, found: usize },
    /// Strict mode: bytes follow the last row the header declared
    TrailingData,
    IoErrors(ZByteIoError)
}

impl Debug for DecodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            DecodeErrors::UnreadableSource(err) => {
                writeln!(f, "Could not read from source: {:?}", err)
            }
            DecodeErrors::BadSignature(found) => {
                writeln!(f, "Farbfeld magic bytes not found, found {found:?}")
            }
            DecodeErrors::Truncated(expected, found) => {
                writeln!(
                    f,
                    "Not enough bytes for header, need {expected} but stream has {found}"
                )
            }
            DecodeErrors::TruncatedRow {
                row,
                expected,
                found
            } => {
                writeln!(
                    f,
                    "Row {row} is truncated, expected {expected} bytes but stream ended after {found}"
                )
            }
            DecodeErrors::BadRowLength(expected, found) => {
                writeln!(f, "Bad row length, expected {expected} bytes, found {found}")
            }
            DecodeErrors::TooLargeDimensions {
                dimension,
                found,
                limit
            } => {
                writeln!(
                    f,
                    "Image {dimension} {found} is greater than configured max {dimension} {limit}"
                )
            }
            DecodeErrors::RowCountMismatch { expected, found } => {
                writeln!(f, "Header declares {expected} rows but stream has {found}")
            }
            DecodeErrors::TrailingData => {
                writeln!(f, "Extra data after the last row")
            }
            DecodeErrors::IoErrors(err) => {
                writeln!(f, "I/O error {:?}", err)
            }
        }
    }
}

impl Display for DecodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl From<ZByteIoError> for DecodeErrors {
    fn from(value: ZByteIoError) -> Self {
        DecodeErrors::IoErrors(value)
    }
}

/// Errors possible during encoding
pub enum EncodeErrors {
    /// The sink refused the header, nothing was written
    UnwritableSink(ZByteIoError),
    /// The frame is not a grid of RGBA rows
    BadFrameShape(&'static str),
    /// A row has a channel count that is not a multiple of 4
    /// or does not cover the declared width
    ///
    /// # Arguments
    /// - 1st argument is the channel count the declared width needs
    /// - 2nd argument is the channel count of the row
    BadRowLength(usize, usize),
    /// The frame has fewer pixels than the declared dimensions
    ///
    /// Sizes are `(width, height)` in pixels
    InsufficientPixels {
        expected: (usize, usize),
        found:    (usize, usize)
    },
    /// Bit depth outside `1..=64`
    InvalidBitDepth(u32),
    /// Too large dimensions, above 2^32.
    /// Farbfeld uses 4 bytes for width and height, if image cannot fit in it
    /// then it's undefined
    TooLargeDimensions(u64),
    IoErrors(ZByteIoError)
}

impl Debug for EncodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            EncodeErrors::UnwritableSink(err) => {
                writeln!(f, "Sink does not accept writes: {:?}", err)
            }
            EncodeErrors::BadFrameShape(reason) => {
                writeln!(f, "Layout of pixels is non-standard: {reason}")
            }
            EncodeErrors::BadRowLength(expected, found) => {
                writeln!(
                    f,
                    "Row has {found} channels, expected {expected} (RGBA times declared width)"
                )
            }
            EncodeErrors::InsufficientPixels { expected, found } => {
                writeln!(
                    f,
                    "Pixels supplied ({}x{}) are less than the declared dimensions ({}x{})",
                    found.0, found.1, expected.0, expected.1
                )
            }
            EncodeErrors::InvalidBitDepth(depth) => {
                writeln!(f, "Invalid bit depth {depth}, expected a value in 1..=64")
            }
            EncodeErrors::TooLargeDimensions(dims) => {
                writeln!(
                    f,
                    "Too large dimensions {dims}, farbfeld can only encode dimensions up to {}",
                    u32::MAX
                )
            }
            EncodeErrors::IoErrors(err) => {
                writeln!(f, "I/O error {:?}", err)
            }
        }
    }
}

impl Display for EncodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl From<ZByteIoError> for EncodeErrors {
    fn from(value: ZByteIoError) -> Self {
        EncodeErrors::IoErrors(value)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for DecodeErrors {}

#[cfg(feature = "std")]
impl std::error::Error for EncodeErrors {}
