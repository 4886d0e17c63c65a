//! The 16 byte farbfeld header
use ffle_core::bytestream::{ZByteIoError, ZByteWriterTrait, ZCursor, ZReader, ZWriter};

use crate::constants::{FARBFELD_HEADER_SIZE, FARBFELD_MAGIC, FARBFELD_PIXEL_SIZE};
use crate::errors::DecodeErrors;

/// Image dimensions as stored after the signature
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Header {
    width:  u32,
    height: u32
}

impl Header {
    pub const fn new(width: u32, height: u32) -> Header {
        Header { width, height }
    }

    pub const fn width(&self) -> u32 {
        self.width
    }

    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Size of one encoded row in bytes
    pub const fn row_size(&self) -> usize {
        (self.width as usize).saturating_mul(FARBFELD_PIXEL_SIZE)
    }

    /// Size of a complete file with these dimensions
    ///
    /// ```
    /// use ffle::Header;
    /// assert_eq!(Header::new(2, 3).file_size(), 16 + 2 * 3 * 8);
    /// ```
    pub const fn file_size(&self) -> u64 {
        (self.width as u64)
            .saturating_mul(self.height as u64)
            .saturating_mul(FARBFELD_PIXEL_SIZE as u64)
            .saturating_add(FARBFELD_HEADER_SIZE as u64)
    }

    /// Signature followed by width and height, both little endian
    ///
    /// ```
    /// use ffle::Header;
    /// let bytes = Header::new(2, 1).serialize();
    /// assert_eq!(&bytes[..8], b"farbfeld");
    /// assert_eq!(&bytes[8..], &[2, 0, 0, 0, 1, 0, 0, 0]);
    /// ```
    pub fn serialize(&self) -> [u8; FARBFELD_HEADER_SIZE] {
        let mut out = [0; FARBFELD_HEADER_SIZE];
        out[0..8].copy_from_slice(FARBFELD_MAGIC);
        out[8..12].copy_from_slice(&self.width.to_le_bytes());
        out[12..16].copy_from_slice(&self.height.to_le_bytes());
        out
    }

    /// Parse a header from the start of `bytes`
    ///
    /// The signature is checked before the length, a stream that does not
    /// start with `farbfeld` is rejected even when it is also short.
    ///
    /// Bytes past the first 16 are ignored.
    pub fn parse(bytes: &[u8]) -> Result<Header, DecodeErrors> {
        let Some(magic) = bytes.get(0..8) else {
            return Err(DecodeErrors::Truncated(FARBFELD_HEADER_SIZE, bytes.len()));
        };
        if magic != FARBFELD_MAGIC {
            let mut found = [0; 8];
            found.copy_from_slice(magic);
            return Err(DecodeErrors::BadSignature(found));
        }
        let Some(dims) = bytes.get(8..FARBFELD_HEADER_SIZE) else {
            return Err(DecodeErrors::Truncated(FARBFELD_HEADER_SIZE, bytes.len()));
        };
        let mut stream = ZReader::new(ZCursor::new(dims));

        let width = stream.get_u32_le_err()?;
        let height = stream.get_u32_le_err()?;

        Ok(Header { width, height })
    }

    pub(crate) fn write<T: ZByteWriterTrait>(
        &self, stream: &mut ZWriter<T>
    ) -> Result<(), ZByteIoError> {
        stream.write_const_bytes(FARBFELD_MAGIC)?;
        stream.write_u32_le_err(self.width)?;
        stream.write_u32_le_err(self.height)
    }
}
