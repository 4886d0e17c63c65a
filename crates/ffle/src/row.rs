//! Packing and unpacking of single scanlines
use alloc::vec::Vec;

use crate::constants::{FARBFELD_CHANNELS, FARBFELD_PIXEL_SIZE};
use crate::errors::{DecodeErrors, EncodeErrors};

/// Converts one row between `width * 4` channel values and
/// its `width * 8` byte wire form
///
/// Only the width is remembered, so one codec serves every row
/// of every image with that width.
///
/// ```
/// use ffle::RowCodec;
/// let codec = RowCodec::new(1);
/// let bytes = codec.pack(&[1, 2, 0x0300, 0xFFFF]).unwrap();
/// assert_eq!(bytes, [1, 0, 2, 0, 0, 3, 0xFF, 0xFF]);
/// assert_eq!(codec.unpack(&bytes).unwrap(), [1, 2, 0x0300, 0xFFFF]);
/// ```
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct RowCodec {
    width: usize
}

impl RowCodec {
    pub const fn new(width: usize) -> RowCodec {
        RowCodec { width }
    }

    pub const fn width(&self) -> usize {
        self.width
    }

    /// Channel values in one row
    pub const fn channels(&self) -> usize {
        self.width.saturating_mul(FARBFELD_CHANNELS)
    }

    /// Bytes in one encoded row
    pub const fn row_size(&self) -> usize {
        self.width.saturating_mul(FARBFELD_PIXEL_SIZE)
    }

    /// Encode `row` into a new buffer
    pub fn pack(&self, row: &[u16]) -> Result<Vec<u8>, EncodeErrors> {
        let mut out = Vec::with_capacity(self.row_size());
        self.pack_into(row, &mut out)?;
        Ok(out)
    }

    /// Encode `row` into `out`, replacing its contents
    ///
    /// Lets the encoder reuse one allocation for every row.
    pub fn pack_into(&self, row: &[u16], out: &mut Vec<u8>) -> Result<(), EncodeErrors> {
        if row.len() % FARBFELD_CHANNELS != 0 || row.len() != self.channels() {
            return Err(EncodeErrors::BadRowLength(self.channels(), row.len()));
        }
        out.clear();
        out.reserve(self.row_size());

        for channel in row {
            out.extend_from_slice(&channel.to_le_bytes());
        }
        Ok(())
    }

    /// Decode a row from exactly `row_size` bytes
    pub fn unpack(&self, bytes: &[u8]) -> Result<Vec<u16>, DecodeErrors> {
        if bytes.len() != self.row_size() {
            return Err(DecodeErrors::BadRowLength(self.row_size(), bytes.len()));
        }
        Ok(bytes
            .chunks_exact(2)
            .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
            .collect())
    }
}
