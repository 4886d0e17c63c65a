//! An in memory byte source usable without `std`

use crate::bytestream::reader::ZByteIoError;
use crate::bytestream::ZByteReaderTrait;

/// A cursor over an in memory buffer
///
/// This is the source to use when the `std` feature is off,
/// with it any [`Read`](std::io::Read) works as well.
///
/// # Example
/// ```
/// use ffle_core::bytestream::{ZByteReaderTrait, ZCursor};
/// let mut cursor = ZCursor::new([1_u8, 2, 3]);
/// let mut buf = [0; 2];
/// assert_eq!(cursor.read_bytes(&mut buf).unwrap(), 2);
/// assert_eq!(cursor.position(), 2);
/// ```
pub struct ZCursor<T: AsRef<[u8]>> {
    stream:   T,
    position: usize
}

impl<T: AsRef<[u8]>> ZCursor<T> {
    pub fn new(buffer: T) -> ZCursor<T> {
        ZCursor {
            stream:   buffer,
            position: 0
        }
    }
    /// Number of bytes consumed so far
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Number of bytes left to read
    pub fn remaining(&self) -> usize {
        self.stream.as_ref().len().saturating_sub(self.position)
    }
}

impl<T: AsRef<[u8]>> ZByteReaderTrait for ZCursor<T> {
    #[inline(always)]
    fn read_exact_bytes(&mut self, buf: &mut [u8]) -> Result<(), ZByteIoError> {
        let remaining = self.remaining();
        if buf.len() > remaining {
            // position stays put on error
            return Err(ZByteIoError::NotEnoughBytes(buf.len(), remaining));
        }
        self.read_bytes(buf)?;
        Ok(())
    }

    #[inline(always)]
    fn read_const_bytes<const N: usize>(&mut self, buf: &mut [u8; N]) -> Result<(), ZByteIoError> {
        self.read_exact_bytes(buf)
    }

    #[inline(always)]
    fn read_bytes(&mut self, buf: &mut [u8]) -> Result<usize, ZByteIoError> {
        let data = self.stream.as_ref();
        let start = core::cmp::min(self.position, data.len());
        let end = core::cmp::min(self.position.saturating_add(buf.len()), data.len());

        buf[..end - start].copy_from_slice(&data[start..end]);
        self.position = end;

        Ok(end - start)
    }
}
