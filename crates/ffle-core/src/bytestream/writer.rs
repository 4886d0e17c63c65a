use crate::bytestream::{ZByteIoError, ZByteWriterTrait};

mod no_std_writer;
mod std_writer;

/// Encapsulates a simple Byte writer with
/// support for little endian integer writes
///
/// Keeps count of the bytes it has pushed into the sink
pub struct ZWriter<T: ZByteWriterTrait> {
    buffer:        T,
    bytes_written: usize
}

impl<T: ZByteWriterTrait> ZWriter<T> {
    /// Create a new writer for the sink
    pub fn new(data: T) -> ZWriter<T> {
        ZWriter {
            buffer:        data,
            bytes_written: 0
        }
    }
    /// Return the number of bytes the writer has written
    pub const fn bytes_written(&self) -> usize {
        self.bytes_written
    }

    /// Write all bytes or return the error the sink raised
    pub fn write_all(&mut self, buf: &[u8]) -> Result<(), ZByteIoError> {
        self.buffer.write_all_bytes(buf)?;
        self.bytes_written += buf.len();
        Ok(())
    }

    /// Write a fixed size array of bytes
    pub fn write_const_bytes<const N: usize>(&mut self, buf: &[u8; N]) -> Result<(), ZByteIoError> {
        self.buffer.write_const_bytes(buf)?;
        self.bytes_written += N;
        Ok(())
    }

    /// Write a `u32` as four little endian bytes
    ///
    /// Returning an error if the underlying sink cannot take all four bytes.
    #[inline]
    pub fn write_u32_le_err(&mut self, value: u32) -> Result<(), ZByteIoError> {
        self.write_const_bytes(&value.to_le_bytes())
    }

    /// Hint the sink about how many bytes are coming
    pub fn reserve(&mut self, additional: usize) -> Result<(), ZByteIoError> {
        self.buffer.reserve_capacity(additional)
    }

    /// Flush the sink
    pub fn flush(&mut self) -> Result<(), ZByteIoError> {
        self.buffer.flush_bytes()
    }
}
