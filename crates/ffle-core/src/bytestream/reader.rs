use core::fmt::{Display, Formatter};

pub(crate) mod std_readers;
pub(crate) mod zcursor;
use crate::bytestream::ZByteReaderTrait;

/// Errors raised by byte sources and sinks
pub enum ZByteIoError {
    #[cfg(feature = "std")]
    StdIoError(std::io::Error),
    // requested, read
    NotEnoughBytes(usize, usize),
    // requested, space left
    NotEnoughBuffer(usize, usize)
}

impl core::fmt::Debug for ZByteIoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            #[cfg(feature = "std")]
            ZByteIoError::StdIoError(err) => {
                writeln!(f, "Underlying I/O error {}", err)
            }
            ZByteIoError::NotEnoughBytes(expected, found) => {
                writeln!(f, "Not enough bytes, expected {expected} but found {found}")
            }
            ZByteIoError::NotEnoughBuffer(expected, found) => {
                writeln!(
                    f,
                    "Not enough buffer to write {expected} bytes, buffer size is {found}"
                )
            }
        }
    }
}

impl Display for ZByteIoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ZByteIoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ZByteIoError::StdIoError(err) => Some(err),
            _ => None
        }
    }
}

#[cfg(feature = "std")]
impl From<std::io::Error> for ZByteIoError {
    fn from(value: std::io::Error) -> Self {
        ZByteIoError::StdIoError(value)
    }
}

/// An endian aware reader over a byte source
pub struct ZReader<T: ZByteReaderTrait> {
    inner: T
}

impl<T: ZByteReaderTrait> ZReader<T> {
    pub fn new(source: T) -> ZReader<T> {
        ZReader { inner: source }
    }
    /// Destroy this reader returning
    /// the underlying source of the bytes
    /// from which we were decoding
    #[inline(always)]
    pub fn consume(self) -> T {
        self.inner
    }

    #[inline(always)]
    fn read_fixed_bytes_or_error<const N: usize>(&mut self) -> Result<[u8; N], ZByteIoError> {
        let mut byte_store: [u8; N] = [0; N];
        match self.inner.read_const_bytes(&mut byte_store) {
            Ok(_) => Ok(byte_store),
            Err(e) => Err(e)
        }
    }

    /// Read until `buf` is full or the source runs dry
    ///
    /// Sources may hand out fewer bytes than asked for on a single read,
    /// this keeps asking until a read returns zero.
    ///
    /// # Returns
    /// - `Ok(usize)` Bytes placed in `buf`, less than `buf.len()` only at end of stream
    /// - `Err()` The error returned by the source
    pub fn fill_bytes(&mut self, buf: &mut [u8]) -> Result<usize, ZByteIoError> {
        let mut filled = 0;

        while filled < buf.len() {
            let bytes_read = self.inner.read_bytes(&mut buf[filled..])?;
            if bytes_read == 0 {
                break;
            }
            filled += bytes_read;
        }
        Ok(filled)
    }

    /// Read a little endian `u32` or return an error if the source has less than four bytes left
    #[inline]
    pub fn get_u32_le_err(&mut self) -> Result<u32, ZByteIoError> {
        self.read_fixed_bytes_or_error::<4>().map(u32::from_le_bytes)
    }
}

#[cfg(test)]
mod tests {
    use crate::bytestream::{ZByteReaderTrait, ZCursor, ZReader};
    use crate::bytestream::ZByteIoError;

    /// Hands out at most `step` bytes per read
    struct Trickle<'a> {
        data: &'a [u8],
        step: usize
    }

    impl ZByteReaderTrait for Trickle<'_> {
        fn read_exact_bytes(&mut self, buf: &mut [u8]) -> Result<(), ZByteIoError> {
            if buf.len() > self.data.len() {
                return Err(ZByteIoError::NotEnoughBytes(buf.len(), self.data.len()));
            }
            let (a, b) = self.data.split_at(buf.len());
            buf.copy_from_slice(a);
            self.data = b;
            Ok(())
        }

        fn read_const_bytes<const N: usize>(
            &mut self, buf: &mut [u8; N]
        ) -> Result<(), ZByteIoError> {
            self.read_exact_bytes(buf)
        }

        fn read_bytes(&mut self, buf: &mut [u8]) -> Result<usize, ZByteIoError> {
            let amt = buf.len().min(self.step).min(self.data.len());
            let (a, b) = self.data.split_at(amt);
            buf[..amt].copy_from_slice(a);
            self.data = b;
            Ok(amt)
        }
    }

    #[test]
    fn fill_bytes_joins_short_reads() {
        let data = [1, 2, 3, 4, 5, 6, 7];
        let mut reader = ZReader::new(Trickle { data: &data, step: 2 });

        let mut buf = [0; 5];
        assert_eq!(reader.fill_bytes(&mut buf).unwrap(), 5);
        assert_eq!(buf, [1, 2, 3, 4, 5]);

        let mut rest = [0; 5];
        assert_eq!(reader.fill_bytes(&mut rest).unwrap(), 2);
        assert_eq!(&rest[..2], &[6, 7]);

        assert_eq!(reader.fill_bytes(&mut rest).unwrap(), 0);
    }

    #[test]
    fn u32_is_little_endian() {
        let mut reader = ZReader::new(ZCursor::new([0x02, 0x01, 0x00, 0x00, 0xFF]));
        assert_eq!(reader.get_u32_le_err().unwrap(), 0x0102);
        assert!(reader.get_u32_le_err().is_err());
    }
}
