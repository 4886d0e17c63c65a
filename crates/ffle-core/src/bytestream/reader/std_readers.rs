#![cfg(feature = "std")]

use std::io::{ErrorKind, Read};

use crate::bytestream::reader::ZByteIoError;
use crate::bytestream::ZByteReaderTrait;

impl<T: Read> ZByteReaderTrait for T {
    #[inline(always)]
    fn read_exact_bytes(&mut self, buf: &mut [u8]) -> Result<(), ZByteIoError> {
        self.read_exact(buf).map_err(ZByteIoError::from)
    }

    #[inline(always)]
    fn read_const_bytes<const N: usize>(&mut self, buf: &mut [u8; N]) -> Result<(), ZByteIoError> {
        self.read_exact(buf).map_err(ZByteIoError::from)
    }

    fn read_bytes(&mut self, buf: &mut [u8]) -> Result<usize, ZByteIoError> {
        loop {
            match self.read(buf) {
                Ok(n) => return Ok(n),
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) => return Err(ZByteIoError::from(err))
            }
        }
    }
}
