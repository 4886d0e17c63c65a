/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! A simple implementation of a bytestream reader
//! and writer.
//!
//! The codec never talks to files or buffers directly, it reads
//! from anything implementing [`ZByteReaderTrait`] and writes to anything
//! implementing [`ZByteWriterTrait`].
pub use reader::zcursor::ZCursor;
pub use reader::{ZByteIoError, ZReader};
pub use traits::*;
pub use writer::ZWriter;

mod reader;
mod traits;
mod writer;
