/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! A streaming codec for farbfeld images with little endian fields. The layout is:
//! ```text
//! ╔════════╤═════════════════════════════════════════════════════════╗
//! ║ Bytes  │ Description                                             ║
//! ╠════════╪═════════════════════════════════════════════════════════╣
//! ║ 8      │ "farbfeld" magic value                                  ║
//! ╟────────┼─────────────────────────────────────────────────────────╢
//! ║ 4      │ 32-Bit LE unsigned integer (width)                      ║
//! ╟────────┼─────────────────────────────────────────────────────────╢
//! ║ 4      │ 32-Bit LE unsigned integer (height)                     ║
//! ╟────────┼─────────────────────────────────────────────────────────╢
//! ║ [2222] │ 4x16-Bit LE unsigned integers [RGBA] / pixel, row-major ║
//! ╚════════╧═════════════════════════════════════════════════════════╝
//! ```
//! A file is exactly `16 + width * height * 8` bytes. The RGB-data is not alpha-premultiplied.
//!
//! Images are handled a row at a time. A row is a slice of `width * 4`
//! [`u16`] channel values, a frame is `height` such rows, top row first.
//!
//! # Example
//! ```
//! use ffle::{FarbfeldDecoder, FarbfeldEncoder};
//!
//! let frame = vec![vec![0, 65535, 0, 65535, 65535, 0, 0, 65535]];
//!
//! let mut file: Vec<u8> = vec![];
//! FarbfeldEncoder::new(2, 1).encode(&mut file, &frame).unwrap();
//! assert_eq!(file.len(), 16 + 2 * 8);
//!
//! let mut decoder = FarbfeldDecoder::new(&file[..]).unwrap();
//! assert_eq!(decoder.dimensions(), (2, 1));
//!
//! let rows = decoder.decode().collect::<Result<Vec<_>, _>>().unwrap();
//! assert_eq!(rows, frame);
//! ```
//!
//! # Features
//! - `std`: read from any [`Read`](std::io::Read), write to any [`Write`](std::io::Write). Enabled by default.
//! - `log`: log header details and stream anomalies through the `log` crate. Enabled by default.
//! - `serde-support`: serialize [`Header`] and the decoder options.
#![cfg_attr(not(feature = "std"), no_std)]
#![macro_use]
extern crate alloc;

pub use constants::{FARBFELD_HEADER_SIZE, FARBFELD_MAGIC};
pub use decoder::*;
pub use encoder::*;
pub use errors::*;
pub use ffle_core;
pub use header::Header;
pub use quantize::*;
pub use row::RowCodec;

mod constants;
mod decoder;
mod encoder;
mod errors;
mod header;
mod quantize;
mod row;
