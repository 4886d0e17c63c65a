/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Core routines shared by the `ffle` farbfeld codec
//!
//! It currently contains
//!
//! - A bytestream reader and writer with endian aware reads and writes,
//!   and the source/sink traits the codec is generic over
//! - Bit depth information for channel values
//! - Decoder options
//! - A logging facade that compiles to nothing when the `log` feature is off
//!
//! This library is `#[no_std]` with `alloc` needed for defining `Vec`
//! which we need for storing decoded rows.
//!
//! # Features
//!  - `std`: Implements the source trait for every [`std::io::Read`] and the sink trait
//!     for every [`std::io::Write`]
//!
//!  - `log`: Route the logging macros in [`log`](crate::log) to the `log` crate
//!
//!  - `serde`: Enables serializing of some of the data structures
//!     present in the crate
//!
#![cfg_attr(not(feature = "std"), no_std)]
#![macro_use]
extern crate alloc;

pub mod bit_depth;
pub mod bytestream;
pub mod log;
pub mod options;
pub mod serde;
