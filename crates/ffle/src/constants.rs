use ffle_core::bit_depth::BitDepth;

/// File signature
pub const FARBFELD_MAGIC: &[u8; 8] = b"farbfeld";

/// Signature, width and height
pub const FARBFELD_HEADER_SIZE: usize = 16;

/// R, G, B and A
pub const FARBFELD_CHANNELS: usize = 4;

pub const FARBFELD_BIT_DEPTH: BitDepth = BitDepth::Sixteen;

/// Bytes taken by a single pixel on the wire
pub const FARBFELD_PIXEL_SIZE: usize = FARBFELD_CHANNELS * FARBFELD_BIT_DEPTH.size_of();
