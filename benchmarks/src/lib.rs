/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use ffle::FarbfeldEncoder;

/// A frame whose channels count up, wrapping at 16 bits
pub fn sample_frame(width: usize, height: usize) -> Vec<Vec<u16>> {
    (0..height)
        .map(|y| {
            (0..width * 4)
                .map(|c| (y.wrapping_mul(31).wrapping_add(c)) as u16)
                .collect()
        })
        .collect()
}

/// `sample_frame` encoded in memory
pub fn sample_file(width: usize, height: usize) -> Vec<u8> {
    let mut out: Vec<u8> = Vec::new();
    FarbfeldEncoder::new(width as u32, height as u32)
        .encode(&mut out, &sample_frame(width, height))
        .unwrap();
    out
}
