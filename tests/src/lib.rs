/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Conformance tests, bitmaps are produced by an independent
//! encoder and must decode to exactly the pixels it was given.

#![allow(unused_imports)]

use serde::Deserialize;
use xxhash_rust::xxh3::xxh3_128;

#[cfg(test)]
mod bmp;

/// Pixel content of a generated test image
#[derive(Copy, Clone, Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JsonPattern {
    /// Every channel depends on its position
    Gradient,
    /// A single color
    Solid,
    /// Pseudo random bytes
    Noise
}

#[derive(Clone, Deserialize, Debug)]
pub struct TestEntry {
    pub name:             String,
    pub width:            u32,
    pub height:           u32,
    pub pattern:          JsonPattern,
    /// Zero the stored image size so the decoder has to compute it
    #[serde(default)]
    pub clear_image_size: bool,
    /// Decode keeping the stored bottom-up row order
    #[serde(default)]
    pub bottom_up:        bool,
    pub comment:          Option<String>
}

impl TestEntry {
    /// RGB pixels for this entry, rows top to bottom
    pub fn pixels(&self) -> Vec<u8> {
        let (w, h) = (self.width as usize, self.height as usize);
        let mut pixels = Vec::with_capacity(w * h * 3);
        // xorshift, fixed seed so runs are reproducible
        let mut state: u32 = 0x9E37_79B9 ^ (self.width << 16) ^ self.height;

        for y in 0..h {
            for x in 0..w {
                let pixel = match self.pattern {
                    JsonPattern::Gradient => [(x * 37) as u8, (y * 53) as u8, (x ^ y) as u8],
                    JsonPattern::Solid => [12, 99, 240],
                    JsonPattern::Noise => {
                        state ^= state << 13;
                        state ^= state >> 17;
                        state ^= state << 5;
                        let [a, b, c, _] = state.to_le_bytes();
                        [a, b, c]
                    }
                };
                pixels.extend_from_slice(&pixel);
            }
        }
        pixels
    }
}

#[cfg(test)]
fn hash(contents: &[u8]) -> u128 {
    xxh3_128(contents)
}
