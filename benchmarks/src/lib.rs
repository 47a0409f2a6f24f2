/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use image::codecs::bmp::BmpEncoder;
use image::ColorType;

/// An in-memory 24 bit bitmap of the given size filled with a gradient
pub fn synthetic_bmp(width: u32, height: u32) -> Vec<u8> {
    let pixels: Vec<u8> = (0..height)
        .flat_map(|y| (0..width).flat_map(move |x| [x as u8, y as u8, (x ^ y) as u8]))
        .collect();

    let mut out = Vec::with_capacity(pixels.len() + 54 + height as usize * 4);

    BmpEncoder::new(&mut out)
        .encode(&pixels, width, height, ColorType::Rgb8)
        .unwrap();
    out
}
