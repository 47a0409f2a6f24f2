/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use alloc::vec;
use alloc::vec::Vec;
use core::fmt::{Debug, Formatter};

use texload_core::colorspace::ColorSpace;

use crate::BmpDecoderErrors;

const RED: [u8; 3] = [255, 0, 0];
const WHITE: [u8; 3] = [255, 255, 255];

/// A decoded texture, an RGB buffer together with its dimensions.
///
/// The buffer always holds `width * height * 3` bytes, row major,
/// with channels in R,G,B order.
///
/// The image owns its pixels and is not `Clone`.
pub struct DecodedImage {
    width:  usize,
    height: usize,
    pixels: Vec<u8>
}

impl DecodedImage {
    /// Create an image from an RGB buffer
    ///
    /// # Errors
    /// - [`InvalidDimensions`](BmpDecoderErrors::InvalidDimensions) if width or height is zero
    /// - [`TooSmallBuffer`](BmpDecoderErrors::TooSmallBuffer) if `pixels` is not exactly
    ///   `width * height * 3` bytes long
    pub fn new(pixels: Vec<u8>, width: usize, height: usize) -> Result<DecodedImage, BmpDecoderErrors> {
        let expected = buffer_size(width, height)?;

        if pixels.len() != expected {
            return Err(BmpDecoderErrors::TooSmallBuffer(expected, pixels.len()));
        }
        Ok(DecodedImage::from_decoded(pixels, width, height))
    }

    /// Create a red and white checkerboard, used in place of a texture
    /// that could not be loaded.
    ///
    /// Pixel `(x,y)` is red when `x + y` is even and white otherwise.
    pub fn checkerboard(width: usize, height: usize) -> Result<DecodedImage, BmpDecoderErrors> {
        let mut pixels = vec![0_u8; buffer_size(width, height)?];

        for (i, pix) in pixels.chunks_exact_mut(3).enumerate() {
            let (x, y) = (i % width, i / width);

            if (x + y) % 2 == 0 {
                pix.copy_from_slice(&RED);
            } else {
                pix.copy_from_slice(&WHITE);
            }
        }
        Ok(DecodedImage::from_decoded(pixels, width, height))
    }

    /// Wrap a buffer the decoder already sized correctly
    pub(crate) fn from_decoded(pixels: Vec<u8>, width: usize, height: usize) -> DecodedImage {
        debug_assert_eq!(pixels.len(), width * height * 3);
        DecodedImage {
            width,
            height,
            pixels
        }
    }

    pub const fn width(&self) -> usize {
        self.width
    }

    pub const fn height(&self) -> usize {
        self.height
    }

    /// Get dimensions of the image
    ///
    /// This is a tuple of width,height
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// The pixel layout, always [`ColorSpace::RGB`]
    pub const fn colorspace(&self) -> ColorSpace {
        ColorSpace::RGB
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Get the color of the pixel at `(x,y)` or `None` if out of bounds
    pub fn pixel(&self, x: usize, y: usize) -> Option<[u8; 3]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let start = (y * self.width + x) * 3;
        let mut rgb = [0; 3];
        rgb.copy_from_slice(&self.pixels[start..start + 3]);
        Some(rgb)
    }

    /// Destroy the image returning its buffer
    pub fn into_pixels(self) -> Vec<u8> {
        self.pixels
    }
}

impl Debug for DecodedImage {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DecodedImage")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("bytes", &self.pixels.len())
            .finish()
    }
}

fn buffer_size(width: usize, height: usize) -> Result<usize, BmpDecoderErrors> {
    if width == 0 || height == 0 {
        return Err(BmpDecoderErrors::InvalidDimensions(
            width as i64,
            height as i64
        ));
    }
    width
        .checked_mul(height)
        .and_then(|x| x.checked_mul(3))
        .ok_or(BmpDecoderErrors::OverFlowOccurred)
}
