/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Decoder options
//!
//! This module exposes a struct for which all implemented
//! decoders get shared options for decoding
//!
//! Options are set through builder style `set_*` methods and read through `get_*` methods.
//! Format specific options are prefixed with the format name, e.g `bmp_set_flip_vertically`

/// Decoder options
///
/// Not all options are respected by decoders
/// Each option specifies decoders that respect it
#[derive(Debug, Copy, Clone)]
pub struct DecoderOptions {
    /// Maximum width for which decoders will
    /// not try to decode images larger than
    /// the specified width.
    ///
    /// - Default value: 16384
    /// - Respected by: `all decoders`
    max_width:           usize,
    /// Maximum height for which decoders will not
    /// try to decode images larger than the
    /// specified height
    ///
    /// - Default value: 16384
    /// - Respected by: `all decoders`
    max_height:          usize,
    /// treat some warnings as errors
    ///
    /// Some images may have recoverable errors
    /// but sometimes decoders may wish to have a more standard
    /// conforming decoder which would error out on encountering such images
    ///
    /// When set to false, this logs errors via the log crate.
    ///
    /// When set to true, this will return an `Result<Err>` on exception.
    ///
    /// - Default value: false,
    /// - Respected by: `bmp`
    strict_mode:         bool,
    /// Whether bottom-up BMP rows should be reordered so that
    /// the first output row is the top of the image
    ///
    /// - Default value: true
    /// - Respected by: `bmp`
    bmp_flip_vertically: bool
}

impl Default for DecoderOptions {
    fn default() -> Self {
        Self {
            max_width:           1 << 14,
            max_height:          1 << 14,
            strict_mode:         false,
            bmp_flip_vertically: true
        }
    }
}

/// Global options respected by all decoders
impl DecoderOptions {
    /// Get maximum width configured for which the decoder
    /// should not try to decode images greater than this width
    pub const fn get_max_width(&self) -> usize {
        self.max_width
    }

    /// Get maximum height configured for which the decoder should
    /// not try to decode images greater than this height
    pub const fn get_max_height(&self) -> usize {
        self.max_height
    }

    /// Return true whether the decoder should be in strict mode
    /// And reject most errors
    pub const fn get_strict_mode(&self) -> bool {
        self.strict_mode
    }

    /// Set maximum width for which the decoder should not try
    /// decoding images greater than that width
    ///
    /// # Arguments
    ///
    /// * `width`:  The maximum width allowed
    ///
    /// returns: DecoderOptions
    pub fn set_max_width(mut self, width: usize) -> Self {
        self.max_width = width;
        self
    }

    /// Set maximum height for which the decoder should not try
    /// decoding images greater than that height
    /// # Arguments
    ///
    /// * `height`: The maximum height allowed
    ///
    /// returns: DecoderOptions
    ///
    pub fn set_max_height(mut self, height: usize) -> Self {
        self.max_height = height;
        self
    }

    /// Set whether the decoder should be in standards conforming/
    /// strict mode
    ///
    /// This reduces the error tolerance level for the decoders and invalid
    /// samples will be rejected by the decoder
    pub fn set_strict_mode(mut self, yes: bool) -> Self {
        self.strict_mode = yes;
        self
    }
}

/// BMP specific options
impl DecoderOptions {
    /// Whether the bmp decoder outputs rows top to bottom
    pub const fn bmp_get_flip_vertically(&self) -> bool {
        self.bmp_flip_vertically
    }

    /// Set whether the bmp decoder should reorder the stored bottom-up
    /// rows into top-down order.
    ///
    /// When false, rows are returned in the order they are stored in the file,
    /// which is what OpenGL expects for its first texture row.
    ///
    /// The same order is used for padded and unpadded row widths.
    pub fn bmp_set_flip_vertically(mut self, yes: bool) -> Self {
        self.bmp_flip_vertically = yes;
        self
    }
}
