/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! The fixed 54 byte BMP header
//!
//! A 14 byte file header (`BM`, file size, reserved, pixel data offset)
//! followed by the 40 byte `BITMAPINFOHEADER`. Only the fields needed to
//! locate and size 24 bit pixel data are extracted.

use texload_core::bytestream::{ZCursor, ZReader};

use crate::BmpDecoderErrors;

/// Number of bytes read as the header
pub const BMP_HEADER_SIZE: usize = 54;

const DATA_OFFSET: usize = 10;
const WIDTH: usize = 18;
const HEIGHT: usize = 22;
const BITS_PER_PIXEL: usize = 28;
const IMAGE_SIZE: usize = 34;

/// Header fields as stored in the file
///
/// Values are kept signed and unvalidated, the decoder
/// validates dimensions and fixes up `image_size`.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BmpHeader {
    /// Offset from the start of the file to the pixel data
    pub data_offset:    i32,
    pub width:          i32,
    pub height:         i32,
    /// Read for reporting, the decoder always assumes 24 bits
    pub bits_per_pixel: u16,
    /// Size of the pixel data, zero is allowed for uncompressed images
    pub image_size:     i32
}

impl BmpHeader {
    /// Parse the header bytes, checking the `BM` signature
    pub fn parse(header: &[u8; BMP_HEADER_SIZE]) -> Result<BmpHeader, BmpDecoderErrors> {
        if &header[0..2] != b"BM" {
            return Err(BmpDecoderErrors::BadSignature([header[0], header[1]]));
        }
        let mut reader = ZReader::new(ZCursor::new(&header[..]));

        reader.set_position(DATA_OFFSET)?;
        let data_offset = reader.get_i32_le_err()?;

        reader.set_position(WIDTH)?;
        let width = reader.get_i32_le_err()?;

        reader.set_position(HEIGHT)?;
        let height = reader.get_i32_le_err()?;

        reader.set_position(BITS_PER_PIXEL)?;
        let bits_per_pixel = reader.get_u16_le_err()?;

        reader.set_position(IMAGE_SIZE)?;
        let image_size = reader.get_i32_le_err()?;

        Ok(BmpHeader {
            data_offset,
            width,
            height,
            bits_per_pixel,
            image_size
        })
    }
}
