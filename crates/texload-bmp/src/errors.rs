/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use alloc::string::String;
use core::fmt::{Debug, Display, Formatter};

use texload_core::bytestream::ZByteIoError;

/// BMP errors that can occur during decoding
///
/// None of these are fatal to a caller, a failed decode
/// simply produces no image and callers usually fall back to
/// [`DecodedImage::checkerboard`](crate::DecodedImage::checkerboard)
#[non_exhaustive]
pub enum BmpDecoderErrors {
    /// The file could not be opened, contains the path
    FileNotFound(String),
    /// Fewer than 54 header bytes were present,
    /// contains the number of bytes found
    TruncatedHeader(usize),
    /// The file/bytes do not start with `BM`,
    /// contains the two bytes found
    BadSignature([u8; 2]),
    /// Width or height is zero or negative, or the stored
    /// image size is negative, contains width and height as stored
    InvalidDimensions(i64, i64),
    /// The pixel data ended early, expected
    /// a size but found another size
    TruncatedPixelData(usize, usize),
    /// Bits per pixel other than 24, only raised in strict mode
    UnsupportedDepth(u16),
    /// A buffer is too small (or for [`DecodedImage::new`](crate::DecodedImage::new)
    /// not exactly the right size), expected a size but got another size
    TooSmallBuffer(usize, usize),
    /// Generic message
    GenericStatic(&'static str),
    /// Too large dimensions for a given width or
    /// height
    TooLargeDimensions(&'static str, usize, usize),
    /// A calculation overflowed
    OverFlowOccurred,
    IoErrors(ZByteIoError)
}

impl Debug for BmpDecoderErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::FileNotFound(path) => {
                writeln!(f, "Could not find file: {path}")
            }
            Self::TruncatedHeader(found) => {
                writeln!(f, "Invalid BMP file, header too short, expected 54 bytes but found {found}")
            }
            Self::BadSignature(magic) => {
                writeln!(
                    f,
                    "Invalid BMP signature, expected BM but found {:?}",
                    magic
                )
            }
            Self::InvalidDimensions(width, height) => {
                writeln!(f, "Invalid BMP dimensions, width={width}, height={height}")
            }
            Self::TruncatedPixelData(expected, found) => {
                writeln!(
                    f,
                    "Error reading image data, expected {expected} bytes but found {found}"
                )
            }
            Self::UnsupportedDepth(depth) => {
                writeln!(f, "Bit depth {depth} unsupported, only 24 bit images are decoded")
            }
            Self::TooSmallBuffer(expected, found) => {
                writeln!(
                    f,
                    "Buffer of wrong size, expected {} bytes but found {}",
                    expected, found
                )
            }
            Self::GenericStatic(header) => {
                writeln!(f, "{}", header)
            }
            Self::TooLargeDimensions(dimension, expected, found) => {
                writeln!(
                    f,
                    "Too large dimensions for {dimension} , {found} exceeds {expected}"
                )
            }
            Self::OverFlowOccurred => {
                writeln!(f, "Overflow occurred")
            }
            Self::IoErrors(err) => {
                write!(f, "{:?}", err)
            }
        }
    }
}

impl Display for BmpDecoderErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BmpDecoderErrors {}

impl From<ZByteIoError> for BmpDecoderErrors {
    fn from(value: ZByteIoError) -> Self {
        BmpDecoderErrors::IoErrors(value)
    }
}
