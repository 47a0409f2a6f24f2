/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! A 24 bit BMP texture decoder
//!
//! This crate decodes uncompressed 24 bit Windows bitmaps into
//! RGB buffers ready to be handed to a texture upload.
//!
//! # Features
//! - `no_std` with `alloc`, file helpers need the `std` feature (on by default)
//! - `log`: Log each decoding stage through the `log` crate
//! - `serde`: Serialize [`BmpHeader`] for metadata output
//!
//! # Example
//! ```no_run
//! use texload_bmp::{decode_file, DecodedImage};
//! use texload_core::options::DecoderOptions;
//!
//! let image = decode_file("bg1.bmp", DecoderOptions::default())
//!     .or_else(|_| DecodedImage::checkerboard(2, 2))
//!     .unwrap();
//! assert_eq!(image.pixels().len(), image.width() * image.height() * 3);
//! ```
//!
//! # Unsupported formats
//! - Compressed (RLE, bitfields) images
//! - Paletted images and depths other than 24 bits
//! - Top-down images (negative height)

#![no_std]
#![macro_use]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub use texload_core;

pub use crate::common::{BmpHeader, BMP_HEADER_SIZE};
#[cfg(feature = "std")]
pub use crate::decoder::decode_file;
pub use crate::decoder::{probe_bmp, BmpDecoder};
pub use crate::errors::BmpDecoderErrors;
pub use crate::image::DecodedImage;

mod common;
mod decoder;
mod errors;
mod image;
mod utils;
