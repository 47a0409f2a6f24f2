/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! A simple implementation of a bytestream reader
//! with endian aware reads and seeking
//!
//! Decoders are generic over [`ZByteReaderTrait`], which is implemented for
//! the in-memory [`ZCursor`] and, with the `std` feature, for [`std::io::Cursor`]
//! and [`std::io::BufReader`].
pub use reader::{ZByteIoError, ZCursor, ZReader, ZSeekFrom};
pub use traits::ZByteReaderTrait;

mod reader;
mod traits;
