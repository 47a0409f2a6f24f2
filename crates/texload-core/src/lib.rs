/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Core routines shared by all texload libraries
//!
//! It currently contains
//!
//! - A bytestream reader with endian aware reads and seeking
//! - Colorspace information shared by images
//! - Image decoder options
//! - Logging macros that forward to the `log` crate when enabled
//!
//! This library is `#[no_std]` with `alloc` feature needed for defining `Vec`
//! which we need for storing decoded  bytes.
//!
//! # Features
//!  - `std`: Implements the reader trait for `std::io::Cursor` and `BufReader`
//!
//!  - `log`: Route the logging macros to the `log` crate, otherwise they compile to nothing
//!
//!  - `serde`: Enables serializing of some of the data structures
//!     present in the crate
//!
#![cfg_attr(not(feature = "std"), no_std)]
#![macro_use]
extern crate alloc;

pub mod bytestream;
pub mod colorspace;
pub mod log;
pub mod options;
pub mod serde;
