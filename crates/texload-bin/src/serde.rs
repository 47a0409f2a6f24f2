/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::ffi::OsString;

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use texload_bmp::BmpHeader;
use texload_core::colorspace::ColorSpace;

/// Header information reported by `--probe`
pub struct Metadata<'a> {
    file:       OsString,
    file_size:  u64,
    header:     &'a BmpHeader,
    image_size: usize,
    output_len: usize
}

impl<'a> Metadata<'a> {
    pub fn new(
        file: OsString, file_size: u64, header: &'a BmpHeader, image_size: usize,
        output_len: usize
    ) -> Metadata<'a> {
        Metadata {
            file,
            file_size,
            header,
            image_size,
            output_len
        }
    }
}

impl<'a> Serialize for Metadata<'a> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        let mut state = serializer.serialize_struct("BmpMetadata", 7)?;

        state.serialize_field("file", &self.file.to_string_lossy())?;
        state.serialize_field("file_size", &self.file_size)?;
        state.serialize_field("header", self.header)?;
        state.serialize_field("image_size", &self.image_size)?;
        state.serialize_field("output_len", &self.output_len)?;
        state.serialize_field("stored_colorspace", &ColorSpace::BGR)?;
        state.serialize_field("output_colorspace", &ColorSpace::RGB)?;

        state.end()
    }
}
