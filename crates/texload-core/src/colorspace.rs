/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Image Colorspace information

/// Colorspaces a texture buffer can be laid out in
#[allow(clippy::upper_case_acronyms)]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum ColorSpace {
    /// Red, Green , Blue
    RGB,
    /// Blue, Green, Red
    ///
    /// The order pixels are stored in inside BMP files
    BGR
}

impl ColorSpace {
    /// Number of color channels present for a certain colorspace
    ///
    /// E.g. RGB returns 3 since it contains R,G and B colors to make up a pixel
    pub const fn num_components(&self) -> usize {
        match self {
            Self::RGB | Self::BGR => 3
        }
    }

    /// Name of the colorspace as used in metadata output
    pub const fn name(&self) -> &'static str {
        match self {
            Self::RGB => "RGB",
            Self::BGR => "BGR"
        }
    }
}
