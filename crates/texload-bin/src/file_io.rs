/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::path::Path;

use log::debug;
use texload_bmp::DecodedImage;

use crate::errors::CliErrors;

/// Writes decoded images as binary (P6) PPM
pub struct PpmWriter<'a, W: Write> {
    writer: &'a mut W
}

impl<'a, W: Write> PpmWriter<'a, W> {
    pub fn new(writer: &'a mut W) -> PpmWriter<'a, W> {
        Self { writer }
    }

    fn write_headers(&mut self, width: usize, height: usize) -> Result<(), CliErrors> {
        let header = format!("P6\n{width} {height}\n255\n");

        self.writer.write_all(header.as_bytes())?;

        Ok(())
    }

    /// Write the header followed by the RGB pixels of `image`
    pub fn write_image(&mut self, image: &DecodedImage) -> Result<(), CliErrors> {
        let (width, height) = image.dimensions();

        self.write_headers(width, height)?;
        self.writer.write_all(image.pixels())?;

        Ok(())
    }
}

/// Create or truncate `path` and write `image` to it as PPM
pub fn write_ppm_file<P: AsRef<Path>>(image: &DecodedImage, path: P) -> Result<(), CliErrors> {
    let path = path.as_ref();

    let file = OpenOptions::new()
        .write(true)
        .truncate(true)
        .create(true)
        .open(path)?;

    let mut buf_writer = BufWriter::new(file);

    debug!("Writing {:?} as a ppm file", path);
    PpmWriter::new(&mut buf_writer).write_image(image)?;
    buf_writer.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn p6_layout() {
        let image = DecodedImage::checkerboard(2, 1).unwrap();
        let mut out = Vec::new();

        PpmWriter::new(&mut out).write_image(&image).unwrap();

        let header = b"P6\n2 1\n255\n";
        assert_eq!(&out[..header.len()], header);
        assert_eq!(&out[header.len()..], &[255, 0, 0, 255, 255, 255]);
    }

    #[test]
    fn file_written() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.ppm");
        let image = DecodedImage::checkerboard(3, 2).unwrap();

        write_ppm_file(&image, &path).unwrap();

        let contents = std::fs::read(&path).unwrap();
        assert!(contents.starts_with(b"P6\n3 2\n255\n"));
        assert_eq!(contents.len(), b"P6\n3 2\n255\n".len() + 3 * 2 * 3);
    }
}
