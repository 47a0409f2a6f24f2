/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

// Decoding of uncompressed 24 bit Windows bitmaps
//
// LAYOUT
// ------
// - 14 byte file header: the magic number ("BM"), file size, two reserved
//   fields and the offset to the pixel data.
// - 40 byte info header (BITMAPINFOHEADER): header size, width, height,
//   planes, bits per pixel, compression, image size and resolution/palette
//   fields we do not look at.
// - Pixel data starting at the data offset. Pixels are 3 bytes stored as
//   B,G,R. Each row is padded with zeroes to a multiple of 4 bytes and rows
//   are stored bottom-up, the first stored row is the bottom of the picture.
//
// The decoder reads the 54 header bytes in one go and extracts fields at
// their fixed offsets, it does not interpret the info header size, so other
// header versions only decode if their first 54 bytes agree with the above.
//
// ROW ORDER
// ---------
// With `bmp_get_flip_vertically` (the default) output rows are top-down for
// every width. Padded widths are un-padded row by row straight into their
// flipped position, unpadded widths are read in one pass and flipped after.
// Turning the option off keeps stored (bottom-up) order for every width.

use alloc::vec;
use alloc::vec::Vec;

use texload_core::bytestream::{ZByteReaderTrait, ZReader};
use texload_core::colorspace::ColorSpace;
use texload_core::log::{debug, trace, warn};
use texload_core::options::DecoderOptions;

use crate::common::{BmpHeader, BMP_HEADER_SIZE};
use crate::utils::{flip_rows, padded_row_size, swap_red_blue};
use crate::{BmpDecoderErrors, DecodedImage};

/// Probe some bytes to see
/// if they consist of a BMP image
pub fn probe_bmp(bytes: &[u8]) -> bool {
    bytes.len() >= BMP_HEADER_SIZE && bytes.starts_with(b"BM")
}

/// Open and decode a BMP file into an RGB image
///
/// # Errors
/// - [`FileNotFound`](BmpDecoderErrors::FileNotFound) if the path cannot be opened
/// - Any error [`BmpDecoder::decode_image`] returns
#[cfg(feature = "std")]
pub fn decode_file<P: AsRef<std::path::Path>>(
    path: P, options: DecoderOptions
) -> Result<DecodedImage, BmpDecoderErrors> {
    let path = path.as_ref();

    let file = match std::fs::File::open(path) {
        Ok(file) => file,
        Err(err) => {
            debug!("Could not open {:?}: {}", path, err);
            return Err(BmpDecoderErrors::FileNotFound(alloc::format!(
                "{}",
                path.display()
            )));
        }
    };
    trace!("File opened successfully: {:?}", path);

    BmpDecoder::new_with_options(std::io::BufReader::new(file), options).decode_image()
}

/// A 24 bit BMP decoder.
///
/// # Usage
/// The decoder can be used to read image information and or get the pixels out of a valid bmp
/// image.
///
/// ## Extracting image metadata
/// - use `decode_headers`+ utility functions to get information
/// ```no_run
/// use texload_bmp::BmpDecoder;
/// use texload_core::bytestream::ZCursor;
///
/// fn main()->Result<(),texload_bmp::BmpDecoderErrors>{
///
///     let source = ZCursor::new(std::fs::read("bg1.bmp").unwrap());
///     let mut decoder = BmpDecoder::new(source);
///     decoder.decode_headers()?;
///     // after decoding headers, we can safely access the image metadata
///     // unwrap won't panic
///     let (w,h) = decoder.dimensions().unwrap();
///     println!("Image width: {}\t Image height: {}",w,h);
///
///     Ok(())
/// }
/// ```
///
/// ## Just getting the pixels
///
/// ```no_run
/// use texload_bmp::BmpDecoder;
/// use texload_core::bytestream::ZCursor;
///
/// fn main()->Result<(),texload_bmp::BmpDecoderErrors>{
///
///     let source = ZCursor::new(std::fs::read("bg1.bmp").unwrap());
///     let mut decoder = BmpDecoder::new(source);
///     let image = decoder.decode_image()?;
///     println!("Pixels length:{}",image.pixels().len());
///     Ok(())
/// }
/// ```
pub struct BmpDecoder<T>
where
    T: ZByteReaderTrait
{
    bytes:           ZReader<T>,
    options:         DecoderOptions,
    header:          Option<BmpHeader>,
    width:           usize,
    height:          usize,
    data_offset:     usize,
    /// Pixel data size, either from the header or
    /// recomputed when the header value is not usable
    image_size:      usize,
    row_size:        usize,
    padded_row_size: usize
}

impl<T> BmpDecoder<T>
where
    T: ZByteReaderTrait
{
    /// Create a new bmp decoder that reads data from
    /// `data`
    ///
    /// # Arguments
    /// - `data`: The buffer from which we will read bytes from
    ///
    /// # Returns
    /// - A BMP decoder instance
    pub fn new(data: T) -> BmpDecoder<T> {
        BmpDecoder::new_with_options(data, DecoderOptions::default())
    }
    /// Create a new decoder instance with specified options
    ///
    /// # Arguments
    ///
    /// * `data`: The buffer from which we will read data from
    /// * `options`:  Specialized options for this decoder
    ///
    /// returns: A BMP Decoder instance
    ///
    pub fn new_with_options(data: T, options: DecoderOptions) -> BmpDecoder<T> {
        BmpDecoder {
            bytes: ZReader::new(data),
            options,
            header: None,
            width: 0,
            height: 0,
            data_offset: 0,
            image_size: 0,
            row_size: 0,
            padded_row_size: 0
        }
    }

    /// Decode headers stored in the bmp file and store
    /// information in the decode context
    ///
    /// After calling this, most information fields will be filled
    /// except the actual decoding bytes
    ///
    /// # Returns
    /// - Ok(()) Indicates everything was okay during header parsing
    /// - Err: Error that occurred when decoding headers
    pub fn decode_headers(&mut self) -> Result<(), BmpDecoderErrors> {
        if self.header.is_some() {
            return Ok(());
        }
        let mut raw = [0_u8; BMP_HEADER_SIZE];

        let bytes_read = self.bytes.read_up_to(&mut raw)?;

        if bytes_read != BMP_HEADER_SIZE {
            return Err(BmpDecoderErrors::TruncatedHeader(bytes_read));
        }
        let header = BmpHeader::parse(&raw)?;

        debug!(
            "BMP info: width={}, height={}, bitsPerPixel={}, dataOffset={}, imageSize={}",
            header.width,
            header.height,
            header.bits_per_pixel,
            header.data_offset,
            header.image_size
        );

        if header.width <= 0 || header.height <= 0 {
            return Err(BmpDecoderErrors::InvalidDimensions(
                i64::from(header.width),
                i64::from(header.height)
            ));
        }
        let width = usize::try_from(header.width).map_err(|_| BmpDecoderErrors::OverFlowOccurred)?;
        let height =
            usize::try_from(header.height).map_err(|_| BmpDecoderErrors::OverFlowOccurred)?;

        if height > self.options.get_max_height() {
            return Err(BmpDecoderErrors::TooLargeDimensions(
                "height",
                self.options.get_max_height(),
                height
            ));
        }

        if width > self.options.get_max_width() {
            return Err(BmpDecoderErrors::TooLargeDimensions(
                "width",
                self.options.get_max_width(),
                width
            ));
        }

        if header.bits_per_pixel != 24 {
            if self.options.get_strict_mode() {
                return Err(BmpDecoderErrors::UnsupportedDepth(header.bits_per_pixel));
            }
            warn!(
                "Bits per pixel is {}, decoding as 24 bit",
                header.bits_per_pixel
            );
        }

        let data_offset = usize::try_from(header.data_offset)
            .map_err(|_| BmpDecoderErrors::GenericStatic("Negative pixel data offset"))?;

        let num_pixels = width
            .checked_mul(height)
            .ok_or(BmpDecoderErrors::OverFlowOccurred)?;
        let output_size = num_pixels
            .checked_mul(3)
            .ok_or(BmpDecoderErrors::OverFlowOccurred)?;
        // sanity ceiling, no pixel takes more than 4 bytes
        let ceiling = num_pixels
            .checked_mul(4)
            .ok_or(BmpDecoderErrors::OverFlowOccurred)?;

        let image_size = match usize::try_from(header.image_size) {
            Ok(size) if size != 0 && size <= ceiling => size,
            // a negative size is as unusable as a negative dimension
            Err(_) => {
                return Err(BmpDecoderErrors::InvalidDimensions(
                    i64::from(header.width),
                    i64::from(header.height)
                ));
            }
            Ok(_) => {
                debug!(
                    "Image size not specified or incorrect, calculated as: {}",
                    output_size
                );
                output_size
            }
        };

        let row_size = width
            .checked_mul(3)
            .ok_or(BmpDecoderErrors::OverFlowOccurred)?;
        let padded_row_size =
            padded_row_size(row_size).ok_or(BmpDecoderErrors::OverFlowOccurred)?;

        if row_size != padded_row_size {
            trace!(
                "BMP has row padding: actual row size = {}, padded = {}",
                row_size,
                padded_row_size
            );
        }

        self.width = width;
        self.height = height;
        self.data_offset = data_offset;
        self.image_size = image_size;
        self.row_size = row_size;
        self.padded_row_size = padded_row_size;
        self.header = Some(header);

        Ok(())
    }

    /// Return the expected size of the output buffer for which
    /// a contiguous slice of `&[u8]` can store it without needing reallocation
    ///
    /// Returns `None` if headers haven't been decoded or if calculation overflows
    pub fn output_buf_size(&self) -> Option<usize> {
        self.header?;

        self.width
            .checked_mul(self.height)?
            .checked_mul(ColorSpace::RGB.num_components())
    }

    /// Get dimensions of the image
    ///
    /// This is a tuple of width,height
    ///
    /// # Returns
    /// - `Some((width,height))`  - The image dimensions
    /// - `None`: Indicates that the image headers weren't decoded
    ///    or an error occurred during decoding the headers
    pub fn dimensions(&self) -> Option<(usize, usize)> {
        self.header?;
        Some((self.width, self.height))
    }

    /// Get the output colorspace or none if the headers weren't decoded
    ///
    /// Pixels are stored as BGR but always returned as RGB
    pub fn colorspace(&self) -> Option<ColorSpace> {
        self.header?;
        Some(ColorSpace::RGB)
    }

    /// Get the raw header fields or none if the headers weren't decoded
    pub fn header(&self) -> Option<&BmpHeader> {
        self.header.as_ref()
    }

    /// Get the pixel data size in use, this differs from the header
    /// value when that was zero or larger than 4 bytes per pixel
    pub fn image_size(&self) -> Option<usize> {
        self.header?;
        Some(self.image_size)
    }

    /// Destroy the decoder returning the underlying source of the bytes
    pub fn into_inner(self) -> T {
        self.bytes.consume()
    }

    /// Decode an image returning the decoded bytes as an
    /// allocated `Vec<u8>` or an error if decoding could not be completed
    ///
    /// Also see [`decode_into`](Self::decode_into) which decodes into
    /// a pre-allocated buffer and [`decode_image`](Self::decode_image)
    /// which keeps dimensions together with the pixels
    pub fn decode(&mut self) -> Result<Vec<u8>, BmpDecoderErrors> {
        self.decode_headers()?;
        let mut output = vec![
            0_u8;
            self.output_buf_size()
                .ok_or(BmpDecoderErrors::OverFlowOccurred)?
        ];

        self.decode_into(&mut output)?;

        Ok(output)
    }

    /// Decode an image into a [`DecodedImage`] owning the RGB pixels
    pub fn decode_image(&mut self) -> Result<DecodedImage, BmpDecoderErrors> {
        let pixels = self.decode()?;

        debug!("Successfully loaded {}x{} BMP", self.width, self.height);

        Ok(DecodedImage::from_decoded(pixels, self.width, self.height))
    }

    /// Decode an encoded image into a buffer or return an error
    /// if something bad occurred
    ///
    /// Only the first [`output_buf_size`](Self::output_buf_size) bytes of `buf` are written.
    ///
    /// Also see [`decode`](Self::decode) which allocates and decodes into buffer
    pub fn decode_into(&mut self, buf: &mut [u8]) -> Result<(), BmpDecoderErrors> {
        self.decode_headers()?;

        let output_size = self
            .output_buf_size()
            .ok_or(BmpDecoderErrors::OverFlowOccurred)?;

        if buf.len() < output_size {
            return Err(BmpDecoderErrors::TooSmallBuffer(output_size, buf.len()));
        }
        let buf = &mut buf[0..output_size];

        self.bytes.set_position(self.data_offset)?;

        let flip = self.options.bmp_get_flip_vertically();

        if self.row_size != self.padded_row_size {
            // stored rows are bottom-up, walking output rows from the end
            // places stored row y at output row height-1-y
            if flip {
                self.read_padded_rows(buf.rchunks_exact_mut(self.row_size))?;
            } else {
                self.read_padded_rows(buf.chunks_exact_mut(self.row_size))?;
            }
        } else {
            let bytes_read = self.bytes.read_up_to(buf)?;

            if bytes_read != output_size {
                return Err(BmpDecoderErrors::TruncatedPixelData(
                    output_size,
                    bytes_read
                ));
            }
            if flip {
                flip_rows(buf, self.row_size);
            }
        }
        swap_red_blue(buf);

        Ok(())
    }

    /// Read `height` padded rows, copying the pixel bytes of each into
    /// the next row `rows` yields
    fn read_padded_rows<'a, I>(&mut self, rows: I) -> Result<(), BmpDecoderErrors>
    where
        I: Iterator<Item = &'a mut [u8]>
    {
        let expected = self.height.saturating_mul(self.padded_row_size);
        let mut scanline = vec![0_u8; self.padded_row_size];
        let mut consumed = 0;

        for out_row in rows {
            let bytes_read = self.bytes.read_up_to(&mut scanline)?;
            consumed += bytes_read;

            // the stream may end right after the last pixel,
            // i.e only the final row's padding may be missing
            if bytes_read < self.row_size {
                return Err(BmpDecoderErrors::TruncatedPixelData(expected, consumed));
            }
            out_row.copy_from_slice(&scanline[..self.row_size]);
        }
        Ok(())
    }
}
