/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::io::Write;

use texload_bmp::{decode_file, probe_bmp, BmpDecoder, BmpDecoderErrors};
use texload_core::bytestream::{ZByteReaderTrait, ZCursor};
use texload_core::options::DecoderOptions;

/// Build a BMP file around already laid out pixel data
fn bmp_file(width: i32, height: i32, data_offset: i32, image_size: i32, data: &[u8]) -> Vec<u8> {
    let mut file = vec![0_u8; 54];
    file[0..2].copy_from_slice(b"BM");
    let file_size = data_offset as usize + data.len();
    file[2..6].copy_from_slice(&(file_size as u32).to_le_bytes());
    file[10..14].copy_from_slice(&data_offset.to_le_bytes());
    file[14..18].copy_from_slice(&40_u32.to_le_bytes());
    file[18..22].copy_from_slice(&width.to_le_bytes());
    file[22..26].copy_from_slice(&height.to_le_bytes());
    file[26..28].copy_from_slice(&1_u16.to_le_bytes());
    file[28..30].copy_from_slice(&24_u16.to_le_bytes());
    file[34..38].copy_from_slice(&image_size.to_le_bytes());
    file.resize(data_offset as usize, 0);
    file.extend_from_slice(data);
    file
}

/// Stored (bottom-up, padded) rows where every pixel of stored row `y` is `colors[y]` as B,G,R
fn stored_rows(width: usize, colors: &[[u8; 3]], padding_byte: u8) -> Vec<u8> {
    let row_size = width * 3;
    let padded = (row_size + 3) & !3;
    let mut data = Vec::new();

    for color in colors {
        for _ in 0..width {
            data.extend_from_slice(color);
        }
        data.resize(data.len() + padded - row_size, padding_byte);
    }
    data
}

fn simple_bmp(width: usize, colors: &[[u8; 3]]) -> Vec<u8> {
    let data = stored_rows(width, colors, 0);
    bmp_file(width as i32, colors.len() as i32, 54, data.len() as i32, &data)
}

fn decode(bytes: Vec<u8>) -> Result<Vec<u8>, BmpDecoderErrors> {
    BmpDecoder::new(ZCursor::new(bytes)).decode()
}

#[test]
fn unpadded_width_keeps_dimensions() {
    let file = simple_bmp(4, &[[1, 2, 3], [4, 5, 6], [7, 8, 9]]);
    let image = BmpDecoder::new(ZCursor::new(file)).decode_image().unwrap();

    assert_eq!(image.dimensions(), (4, 3));
    assert_eq!(image.pixels().len(), 4 * 3 * 3);
}

#[test]
fn single_pixel_is_converted_to_rgb() {
    let file = bmp_file(1, 1, 54, 4, &[10, 20, 30, 0]);
    let pixels = decode(file).unwrap();

    assert_eq!(pixels, [30, 20, 10]);
}

#[test]
fn padded_rows_are_consumed_exactly() {
    let mut data = stored_rows(5, &[[1, 2, 3], [4, 5, 6]], 0xEE);
    assert_eq!(data.len(), 2 * 16);
    // trailing bytes after the pixel data must stay unread
    data.extend_from_slice(&[0xAA; 7]);

    let file = bmp_file(5, 2, 54, 32, &data);
    let mut decoder = BmpDecoder::new(ZCursor::new(file));
    let pixels = decoder.decode().unwrap();

    assert_eq!(pixels.len(), 5 * 2 * 3);
    assert!(!pixels.contains(&0xEE));
    assert!(!pixels.contains(&0xAA));

    let mut cursor = decoder.into_inner();
    assert_eq!(cursor.z_position().unwrap(), 54 + 32);
}

#[test]
fn padded_rows_are_flipped_to_top_down() {
    // stored bottom row first
    let file = simple_bmp(1, &[[1, 2, 3], [4, 5, 6]]);
    let image = BmpDecoder::new(ZCursor::new(file)).decode_image().unwrap();

    assert_eq!(image.pixel(0, 0), Some([6, 5, 4]));
    assert_eq!(image.pixel(0, 1), Some([3, 2, 1]));
}

#[test]
fn unpadded_rows_use_the_same_order_as_padded_rows() {
    for width in [4, 5] {
        let file = simple_bmp(width, &[[1, 2, 3], [4, 5, 6]]);
        let image = BmpDecoder::new(ZCursor::new(file)).decode_image().unwrap();

        assert_eq!(image.pixel(0, 0), Some([6, 5, 4]), "width {width}");
        assert_eq!(image.pixel(width - 1, 1), Some([3, 2, 1]), "width {width}");
    }
}

#[test]
fn stored_order_is_kept_when_not_flipping() {
    let options = DecoderOptions::default().bmp_set_flip_vertically(false);

    for width in [4, 5] {
        let file = simple_bmp(width, &[[1, 2, 3], [4, 5, 6]]);
        let image = BmpDecoder::new_with_options(ZCursor::new(file), options)
            .decode_image()
            .unwrap();

        assert_eq!(image.pixel(0, 0), Some([3, 2, 1]), "width {width}");
        assert_eq!(image.pixel(0, 1), Some([6, 5, 4]), "width {width}");
    }
}

#[test]
fn data_offset_is_honored() {
    let data = stored_rows(4, &[[9, 9, 9]], 0);
    let mut file = bmp_file(4, 1, 60, 12, &data);
    // garbage between the header and the pixels
    file[54..60].copy_from_slice(&[1, 2, 3, 4, 5, 6]);

    assert_eq!(decode(file).unwrap(), vec![9; 12]);
}

#[test]
fn short_header_is_truncated() {
    let file = simple_bmp(4, &[[1, 2, 3]]);

    assert!(matches!(
        decode(file[..20].to_vec()),
        Err(BmpDecoderErrors::TruncatedHeader(20))
    ));
    assert!(matches!(
        decode(Vec::new()),
        Err(BmpDecoderErrors::TruncatedHeader(0))
    ));
}

#[test]
fn wrong_signature() {
    let mut file = simple_bmp(4, &[[1, 2, 3]]);
    file[0..2].copy_from_slice(b"XX");

    assert!(matches!(
        decode(file),
        Err(BmpDecoderErrors::BadSignature([b'X', b'X']))
    ));
}

#[test]
fn zero_or_negative_dimensions() {
    let file = bmp_file(0, 2, 54, 0, &[]);
    assert!(matches!(
        decode(file),
        Err(BmpDecoderErrors::InvalidDimensions(0, 2))
    ));

    let file = bmp_file(2, -2, 54, 0, &[0; 16]);
    assert!(matches!(
        decode(file),
        Err(BmpDecoderErrors::InvalidDimensions(2, -2))
    ));
}

#[test]
fn short_pixel_data() {
    let file = bmp_file(4, 2, 54, 24, &[0; 10]);
    assert!(matches!(
        decode(file),
        Err(BmpDecoderErrors::TruncatedPixelData(24, 10))
    ));

    let file = bmp_file(5, 2, 54, 32, &[0; 26]);
    assert!(matches!(
        decode(file),
        Err(BmpDecoderErrors::TruncatedPixelData(32, 26))
    ));
}

#[test]
fn missing_padding_after_last_row_is_accepted() {
    let mut data = stored_rows(5, &[[1, 2, 3], [4, 5, 6]], 0);
    data.truncate(16 + 15);

    let file = bmp_file(5, 2, 54, 32, &data);
    let pixels = decode(file).unwrap();

    assert_eq!(&pixels[..3], &[6, 5, 4]);
    assert_eq!(&pixels[15..18], &[3, 2, 1]);
}

#[test]
fn unusable_image_size_is_recomputed() {
    for image_size in [0, 4 * 2 * 4 + 1] {
        let data = stored_rows(4, &[[1, 2, 3], [1, 2, 3]], 0);
        let file = bmp_file(4, 2, 54, image_size, &data);

        let mut decoder = BmpDecoder::new(ZCursor::new(file));
        decoder.decode_headers().unwrap();

        assert_eq!(decoder.image_size(), Some(24));
        assert_eq!(decoder.header().unwrap().image_size, image_size);
        assert_eq!(decoder.decode().unwrap().len(), 24);
    }
}

#[test]
fn negative_image_size_is_rejected() {
    let data = stored_rows(4, &[[1, 2, 3]], 0);
    let file = bmp_file(4, 1, 54, -5, &data);

    assert!(matches!(
        decode(file),
        Err(BmpDecoderErrors::InvalidDimensions(4, 1))
    ));
}

#[test]
fn headers_before_and_after_decoding() {
    let file = simple_bmp(4, &[[1, 2, 3]]);
    let mut decoder = BmpDecoder::new(ZCursor::new(file));

    assert_eq!(decoder.dimensions(), None);
    assert_eq!(decoder.output_buf_size(), None);

    decoder.decode_headers().unwrap();
    // idempotent
    decoder.decode_headers().unwrap();

    assert_eq!(decoder.dimensions(), Some((4, 1)));
    assert_eq!(decoder.output_buf_size(), Some(12));
    assert_eq!(decoder.header().unwrap().bits_per_pixel, 24);
}

#[test]
fn depth_is_only_checked_in_strict_mode() {
    let mut file = simple_bmp(4, &[[1, 2, 3]]);
    file[28..30].copy_from_slice(&32_u16.to_le_bytes());

    assert!(decode(file.clone()).is_ok());

    let options = DecoderOptions::default().set_strict_mode(true);
    let result = BmpDecoder::new_with_options(ZCursor::new(file), options).decode();
    assert!(matches!(result, Err(BmpDecoderErrors::UnsupportedDepth(32))));
}

#[test]
fn dimension_limits() {
    let file = simple_bmp(8, &[[1, 2, 3]]);
    let options = DecoderOptions::default().set_max_width(4);
    let result = BmpDecoder::new_with_options(ZCursor::new(file), options).decode();

    assert!(matches!(
        result,
        Err(BmpDecoderErrors::TooLargeDimensions("width", 4, 8))
    ));
}

#[test]
fn decode_into_checks_buffer_size() {
    let file = simple_bmp(4, &[[1, 2, 3]]);
    let mut decoder = BmpDecoder::new(ZCursor::new(file));

    let mut small = [0; 11];
    assert!(matches!(
        decoder.decode_into(&mut small),
        Err(BmpDecoderErrors::TooSmallBuffer(12, 11))
    ));

    let mut large = [0xFF; 16];
    decoder.decode_into(&mut large).unwrap();
    assert_eq!(&large[..12], &[3, 2, 1, 3, 2, 1, 3, 2, 1, 3, 2, 1]);
    assert_eq!(&large[12..], &[0xFF; 4]);
}

#[test]
fn negative_data_offset() {
    let mut file = bmp_file(4, 1, 54, 12, &[0; 12]);
    file[10..14].copy_from_slice(&(-1_i32).to_le_bytes());

    assert!(matches!(
        decode(file),
        Err(BmpDecoderErrors::GenericStatic(_))
    ));
}

#[test]
fn decode_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(&simple_bmp(5, &[[10, 20, 30], [40, 50, 60]]))
        .unwrap();
    file.flush().unwrap();

    let image = decode_file(file.path(), DecoderOptions::default()).unwrap();
    assert_eq!(image.dimensions(), (5, 2));
    assert_eq!(image.pixel(4, 0), Some([60, 50, 40]));
    assert_eq!(image.pixel(4, 1), Some([30, 20, 10]));
}

#[test]
fn missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.bmp");

    match decode_file(&path, DecoderOptions::default()) {
        Err(BmpDecoderErrors::FileNotFound(name)) => assert!(name.ends_with("missing.bmp")),
        other => panic!("expected FileNotFound, got {:?}", other)
    }
}

#[test]
fn probing() {
    assert!(probe_bmp(&simple_bmp(4, &[[1, 2, 3]])));
    assert!(!probe_bmp(b"BM"));
    assert!(!probe_bmp(&[0; 60]));
}
