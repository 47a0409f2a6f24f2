/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fs::read;
use std::path::Path;

use image::codecs::bmp::BmpEncoder;
use image::{ColorType, ImageFormat};
use texload_bmp::BmpDecoder;
use texload_core::bytestream::ZCursor;
use texload_core::options::DecoderOptions;

use crate::{hash, TestEntry};

/// Encode `entry` as a bitmap with an independent encoder
fn encode_entry(entry: &TestEntry) -> Vec<u8> {
    let mut out = Vec::new();

    BmpEncoder::new(&mut out)
        .encode(&entry.pixels(), entry.width, entry.height, ColorType::Rgb8)
        .unwrap();

    if entry.clear_image_size {
        out[34..38].copy_from_slice(&[0; 4]);
    }
    out
}

/// Reverse the order of rows, `row_size` bytes each
fn reverse_rows(pixels: &[u8], row_size: usize) -> Vec<u8> {
    pixels.rchunks_exact(row_size).flatten().copied().collect()
}

fn load_entries() -> Vec<TestEntry> {
    let file = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/bmp.json");

    let json_file = read(file).unwrap();

    serde_json::from_slice(&json_file).unwrap()
}

#[test]
#[allow(clippy::uninlined_format_args)]
fn test_bmp() {
    let entries = load_entries();

    let mut error = false;
    let mut files = Vec::new();

    for entry in &entries {
        let data = encode_entry(entry);

        let options = DecoderOptions::default().bmp_set_flip_vertically(!entry.bottom_up);

        let mut decoder = BmpDecoder::new_with_options(ZCursor::new(&data), options);
        let pixels = decoder.decode().unwrap();

        let mut expected = entry.pixels();
        if entry.bottom_up {
            expected = reverse_rows(&expected, entry.width as usize * 3);
        }

        let (found_hash, expected_hash) = (hash(&pixels), hash(&expected));

        if found_hash != expected_hash {
            error = true;
            files.push(entry.to_owned());
            // report error
            let err = format!(
                "Hash mismatch for {:?}\nExpected {} but found {}\nConfig:{:#?}",
                entry.name, expected_hash, found_hash, entry
            );
            eprintln!("{}\n", err);
        }
    }
    if error {
        panic!("Errors found during test decoding\n {:#?}", files);
    }
}

#[test]
fn matches_reference_decoder() {
    for entry in load_entries().iter().filter(|x| !x.bottom_up) {
        let data = encode_entry(entry);

        let reference = image::load_from_memory_with_format(&data, ImageFormat::Bmp)
            .unwrap()
            .to_rgb8()
            .into_raw();

        let image = BmpDecoder::new(ZCursor::new(&data)).decode_image().unwrap();

        assert_eq!(
            image.dimensions(),
            (entry.width as usize, entry.height as usize),
            "{}",
            entry.name
        );
        assert!(
            image.pixels() == reference.as_slice(),
            "Pixels differ from image-rs for {}",
            entry.name
        );
    }
}

#[test]
fn headers_report_encoder_layout() {
    for entry in load_entries() {
        let data = encode_entry(&entry);

        let mut decoder = BmpDecoder::new(ZCursor::new(&data));
        decoder.decode_headers().unwrap();

        let header = decoder.header().unwrap();
        let padded_row = (entry.width as usize * 3 + 3) & !3;

        assert_eq!(header.data_offset, 54, "{}", entry.name);
        assert_eq!(header.bits_per_pixel, 24, "{}", entry.name);
        assert_eq!(data.len(), 54 + padded_row * entry.height as usize, "{}", entry.name);

        if entry.clear_image_size {
            assert_eq!(header.image_size, 0);
            assert_eq!(
                decoder.image_size(),
                Some(entry.width as usize * entry.height as usize * 3)
            );
        }
    }
}
