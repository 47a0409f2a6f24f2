/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

#![no_main]

use libfuzzer_sys::fuzz_target;
use texload_bmp::texload_core::bytestream::ZCursor;
use texload_bmp::texload_core::options::DecoderOptions;

fuzz_target!(|data: &[u8]| {
    // keep allocations bounded, headers can claim any size
    let options = DecoderOptions::default()
        .set_max_width(1 << 10)
        .set_max_height(1 << 10);

    let mut decoder = texload_bmp::BmpDecoder::new_with_options(ZCursor::new(data), options);
    if let Ok(image) = decoder.decode_image() {
        assert_eq!(image.pixels().len(), image.width() * image.height() * 3);
    }
});
