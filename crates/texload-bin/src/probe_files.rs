/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::ffi::OsStr;
use std::fs::read;

use clap::ArgMatches;
use log::warn;
use texload_bmp::{probe_bmp, BmpDecoder};
use texload_core::bytestream::ZCursor;
use texload_core::options::DecoderOptions;

use crate::errors::CliErrors;
use crate::serde::Metadata;

/// Read the headers of `in_file` and render them as pretty JSON
pub fn probe_file(in_file: &OsStr, options: DecoderOptions) -> Result<String, CliErrors> {
    let data = read(in_file)?;
    let size = data.len() as u64;

    if !probe_bmp(&data) {
        warn!("{:?} does not look like a BMP file", in_file);
    }
    let mut decoder = BmpDecoder::new_with_options(ZCursor::new(data), options);
    decoder.decode_headers()?;

    match (decoder.header(), decoder.image_size(), decoder.output_buf_size()) {
        (Some(header), Some(image_size), Some(output_len)) => {
            let metadata =
                Metadata::new(in_file.to_os_string(), size, header, image_size, output_len);

            Ok(serde_json::to_string_pretty(&metadata)?)
        }
        _ => Err(CliErrors::GenericString(format!(
            "No header information for {in_file:?}"
        )))
    }
}

/// Probe input files, extract metadata, and print to standard output.
///
/// Files that cannot be probed are reported and skipped.
pub fn probe_input_files(args: &ArgMatches) -> Result<(), CliErrors> {
    // set to high to remove restrictions.
    // We'll just be reading headers so it doesn't matter
    let options = DecoderOptions::default()
        .set_max_height(usize::MAX)
        .set_max_width(usize::MAX);

    if let Some(inputs) = args.get_raw("in") {
        for in_file in inputs {
            match probe_file(in_file, options) {
                Ok(json) => println!("{json}"),
                Err(CliErrors::JsonErrors(err)) => return Err(CliErrors::JsonErrors(err)),
                Err(err) => warn!("Could not probe {:?}: {:?}", in_file, err)
            }
        }
    }
    Ok(())
}
