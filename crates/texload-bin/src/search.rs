/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Texture lookup across several directories
//!
//! Applications are often started from a build directory rather than
//! the directory holding their resources, so a texture name is tried
//! as given and then under a list of prefixes. When nothing decodes a
//! checkerboard stands in for the texture.
use std::path::{Path, PathBuf};

use log::{debug, error, info};
use texload_bmp::{decode_file, BmpDecoderErrors, DecodedImage};
use texload_core::options::DecoderOptions;

use crate::errors::CliErrors;

/// Prefixes tried after the name itself, in order
pub const DEFAULT_SEARCH_PREFIXES: [&str; 4] = ["./", "../", "../../", "../Resources/"];

/// Every path `name` may be found at, in the order they should be tried
///
/// Absolute names are only tried as given.
pub fn candidate_paths<S: AsRef<str>>(name: &str, prefixes: &[S]) -> Vec<PathBuf> {
    let path = Path::new(name);

    let mut candidates = Vec::with_capacity(prefixes.len() + 1);
    candidates.push(path.to_path_buf());

    if path.is_absolute() {
        return candidates;
    }
    for prefix in prefixes {
        let candidate = Path::new(prefix.as_ref()).join(path);

        if !candidates.contains(&candidate) {
            candidates.push(candidate);
        }
    }
    candidates
}

/// Decode the first candidate of `name` that loads
///
/// Returns the path that was loaded alongside the image.
pub fn find_and_decode<S: AsRef<str>>(
    name: &str, prefixes: &[S], options: DecoderOptions
) -> Result<(PathBuf, DecodedImage), CliErrors> {
    let mut last_error: Option<BmpDecoderErrors> = None;

    for candidate in candidate_paths(name, prefixes) {
        debug!("Trying path: {:?}", candidate);

        match decode_file(&candidate, options) {
            Ok(image) => {
                info!("Loaded {:?} from {:?}", name, candidate);
                return Ok((candidate, image));
            }
            Err(err) => {
                debug!("Failed to load {:?}: {:?}", candidate, err);
                // a file that exists but is broken says more than a missing one
                let keep_previous = matches!(
                    (&last_error, &err),
                    (Some(prev), BmpDecoderErrors::FileNotFound(_))
                        if !matches!(prev, BmpDecoderErrors::FileNotFound(_))
                );
                if !keep_previous {
                    last_error = Some(err);
                }
            }
        }
    }
    Err(CliErrors::NotFound(name.to_string(), last_error))
}

/// Load `name`, substituting a `fallback` sized checkerboard if
/// no candidate decodes
///
/// Only fails when the fallback itself cannot be built.
pub fn load_or_fallback<S: AsRef<str>>(
    name: &str, prefixes: &[S], options: DecoderOptions, fallback: (usize, usize)
) -> Result<DecodedImage, CliErrors> {
    match find_and_decode(name, prefixes, options) {
        Ok((_, image)) => Ok(image),
        Err(err) => {
            error!(
                "Failed to load {:?} from any path, using a {}x{} checkerboard",
                name, fallback.0, fallback.1
            );
            debug!("{:?}", err);
            Ok(DecodedImage::checkerboard(fallback.0, fallback.1)?)
        }
    }
}
