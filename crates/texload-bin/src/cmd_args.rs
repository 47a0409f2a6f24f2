/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use clap::{value_parser, Arg, ArgAction, Command};

pub(crate) mod help_strings;

/// Parse a `WIDTHxHEIGHT` pair such as `64x32`
pub(crate) fn parse_dimensions(value: &str) -> Result<(usize, usize), String> {
    let (width, height) = value
        .trim()
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("Expected WIDTHxHEIGHT, found {value:?}"))?;

    let width = width
        .trim()
        .parse::<usize>()
        .map_err(|e| format!("Invalid width {width:?}: {e}"))?;
    let height = height
        .trim()
        .parse::<usize>()
        .map_err(|e| format!("Invalid height {height:?}: {e}"))?;

    if width == 0 || height == 0 {
        return Err(format!("Dimensions must be non-zero, found {width}x{height}"));
    }
    Ok((width, height))
}

#[rustfmt::skip]
pub fn create_cmd_args() -> Command {
    Command::new("texload")
        .about("Load 24-bit BMP textures and inspect the decoded pixels")
        .arg(Arg::new("in")
            .short('i')
            .help("Texture file to load")
            .long("input")
            .action(ArgAction::Append)
            .required(true))
        .arg(Arg::new("out")
            .short('o')
            .long("output")
            .help("PPM file to write the decoded pixels to")
            .long_help(help_strings::OUTPUT_HELP)
            .action(ArgAction::Append))
        .arg(Arg::new("probe")
            .long("probe")
            .action(ArgAction::SetTrue)
            .help("Print header information of the inputs as JSON and exit"))
        .arg(Arg::new("search-dir")
            .long("search-dir")
            .action(ArgAction::Append)
            .help_heading("SEARCH")
            .help("Directory prefix to search for textures in")
            .long_help(help_strings::SEARCH_DIR_HELP))
        .arg(Arg::new("fallback")
            .long("fallback")
            .help_heading("SEARCH")
            .help("Size of the checkerboard used when a texture cannot be loaded")
            .value_name("WIDTHxHEIGHT")
            .default_value("2x2")
            .value_parser(parse_dimensions))
        .arg(Arg::new("no-fallback")
            .long("no-fallback")
            .action(ArgAction::SetTrue)
            .help_heading("SEARCH")
            .help("Fail instead of substituting a checkerboard"))
        .arg(Arg::new("strict")
            .long("strict")
            .action(ArgAction::SetTrue)
            .help_heading("DECODER")
            .help("Reject files whose bit depth is not 24"))
        .arg(Arg::new("bottom-up")
            .long("bottom-up")
            .action(ArgAction::SetTrue)
            .help_heading("DECODER")
            .help("Keep rows in stored bottom-up order")
            .long_help(help_strings::BOTTOM_UP_HELP))
        .arg(Arg::new("max-width")
            .long("max-width")
            .help_heading("DECODER")
            .help("Maximum width of images allowed")
            .default_value("16384")
            .value_parser(value_parser!(usize)))
        .arg(Arg::new("max-height")
            .long("max-height")
            .help_heading("DECODER")
            .help("Maximum height of images allowed")
            .default_value("16384")
            .value_parser(value_parser!(usize)))
        .arg(Arg::new("debug")
            .long("debug")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display debug information and higher"))
        .arg(Arg::new("trace")
            .long("trace")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display very verbose information"))
        .arg(Arg::new("warn")
            .long("warn")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display warnings and errors"))
        .arg(Arg::new("info")
            .long("info")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display information about the loading steps"))
}
