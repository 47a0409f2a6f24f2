/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use clap::parser::ValueSource::CommandLine;
use clap::ArgMatches;
use log::{info, Level};
use texload_core::options::DecoderOptions;

use crate::search::DEFAULT_SEARCH_PREFIXES;

#[derive(Debug, Clone)]
pub struct CmdOptions {
    pub max_width:       usize,
    pub max_height:      usize,
    pub strict_mode:     bool,
    pub flip_vertically: bool,
    pub search_prefixes: Vec<String>,
    /// Checkerboard dimensions, `None` if a failed load is an error
    pub fallback:        Option<(usize, usize)>
}

impl CmdOptions {
    pub fn new() -> CmdOptions {
        CmdOptions {
            max_width:       1 << 14,
            max_height:      1 << 14,
            strict_mode:     false,
            flip_vertically: true,
            search_prefixes: DEFAULT_SEARCH_PREFIXES.iter().map(|x| x.to_string()).collect(),
            fallback:        Some((2, 2))
        }
    }

    pub fn decoder_options(&self) -> DecoderOptions {
        DecoderOptions::default()
            .set_max_width(self.max_width)
            .set_max_height(self.max_height)
            .set_strict_mode(self.strict_mode)
            .bmp_set_flip_vertically(self.flip_vertically)
    }
}

pub fn parse_options(options: &ArgMatches) -> CmdOptions {
    let mut cmd_options = CmdOptions::new();

    if let Some(width) = options.get_one::<usize>("max-width") {
        cmd_options.max_width = *width;
    }
    if let Some(height) = options.get_one::<usize>("max-height") {
        cmd_options.max_height = *height;
    }

    if options.get_flag("strict") {
        info!("Using strict decoding");
        cmd_options.strict_mode = true;
    }
    if options.get_flag("bottom-up") {
        info!("Keeping stored bottom-up row order");
        cmd_options.flip_vertically = false;
    }

    if options.value_source("search-dir") == Some(CommandLine) {
        if let Some(dirs) = options.get_many::<String>("search-dir") {
            cmd_options.search_prefixes = dirs.cloned().collect();
            info!("Search prefixes: {:?}", cmd_options.search_prefixes);
        }
    }

    if options.get_flag("no-fallback") {
        info!("Checkerboard fallback disabled");
        cmd_options.fallback = None;
    } else if let Some(dims) = options.get_one::<(usize, usize)>("fallback") {
        cmd_options.fallback = Some(*dims);
    }
    cmd_options
}

/// Set up logging options
pub fn setup_logger(options: &ArgMatches) {
    let log_level = if options.get_flag("debug") {
        Level::Debug
    } else if options.get_flag("trace") {
        Level::Trace
    } else if options.get_flag("warn") {
        Level::Warn
    } else if options.get_flag("info") {
        Level::Info
    } else {
        Level::Warn
    };

    if let Err(e) = simple_logger::init_with_level(log_level) {
        eprintln!("Could not initialize logger: {e}");
        return;
    }

    info!("Initialized logger");
    info!("Log level :{}", log_level);
}
