/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::ffi::OsStr;
use std::path::Path;

use clap::ArgMatches;
use log::{debug, info, warn};
use texload_bmp::DecodedImage;

use crate::cmd_parsers::global_options::CmdOptions;
use crate::errors::CliErrors;
use crate::file_io::write_ppm_file;
use crate::probe_files::probe_input_files;
use crate::search::{find_and_decode, load_or_fallback};

pub(crate) fn create_and_exec_workflow_from_cmd(
    args: &ArgMatches, cmd_opts: &CmdOptions
) -> Result<(), CliErrors> {
    if args.get_flag("probe") {
        return probe_input_files(args);
    }
    info!("Creating workflows from input");

    let inputs: Vec<&OsStr> = args
        .get_raw("in")
        .map(|x| x.collect())
        .unwrap_or_default();
    let outputs: Vec<&OsStr> = args
        .get_raw("out")
        .map(|x| x.collect())
        .unwrap_or_default();

    if outputs.len() > inputs.len() {
        warn!(
            "{} outputs given for {} inputs, extra outputs are ignored",
            outputs.len(),
            inputs.len()
        );
    }

    for (pos, in_file) in inputs.iter().enumerate() {
        let out_file = outputs.get(pos).copied();

        if let Some(out_file) = out_file {
            verify_file_paths(in_file, out_file)?;
        }
        let image = load_texture(in_file, cmd_opts)?;

        let (width, height) = image.dimensions();
        info!("Texture {:?}: {}x{}", in_file, width, height);

        match out_file {
            Some(out_file) => write_ppm_file(&image, out_file)?,
            None => debug!("No output for {:?}, decoded pixels discarded", in_file)
        }
    }

    Ok(())
}

fn load_texture(in_file: &OsStr, cmd_opts: &CmdOptions) -> Result<DecodedImage, CliErrors> {
    let name = in_file.to_str().ok_or_else(|| {
        CliErrors::GenericString(format!("Path {in_file:?} is not valid UTF-8"))
    })?;
    let options = cmd_opts.decoder_options();

    match cmd_opts.fallback {
        Some(dims) => load_or_fallback(name, &cmd_opts.search_prefixes, options, dims),
        None => find_and_decode(name, &cmd_opts.search_prefixes, options).map(|(_, image)| image)
    }
}

fn verify_file_paths(p0: &OsStr, p1: &OsStr) -> Result<(), CliErrors> {
    if p0 == p1 {
        return Err(CliErrors::GenericString(format!(
            "Cannot use {:?} as both input and output",
            p0
        )));
    }
    let out_path = Path::new(p1);

    if out_path.is_dir() {
        return Err(CliErrors::GenericString(format!(
            "Output path {:?} is a directory",
            out_path
        )));
    }
    if out_path.exists() {
        info!("Overwriting path {:?} ", p1);
    }
    Ok(())
}
