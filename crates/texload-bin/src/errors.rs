/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fmt::{Debug, Display, Formatter};

use texload_bmp::BmpDecoderErrors;

/// Errors that stop the command line workflow
#[non_exhaustive]
pub enum CliErrors {
    /// No search candidate decoded, carries the most informative decode error
    NotFound(String, Option<BmpDecoderErrors>),
    DecodeErrors(BmpDecoderErrors),
    IoErrors(std::io::Error),
    JsonErrors(serde_json::Error),
    GenericString(String)
}

impl Debug for CliErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            CliErrors::NotFound(name, Some(err)) => {
                // decoder messages carry their own newline
                write!(f, "Could not load {name:?} from any search path, last error: {err:?}")
            }
            CliErrors::NotFound(name, None) => {
                writeln!(f, "Could not load {name:?}, no search paths were tried")
            }
            CliErrors::DecodeErrors(err) => write!(f, "{err:?}"),
            CliErrors::IoErrors(err) => writeln!(f, "I/O error: {err}"),
            CliErrors::JsonErrors(err) => writeln!(f, "Could not serialize metadata: {err}"),
            CliErrors::GenericString(err) => writeln!(f, "{err}")
        }
    }
}

impl Display for CliErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl std::error::Error for CliErrors {}

impl From<BmpDecoderErrors> for CliErrors {
    fn from(value: BmpDecoderErrors) -> Self {
        CliErrors::DecodeErrors(value)
    }
}

impl From<std::io::Error> for CliErrors {
    fn from(value: std::io::Error) -> Self {
        CliErrors::IoErrors(value)
    }
}

impl From<serde_json::Error> for CliErrors {
    fn from(value: serde_json::Error) -> Self {
        CliErrors::JsonErrors(value)
    }
}

impl From<String> for CliErrors {
    fn from(value: String) -> Self {
        CliErrors::GenericString(value)
    }
}
