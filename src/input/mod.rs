// src/input/mod.rs
//
// Reading puzzle input files from the configured input directory.
// Inputs are laid out as <input_directory>/<year>/day<DD>.txt.

use crate::config::Config;
use crate::utilities::parsing::split_by_newline;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("failed to read input {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse JSON input: {0}")]
    Json(#[from] serde_json::Error),
}

/// Path of the input file for a given puzzle day.
pub fn input_path(config: &Config, year: u16, day: u8) -> PathBuf {
    config
        .resolve_input_dir()
        .join(year.to_string())
        .join(format!("day{:02}.txt", day))
}

/// The raw text of a puzzle input.
pub fn read_input(config: &Config, year: u16, day: u8) -> Result<String, InputError> {
    let path = input_path(config, year, day);
    fs::read_to_string(&path).map_err(|source| InputError::Io { path, source })
}

/// The non-blank lines of a puzzle input, trimmed.
pub fn read_lines(config: &Config, year: u16, day: u8) -> Result<Vec<String>, InputError> {
    let text = read_input(config, year, day)?;
    Ok(split_by_newline(&text, true)
        .into_iter()
        .map(str::to_string)
        .collect())
}

/// Deserialize a JSON puzzle input (some puzzles ship a JSON document).
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, InputError> {
    let text = fs::read_to_string(path).map_err(|source| InputError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(serde_json::from_str(&text)?)
}
