//! Run configuration.

use std::path::PathBuf;

use anyhow::{Context, Result};
use glob::glob;

use crate::map::{DEFAULT_ENDPOINT, DEFAULT_MAP_TYPE};

#[derive(Debug, Clone)]
pub struct Config {
    /// Pattern of files to scan, relative to the working
    /// directory. Ignored when `paths` or `urls` is set.
    pub glob_pattern: String,
    pub zoom: u8,
    /// Explicit files to scan instead of the glob matches.
    pub paths: Vec<String>,
    /// Metadata extractor executable.
    pub exiftool: String,
    pub endpoint: String,
    /// `maptype` of the static map.
    pub map_type: String,
    /// Remote images to fetch and scan instead of local
    /// files.
    pub urls: Vec<String>,
    /// Emit a single JSON document instead of text lines.
    pub json: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            glob_pattern: "*.jpg".into(),
            zoom: 2,
            paths: vec![],
            exiftool: "exiftool".into(),
            endpoint: DEFAULT_ENDPOINT.into(),
            map_type: DEFAULT_MAP_TYPE.into(),
            urls: vec![],
            json: false,
        }
    }
}

impl Config {
    /// Files to scan, in enumeration order. With `urls`
    /// set, these are the URLs themselves.
    pub fn image_paths(&self) -> Result<Vec<PathBuf>> {
        if !self.urls.is_empty() {
            return Ok(self.urls.iter().map(PathBuf::from).collect());
        }
        if !self.paths.is_empty() {
            return Ok(self.paths.iter().map(PathBuf::from).collect());
        }

        glob(&self.glob_pattern)
            .with_context(|| format!("invalid glob pattern `{}`", self.glob_pattern))?
            .map(|entry| entry.context("could not read directory entry"))
            .collect()
    }
}
