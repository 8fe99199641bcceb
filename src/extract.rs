//! Pull GPS coordinates out of image metadata.
//!
//! The metadata itself comes from an external tool (by
//! default [ExifTool]) through the [`MetadataSource`]
//! trait. Everything downstream of the raw text is a pure
//! function so it can be exercised without the tool
//! installed.
//!
//! [ExifTool]: //exiftool.org

use std::{
    collections::HashMap,
    fmt::Debug,
    io::{self, Write},
    path::{Path, PathBuf},
    process::{Command, Output, Stdio},
    thread,
};

use anyhow::{anyhow, ensure, Context, Result};
use lazy_static::lazy_static;
use regex::Regex;
use serde_derive::*;

/// Source of the raw metadata text for a single file.
pub trait MetadataSource {
    fn metadata_text(&self, path: &Path) -> Result<String>;
}

/// Runs `exiftool -c %.6f -- <path>` and captures its
/// standard output.
#[derive(Debug, Clone)]
pub struct Exiftool {
    pub program: String,
}

/// Coordinate format handed to exiftool's `-c` option.
pub const COORD_FORMAT: &str = "%.6f";

impl Exiftool {
    pub fn new<S: Into<String>>(program: S) -> Self {
        Exiftool {
            program: program.into(),
        }
    }
}

impl Default for Exiftool {
    fn default() -> Self {
        Exiftool::new("exiftool")
    }
}

impl Exiftool {
    fn command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.arg("-c").arg(COORD_FORMAT);
        cmd
    }

    fn stdout_of(&self, output: Output, input: &dyn Debug) -> Result<String> {
        ensure!(
            output.status.success(),
            "`{}` failed on {:?}: {}",
            self.program,
            input,
            output.status
        );
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    /// Runs `exiftool -c %.6f -` with the image fed through
    /// standard input.
    pub fn metadata_text_from_bytes(&self, bytes: Vec<u8>) -> Result<String> {
        let mut child = self
            .command()
            .arg("-")
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .with_context(|| format!("could not run `{}`", self.program))?;

        // Written from a separate thread while stdout drains.
        let mut stdin = child.stdin.take().context("child stdin not captured")?;
        let writer = thread::spawn(move || stdin.write_all(&bytes));

        let output = child.wait_with_output()?;
        let text = self.stdout_of(output, &"<stdin>")?;

        match writer.join().map_err(|_| anyhow!("stdin writer panicked"))? {
            // exiftool may stop reading once it has the metadata
            Err(e) if e.kind() != io::ErrorKind::BrokenPipe => {
                Err(anyhow::Error::new(e).context("could not write image to exiftool"))
            }
            _ => Ok(text),
        }
    }
}

impl MetadataSource for Exiftool {
    fn metadata_text(&self, path: &Path) -> Result<String> {
        // `output` waits for the child and drains both pipes.
        // `--` keeps names like `-x.jpg` from reading as options.
        let output = self
            .command()
            .arg("--")
            .arg(path)
            .output()
            .with_context(|| format!("could not run `{}`", self.program))?;

        self.stdout_of(output, &path)
    }
}

/// Metadata text held in memory, keyed by path.
#[derive(Debug, Clone, Default)]
pub struct Canned(HashMap<PathBuf, String>);

impl Canned {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with<P: Into<PathBuf>, S: Into<String>>(mut self, path: P, text: S) -> Self {
        self.0.insert(path.into(), text.into());
        self
    }
}

impl MetadataSource for Canned {
    fn metadata_text(&self, path: &Path) -> Result<String> {
        self.0
            .get(path)
            .cloned()
            .ok_or_else(|| anyhow!("no metadata for {:?}", path))
    }
}

/// Lines of `text` mentioning both `GPS` and `Position`.
///
/// Plain substring tests, case-sensitive.
pub fn gps_position_lines(text: &str) -> impl Iterator<Item = &str> {
    text.lines()
        .filter(|line| line.contains("GPS"))
        .filter(|line| line.contains("Position"))
}

/// Every unsigned decimal number (`digits.digits`) in
/// `text`, in order of appearance.
pub fn decimal_matches(text: &str) -> Vec<&str> {
    lazy_static! {
        static ref RE: Regex = Regex::new(r"[0-9]+\.[0-9]+").unwrap();
    }
    RE.find_iter(text).map(|m| m.as_str()).collect()
}

/// Decimal strings found on the GPS position lines of
/// `text`.
pub fn position_matches(text: &str) -> Vec<&str> {
    gps_position_lines(text).flat_map(decimal_matches).collect()
}

/// Decimal strings from the GPS position of the file at
/// `path`, as reported by `source`.
pub fn gps_matches<S: MetadataSource + ?Sized>(source: &S, path: &Path) -> Result<Vec<String>> {
    let text = source.metadata_text(path)?;
    Ok(position_matches(&text)
        .into_iter()
        .map(String::from)
        .collect())
}

/// Latitude and longitude magnitudes, kept in the textual
/// form the extractor printed them in.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct GpsReading {
    pub latitude: String,
    pub longitude: String,
}

impl GpsReading {
    /// `Some` only when there are exactly two matches.
    pub fn from_matches<S: AsRef<str>>(matches: &[S]) -> Option<Self> {
        match matches {
            [lat, lon] => Some(GpsReading {
                latitude: lat.as_ref().into(),
                longitude: lon.as_ref().into(),
            }),
            _ => None,
        }
    }

    pub fn coord(&self) -> String {
        format!("{},{}", self.latitude, self.longitude)
    }
}
