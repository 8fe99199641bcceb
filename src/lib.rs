//! Locate geotagged photos and plot them on a static map.
//!
//! For every image of a batch, the metadata text printed
//! by [ExifTool] (`exiftool -c %.6f <file>`) is scanned for
//! the `GPS Position` line, and the two decimal numbers on
//! it are taken as latitude and longitude. Located images
//! are tallied and each gets a marker on a static map URL.
//!
//! # Usage
//!
//! ```rust,no_run
//! # fn test_compile() -> anyhow::Result<()> {
//! use exifmap::{batch::run_batch, config::Config, extract::Exiftool};
//!
//! let config = Config::default();
//! let paths = config.image_paths()?;
//! let source = Exiftool::new(config.exiftool.clone());
//! let summary = run_batch(&paths, &source, &config, &mut std::io::stdout())?;
//! print!("{}", summary);
//! # Ok(())
//! # }
//! ```
//!
//! The extractor is behind [`MetadataSource`], so the
//! parsing can be driven with canned text instead:
//!
//! ```rust
//! use exifmap::extract::{position_matches, GpsReading};
//!
//! let text = "GPS Position : 48.858370 N, 2.294481 E\n";
//! let reading = GpsReading::from_matches(&position_matches(text)[..]).unwrap();
//! assert_eq!(reading.coord(), "48.858370,2.294481");
//! ```
//!
//! [ExifTool]: //exiftool.org

pub mod batch;
pub mod cli;
pub mod config;
pub mod extract;
pub mod fetch;
pub mod map;
pub mod report;

#[cfg(test)]
mod test_utils;

pub use crate::extract::{GpsReading, MetadataSource};
pub use crate::report::Summary;
