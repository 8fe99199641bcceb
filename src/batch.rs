//! Sequential pass over the images of a run.

use std::{io::Write, path::PathBuf};

use anyhow::Result;
use tracing::{debug, warn};

use crate::{
    config::Config,
    extract::{gps_matches, GpsReading, MetadataSource},
    map::MapUrl,
    report::{LocatedImage, RunCounters, Summary},
};

/// Extract a location for every file in `paths`, one at a
/// time.
///
/// Located files are announced on `out` as
/// `=> <file> @ <lat>,<lon>`. A file the extractor fails
/// on, or whose position does not hold exactly two
/// numbers, is skipped without touching the counters.
/// Only a failed write to `out` aborts the run.
pub fn run_batch<S, W>(
    paths: &[PathBuf],
    source: &S,
    config: &Config,
    out: &mut W,
) -> Result<Summary>
where
    S: MetadataSource + ?Sized,
    W: Write,
{
    let mut counters = RunCounters::new(paths.len());
    let mut map_url = MapUrl::new(&config.endpoint, config.zoom, &config.map_type);
    let mut located = vec![];

    for path in paths {
        let matches = match gps_matches(source, path) {
            Ok(matches) => matches,
            Err(e) => {
                warn!("skipping {}: {:#}", path.display(), e);
                continue;
            }
        };

        let reading = match GpsReading::from_matches(&matches[..]) {
            Some(reading) => reading,
            None => {
                debug!("{}: {} coordinate values, skipping", path.display(), matches.len());
                continue;
            }
        };

        let file = path.display().to_string();
        writeln!(out, "=> {} @ {}", file, reading.coord())?;
        map_url.push_marker(&reading, &file);
        counters.record_location();
        located.push(LocatedImage {
            path: file,
            reading,
        });
    }

    if located.is_empty() {
        warn!("no valid GPS data found");
    }

    Ok(Summary::new(counters, located, map_url.into_string()))
}
