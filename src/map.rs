//! Static map URL with one marker per located image.

use std::fmt;

use crate::extract::GpsReading;

pub const DEFAULT_ENDPOINT: &str = "https://staticmap.openstreetmap.de/staticmap.php";
pub const MAP_SIZE: &str = "865x512";
pub const DEFAULT_MAP_TYPE: &str = "mapnik";
pub const MARKER_STYLE: &str = "lightblue3";

/// Accumulates marker fragments onto the base map URL.
///
/// Fragments are concatenated with no separator between
/// them. Most static map services expect `|` between
/// markers, so a URL with more than one marker will likely
/// render wrong; the layout is kept as the existing tool
/// produces it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapUrl(String);

impl MapUrl {
    pub fn new(endpoint: &str, zoom: u8, map_type: &str) -> Self {
        MapUrl(format!(
            "{}?&zoom={}&size={}&maptype={}&markers=",
            endpoint, zoom, MAP_SIZE, map_type
        ))
    }

    pub fn push_marker(&mut self, reading: &GpsReading, label: &str) {
        self.0.push_str(&reading.coord());
        self.0.push(',');
        self.0.push_str(MARKER_STYLE);
        self.0.push_str(label);
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl Default for MapUrl {
    fn default() -> Self {
        MapUrl::new(DEFAULT_ENDPOINT, 2, DEFAULT_MAP_TYPE)
    }
}

impl fmt::Display for MapUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
