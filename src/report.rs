//! Run counters and the end-of-run summary.

use std::fmt;

use serde_derive::*;

use crate::extract::GpsReading;

/// Per-run tallies.
///
/// `with_exif` and `with_gps` always move together: the
/// only way to count as having metadata is to yield a
/// complete GPS pair. Both are kept so the summary line
/// keeps its shape.
#[derive(Serialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunCounters {
    pub total: usize,
    pub with_exif: usize,
    pub with_gps: usize,
}

impl RunCounters {
    pub fn new(total: usize) -> Self {
        RunCounters {
            total,
            ..Default::default()
        }
    }

    pub fn record_location(&mut self) {
        self.with_exif += 1;
        self.with_gps += 1;
    }

    /// Share of scanned images with a location, in percent.
    /// `None` for an empty batch.
    pub fn location_percentage(&self) -> Option<f64> {
        if self.total == 0 {
            return None;
        }
        Some((self.with_gps as f64 * 100.0) / self.total as f64)
    }
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct LocatedImage {
    pub path: String,
    #[serde(flatten)]
    pub reading: GpsReading,
}

#[derive(Serialize, Debug, Clone)]
pub struct Summary {
    pub counters: RunCounters,
    pub percentage: Option<f64>,
    pub located: Vec<LocatedImage>,
    pub map_url: String,
}

impl Summary {
    pub fn new(counters: RunCounters, located: Vec<LocatedImage>, map_url: String) -> Self {
        Summary {
            percentage: counters.location_percentage(),
            counters,
            located,
            map_url,
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let RunCounters {
            total,
            with_exif,
            with_gps,
        } = self.counters;
        writeln!(
            f,
            "=> Total {} images | {} with EXIF | {} with location",
            total, with_exif, with_gps
        )?;
        match self.percentage {
            Some(pct) => writeln!(f, "=> Percentage with location = {:.2}", pct)?,
            None => writeln!(f, "=> Percentage with location = N/A")?,
        }
        writeln!(f, "=> Map URL: {}", self.map_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counters_move_together() {
        let mut counters = RunCounters::new(3);
        counters.record_location();
        counters.record_location();
        assert_eq!(
            counters,
            RunCounters {
                total: 3,
                with_exif: 2,
                with_gps: 2
            }
        );
    }

    #[test]
    fn quarter_located() {
        let mut counters = RunCounters::new(4);
        counters.record_location();
        let summary = Summary::new(counters, vec![], "url".into());
        assert_eq!(
            summary.to_string(),
            "=> Total 4 images | 1 with EXIF | 1 with location\n\
             => Percentage with location = 25.00\n\
             => Map URL: url\n"
        );
    }

    #[test]
    fn two_decimals() {
        let mut counters = RunCounters::new(3);
        counters.record_location();
        let summary = Summary::new(counters, vec![], String::new());
        assert!(summary
            .to_string()
            .contains("=> Percentage with location = 33.33\n"));
    }

    #[test]
    fn empty_batch() {
        let counters = RunCounters::new(0);
        assert_eq!(counters.location_percentage(), None);

        let summary = Summary::new(counters, vec![], "url".into());
        assert_eq!(
            summary.to_string(),
            "=> Total 0 images | 0 with EXIF | 0 with location\n\
             => Percentage with location = N/A\n\
             => Map URL: url\n"
        );
    }

    #[test]
    fn json_shape() -> anyhow::Result<()> {
        let mut counters = RunCounters::new(2);
        counters.record_location();
        let located = vec![LocatedImage {
            path: "a.jpg".into(),
            reading: GpsReading {
                latitude: "1.5".into(),
                longitude: "2.5".into(),
            },
        }];
        let value = serde_json::to_value(&Summary::new(counters, located, "url".into()))?;
        assert_eq!(
            value,
            serde_json::json!({
                "counters": { "total": 2, "with_exif": 1, "with_gps": 1 },
                "percentage": 50.0,
                "located": [{ "path": "a.jpg", "latitude": "1.5", "longitude": "2.5" }],
                "map_url": "url",
            })
        );
        Ok(())
    }
}
