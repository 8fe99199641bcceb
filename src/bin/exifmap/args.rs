use anyhow::Result;
use clap::value_t_or_exit;
use exifmap::{arg, args_parser, config::Config, opt};

pub struct Args {
    pub config: Config,
    pub verbose: bool,
}

impl Args {
    pub fn from_cmd_line() -> Result<Args> {
        let matches = args_parser!("exifmap")
            .about("Find geotagged images and build a static map URL of their locations.")
            .arg(
                opt!("glob")
                    .short("g")
                    .help("Pattern of images to scan.  Default is *.jpg"),
            )
            .arg(
                opt!("zoom")
                    .short("z")
                    .help("Zoom level of the map.  Default is 2"),
            )
            .arg(opt!("exiftool").help("Path to the exiftool executable"))
            .arg(opt!("endpoint").help("Static map service URL"))
            .arg(
                opt!("map type")
                    .short("t")
                    .help("Map style passed as `maptype`.  Default is mapnik"),
            )
            .arg(
                opt!("urls")
                    .short("u")
                    .multiple(true)
                    .conflicts_with("paths")
                    .help("Fetch and scan images from these URLs"),
            )
            .arg(
                opt!("json")
                    .short("j")
                    .takes_value(false)
                    .help("Print the report as a single json document"),
            )
            .arg(
                opt!("verbose")
                    .short("v")
                    .takes_value(false)
                    .help("Log skipped images"),
            )
            .arg(
                arg!("paths")
                    .multiple(true)
                    .help("Image paths (default: images matching --glob)"),
            )
            .get_matches();

        let mut config = Config::default();
        if let Some(pattern) = matches.value_of("glob") {
            config.glob_pattern = pattern.into();
        }
        if matches.is_present("zoom") {
            config.zoom = value_t_or_exit!(matches, "zoom", u8);
        }
        if let Some(exiftool) = matches.value_of("exiftool") {
            config.exiftool = exiftool.into();
        }
        if let Some(endpoint) = matches.value_of("endpoint") {
            config.endpoint = endpoint.into();
        }
        if let Some(map_type) = matches.value_of("map type") {
            config.map_type = map_type.into();
        }
        config.urls = matches
            .values_of("urls")
            .map(|urls| urls.map(|u| u.into()).collect())
            .unwrap_or_default();
        config.paths = matches
            .values_of("paths")
            .map(|paths| paths.map(|p| p.into()).collect())
            .unwrap_or_default();
        config.json = matches.is_present("json");

        Ok(Args {
            config,
            verbose: matches.is_present("verbose"),
        })
    }
}
