mod args;

use std::io::{self, Write};

use anyhow::Result;
use tracing::info;

use args::Args;
use exifmap::{
    batch::run_batch, cli::init_logging, extract::Exiftool, fetch::Remote, MetadataSource,
};

fn main() -> Result<()> {
    let Args { config, verbose } = Args::from_cmd_line()?;
    init_logging(verbose)?;

    let paths = config.image_paths()?;
    info!("scanning {} images", paths.len());

    let exiftool = Exiftool::new(config.exiftool.clone());
    let source: Box<dyn MetadataSource> = if config.urls.is_empty() {
        Box::new(exiftool)
    } else {
        Box::new(Remote::new(exiftool)?)
    };
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if config.json {
        let summary = run_batch(&paths, source.as_ref(), &config, &mut io::sink())?;
        serde_json::to_writer(&mut out, &summary)?;
        writeln!(out)?;
    } else {
        let summary = run_batch(&paths, source.as_ref(), &config, &mut out)?;
        write!(out, "{}", summary)?;
    }

    Ok(())
}
