//! Remote images, downloaded and handed to exiftool on
//! standard input.

use std::path::Path;

use anyhow::{anyhow, ensure, Context, Result};
use reqwest::blocking::Client;
use tracing::debug;

use crate::extract::{Exiftool, MetadataSource};

/// Metadata source for images behind URLs. Each input
/// "path" is read as the URL of the image.
pub struct Remote {
    client: Client,
    exiftool: Exiftool,
}

impl Remote {
    pub fn new(exiftool: Exiftool) -> Result<Self> {
        let client = Client::builder()
            .build()
            .context("could not build http client")?;
        Ok(Remote::with_client(client, exiftool))
    }

    pub fn with_client(client: Client, exiftool: Exiftool) -> Self {
        Remote { client, exiftool }
    }

    pub fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        let response = self
            .client
            .get(url)
            .send()
            .with_context(|| format!("could not fetch {}", url))?;

        ensure!(
            response.status().is_success(),
            "HTTP {} fetching {}",
            response.status(),
            url
        );

        let bytes = response
            .bytes()
            .with_context(|| format!("could not read body of {}", url))?;
        debug!("fetched {} bytes from {}", bytes.len(), url);
        Ok(bytes.to_vec())
    }
}

impl MetadataSource for Remote {
    fn metadata_text(&self, path: &Path) -> Result<String> {
        let url = path
            .to_str()
            .ok_or_else(|| anyhow!("not a url: {:?}", path))?;
        let bytes = self.fetch(url)?;
        self.exiftool.metadata_text_from_bytes(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::serve_once;

    fn local(exiftool: Exiftool) -> Result<Remote> {
        let client = Client::builder().no_proxy().build()?;
        Ok(Remote::with_client(client, exiftool))
    }

    #[test]
    fn fetches_body() -> Result<()> {
        let base = serve_once("200 OK", b"jpeg bytes")?;
        let remote = local(Exiftool::default())?;
        assert_eq!(remote.fetch(&format!("{}/a.jpg", base))?, b"jpeg bytes");
        Ok(())
    }

    #[test]
    fn http_error_is_an_error() -> Result<()> {
        let base = serve_once("404 Not Found", b"")?;
        let remote = local(Exiftool::default())?;
        let err = remote.fetch(&format!("{}/gone.jpg", base)).unwrap_err();
        assert!(format!("{:#}", err).contains("HTTP 404"));
        Ok(())
    }

    #[cfg(unix)]
    #[test]
    fn remote_image_is_located() -> Result<()> {
        use crate::{batch::run_batch, config::Config, test_utils::fake_exiftool};
        use std::path::PathBuf;
        use tempfile::tempdir;

        let dir = tempdir()?;
        let exiftool = Exiftool::new(fake_exiftool(dir.path())?.to_string_lossy());
        let remote = local(exiftool)?;

        let base = serve_once("200 OK", b"1.500000 N, 2.500000 E")?;
        let url = format!("{}/a.jpg", base);
        let mut out = vec![];
        let summary = run_batch(&[PathBuf::from(&url)], &remote, &Config::default(), &mut out)?;

        assert_eq!(
            String::from_utf8(out)?,
            format!("=> {} @ 1.500000,2.500000\n", url)
        );
        assert_eq!(summary.counters.with_gps, 1);
        assert!(summary
            .map_url
            .ends_with(&format!("1.500000,2.500000,lightblue3{}", url)));
        Ok(())
    }
}
