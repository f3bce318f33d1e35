use anyhow::{Context, Result};
use std::fs::File;
use std::path::Path;
use zip::ZipArchive;

const USER_AGENT: &str = concat!("sdl2-setup/", env!("CARGO_PKG_VERSION"));

/// Retrieves a remote resource into a local file.
pub trait Fetch {
    /// Writes the body at `url` to `destination`, returning the number of bytes written.
    fn fetch(&self, url: &str, destination: &Path) -> Result<u64>;
}

/// Blocking HTTP(S) fetcher.
pub struct Downloader {
    client: reqwest::blocking::Client,
}

impl Downloader {
    pub fn new() -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self { client })
    }
}

impl Fetch for Downloader {
    fn fetch(&self, url: &str, destination: &Path) -> Result<u64> {
        tracing::debug!(url, destination = %destination.display(), "starting download");

        let mut response = self
            .client
            .get(url)
            .send()
            .with_context(|| format!("Request to {url} failed"))?;

        let status = response.status();
        if !status.is_success() {
            return Err(anyhow::anyhow!("Server responded with HTTP status {status}"));
        }

        let mut file = File::create(destination)
            .with_context(|| format!("Failed to create {}", destination.display()))?;
        let written = response
            .copy_to(&mut file)
            .with_context(|| format!("Failed to write {}", destination.display()))?;

        tracing::debug!(bytes = written, "download finished");
        Ok(written)
    }
}

/// Extracts every entry of the zip at `archive_path` under `destination`,
/// keeping the archive's relative paths.
pub fn extract_zip(archive_path: &Path, destination: &Path) -> Result<usize> {
    let file = File::open(archive_path)?;
    let mut archive = ZipArchive::new(file)
        .with_context(|| format!("{} is not a valid zip archive", archive_path.display()))?;

    let mut extracted = 0;
    for i in 0..archive.len() {
        let mut entry = archive.by_index(i)?;
        let outpath = match entry.enclosed_name() {
            Some(path) => destination.join(path),
            None => {
                tracing::warn!(name = entry.name(), "skipping entry with unsafe path");
                continue;
            }
        };

        if entry.name().ends_with('/') {
            std::fs::create_dir_all(&outpath)?;
        } else {
            if let Some(p) = outpath.parent() {
                if !p.exists() {
                    std::fs::create_dir_all(p)?;
                }
            }
            let mut outfile = File::create(&outpath)?;
            std::io::copy(&mut entry, &mut outfile)
                .with_context(|| format!("Failed to extract {}", entry.name()))?;

            // Directory modes are left alone so read-only entries cannot block their children.
            #[cfg(unix)]
            {
                use std::os::unix::fs::PermissionsExt;
                if let Some(mode) = entry.unix_mode() {
                    std::fs::set_permissions(&outpath, std::fs::Permissions::from_mode(mode))?;
                }
            }
        }

        extracted += 1;
    }

    tracing::debug!(entries = extracted, "extraction finished");
    Ok(extracted)
}
