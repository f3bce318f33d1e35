use crate::core::config::SetupConfig;
use crate::core::download::{self, Downloader, Fetch};
use crate::error::{Result, SetupError};
use crate::utils::fs;
use std::path::PathBuf;

/// Fetches the pinned SDL2 release into `third_party/SDL2` of the current directory.
pub fn setup() -> Result<()> {
    let config = SetupConfig::load()?;
    let downloader =
        Downloader::new().map_err(|e| SetupError::download(&config.release.url, e))?;

    let destination = run_setup(&config, &downloader)?;

    println!("✅ SDL2 {} installed", config.release.version);
    println!("   Location: {destination:?}");
    Ok(())
}

/// Runs the install steps in order and stops at the first failure.
///
/// Nothing is rolled back: a failure after the archive was extracted leaves the
/// extracted directory in place, and a failure at the final rename happens after
/// the archive has already been deleted.
pub fn run_setup<F: Fetch>(config: &SetupConfig, fetcher: &F) -> Result<PathBuf> {
    let release = &config.release;
    let archive_path = config.archive_path();

    println!("Downloading {}...", release.url);
    let bytes = fetcher
        .fetch(&release.url, &archive_path)
        .map_err(|e| SetupError::download(&release.url, format!("{e:#}")))?;
    tracing::info!(bytes, path = %archive_path.display(), "archive downloaded");

    println!("Extracting {}...", release.file_name);
    let entries = download::extract_zip(&archive_path, config.root())
        .map_err(|e| SetupError::extraction(&archive_path, format!("{e:#}")))?;
    tracing::info!(entries, "archive extracted");

    fs::remove_file(&archive_path)?;
    tracing::debug!(path = %archive_path.display(), "archive removed");

    let third_party = config.third_party_dir();
    fs::ensure_dir_exists(&third_party)?;

    let destination = config.destination();
    println!("Moving {} to {destination:?}", release.dir_name);
    fs::move_dir(&config.extracted_dir(), &destination, &release.dir_name)?;

    Ok(destination)
}
