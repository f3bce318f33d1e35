use crate::core::config::SetupConfig;
use crate::error::Result;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallState {
    Installed { location: PathBuf },
    NotInstalled,
    /// Files left behind by an interrupted run that need manual cleanup.
    Partial { leftovers: Vec<PathBuf> },
}

pub fn inspect(config: &SetupConfig) -> InstallState {
    let leftovers: Vec<PathBuf> = [config.archive_path(), config.extracted_dir()]
        .into_iter()
        .filter(|path| path.exists())
        .collect();

    let destination = config.destination();
    if destination.is_dir() && leftovers.is_empty() {
        InstallState::Installed {
            location: destination,
        }
    } else if !leftovers.is_empty() {
        InstallState::Partial { leftovers }
    } else {
        InstallState::NotInstalled
    }
}

pub fn check_status() -> Result<()> {
    let config = SetupConfig::load()?;

    println!("🔍 SDL2 {} setup status", config.release.version);
    println!("  destination: {:?}", config.destination());

    match inspect(&config) {
        InstallState::Installed { .. } => println!("    ✅ installed"),
        InstallState::NotInstalled => {
            println!("    ❌ not installed");
            println!();
            println!("To install, run:");
            println!("   setup-sdl2 install");
        }
        InstallState::Partial { leftovers } => {
            println!("    ⚠️  a previous run did not finish");
            for path in &leftovers {
                println!("  leftover: {path:?}");
            }
            println!();
            println!("Remove the leftovers before running setup again.");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn test_empty_dir_is_not_installed() {
        let temp = TempDir::new().unwrap();
        assert_eq!(
            inspect(&SetupConfig::with_root(temp.path())),
            InstallState::NotInstalled
        );
    }

    #[test]
    fn test_destination_present_is_installed() {
        let temp = TempDir::new().unwrap();
        let config = SetupConfig::with_root(temp.path());
        std::fs::create_dir_all(config.destination()).unwrap();

        assert_eq!(
            inspect(&config),
            InstallState::Installed {
                location: config.destination()
            }
        );
    }

    #[test]
    fn test_leftovers_are_reported() {
        let temp = TempDir::new().unwrap();
        let config = SetupConfig::with_root(temp.path());
        std::fs::create_dir_all(config.destination()).unwrap();
        std::fs::create_dir(config.extracted_dir()).unwrap();

        assert_eq!(
            inspect(&config),
            InstallState::Partial {
                leftovers: vec![config.extracted_dir()]
            }
        );
    }

    #[test]
    fn test_stray_archive_is_reported() {
        let temp = TempDir::new().unwrap();
        let config = SetupConfig::with_root(temp.path());
        std::fs::write(config.archive_path(), b"partial").unwrap();

        assert_eq!(
            inspect(&config),
            InstallState::Partial {
                leftovers: vec![config.archive_path()]
            }
        );
    }
}
