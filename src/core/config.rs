use crate::core::release::ReleaseNames;
use crate::error::Result;
use std::path::{Path, PathBuf};

pub const THIRD_PARTY_DIR: &str = "third_party";
pub const SDK_DIR_NAME: &str = "SDL2";

/// Everything a setup run needs: the pinned release and the directory it runs in.
#[derive(Debug, Clone)]
pub struct SetupConfig {
    pub release: ReleaseNames,
    pub root: PathBuf,
}

impl SetupConfig {
    /// Configuration for the current working directory.
    pub fn load() -> Result<Self> {
        let root = std::env::current_dir()?;
        Ok(Self::with_root(root))
    }

    pub fn with_root<P: Into<PathBuf>>(root: P) -> Self {
        SetupConfig {
            release: ReleaseNames::default(),
            root: root.into(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn archive_path(&self) -> PathBuf {
        self.root.join(&self.release.file_name)
    }

    pub fn extracted_dir(&self) -> PathBuf {
        self.root.join(&self.release.dir_name)
    }

    pub fn third_party_dir(&self) -> PathBuf {
        self.root.join(THIRD_PARTY_DIR)
    }

    pub fn destination(&self) -> PathBuf {
        self.third_party_dir().join(SDK_DIR_NAME)
    }
}
