use serde::Serialize;

/// SDL2 release fetched by this tool.
pub const SDL2_VERSION: &str = "2.0.9";

pub const RELEASE_BASE_URL: &str = "https://www.libsdl.org/release/";

const ARCHIVE_PREFIX: &str = "SDL2-devel-";
const ARCHIVE_SUFFIX: &str = "-VC.zip";
const EXTRACTED_DIR_PREFIX: &str = "SDL2-";

/// Names derived from a release version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReleaseNames {
    pub version: String,
    /// Archive file name, e.g. `SDL2-devel-2.0.9-VC.zip`
    pub file_name: String,
    pub url: String,
    /// Top-level directory inside the archive, e.g. `SDL2-2.0.9`
    pub dir_name: String,
}

impl ReleaseNames {
    pub fn for_version(version: &str) -> Self {
        let file_name = archive_file_name(version);
        let url = format!("{RELEASE_BASE_URL}{file_name}");
        Self {
            version: version.to_string(),
            url,
            file_name,
            dir_name: extracted_dir_name(version),
        }
    }
}

impl Default for ReleaseNames {
    fn default() -> Self {
        Self::for_version(SDL2_VERSION)
    }
}

pub fn archive_file_name(version: &str) -> String {
    format!("{ARCHIVE_PREFIX}{version}{ARCHIVE_SUFFIX}")
}

pub fn extracted_dir_name(version: &str) -> String {
    format!("{EXTRACTED_DIR_PREFIX}{version}")
}
