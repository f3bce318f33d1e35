use crate::core::config::SetupConfig;
use crate::core::release::ReleaseNames;
use crate::error::Result;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Debug, Serialize)]
pub struct SetupPlan {
    #[serde(flatten)]
    pub release: ReleaseNames,
    pub destination: PathBuf,
}

impl SetupPlan {
    pub fn new(config: &SetupConfig) -> Self {
        Self {
            release: config.release.clone(),
            destination: config.destination(),
        }
    }
}

/// Prints what a setup run would fetch and where it would land.
pub fn print_plan(json: bool) -> Result<()> {
    let config = SetupConfig::load()?;
    let plan = SetupPlan::new(&config);

    if json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
    } else {
        println!("SDL2 version:        {}", plan.release.version);
        println!("Archive:             {}", plan.release.file_name);
        println!("URL:                 {}", plan.release.url);
        println!("Extracted directory: {}", plan.release.dir_name);
        println!("Destination:         {:?}", plan.destination);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_plan_serializes_flat() {
        let plan = SetupPlan::new(&SetupConfig::with_root("/work"));
        let value = serde_json::to_value(&plan).unwrap();

        assert_eq!(value["version"], "2.0.9");
        assert_eq!(value["file_name"], "SDL2-devel-2.0.9-VC.zip");
        assert_eq!(
            value["url"],
            "https://www.libsdl.org/release/SDL2-devel-2.0.9-VC.zip"
        );
        assert_eq!(value["dir_name"], "SDL2-2.0.9");
        assert_eq!(value["destination"], "/work/third_party/SDL2");
    }
}
