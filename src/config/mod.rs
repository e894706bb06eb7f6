use anyhow::{ensure, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::package::{demo_packages, Package};

/// Packages file listing the sensor packages to summarize
///
/// ```toml
/// [[packages]]
/// code = "RUN"
/// values = [15000, 1, 75]
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackagesFile {
    #[serde(default)]
    pub packages: Vec<Package>,
}

impl Default for PackagesFile {
    fn default() -> Self {
        Self {
            packages: demo_packages(),
        }
    }
}

impl PackagesFile {
    /// Load packages from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read packages file {}", path.display()))?;

        let file = Self::parse(&contents)
            .with_context(|| format!("Failed to parse packages file {}", path.display()))?;

        tracing::info!(
            "Loaded {} packages from {}",
            file.packages.len(),
            path.display()
        );
        Ok(file)
    }

    pub fn parse(contents: &str) -> Result<Self> {
        let file: PackagesFile = toml::from_str(contents)?;
        ensure!(!file.packages.is_empty(), "No packages defined");
        Ok(file)
    }

    /// Packages from `path`, or the demo packages when no file is given
    pub fn resolve(path: Option<&Path>) -> Result<Vec<Package>> {
        match path {
            Some(path) => Ok(Self::load(path)?.packages),
            None => {
                tracing::debug!("No packages file, using demo packages");
                Ok(Self::default().packages)
            }
        }
    }
}
