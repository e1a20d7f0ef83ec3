use crate::home::HomeData;
use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// TOML file storage for household data
pub struct Storage {
    file_path: PathBuf,
}

impl Storage {
    pub fn new(file_path: impl AsRef<Path>) -> Self {
        Self {
            file_path: file_path.as_ref().to_path_buf(),
        }
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    pub fn load(&self) -> Result<HomeData> {
        if !self.file_path.exists() {
            return Ok(HomeData::new());
        }

        let content = fs::read_to_string(&self.file_path)?;
        let data: HomeData = toml::from_str(&content)?;
        Ok(data)
    }

    /// Save household data to the TOML file
    ///
    /// Writes to a sibling temp file and renames it over the target, so an
    /// interrupted save never leaves a torn file behind.
    pub fn save(&self, data: &HomeData) -> Result<()> {
        let content = toml::to_string_pretty(data)?;
        let tmp_path = self.file_path.with_extension("toml.tmp");
        fs::write(&tmp_path, content)?;
        fs::rename(&tmp_path, &self.file_path)?;
        Ok(())
    }
}
