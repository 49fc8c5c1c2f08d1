//! Flat object store for intermediate and final results.
//!
//! Each object is one file `<dir>/<name>.<ext>`, written as pretty JSON or
//! RON so runs can be inspected and resumed.

use crate::{PipelineError, PipelineResult};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Serialization format for stored objects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreFormat {
    #[default]
    Json,
    Ron,
}

impl StoreFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Ron => "ron",
        }
    }
}

/// Saves and loads named objects under a directory.
#[derive(Debug, Clone)]
pub struct ObjectStore {
    dir: PathBuf,
    format: StoreFormat,
}

impl ObjectStore {
    pub fn new(dir: impl AsRef<Path>, format: StoreFormat) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
            format,
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File path used for `name`.
    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{}.{}", name, self.format.extension()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.path(name).is_file()
    }

    /// Serialize `value` as `name`, creating the directory if needed.
    pub fn save<T: Serialize>(&self, name: &str, value: &T) -> PipelineResult<PathBuf> {
        let path = self.path(name);
        fs::create_dir_all(&self.dir).map_err(|e| store_error(&self.dir, e))?;

        let content = match self.format {
            StoreFormat::Json => {
                serde_json::to_string_pretty(value).map_err(|e| store_error(&path, e))?
            }
            StoreFormat::Ron => ron::ser::to_string_pretty(value, ron::ser::PrettyConfig::default())
                .map_err(|e| store_error(&path, e))?,
        };
        fs::write(&path, content).map_err(|e| store_error(&path, e))?;

        tracing::debug!(path = %path.display(), "saved object");
        Ok(path)
    }

    /// Deserialize the object stored as `name`.
    pub fn load<T: DeserializeOwned>(&self, name: &str) -> PipelineResult<T> {
        let path = self.path(name);
        let content = fs::read_to_string(&path).map_err(|e| store_error(&path, e))?;

        match self.format {
            StoreFormat::Json => serde_json::from_str(&content).map_err(|e| store_error(&path, e)),
            StoreFormat::Ron => ron::from_str(&content).map_err(|e| store_error(&path, e)),
        }
    }
}

fn store_error(path: &Path, error: impl std::fmt::Display) -> PipelineError {
    PipelineError::Store {
        path: path.display().to_string(),
        message: error.to_string(),
    }
}
