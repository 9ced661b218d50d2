//! Model artifact loading
//!
//! The model ships as a zip archive next to the binary. On first use the
//! archive is unpacked into the extraction directory, the model file is
//! deserialized, and the resulting predictor is cached for the lifetime of
//! the loader.

use crate::artifact::ModelArtifact;
use crate::classifier::Predictor;
use parking_lot::Mutex;
use sentiscope_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info};

/// Where the model file and its archive live
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelConfig {
    /// Model file, relative paths resolve against the working directory
    #[serde(default = "default_model_path")]
    pub model_path: PathBuf,

    /// Zip archive containing the model file
    #[serde(default = "default_archive_path")]
    pub archive_path: PathBuf,

    /// Directory the archive is unpacked into
    #[serde(default = "default_extract_dir")]
    pub extract_dir: PathBuf,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            model_path: default_model_path(),
            archive_path: default_archive_path(),
            extract_dir: default_extract_dir(),
        }
    }
}

impl ModelConfig {
    /// Configuration with every path rooted at `dir`
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            model_path: dir.join(default_model_path()),
            archive_path: dir.join(default_archive_path()),
            extract_dir: dir.to_path_buf(),
        }
    }
}

fn default_model_path() -> PathBuf {
    PathBuf::from("sentiment_analysis_model.json")
}

fn default_archive_path() -> PathBuf {
    PathBuf::from("sentiment_analysis_model.json.zip")
}

fn default_extract_dir() -> PathBuf {
    PathBuf::from(".")
}

/// Loads the model once and hands out the cached predictor
pub struct ModelLoader {
    config: ModelConfig,
    cached: Mutex<Option<Arc<dyn Predictor>>>,
}

impl ModelLoader {
    pub fn new(config: ModelConfig) -> Self {
        Self {
            config,
            cached: Mutex::new(None),
        }
    }

    pub fn config(&self) -> &ModelConfig {
        &self.config
    }

    /// Whether a predictor has already been loaded
    pub fn is_loaded(&self) -> bool {
        self.cached.lock().is_some()
    }

    /// Make sure the model file exists, then load it.
    ///
    /// Repeated calls return the same predictor without touching the disk.
    pub fn ensure_and_load(&self) -> Result<Arc<dyn Predictor>> {
        let mut cached = self.cached.lock();
        if let Some(predictor) = cached.as_ref() {
            return Ok(Arc::clone(predictor));
        }

        self.ensure_model_file()?;

        let artifact = ModelArtifact::from_path(&self.config.model_path)?;
        let kind = artifact.kind();
        let predictor = artifact.into_predictor()?;
        info!(
            "Loaded {} model '{}' from {}",
            kind,
            predictor.name(),
            self.config.model_path.display()
        );

        *cached = Some(Arc::clone(&predictor));
        Ok(predictor)
    }

    /// Unpack the archive if the model file is not on disk yet
    pub fn ensure_model_file(&self) -> Result<()> {
        if self.config.model_path.exists() {
            debug!("Model file present: {}", self.config.model_path.display());
            return Ok(());
        }

        if !self.config.archive_path.exists() {
            return Err(Error::ArchiveNotFound(self.config.archive_path.clone()));
        }

        info!(
            "Extracting {} into {}",
            self.config.archive_path.display(),
            self.config.extract_dir.display()
        );
        let extracted = extract_archive(&self.config.archive_path, &self.config.extract_dir)?;
        debug!("Extracted {} entries", extracted);

        if !self.config.model_path.exists() {
            return Err(Error::ModelNotFound(self.config.model_path.clone()));
        }

        Ok(())
    }
}

impl std::fmt::Debug for ModelLoader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModelLoader")
            .field("config", &self.config)
            .field("loaded", &self.is_loaded())
            .finish()
    }
}

/// Unpack every entry of a zip archive into `dest`, returning the entry count.
///
/// Entries whose names would escape `dest` are rejected.
pub fn extract_archive(archive_path: &Path, dest: &Path) -> Result<usize> {
    let file = File::open(archive_path)?;
    let mut archive = zip::ZipArchive::new(file).map_err(|e| {
        Error::archive(format!(
            "Failed to read {} as zip: {}",
            archive_path.display(),
            e
        ))
    })?;

    fs::create_dir_all(dest)?;

    for i in 0..archive.len() {
        let mut entry = archive
            .by_index(i)
            .map_err(|e| Error::archive(format!("Failed to read entry {}: {}", i, e)))?;

        let relative = entry
            .enclosed_name()
            .map(|p| p.to_path_buf())
            .ok_or_else(|| Error::archive(format!("Unsafe entry path: {}", entry.name())))?;
        let target = dest.join(relative);

        if entry.is_dir() {
            fs::create_dir_all(&target)?;
            continue;
        }

        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut out = File::create(&target)?;
        io::copy(&mut entry, &mut out)?;
        debug!("Extracted {}", target.display());
    }

    Ok(archive.len())
}
