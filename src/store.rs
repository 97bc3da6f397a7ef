use crate::error::LlResult;
use crate::shot::Shot;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Where the shot collection lives between runs.
///
/// The collection is always read and written whole; callers never patch it.
pub trait ShotStore {
    fn load(&self) -> LlResult<Vec<Shot>>;
    fn save(&mut self, shots: &[Shot]) -> LlResult<()>;
}

/// JSON array on disk.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ShotStore for JsonFileStore {
    /// A missing file is an empty collection.
    fn load(&self) -> LlResult<Vec<Shot>> {
        if !self.path.exists() {
            debug!("Store {:?} does not exist yet, starting empty", self.path);
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }
        let shots: Vec<Shot> = serde_json::from_str(&content)?;
        debug!("Loaded {} shots from {:?}", shots.len(), self.path);
        Ok(shots)
    }

    /// Writes to a sibling temp file and renames it over the store, so a
    /// reader sees either the old collection or the new one.
    fn save(&mut self, shots: &[Shot]) -> LlResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string_pretty(shots)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        info!("Saved {} shots to {:?}", shots.len(), self.path);
        Ok(())
    }
}

/// In-process store, for tests and embedding.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    shots: Vec<Shot>,
}

impl MemoryStore {
    pub fn new(shots: Vec<Shot>) -> Self {
        Self { shots }
    }
}

impl ShotStore for MemoryStore {
    fn load(&self) -> LlResult<Vec<Shot>> {
        Ok(self.shots.clone())
    }

    fn save(&mut self, shots: &[Shot]) -> LlResult<()> {
        self.shots = shots.to_vec();
        Ok(())
    }
}
