use jest_core::{GameSnapshot, SaveStore};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const SAVE_EXTENSION: &str = "jest";
const DEFAULT_SAVE_DIR: &str = "saves";

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid save name '{0}'")]
    InvalidName(String),
}

pub fn default_save_dir() -> PathBuf {
    std::env::var_os("JEST_SAVE_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_SAVE_DIR))
}

/// One pretty-printed JSON file per save, `<dir>/<name>.jest`.
#[derive(Debug, Clone)]
pub struct FileSaveStore {
    dir: PathBuf,
}

impl FileSaveStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn from_env() -> Self {
        Self::new(default_save_dir())
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, name: &str) -> Result<PathBuf, PersistError> {
        let name = name.trim();
        let valid = !name.is_empty()
            && !name.starts_with('.')
            && !name.contains(['/', '\\'])
            && name.chars().all(|ch| !ch.is_control());
        if !valid {
            return Err(PersistError::InvalidName(name.to_string()));
        }
        Ok(self.dir.join(format!("{name}.{SAVE_EXTENSION}")))
    }

    pub fn write(&self, name: &str, snapshot: &GameSnapshot) -> Result<PathBuf, PersistError> {
        let path = self.path_for(name)?;
        fs::create_dir_all(&self.dir)?;
        let body = serde_json::to_string_pretty(snapshot)?;
        fs::write(&path, body)?;
        tracing::debug!(path = %path.display(), "save written");
        Ok(path)
    }

    pub fn read(&self, name: &str) -> Result<GameSnapshot, PersistError> {
        let path = self.path_for(name)?;
        let body = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Save names without extension, sorted. A missing directory lists nothing.
    pub fn names(&self) -> Result<Vec<String>, PersistError> {
        if !self.dir.exists() {
            return Ok(Vec::new());
        }
        let mut names: Vec<String> = fs::read_dir(&self.dir)?
            .filter_map(Result::ok)
            .map(|entry| entry.path())
            .filter(|path| path.extension().is_some_and(|ext| ext == SAVE_EXTENSION))
            .filter_map(|path| {
                path.file_stem()
                    .map(|stem| stem.to_string_lossy().into_owned())
            })
            .collect();
        names.sort();
        Ok(names)
    }

    /// Returns false when there was nothing to delete.
    pub fn delete(&self, name: &str) -> Result<bool, PersistError> {
        let path = self.path_for(name)?;
        if !path.exists() {
            return Ok(false);
        }
        fs::remove_file(path)?;
        Ok(true)
    }
}

impl SaveStore for FileSaveStore {
    fn save(&self, name: &str, snapshot: &GameSnapshot) -> Result<(), String> {
        self.write(name, snapshot)
            .map(|_| ())
            .map_err(|err| err.to_string())
    }

    fn load(&self, name: &str) -> Result<GameSnapshot, String> {
        self.read(name).map_err(|err| err.to_string())
    }

    fn list(&self) -> Result<Vec<String>, String> {
        self.names().map_err(|err| err.to_string())
    }
}
