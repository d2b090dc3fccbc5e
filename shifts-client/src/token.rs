//! Token storage - bearer credential persisted under a fixed key

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use crate::ClientResult;

/// Key the access token is stored under
pub const TOKEN_KEY: &str = "ACCESS_TOKEN";

/// Persists and retrieves the bearer token
pub trait TokenStore: Send + Sync + std::fmt::Debug {
    /// Persist the token, replacing any previous one
    fn set_token(&self, token: &str) -> ClientResult<()>;

    /// The persisted token, if any
    fn get_token(&self) -> Option<String>;

    /// Forget the token
    fn clear_token(&self) -> ClientResult<()>;
}

/// Token store backed by a JSON file (`{"ACCESS_TOKEN": "..."}`)
///
/// The file is read once on construction; reads are served from memory and
/// every change is written through with a tmp file + rename.
#[derive(Debug)]
pub struct FileTokenStore {
    path: PathBuf,
    cached: RwLock<Option<String>>,
}

impl FileTokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let cached = load(&path).remove(TOKEN_KEY);
        Self {
            path,
            cached: RwLock::new(cached),
        }
    }

    /// Ensure the parent directory exists
    fn ensure_dir(&self) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        Ok(())
    }

    /// Write the entries atomically: tmp file + rename
    fn save(&self, entries: &BTreeMap<String, String>) -> ClientResult<()> {
        self.ensure_dir()?;
        let json = serde_json::to_string_pretty(entries)?;
        let mut tmp_name = self.path.as_os_str().to_owned();
        tmp_name.push(".tmp");
        let tmp_path = PathBuf::from(tmp_name);

        fs::write(&tmp_path, json)?;
        if let Err(e) = fs::rename(&tmp_path, &self.path) {
            tracing::warn!(path = %self.path.display(), error = %e, "Failed to replace token file");
            let _ = fs::remove_file(&tmp_path);
            return Err(e.into());
        }
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Entries of a token file; a missing or corrupt file reads as empty
fn load(path: &Path) -> BTreeMap<String, String> {
    fs::read_to_string(path)
        .ok()
        .and_then(|json| serde_json::from_str(&json).ok())
        .unwrap_or_default()
}

impl TokenStore for FileTokenStore {
    fn set_token(&self, token: &str) -> ClientResult<()> {
        let mut cached = self.cached.write().unwrap_or_else(|e| e.into_inner());
        let mut entries = load(&self.path);
        entries.insert(TOKEN_KEY.to_string(), token.to_string());
        self.save(&entries)?;
        *cached = Some(token.to_string());
        Ok(())
    }

    fn get_token(&self) -> Option<String> {
        self.cached
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    fn clear_token(&self) -> ClientResult<()> {
        let mut cached = self.cached.write().unwrap_or_else(|e| e.into_inner());
        if self.path.exists() {
            let mut entries = load(&self.path);
            if entries.remove(TOKEN_KEY).is_some() {
                self.save(&entries)?;
            }
        }
        *cached = None;
        Ok(())
    }
}

/// In-process token store
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: RwLock<Option<String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: RwLock::new(Some(token.into())),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn set_token(&self, token: &str) -> ClientResult<()> {
        let mut guard = self.token.write().unwrap_or_else(|e| e.into_inner());
        *guard = Some(token.to_string());
        Ok(())
    }

    fn get_token(&self) -> Option<String> {
        self.token
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    fn clear_token(&self) -> ClientResult<()> {
        let mut guard = self.token.write().unwrap_or_else(|e| e.into_inner());
        *guard = None;
        Ok(())
    }
}
