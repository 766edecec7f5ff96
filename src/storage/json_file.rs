use std::cell::RefCell;
use std::collections::HashMap;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::env;

use crate::errors::StoreError;
use crate::storage::KeyValueStore;

const STORE_FILE: &str = "store.json";
const TMP_SUFFIX: &str = "tmp";
const DEFAULT_DIR_NAME: &str = ".sft_core";
const HOME_ENV: &str = "SFT_CORE_HOME";

/// File-backed key-value store.
///
/// The whole map is kept in memory and rewritten as one JSON document on
/// every mutation, via a temp file plus rename so a failed write never
/// corrupts the previous state. A corrupted store file on open degrades to
/// an empty map instead of failing.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    cells: RefCell<HashMap<String, String>>,
}

impl FileStore {
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        if let Some(parent) = path.parent() {
            ensure_dir(parent)?;
        }
        let cells = match fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str(&raw) {
                Ok(map) => map,
                Err(err) => {
                    tracing::warn!(
                        path = %path.display(),
                        %err,
                        "store file is not valid JSON, starting from an empty map"
                    );
                    HashMap::new()
                }
            },
            Err(_) => HashMap::new(),
        };
        Ok(Self {
            path,
            cells: RefCell::new(cells),
        })
    }

    /// Opens the store at its default location, `~/.sft_core/store.json`
    /// unless `SFT_CORE_HOME` points elsewhere.
    pub fn open_default() -> Result<Self, StoreError> {
        Self::open(app_data_dir().join(STORE_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(&*self.cells.borrow())?;
        let tmp = tmp_path(&self.path);
        write_file(&tmp, &json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.cells.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.cells.borrow_mut().insert(key.into(), value.into());
        self.flush()
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.cells.borrow_mut().remove(key);
        self.flush()
    }
}

/// Application data directory, `~/.sft_core` unless overridden by the
/// `SFT_CORE_HOME` environment variable.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os(HOME_ENV) {
        return PathBuf::from(custom);
    }
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

fn ensure_dir(path: &Path) -> Result<(), StoreError> {
    fs::create_dir_all(path)?;
    Ok(())
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => String::from(TMP_SUFFIX),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_file(path: &Path, data: &str) -> Result<(), StoreError> {
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.sync_all()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn values_survive_reopen() {
        let temp = tempdir().unwrap();
        let path = temp.path().join(STORE_FILE);
        {
            let store = FileStore::open(&path).unwrap();
            store.set("sft-theme", "light").unwrap();
            store.set("sft-categories", r#"["Food"]"#).unwrap();
        }
        let reopened = FileStore::open(&path).unwrap();
        assert_eq!(reopened.get("sft-theme"), Some("light".into()));
        assert_eq!(reopened.get("sft-categories"), Some(r#"["Food"]"#.into()));
    }

    #[test]
    fn corrupted_file_degrades_to_empty_store() {
        let temp = tempdir().unwrap();
        let path = temp.path().join(STORE_FILE);
        fs::write(&path, "{not json").unwrap();
        let store = FileStore::open(&path).unwrap();
        assert_eq!(store.get("sft-records"), None);
    }

    #[test]
    fn remove_deletes_only_the_named_key() {
        let temp = tempdir().unwrap();
        let store = FileStore::open(temp.path().join(STORE_FILE)).unwrap();
        store.set("sft-theme", "dark").unwrap();
        store.set("unrelated", "kept").unwrap();
        store.remove("sft-theme").unwrap();
        assert_eq!(store.get("sft-theme"), None);
        assert_eq!(store.get("unrelated"), Some("kept".into()));
    }

    #[test]
    fn no_temp_file_remains_after_flush() {
        let temp = tempdir().unwrap();
        let path = temp.path().join(STORE_FILE);
        let store = FileStore::open(&path).unwrap();
        store.set("sft-theme", "dark").unwrap();
        assert!(path.exists());
        assert!(!tmp_path(&path).exists());
    }
}
