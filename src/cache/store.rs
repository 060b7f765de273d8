use std::collections::BTreeMap;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Quota exceeded writing {key}: {required} bytes needed, {quota} allowed")]
    QuotaExceeded {
        key: String,
        required: usize,
        quota: usize,
    },
    #[error("Invalid store key: {0}")]
    InvalidKey(String),
}

/// Persistent string key-value storage backing the selection cache.
///
/// Implementations report failures; the cache decides what to do with them.
pub trait KeyValueStore {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError>;

    fn write(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &mut S {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).read(key)
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).write(key, value)
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).read(key)
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).write(key, value)
    }
}

/// In-process store. An optional quota caps the total bytes held (keys plus
/// values), the way browser storage rejects writes once full.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
    quota: Option<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_quota(quota: usize) -> Self {
        MemoryStore {
            entries: BTreeMap::new(),
            quota: Some(quota),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn used_without(&self, key: &str) -> usize {
        self.entries
            .iter()
            .filter(|(k, _)| k.as_str() != key)
            .map(|(k, v)| k.len() + v.len())
            .sum()
    }
}

impl KeyValueStore for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        if let Some(quota) = self.quota {
            let required = self.used_without(key) + key.len() + value.len();
            if required > quota {
                return Err(StoreError::QuotaExceeded {
                    key: key.to_string(),
                    required,
                    quota,
                });
            }
        }
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// On-disk store: one `<key>.json` file per key under `root`.
///
/// Writes go to a sibling temp file which is synced and then renamed over the
/// target, so a reader never sees a half-written value.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Creates `root` if it does not exist yet.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(FileStore { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StoreError> {
        let valid = !key.is_empty()
            && key != "."
            && key != ".."
            && !key.contains(['/', '\\', '\0']);
        if !valid {
            return Err(StoreError::InvalidKey(key.to_string()));
        }
        Ok(self.root.join(format!("{key}.json")))
    }
}

impl KeyValueStore for FileStore {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let path = self.path_for(key)?;
        let temp_path = path.with_extension("json.tmp");

        let written = write_synced(&temp_path, value).and_then(|()| fs::rename(&temp_path, &path));
        if let Err(e) = written {
            // Never leave a partial temp file next to the real entry
            let _ = fs::remove_file(&temp_path);
            return Err(e.into());
        }
        Ok(())
    }
}

fn write_synced(path: &Path, value: &str) -> std::io::Result<()> {
    let mut f = fs::File::create(path)?;
    f.write_all(value.as_bytes())?;
    f.sync_all()
}
