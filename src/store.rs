use std::collections::HashMap;
use std::sync::RwLock;

/// Key of the OS version the cached user-agent was computed under.
pub const KEY_OS_VERSION: &str = "LastDeviceSystemVersionNumber";
/// Key of the app version the cached user-agent was computed under.
pub const KEY_APP_VERSION: &str = "LastFirefoxVersionNumber";
/// Key of the build number the cached user-agent was computed under.
pub const KEY_BUILD_NUMBER: &str = "LastFirefoxBuildNumber";
/// Key of the cached user-agent.
pub const KEY_USER_AGENT: &str = "UserAgent";

/// Durable string key-value storage shared across threads.
///
/// Each `get`/`set` is atomic on its own; there is no grouping of writes.
pub trait KeyValueStore: Send + Sync {
    /// Read a value.
    fn get(&self, key: &str) -> Option<String>;
    /// Overwrite a value.
    fn set(&self, key: &str, value: &str);
}

/// Process-local store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        match self.values.read() {
            Ok(values) => values.get(key).cloned(),
            Err(poisoned) => poisoned.into_inner().get(key).cloned(),
        }
    }

    fn set(&self, key: &str, value: &str) {
        let mut values = match self.values.write() {
            Ok(values) => values,
            Err(poisoned) => poisoned.into_inner(),
        };
        values.insert(key.to_string(), value.to_string());
    }
}

#[cfg(feature = "serde")]
pub use json_file::JsonFileStore;

#[cfg(feature = "serde")]
mod json_file {
    use super::KeyValueStore;
    use crate::error::Result;
    use std::collections::HashMap;
    use std::path::{Path, PathBuf};
    use std::sync::Mutex;

    /// Store persisted as a flat JSON object, rewritten on every `set`.
    #[derive(Debug)]
    pub struct JsonFileStore {
        path: PathBuf,
        values: Mutex<HashMap<String, String>>,
    }

    impl JsonFileStore {
        /// Open the store at `path`, loading existing values if the file exists.
        pub fn open(path: impl AsRef<Path>) -> Result<Self> {
            let path = path.as_ref().to_path_buf();

            let values = if path.exists() {
                let content = std::fs::read_to_string(&path)?;
                if content.trim().is_empty() {
                    HashMap::new()
                } else {
                    serde_json::from_str(&content)?
                }
            } else {
                HashMap::new()
            };

            Ok(Self {
                path,
                values: Mutex::new(values),
            })
        }

        /// Location on disk.
        pub fn path(&self) -> &Path {
            &self.path
        }

        fn flush(&self, values: &HashMap<String, String>) -> Result<()> {
            if let Some(parent) = self.path.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)?;
                }
            }
            let content = serde_json::to_string_pretty(values)?;
            std::fs::write(&self.path, content)?;
            Ok(())
        }
    }

    impl KeyValueStore for JsonFileStore {
        fn get(&self, key: &str) -> Option<String> {
            match self.values.lock() {
                Ok(values) => values.get(key).cloned(),
                Err(poisoned) => poisoned.into_inner().get(key).cloned(),
            }
        }

        fn set(&self, key: &str, value: &str) {
            let mut values = match self.values.lock() {
                Ok(values) => values,
                Err(poisoned) => poisoned.into_inner(),
            };
            values.insert(key.to_string(), value.to_string());

            if let Err(err) = self.flush(&values) {
                tracing::warn!(path = %self.path.display(), key, "failed to persist store: {err}");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_overwrites() {
        let store = MemoryStore::new();
        assert_eq!(store.get(KEY_USER_AGENT), None);
        store.set(KEY_USER_AGENT, "a");
        store.set(KEY_USER_AGENT, "b");
        assert_eq!(store.get(KEY_USER_AGENT).as_deref(), Some("b"));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn json_store_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("ua.json");

        let store = JsonFileStore::open(&path).unwrap();
        store.set(KEY_OS_VERSION, "14.0");
        store.set(KEY_USER_AGENT, "Mozilla/5.0");
        drop(store);

        let reopened = JsonFileStore::open(&path).unwrap();
        assert_eq!(reopened.get(KEY_OS_VERSION).as_deref(), Some("14.0"));
        assert_eq!(reopened.get(KEY_USER_AGENT).as_deref(), Some("Mozilla/5.0"));
        assert_eq!(reopened.get(KEY_APP_VERSION), None);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn json_store_keeps_values_when_flush_fails() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "").unwrap();

        let store = JsonFileStore::open(blocker.join("ua.json")).unwrap();
        store.set(KEY_USER_AGENT, "a");
        assert_eq!(store.get(KEY_USER_AGENT).as_deref(), Some("a"));
        assert!(!store.path().exists());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn json_store_rejects_garbage() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ua.json");
        std::fs::write(&path, "not json").unwrap();
        assert!(JsonFileStore::open(&path).is_err());
    }
}
