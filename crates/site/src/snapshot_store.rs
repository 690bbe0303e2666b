//! `localStorage`-backed storage for the showcase snapshot.

use serde_json::Value;

#[derive(Debug, Clone, Copy)]
/// Reads and writes one JSON snapshot under a fixed `localStorage` key.
///
/// Off the browser every load misses and every save succeeds.
pub struct SnapshotStore {
    key: &'static str,
}

impl SnapshotStore {
    /// Store bound to `key`.
    pub const fn new(key: &'static str) -> Self {
        Self { key }
    }

    /// Key the snapshot lives under.
    pub fn key(self) -> &'static str {
        self.key
    }

    /// Last saved snapshot, if present and parseable.
    pub fn load(self) -> Option<Value> {
        let raw = self.load_raw()?;
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(err) => {
                leptos::logging::warn!("ignoring unreadable snapshot `{}`: {err}", self.key);
                None
            }
        }
    }

    /// Serializes and saves `snapshot`.
    ///
    /// # Errors
    ///
    /// Returns an error when localStorage is unavailable or the write fails.
    pub fn save(self, snapshot: &Value) -> Result<(), String> {
        self.save_raw(&snapshot.to_string())
    }

    fn load_raw(self) -> Option<String> {
        #[cfg(target_arch = "wasm32")]
        {
            let storage = web_sys::window()?.local_storage().ok().flatten()?;
            storage.get_item(self.key).ok().flatten()
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            None
        }
    }

    fn save_raw(self, raw_json: &str) -> Result<(), String> {
        #[cfg(target_arch = "wasm32")]
        {
            let storage = web_sys::window()
                .and_then(|w| w.local_storage().ok().flatten())
                .ok_or_else(|| "localStorage unavailable".to_string())?;
            storage
                .set_item(self.key, raw_json)
                .map_err(|e| format!("localStorage set_item failed: {e:?}"))
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = raw_json;
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn native_store_misses_and_accepts_writes() {
        let store = SnapshotStore::new("test.snapshot");
        assert_eq!(store.key(), "test.snapshot");
        assert_eq!(store.load(), None);
        assert_eq!(store.save(&json!({ "switch_enabled": true })), Ok(()));
    }
}
