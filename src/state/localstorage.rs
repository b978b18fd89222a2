//! Local filesystem state store backend
//!
//! Stores each value as an individual file in a flat directory configured
//! through the `hostPath` metadata property. Composite keys of the form
//! `namespace||id` map to a file named after the trailing segment; the
//! directory itself is never created or checked at init time, so a bad path
//! only surfaces when the first operation touches the filesystem.
//!
//! Writes are plain create-and-truncate with no temp-file staging, so a crash
//! mid-write can leave a partially written file. Concurrent operations on the
//! same key race at the filesystem level; the last writer wins.
//!
//! # Examples
//!
//! ```rust
//! use localstate::state::{LocalStateStore, Metadata, StateStore};
//! use localstate::state::{GetRequest, SetRequest};
//! use std::collections::HashMap;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! # let dir = tempfile::TempDir::new()?;
//! # let host_path = dir.path().display().to_string();
//! let mut store = LocalStateStore::new();
//! let mut props = HashMap::new();
//! props.insert("hostPath".to_string(), host_path);
//! store.init(Metadata::new(props))?;
//!
//! store.set(&SetRequest::new("app_id||greeting", b"hello".as_slice()))?;
//! let response = store.get(&GetRequest::new("app_id||greeting"))?;
//! assert_eq!(&response.data[..], b"hello");
//! # Ok(())
//! # }
//! ```

use crate::error::{ConfigError, ConfigResult, StateError, StateResult};
use crate::state::store::{
    DeleteRequest, GetRequest, GetResponse, Metadata, SetRequest, StateStore,
};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Component type identifier for registry discovery
pub const LOCALSTORAGE_STORE_TYPE: &str = "state.localstorage";

/// Metadata property naming the storage directory
pub const HOST_PATH: &str = "hostPath";

/// Separator between the namespace and identifier segments of a composite key
pub const KEY_DELIMITER: &str = "||";

/// Extract the file name for a key
///
/// A composite key of exactly two segments yields the segment after the
/// delimiter. Any other shape, including keys with more than one delimiter,
/// falls back to the first segment.
pub fn extract_file_name(key: &str) -> &str {
    let segments: Vec<&str> = key.split(KEY_DELIMITER).collect();
    if segments.len() == 2 {
        segments[1]
    } else {
        segments[0]
    }
}

/// State store backed by one file per key under a local directory
#[derive(Debug, Default)]
pub struct LocalStateStore {
    host_path: Option<PathBuf>,
}

impl LocalStateStore {
    /// Create an unconfigured store; `init` must run before any operation
    pub fn new() -> Self {
        Self::default()
    }

    fn host_path(&self) -> StateResult<&Path> {
        self.host_path
            .as_deref()
            .ok_or(StateError::NotInitialized)
    }

    fn file_path(&self, key: &str) -> StateResult<PathBuf> {
        Ok(self.host_path()?.join(extract_file_name(key)))
    }
}

impl StateStore for LocalStateStore {
    fn init(&mut self, metadata: Metadata) -> ConfigResult<()> {
        let host_path = match metadata.properties.get(HOST_PATH) {
            Some(value) if !value.is_empty() => value,
            _ => {
                return Err(ConfigError::MissingField {
                    field: HOST_PATH.to_string(),
                })
            }
        };

        debug!(host_path = %host_path, "using host path");
        self.host_path = Some(PathBuf::from(host_path));

        Ok(())
    }

    fn get(&self, req: &GetRequest) -> StateResult<GetResponse> {
        debug!(key = %req.key, "fetching");

        let path = self.file_path(&req.key)?;
        let data = fs::read(&path).map_err(|e| {
            debug!(key = %req.key, error = %e, "read file");
            match e.kind() {
                ErrorKind::NotFound => StateError::NotFound {
                    key: req.key.clone(),
                },
                _ => StateError::Io(e),
            }
        })?;

        Ok(GetResponse {
            data: data.into(),
        })
    }

    fn set(&self, req: &SetRequest) -> StateResult<()> {
        debug!(key = %req.key, "saving");

        let path = self.file_path(&req.key)?;
        let data = req.value.encode()?;
        fs::write(&path, &data).map_err(|e| {
            debug!(key = %req.key, error = %e, "write file");
            StateError::Io(e)
        })
    }

    fn delete(&self, req: &DeleteRequest) -> StateResult<()> {
        debug!(key = %req.key, "deleting");

        let path = self.file_path(&req.key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            // Deleting an absent key is a no-op
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => {
                debug!(key = %req.key, error = %e, "delete file");
                Err(StateError::Io(e))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::store::StateValue;
    use serde_json::json;
    use std::collections::HashMap;
    use tempfile::TempDir;

    fn metadata_with_host_path(path: &Path) -> Metadata {
        let mut props = HashMap::new();
        props.insert(HOST_PATH.to_string(), path.display().to_string());
        Metadata::new(props)
    }

    fn create_test_store() -> (LocalStateStore, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let mut store = LocalStateStore::new();
        store.init(metadata_with_host_path(temp_dir.path())).unwrap();
        (store, temp_dir)
    }

    #[test]
    fn test_init_with_valid_metadata() {
        let mut store = LocalStateStore::new();
        let mut props = HashMap::new();
        props.insert(HOST_PATH.to_string(), "/temp".to_string());
        store.init(Metadata::new(props)).unwrap();
        assert_eq!(store.host_path.as_deref(), Some(Path::new("/temp")));
    }

    #[test]
    fn test_init_with_missing_metadata() {
        let mut store = LocalStateStore::new();
        let mut props = HashMap::new();
        props.insert("invalidValue".to_string(), "a".to_string());
        let err = store.init(Metadata::new(props)).unwrap_err();
        assert_eq!(
            err.to_string(),
            "missing or empty hostPath field from metadata"
        );
    }

    #[test]
    fn test_init_with_empty_host_path() {
        let mut store = LocalStateStore::new();
        let mut props = HashMap::new();
        props.insert(HOST_PATH.to_string(), String::new());
        assert!(matches!(
            store.init(Metadata::new(props)),
            Err(ConfigError::MissingField { .. })
        ));
    }

    #[test]
    fn test_init_does_not_touch_filesystem() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("does-not-exist");
        let mut store = LocalStateStore::new();
        store.init(metadata_with_host_path(&missing)).unwrap();
        assert!(!missing.exists());
    }

    #[test]
    fn test_extract_valid_composite_key() {
        assert_eq!(extract_file_name("app_id||key"), "key");
    }

    #[test]
    fn test_extract_no_delimiter_present() {
        assert_eq!(extract_file_name("key"), "key");
    }

    #[test]
    fn test_extract_extra_delimiter_falls_back_to_first_segment() {
        assert_eq!(extract_file_name("a||b||c"), "a");
    }

    #[test]
    fn test_set_and_get_round_trip() {
        let (store, _temp_dir) = create_test_store();

        store
            .set(&SetRequest::new("app_id||greeting", b"hello".as_slice()))
            .unwrap();
        let response = store.get(&GetRequest::new("app_id||greeting")).unwrap();
        assert_eq!(&response.data[..], b"hello");
    }

    #[test]
    fn test_composite_key_maps_to_trailing_segment_file() {
        let (store, temp_dir) = create_test_store();

        store
            .set(&SetRequest::new("app_id||greeting", b"hello".as_slice()))
            .unwrap();
        assert!(temp_dir.path().join("greeting").is_file());
        assert!(!temp_dir.path().join("app_id||greeting").exists());
    }

    #[test]
    fn test_set_overwrites_previous_value() {
        let (store, _temp_dir) = create_test_store();

        store
            .set(&SetRequest::new("key", b"first".as_slice()))
            .unwrap();
        store
            .set(&SetRequest::new("key", b"second".as_slice()))
            .unwrap();
        let response = store.get(&GetRequest::new("key")).unwrap();
        assert_eq!(&response.data[..], b"second");
    }

    #[test]
    fn test_set_json_value_writes_encoding() {
        let (store, _temp_dir) = create_test_store();

        let value = StateValue::from(json!({"city": "Warsaw", "zip": 1}));
        store.set(&SetRequest::new("record", value)).unwrap();

        let response = store.get(&GetRequest::new("record")).unwrap();
        let decoded: serde_json::Value = serde_json::from_slice(&response.data).unwrap();
        assert_eq!(decoded, json!({"city": "Warsaw", "zip": 1}));
    }

    #[test]
    fn test_get_missing_key_is_not_found() {
        let (store, _temp_dir) = create_test_store();

        let err = store.get(&GetRequest::new("absent")).unwrap_err();
        assert!(matches!(err, StateError::NotFound { ref key } if key == "absent"));
    }

    #[test]
    fn test_delete_then_get_is_not_found() {
        let (store, _temp_dir) = create_test_store();

        store
            .set(&SetRequest::new("key", b"value".as_slice()))
            .unwrap();
        store.delete(&DeleteRequest::new("key")).unwrap();
        assert!(matches!(
            store.get(&GetRequest::new("key")),
            Err(StateError::NotFound { .. })
        ));
    }

    #[test]
    fn test_delete_missing_key_is_noop() {
        let (store, _temp_dir) = create_test_store();
        store.delete(&DeleteRequest::new("never-stored")).unwrap();
    }

    #[test]
    fn test_set_into_missing_directory_propagates_io_error() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("does-not-exist");
        let mut store = LocalStateStore::new();
        store.init(metadata_with_host_path(&missing)).unwrap();

        let err = store
            .set(&SetRequest::new("key", b"value".as_slice()))
            .unwrap_err();
        assert!(matches!(err, StateError::Io(_)));
    }

    #[test]
    fn test_operations_before_init_fail() {
        let store = LocalStateStore::new();
        assert!(matches!(
            store.get(&GetRequest::new("key")),
            Err(StateError::NotInitialized)
        ));
        assert!(matches!(
            store.set(&SetRequest::new("key", b"value".as_slice())),
            Err(StateError::NotInitialized)
        ));
        assert!(matches!(
            store.delete(&DeleteRequest::new("key")),
            Err(StateError::NotInitialized)
        ));
    }
}
