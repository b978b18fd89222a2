//! State store components and the contract they share
//!
//! This module provides a pluggable state-store interface with backend
//! implementations:
//! - **Local filesystem storage** - One file per key under a configured directory
//! - **In-memory storage** - Process-local map, mainly for tests and hosts
//!   without filesystem access
//!
//! Backends implement the [`StateStore`] trait and are discovered through the
//! [`StateStoreRegistry`] by their type identifier string. Bulk get/set/delete
//! are composed from repeated single-item calls by the trait's default
//! methods, so backends stay minimal.
//!
//! # Examples
//!
//! ```rust
//! use localstate::state::{StateStoreRegistry, Metadata, SetRequest, GetRequest};
//! use std::collections::HashMap;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! # let dir = tempfile::TempDir::new()?;
//! # let host_path = dir.path().display().to_string();
//! let registry = StateStoreRegistry::default();
//! let mut store = registry.create("state.localstorage")?;
//!
//! let mut props = HashMap::new();
//! props.insert("hostPath".to_string(), host_path);
//! store.init(Metadata::new(props))?;
//!
//! store.set(&SetRequest::new("app_id||greeting", b"hello".as_slice()))?;
//! assert_eq!(&store.get(&GetRequest::new("app_id||greeting"))?.data[..], b"hello");
//! # Ok(())
//! # }
//! ```

// Shared contract and request/response types
pub mod store;

// Backend implementations
pub mod localstorage;
pub mod memory;

// Component discovery
pub mod registry;

// Re-export main types for convenience
pub use store::{
    DeleteRequest, GetRequest, GetResponse, Metadata, SetRequest, StateStore, StateValue,
};

pub use localstorage::{
    extract_file_name, LocalStateStore, HOST_PATH, KEY_DELIMITER, LOCALSTORAGE_STORE_TYPE,
};

pub use memory::{InMemoryStateStore, IN_MEMORY_STORE_TYPE};

pub use registry::StateStoreRegistry;
