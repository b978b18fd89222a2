//! # localstate
//!
//! A local filesystem state store component with a pluggable state-store
//! contract, for hosting frameworks that route keyed get/set/delete requests
//! to interchangeable backends.
//!
//! ## Features
//!
//! - **State Module**: The [`state::StateStore`] contract, request/response
//!   types, and the component registry
//! - **Local filesystem backend**: One file per key under a configured
//!   `hostPath` directory, with composite-key (`namespace||id`) file naming
//! - **In-memory backend**: Map-backed store for tests and ephemeral hosts
//! - **Bulk composition**: Bulk get/set/delete synthesized from single-item
//!   operations by default trait methods
//!
//! ## Example
//!
//! ```rust
//! use localstate::state::{LocalStateStore, Metadata, StateStore, SetRequest};
//! use std::collections::HashMap;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! # let dir = tempfile::TempDir::new()?;
//! # let host_path = dir.path().display().to_string();
//! let mut store = LocalStateStore::new();
//! let mut props = HashMap::new();
//! props.insert("hostPath".to_string(), host_path);
//! store.init(Metadata::new(props))?;
//! store.set(&SetRequest::new("app_id||greeting", b"hello".as_slice()))?;
//! # Ok(())
//! # }
//! ```

#![deny(missing_docs)]
#![warn(clippy::all)]

// Re-export core error types
pub use error::{Error, Result};

// Core modules
pub mod error;
pub mod state;

// Re-export commonly used types
pub mod prelude {
    //! Common types and traits for convenient importing

    pub use crate::error::{ConfigError, Error, Result, StateError};
    pub use crate::state::{
        DeleteRequest, GetRequest, GetResponse, InMemoryStateStore, LocalStateStore, Metadata,
        SetRequest, StateStore, StateStoreRegistry, StateValue,
    };
}

// Version information
/// The version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// The name of this crate
pub const CRATE_NAME: &str = env!("CARGO_PKG_NAME");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_info() {
        assert!(!VERSION.is_empty());
        assert_eq!(CRATE_NAME, "localstate");
    }
}
