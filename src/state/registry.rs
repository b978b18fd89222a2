//! Component registry for state store discovery
//!
//! Hosting frameworks look stores up by their type identifier string (for
//! example `state.localstorage`) and receive a fresh, uninitialized instance
//! to configure with [`StateStore::init`].

use crate::error::{ConfigError, ConfigResult};
use crate::state::localstorage::{LocalStateStore, LOCALSTORAGE_STORE_TYPE};
use crate::state::memory::{InMemoryStateStore, IN_MEMORY_STORE_TYPE};
use crate::state::store::StateStore;
use std::collections::HashMap;

type StoreFactory = fn() -> Box<dyn StateStore>;

/// Registry mapping component type identifiers to store factories
pub struct StateStoreRegistry {
    factories: HashMap<String, StoreFactory>,
}

impl StateStoreRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            factories: HashMap::new(),
        }
    }

    /// Register a factory under a type identifier, replacing any previous one
    pub fn register(&mut self, type_id: &str, factory: StoreFactory) {
        self.factories.insert(type_id.to_string(), factory);
    }

    /// Create an uninitialized store for a type identifier
    pub fn create(&self, type_id: &str) -> ConfigResult<Box<dyn StateStore>> {
        self.factories
            .get(type_id)
            .map(|factory| factory())
            .ok_or_else(|| ConfigError::UnknownStoreType {
                type_id: type_id.to_string(),
            })
    }

    /// Check whether a type identifier has a registered factory
    pub fn contains(&self, type_id: &str) -> bool {
        self.factories.contains_key(type_id)
    }
}

impl Default for StateStoreRegistry {
    /// Registry with the built-in backends pre-registered
    fn default() -> Self {
        let mut registry = Self::new();
        registry.register(LOCALSTORAGE_STORE_TYPE, || {
            Box::new(LocalStateStore::new())
        });
        registry.register(IN_MEMORY_STORE_TYPE, || {
            Box::new(InMemoryStateStore::new())
        });
        registry
    }
}
