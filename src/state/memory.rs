//! In-memory state store backend
//!
//! Keeps values in a process-local map. Useful for tests and for hosts that
//! want a state store without filesystem access. Requires no metadata; init
//! accepts any property map.

use crate::error::{ConfigResult, StateError, StateResult};
use crate::state::store::{
    DeleteRequest, GetRequest, GetResponse, Metadata, SetRequest, StateStore,
};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use tracing::debug;

/// Component type identifier for registry discovery
pub const IN_MEMORY_STORE_TYPE: &str = "state.in-memory";

/// State store backed by a shared in-memory map
#[derive(Debug, Clone, Default)]
pub struct InMemoryStateStore {
    data: Arc<RwLock<HashMap<String, Vec<u8>>>>,
}

impl InMemoryStateStore {
    /// Create an empty in-memory store
    pub fn new() -> Self {
        Self::default()
    }
}

impl StateStore for InMemoryStateStore {
    fn init(&mut self, _metadata: Metadata) -> ConfigResult<()> {
        Ok(())
    }

    fn get(&self, req: &GetRequest) -> StateResult<GetResponse> {
        debug!(key = %req.key, "fetching");

        let data = self.data.read().unwrap();
        data.get(&req.key)
            .map(|value| GetResponse {
                data: value.clone().into(),
            })
            .ok_or_else(|| StateError::NotFound {
                key: req.key.clone(),
            })
    }

    fn set(&self, req: &SetRequest) -> StateResult<()> {
        debug!(key = %req.key, "saving");

        let value = req.value.encode()?;
        let mut data = self.data.write().unwrap();
        data.insert(req.key.clone(), value.to_vec());
        Ok(())
    }

    fn delete(&self, req: &DeleteRequest) -> StateResult<()> {
        debug!(key = %req.key, "deleting");

        let mut data = self.data.write().unwrap();
        data.remove(&req.key);
        Ok(())
    }
}
