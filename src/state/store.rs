//! State store contract shared by all backends
//!
//! This module defines the request/response types exchanged with a hosting
//! framework and the [`StateStore`] trait every backend implements. Bulk
//! operations are provided as default trait methods composed from repeated
//! single-item calls, so backends only implement get/set/delete.

use crate::error::{ConfigResult, StateResult};
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Component metadata supplied by the hosting framework at initialization
///
/// Serializable so hosts can read it straight out of component configuration
/// documents.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Metadata {
    /// Free-form configuration properties; unrecognized keys are ignored
    pub properties: HashMap<String, String>,
}

impl Metadata {
    /// Create metadata from a property map
    pub fn new(properties: HashMap<String, String>) -> Self {
        Self { properties }
    }
}

impl From<HashMap<String, String>> for Metadata {
    fn from(properties: HashMap<String, String>) -> Self {
        Self { properties }
    }
}

/// Value carried by a set request
///
/// Raw bytes are stored verbatim; structured values are encoded to JSON text
/// before storage. The encode is one-way: get always returns raw bytes and
/// decoding is the caller's responsibility.
#[derive(Debug, Clone)]
pub enum StateValue {
    /// Opaque byte sequence, written as-is
    Raw(Bytes),
    /// Structured value, written as its JSON encoding
    Json(serde_json::Value),
}

impl StateValue {
    /// Encode the value to the bytes that get written to storage
    pub fn encode(&self) -> StateResult<Bytes> {
        match self {
            StateValue::Raw(data) => Ok(data.clone()),
            StateValue::Json(value) => Ok(Bytes::from(serde_json::to_vec(value)?)),
        }
    }
}

impl From<Bytes> for StateValue {
    fn from(data: Bytes) -> Self {
        StateValue::Raw(data)
    }
}

impl From<Vec<u8>> for StateValue {
    fn from(data: Vec<u8>) -> Self {
        StateValue::Raw(Bytes::from(data))
    }
}

impl From<&[u8]> for StateValue {
    fn from(data: &[u8]) -> Self {
        StateValue::Raw(Bytes::copy_from_slice(data))
    }
}

impl From<serde_json::Value> for StateValue {
    fn from(value: serde_json::Value) -> Self {
        StateValue::Json(value)
    }
}

/// Request to retrieve a stored value
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetRequest {
    /// Key identifying the value, optionally composite (`namespace||id`)
    pub key: String,
}

impl GetRequest {
    /// Build a get request for a key
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

/// Response carrying the stored bytes for a key
#[derive(Debug, Clone, Default)]
pub struct GetResponse {
    /// Full stored contents
    pub data: Bytes,
}

/// Request to store a value under a key
#[derive(Debug, Clone)]
pub struct SetRequest {
    /// Key identifying the value, optionally composite (`namespace||id`)
    pub key: String,
    /// Value to store
    pub value: StateValue,
    /// Per-request metadata, passed through uninterpreted by backends
    pub metadata: HashMap<String, String>,
}

impl SetRequest {
    /// Build a set request for a key and value
    pub fn new(key: impl Into<String>, value: impl Into<StateValue>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            metadata: HashMap::new(),
        }
    }
}

/// Request to delete a stored value
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteRequest {
    /// Key identifying the value, optionally composite (`namespace||id`)
    pub key: String,
}

impl DeleteRequest {
    /// Build a delete request for a key
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

/// Contract implemented by every state store backend
///
/// Backends implement the single-item operations; the bulk variants are
/// synthesized from them and fail on the first error.
pub trait StateStore: Send + Sync {
    /// Configure the store from component metadata
    fn init(&mut self, metadata: Metadata) -> ConfigResult<()>;

    /// Retrieve the value stored under a key
    fn get(&self, req: &GetRequest) -> StateResult<GetResponse>;

    /// Store a value under a key, replacing any previous value
    fn set(&self, req: &SetRequest) -> StateResult<()>;

    /// Remove the value stored under a key; absent keys are a no-op
    fn delete(&self, req: &DeleteRequest) -> StateResult<()>;

    /// Retrieve several values with repeated single-item gets
    fn bulk_get(&self, reqs: &[GetRequest]) -> StateResult<Vec<GetResponse>> {
        reqs.iter().map(|req| self.get(req)).collect()
    }

    /// Store several values with repeated single-item sets
    fn bulk_set(&self, reqs: &[SetRequest]) -> StateResult<()> {
        for req in reqs {
            self.set(req)?;
        }
        Ok(())
    }

    /// Delete several values with repeated single-item deletes
    fn bulk_delete(&self, reqs: &[DeleteRequest]) -> StateResult<()> {
        for req in reqs {
            self.delete(req)?;
        }
        Ok(())
    }
}
