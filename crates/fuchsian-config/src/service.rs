// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Storage port and JSON service for config documents.

use fuchsian_orbit::OrbitError;
use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

/// Backend holding raw config documents keyed by name.
pub trait ConfigStore {
    /// The document stored under `key`, or `None` when there is none.
    fn read(&self, key: &str) -> Result<Option<Vec<u8>>, ConfigError>;
    /// Stores `document` under `key`, replacing any previous one.
    fn write(&self, key: &str, document: &[u8]) -> Result<(), ConfigError>;
}

/// Errors raised while loading or saving configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The document is not valid JSON for the requested type.
    #[error("malformed config document: {0}")]
    Serde(#[from] serde_json::Error),
    /// The document parsed but describes an unusable engine setup.
    #[error("invalid config: {0}")]
    Invalid(#[from] OrbitError),
    /// The storage backend failed.
    #[error("config backend failed: {0}")]
    Backend(String),
}

/// JSON codec in front of a [`ConfigStore`].
#[derive(Debug, Clone)]
pub struct ConfigService<S> {
    store: S,
}

impl<S> ConfigService<S> {
    /// Service writing to `store`.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// The backing store.
    pub fn store(&self) -> &S {
        &self.store
    }
}

impl<S: ConfigStore> ConfigService<S> {
    /// Decoded document under `key`. Missing and empty documents both read
    /// as `None`.
    pub fn load<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, ConfigError> {
        match self.store.read(key)? {
            Some(document) if !document.is_empty() => Ok(Some(serde_json::from_slice(&document)?)),
            _ => Ok(None),
        }
    }

    /// Encodes `value` as pretty JSON and stores it under `key`.
    pub fn save<T: Serialize>(&self, key: &str, value: &T) -> Result<(), ConfigError> {
        let document = serde_json::to_vec_pretty(value)?;
        self.store.write(key, &document)
    }
}
