//! Asynchronous persistence edge for the registry.
//!
//! The contract is deliberately key-less: `load` reads the whole descriptor
//! set, `save` replaces it. The registry treats every store interaction as
//! best-effort; in-memory state stays authoritative.

use std::sync::Mutex;

use async_trait::async_trait;
use thiserror::Error;
use tracing::warn;

use crate::descriptor::BehaviorDescriptor;
use crate::validate::{parse_descriptor_json, ValidateError};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("unexpected HTTP status {0}")]
    Status(u16),
    #[error("payload rejected: {0}")]
    Decode(#[from] ValidateError),
    #[error("no source produced a usable descriptor set")]
    Exhausted,
}

#[async_trait]
pub trait BehaviorStore: Send + Sync {
    async fn load(&self) -> Result<Vec<BehaviorDescriptor>, StoreError>;
    async fn save(&self, descriptors: &[BehaviorDescriptor]) -> Result<(), StoreError>;
}

/// HTTP-backed store: reads try the primary endpoint, then the static
/// fallback; writes go to the primary only.
pub struct HttpBehaviorStore {
    client: reqwest::Client,
    primary_url: String,
    fallback_url: Option<String>,
}

impl HttpBehaviorStore {
    pub fn new(primary_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            primary_url: primary_url.into(),
            fallback_url: None,
        }
    }

    pub fn with_fallback(mut self, url: impl Into<String>) -> Self {
        self.fallback_url = Some(url.into());
        self
    }

    async fn fetch(&self, url: &str) -> Result<Vec<BehaviorDescriptor>, StoreError> {
        let response = self.client.get(url).send().await?;
        if !response.status().is_success() {
            return Err(StoreError::Status(response.status().as_u16()));
        }
        let body = response.text().await?;
        Ok(parse_descriptor_json(&body)?)
    }
}

#[async_trait]
impl BehaviorStore for HttpBehaviorStore {
    async fn load(&self) -> Result<Vec<BehaviorDescriptor>, StoreError> {
        let sources = std::iter::once(self.primary_url.as_str())
            .chain(self.fallback_url.as_deref());
        for url in sources {
            match self.fetch(url).await {
                Ok(descriptors) => return Ok(descriptors),
                Err(err) => warn!(url, %err, "behavior source unreadable, trying next"),
            }
        }
        Err(StoreError::Exhausted)
    }

    async fn save(&self, descriptors: &[BehaviorDescriptor]) -> Result<(), StoreError> {
        let response = self
            .client
            .post(&self.primary_url)
            .json(descriptors)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(StoreError::Status(response.status().as_u16()));
        }
        Ok(())
    }
}

/// In-memory store for tests and offline hosts.
#[derive(Default)]
pub struct MemoryBehaviorStore {
    entries: Mutex<Vec<BehaviorDescriptor>>,
}

impl MemoryBehaviorStore {
    pub fn new(entries: Vec<BehaviorDescriptor>) -> Self {
        Self {
            entries: Mutex::new(entries),
        }
    }

    pub fn snapshot(&self) -> Vec<BehaviorDescriptor> {
        self.entries.lock().expect("store mutex poisoned").clone()
    }
}

#[async_trait]
impl BehaviorStore for MemoryBehaviorStore {
    async fn load(&self) -> Result<Vec<BehaviorDescriptor>, StoreError> {
        Ok(self.snapshot())
    }

    async fn save(&self, descriptors: &[BehaviorDescriptor]) -> Result<(), StoreError> {
        *self.entries.lock().expect("store mutex poisoned") = descriptors.to_vec();
        Ok(())
    }
}
