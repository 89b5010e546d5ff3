//! Storage abstractions for the service layer
//!
//! The registry persists by whole-map snapshots. `SnapshotStore` is the seam
//! between the registry and the medium; `JsonMapStore` writes a flat JSON file.

use std::collections::BTreeMap;

use async_trait::async_trait;

use crate::errors::ServiceError;

pub mod json_map_store;

/// Persists and restores an entire map at once.
#[async_trait]
pub trait SnapshotStore<K, V>: Send + Sync
where
    K: Send + Sync,
    V: Send + Sync,
{
    /// `Ok(None)` when no snapshot has ever been written.
    async fn load(&self) -> Result<Option<BTreeMap<K, V>>, ServiceError>;
    /// Replace the stored snapshot with `map`.
    async fn save(&self, map: &BTreeMap<K, V>) -> Result<(), ServiceError>;
}
