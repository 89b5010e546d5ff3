use std::{
    collections::BTreeMap,
    io::ErrorKind,
    marker::PhantomData,
    path::{Path, PathBuf},
};

use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};
use tokio::fs;
use tracing::debug;

use super::SnapshotStore;
use crate::errors::ServiceError;

/// JSON file-backed map snapshot.
///
/// The whole map is written as one JSON object on every save; map keys become
/// JSON object keys (integers are written as strings, e.g. `"1"`).
pub struct JsonMapStore<K, V> {
    file_path: PathBuf,
    _entries: PhantomData<fn() -> (K, V)>,
}

impl<K, V> JsonMapStore<K, V> {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { file_path: path.into(), _entries: PhantomData }
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }
}

#[async_trait]
impl<K, V> SnapshotStore<K, V> for JsonMapStore<K, V>
where
    K: Ord + Serialize + DeserializeOwned + Send + Sync,
    V: Serialize + DeserializeOwned + Send + Sync,
{
    async fn load(&self) -> Result<Option<BTreeMap<K, V>>, ServiceError> {
        let bytes = match fs::read(&self.file_path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(ServiceError::Storage(e.to_string())),
        };
        let map = serde_json::from_slice(&bytes).map_err(|e| ServiceError::Serialization(e.to_string()))?;
        Ok(Some(map))
    }

    async fn save(&self, map: &BTreeMap<K, V>) -> Result<(), ServiceError> {
        let data = serde_json::to_vec(map).map_err(|e| ServiceError::Serialization(e.to_string()))?;
        let mut mkdir_err = None;
        if let Some(parent) = self.file_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            if let Err(e) = fs::create_dir_all(parent).await {
                debug!(parent = %parent.display(), error = %e, "failed to create snapshot directory");
                mkdir_err = Some(format!("creating {}: {}", parent.display(), e));
            }
        }
        fs::write(&self.file_path, data).await.map_err(|e| match mkdir_err {
            Some(cause) => ServiceError::Storage(format!("writing {}: {} ({})", self.file_path.display(), e, cause)),
            None => ServiceError::Storage(format!("writing {}: {}", self.file_path.display(), e)),
        })?;
        Ok(())
    }
}
