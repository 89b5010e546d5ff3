use std::{collections::BTreeMap, sync::Arc};

use tokio::sync::RwLock;
use tracing::{error, info, instrument, warn};

use super::domain::{Student, StudentReplacement};
use crate::errors::ServiceError;
use crate::storage::SnapshotStore;

pub type StudentStore = dyn SnapshotStore<i64, Student>;

/// In-memory map of students keyed by id, mirrored to a snapshot store.
///
/// Every mutation holds the write guard across both the map change and the
/// snapshot write, so the map and the persisted copy change in the same order.
/// Snapshot failures are logged and never undo the in-memory change.
pub struct StudentRegistry {
    students: RwLock<BTreeMap<i64, Student>>,
    store: Arc<StudentStore>,
}

impl StudentRegistry {
    /// Load from the store; a missing or unreadable snapshot starts an empty registry.
    pub async fn load(store: Arc<StudentStore>) -> Self {
        let students = match store.load().await {
            Ok(Some(map)) => {
                info!(count = map.len(), "loaded students from snapshot");
                map.into_iter()
                    .map(|(id, mut student)| {
                        if student.id != id {
                            warn!(key = id, record_id = student.id, "snapshot record id differs from key; using key");
                            student.id = id;
                        }
                        (id, student)
                    })
                    .collect()
            }
            Ok(None) => {
                info!("no student snapshot found; starting empty");
                BTreeMap::new()
            }
            Err(e) => {
                error!(error = %e, "failed to load students; starting empty");
                BTreeMap::new()
            }
        };
        Self { students: RwLock::new(students), store }
    }

    async fn persist(&self, map: &BTreeMap<i64, Student>) {
        if let Err(e) = self.store.save(map).await {
            error!(error = %e, count = map.len(), "failed to save students");
        }
    }

    /// All students in ascending id order. An empty registry is seeded with
    /// `Student::sample()` first; the seed is not persisted.
    pub async fn list(&self) -> Vec<Student> {
        {
            let map = self.students.read().await;
            if !map.is_empty() {
                return map.values().cloned().collect();
            }
        }
        let mut map = self.students.write().await;
        if map.is_empty() {
            let sample = Student::sample();
            info!(id = sample.id, "registry empty; seeding sample student");
            map.insert(sample.id, sample);
        }
        map.values().cloned().collect()
    }

    pub async fn get(&self, id: i64) -> Option<Student> {
        self.students.read().await.get(&id).cloned()
    }

    /// Upsert at `student.id`; returns the whole collection afterwards.
    #[instrument(skip(self, student), fields(id = student.id))]
    pub async fn create(&self, student: Student) -> Vec<Student> {
        let mut map = self.students.write().await;
        let replaced = map.insert(student.id, student).is_some();
        self.persist(&map).await;
        info!(replaced, "student upserted");
        map.values().cloned().collect()
    }

    /// Replace the record at `id`; the body's own id is ignored.
    #[instrument(skip(self, body))]
    pub async fn update(&self, id: i64, body: StudentReplacement) -> Result<Student, ServiceError> {
        let mut map = self.students.write().await;
        if !map.contains_key(&id) {
            return Err(ServiceError::NotFound(id));
        }
        let student = body.into_student(id);
        map.insert(id, student.clone());
        self.persist(&map).await;
        info!("student updated");
        Ok(student)
    }

    /// Remove the record at `id`; returns the remaining collection.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> Result<Vec<Student>, ServiceError> {
        let mut map = self.students.write().await;
        if map.remove(&id).is_none() {
            return Err(ServiceError::NotFound(id));
        }
        self.persist(&map).await;
        info!("student deleted");
        Ok(map.values().cloned().collect())
    }

    pub async fn len(&self) -> usize {
        self.students.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.students.read().await.is_empty()
    }
}
