//! Service layer for the student registry.
//! - `student`: the `Student` record and the in-memory `StudentRegistry`.
//! - `storage`: whole-map snapshot persistence behind the `SnapshotStore` trait.
//! - `errors`: the discriminated error type returned by registry operations.

pub mod errors;
pub mod storage;
pub mod student;
