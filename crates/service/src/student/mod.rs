//! Student records and the in-memory registry mirrored to a snapshot store.

pub mod domain;
pub mod registry;

pub use domain::{Student, StudentReplacement};
pub use registry::StudentRegistry;
