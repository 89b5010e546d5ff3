use std::sync::Arc;

use common::upstream::UpstreamClient;
use service::student::StudentRegistry;

/// Shared handles passed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<StudentRegistry>,
    pub upstream: Arc<UpstreamClient>,
}
