use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Liveness snapshot: the running version and the engine answering
/// generation requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AppHealthStatus {
    pub status: String,
    pub engine: String,
    pub version: String,
}
