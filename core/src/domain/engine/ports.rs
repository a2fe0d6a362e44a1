use std::future::Future;

use crate::domain::{common::entities::app_errors::CoreError, engine::entities::EngineCandidate};

/// Availability probe for a single candidate model. A probe is a cheap
/// token-count call against literal text, never real generation.
#[cfg_attr(test, mockall::automock)]
pub trait EngineProbe: Send + Sync {
    fn probe(
        &self,
        candidate: EngineCandidate,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}
