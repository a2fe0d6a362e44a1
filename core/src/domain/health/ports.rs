use std::future::Future;

use crate::domain::{common::entities::app_errors::CoreError, health::entities::AppHealthStatus};

/// Service trait for liveness checks
#[cfg_attr(test, mockall::automock)]
pub trait HealthCheckService: Send + Sync {
    fn health(&self) -> impl Future<Output = Result<AppHealthStatus, CoreError>> + Send;
}
