use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    health::{entities::AppHealthStatus, ports::HealthCheckService},
    recipe::ports::LlmClient,
};

impl<LLM> HealthCheckService for Service<LLM>
where
    LLM: LlmClient,
{
    async fn health(&self) -> Result<AppHealthStatus, CoreError> {
        Ok(AppHealthStatus {
            status: "ok".to_string(),
            engine: self.engine.model.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        })
    }
}
