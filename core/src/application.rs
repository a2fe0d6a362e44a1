use crate::{
    domain::{
        common::{BiteBotConfig, services::Service},
        engine::{entities::EngineCandidate, services::select_engine},
    },
    infrastructure::llm::{GeminiEngineProbe, GeminiLlmClient},
};

pub type BiteBotService = Service<GeminiLlmClient>;

/// Probes the configured engine candidates in order and wires the aggregate
/// service to the first one that answers. Selection happens once per process
/// start.
pub async fn create_service(config: BiteBotConfig) -> Result<BiteBotService, anyhow::Error> {
    let candidates: Vec<EngineCandidate> = config
        .llm
        .gemini_models
        .iter()
        .map(|name| EngineCandidate::from(name.as_str()))
        .collect();

    let probe = GeminiEngineProbe::new(&config.llm)?;
    let engine = select_engine(&probe, &candidates).await?;

    let llm_client = GeminiLlmClient::new(&config.llm, &engine.model)?;

    Ok(Service::new(llm_client, engine, config.form))
}
