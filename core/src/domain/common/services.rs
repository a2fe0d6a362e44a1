use crate::domain::{
    common::FormConfig, engine::entities::SelectedEngine, recipe::ports::LlmClient,
};

/// Aggregate service the api crate holds in its state. Every service trait
/// of the domain is implemented on this struct, generic over the LLM port so
/// tests can substitute a mock client.
#[derive(Debug, Clone)]
pub struct Service<LLM>
where
    LLM: LlmClient,
{
    pub(crate) llm_client: LLM,
    pub(crate) engine: SelectedEngine,
    pub(crate) form: FormConfig,
}

impl<LLM> Service<LLM>
where
    LLM: LlmClient,
{
    pub fn new(llm_client: LLM, engine: SelectedEngine, form: FormConfig) -> Self {
        Self {
            llm_client,
            engine,
            form,
        }
    }

    /// The engine selected at startup, kept around for display purposes.
    pub fn engine(&self) -> &SelectedEngine {
        &self.engine
    }
}
