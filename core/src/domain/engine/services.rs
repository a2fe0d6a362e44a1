use crate::domain::{
    common::entities::app_errors::CoreError,
    engine::{
        entities::{EngineCandidate, SelectedEngine},
        ports::EngineProbe,
    },
};

/// Picks the first candidate whose probe succeeds, scanning in list order
/// (the order is the tie-break: earlier entries are strictly preferred).
/// Probe failures are non-fatal for the scan; exhausting the list is fatal
/// and the error carries every candidate that was tried.
pub async fn select_engine<P: EngineProbe>(
    probe: &P,
    candidates: &[EngineCandidate],
) -> Result<SelectedEngine, CoreError> {
    for candidate in candidates {
        match probe.probe(candidate.clone()).await {
            Ok(()) => {
                tracing::info!(engine = %candidate, "engine selected");
                return Ok(SelectedEngine::new(candidate.clone()));
            }
            Err(err) => {
                tracing::warn!(
                    engine = %candidate,
                    error = %err,
                    "engine probe failed, trying next candidate"
                );
            }
        }
    }

    Err(CoreError::NoUsableEngine {
        candidates: candidates.iter().map(|c| c.as_str().to_string()).collect(),
    })
}
