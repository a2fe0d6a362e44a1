use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Identifier of one remote model variant, e.g. `gemini-2.5-flash`. The
/// candidate list is author-supplied configuration and is never mutated at
/// runtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct EngineCandidate(String);

impl EngineCandidate {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EngineCandidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EngineCandidate {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl From<String> for EngineCandidate {
    fn from(name: String) -> Self {
        Self(name)
    }
}

/// The engine chosen at startup. Immutable for the process lifetime;
/// re-selection only happens on restart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SelectedEngine {
    pub model: EngineCandidate,
    pub selected_at: DateTime<Utc>,
}

impl SelectedEngine {
    pub fn new(model: EngineCandidate) -> Self {
        Self {
            model,
            selected_at: Utc::now(),
        }
    }
}
