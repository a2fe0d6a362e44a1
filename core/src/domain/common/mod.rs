use chrono::{DateTime, Utc};
use uuid::{NoContext, Timestamp, Uuid};

use crate::domain::recipe::value_objects::DietLabelStyle;

pub mod entities;
pub mod services;

#[derive(Clone, Debug)]
pub struct BiteBotConfig {
    pub llm: LlmConfig,
    pub form: FormConfig,
}

#[derive(Clone, Debug)]
pub struct LlmConfig {
    pub gemini_api_key: String,
    /// Candidate model names, tried in order until one answers the probe.
    pub gemini_models: Vec<String>,
    /// Base URL of the generative-language REST endpoint.
    pub api_base: String,
    /// Optional request timeout; the client default (no overall timeout)
    /// applies when unset.
    pub request_timeout_secs: Option<u64>,
}

#[derive(Clone, Debug)]
pub struct FormConfig {
    pub diet_labels: DietLabelStyle,
}

pub const DEFAULT_GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com";

pub const DEFAULT_GEMINI_MODELS: [&str; 3] = [
    "gemini-3-flash-preview",
    "gemini-2.5-flash",
    "gemini-1.5-flash",
];

pub fn generate_timestamp() -> (DateTime<Utc>, Timestamp) {
    let now = Utc::now();
    let seconds = now.timestamp().try_into().unwrap_or(0);
    let timestamp = Timestamp::from_unix(NoContext, seconds, 0);

    (now, timestamp)
}

pub fn generate_uuid_v7() -> Uuid {
    let (_, timestamp) = generate_timestamp();
    Uuid::new_v7(timestamp)
}
