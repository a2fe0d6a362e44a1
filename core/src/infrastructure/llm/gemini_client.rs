use std::time::Duration;

use base64::{Engine as _, engine::general_purpose};
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::domain::{
    common::{LlmConfig, entities::app_errors::CoreError},
    engine::{entities::EngineCandidate, ports::EngineProbe},
    recipe::{
        ports::LlmClient,
        value_objects::{GenerateOptions, PromptPart},
    },
};

/// Generation client bound to one model chosen at startup.
#[derive(Debug, Clone)]
pub struct GeminiLlmClient {
    api_key: String,
    model_name: String,
    api_base: String,
    client: Client,
}

/// Startup probe asking a candidate model to count tokens for a one-word
/// payload. Any well-formed answer qualifies the candidate.
#[derive(Debug, Clone)]
pub struct GeminiEngineProbe {
    api_key: String,
    api_base: String,
    client: Client,
}

#[derive(Debug, Serialize)]
struct GeminiRequest {
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Serialize)]
struct CountTokensRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum Part {
    Text { text: String },
    InlineData { inline_data: InlineData },
}

#[derive(Debug, Serialize)]
struct InlineData {
    mime_type: String,
    data: String,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    response_mime_type: String,
    response_schema: serde_json::Value,
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: ContentResponse,
}

#[derive(Debug, Deserialize)]
struct ContentResponse {
    parts: Vec<PartResponse>,
}

#[derive(Debug, Deserialize)]
struct PartResponse {
    text: String,
}

#[derive(Debug, Deserialize)]
struct CountTokensResponse {
    #[serde(rename = "totalTokens")]
    total_tokens: u64,
}

impl From<PromptPart> for Part {
    fn from(part: PromptPart) -> Self {
        match part {
            PromptPart::Text(text) => Part::Text { text },
            PromptPart::Image(image) => Part::InlineData {
                inline_data: InlineData {
                    mime_type: image.mime_type,
                    data: general_purpose::STANDARD.encode(&image.data),
                },
            },
        }
    }
}

fn build_http_client(timeout_secs: Option<u64>) -> Result<Client, CoreError> {
    let mut builder = Client::builder();
    if let Some(secs) = timeout_secs {
        builder = builder.timeout(Duration::from_secs(secs));
    }

    builder.build().map_err(|e| {
        tracing::error!("Failed to build HTTP client: {}", e);
        CoreError::InternalServerError
    })
}

impl GeminiLlmClient {
    pub fn new(config: &LlmConfig, model: &EngineCandidate) -> Result<Self, CoreError> {
        Ok(Self {
            api_key: config.gemini_api_key.clone(),
            model_name: model.to_string(),
            api_base: config.api_base.clone(),
            client: build_http_client(config.request_timeout_secs)?,
        })
    }

    async fn call_gemini_api(&self, request: GeminiRequest) -> Result<String, CoreError> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.api_base, self.model_name, self.api_key
        );

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Gemini API request failed: {}", e);
                CoreError::ExternalServiceError(format!("LLM API error: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("Gemini API error: {} - {}", status, error_text);
            return Err(CoreError::ExternalServiceError(format!(
                "LLM API returned error: {} - {}",
                status, error_text
            )));
        }

        let gemini_response: GeminiResponse = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse Gemini response: {}", e);
            CoreError::ExternalServiceError(format!("Failed to parse LLM response: {}", e))
        })?;

        gemini_response
            .candidates
            .first()
            .and_then(|c| c.content.parts.first())
            .map(|p| p.text.clone())
            .ok_or_else(|| CoreError::ExternalServiceError("No response from LLM".to_string()))
    }
}

impl LlmClient for GeminiLlmClient {
    async fn generate_content(
        &self,
        parts: Vec<PromptPart>,
        options: GenerateOptions,
    ) -> Result<String, CoreError> {
        let request = GeminiRequest {
            contents: vec![Content {
                parts: parts.into_iter().map(Part::from).collect(),
            }],
            generation_config: options.response_schema.map(|response_schema| {
                GenerationConfig {
                    response_mime_type: "application/json".to_string(),
                    response_schema,
                }
            }),
        };

        self.call_gemini_api(request).await
    }
}

impl GeminiEngineProbe {
    pub fn new(config: &LlmConfig) -> Result<Self, CoreError> {
        Ok(Self {
            api_key: config.gemini_api_key.clone(),
            api_base: config.api_base.clone(),
            client: build_http_client(config.request_timeout_secs)?,
        })
    }
}

impl EngineProbe for GeminiEngineProbe {
    async fn probe(&self, candidate: EngineCandidate) -> Result<(), CoreError> {
        let url = format!(
            "{}/v1beta/models/{}:countTokens?key={}",
            self.api_base, candidate, self.api_key
        );

        let request = CountTokensRequest {
            contents: vec![Content {
                parts: vec![Part::Text {
                    text: "test".to_string(),
                }],
            }],
        };

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Gemini probe request failed: {}", e);
                CoreError::ExternalServiceError(format!("LLM API error: {}", e))
            })?;

        // Rejection here is routine: unknown models, quota and region
        // blocks all answer with an error status
        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(CoreError::ExternalServiceError(format!(
                "LLM API returned error: {} - {}",
                status, error_text
            )));
        }

        let count: CountTokensResponse = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse countTokens response: {}", e);
            CoreError::ExternalServiceError(format!("Failed to parse LLM response: {}", e))
        })?;

        tracing::debug!(total_tokens = count.total_tokens, "countTokens probe answered");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::domain::recipe::value_objects::ImagePayload;

    fn config(server: &MockServer) -> LlmConfig {
        LlmConfig {
            gemini_api_key: "test-key".to_string(),
            gemini_models: vec!["gemini-test".to_string()],
            api_base: server.uri(),
            request_timeout_secs: None,
        }
    }

    fn generate_body(text: &str) -> serde_json::Value {
        json!({
            "candidates": [
                { "content": { "parts": [ { "text": text } ] } }
            ]
        })
    }

    #[tokio::test]
    async fn test_generate_content_returns_first_candidate_text() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1beta/models/gemini-test:generateContent"))
            .and(query_param("key", "test-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(generate_body("## Poha")))
            .mount(&server)
            .await;

        let client =
            GeminiLlmClient::new(&config(&server), &EngineCandidate::from("gemini-test")).unwrap();
        let text = client
            .generate_content(
                vec![PromptPart::Text("hello".to_string())],
                GenerateOptions::default(),
            )
            .await
            .unwrap();

        assert_eq!(text, "## Poha");
    }

    #[tokio::test]
    async fn test_generate_content_encodes_image_and_schema() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1beta/models/gemini-test:generateContent"))
            .and(body_partial_json(json!({
                "contents": [{
                    "parts": [
                        { "text": "Ingredients: poha" },
                        { "inline_data": { "mime_type": "image/png", "data": "AQID" } }
                    ]
                }],
                "generation_config": { "response_mime_type": "application/json" }
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(generate_body("[]")))
            .expect(1)
            .mount(&server)
            .await;

        let client =
            GeminiLlmClient::new(&config(&server), &EngineCandidate::from("gemini-test")).unwrap();
        let text = client
            .generate_content(
                vec![
                    PromptPart::Text("Ingredients: poha".to_string()),
                    PromptPart::Image(ImagePayload {
                        data: vec![1, 2, 3],
                        mime_type: "image/png".to_string(),
                    }),
                ],
                GenerateOptions {
                    response_schema: Some(json!({ "type": "array" })),
                },
            )
            .await
            .unwrap();

        assert_eq!(text, "[]");
    }

    #[tokio::test]
    async fn test_generate_content_omits_generation_config_in_freeform() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1beta/models/gemini-test:generateContent"))
            .respond_with(move |request: &wiremock::Request| {
                let body: serde_json::Value = serde_json::from_slice(&request.body).unwrap();
                assert!(body.get("generation_config").is_none());
                ResponseTemplate::new(200).set_body_json(generate_body("## Poha"))
            })
            .mount(&server)
            .await;

        let client =
            GeminiLlmClient::new(&config(&server), &EngineCandidate::from("gemini-test")).unwrap();
        client
            .generate_content(
                vec![PromptPart::Text("hello".to_string())],
                GenerateOptions::default(),
            )
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_generate_content_maps_error_status() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(429).set_body_string("quota exhausted"))
            .mount(&server)
            .await;

        let client =
            GeminiLlmClient::new(&config(&server), &EngineCandidate::from("gemini-test")).unwrap();
        let error = client
            .generate_content(
                vec![PromptPart::Text("hello".to_string())],
                GenerateOptions::default(),
            )
            .await
            .unwrap_err();

        assert!(matches!(
            error,
            CoreError::ExternalServiceError(message) if message.contains("429")
        ));
    }

    #[tokio::test]
    async fn test_generate_content_rejects_empty_candidates() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "candidates": [] })))
            .mount(&server)
            .await;

        let client =
            GeminiLlmClient::new(&config(&server), &EngineCandidate::from("gemini-test")).unwrap();
        let error = client
            .generate_content(
                vec![PromptPart::Text("hello".to_string())],
                GenerateOptions::default(),
            )
            .await
            .unwrap_err();

        assert_eq!(
            error,
            CoreError::ExternalServiceError("No response from LLM".to_string())
        );
    }

    #[tokio::test]
    async fn test_probe_accepts_a_token_count() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1beta/models/gemini-test:countTokens"))
            .and(body_partial_json(json!({
                "contents": [{ "parts": [{ "text": "test" }] }]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "totalTokens": 3 })))
            .expect(1)
            .mount(&server)
            .await;

        let probe = GeminiEngineProbe::new(&config(&server)).unwrap();
        probe
            .probe(EngineCandidate::from("gemini-test"))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_probe_rejects_an_unknown_model() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1beta/models/gemini-test:countTokens"))
            .respond_with(ResponseTemplate::new(404).set_body_string("model not found"))
            .mount(&server)
            .await;

        let probe = GeminiEngineProbe::new(&config(&server)).unwrap();
        let error = probe
            .probe(EngineCandidate::from("gemini-test"))
            .await
            .unwrap_err();

        assert!(matches!(error, CoreError::ExternalServiceError(_)));
    }
}
