// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Diagen-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Diagen and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! `generateContent` client for the Gemini REST API.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::error::{BridgeError, BridgeResult};
use super::generator::{GeneratedText, GenerationRequest, TextGenerator};
use crate::config::{BridgeConfig, ConfigError};
use crate::prompt::GenerationSettings;

const API_KEY_HEADER: &str = "x-goog-api-key";

#[derive(Debug, Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    endpoint: String,
    api_key: String,
}

impl GeminiClient {
    pub fn new(config: &BridgeConfig) -> Result<Self, ConfigError> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .build()?;
        Ok(Self {
            http,
            endpoint: config.endpoint().to_owned(),
            api_key: config.api_key().to_owned(),
        })
    }

    fn url(&self, model: &str) -> String {
        format!("{}/v1beta/models/{model}:generateContent", self.endpoint)
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, request: GenerationRequest) -> BridgeResult<GeneratedText> {
        let body = GenerateContentRequest {
            contents: [Content {
                role: "user",
                parts: [Part {
                    text: &request.prompt,
                }],
            }],
            generation_config: &request.settings,
        };

        let response = self
            .http
            .post(self.url(&request.model))
            .header(API_KEY_HEADER, &self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(BridgeError::Api {
                status: status.as_u16(),
                message: api_error_message(&text),
            });
        }

        let reply: GenerateContentResponse = response.json().await?;
        Ok(reply.into_generated_text())
    }

    fn name(&self) -> &str {
        "gemini"
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: [Content<'a>; 1],
    generation_config: &'a GenerationSettings,
}

#[derive(Serialize)]
struct Content<'a> {
    role: &'static str,
    parts: [Part<'a>; 1],
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    #[serde(default)]
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
    #[serde(default)]
    finish_reason: Option<String>,
    #[serde(default)]
    finish_message: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Default, Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    #[serde(default)]
    block_reason: Option<String>,
}

impl GenerateContentResponse {
    fn into_generated_text(self) -> GeneratedText {
        let Some(candidate) = self.candidates.into_iter().next() else {
            // A blocked prompt yields no candidates at all.
            return GeneratedText {
                text: String::new(),
                finish_reason: self.prompt_feedback.and_then(|feedback| feedback.block_reason),
                finish_message: None,
            };
        };

        let text = candidate
            .content
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .filter_map(|part| part.text)
                    .collect::<String>()
            })
            .unwrap_or_default();

        GeneratedText {
            text,
            finish_reason: candidate.finish_reason,
            finish_message: candidate.finish_message,
        }
    }
}

#[derive(Deserialize)]
struct ApiErrorEnvelope {
    error: ApiErrorBody,
}

#[derive(Deserialize)]
struct ApiErrorBody {
    message: String,
}

fn api_error_message(body: &str) -> String {
    match serde_json::from_str::<ApiErrorEnvelope>(body) {
        Ok(envelope) => envelope.error.message,
        Err(_) if body.trim().is_empty() => "no response body".to_owned(),
        Err(_) => body.trim().to_owned(),
    }
}
