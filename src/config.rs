// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Diagen-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Diagen and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Bridge configuration.

use std::time::Duration;

use thiserror::Error;

use crate::model::DiagramModule;

pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_TEXT_MODEL: &str = "gemini-2.5-flash-preview-04-17";
pub const DEFAULT_CODE_MODEL: &str = "gemini-2.5-flash-preview-04-17";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

pub const API_KEY_VAR: &str = "API_KEY";
pub const FALLBACK_API_KEY_VAR: &str = "GEMINI_API_KEY";
pub const ENDPOINT_VAR: &str = "DIAGEN_ENDPOINT";
pub const TEXT_MODEL_VAR: &str = "DIAGEN_TEXT_MODEL";
pub const CODE_MODEL_VAR: &str = "DIAGEN_CODE_MODEL";
pub const TIMEOUT_VAR: &str = "DIAGEN_TIMEOUT_SECS";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing API key: set API_KEY or GEMINI_API_KEY")]
    MissingApiKey,

    #[error("invalid DIAGEN_TIMEOUT_SECS value {value:?}: expected a positive number of seconds")]
    InvalidTimeout { value: String },

    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

/// Everything needed to reach the model service.
#[derive(Clone, PartialEq, Eq)]
pub struct BridgeConfig {
    api_key: String,
    endpoint: String,
    text_model: String,
    code_model: String,
    request_timeout: Duration,
}

impl std::fmt::Debug for BridgeConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BridgeConfig")
            .field("api_key", &"<redacted>")
            .field("endpoint", &self.endpoint)
            .field("text_model", &self.text_model)
            .field("code_model", &self.code_model)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}

impl BridgeConfig {
    /// Builds a configuration with default endpoint, models and timeout.
    pub fn new(api_key: impl Into<String>) -> Result<Self, ConfigError> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(ConfigError::MissingApiKey);
        }
        Ok(Self {
            api_key,
            endpoint: DEFAULT_ENDPOINT.to_owned(),
            text_model: DEFAULT_TEXT_MODEL.to_owned(),
            code_model: DEFAULT_CODE_MODEL.to_owned(),
            request_timeout: DEFAULT_TIMEOUT,
        })
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads settings through `lookup`; blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let api_key = get(API_KEY_VAR)
            .or_else(|| get(FALLBACK_API_KEY_VAR))
            .ok_or(ConfigError::MissingApiKey)?;
        let mut config = Self::new(api_key)?;

        if let Some(endpoint) = get(ENDPOINT_VAR) {
            config = config.with_endpoint(endpoint);
        }
        if let Some(model) = get(TEXT_MODEL_VAR) {
            config = config.with_text_model(model);
        }
        if let Some(model) = get(CODE_MODEL_VAR) {
            config = config.with_code_model(model);
        }
        if let Some(value) = get(TIMEOUT_VAR) {
            config = config.with_request_timeout(parse_timeout(&value)?);
        }

        Ok(config)
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into().trim_end_matches('/').to_owned();
        self
    }

    pub fn with_text_model(mut self, model: impl Into<String>) -> Self {
        self.text_model = model.into();
        self
    }

    pub fn with_code_model(mut self, model: impl Into<String>) -> Self {
        self.code_model = model.into();
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn text_model(&self) -> &str {
        &self.text_model
    }

    pub fn code_model(&self) -> &str {
        &self.code_model
    }

    pub fn request_timeout(&self) -> Duration {
        self.request_timeout
    }

    pub fn model_for(&self, module: DiagramModule) -> &str {
        match module {
            DiagramModule::Text => &self.text_model,
            DiagramModule::Code => &self.code_model,
        }
    }
}

fn parse_timeout(value: &str) -> Result<Duration, ConfigError> {
    value
        .trim()
        .parse::<u64>()
        .ok()
        .filter(|secs| *secs > 0)
        .map(Duration::from_secs)
        .ok_or_else(|| ConfigError::InvalidTimeout {
            value: value.to_owned(),
        })
}
