// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Diagen-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Diagen and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use async_trait::async_trait;

use super::error::BridgeResult;
use crate::prompt::GenerationSettings;

/// Finish reason reported for a normally completed generation.
pub const FINISH_STOP: &str = "STOP";

/// One prompt, ready to send.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    pub model: String,
    pub prompt: String,
    pub settings: GenerationSettings,
}

/// Raw model output before validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneratedText {
    pub text: String,
    pub finish_reason: Option<String>,
    pub finish_message: Option<String>,
}

impl GeneratedText {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            finish_reason: Some(FINISH_STOP.to_owned()),
            finish_message: None,
        }
    }

    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// A missing finish reason counts as a normal stop.
    pub fn stopped_normally(&self) -> bool {
        self.finish_reason
            .as_deref()
            .map_or(true, |reason| reason == FINISH_STOP)
    }
}

/// Anything that can turn a prompt into text.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, request: GenerationRequest) -> BridgeResult<GeneratedText>;

    /// Returns a stable name for logging.
    fn name(&self) -> &str {
        "generator"
    }
}
