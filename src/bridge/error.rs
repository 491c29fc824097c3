// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Diagen-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Diagen and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Bridge error types.

use thiserror::Error;

use crate::config::ConfigError;
use crate::validate::ResponseError;

#[derive(Debug, Error)]
pub enum BridgeError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("request to the model service failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("model service returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("model returned no text (finish reason: {})", .finish_reason.as_deref().unwrap_or("unknown"))]
    EmptyResponse {
        finish_reason: Option<String>,
        finish_message: Option<String>,
    },

    #[error("invalid model response: {0}")]
    Response(#[from] ResponseError),
}

/// Result type alias for bridge operations.
pub type BridgeResult<T> = Result<T, BridgeError>;
