// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Diagen-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Diagen and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Diagen: LLM diagram generation with a strict response validator.
//!
//! The model is asked for JSON; [`validate`] turns whatever comes back into a typed
//! [`model::DiagramPayload`], [`model::MermaidDiagram`] or [`model::SmartDiagramResponse`],
//! or a [`validate::ResponseError`] that names the offending element.

pub mod bridge;
pub mod config;
pub mod model;
pub mod prompt;
pub mod validate;

pub use bridge::{BridgeError, DiagramBridge, DiagramRequest, GeminiClient, TextGenerator};
pub use config::{BridgeConfig, ConfigError};
pub use validate::{parse_diagram_payload, ResponseError, ValidationMode};
