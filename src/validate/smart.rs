// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Diagen-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Diagen and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use serde_json::Value;

use super::error::ResponseError;
use super::extract::{json_type_name, parse_json, strip_fence};
use super::normalize::normalize_payload;
use super::ValidationMode;
use crate::model::{DiagramModule, DiagramType, SmartDiagramBody, SmartDiagramResponse};

pub const JUSTIFICATION_MARKER: &str = "justification for diagram choice:";

pub const MIN_SMART_EXPLANATION_CHARS: usize = 70;

/// Longest excerpt of a rejected value kept in an error message.
const EXCERPT_CHARS: usize = 120;

/// Parses a smart-selection reply: the model's chosen type, its justification, and either
/// Mermaid markup or a node/edge payload.
pub fn parse_smart_response(
    text: &str,
    module: DiagramModule,
) -> Result<SmartDiagramResponse, ResponseError> {
    let value = parse_json(strip_fence(text))?;
    let Value::Object(root) = &value else {
        return Err(ResponseError::UnexpectedShape {
            found: json_type_name(&value),
        });
    };

    let candidates = DiagramType::smart_candidates(module);
    let suggested_type = match root.get("suggestedDiagramType") {
        Some(Value::String(name)) => name
            .parse::<DiagramType>()
            .ok()
            .filter(|ty| candidates.contains(ty))
            .ok_or_else(|| ResponseError::InvalidSuggestion {
                received: name.clone(),
                closest: DiagramType::closest(name, candidates),
            })?,
        other => {
            return Err(ResponseError::InvalidSuggestion {
                received: excerpt(other),
                closest: None,
            })
        }
    };

    let explanation = match root.get("explanation") {
        Some(Value::String(text)) if is_justified(text) => text.clone(),
        other => {
            return Err(ResponseError::InvalidExplanation {
                received: excerpt(other),
            })
        }
    };

    let body = if suggested_type.is_mermaid() {
        match root.get("mermaidSyntax") {
            Some(Value::String(syntax)) if !syntax.trim().is_empty() => {
                SmartDiagramBody::MermaidSyntax(syntax.clone())
            }
            _ => return Err(ResponseError::MissingMermaidSyntax),
        }
    } else {
        match root.get("diagramData") {
            Some(data @ Value::Object(_)) => {
                SmartDiagramBody::DiagramData(normalize_payload(data, ValidationMode::Full)?)
            }
            _ => return Err(ResponseError::MissingDiagramData),
        }
    };

    Ok(SmartDiagramResponse {
        suggested_type,
        explanation,
        body,
    })
}

fn is_justified(explanation: &str) -> bool {
    explanation.chars().count() >= MIN_SMART_EXPLANATION_CHARS
        && explanation.to_lowercase().contains(JUSTIFICATION_MARKER)
}

fn excerpt(value: Option<&Value>) -> String {
    let text = match value {
        None => return "undefined".to_owned(),
        Some(Value::String(text)) => text.clone(),
        Some(other) => other.to_string(),
    };
    if text.chars().count() <= EXCERPT_CHARS {
        return text;
    }
    let mut short: String = text.chars().take(EXCERPT_CHARS).collect();
    short.push('…');
    short
}
