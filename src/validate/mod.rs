// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Diagen-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Diagen and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Validation and normalization of model replies.
//!
//! Every function here is a pure transformation of its input text: no I/O, no logging.
//! Anything returned satisfies the payload invariants; anything else is a [`ResponseError`]
//! naming the offending element, field and received value.

mod error;
mod extract;
mod mermaid;
mod normalize;
mod smart;

#[cfg(test)]
mod tests;

pub use error::{EdgeField, EdgeProblem, MalformedCause, NodeProblem, ResponseError};
pub use extract::{json_object_candidate, strip_fence};
pub use mermaid::{
    parse_mermaid_response, MermaidValidation, INVALID_MERMAID_SYNTAX, MISSING_EXPLANATION,
    MIN_MERMAID_EXPLANATION_CHARS,
};
pub use normalize::normalize_payload;
pub use smart::{parse_smart_response, JUSTIFICATION_MARKER, MIN_SMART_EXPLANATION_CHARS};

use crate::model::DiagramPayload;

/// How much of a payload to check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValidationMode {
    /// Element checks plus edge-to-node reference checks.
    #[default]
    Full,
    /// Element checks only. Used for fragments validated apart from the nodes their edges
    /// will eventually point at.
    ShapeOnly,
}

impl ValidationMode {
    pub fn checks_references(self) -> bool {
        matches!(self, Self::Full)
    }
}

/// Extracts, parses and normalizes a node/edge payload from raw model text.
pub fn parse_diagram_payload(
    text: &str,
    mode: ValidationMode,
) -> Result<DiagramPayload, ResponseError> {
    let candidate =
        json_object_candidate(strip_fence(text)).ok_or_else(ResponseError::no_json_object)?;
    let value = extract::parse_json(candidate)?;
    normalize_payload(&value, mode)
}
