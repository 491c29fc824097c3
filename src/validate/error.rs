// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Diagen-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Diagen and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use crate::model::DiagramType;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponseError {
    MalformedResponse {
        cause: MalformedCause,
    },
    UnexpectedShape {
        found: &'static str,
    },
    InvalidNode {
        index: usize,
        problem: NodeProblem,
    },
    InvalidEdge {
        index: usize,
        problem: EdgeProblem,
    },
    InvalidSuggestion {
        received: String,
        closest: Option<DiagramType>,
    },
    InvalidExplanation {
        received: String,
    },
    MissingMermaidSyntax,
    MissingDiagramData,
}

impl ResponseError {
    pub(crate) fn no_json_object() -> Self {
        Self::MalformedResponse {
            cause: MalformedCause::NoJsonObject,
        }
    }

    pub(crate) fn syntax(err: &serde_json::Error) -> Self {
        Self::MalformedResponse {
            cause: MalformedCause::Syntax {
                message: err.to_string(),
                line: err.line(),
                column: err.column(),
            },
        }
    }

    /// Index of the offending node or edge, when the failure is element-level.
    pub fn element_index(&self) -> Option<usize> {
        match self {
            Self::InvalidNode { index, .. } | Self::InvalidEdge { index, .. } => Some(*index),
            _ => None,
        }
    }
}

impl fmt::Display for ResponseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedResponse { cause } => write!(f, "malformed model response: {cause}"),
            Self::UnexpectedShape { found } => {
                write!(f, "expected a JSON object at the top level, found {found}")
            }
            Self::InvalidNode { index, problem } => write!(f, "node at index {index} {problem}"),
            Self::InvalidEdge { index, problem } => write!(f, "edge at index {index} {problem}"),
            Self::InvalidSuggestion { received, closest } => {
                write!(f, "invalid or missing 'suggestedDiagramType' (received {received})")?;
                if let Some(closest) = closest {
                    write!(f, "; did you mean '{closest}'?")?;
                }
                Ok(())
            }
            Self::InvalidExplanation { received } => write!(
                f,
                "invalid or missing 'explanation', or it lacks the 'Justification for Diagram Choice:' section (received {received})"
            ),
            Self::MissingMermaidSyntax => {
                f.write_str("'mermaidSyntax' must be a non-empty string for a Mermaid mind map")
            }
            Self::MissingDiagramData => {
                f.write_str("'diagramData' object is required for interactive diagrams")
            }
        }
    }
}

impl std::error::Error for ResponseError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MalformedCause {
    NoJsonObject,
    Syntax {
        message: String,
        line: usize,
        column: usize,
    },
}

impl fmt::Display for MalformedCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoJsonObject => f.write_str("no JSON object structure found"),
            Self::Syntax { message, .. } => write!(f, "invalid JSON: {message}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeProblem {
    NotAnObject { found: &'static str },
    InvalidId { received: String },
    DuplicateId { id: String },
    InvalidData { received: String },
    InvalidPosition { received: String },
    InvalidCoordinates { x: String, y: String },
}

impl fmt::Display for NodeProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotAnObject { found } => write!(f, "is not an object (found {found})"),
            Self::InvalidId { received } => {
                write!(f, "has invalid or empty 'id' (received {received})")
            }
            Self::DuplicateId { id } => write!(f, "repeats node id '{id}'"),
            Self::InvalidData { received } => {
                write!(f, "has invalid 'data' object (received {received})")
            }
            Self::InvalidPosition { received } => {
                write!(f, "has invalid 'position' object (received {received})")
            }
            Self::InvalidCoordinates { x, y } => write!(
                f,
                "has invalid 'position.x' or 'position.y' (received x: {x}, y: {y})"
            ),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeField {
    Id,
    Source,
    Target,
}

impl EdgeField {
    pub fn name(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Source => "source",
            Self::Target => "target",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EdgeProblem {
    NotAnObject { found: &'static str },
    InvalidField { field: EdgeField, received: String },
    DuplicateId { id: String },
    UnknownSource { node_id: String },
    UnknownTarget { node_id: String },
    NoNodesDefined,
}

impl fmt::Display for EdgeProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotAnObject { found } => write!(f, "is not an object (found {found})"),
            Self::InvalidField { field, received } => write!(
                f,
                "has invalid or empty '{}' (received {received})",
                field.name()
            ),
            Self::DuplicateId { id } => write!(f, "repeats edge id '{id}'"),
            Self::UnknownSource { node_id } => {
                write!(f, "refers to a non-existent source node ID: '{node_id}'")
            }
            Self::UnknownTarget { node_id } => {
                write!(f, "refers to a non-existent target node ID: '{node_id}'")
            }
            Self::NoNodesDefined => f.write_str("exists but no nodes are defined"),
        }
    }
}
