// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Diagen-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Diagen and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Element-by-element normalization of a parsed node/edge payload.
//!
//! Absent or non-array `nodes`/`edges` mean "nothing to show" and normalize to empty lists.
//! A malformed *element* is always an error: it must not be rendered as if it were valid.

use std::collections::HashSet;

use serde_json::{Map, Value};

use super::error::{EdgeField, EdgeProblem, NodeProblem, ResponseError};
use super::extract::json_type_name;
use super::ValidationMode;
use crate::model::{DiagramPayload, EdgeRecord, NodeData, NodeKind, NodeRecord, Position};

const DEFAULT_EXPLANATION: &str = "No explanation provided by AI in the expected format.";

pub fn normalize_payload(
    value: &Value,
    mode: ValidationMode,
) -> Result<DiagramPayload, ResponseError> {
    let Value::Object(root) = value else {
        return Err(ResponseError::UnexpectedShape {
            found: json_type_name(value),
        });
    };

    let nodes = match root.get("nodes") {
        Some(Value::Array(items)) => normalize_nodes(items)?,
        _ => Vec::new(),
    };

    let edges = match root.get("edges") {
        Some(Value::Array(items)) => normalize_edges(items, &nodes, mode)?,
        _ => Vec::new(),
    };

    let explanation = root.get("explanation").map(|value| match value {
        Value::String(text) => text.clone(),
        other if is_falsy(other) => DEFAULT_EXPLANATION.to_owned(),
        other => stringify(other),
    });

    Ok(DiagramPayload {
        nodes,
        edges,
        explanation,
    })
}

fn normalize_nodes(items: &[Value]) -> Result<Vec<NodeRecord>, ResponseError> {
    let mut seen = HashSet::with_capacity(items.len());
    let mut nodes = Vec::with_capacity(items.len());

    for (index, item) in items.iter().enumerate() {
        let node =
            normalize_node(item).map_err(|problem| ResponseError::InvalidNode { index, problem })?;
        if !seen.insert(node.id.clone()) {
            return Err(ResponseError::InvalidNode {
                index,
                problem: NodeProblem::DuplicateId { id: node.id },
            });
        }
        nodes.push(node);
    }

    Ok(nodes)
}

fn normalize_node(item: &Value) -> Result<NodeRecord, NodeProblem> {
    let Value::Object(node) = item else {
        return Err(NodeProblem::NotAnObject {
            found: json_type_name(item),
        });
    };

    let id = non_blank_str(node.get("id")).ok_or_else(|| NodeProblem::InvalidId {
        received: describe(node.get("id")),
    })?;

    let Some(Value::Object(data)) = node.get("data") else {
        return Err(NodeProblem::InvalidData {
            received: describe(node.get("data")),
        });
    };

    let label = match data.get("label") {
        Some(Value::String(label)) => label.clone(),
        Some(other) if !is_falsy(other) => stringify(other),
        _ => id.to_owned(),
    };

    let icon_keyword = match data.get("iconKeyword") {
        Some(Value::String(keyword)) => Some(keyword.clone()),
        _ => None,
    };

    let Some(Value::Object(position)) = node.get("position") else {
        return Err(NodeProblem::InvalidPosition {
            received: describe(node.get("position")),
        });
    };
    let position = normalize_position(position)?;

    let kind = match node.get("type") {
        Some(Value::String(tag)) => NodeKind::from_tag(tag),
        _ => NodeKind::Default,
    };

    Ok(NodeRecord {
        id: id.to_owned(),
        data: NodeData {
            label,
            icon_keyword,
        },
        position,
        kind,
    })
}

fn normalize_position(position: &Map<String, Value>) -> Result<Position, NodeProblem> {
    let x = position.get("x");
    let y = position.get("y");

    match (coordinate(x), coordinate(y)) {
        (Some(x), Some(y)) => Ok(Position::new(x, y)),
        _ => Err(NodeProblem::InvalidCoordinates {
            x: describe(x),
            y: describe(y),
        }),
    }
}

/// A finite coordinate from a JSON number or a numeric-prefixed string.
fn coordinate(value: Option<&Value>) -> Option<f64> {
    let parsed = match value? {
        Value::Number(number) => number.as_f64()?,
        Value::String(text) => parse_float_prefix(text)?,
        _ => return None,
    };
    parsed.is_finite().then_some(parsed)
}

/// Parses the longest leading decimal literal of `text`, ignoring leading whitespace and any
/// trailing garbage (`"12px"` is `12`).
pub(crate) fn parse_float_prefix(text: &str) -> Option<f64> {
    let text = text.trim_start();
    let bytes = text.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }

    let int_start = end;
    while bytes.get(end).is_some_and(u8::is_ascii_digit) {
        end += 1;
    }
    let mut digits = end - int_start;

    if bytes.get(end) == Some(&b'.') {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while bytes.get(frac_end).is_some_and(u8::is_ascii_digit) {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if digits > 0 {
            end = frac_end;
        }
    }

    if digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while bytes.get(exp_end).is_some_and(u8::is_ascii_digit) {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    text[..end].parse().ok()
}

fn normalize_edges(
    items: &[Value],
    nodes: &[NodeRecord],
    mode: ValidationMode,
) -> Result<Vec<EdgeRecord>, ResponseError> {
    let node_ids: HashSet<&str> = nodes.iter().map(|node| node.id.as_str()).collect();
    let mut seen = HashSet::with_capacity(items.len());
    let mut edges = Vec::with_capacity(items.len());

    for (index, item) in items.iter().enumerate() {
        let edge = normalize_edge(item, &node_ids, mode)
            .map_err(|problem| ResponseError::InvalidEdge { index, problem })?;
        if !seen.insert(edge.id.clone()) {
            return Err(ResponseError::InvalidEdge {
                index,
                problem: EdgeProblem::DuplicateId { id: edge.id },
            });
        }
        edges.push(edge);
    }

    Ok(edges)
}

fn normalize_edge(
    item: &Value,
    node_ids: &HashSet<&str>,
    mode: ValidationMode,
) -> Result<EdgeRecord, EdgeProblem> {
    let Value::Object(edge) = item else {
        return Err(EdgeProblem::NotAnObject {
            found: json_type_name(item),
        });
    };

    let id = edge_field(edge, EdgeField::Id)?;
    let source = edge_field(edge, EdgeField::Source)?;
    let target = edge_field(edge, EdgeField::Target)?;

    if mode.checks_references() {
        if node_ids.is_empty() {
            return Err(EdgeProblem::NoNodesDefined);
        }
        if !node_ids.contains(source) {
            return Err(EdgeProblem::UnknownSource {
                node_id: source.to_owned(),
            });
        }
        if !node_ids.contains(target) {
            return Err(EdgeProblem::UnknownTarget {
                node_id: target.to_owned(),
            });
        }
    }

    let label = match edge.get("label") {
        None => None,
        Some(Value::String(label)) => Some(label.clone()),
        Some(other) => Some(stringify(other)),
    };

    Ok(EdgeRecord {
        id: id.to_owned(),
        source: source.to_owned(),
        target: target.to_owned(),
        label,
    })
}

fn edge_field(edge: &Map<String, Value>, field: EdgeField) -> Result<&str, EdgeProblem> {
    let value = edge.get(field.name());
    non_blank_str(value).ok_or_else(|| EdgeProblem::InvalidField {
        field,
        received: describe(value),
    })
}

/// The string value, unless it is missing, not a string, or blank after trimming.
fn non_blank_str(value: Option<&Value>) -> Option<&str> {
    match value {
        Some(Value::String(text)) if !text.trim().is_empty() => Some(text),
        _ => None,
    }
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(flag) => !flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n == 0.0),
        Value::String(text) => text.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

/// Text form of a value that should have been a string.
fn stringify(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

/// Received value as shown in error messages.
fn describe(value: Option<&Value>) -> String {
    match value {
        None => "undefined".to_owned(),
        Some(Value::String(text)) => format!("{text:?}"),
        Some(other) => other.to_string(),
    }
}
