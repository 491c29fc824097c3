// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Diagen-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Diagen and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Normalized node/edge payload produced from model output.
//!
//! Field names serialize to the camelCase wire shape the model is asked to emit, so a
//! validated payload can be handed straight to a graph UI.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
pub struct DiagramPayload {
    pub nodes: Vec<NodeRecord>,
    pub edges: Vec<EdgeRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

impl DiagramPayload {
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }

    pub fn node(&self, id: &str) -> Option<&NodeRecord> {
        self.nodes.iter().find(|node| node.id == id)
    }

    pub fn with_explanation(mut self, explanation: impl Into<String>) -> Self {
        self.explanation = Some(explanation.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct NodeRecord {
    pub id: String,
    pub data: NodeData,
    pub position: Position,
    #[serde(rename = "type", default, skip_serializing_if = "NodeKind::is_default")]
    pub kind: NodeKind,
}

impl NodeRecord {
    pub fn new(id: impl Into<String>, label: impl Into<String>, position: Position) -> Self {
        Self {
            id: id.into(),
            data: NodeData {
                label: label.into(),
                icon_keyword: None,
            },
            position,
            kind: NodeKind::Default,
        }
    }

    pub fn with_icon(mut self, keyword: impl Into<String>) -> Self {
        self.data.icon_keyword = Some(keyword.into());
        self
    }

    pub fn with_kind(mut self, kind: NodeKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn label(&self) -> &str {
        &self.data.label
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct NodeData {
    pub label: String,
    #[serde(rename = "iconKeyword", default, skip_serializing_if = "Option::is_none")]
    pub icon_keyword: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Start/end marker on a node; anything else renders as a plain node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Input,
    Output,
    #[default]
    Default,
}

impl NodeKind {
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "input" => Self::Input,
            "output" => Self::Output,
            _ => Self::Default,
        }
    }

    pub fn is_default(&self) -> bool {
        matches!(self, Self::Default)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct EdgeRecord {
    pub id: String,
    pub source: String,
    pub target: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl EdgeRecord {
    pub fn new(id: impl Into<String>, source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            source: source.into(),
            target: target.into(),
            label: None,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}
