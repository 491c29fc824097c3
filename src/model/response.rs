// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Diagen-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Diagen and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::catalog::{DiagramModule, DiagramType};
use super::payload::{DiagramPayload, NodeRecord, Position};

/// Keyword every accepted mind-map markup starts with (case-insensitive).
pub const MINDMAP_KEYWORD: &str = "mindmap";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct MermaidDiagram {
    #[serde(rename = "mermaidSyntax")]
    pub mermaid_syntax: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

impl MermaidDiagram {
    /// A mind map with a single `Error` root listing the given detail lines.
    pub fn error_placeholder<'a>(
        details: impl IntoIterator<Item = &'a str>,
        explanation: impl Into<String>,
    ) -> Self {
        let mut syntax = format!("{MINDMAP_KEYWORD}\n  root((Error))");
        for detail in details {
            syntax.push_str("\n    ");
            syntax.push_str(detail);
        }
        Self {
            mermaid_syntax: syntax,
            explanation: Some(explanation.into()),
        }
    }
}

/// One generated diagram, shaped by its kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum DiagramResponse {
    Interactive(DiagramPayload),
    Mermaid(MermaidDiagram),
}

impl DiagramResponse {
    pub fn explanation(&self) -> Option<&str> {
        match self {
            Self::Interactive(payload) => payload.explanation.as_deref(),
            Self::Mermaid(diagram) => diagram.explanation.as_deref(),
        }
    }

    pub fn as_interactive(&self) -> Option<&DiagramPayload> {
        match self {
            Self::Interactive(payload) => Some(payload),
            Self::Mermaid(_) => None,
        }
    }

    pub fn as_mermaid(&self) -> Option<&MermaidDiagram> {
        match self {
            Self::Mermaid(diagram) => Some(diagram),
            Self::Interactive(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub enum SmartDiagramBody {
    #[serde(rename = "diagramData")]
    DiagramData(DiagramPayload),
    #[serde(rename = "mermaidSyntax")]
    MermaidSyntax(String),
}

/// Result of letting the model pick the diagram type itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SmartDiagramResponse {
    #[serde(rename = "suggestedDiagramType")]
    pub suggested_type: DiagramType,
    pub explanation: String,
    #[serde(flatten)]
    pub body: SmartDiagramBody,
}

impl SmartDiagramResponse {
    /// Error response shown in place of a smart diagram: a mind map for text input,
    /// a single error node for code input.
    pub fn error_placeholder(module: DiagramModule, explanation: impl Into<String>) -> Self {
        let (suggested_type, body) = match module {
            DiagramModule::Code => (
                DiagramType::ControlFlowGraph,
                SmartDiagramBody::DiagramData(DiagramPayload {
                    nodes: vec![error_node("err-smart", "Error generating diagram")],
                    edges: Vec::new(),
                    explanation: None,
                }),
            ),
            DiagramModule::Text => (
                DiagramType::MermaidMindMap,
                SmartDiagramBody::MermaidSyntax(format!(
                    "{MINDMAP_KEYWORD}\n  root((Error))\n    Smart Diagram Generation Failed"
                )),
            ),
        };

        Self {
            suggested_type,
            explanation: explanation.into(),
            body,
        }
    }

    pub fn into_response(self) -> DiagramResponse {
        match self.body {
            SmartDiagramBody::DiagramData(mut payload) => {
                payload.explanation = Some(self.explanation);
                DiagramResponse::Interactive(payload)
            }
            SmartDiagramBody::MermaidSyntax(mermaid_syntax) => {
                DiagramResponse::Mermaid(MermaidDiagram {
                    mermaid_syntax,
                    explanation: Some(self.explanation),
                })
            }
        }
    }
}

/// Single-node payload used when an interactive diagram could not be produced.
pub fn error_payload(message: impl Into<String>) -> DiagramPayload {
    DiagramPayload {
        nodes: vec![error_node("err-generate", "Error generating diagram")],
        edges: Vec::new(),
        explanation: Some(message.into()),
    }
}

fn error_node(id: &str, label: &str) -> NodeRecord {
    NodeRecord::new(id, label, Position::new(50.0, 50.0)).with_icon("error")
}
