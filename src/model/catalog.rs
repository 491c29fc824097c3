// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Diagen-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Diagen and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! The closed set of diagram modules, styles and types offered to users.

use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub const DEFAULT_PROMPT_TEXT: &str = "Describe a simple login process: user enters credentials, system validates. If valid, redirect to dashboard. If invalid, show error message.";

pub const DEFAULT_PROMPT_MERMAID: &str = "Create a mind map about the key benefits of learning a new language: Personal Growth (Cultural Understanding, New Perspectives), Career Opportunities (Global Market, Higher Salary), Travel (Easier Communication, Deeper Experiences), Cognitive Benefits (Improved Memory, Problem Solving).";

pub const DEFAULT_PROMPT_CODE: &str = "function factorial(n) {
  if (n === 0) {
    return 1;
  } else {
    return n * factorial(n - 1);
  }
}";

/// What kind of input is being diagrammed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema)]
pub enum DiagramModule {
    #[default]
    #[serde(rename = "Text-to-Diagram")]
    Text,
    #[serde(rename = "Code-to-Diagram")]
    Code,
}

impl DiagramModule {
    pub fn name(self) -> &'static str {
        match self {
            Self::Text => "Text-to-Diagram",
            Self::Code => "Code-to-Diagram",
        }
    }

    /// How the input is referred to inside prompts.
    pub fn input_noun(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Code => "code snippet",
        }
    }

    pub fn default_prompt(self) -> &'static str {
        match self {
            Self::Text => DEFAULT_PROMPT_TEXT,
            Self::Code => DEFAULT_PROMPT_CODE,
        }
    }
}

impl fmt::Display for DiagramModule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema)]
pub enum DiagramStyle {
    #[default]
    Standard,
    Simple,
}

/// Grouping used when offering types for a module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagramFamily {
    General,
    Code,
    Simple,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema)]
pub enum DiagramType {
    #[serde(rename = "Flowchart")]
    Flowchart,
    #[serde(rename = "Mind Map")]
    MindMap,
    #[serde(rename = "Control Flow Graph")]
    ControlFlowGraph,
    #[serde(rename = "Basic Linear Flow")]
    BasicLinearFlow,
    #[serde(rename = "Simple Cause & Effect")]
    SimpleCauseEffect,
    #[serde(rename = "Concept Link Diagram")]
    ConceptLink,
    #[serde(rename = "Keyword Cluster")]
    KeywordCluster,
    #[serde(rename = "Mermaid Mind Map")]
    MermaidMindMap,
}

const TEXT_SMART_CANDIDATES: &[DiagramType] = &[
    DiagramType::Flowchart,
    DiagramType::MindMap,
    DiagramType::BasicLinearFlow,
    DiagramType::SimpleCauseEffect,
    DiagramType::ConceptLink,
    DiagramType::KeywordCluster,
    DiagramType::MermaidMindMap,
];

const CODE_SMART_CANDIDATES: &[DiagramType] = &[DiagramType::ControlFlowGraph];

impl DiagramType {
    pub const ALL: [DiagramType; 8] = [
        DiagramType::Flowchart,
        DiagramType::MindMap,
        DiagramType::ControlFlowGraph,
        DiagramType::BasicLinearFlow,
        DiagramType::SimpleCauseEffect,
        DiagramType::ConceptLink,
        DiagramType::KeywordCluster,
        DiagramType::MermaidMindMap,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Flowchart => "Flowchart",
            Self::MindMap => "Mind Map",
            Self::ControlFlowGraph => "Control Flow Graph",
            Self::BasicLinearFlow => "Basic Linear Flow",
            Self::SimpleCauseEffect => "Simple Cause & Effect",
            Self::ConceptLink => "Concept Link Diagram",
            Self::KeywordCluster => "Keyword Cluster",
            Self::MermaidMindMap => "Mermaid Mind Map",
        }
    }

    pub fn family(self) -> DiagramFamily {
        match self {
            Self::Flowchart | Self::MindMap => DiagramFamily::General,
            Self::ControlFlowGraph => DiagramFamily::Code,
            Self::BasicLinearFlow
            | Self::SimpleCauseEffect
            | Self::ConceptLink
            | Self::KeywordCluster
            | Self::MermaidMindMap => DiagramFamily::Simple,
        }
    }

    /// The module under which this type is listed in the type picker.
    pub fn module(self) -> DiagramModule {
        match self {
            Self::ControlFlowGraph => DiagramModule::Code,
            _ => DiagramModule::Text,
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Flowchart => "Visualize processes and decision trees (Interactive).",
            Self::MindMap => "Organize ideas and brainstorm (Interactive).",
            Self::ControlFlowGraph => "Visualize code execution paths (Interactive).",
            Self::BasicLinearFlow => "Show a simple sequence of steps (Interactive).",
            Self::SimpleCauseEffect => "Illustrate a direct cause and its effect (Interactive).",
            Self::ConceptLink => "Connect two concepts with a simple relationship (Interactive).",
            Self::KeywordCluster => {
                "A central keyword with related terms radiating outwards (Interactive)."
            }
            Self::MermaidMindMap => {
                "Generates a Mermaid.js mind map from text with an AI summary. Renders dynamically."
            }
        }
    }

    /// Mermaid types carry markup instead of a node/edge payload.
    pub fn is_mermaid(self) -> bool {
        matches!(self, Self::MermaidMindMap)
    }

    /// Types the model may pick from during smart selection.
    pub fn smart_candidates(module: DiagramModule) -> &'static [DiagramType] {
        match module {
            DiagramModule::Text => TEXT_SMART_CANDIDATES,
            DiagramModule::Code => CODE_SMART_CANDIDATES,
        }
    }

    /// The candidate whose name is most similar to `name`, if any is reasonably close.
    pub fn closest(name: &str, candidates: &[DiagramType]) -> Option<DiagramType> {
        let needle = name.trim().to_lowercase();
        if needle.is_empty() {
            return None;
        }

        candidates
            .iter()
            .map(|ty| {
                let haystack = ty.name().to_lowercase();
                (*ty, rapidfuzz::fuzz::ratio(needle.chars(), haystack.chars()))
            })
            .filter(|(_, ratio)| *ratio >= 0.7)
            .max_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(ty, _)| ty)
    }
}

impl fmt::Display for DiagramType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseDiagramTypeError {
    name: String,
}

impl ParseDiagramTypeError {
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for ParseDiagramTypeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown diagram type: {:?}", self.name)
    }
}

impl std::error::Error for ParseDiagramTypeError {}

impl FromStr for DiagramType {
    type Err = ParseDiagramTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|ty| ty.name() == s)
            .ok_or_else(|| ParseDiagramTypeError { name: s.to_owned() })
    }
}
