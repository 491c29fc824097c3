// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Diagen-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Diagen and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Core data model.
//!
//! A generation request yields either an interactive node/edge payload or Mermaid markup;
//! both carry an optional educational explanation.

pub mod catalog;
pub mod icon;
pub mod payload;
pub mod response;

pub use catalog::{
    DiagramFamily, DiagramModule, DiagramStyle, DiagramType, ParseDiagramTypeError,
    DEFAULT_PROMPT_CODE, DEFAULT_PROMPT_MERMAID, DEFAULT_PROMPT_TEXT,
};
pub use icon::{icon_glyph, icon_keywords, is_known_icon, DEFAULT_ICON_GLYPH};
pub use payload::{DiagramPayload, EdgeRecord, NodeData, NodeKind, NodeRecord, Position};
pub use response::{
    error_payload, DiagramResponse, MermaidDiagram, SmartDiagramBody, SmartDiagramResponse,
    MINDMAP_KEYWORD,
};

/// JSON Schema of the values a successful generation can produce.
pub fn response_json_schema() -> schemars::Schema {
    schemars::schema_for!(DiagramResponse)
}

/// JSON Schema of the smart-selection result.
pub fn smart_response_json_schema() -> schemars::Schema {
    schemars::schema_for!(SmartDiagramResponse)
}
