// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Diagen-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Diagen and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use serde::Serialize;

use crate::model::{DiagramModule, DiagramStyle, DiagramType};

pub const JSON_MIME_TYPE: &str = "application/json";

/// Sampling parameters sent with a generation request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationSettings {
    pub response_mime_type: &'static str,
    pub temperature: f32,
    pub top_p: f32,
    pub top_k: u32,
}

impl GenerationSettings {
    const fn json(temperature: f32, top_k: u32) -> Self {
        Self {
            response_mime_type: JSON_MIME_TYPE,
            temperature,
            top_p: 0.9,
            top_k,
        }
    }

    /// Minimalist text diagrams get tighter sampling than everything else.
    pub fn interactive(ty: DiagramType, module: DiagramModule, style: DiagramStyle) -> Self {
        if is_minimalist(ty, module, style) {
            Self::json(0.15, 25)
        } else {
            Self::json(0.25, 45)
        }
    }

    pub fn mermaid_mind_map() -> Self {
        Self::json(0.2, 40)
    }

    pub fn smart_selection() -> Self {
        Self::json(0.35, 50)
    }
}

/// Text input, simple style, and a node/edge diagram.
pub(crate) fn is_minimalist(ty: DiagramType, module: DiagramModule, style: DiagramStyle) -> bool {
    module == DiagramModule::Text && style == DiagramStyle::Simple && !ty.is_mermaid()
}
