// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Diagen-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Diagen and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Prompt, call, validate.
//!
//! [`DiagramBridge`] builds the prompt for a request, hands it to a [`TextGenerator`] once
//! and validates what comes back. Failures surface as [`BridgeError`]; nothing is retried.

mod error;
mod gemini;
mod generator;


pub use error::{BridgeError, BridgeResult};
pub use gemini::GeminiClient;
pub use generator::{GeneratedText, GenerationRequest, TextGenerator, FINISH_STOP};

use crate::config::BridgeConfig;
use crate::model::{
    DiagramModule, DiagramPayload, DiagramResponse, DiagramStyle, DiagramType, MermaidDiagram,
    SmartDiagramResponse,
};
use crate::prompt::{
    interactive_diagram_prompt, mermaid_mind_map_prompt, smart_diagram_prompt, GenerationSettings,
};
use crate::validate::{
    parse_diagram_payload, parse_mermaid_response, parse_smart_response, ValidationMode,
};

/// Explanation attached to the empty payload returned for a blank reply.
pub const EMPTY_RESPONSE_EXPLANATION: &str = "AI returned an empty response.";

/// What to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagramRequest {
    /// A diagram of a caller-chosen type.
    Manual {
        ty: DiagramType,
        module: DiagramModule,
        style: DiagramStyle,
    },
    /// Let the model pick among the types offered for `module`.
    Smart { module: DiagramModule },
}

impl DiagramRequest {
    pub fn module(&self) -> DiagramModule {
        match self {
            Self::Manual { module, .. } | Self::Smart { module } => *module,
        }
    }
}

pub struct DiagramBridge<G> {
    generator: G,
    config: BridgeConfig,
}

impl DiagramBridge<GeminiClient> {
    /// Bridge backed by the Gemini REST client.
    pub fn gemini(config: BridgeConfig) -> BridgeResult<Self> {
        let client = GeminiClient::new(&config)?;
        Ok(Self::new(client, config))
    }
}

impl<G: TextGenerator> DiagramBridge<G> {
    pub fn new(generator: G, config: BridgeConfig) -> Self {
        Self { generator, config }
    }

    pub fn config(&self) -> &BridgeConfig {
        &self.config
    }

    pub fn generator(&self) -> &G {
        &self.generator
    }

    pub async fn generate(
        &self,
        input: &str,
        request: DiagramRequest,
    ) -> BridgeResult<DiagramResponse> {
        match request {
            DiagramRequest::Manual { ty, .. } if ty.is_mermaid() => self
                .generate_mermaid_mind_map(input)
                .await
                .map(DiagramResponse::Mermaid),
            DiagramRequest::Manual { ty, module, style } => self
                .generate_diagram(input, ty, module, style)
                .await
                .map(DiagramResponse::Interactive),
            DiagramRequest::Smart { module } => self
                .generate_smart_diagram(input, module)
                .await
                .map(SmartDiagramResponse::into_response),
        }
    }

    /// Node/edge diagram of the given type.
    pub async fn generate_diagram(
        &self,
        input: &str,
        ty: DiagramType,
        module: DiagramModule,
        style: DiagramStyle,
    ) -> BridgeResult<DiagramPayload> {
        let request = GenerationRequest {
            model: self.config.model_for(module).to_owned(),
            prompt: interactive_diagram_prompt(input, ty, module, style),
            settings: GenerationSettings::interactive(ty, module, style),
        };
        let generated = self.call(request, ty.name()).await?;

        if generated.is_blank() {
            if !generated.stopped_normally() {
                return Err(empty_response(generated));
            }
            tracing::warn!(diagram_type = ty.name(), "model returned an empty response");
            return Ok(DiagramPayload::default().with_explanation(EMPTY_RESPONSE_EXPLANATION));
        }

        Ok(parse_diagram_payload(&generated.text, ValidationMode::Full)?)
    }

    /// Mermaid mind map. Unusable markup or explanation is replaced, not rejected.
    pub async fn generate_mermaid_mind_map(&self, input: &str) -> BridgeResult<MermaidDiagram> {
        let request = GenerationRequest {
            model: self.config.text_model().to_owned(),
            prompt: mermaid_mind_map_prompt(input),
            settings: GenerationSettings::mermaid_mind_map(),
        };
        let generated = self.call(request, DiagramType::MermaidMindMap.name()).await?;
        if generated.is_blank() {
            return Err(empty_response(generated));
        }

        let validation = parse_mermaid_response(&generated.text)?;
        if validation.was_repaired() {
            tracing::warn!(
                replaced_syntax = validation.replaced_syntax,
                replaced_explanation = validation.replaced_explanation,
                "repaired mind map response"
            );
        }
        Ok(validation.diagram)
    }

    pub async fn generate_smart_diagram(
        &self,
        input: &str,
        module: DiagramModule,
    ) -> BridgeResult<SmartDiagramResponse> {
        let request = GenerationRequest {
            model: self.config.model_for(module).to_owned(),
            prompt: smart_diagram_prompt(input, module),
            settings: GenerationSettings::smart_selection(),
        };
        let generated = self.call(request, "smart").await?;
        if generated.is_blank() {
            return Err(empty_response(generated));
        }

        let smart = parse_smart_response(&generated.text, module)?;
        tracing::debug!(suggested = smart.suggested_type.name(), "smart selection");
        Ok(smart)
    }

    async fn call(&self, request: GenerationRequest, label: &str) -> BridgeResult<GeneratedText> {
        tracing::info!(
            generator = self.generator.name(),
            model = %request.model,
            diagram = label,
            prompt_chars = request.prompt.len(),
            "requesting diagram"
        );
        let generated = self.generator.generate(request).await?;
        tracing::debug!(
            response_chars = generated.text.len(),
            finish_reason = generated.finish_reason.as_deref().unwrap_or("none"),
            "model replied"
        );
        Ok(generated)
    }
}

fn empty_response(generated: GeneratedText) -> BridgeError {
    BridgeError::EmptyResponse {
        finish_reason: generated.finish_reason,
        finish_message: generated.finish_message,
    }
}
