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
use crate::model::{MermaidDiagram, MINDMAP_KEYWORD};

/// Explanations shorter than this cannot contain the required sections.
pub const MIN_MERMAID_EXPLANATION_CHARS: usize = 50;

pub const INVALID_MERMAID_SYNTAX: &str =
    "mindmap\n  root((Error))\n    AI returned invalid Mermaid syntax.";

pub const MISSING_EXPLANATION: &str = "Title: Error in Explanation
Introduction: The AI did not provide a valid structured explanation.
Main Explanation:
  Content Missing: The detailed breakdown is unavailable.
Diagram Description: The diagram might be present but its explanation is missing.
Real-World Example or Analogy: Not available.
Summary:
  - Explanation generation failed.
Quiz Questions:
  1. Was the explanation generated correctly? (Answer: No)";

/// A mind-map reply after repair, with a note of what had to be replaced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MermaidValidation {
    pub diagram: MermaidDiagram,
    pub replaced_syntax: bool,
    pub replaced_explanation: bool,
}

impl MermaidValidation {
    pub fn was_repaired(&self) -> bool {
        self.replaced_syntax || self.replaced_explanation
    }
}

/// Parses a `{ "mermaidSyntax", "explanation" }` reply.
///
/// Only unparsable JSON fails; unusable fields are swapped for error placeholders so the
/// caller always has something to render.
pub fn parse_mermaid_response(text: &str) -> Result<MermaidValidation, ResponseError> {
    let value = parse_json(strip_fence(text))?;
    let Value::Object(root) = &value else {
        return Err(ResponseError::UnexpectedShape {
            found: json_type_name(&value),
        });
    };

    let (mermaid_syntax, replaced_syntax) = match root.get("mermaidSyntax") {
        Some(Value::String(syntax)) if starts_with_mindmap(syntax) => (syntax.clone(), false),
        _ => (INVALID_MERMAID_SYNTAX.to_owned(), true),
    };

    let (explanation, replaced_explanation) = match root.get("explanation") {
        Some(Value::String(text)) if text.chars().count() >= MIN_MERMAID_EXPLANATION_CHARS => {
            (text.clone(), false)
        }
        _ => (MISSING_EXPLANATION.to_owned(), true),
    };

    Ok(MermaidValidation {
        diagram: MermaidDiagram {
            mermaid_syntax,
            explanation: Some(explanation),
        },
        replaced_syntax,
        replaced_explanation,
    })
}

fn starts_with_mindmap(syntax: &str) -> bool {
    syntax
        .get(..MINDMAP_KEYWORD.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(MINDMAP_KEYWORD))
}

#[cfg(test)]
mod tests {
    use super::{parse_mermaid_response, INVALID_MERMAID_SYNTAX, MISSING_EXPLANATION};
    use crate::validate::{MalformedCause, ResponseError};

    const LONG_EXPLANATION: &str =
        "Title: Languages\nOverview: Learning a language pays off in several distinct ways.";

    #[test]
    fn accepts_fenced_mindmap_reply() {
        let text = format!(
            "```json\n{}\n```",
            serde_json::json!({
                "mermaidSyntax": "MindMap\n  root((Languages))",
                "explanation": LONG_EXPLANATION,
            })
        );
        let result = parse_mermaid_response(&text).unwrap();
        assert!(!result.was_repaired());
        assert_eq!(result.diagram.mermaid_syntax, "MindMap\n  root((Languages))");
        assert_eq!(result.diagram.explanation.as_deref(), Some(LONG_EXPLANATION));
    }

    #[test]
    fn replaces_markup_of_another_diagram_kind() {
        let text = serde_json::json!({
            "mermaidSyntax": "flowchart TD\n  A-->B",
            "explanation": LONG_EXPLANATION,
        })
        .to_string();
        let result = parse_mermaid_response(&text).unwrap();
        assert!(result.replaced_syntax);
        assert!(!result.replaced_explanation);
        assert_eq!(result.diagram.mermaid_syntax, INVALID_MERMAID_SYNTAX);
    }

    #[test]
    fn replaces_short_or_missing_explanation() {
        let short = r#"{"mermaidSyntax":"mindmap\n  root","explanation":"too short"}"#;
        let result = parse_mermaid_response(short).unwrap();
        assert!(result.replaced_explanation);
        assert_eq!(result.diagram.explanation.as_deref(), Some(MISSING_EXPLANATION));

        let missing = r#"{"mermaidSyntax":"mindmap\n  root"}"#;
        assert!(parse_mermaid_response(missing).unwrap().replaced_explanation);
    }

    #[test]
    fn syntax_errors_are_malformed() {
        let err = parse_mermaid_response("{\"mermaidSyntax\": ").unwrap_err();
        assert!(matches!(
            err,
            ResponseError::MalformedResponse {
                cause: MalformedCause::Syntax { .. }
            }
        ));
    }

    #[test]
    fn non_object_reply_is_unexpected_shape() {
        let err = parse_mermaid_response("[1, 2]").unwrap_err();
        assert_eq!(err, ResponseError::UnexpectedShape { found: "array" });
    }
}
