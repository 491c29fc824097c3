// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Diagen-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Diagen and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Locating the JSON text inside a free-form model reply.

use std::sync::OnceLock;

use regex::Regex;
use serde_json::Value;

use super::error::ResponseError;

static FENCE: OnceLock<Regex> = OnceLock::new();

fn fence_regex() -> &'static Regex {
    FENCE.get_or_init(|| {
        Regex::new(r"(?s)^```(\w*)?\s*\n?(.*?)\n?\s*```$").expect("valid fence pattern")
    })
}

/// Trims `text` and unwraps a single fenced block spanning all of it.
///
/// A fence with an empty body is left in place.
pub fn strip_fence(text: &str) -> &str {
    let trimmed = text.trim();
    match fence_regex().captures(trimmed).and_then(|caps| caps.get(2)) {
        Some(body) if !body.as_str().is_empty() => body.as_str().trim(),
        _ => trimmed,
    }
}

/// The substring from the first `{` to the last `}`, inclusive.
pub fn json_object_candidate(text: &str) -> Option<&str> {
    let bytes = text.as_bytes();
    let start = memchr::memchr(b'{', bytes)?;
    let end = memchr::memrchr(b'}', bytes)?;
    if end < start {
        return None;
    }
    // Both delimiters are ASCII, so the byte offsets are char boundaries.
    Some(&text[start..=end])
}

pub(crate) fn parse_json(text: &str) -> Result<Value, ResponseError> {
    serde_json::from_str(text).map_err(|err| ResponseError::syntax(&err))
}

/// Short name of a JSON value's type, for error messages.
pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
