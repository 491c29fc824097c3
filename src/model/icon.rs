// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Diagen-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Diagen and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Icon keyword vocabulary the model is asked to pick from.

const ICONS: &[(&str, &str)] = &[
    ("user", "👤"),
    ("database", "💾"),
    ("settings", "⚙️"),
    ("document", "📄"),
    ("time", "⏰"),
    ("idea", "💡"),
    ("process", "🔄"),
    ("warning", "⚠️"),
    ("code", "💻"),
    ("server", "🖥️"),
    ("cloud", "☁️"),
    ("check", "✔️"),
    ("error", "❌"),
    ("gear", "⚙️"),
    ("lightbulb", "💡"),
    ("folder", "📁"),
    ("message", "✉️"),
    ("chart", "📊"),
    ("payment", "💳"),
    ("security", "🛡️"),
    ("play", "▶️"),
    ("flag", "🚩"),
];

pub const DEFAULT_ICON_GLYPH: &str = "🧩";

pub fn icon_keywords() -> impl Iterator<Item = &'static str> {
    ICONS.iter().map(|(keyword, _)| *keyword)
}

pub fn is_known_icon(keyword: &str) -> bool {
    lookup(keyword).is_some()
}

/// Glyph for a keyword; unknown keywords get [`DEFAULT_ICON_GLYPH`].
pub fn icon_glyph(keyword: &str) -> &'static str {
    lookup(keyword).unwrap_or(DEFAULT_ICON_GLYPH)
}

fn lookup(keyword: &str) -> Option<&'static str> {
    let keyword = keyword.trim();
    ICONS
        .iter()
        .find(|(known, _)| known.eq_ignore_ascii_case(keyword))
        .map(|(_, glyph)| *glyph)
}
