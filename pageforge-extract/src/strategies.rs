//! Marker-recognition strategies.
//!
//! Model completions name their files in a handful of competing conventions:
//! a bold marker (`**index.html**`), a heading (`### style.css`), a label
//! (`script.js:`), a bare filename, or nothing but the fence's language hint.
//! Each convention is one strategy returning every `(name, body)` pair it can
//! find; the cascade in [`crate::extract`] commits to the first strategy that
//! produces an accepted file.
//!
//! Marker matching is case-sensitive; language hints and known extensions are
//! matched case-insensitively.

use once_cell::sync::Lazy;
use regex::Regex;

/// A raw `(name, code body)` pair as captured by one strategy.
///
/// Bodies are trimmed; names are not yet normalized.
pub(crate) type RawMatch = (String, String);

static BOLD_MARKER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\*\*([A-Za-z0-9_.-]+)\*\*\s*```(?:\w*\s*)?([\s\S]*?)```").unwrap()
});

static HEADING_MARKER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"#{1,3}\s*([A-Za-z0-9_.-]+)\s*```(?:\w*\s*)?([\s\S]*?)```").unwrap()
});

static LABEL_MARKER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([A-Za-z0-9_.-]+):\s*```(?:\w*\s*)?([\s\S]*?)```").unwrap()
});

static BARE_FILENAME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)([A-Za-z0-9_.-]+\.(?:html|css|js))\s*```(?:\w*\s*)?([\s\S]*?)```").unwrap()
});

static LANGUAGE_HINT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)```(html|css|javascript|js)\s*([\s\S]*?)```").unwrap());

/// The strategy cascade, in priority order.
pub(crate) const STRATEGIES: [(&str, fn(&str) -> Vec<RawMatch>); 5] = [
    ("bold-marker", bold_marker),
    ("heading-marker", heading_marker),
    ("label-marker", label_marker),
    ("bare-filename", bare_filename),
    ("language-hint", language_hint),
];

fn bold_marker(text: &str) -> Vec<RawMatch> {
    captures_to_matches(&BOLD_MARKER, text)
}

fn heading_marker(text: &str) -> Vec<RawMatch> {
    captures_to_matches(&HEADING_MARKER, text)
}

fn label_marker(text: &str) -> Vec<RawMatch> {
    captures_to_matches(&LABEL_MARKER, text)
}

fn bare_filename(text: &str) -> Vec<RawMatch> {
    captures_to_matches(&BARE_FILENAME, text)
}

/// Fences carrying only a language tag; the filename is synthesized from the
/// hint.
fn language_hint(text: &str) -> Vec<RawMatch> {
    LANGUAGE_HINT
        .captures_iter(text)
        .map(|caps| {
            (
                name_for_language(&caps[1]).to_string(),
                caps[2].trim().to_string(),
            )
        })
        .collect()
}

fn captures_to_matches(pattern: &Regex, text: &str) -> Vec<RawMatch> {
    pattern
        .captures_iter(text)
        .map(|caps| (caps[1].trim().to_string(), caps[2].trim().to_string()))
        .collect()
}

fn name_for_language(hint: &str) -> &'static str {
    match hint.to_ascii_lowercase().as_str() {
        "html" => "index.html",
        "css" => "style.css",
        _ => "script.js",
    }
}

/// Give an extensionless name a known extension when the name hints at one.
///
/// Names that already contain a dot pass through untouched; whether they end
/// in a recognized extension is decided by [`is_recognized_name`].
pub(crate) fn normalize_name(raw: &str) -> String {
    if raw.contains('.') {
        return raw.to_string();
    }
    let lower = raw.to_ascii_lowercase();
    if lower.contains("html") || lower.contains("index") {
        "index.html".to_string()
    } else if lower.contains("css") || lower.contains("style") {
        "style.css".to_string()
    } else if lower.contains("js") || lower.contains("script") {
        "script.js".to_string()
    } else {
        raw.to_string()
    }
}

/// Only files with one of the three runnable extensions are accepted from a
/// strategy pass.
pub(crate) fn is_recognized_name(name: &str) -> bool {
    name.ends_with(".html") || name.ends_with(".css") || name.ends_with(".js")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bold_marker_captures_name_and_body() {
        let text = "**index.html**\n```html\n<p>hi</p>\n```\n";
        let matches = bold_marker(text);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].0, "index.html");
        assert_eq!(matches[0].1, "<p>hi</p>");
    }

    #[test]
    fn heading_marker_accepts_one_to_three_hashes() {
        let text = "## style.css\n```css\nbody { margin: 0; }\n```";
        let matches = heading_marker(text);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].0, "style.css");
    }

    #[test]
    fn language_hint_synthesizes_names() {
        let text = "```HTML\n<p>a</p>\n```\n```js\nconsole.log(1);\n```";
        let matches = language_hint(text);
        assert_eq!(matches[0].0, "index.html");
        assert_eq!(matches[1].0, "script.js");
    }

    #[test]
    fn normalize_infers_extension_from_substring() {
        assert_eq!(normalize_name("MyStyles"), "style.css");
        assert_eq!(normalize_name("the-script"), "script.js");
        assert_eq!(normalize_name("HomePage-html"), "index.html");
        assert_eq!(normalize_name("index"), "index.html");
        // Dotted names pass through even when unrecognized.
        assert_eq!(normalize_name("readme.md"), "readme.md");
    }
}
