//! External-reference stripping.
//!
//! Generated entry documents routinely link their companion files
//! (`<link href="style.css">`, `<script src="script.js">`) and sometimes the
//! runtime CDN itself. All of that content gets re-injected inline during
//! assembly, so the original tags must go or the preview would load
//! everything twice.

use once_cell::sync::Lazy;
use regex::Regex;

static CSS_LINK_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"<link[^>]*href="[^"]*\.css"[^>]*>"#).unwrap());

static JS_SCRIPT_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"<script[^>]*src="[^"]*\.js"[^>]*></script>"#).unwrap());

static CDN_SCRIPT_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"<script[^>]*src="https?://unpkg\.com[^"]*"[^>]*></script>"#).unwrap());

/// Remove stylesheet links, local script tags and runtime-CDN script tags
/// from entry-document markup.
pub(crate) fn strip_external_references(markup: &str) -> String {
    let markup = CSS_LINK_TAG.replace_all(markup, "");
    let markup = JS_SCRIPT_TAG.replace_all(&markup, "");
    let markup = CDN_SCRIPT_TAG.replace_all(&markup, "");
    markup.into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_stylesheet_links() {
        let markup = r#"<head><link rel="stylesheet" href="style.css"></head>"#;
        assert_eq!(strip_external_references(markup), "<head></head>");
    }

    #[test]
    fn strips_local_script_tags() {
        let markup = r#"<body><script src="script.js"></script></body>"#;
        assert_eq!(strip_external_references(markup), "<body></body>");
    }

    #[test]
    fn strips_cdn_script_tags() {
        let markup = r#"<script crossorigin src="https://unpkg.com/react@18/umd/react.development.js"></script>"#;
        assert_eq!(strip_external_references(markup), "");
    }

    #[test]
    fn leaves_inline_scripts_alone() {
        let markup = "<script>console.log(1);</script>";
        assert_eq!(strip_external_references(markup), markup);
    }
}
