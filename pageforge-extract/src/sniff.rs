//! Content-sniffing recovery.
//!
//! When no marker strategy matched, the raw text is searched directly for
//! things that look like an HTML document, CSS rules, or JavaScript
//! statements. The detection is keyword-level on purpose: the input is
//! free-form model prose, and a full language parse buys nothing when the
//! goal is to salvage *something* runnable. Expect both under- and
//! over-matching on adversarial text.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::files::SourceFile;

/// Separator placed between disjoint sniffed fragments of the same kind.
pub(crate) const CSS_SEPARATOR: &str = "\n\n/* --- */\n\n";
pub(crate) const JS_SEPARATOR: &str = "\n\n// ---\n\n";

static HTML_DOCUMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)<!DOCTYPE html[\s\S]*?</html>").unwrap());

// A <style> element, or a bare rule opening with a selector-looking token.
static CSS_BLOCK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)(?:<style>[\s\S]*?</style>|(?:^|\n)(?:body|\.[\w-]+|#[\w-]+)[\s\S]*?\{[\s\S]*?\})")
        .unwrap()
});

// A <script> element, or the start of a statement-looking run of text.
static JS_START: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"<script>[\s\S]*?</script>|\b(?:function|const|let|var)\b|document\.addEventListener")
        .unwrap()
});

static STYLE_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"</?style>").unwrap());
static SCRIPT_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"</?script>").unwrap());

/// Search raw text for HTML/CSS/JS content and name whatever is found.
///
/// Each recognized kind contributes at most one file; disjoint fragments of
/// one kind are concatenated in discovery order.
pub(crate) fn recover(text: &str) -> Vec<SourceFile> {
    let mut files = Vec::new();

    if let Some(found) = HTML_DOCUMENT.find(text) {
        files.push(SourceFile::new("index.html", found.as_str()));
    }

    let css_blocks: Vec<&str> = CSS_BLOCK.find_iter(text).map(|m| m.as_str()).collect();
    if !css_blocks.is_empty() {
        let joined = css_blocks.join(CSS_SEPARATOR);
        let css = STYLE_TAG.replace_all(&joined, "").trim().to_string();
        if !css.is_empty() {
            files.push(SourceFile::new("style.css", css));
        }
    }

    let js_blocks = statement_blocks(text);
    if !js_blocks.is_empty() {
        let joined = js_blocks.join(JS_SEPARATOR);
        let js = SCRIPT_TAG.replace_all(&joined, "").trim().to_string();
        if !js.is_empty() {
            files.push(SourceFile::new("script.js", js));
        }
    }

    files
}

/// Collect `<script>` spans and bare statement runs, left to right.
///
/// A bare run starts at a statement keyword and extends to the next blank
/// line, to a line opening with a capital letter (prose, most of the time),
/// or to the end of the text.
fn statement_blocks(text: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut at = 0;
    while at <= text.len() {
        let Some(found) = JS_START.find_at(text, at) else {
            break;
        };
        if found.as_str().starts_with("<script>") {
            blocks.push(found.as_str().to_string());
            at = found.end();
        } else {
            let end = statement_end(text, found.end());
            blocks.push(text[found.start()..end].to_string());
            at = end.max(found.end());
        }
    }
    blocks
}

fn statement_end(text: &str, from: usize) -> usize {
    let bytes = text.as_bytes();
    let mut i = from;
    while i < bytes.len() {
        if bytes[i] == b'\n' {
            if i + 1 >= bytes.len() || bytes[i + 1] == b'\n' || bytes[i + 1].is_ascii_uppercase() {
                return i;
            }
        }
        i += 1;
    }
    bytes.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::files::FileKind;

    #[test]
    fn recovers_a_full_html_document() {
        let text = "Sure! Here is your page:\n<!DOCTYPE html>\n<html><body>hi</body></html>\nEnjoy.";
        let files = recover(text);
        assert_eq!(files[0].name, "index.html");
        assert!(files[0].content.starts_with("<!DOCTYPE html"));
        assert!(files[0].content.ends_with("</html>"));
    }

    #[test]
    fn recovers_bare_css_rules() {
        let text = "Some styling:\n.card {\n  color: red;\n}\n";
        let files = recover(text);
        let css = files.iter().find(|f| f.kind == FileKind::Css).unwrap();
        assert!(css.content.contains(".card"));
        assert!(css.content.contains("color: red;"));
    }

    #[test]
    fn concatenates_disjoint_script_blocks() {
        let text = "<script>let a = 1;</script>\nAnd then:\n<script>let b = 2;</script>";
        let files = recover(text);
        let js = files.iter().find(|f| f.kind == FileKind::Js).unwrap();
        assert!(js.content.contains("let a = 1;"));
        assert!(js.content.contains("let b = 2;"));
        assert!(js.content.contains("// ---"));
        assert!(!js.content.contains("<script>"));
    }

    #[test]
    fn statement_run_stops_at_blank_line() {
        let text = "const x = 1;\nx += 1;\n\nThis paragraph is prose.";
        let files = recover(text);
        let js = files.iter().find(|f| f.kind == FileKind::Js).unwrap();
        assert_eq!(js.content, "const x = 1;\nx += 1;");
    }

    #[test]
    fn plain_prose_yields_nothing() {
        let files = recover("I could not produce anything useful this time.");
        assert!(files.is_empty());
    }
}
