//! Document assembly.
//!
//! Pipeline: pick the entry document, concatenate stylesheets and scripts,
//! strip the entry's external references, then inject a head fragment
//! (viewport + baseline styles + concatenated CSS + runtime libraries) and a
//! body fragment (the concatenated script body inside the sandbox harness).
//!
//! Generated application code may use JSX, so the script body is emitted as
//! `text/babel` and the runtime trio (React, ReactDOM, Babel standalone) is
//! always injected for in-browser transpilation.

use pageforge_extract::{FileKind, SourceFile};

use crate::strip::strip_external_references;

const BASELINE_CSS: &str = include_str!("../assets/baseline.css");
const RUNTIME_HARNESS: &str = include_str!("../assets/harness.js");

// Substitution point for the concatenated script body inside the harness.
const APP_MARKER: &str = "/*__PAGEFORGE_APP__*/";

pub(crate) const CSS_SEPARATOR: &str = "\n\n/* --- */\n\n";
pub(crate) const JS_SEPARATOR: &str = "\n\n// ---\n\n";

const REACT_SRC: &str = "https://unpkg.com/react@18/umd/react.development.js";
const REACT_DOM_SRC: &str = "https://unpkg.com/react-dom@18/umd/react-dom.development.js";
const BABEL_SRC: &str = "https://unpkg.com/@babel/standalone/babel.min.js";

/// Combine a file set into one self-contained, sandboxable document.
///
/// Pure and total: the same file set always yields the identical string, and
/// degenerate sets (empty, or without a markup entry point) yield placeholder
/// documents rather than an error.
pub fn assemble(files: &[SourceFile]) -> String {
    if files.is_empty() {
        return empty_placeholder();
    }

    let Some(entry) = files.iter().find(|f| f.kind == FileKind::Html) else {
        return missing_entry_placeholder();
    };

    let stylesheet = concatenated(files, FileKind::Css, CSS_SEPARATOR);
    let script_body = concatenated(files, FileKind::Js, JS_SEPARATOR);

    let markup = strip_external_references(&entry.content);
    let head = head_fragment(&stylesheet);
    let body = body_fragment(&script_body);

    let markup = if markup.contains("</head>") {
        markup.replacen("</head>", &format!("{head}</head>"), 1)
    } else {
        format!("{head}{markup}")
    };

    if markup.contains("</body>") {
        markup.replacen("</body>", &format!("{body}</body>"), 1)
    } else {
        format!("{markup}{body}")
    }
}

fn concatenated(files: &[SourceFile], kind: FileKind, separator: &str) -> String {
    files
        .iter()
        .filter(|f| f.kind == kind)
        .map(|f| f.content.as_str())
        .collect::<Vec<_>>()
        .join(separator)
}

fn head_fragment(stylesheet: &str) -> String {
    format!(
        r#"
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<style>
{BASELINE_CSS}{CSS_SEPARATOR}{stylesheet}
</style>
<script crossorigin src="{REACT_SRC}"></script>
<script crossorigin src="{REACT_DOM_SRC}"></script>
<script src="{BABEL_SRC}"></script>
"#
    )
}

fn body_fragment(script_body: &str) -> String {
    let harness = RUNTIME_HARNESS.replace(APP_MARKER, script_body);
    format!("\n<script type=\"text/babel\">\n{harness}\n</script>\n")
}

fn empty_placeholder() -> String {
    r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>Preview</title>
</head>
<body>
    <main style="font-family: sans-serif; padding: 2rem; color: #555;">
        <h2>Preview area</h2>
        <p>Nothing has been generated yet.</p>
    </main>
</body>
</html>"#
        .to_string()
}

fn missing_entry_placeholder() -> String {
    r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>Preview</title>
</head>
<body>
    <main style="font-family: sans-serif; padding: 2rem; color: #555;">
        <h2>No entry document</h2>
        <p>The generated files contain no HTML entry point to preview.</p>
    </main>
</body>
</html>"#
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(name: &str, content: &str) -> SourceFile {
        SourceFile::new(name, content)
    }

    #[test]
    fn injects_before_existing_head_and_body_close() {
        let files = vec![file(
            "index.html",
            "<html><head><title>t</title></head><body><p>x</p></body></html>",
        )];
        let doc = assemble(&files);

        let style_at = doc.find("<style>").unwrap();
        let head_close = doc.find("</head>").unwrap();
        let harness_at = doc.find("text/babel").unwrap();
        let body_close = doc.find("</body>").unwrap();
        assert!(style_at < head_close);
        assert!(harness_at < body_close);
    }

    #[test]
    fn prepends_and_appends_when_markers_are_absent() {
        let files = vec![file("index.html", "<h1>bare fragment</h1>")];
        let doc = assemble(&files);

        assert!(doc.starts_with("\n<meta name=\"viewport\""));
        assert!(doc.trim_end().ends_with("</script>"));
        assert!(doc.contains("<h1>bare fragment</h1>"));
    }

    #[test]
    fn entry_is_the_first_html_file() {
        let files = vec![
            file("style.css", "p { }"),
            file("a.html", "<body>first</body>"),
            file("b.html", "<body>second</body>"),
        ];
        let doc = assemble(&files);
        assert!(doc.contains("first"));
        assert!(!doc.contains("second"));
    }

    #[test]
    fn runtime_trio_is_always_referenced() {
        let files = vec![file("index.html", "<body></body>")];
        let doc = assemble(&files);
        assert!(doc.contains(REACT_SRC));
        assert!(doc.contains(REACT_DOM_SRC));
        assert!(doc.contains(BABEL_SRC));
    }
}
