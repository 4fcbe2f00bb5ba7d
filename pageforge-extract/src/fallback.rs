//! Terminal fallback and entry-document synthesis.
//!
//! Extraction never fails: when nothing in the response is recognizable, the
//! caller still gets a single self-contained diagnostic page carrying the raw
//! response. And a result set that has files but no `index.html` gets a
//! scaffold entry document so the set stays runnable as a whole.

use crate::files::SourceFile;

const DIAGNOSTIC_PROLOGUE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Preview unavailable</title>
    <style>
        body {
            font-family: -apple-system, 'Segoe UI', sans-serif;
            line-height: 1.6;
            color: #333;
            background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
            margin: 0;
            padding: 2rem;
            min-height: 100vh;
        }
        .frame {
            max-width: 800px;
            margin: 0 auto;
            background: white;
            padding: 2rem;
            border-radius: 12px;
            box-shadow: 0 10px 30px rgba(0, 0, 0, 0.2);
        }
        .notice {
            background: #fff3cd;
            border: 1px solid #ffeaa7;
            color: #856404;
            padding: 1rem;
            border-radius: 6px;
            margin-bottom: 1.5rem;
        }
        .notice button {
            background: #667eea;
            color: white;
            border: none;
            padding: 10px 20px;
            border-radius: 6px;
            cursor: pointer;
            font-weight: 600;
            margin-top: 0.5rem;
        }
        pre {
            white-space: pre-wrap;
            word-wrap: break-word;
            background: #2d3748;
            color: #e2e8f0;
            padding: 1rem;
            border-radius: 6px;
            overflow-x: auto;
        }
    </style>
</head>
<body>
    <div class="frame">
        <div class="notice">
            <h3>Response could not be parsed</h3>
            <p>The model reply did not follow any recognized file layout, so it
            could not be split into separate files. Rephrasing the request or
            generating again usually resolves this.</p>
            <button onclick="window.parent.location.reload()">Try again</button>
        </div>
        <h1>Raw model output</h1>
        <pre>"#;

const DIAGNOSTIC_EPILOGUE: &str = r#"</pre>
    </div>
</body>
</html>"#;

const ENTRY_SCAFFOLD: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Generated Page</title>
    <link rel="stylesheet" href="style.css">
</head>
<body>
    <div id="app">
        <h1>Generated Page</h1>
        <p>The generated content renders here.</p>
    </div>
    <script src="script.js"></script>
</body>
</html>"#;

/// Build the single diagnostic file embedding the whole raw response.
pub(crate) fn diagnostic_document(response: &str) -> SourceFile {
    let content = format!(
        "{}{}{}",
        DIAGNOSTIC_PROLOGUE,
        escape_html(response),
        DIAGNOSTIC_EPILOGUE
    );
    SourceFile::new("index.html", content)
}

/// Guarantee the set has an `index.html` entry document.
///
/// The scaffold references `style.css` and `script.js` by name; missing ones
/// are appended as empty placeholders so the references resolve.
pub(crate) fn ensure_entry_document(files: &mut Vec<SourceFile>) {
    if files.is_empty() || files.iter().any(|f| f.name == "index.html") {
        return;
    }
    for name in ["style.css", "script.js"] {
        if !files.iter().any(|f| f.name == name) {
            files.push(SourceFile::new(name, ""));
        }
    }
    files.push(SourceFile::new("index.html", ENTRY_SCAFFOLD));
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diagnostic_document_escapes_the_response() {
        let file = diagnostic_document("<script>alert(1)</script> & more");
        assert_eq!(file.name, "index.html");
        assert!(file
            .content
            .contains("&lt;script&gt;alert(1)&lt;/script&gt; &amp; more"));
        assert!(!file.content.contains("<script>alert(1)"));
    }

    #[test]
    fn entry_synthesis_adds_placeholders_for_missing_companions() {
        let mut files = vec![SourceFile::new("app.js", "console.log(1);")];
        ensure_entry_document(&mut files);

        let names: Vec<&str> = files.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["app.js", "style.css", "script.js", "index.html"]);
        assert!(files[1].content.is_empty());
        assert!(files[2].content.is_empty());
    }

    #[test]
    fn entry_synthesis_is_a_no_op_when_index_exists() {
        let mut files = vec![SourceFile::new("index.html", "<p>hi</p>")];
        ensure_entry_document(&mut files);
        assert_eq!(files.len(), 1);
    }
}
