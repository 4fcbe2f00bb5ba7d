//! # pageforge-extract
//!
//!     Extraction engine turning a raw model completion into an ordered set of
//!     named source files (HTML/CSS/JS).
//!
//! Architecture
//!
//!     The input is adversarial by nature: a generative model was *asked* to
//!     mark up its files in a fixed convention, but replies drift. The engine
//!     therefore runs a cascade of tiers, each weaker and more forgiving than
//!     the last, and never rejects input:
//!
//!     1. Marker strategies (strategies.rs): five independent recognizers
//!        pairing a name marker with a fenced code region, tried in fixed
//!        priority order. The first strategy producing an accepted file wins
//!        outright; strategies are never merged. Within the winner every
//!        match in the text contributes a file, later matches for the same
//!        name overwriting earlier ones in place.
//!     2. Content sniffing (sniff.rs): keyword-level search for an HTML
//!        document span, CSS-rule-looking blocks and statement-looking runs.
//!     3. Terminal fallback (fallback.rs): a single diagnostic page embedding
//!        the whole response, HTML-escaped.
//!
//!     A post-processing pass guarantees the set carries an `index.html`
//!     entry document.
//!
//!     This is a pure lib: no I/O, no shared state, every call computes its
//!     result from its argument alone.
//!
//! The file structure:
//!     .
//!     ├── files.rs        # SourceFile / FileKind data model
//!     ├── strategies.rs   # marker-strategy cascade
//!     ├── sniff.rs        # content-sniffing recovery
//!     ├── fallback.rs     # diagnostic page + entry synthesis
//!     └── lib.rs          # the extract() driver

mod fallback;
mod files;
mod sniff;
mod strategies;

pub use files::{FileKind, SourceFile};

use files::insert_file;
use strategies::{is_recognized_name, normalize_name, STRATEGIES};

/// Extract named source files from a raw model completion.
///
/// Total over all inputs: the result is never empty and the function never
/// fails. Degenerate input degrades through content sniffing down to a single
/// diagnostic document.
pub fn extract(response: &str) -> Vec<SourceFile> {
    let mut files = marker_extraction(response);

    if files.is_empty() {
        log::debug!("no marker strategy matched, attempting content recovery");
        files = sniff::recover(response);
    }

    if files.is_empty() {
        log::warn!("content recovery found nothing, emitting diagnostic document");
        return vec![fallback::diagnostic_document(response)];
    }

    fallback::ensure_entry_document(&mut files);
    log::debug!(
        "extracted {} file(s): {}",
        files.len(),
        files
            .iter()
            .map(|f| f.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    );
    files
}

/// Run the strategy cascade and commit to the first non-empty result.
fn marker_extraction(response: &str) -> Vec<SourceFile> {
    for (label, strategy) in STRATEGIES {
        let mut files = Vec::new();
        for (raw_name, body) in strategy(response) {
            // An empty body is not a match at all.
            if body.is_empty() {
                continue;
            }
            let name = normalize_name(&raw_name);
            if !is_recognized_name(&name) {
                continue;
            }
            insert_file(&mut files, SourceFile::new(name, body));
        }
        if !files.is_empty() {
            log::debug!("strategy '{}' produced {} file(s)", label, files.len());
            return files;
        }
    }
    Vec::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_yields_the_diagnostic_document() {
        let files = extract("");
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].name, "index.html");
        assert!(files[0].content.contains("could not be parsed"));
    }

    #[test]
    fn empty_fenced_bodies_are_not_matches() {
        // The bold marker pairs with an empty fence, so the cascade must fall
        // through to the language-hint strategy.
        let text = "**index.html**\n```html\n```\n\n```css\nbody { margin: 0; }\n```";
        let files = extract(text);
        assert!(files.iter().any(|f| f.name == "style.css"));
        assert!(files
            .iter()
            .all(|f| f.name != "index.html" || f.content.contains("<!DOCTYPE html>")));
    }
}
