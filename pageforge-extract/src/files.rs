//! The extracted-file data model.
//!
//! A [`SourceFile`] is one named, typed piece of source text recovered from a
//! model completion. The kind is derived from the file extension and nothing
//! else; free-form names (possible for diagnostic output) map to
//! [`FileKind::Other`].

use serde::{Deserialize, Serialize};

/// Kind of a source file, derived from its extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    Html,
    Css,
    Js,
    Other,
}

impl FileKind {
    /// Derive the kind from a file name.
    pub fn from_name(name: &str) -> FileKind {
        if name.ends_with(".html") {
            FileKind::Html
        } else if name.ends_with(".css") {
            FileKind::Css
        } else if name.ends_with(".js") {
            FileKind::Js
        } else {
            FileKind::Other
        }
    }
}

/// One named source file recovered from a model completion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceFile {
    pub name: String,
    pub content: String,
    pub kind: FileKind,
}

impl SourceFile {
    /// Build a file, deriving the kind from the name.
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> SourceFile {
        let name = name.into();
        let kind = FileKind::from_name(&name);
        SourceFile {
            name,
            content: content.into(),
            kind,
        }
    }
}

/// Insert a file into an ordered set keyed by name.
///
/// Later entries for an existing name overwrite the stored content while the
/// first-insertion position is preserved.
pub(crate) fn insert_file(files: &mut Vec<SourceFile>, file: SourceFile) {
    match files.iter_mut().find(|f| f.name == file.name) {
        Some(existing) => {
            existing.content = file.content;
            existing.kind = file.kind;
        }
        None => files.push(file),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_follows_extension() {
        assert_eq!(FileKind::from_name("index.html"), FileKind::Html);
        assert_eq!(FileKind::from_name("style.css"), FileKind::Css);
        assert_eq!(FileKind::from_name("script.js"), FileKind::Js);
        assert_eq!(FileKind::from_name("notes.txt"), FileKind::Other);
    }

    #[test]
    fn insert_overwrites_in_place() {
        let mut files = Vec::new();
        insert_file(&mut files, SourceFile::new("style.css", "a { }"));
        insert_file(&mut files, SourceFile::new("index.html", "<p>hi</p>"));
        insert_file(&mut files, SourceFile::new("style.css", "b { }"));

        assert_eq!(files.len(), 2);
        assert_eq!(files[0].name, "style.css");
        assert_eq!(files[0].content, "b { }");
        assert_eq!(files[1].name, "index.html");
    }
}
