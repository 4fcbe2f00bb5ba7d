//! File-set I/O: writing extracted files, reloading them for assembly, and
//! packaging them as an archive.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use serde::Serialize;

use pageforge_extract::{FileKind, SourceFile};

/// The record shape handed across the process boundary for each file.
#[derive(Serialize)]
pub struct FileRecord<'a> {
    name: &'a str,
    content: &'a str,
    #[serde(rename = "type")]
    node_type: &'static str,
}

/// View a file set as wire records.
pub fn to_records(files: &[SourceFile]) -> Vec<FileRecord<'_>> {
    files
        .iter()
        .map(|file| FileRecord {
            name: &file.name,
            content: &file.content,
            node_type: "file",
        })
        .collect()
}

/// Write every file of the set into `dir`, creating it if needed.
pub fn write_files(dir: &Path, files: &[SourceFile]) -> io::Result<()> {
    fs::create_dir_all(dir)?;
    for file in files {
        fs::write(dir.join(&file.name), &file.content)?;
    }
    Ok(())
}

/// Load the `.html`/`.css`/`.js` files of a directory as a file set.
///
/// Names are sorted for a stable order, with `index.html` moved to the front
/// so entry-document selection does not depend on filesystem order.
pub fn load_dir(dir: &Path) -> io::Result<Vec<SourceFile>> {
    let mut names = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        if matches!(
            FileKind::from_name(&name),
            FileKind::Html | FileKind::Css | FileKind::Js
        ) {
            names.push(name);
        }
    }
    names.sort();
    if let Some(pos) = names.iter().position(|n| n == "index.html") {
        let name = names.remove(pos);
        names.insert(0, name);
    }

    names
        .into_iter()
        .map(|name| {
            let content = fs::read_to_string(dir.join(&name))?;
            Ok(SourceFile::new(name, content))
        })
        .collect()
}

/// Package a file set as a zip archive at `path`.
pub fn write_archive(files: &[SourceFile], path: &Path) -> io::Result<()> {
    let archive = fs::File::create(path)?;
    let mut writer = zip::ZipWriter::new(archive);
    let options = zip::write::FileOptions::default();
    for file in files {
        writer.start_file(file.name.as_str(), options)?;
        writer.write_all(file.content.as_bytes())?;
    }
    writer.finish()?;
    Ok(())
}
