/// Markdown content sources on disk.
///
/// Servers that ship compiled-in content can let operators override it with a directory
/// of `<name>.md` files. This module only reads the directory; interpreting the markdown
/// is up to each server.
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::CommonError;

/// A single markdown document read from a content directory.
#[derive(Debug, Clone)]
pub struct MarkdownSource {
    /// File name without the `.md` extension, e.g. "html"
    pub stem: String,
    /// Full path of the file that was read
    pub path: PathBuf,
    /// Raw file content
    pub content: String,
}

/// Read every `*.md` file directly under `dir`, sorted by file stem.
///
/// Subdirectories and files with other extensions are skipped.
pub fn read_markdown_dir(dir: &Path) -> Result<Vec<MarkdownSource>, CommonError> {
    if !dir.is_dir() {
        return Err(CommonError::ContentDirMissing(dir.display().to_string()));
    }

    let entries = std::fs::read_dir(dir).map_err(|source| CommonError::Io {
        path: dir.display().to_string(),
        source,
    })?;

    let mut sources = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| CommonError::Io {
            path: dir.display().to_string(),
            source,
        })?;
        let path = entry.path();

        if !path.is_file() || path.extension().and_then(|e| e.to_str()) != Some("md") {
            continue;
        }
        let Some(stem) = path.file_stem().and_then(|s| s.to_str()).map(str::to_string) else {
            debug!(path = %path.display(), "skipping file with non-utf8 name");
            continue;
        };

        let content = std::fs::read_to_string(&path).map_err(|source| CommonError::Io {
            path: path.display().to_string(),
            source,
        })?;
        debug!(path = %path.display(), bytes = content.len(), "read markdown source");

        sources.push(MarkdownSource { stem, path, content });
    }

    sources.sort_by(|a, b| a.stem.cmp(&b.stem));
    Ok(sources)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_only_markdown_files_sorted_by_stem() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("sql.md"), "## SQL\n").unwrap();
        std::fs::write(dir.path().join("css.md"), "## CSS\n").unwrap();
        std::fs::write(dir.path().join("notes.txt"), "ignored").unwrap();
        std::fs::create_dir(dir.path().join("nested.md")).unwrap();

        let sources = read_markdown_dir(dir.path()).unwrap();
        let stems: Vec<&str> = sources.iter().map(|s| s.stem.as_str()).collect();
        assert_eq!(stems, ["css", "sql"]);
        assert_eq!(sources[0].content, "## CSS\n");
    }

    #[test]
    fn missing_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("does-not-exist");

        let err = read_markdown_dir(&missing).unwrap_err();
        assert!(matches!(err, CommonError::ContentDirMissing(_)));
    }
}
