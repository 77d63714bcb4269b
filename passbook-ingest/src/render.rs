//! Document rendering: turn a statement file into plain text.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{IngestError, Result};

const SUPPORTED_FORMATS: &[&str] = &[".pdf", ".txt"];

/// Produces the raw text that the line splitter consumes.
pub trait DocumentRenderer {
    fn render(&self, path: &Path) -> Result<String>;
}

/// Renders PDFs with `pdf-extract` and reads `.txt` files as-is.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileRenderer;

impl DocumentRenderer for FileRenderer {
    fn render(&self, path: &Path) -> Result<String> {
        match extension(path).as_deref() {
            Some(".pdf") => {
                debug!(path = %path.display(), "extracting pdf text");
                pdf_extract::extract_text(path).map_err(|e| IngestError::Render(e.to_string()))
            }
            Some(".txt") => Ok(fs::read_to_string(path)?),
            other => Err(IngestError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            )),
        }
    }
}

/// Extensions the [`FileRenderer`] understands, with leading dot.
pub fn supported_formats() -> &'static [&'static str] {
    SUPPORTED_FORMATS
}

pub fn is_supported_document(path: &Path) -> bool {
    extension(path).is_some_and(|ext| SUPPORTED_FORMATS.contains(&ext.as_str()))
}

fn extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| format!(".{}", e.to_lowercase()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_supported_documents() {
        assert!(is_supported_document(Path::new("stmt.pdf")));
        assert!(is_supported_document(Path::new("STMT.PDF")));
        assert!(is_supported_document(Path::new("dump.txt")));
        assert!(!is_supported_document(Path::new("receipt.png")));
        assert!(!is_supported_document(Path::new("noext")));
        assert_eq!(supported_formats(), &[".pdf", ".txt"]);
    }

    #[test]
    fn test_render_text_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("statement.txt");
        fs::write(&path, "BALANCE B/F\nrow").unwrap();
        let text = FileRenderer.render(&path).unwrap();
        assert_eq!(text, "BALANCE B/F\nrow");
    }

    #[test]
    fn test_render_unsupported() {
        let err = FileRenderer.render(&PathBuf::from("scan.docx")).unwrap_err();
        assert!(matches!(err, IngestError::UnsupportedFormat(ref ext) if ext == ".docx"));
    }
}
