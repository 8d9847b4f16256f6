use std::path::Path;
use tenderlens_core::SourceText;
use tracing::{debug, info, warn};

use crate::error::{DocumentError, Result};

/// Supported input formats, decided by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    Text,
}

impl DocumentKind {
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "pdf" => Some(Self::Pdf),
            "txt" | "text" | "md" => Some(Self::Text),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Text => "text",
        }
    }
}

/// A document whose text has been fully extracted.
#[derive(Debug, Clone)]
pub struct LoadedDocument {
    /// File name without directories, for display.
    pub name: String,
    pub kind: DocumentKind,
    pub text: SourceText,
}

/// Read a PDF or text file and extract its text.
pub fn load_document(path: &Path) -> Result<LoadedDocument> {
    let kind =
        DocumentKind::from_path(path).ok_or_else(|| DocumentError::Unsupported(path.to_path_buf()))?;
    let name = path
        .file_name()
        .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned());

    info!("Loading {} document: {}", kind.as_str(), path.display());

    let bytes = std::fs::read(path).map_err(|source| DocumentError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    load_from_bytes(name, kind, &bytes)
}

/// Extract text from an in-memory document.
pub fn load_from_bytes(name: String, kind: DocumentKind, bytes: &[u8]) -> Result<LoadedDocument> {
    let text = match kind {
        DocumentKind::Pdf => {
            pdf_extract::extract_text_from_mem(bytes).map_err(|e| DocumentError::Pdf {
                name: name.clone(),
                message: e.to_string(),
            })?
        }
        DocumentKind::Text => String::from_utf8_lossy(bytes).into_owned(),
    };

    if text.trim().is_empty() {
        warn!("No text extracted from {name}");
    }
    debug!(chars = text.len(), "Document text extracted");

    Ok(LoadedDocument {
        name,
        kind,
        text: SourceText::from(text),
    })
}
