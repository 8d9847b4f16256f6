use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, DocumentError>;

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("Please select a PDF or text file (got {})", .0.display())]
    Unsupported(PathBuf),

    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to extract text from PDF {name}: {message}")]
    Pdf { name: String, message: String },
}
