use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum LinkCfgError {
    #[error("PDF extraction failed: {0}")]
    Extraction(String),

    #[error("pdftotext not found. Install poppler: brew install poppler (macOS) or apt install poppler-utils (Linux)")]
    PdftotextNotFound,

    #[error("pdftotext failed with exit code {code}: {stderr}")]
    PdftotextFailed { code: i32, stderr: String },

    #[error("failed to load defaults template from {path}: {reason}")]
    TemplateLoad { path: PathBuf, reason: String },

    #[error("invalid defaults template: {0}")]
    TemplateInvalid(String),

    #[error("failed to load form from {path}: {reason}")]
    FormLoad { path: PathBuf, reason: String },

    #[error("required form fields missing ({missing}); no configuration files written")]
    IncompleteForm { missing: String },

    #[error("unsupported input: {0}")]
    UnsupportedInput(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
