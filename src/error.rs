use miette::Diagnostic;
use thiserror::Error;

/// Main error type for gbtk operations
#[derive(Error, Diagnostic, Debug)]
pub enum GbtkError {
    #[error("IO error: {0}")]
    #[diagnostic(code(gbtk::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(gbtk::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("{message}")]
    #[diagnostic(code(gbtk::not_found))]
    NotFound {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(gbtk::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Validation error: {message}")]
    #[diagnostic(code(gbtk::validate))]
    Validation {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Archive error: {message}")]
    #[diagnostic(code(gbtk::archive))]
    Archive {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Archive error: {0}")]
    #[diagnostic(code(gbtk::archive))]
    Zip(#[from] zip::result::ZipError),

    #[error("Prompt error: {message}")]
    #[diagnostic(code(gbtk::prompt))]
    Prompt { message: String },
}

pub type Result<T> = std::result::Result<T, GbtkError>;
