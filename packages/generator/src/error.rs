use storefront_document::ValidationError;
use thiserror::Error;

/// Failure of the external text-completion call
#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("completion command is empty")]
    NoCommand,

    #[error("failed to run `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`{program}` exited with {status}: {stderr}")]
    Failed {
        program: String,
        status: std::process::ExitStatus,
        stderr: String,
    },

    #[error("completion output is not UTF-8")]
    InvalidOutput,

    #[error("{0}")]
    Other(String),
}

/// Why a generation attempt produced no page
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("business type is required")]
    MissingBusinessType,

    #[error("Completion failed: {0}")]
    Completion(#[from] CompletionError),

    #[error("Extraction failed: {0}")]
    Extraction(String),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Unknown or invalid sections: {}", .0.join(", "))]
    UnknownSectionTypes(Vec<String>),
}
