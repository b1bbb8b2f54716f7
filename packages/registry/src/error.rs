use crate::schema::SchemaError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RegistryError {
    #[error("Unknown section type: {0}")]
    UnknownSectionType(String),

    #[error("Invalid props for section type '{section_type}': {source}")]
    InvalidProps {
        section_type: String,
        #[source]
        source: SchemaError,
    },

    #[error("Section type '{0}' has no renderer")]
    NoRenderer(String),

    #[error("Unknown category: {0} (expected content, commerce, social or utility)")]
    UnknownCategory(String),
}
