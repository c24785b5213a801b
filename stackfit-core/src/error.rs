//! Error types for stackfit-core.

use thiserror::Error;

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading or validating a catalog.
///
/// Selection and flow operations never fail; these errors only come from
/// constructing the static configuration the engine is built on.
#[derive(Debug, Error)]
pub enum Error {
    /// Catalog file could not be read.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Catalog file is not valid TOML or does not match the catalog schema.
    #[error("catalog parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// Catalog parsed but violates a structural invariant.
    #[error("invalid catalog: {0}")]
    InvalidCatalog(String),
}

/// Field-level validation failures for a contact form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContactError {
    #[error("Name is required")]
    NameRequired,

    #[error("Email is required")]
    EmailRequired,

    #[error("Please enter a valid email address")]
    InvalidEmail,

    #[error("Please select at least one option")]
    NoProblemSelected,

    #[error("You must accept the Terms & Conditions")]
    TermsNotAccepted,
}

/// Errors returned by a contact [`Submitter`](crate::contact::Submitter).
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("Submission rejected: {0}")]
    Rejected(String),

    #[error("Submission failed: {0}")]
    Failed(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
