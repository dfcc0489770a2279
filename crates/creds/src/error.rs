//! Store-specific errors
//!
//! Every library operation returns one of these variants unmodified to the
//! caller; there is no recovery or retry anywhere below the CLI boundary.

use thiserror::Error;

/// Credential store errors
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Store file is not a valid credential list: {0}")]
    Parse(#[source] serde_json::Error),

    #[error("Invalid pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("No site matches '{0}'")]
    NotFound(String),

    #[error("Pattern '{pattern}' matches multiple sites: {}", .sites.join(", "))]
    Ambiguous {
        pattern: String,
        sites: Vec<String>,
    },

    #[error("Stored secret cannot be decoded: {0}")]
    Decode(String),

    #[error("Secret generator failed: {0}")]
    Generator(String),
}
