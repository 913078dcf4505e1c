//! Error types for catalog configuration loading

use thiserror::Error;

/// Errors that can occur while loading the warehouse configuration
#[derive(Error, Debug)]
pub enum CatalogError {
    /// IO error reading the configuration file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file is not valid TOML or is missing required keys
    #[error("Configuration parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

impl CatalogError {
    /// Get a user-friendly error message for driver output
    pub fn user_message(&self) -> String {
        match self {
            CatalogError::Parse(err) => {
                format!(
                    "Invalid warehouse configuration: {err}\n\n\
                    Hint: the file must contain [cluster] and [iam_role] sections."
                )
            }
            _ => self.to_string(),
        }
    }
}
