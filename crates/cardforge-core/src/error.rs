//! Error types for Cardforge

use thiserror::Error;

/// Main error type for Cardforge operations
#[derive(Error, Debug)]
pub enum CardError {
    /// A selected image could not be read from disk
    #[error("Failed to read {field} image: {reason}")]
    ImageRead { field: String, reason: String },

    /// Form field name is not part of the card form
    #[error("Unknown form field: {0}")]
    UnknownField(String),

    /// Transport-level failure talking to the card server
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a body that is not the expected JSON shape
    #[error("Invalid server response: {0}")]
    InvalidResponse(String),

    /// Server reported success but did not include the card URL
    #[error("Server reported success without a card URL")]
    MissingUrl,

    /// Configuration could not be loaded or is malformed
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error during serialization/deserialization
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using CardError
pub type CardResult<T> = Result<T, CardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CardError::ImageRead {
            field: "logo".to_string(),
            reason: "permission denied".to_string(),
        };
        assert_eq!(
            format!("{}", err),
            "Failed to read logo image: permission denied"
        );
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let card_err: CardError = io_err.into();
        assert!(matches!(card_err, CardError::Io(_)));
    }
}
