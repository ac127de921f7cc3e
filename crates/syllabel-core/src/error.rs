use thiserror::Error;

/// Errors that can occur in Syllabel core operations.
#[derive(Debug, Error)]
pub enum SyllabelError {
    /// A phoneme token is not an uppercase symbol with an optional stress digit.
    #[error("invalid phoneme token: {token:?}")]
    InvalidPhoneme {
        /// The rejected token.
        token: String,
    },

    /// A printable phoneme or syllable list could not be parsed back.
    #[error("malformed {what} text: {text:?}")]
    MalformedText {
        /// Which printable form was expected.
        what: &'static str,
        /// The offending text.
        text: String,
    },
}

/// Result type alias for Syllabel core operations.
pub type Result<T> = std::result::Result<T, SyllabelError>;
