use std::path::PathBuf;

use syllabel_core::SyllabelError;
use thiserror::Error;

/// Errors raised while loading inputs, talking to the annotator or
/// persisting labels.
#[derive(Debug, Error)]
pub enum LabelerError {
    /// A required input is missing, empty or mis-configured.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Reading or writing a file failed.
    #[error("i/o error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A dataset row does not fit the four-column schema.
    #[error("malformed dataset {path}: {source}")]
    MalformedDataset {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// Writing CSV output failed.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// The phoneme generator has no pronunciation for this word.
    #[error("no pronunciation for word {0:?}")]
    UnknownWord(String),

    /// A pronouncing dictionary line could not be parsed.
    #[error("malformed pronunciation on line {line}: {text:?}")]
    MalformedPronunciation { line: usize, text: String },

    /// Reading the annotator's input or writing the prompt failed.
    #[error("console error: {0}")]
    Console(#[source] std::io::Error),

    #[error(transparent)]
    Core(#[from] SyllabelError),
}

impl LabelerError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for labeler operations.
pub type Result<T> = std::result::Result<T, LabelerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_messages() {
        let err = LabelerError::Configuration("vocabulary is empty".into());
        assert_eq!(err.to_string(), "configuration error: vocabulary is empty");

        let err = LabelerError::UnknownWord("zyzzyva".into());
        assert!(err.to_string().contains("zyzzyva"));

        let err = LabelerError::io(
            "data/sylables/sylables.csv",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(err.to_string().contains("sylables.csv"));
    }

    #[test]
    fn core_errors_convert() {
        let err: LabelerError = SyllabelError::InvalidPhoneme {
            token: "x".into(),
        }
        .into();
        assert!(matches!(err, LabelerError::Core(_)));
    }
}
