//! # Syllabel Labeler
//!
//! The interactive side of Syllabel. Samples words from a vocabulary, looks
//! up their phonemes, asks a human for syllable boundaries and keeps the
//! accepted labels in a CSV dataset that is checkpointed once per session
//! and rewritten after every accepted word.

pub mod config;
pub mod dataset;
pub mod error;
pub mod pronounce;
pub mod session;
pub mod vocabulary;

pub use config::LabelerConfig;
pub use dataset::{Dataset, DatasetStore, LabeledRecord};
pub use error::{LabelerError, Result};
pub use pronounce::{PhonemeGenerator, PronouncingDictionary};
pub use session::{run_labeling, LabelingSession, SessionSummary, WordOutcome};
pub use vocabulary::Vocabulary;
