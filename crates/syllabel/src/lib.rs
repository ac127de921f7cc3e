//! # Syllabel
//!
//! Human-in-the-loop syllable boundary labeling. Re-exports the pure
//! validation layer ([`syllabel_core`]) and the interactive labeler
//! ([`syllabel_labeler`]).

pub use syllabel_core;
pub use syllabel_labeler;

pub use syllabel_core::{
    all_groups_single_vowel, build_syllables, is_valid_label, Label, Phoneme, SyllableGroup,
};
pub use syllabel_labeler::{Dataset, DatasetStore, LabelerConfig, LabelingSession, run_labeling};
