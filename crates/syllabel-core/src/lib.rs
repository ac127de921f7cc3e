//! # Syllabel Core
//!
//! The pure half of the syllable labeler. Provides the phoneme and label
//! types, the syllable builder and the validators that decide whether a
//! human-supplied syllabification agrees with a word's phonemes.
//!
//! ## Quick Start
//!
//! ```rust
//! use syllabel_core::{all_groups_single_vowel, build_syllables, is_valid_label, Phoneme};
//!
//! let phonemes = Phoneme::parse_sequence(&["K", "AH0", "N", "T", "R", "OW1", "L"]).unwrap();
//! assert!(is_valid_label(&phonemes, "kah/ntrowl"));
//!
//! let groups = build_syllables(&phonemes, "kah/ntrowl");
//! assert_eq!(groups.len(), 2);
//! assert!(all_groups_single_vowel(&groups));
//! ```
pub mod error;
pub mod syllable;
pub mod types;

// Re-export primary API
pub use error::{Result, SyllabelError};
pub use syllable::{
    all_groups_single_vowel, build_syllables, is_valid_label, SyllableBuilder, TrailingGroup,
};
pub use types::{
    format_phonemes, format_syllables, parse_phonemes, parse_syllables, Label, Phoneme, Stress,
    SyllableGroup,
};
