//! # Syllable Boundaries
//!
//! Splitting a phoneme sequence along an annotator's `/` marks and checking
//! the result against the one-vowel-per-syllable rule.

pub mod builder;
pub mod validate;

pub use builder::{build_syllables, SyllableBuilder, TrailingGroup};
pub use validate::{all_groups_single_vowel, is_valid_label};
