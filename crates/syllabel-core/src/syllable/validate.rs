use crate::types::{Label, Phoneme, SyllableGroup};

/// Checks a raw label against a word's phonemes.
///
/// Control words (`mono`, `skip`, `exit`, `quit`) are always valid. A
/// transcription is valid when, ignoring `/`, whitespace and case, it spells
/// the phonemes with their stress digits removed.
///
/// # Examples
/// ```
/// use syllabel_core::{is_valid_label, Phoneme};
///
/// let phonemes = Phoneme::parse_sequence(&["HH", "AH0", "L", "OW1"]).unwrap();
/// assert!(is_valid_label(&phonemes, "hhah/low"));
/// assert!(!is_valid_label(&phonemes, "hhal/low"));
/// ```
#[must_use]
pub fn is_valid_label(phonemes: &[Phoneme], label: &str) -> bool {
    Label::parse(label).matches(phonemes)
}

/// True only when every group holds exactly one vowel.
///
/// An empty list is rejected: a word always has at least one syllable.
#[must_use]
pub fn all_groups_single_vowel(groups: &[SyllableGroup]) -> bool {
    !groups.is_empty() && groups.iter().all(|g| g.vowel_count() == 1)
}
