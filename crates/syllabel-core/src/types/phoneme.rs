use std::fmt;

use crate::error::{Result, SyllabelError};

/// Stress level carried by a vowel phoneme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Stress {
    /// `0`: unstressed
    None,
    /// `1`: primary stress
    Primary,
    /// `2`: secondary stress
    Secondary,
}

impl Stress {
    fn from_digit(digit: char) -> Option<Self> {
        match digit {
            '0' => Some(Self::None),
            '1' => Some(Self::Primary),
            '2' => Some(Self::Secondary),
            _ => None,
        }
    }

    /// The digit this stress level is written with.
    #[must_use]
    pub fn digit(self) -> char {
        match self {
            Self::None => '0',
            Self::Primary => '1',
            Self::Secondary => '2',
        }
    }
}

/// A single phoneme token such as `K` or `AH0`.
///
/// The symbol is one or more ASCII uppercase letters, optionally followed
/// by a single stress digit. Only vowels carry the digit.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Phoneme(String);

impl Phoneme {
    /// Validates and wraps a phoneme token.
    ///
    /// # Errors
    ///
    /// Returns `SyllabelError::InvalidPhoneme` if the token is empty, has a
    /// non-uppercase letter, or has a digit anywhere but the last position.
    pub fn new(token: impl Into<String>) -> Result<Self> {
        let token = token.into();
        let letters = match token.chars().last() {
            Some(c) if Stress::from_digit(c).is_some() => &token[..token.len() - 1],
            _ => token.as_str(),
        };

        if letters.is_empty() || !letters.chars().all(|c| c.is_ascii_uppercase()) {
            return Err(SyllabelError::InvalidPhoneme { token });
        }

        Ok(Self(token))
    }

    /// Validates a whole sequence of tokens.
    pub fn parse_sequence<S: AsRef<str>>(tokens: &[S]) -> Result<Vec<Self>> {
        tokens.iter().map(|t| Self::new(t.as_ref())).collect()
    }

    /// The full symbol, stress digit included.
    #[must_use]
    pub fn symbol(&self) -> &str {
        &self.0
    }

    /// The symbol with its trailing stress digit removed.
    #[must_use]
    pub fn base(&self) -> &str {
        match self.stress() {
            Some(_) => &self.0[..self.0.len() - 1],
            None => &self.0,
        }
    }

    /// Stress level, if this phoneme carries one.
    #[must_use]
    pub fn stress(&self) -> Option<Stress> {
        self.0.chars().last().and_then(Stress::from_digit)
    }

    /// Whether the symbol ends in a digit, which marks a vowel.
    #[must_use]
    pub fn is_vowel(&self) -> bool {
        self.0.ends_with(|c: char| c.is_ascii_digit())
    }
}

impl fmt::Display for Phoneme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Phoneme {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Concatenates the stress-free symbols and lower-cases them, giving the
/// letters a transcription must spell out.
pub(crate) fn phoneme_letters(phonemes: &[Phoneme]) -> String {
    phonemes
        .iter()
        .map(Phoneme::base)
        .collect::<String>()
        .to_lowercase()
}

/// One syllable: a contiguous run of phonemes from a word.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct SyllableGroup(Vec<Phoneme>);

impl SyllableGroup {
    #[must_use]
    pub fn new(phonemes: Vec<Phoneme>) -> Self {
        Self(phonemes)
    }

    #[must_use]
    pub fn phonemes(&self) -> &[Phoneme] {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub(crate) fn push(&mut self, phoneme: Phoneme) {
        self.0.push(phoneme);
    }

    /// Number of phonemes in this group that carry a stress digit.
    #[must_use]
    pub fn vowel_count(&self) -> usize {
        self.0.iter().filter(|p| p.is_vowel()).count()
    }
}

impl From<Vec<Phoneme>> for SyllableGroup {
    fn from(phonemes: Vec<Phoneme>) -> Self {
        Self(phonemes)
    }
}

impl<'a> IntoIterator for &'a SyllableGroup {
    type Item = &'a Phoneme;
    type IntoIter = std::slice::Iter<'a, Phoneme>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phoneme_accepts_consonants_and_stressed_vowels() {
        let k = Phoneme::new("K").unwrap();
        assert_eq!(k.symbol(), "K");
        assert_eq!(k.base(), "K");
        assert_eq!(k.stress(), None);
        assert!(!k.is_vowel());

        let ow = Phoneme::new("OW1").unwrap();
        assert_eq!(ow.base(), "OW");
        assert_eq!(ow.stress(), Some(Stress::Primary));
        assert!(ow.is_vowel());
        assert_eq!(Stress::Secondary.digit(), '2');
    }

    #[test]
    fn phoneme_rejects_malformed_tokens() {
        for token in ["", "0", "ah0", "A1H", "AH3", "AH01", "K-"] {
            assert!(Phoneme::new(token).is_err(), "accepted {token:?}");
        }
    }

    #[test]
    fn phoneme_letters_strip_stress_and_lowercase() {
        let phonemes = Phoneme::parse_sequence(&["K", "AH0", "N", "T", "R", "OW1", "L"]).unwrap();
        assert_eq!(phoneme_letters(&phonemes), "kahntrowl");
    }

    #[test]
    fn syllable_group_counts_vowels() {
        let group = SyllableGroup::new(Phoneme::parse_sequence(&["N", "T", "R", "OW1", "L"]).unwrap());
        assert_eq!(group.len(), 5);
        assert_eq!(group.vowel_count(), 1);
        assert!(SyllableGroup::default().is_empty());
    }
}
