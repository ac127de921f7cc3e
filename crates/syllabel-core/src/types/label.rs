use std::fmt;

use super::phoneme::{phoneme_letters, Phoneme};

/// What the annotator typed for a word, decided once at input time.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Label {
    /// `skip`: leave the word unlabeled.
    Skip,
    /// `exit` or `quit`: save and end the session.
    Exit,
    /// `mono`: the whole word is one syllable.
    Mono,
    /// A transcription with `/` between syllables, whitespace removed and
    /// lower-cased.
    Transcription(String),
}

impl Label {
    /// Classifies one line of annotator input.
    ///
    /// Control words must match exactly after trimming. Anything else is a
    /// transcription, normalized so that `K AH/N T R OW L` and `kah/ntrowl`
    /// are the same label.
    #[must_use]
    pub fn parse(input: &str) -> Self {
        match input.trim() {
            "skip" => Self::Skip,
            "exit" | "quit" => Self::Exit,
            "mono" => Self::Mono,
            other => Self::Transcription(
                other
                    .chars()
                    .filter(|c| !c.is_whitespace())
                    .flat_map(char::to_lowercase)
                    .collect(),
            ),
        }
    }

    /// Whether this is one of the control commands.
    #[must_use]
    pub fn is_control(&self) -> bool {
        !matches!(self, Self::Transcription(_))
    }

    /// Whether this label is consistent with the given phonemes.
    ///
    /// Control commands always match. A transcription matches when its
    /// letters, with every `/` removed, spell the stress-free phonemes.
    #[must_use]
    pub fn matches(&self, phonemes: &[Phoneme]) -> bool {
        match self {
            Self::Transcription(text) => {
                let letters: String = text.chars().filter(|&c| c != '/').collect();
                letters == phoneme_letters(phonemes)
            }
            _ => true,
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Skip => write!(f, "skip"),
            Self::Exit => write!(f, "exit"),
            Self::Mono => write!(f, "mono"),
            Self::Transcription(text) => write!(f, "{text}"),
        }
    }
}

impl From<&str> for Label {
    fn from(input: &str) -> Self {
        Self::parse(input)
    }
}
