use crate::types::{Label, Phoneme, SyllableGroup};

/// What to do with phonemes left over after the last boundary mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrailingGroup {
    /// Close the unfinished group at the end of the sequence.
    #[default]
    Close,
    /// Discard it, matching datasets labeled before the builder closed
    /// trailing groups.
    Drop,
}

/// Splits phoneme sequences into syllable groups along a label's `/` marks.
#[derive(Debug, Clone, Copy, Default)]
pub struct SyllableBuilder {
    trailing: TrailingGroup,
}

impl SyllableBuilder {
    /// Create a builder that closes trailing groups.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the trailing group policy.
    pub fn with_trailing(mut self, trailing: TrailingGroup) -> Self {
        self.trailing = trailing;
        self
    }

    /// Builds groups for a parsed label.
    ///
    /// Returns `None` for `skip` and `exit`, which carry no syllables.
    #[must_use]
    pub fn build(&self, phonemes: &[Phoneme], label: &Label) -> Option<Vec<SyllableGroup>> {
        match label {
            Label::Mono => Some(vec![SyllableGroup::new(phonemes.to_vec())]),
            Label::Transcription(text) => Some(self.split(phonemes, text)),
            Label::Skip | Label::Exit => None,
        }
    }

    /// Walks the phonemes while tracking how far into `label` their letters
    /// reach. A group closes whenever that offset lands on a `/` or runs off
    /// the end of the label.
    ///
    /// The offset counts characters of each phoneme's stress-free symbol, so
    /// the label is expected to spell the phonemes exactly. No validation is
    /// done here; run the label through [`Label::matches`] first.
    #[must_use]
    pub fn split(&self, phonemes: &[Phoneme], label: &str) -> Vec<SyllableGroup> {
        let label: Vec<char> = label.chars().collect();
        let mut offset = 0usize;
        let mut groups = Vec::new();
        let mut current = SyllableGroup::default();

        for phoneme in phonemes {
            current.push(phoneme.clone());
            offset += phoneme.base().chars().count();

            if offset >= label.len() || label[offset] == '/' {
                // Step over the delimiter
                offset += 1;
                groups.push(std::mem::take(&mut current));
            }
        }

        if !current.is_empty() && self.trailing == TrailingGroup::Close {
            groups.push(current);
        }

        groups
    }
}

/// Builds syllable groups from a raw label string.
///
/// The label goes through [`Label::parse`] first, so `K AH/N T R OW L` and
/// `kah/ntrowl` split the same way. `mono` yields a single group holding
/// every phoneme; `skip` and `exit` yield no groups.
///
/// # Examples
/// ```
/// use syllabel_core::{build_syllables, Phoneme};
///
/// let phonemes = Phoneme::parse_sequence(&["K", "AH0", "N", "T", "R", "OW1", "L"]).unwrap();
/// let groups = build_syllables(&phonemes, "kah/ntrowl");
/// assert_eq!(groups[0].len(), 2);
/// assert_eq!(groups[1].len(), 5);
/// ```
#[must_use]
pub fn build_syllables(phonemes: &[Phoneme], label: &str) -> Vec<SyllableGroup> {
    SyllableBuilder::new()
        .build(phonemes, &Label::parse(label))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syllable::all_groups_single_vowel;

    fn seq(tokens: &[&str]) -> Vec<Phoneme> {
        Phoneme::parse_sequence(tokens).unwrap()
    }

    fn control() -> Vec<Phoneme> {
        seq(&["K", "AH0", "N", "T", "R", "OW1", "L"])
    }

    #[test]
    fn mono_returns_one_group_with_everything() {
        for tokens in [vec![], vec!["AY1"], vec!["S", "T", "R", "EH1", "NG", "K", "TH", "S"]] {
            let phonemes = seq(&tokens);
            let groups = build_syllables(&phonemes, "mono");
            assert_eq!(groups.len(), 1);
            assert_eq!(groups[0].phonemes(), phonemes.as_slice());
        }
    }

    #[test]
    fn control_with_spaced_label() {
        let groups = build_syllables(&control(), "K AH/N T R OW L");
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].phonemes(), seq(&["K", "AH0"]).as_slice());
        assert_eq!(groups[1].phonemes(), seq(&["N", "T", "R", "OW1", "L"]).as_slice());
        assert!(all_groups_single_vowel(&groups));
    }

    #[test]
    fn control_with_normalized_label() {
        let groups = build_syllables(&control(), "kah/ntrowl");
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].phonemes(), seq(&["K", "AH0"]).as_slice());
        assert!(all_groups_single_vowel(&groups));
    }

    #[test]
    fn multi_letter_phonemes_advance_by_their_width() {
        let phonemes = seq(&["TH", "AW1", "Z", "AH0", "N", "D"]);
        let groups = build_syllables(&phonemes, "thaw/zahnd");
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].phonemes(), seq(&["TH", "AW1"]).as_slice());
        assert_eq!(groups[1].phonemes(), seq(&["Z", "AH0", "N", "D"]).as_slice());
    }

    #[test]
    fn trailing_group_policy() {
        // The mark sits inside AW, so the walk never lands on a boundary
        let cow = seq(&["K", "AW1"]);

        let closed = SyllableBuilder::new().split(&cow, "ka/w");
        assert_eq!(closed.len(), 1);
        assert_eq!(closed[0].phonemes(), cow.as_slice());

        let dropped = SyllableBuilder::new()
            .with_trailing(TrailingGroup::Drop)
            .split(&cow, "ka/w");
        assert!(dropped.is_empty());

        // A label that ends on a phoneme boundary closes its last group either way
        let dropped = SyllableBuilder::new()
            .with_trailing(TrailingGroup::Drop)
            .split(&control(), "kah/ntrowl");
        assert_eq!(dropped.len(), 2);
    }

    #[test]
    fn raw_labels_split_like_their_parsed_form() {
        let phonemes = control();
        for label in ["K AH/N T R OW L", "KAH/NTROWL", " kah / ntrowl\n", "Kah/NTrowl"] {
            assert!(crate::syllable::is_valid_label(&phonemes, label), "rejected {label:?}");
            let parsed = SyllableBuilder::new()
                .build(&phonemes, &Label::parse(label))
                .unwrap();
            assert_eq!(build_syllables(&phonemes, label), parsed, "label {label:?}");
            assert_eq!(parsed[0].phonemes(), seq(&["K", "AH0"]).as_slice());
        }
    }

    #[test]
    fn control_commands_build_no_groups() {
        let phonemes = control();
        assert!(build_syllables(&phonemes, "skip").is_empty());
        assert!(build_syllables(&phonemes, "quit").is_empty());
        assert_eq!(build_syllables(&phonemes, " mono\n").len(), 1);
    }

    #[test]
    fn build_dispatches_on_label() {
        let builder = SyllableBuilder::new();
        let phonemes = control();

        assert_eq!(builder.build(&phonemes, &Label::Skip), None);
        assert_eq!(builder.build(&phonemes, &Label::Exit), None);
        assert_eq!(builder.build(&phonemes, &Label::Mono).map(|g| g.len()), Some(1));

        let groups = builder
            .build(&phonemes, &Label::parse("K AH/N T R OW L"))
            .unwrap();
        assert_eq!(groups, build_syllables(&phonemes, "kah/ntrowl"));
    }
}
