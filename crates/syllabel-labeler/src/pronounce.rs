//! Phoneme generation for vocabulary words.
//!
//! The session only depends on [`PhonemeGenerator`]. The bundled
//! implementation reads a CMU pronouncing dictionary, which uses the same
//! ARPAbet symbols and stress digits the labels are checked against.

use std::collections::HashMap;
use std::path::Path;

use regex::Regex;
use syllabel_core::Phoneme;
use tracing::info;

use crate::error::{LabelerError, Result};

/// Maps a word to its ordered phoneme sequence.
pub trait PhonemeGenerator {
    /// # Errors
    ///
    /// Returns `LabelerError::UnknownWord` when no pronunciation exists.
    fn phonemes(&mut self, word: &str) -> Result<Vec<Phoneme>>;
}

impl<G: PhonemeGenerator + ?Sized> PhonemeGenerator for &mut G {
    fn phonemes(&mut self, word: &str) -> Result<Vec<Phoneme>> {
        (**self).phonemes(word)
    }
}

/// Word to pronunciation table in CMU-dict format.
///
/// Lines look like `CONTROL  K AH0 N T R OW1 L`. Alternate pronunciations
/// are written `WORD(2)` and ignored; the first entry for a word wins.
#[derive(Debug, Clone, Default)]
pub struct PronouncingDictionary {
    entries: HashMap<String, Vec<Phoneme>>,
}

/// Compiled line pattern for the dictionary file.
struct LineParser {
    re_entry: Regex,
}

impl LineParser {
    fn new() -> Result<Self> {
        let re_entry = Regex::new(r"^([^\s(]+)(?:\((\d+)\))?\s+([^#]+?)\s*(?:#.*)?$")
            .map_err(|e| LabelerError::Configuration(format!("pronunciation pattern: {e}")))?;
        Ok(Self { re_entry })
    }

    /// `Ok(None)` for blank lines, comments and alternate pronunciations.
    fn parse(&self, line_no: usize, line: &str) -> Result<Option<(String, Vec<Phoneme>)>> {
        let line = line.trim();
        if line.is_empty() || line.starts_with(";;;") || line.starts_with('#') {
            return Ok(None);
        }

        let malformed = || LabelerError::MalformedPronunciation {
            line: line_no,
            text: line.to_string(),
        };

        let caps = self.re_entry.captures(line).ok_or_else(malformed)?;
        if caps.get(2).is_some() {
            return Ok(None);
        }

        let phonemes = caps[3]
            .split_whitespace()
            .map(Phoneme::new)
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|_| malformed())?;

        Ok(Some((caps[1].to_lowercase(), phonemes)))
    }
}

impl PronouncingDictionary {
    /// Loads a pronouncing dictionary from disk.
    ///
    /// # Errors
    ///
    /// Returns `LabelerError::Configuration` if the file cannot be read and
    /// `LabelerError::MalformedPronunciation` for an unparsable line.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            LabelerError::Configuration(format!(
                "cannot read pronouncing dictionary {}: {e}",
                path.display()
            ))
        })?;

        let dictionary = Self::parse(&content)?;
        info!(entries = dictionary.len(), path = %path.display(), "loaded pronouncing dictionary");
        Ok(dictionary)
    }

    /// Parses dictionary text in CMU-dict format.
    pub fn parse(content: &str) -> Result<Self> {
        let parser = LineParser::new()?;
        let mut entries = HashMap::new();

        for (idx, line) in content.lines().enumerate() {
            if let Some((word, phonemes)) = parser.parse(idx + 1, line)? {
                entries.entry(word).or_insert(phonemes);
            }
        }

        Ok(Self { entries })
    }

    /// Builds a dictionary from `(word, tokens)` pairs.
    pub fn from_entries<'a, I>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (&'a str, &'a [&'a str])>,
    {
        let mut map = HashMap::new();
        for (word, tokens) in entries {
            map.entry(word.to_lowercase())
                .or_insert(Phoneme::parse_sequence(tokens)?);
        }
        Ok(Self { entries: map })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Case-insensitive lookup.
    pub fn lookup(&self, word: &str) -> Option<&[Phoneme]> {
        self.entries
            .get(&word.trim().to_lowercase())
            .map(Vec::as_slice)
    }
}

impl PhonemeGenerator for PronouncingDictionary {
    fn phonemes(&mut self, word: &str) -> Result<Vec<Phoneme>> {
        self.lookup(word)
            .map(<[Phoneme]>::to_vec)
            .ok_or_else(|| LabelerError::UnknownWord(word.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = ";;; # CMUdict  --  Major Version: 0.07
CONTROL  K AH0 N T R OW1 L
EITHER  IY1 DH ER0
EITHER(2)  AY1 DH ER0
tomato T AH0 M EY1 T OW2 # american

";

    #[test]
    fn parse_reads_entries_and_skips_alternates() {
        let dict = PronouncingDictionary::parse(SAMPLE).unwrap();
        assert_eq!(dict.len(), 3);

        let either = dict.lookup("either").unwrap();
        assert_eq!(either[0].symbol(), "IY1");

        let tomato = dict.lookup("Tomato").unwrap();
        assert_eq!(tomato.len(), 6);
        assert_eq!(tomato[5].symbol(), "OW2");
    }

    #[test]
    fn generator_reports_unknown_words() {
        let mut dict = PronouncingDictionary::parse(SAMPLE).unwrap();
        let phonemes = dict.phonemes("control").unwrap();
        assert_eq!(phonemes.len(), 7);

        let err = dict.phonemes("zyzzyva").unwrap_err();
        assert!(matches!(err, LabelerError::UnknownWord(w) if w == "zyzzyva"));
    }

    #[test]
    fn malformed_lines_carry_line_numbers() {
        let err = PronouncingDictionary::parse("CONTROL  K AH0\nBROKEN  k ah0\n").unwrap_err();
        assert!(matches!(err, LabelerError::MalformedPronunciation { line: 2, .. }));

        let err = PronouncingDictionary::parse("LONELY\n").unwrap_err();
        assert!(matches!(err, LabelerError::MalformedPronunciation { line: 1, .. }));
    }

    #[test]
    fn from_entries_builds_lookup_table() {
        let dict = PronouncingDictionary::from_entries([
            ("Cat", &["K", "AE1", "T"][..]),
            ("dog", &["D", "AO1", "G"][..]),
        ])
        .unwrap();
        assert_eq!(dict.lookup("CAT").map(<[Phoneme]>::len), Some(3));
        assert!(dict.lookup("cow").is_none());
    }

    #[test]
    fn missing_file_is_configuration_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = PronouncingDictionary::load(dir.path().join("cmudict.dict")).unwrap_err();
        assert!(matches!(err, LabelerError::Configuration(_)));
    }
}
