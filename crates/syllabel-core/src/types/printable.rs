//! Text forms used in dataset columns: `['K', 'AH0']` for a phoneme
//! sequence and `[['K', 'AH0'], ['N']]` for syllable groups.

use crate::error::{Result, SyllabelError};

use super::phoneme::{Phoneme, SyllableGroup};

/// Renders a phoneme sequence as `['K', 'AH0', 'N']`.
#[must_use]
pub fn format_phonemes(phonemes: &[Phoneme]) -> String {
    let quoted: Vec<String> = phonemes.iter().map(|p| format!("'{p}'")).collect();
    format!("[{}]", quoted.join(", "))
}

/// Renders syllable groups as `[['K', 'AH0'], ['N', 'T']]`.
#[must_use]
pub fn format_syllables(groups: &[SyllableGroup]) -> String {
    let inner: Vec<String> = groups
        .iter()
        .map(|g| format_phonemes(g.phonemes()))
        .collect();
    format!("[{}]", inner.join(", "))
}

fn malformed(what: &'static str, text: &str) -> SyllabelError {
    SyllabelError::MalformedText {
        what,
        text: text.to_string(),
    }
}

fn strip_brackets<'a>(what: &'static str, text: &'a str) -> Result<&'a str> {
    text.trim()
        .strip_prefix('[')
        .and_then(|s| s.strip_suffix(']'))
        .map(str::trim)
        .ok_or_else(|| malformed(what, text))
}

/// Parses the output of [`format_phonemes`].
///
/// # Errors
///
/// Returns `SyllabelError::MalformedText` when the brackets or quotes are
/// off, or `SyllabelError::InvalidPhoneme` for a bad token.
pub fn parse_phonemes(text: &str) -> Result<Vec<Phoneme>> {
    let inner = strip_brackets("phoneme", text)?;
    if inner.is_empty() {
        return Ok(Vec::new());
    }

    inner
        .split(',')
        .map(|item| {
            let token = item
                .trim()
                .strip_prefix('\'')
                .and_then(|s| s.strip_suffix('\''))
                .ok_or_else(|| malformed("phoneme", text))?;
            Phoneme::new(token)
        })
        .collect()
}

/// Parses the output of [`format_syllables`].
///
/// # Errors
///
/// Same as [`parse_phonemes`], applied to each group.
pub fn parse_syllables(text: &str) -> Result<Vec<SyllableGroup>> {
    let mut rest = strip_brackets("syllable", text)?;
    let mut groups = Vec::new();

    while !rest.is_empty() {
        if !rest.starts_with('[') {
            return Err(malformed("syllable", text));
        }
        let end = rest.find(']').ok_or_else(|| malformed("syllable", text))?;
        groups.push(SyllableGroup::new(parse_phonemes(&rest[..=end])?));

        rest = rest[end + 1..].trim_start();
        if let Some(after_comma) = rest.strip_prefix(',') {
            rest = after_comma.trim_start();
            if rest.is_empty() {
                return Err(malformed("syllable", text));
            }
        }
    }

    Ok(groups)
}
