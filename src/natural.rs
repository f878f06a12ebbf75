//! Natural ("alphanumeric") ordering of file names.
//!
//! A name is split on maximal runs of ASCII digits. Digit runs compare by
//! numeric value, the text between them compares case-insensitively, so
//! `file2.txt` sorts before `file10.txt`.

use std::cmp::Ordering;
use std::ffi::OsStr;

/// One run of a name's sort key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// A non-digit run, lowercased. May be empty.
    Text(String),
    /// A digit run with leading zeros stripped (`"0"` for all-zero runs).
    Number(String),
}

impl Ord for Token {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Text(a), Self::Text(b)) => a.cmp(b),
            // Normalised digit strings of unequal length differ in magnitude,
            // so this compares integers of any size without parsing.
            (Self::Number(a), Self::Number(b)) => a.len().cmp(&b.len()).then_with(|| a.cmp(b)),
            // Keys always alternate text/number starting with text, so these
            // arms only fire for hand-built keys.
            (Self::Number(_), Self::Text(_)) => Ordering::Less,
            (Self::Text(_), Self::Number(_)) => Ordering::Greater,
        }
    }
}

impl PartialOrd for Token {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Computes the natural sort key of `name`.
///
/// The key always starts and ends with a [`Token::Text`] (possibly empty) and
/// alternates between text and number tokens, so two keys never compare a
/// number against text at the same position.
#[must_use]
pub fn sort_key(name: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut text = String::new();
    let mut chars = name.char_indices().peekable();

    while let Some((start, c)) = chars.next() {
        if !c.is_ascii_digit() {
            text.push(c);
            continue;
        }

        let mut end = start + c.len_utf8();
        while let Some(&(idx, next)) = chars.peek() {
            if !next.is_ascii_digit() {
                break;
            }
            end = idx + next.len_utf8();
            chars.next();
        }

        tokens.push(Token::Text(std::mem::take(&mut text).to_lowercase()));
        tokens.push(Token::Number(normalize_digits(&name[start..end])));
    }

    tokens.push(Token::Text(text.to_lowercase()));
    tokens
}

/// Compares two names by their natural sort keys.
#[must_use]
pub fn compare(a: &str, b: &str) -> Ordering {
    sort_key(a).cmp(&sort_key(b))
}

/// Sorts `names` in natural order.
///
/// Names that are not valid UTF-8 are keyed on their lossy conversion.
/// Names with equal keys (`a01` and `a1`, `Foo` and `foo`) fall back to
/// their own ordering so the result does not depend on the input order.
pub fn sort<T>(names: &mut [T])
where
    T: AsRef<OsStr> + Ord + Clone,
{
    names.sort_by_cached_key(|name| (sort_key(&name.as_ref().to_string_lossy()), name.clone()));
}

fn normalize_digits(digits: &str) -> String {
    let trimmed = digits.trim_start_matches('0');
    if trimmed.is_empty() {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}
