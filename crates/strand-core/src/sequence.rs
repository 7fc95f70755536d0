use crate::error::{Result, ValidationError};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

fn letters_only_regex() -> &'static Regex {
    static RE: std::sync::OnceLock<Regex> = std::sync::OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[a-z]+$").expect("valid regex"))
}

/// A validated, lowercased letter sequence.
///
/// The only way to obtain a `Sequence` is through [`Sequence::parse`] (or the `FromStr` /
/// `TryFrom` / serde impls that delegate to it), so every value holds one or more ASCII letters
/// `a`-`z`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Sequence(String);

impl Sequence {
    /// Lowercases `input` and checks it against `^[a-z]+$`.
    ///
    /// Empty input is rejected: at least one letter is required.
    pub fn parse(input: &str) -> Result<Self> {
        let lowered = input.to_lowercase();
        if letters_only_regex().is_match(&lowered) {
            return Ok(Self(lowered));
        }
        Err(first_violation(&lowered))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false`; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Sum of the character codes, wrapping at 2^32.
    ///
    /// Matches a JS seed computed as a plain sum and then coerced with `>>> 0`.
    pub fn seed(&self) -> u32 {
        self.0
            .bytes()
            .fold(0u32, |acc, b| acc.wrapping_add(u32::from(b)))
    }

    /// Yields each character with its alphabet index (`'a'` = 0 .. `'z'` = 25).
    pub fn values(&self) -> impl Iterator<Item = (char, u8)> + '_ {
        self.0.bytes().map(|b| (char::from(b), b - b'a'))
    }

    /// The uppercased text drawn as the scene label.
    pub fn label(&self) -> String {
        self.0.to_ascii_uppercase()
    }
}

fn first_violation(lowered: &str) -> ValidationError {
    match lowered
        .chars()
        .enumerate()
        .find(|(_, ch)| !ch.is_ascii_lowercase())
    {
        Some((index, ch)) => ValidationError::InvalidCharacter { ch, index },
        None => ValidationError::Empty,
    }
}

impl FromStr for Sequence {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Sequence {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<Sequence> for String {
    fn from(value: Sequence) -> Self {
        value.0
    }
}

impl AsRef<str> for Sequence {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
