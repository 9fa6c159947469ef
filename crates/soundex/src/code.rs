//! Soundex code value type

use crate::{Result, SoundexError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of characters in every Soundex code
pub const CODE_LENGTH: usize = 4;

/// A four character Soundex code: one leading character and three digits
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SoundexCode {
    code: String,
    first: char,
}

impl SoundexCode {
    /// Wrap an encoder result. `code` must already start with `first`
    /// followed by three digits.
    pub(crate) fn from_encoded(code: String, first: char) -> Self {
        debug_assert_eq!(code.chars().count(), CODE_LENGTH);
        Self { code, first }
    }

    /// The code as a string slice
    pub fn as_str(&self) -> &str {
        &self.code
    }

    /// Leading character (the uppercased first character of the word)
    pub fn first(&self) -> char {
        self.first
    }

    /// The three phonetic digits
    pub fn digits(&self) -> &str {
        &self.code[self.first.len_utf8()..]
    }

    /// Number of positions (0 to 4) at which two codes agree
    pub fn difference(&self, other: &SoundexCode) -> u8 {
        self.code
            .chars()
            .zip(other.code.chars())
            .filter(|(a, b)| a == b)
            .count() as u8
    }
}

/// Uppercase a single character, keeping it verbatim when its uppercase
/// form is more than one character
pub(crate) fn uppercase_char(c: char) -> char {
    if c.is_ascii() {
        return c.to_ascii_uppercase();
    }
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}

impl fmt::Display for SoundexCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code)
    }
}

impl AsRef<str> for SoundexCode {
    fn as_ref(&self) -> &str {
        &self.code
    }
}

impl FromStr for SoundexCode {
    type Err = SoundexError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = |msg: &str| SoundexError::InvalidCode {
            code: s.to_string(),
            msg: msg.to_string(),
        };

        if s.chars().count() != CODE_LENGTH {
            return Err(invalid("expected exactly 4 characters"));
        }

        let mut chars = s.chars();
        let first = chars.next().ok_or_else(|| invalid("expected exactly 4 characters"))?;
        if uppercase_char(first) != first {
            return Err(invalid("leading character must be uppercase"));
        }
        if !chars.all(|c| ('0'..='6').contains(&c)) {
            return Err(invalid("trailing characters must be digits 0-6"));
        }

        Ok(Self::from_encoded(s.to_string(), first))
    }
}

impl TryFrom<&str> for SoundexCode {
    type Error = SoundexError;

    fn try_from(s: &str) -> Result<Self> {
        s.parse()
    }
}

impl TryFrom<String> for SoundexCode {
    type Error = SoundexError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<SoundexCode> for String {
    fn from(code: SoundexCode) -> Self {
        code.code
    }
}

impl PartialEq<str> for SoundexCode {
    fn eq(&self, other: &str) -> bool {
        self.code == other
    }
}

impl PartialEq<&str> for SoundexCode {
    fn eq(&self, other: &&str) -> bool {
        self.code == *other
    }
}
