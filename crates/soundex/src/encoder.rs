//! Soundex encoder

use crate::code::{uppercase_char, SoundexCode, CODE_LENGTH};
use crate::table::{classify, Phonetic};
use crate::{Result, SoundexError};
use tracing::{debug, trace};

/// Generic phonetic encoder trait
pub trait PhoneticEncoder {
    /// Encode a word to its phonetic code
    fn encode(&self, word: &str) -> Result<SoundexCode>;

    /// Check whether two words encode to the same code
    fn is_encoded_equal(&self, a: &str, b: &str) -> Result<bool> {
        Ok(self.encode(a)? == self.encode(b)?)
    }

    /// Short identifier for the encoder
    fn name(&self) -> &'static str;
}

/// American Soundex encoder
///
/// Produces a four character code made of the uppercased first character of
/// the word followed by three phonetic digits, zero padded.
///
/// Vowels and the silent letters H, W, Y separate consonants of the same
/// class, so "Tymczak" keeps both the M and the C/Z/K group. Characters that
/// are not letters are skipped without separating anything, so the
/// apostrophe in "O'Hara" has no effect.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Soundex;

impl Soundex {
    /// Create a new Soundex encoder
    pub fn new() -> Self {
        Self
    }

    /// Encode a possibly missing word; `None` is rejected like an empty word
    pub fn encode_opt(&self, word: Option<&str>) -> Result<SoundexCode> {
        match word {
            Some(word) => self.encode(word),
            None => {
                debug!("rejecting missing word");
                Err(SoundexError::empty_word())
            }
        }
    }

    /// Number of positions (0 to 4) at which the codes of two words agree
    pub fn difference(&self, a: &str, b: &str) -> Result<u8> {
        Ok(self.encode(a)?.difference(&self.encode(b)?))
    }
}

impl PhoneticEncoder for Soundex {
    fn encode(&self, word: &str) -> Result<SoundexCode> {
        let mut chars = word.chars();
        let first = match chars.next() {
            Some(c) => c,
            None => {
                debug!("rejecting empty word");
                return Err(SoundexError::empty_word());
            }
        };

        let lead = uppercase_char(first);
        let mut code = String::with_capacity(CODE_LENGTH + lead.len_utf8());
        code.push(lead);
        let mut len = 1;

        let mut previous = classify(first);
        for c in chars {
            let current = classify(c);
            if current == Phonetic::Silent {
                previous = Phonetic::Silent;
            } else if current != previous {
                // NotALetter has no digit and leaves `previous` untouched
                if let Some(digit) = current.digit() {
                    code.push(digit);
                    previous = current;
                    len += 1;
                    if len == CODE_LENGTH {
                        trace!(word, code = %code, "encoded");
                        return Ok(SoundexCode::from_encoded(code, lead));
                    }
                }
            }
        }

        while len < CODE_LENGTH {
            code.push('0');
            len += 1;
        }

        trace!(word, code = %code, "encoded");
        Ok(SoundexCode::from_encoded(code, lead))
    }

    fn name(&self) -> &'static str {
        "soundex"
    }
}

/// Number of positions (0 to 4) at which the Soundex codes of two words agree
pub fn difference(a: &str, b: &str) -> Result<u8> {
    Soundex.difference(a, b)
}
