//! Soundex - phonetic encoding for English words
//!
//! This crate maps a word to a four character Soundex code so that words
//! which sound alike share a code.
//!
//! ```
//! use soundex_codec::prelude::*;
//!
//! let code = Soundex.encode("Tymczak").unwrap();
//! assert_eq!(code.as_str(), "T522");
//! ```

pub mod code;
pub mod encoder;
pub mod error;
pub mod table;

pub use code::{SoundexCode, CODE_LENGTH};
pub use encoder::{difference, PhoneticEncoder, Soundex};
pub use error::{Result, SoundexError};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::{
        code::SoundexCode,
        encoder::{PhoneticEncoder, Soundex},
        error::{Result, SoundexError},
        table::Phonetic,
    };
}

/// Encode a word and return the code as a plain string
pub fn soundex(word: &str) -> Result<String> {
    Ok(Soundex.encode(word)?.into())
}
