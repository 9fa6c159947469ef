//! Letter to phonetic class lookup
//!
//! Every ASCII letter maps to one of seven phonetic classes. Anything else
//! (digits, punctuation, whitespace, non-Latin letters) maps to
//! [`Phonetic::NotALetter`], which is deliberately kept apart from the
//! silent class.

use serde::{Deserialize, Serialize};

/// Phonetic class of a single character
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phonetic {
    /// A, E, H, I, O, U, W, Y (class 0, never emitted)
    Silent,
    /// B, F, P, V
    Labial,
    /// C, G, J, K, Q, S, X, Z
    Guttural,
    /// D, T
    Dental,
    /// L
    Lateral,
    /// M, N
    Nasal,
    /// R
    Rhotic,
    /// Not an ASCII letter at all
    NotALetter,
}

impl Phonetic {
    /// Digit emitted into a code, `None` for classes that are never emitted
    pub fn digit(self) -> Option<char> {
        match self {
            Phonetic::Silent | Phonetic::NotALetter => None,
            Phonetic::Labial => Some('1'),
            Phonetic::Guttural => Some('2'),
            Phonetic::Dental => Some('3'),
            Phonetic::Lateral => Some('4'),
            Phonetic::Nasal => Some('5'),
            Phonetic::Rhotic => Some('6'),
        }
    }

    /// Numeric class 0-6, `None` for [`Phonetic::NotALetter`]
    pub fn class(self) -> Option<u8> {
        match self {
            Phonetic::Silent => Some(0),
            Phonetic::NotALetter => None,
            other => other.digit().map(|d| d as u8 - b'0'),
        }
    }
}

/// Phonetic class of each uppercase letter, indexed from 'A'
pub const PHONETIC_TABLE: [Phonetic; 26] = {
    use Phonetic::*;
    [
        Silent,   // A
        Labial,   // B
        Guttural, // C
        Dental,   // D
        Silent,   // E
        Labial,   // F
        Guttural, // G
        Silent,   // H
        Silent,   // I
        Guttural, // J
        Guttural, // K
        Lateral,  // L
        Nasal,    // M
        Nasal,    // N
        Silent,   // O
        Labial,   // P
        Guttural, // Q
        Rhotic,   // R
        Guttural, // S
        Dental,   // T
        Silent,   // U
        Labial,   // V
        Silent,   // W
        Guttural, // X
        Silent,   // Y
        Guttural, // Z
    ]
};

/// Look up the phonetic class of a character, ignoring case
pub fn classify(c: char) -> Phonetic {
    if !c.is_ascii_alphabetic() {
        return Phonetic::NotALetter;
    }
    let index = (c.to_ascii_uppercase() as u8 - b'A') as usize;
    PHONETIC_TABLE[index]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_classes() {
        let classes: Vec<u8> = PHONETIC_TABLE.iter().filter_map(|p| p.class()).collect();
        assert_eq!(
            classes,
            vec![0, 1, 2, 3, 0, 1, 2, 0, 0, 2, 2, 4, 5, 5, 0, 1, 2, 6, 2, 3, 0, 1, 0, 2, 0, 2]
        );
    }

    #[test]
    fn test_classify_ignores_case() {
        for (upper, lower) in ('A'..='Z').zip('a'..='z') {
            assert_eq!(classify(upper), classify(lower));
        }
        assert_eq!(classify('m'), Phonetic::Nasal);
        assert_eq!(classify('R'), Phonetic::Rhotic);
    }

    #[test]
    fn test_non_letters() {
        for c in ['\'', ' ', '0', '9', '-', '@', '[', '`', 'é', 'ß', 'Ж'] {
            assert_eq!(classify(c), Phonetic::NotALetter, "char {:?}", c);
        }
    }

    #[test]
    fn test_silent_is_not_sentinel() {
        assert_ne!(Phonetic::Silent, Phonetic::NotALetter);
        assert_eq!(Phonetic::Silent.class(), Some(0));
        assert_eq!(Phonetic::NotALetter.class(), None);
        assert_eq!(Phonetic::Silent.digit(), None);
        assert_eq!(Phonetic::NotALetter.digit(), None);
    }
}
