use std::borrow::Cow;
use std::fmt;

use crate::errors::{GenerationError, GenerationResult};

/// Ordered set of characters used as a sampling domain.
///
/// Duplicates are allowed and simply weight the sampling towards the
/// repeated character.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Alphabet {
    chars: Cow<'static, str>,
}

pub const DIGITS: Alphabet = Alphabet::from_static("0123456789");
pub const LETTERS: Alphabet = Alphabet::from_static("abcdefghijklmnopqrstuvwxyz");
pub const UPPERCASE_LETTERS: Alphabet = Alphabet::from_static("ABCDEFGHIJKLMNOPQRSTUVWXYZ");
// No '%': a sampled symbol must never complete a placeholder token.
pub const SYMBOLS: Alphabet = Alphabet::from_static("~!@#$^&*()_+-=[]{}|;:,.<>?");
pub const LETTERS_AND_DIGITS: Alphabet =
    Alphabet::from_static("abcdefghijklmnopqrstuvwxyz0123456789");
pub const LETTERS_DIGITS_SYMBOLS: Alphabet =
    Alphabet::from_static("abcdefghijklmnopqrstuvwxyz0123456789~!@#$^&*()_+-=[]{}|;:,.<>?");

impl Alphabet {
    pub const fn from_static(chars: &'static str) -> Self {
        Self {
            chars: Cow::Borrowed(chars),
        }
    }

    /// Builds a caller-supplied alphabet. Empty input is rejected.
    pub fn new(chars: impl Into<String>) -> GenerationResult<Self> {
        let chars = chars.into();
        if chars.is_empty() {
            return Err(GenerationError::InvalidAlphabet);
        }

        Ok(Self {
            chars: Cow::Owned(chars),
        })
    }

    /// Looks up one of the named alphabets.
    pub fn by_name(name: &str) -> Option<Alphabet> {
        match name {
            "digits" => Some(DIGITS),
            "letters" => Some(LETTERS),
            "upper" => Some(UPPERCASE_LETTERS),
            "symbols" => Some(SYMBOLS),
            "alnum" => Some(LETTERS_AND_DIGITS),
            "all" => Some(LETTERS_DIGITS_SYMBOLS),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.chars
    }

    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.chars.chars()
    }

    /// Number of characters (not bytes).
    pub fn len(&self) -> usize {
        self.chars.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(c)
    }

    pub(crate) fn nth(&self, index: usize) -> Option<char> {
        self.chars.chars().nth(index)
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.chars)
    }
}

impl From<&'static str> for Alphabet {
    fn from(chars: &'static str) -> Self {
        Self::from_static(chars)
    }
}
