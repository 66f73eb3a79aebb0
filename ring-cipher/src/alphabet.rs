use crate::errors::RingCipherError;

use itertools::Itertools;

use std::collections::BTreeSet;
use std::fmt;

/// An ordered set of characters; a character's position is the residue a
/// cipher works with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    chars: Vec<char>,
    pad: char,
}

impl Alphabet {
    /// Builds an alphabet from the distinct characters of `chars`, sorted.
    ///
    /// The padding character is a space if the alphabet has one, otherwise
    /// its first character.
    ///
    /// # Errors
    ///
    /// Returns `RingCipherError::InvalidParameters` if fewer than two
    /// distinct characters are given.
    ///
    /// # Example
    ///
    /// ```
    /// # use ring_cipher::alphabet::Alphabet;
    /// let alphabet = Alphabet::new("cabba").unwrap();
    /// assert_eq!(alphabet.len(), 3);
    /// assert_eq!(alphabet.index_of('c'), Some(2));
    /// assert_eq!(alphabet.pad(), 'a');
    /// ```
    pub fn new(chars: &str) -> Result<Self, RingCipherError> {
        let chars: Vec<char> = chars.chars().collect::<BTreeSet<_>>().into_iter().collect();
        if chars.len() < 2 {
            return Err(RingCipherError::InvalidParameters(format!(
                "Alphabet needs at least 2 distinct characters, got {}",
                chars.len()
            )));
        }

        let pad = if chars.contains(&' ') { ' ' } else { chars[0] };
        Ok(Self { chars, pad })
    }

    pub fn with_pad(chars: &str, pad: char) -> Result<Self, RingCipherError> {
        let mut alphabet = Self::new(chars)?;
        if !alphabet.contains(pad) {
            return Err(RingCipherError::UnknownCharacter(pad));
        }
        alphabet.pad = pad;
        Ok(alphabet)
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn char_at(&self, i: usize) -> Option<char> {
        self.chars.get(i).copied()
    }

    pub fn index_of(&self, c: char) -> Option<usize> {
        self.chars.binary_search(&c).ok()
    }

    pub fn contains(&self, c: char) -> bool {
        self.index_of(c).is_some()
    }

    pub fn pad(&self) -> char {
        self.pad
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Maps every character of `text` to its index.
    pub(crate) fn encode(&self, text: &str) -> Result<Vec<u64>, RingCipherError> {
        text.chars()
            .map(|c| {
                self.index_of(c)
                    .map(|i| i as u64)
                    .ok_or(RingCipherError::UnknownCharacter(c))
            })
            .collect()
    }

    pub(crate) fn decode(&self, indices: &[u64]) -> Result<String, RingCipherError> {
        indices
            .iter()
            .map(|&i| {
                self.char_at(i as usize).ok_or_else(|| {
                    RingCipherError::IndexOutOfBounds(format!(
                        "No character at {} in an alphabet of {}",
                        i,
                        self.len()
                    ))
                })
            })
            .collect()
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.chars.iter().map(|c| format!("{:?}", c)).join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sorted_and_deduplicated() -> Result<(), RingCipherError> {
        let alphabet = Alphabet::new("dcbadcba")?;
        assert_eq!(alphabet.chars(), &['a', 'b', 'c', 'd']);
        assert_eq!(alphabet.char_at(3), Some('d'));
        assert_eq!(alphabet.char_at(4), None);
        assert!(!alphabet.contains('e'));
        Ok(())
    }

    #[test]
    fn test_too_small() {
        assert!(Alphabet::new("").is_err());
        assert!(Alphabet::new("aaaa").is_err());
    }

    #[test]
    fn test_pad_selection() -> Result<(), RingCipherError> {
        assert_eq!(Alphabet::new("xy z")?.pad(), ' ');
        assert_eq!(Alphabet::new("xyz")?.pad(), 'x');
        assert_eq!(Alphabet::with_pad("xyz", 'z')?.pad(), 'z');
        assert!(matches!(
            Alphabet::with_pad("xyz", 'q'),
            Err(RingCipherError::UnknownCharacter('q'))
        ));
        Ok(())
    }

    #[test]
    fn test_encode_decode() -> Result<(), RingCipherError> {
        let alphabet = Alphabet::new("abc ")?;
        assert_eq!(alphabet.encode("cab a")?, vec![3, 1, 2, 0, 1]);
        assert_eq!(alphabet.decode(&[3, 1, 2, 0, 1])?, "cab a");
        assert!(matches!(
            alphabet.encode("abd"),
            Err(RingCipherError::UnknownCharacter('d'))
        ));
        assert!(alphabet.decode(&[4]).is_err());
        Ok(())
    }

    #[test]
    fn test_display() -> Result<(), RingCipherError> {
        assert_eq!(Alphabet::new("ba")?.to_string(), "['a', 'b']");
        Ok(())
    }
}
