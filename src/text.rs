use crate::alphabet::is_letter;
use crate::error::{Error, Res};


/// Keeps the ASCII letters of `raw`, lowercased.
pub fn clean(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_alphabetic())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Lowercase `a`-`z` text with at least two letters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ciphertext(String);

impl Ciphertext {
    pub const MIN_LEN: usize = 2;

    pub fn new(letters: &str) -> Res<Ciphertext> {
        if !letters.bytes().all(is_letter) {
            return Err(Error::InvalidArgument);
        }
        if letters.len() < Self::MIN_LEN {
            return Err(Error::DegenerateInput);
        }

        Ok(Ciphertext(letters.to_string()))
    }

    pub fn from_raw(raw: &str) -> Res<Ciphertext> {
        Ciphertext::new(&clean(raw))
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}
