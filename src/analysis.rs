use crate::config::AnalysisConfig;
use crate::decode::decode_with_key;
use crate::error::{Error, Res};
use crate::ic::{get_key_length, KeyLengthResult};
use crate::key::{find_key, Key};
use crate::observer::Observer;
use crate::text::Ciphertext;
use serde::Serialize;


#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Analysis {
    pub key_length: KeyLengthResult,
    pub key: Key,
    pub plaintext: String,
}

impl Analysis {
    pub fn is_confident(&self) -> bool {
        self.key_length.is_found()
    }
}

/// Estimates the key length, recovers the key and decodes `ciphertext` with it.
pub fn break_vigenere(
    ciphertext: &Ciphertext,
    config: &AnalysisConfig,
    observer: &mut impl Observer,
) -> Analysis {
    let key_length = get_key_length(ciphertext.as_bytes(), config, observer);

    solve(ciphertext, key_length, observer)
}

/// Like `break_vigenere`, but trusts the caller's key length.
pub fn break_vigenere_with_key_length(
    ciphertext: &Ciphertext,
    key_length: usize,
    observer: &mut impl Observer,
) -> Res<Analysis> {
    if key_length == 0 || key_length > ciphertext.len() {
        return Err(Error::InvalidArgument);
    }

    Ok(solve(ciphertext, KeyLengthResult::Found(key_length), observer))
}

fn solve(
    ciphertext: &Ciphertext,
    key_length: KeyLengthResult,
    observer: &mut impl Observer,
) -> Analysis {
    let key = find_key(ciphertext.as_bytes(), key_length.key_length(), observer);
    let plaintext = decode_with_key(ciphertext.as_bytes(), &key);

    Analysis {
        key_length,
        key,
        plaintext,
    }
}
