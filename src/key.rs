use crate::alphabet::{ALPHABET_SIZE, ENGLISH_FREQ_DIST};
use crate::error::Error;
use crate::mic::calculate_mutual_ic;
use crate::observer::Observer;
use crate::shift::shift_string;
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;


/// Shift of every key position, `0` standing for `A`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key(Vec<u8>);

impl Key {
    pub fn new(shifts: Vec<u8>) -> Key {
        Key(shifts.into_iter().map(|s| s % ALPHABET_SIZE as u8).collect())
    }

    pub fn shifts(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for shift in &self.0 {
            write!(f, "{}", (b'A' + shift) as char)?;
        }
        Ok(())
    }
}

impl FromStr for Key {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_alphabetic()) {
            return Err(Error::InvalidArgument);
        }

        Ok(Key(s.bytes().map(|b| b.to_ascii_uppercase() - b'A').collect()))
    }
}

impl Serialize for Key {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Letters at positions `n`, `n + key_length`, `n + 2 * key_length`, ...
pub fn fetch_nth_from_each_period(arr: &[u8], n: usize, key_length: usize) -> Vec<u8> {
    arr.iter().skip(n).step_by(key_length).cloned().collect()
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShiftScore {
    pub shift: u8,
    pub score: f64,
}

/// Tries all 26 shifts of `arr` and keeps the one scoring closest to English.
///
/// Only a strictly higher score replaces the running best, so ties go to the
/// lowest shift.
pub fn brute_force_shift(arr: &[u8], position: usize, observer: &mut impl Observer) -> ShiftScore {
    let mut max_shift_score = ShiftScore {
        shift: 0,
        score: 0.0,
    };

    for possible_shift in 0..ALPHABET_SIZE as u8 {
        let shifted = shift_string(arr, possible_shift);
        let score = calculate_mutual_ic(&shifted, &ENGLISH_FREQ_DIST);
        observer.shift_candidate(position, possible_shift, score);

        if score > max_shift_score.score {
            max_shift_score = ShiftScore {
                shift: possible_shift,
                score,
            };
        }
    }

    max_shift_score
}

pub fn find_key(ciphertext: &[u8], key_length: usize, observer: &mut impl Observer) -> Key {
    let shifts = (0..key_length)
        .map(|n| {
            let nth_column = fetch_nth_from_each_period(ciphertext, n, key_length);
            brute_force_shift(&nth_column, n, observer).shift
        })
        .collect();
    let key = Key(shifts);

    observer.key_found(&key);
    key
}
