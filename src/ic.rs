use crate::alphabet::letter_counts;
use crate::config::AnalysisConfig;
use crate::key::fetch_nth_from_each_period;
use crate::observer::Observer;
use serde::Serialize;


/// Probability that two letters drawn from `letters` without replacement match.
///
/// Defined as 0 for fewer than two letters, where no pair can be drawn.
pub fn calculate_ic(letters: &[u8]) -> f64 {
    let n = letters.len();
    if n < 2 {
        return 0.0;
    }

    let coincidences: usize = letter_counts(letters)
        .iter()
        .map(|&count| count * count.saturating_sub(1))
        .sum();

    coincidences as f64 / (n * (n - 1)) as f64
}

/// Mean IC of the `key_length` interleaved columns of `ciphertext`.
pub fn average_ic(ciphertext: &[u8], key_length: usize) -> f64 {
    let ic_sum: f64 = (0..key_length)
        .map(|n| calculate_ic(&fetch_nth_from_each_period(ciphertext, n, key_length)))
        .sum();

    ic_sum / key_length as f64
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "confidence", content = "value", rename_all = "lowercase")]
pub enum KeyLengthResult {
    /// The first key length whose columns read like English.
    Found(usize),
    /// Nothing up to the search bound did; the bound is returned as a best effort.
    Exhausted(usize),
}

impl KeyLengthResult {
    pub fn key_length(&self) -> usize {
        match *self {
            KeyLengthResult::Found(key_length) | KeyLengthResult::Exhausted(key_length) => {
                key_length
            }
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, KeyLengthResult::Found(_))
    }
}

pub fn get_key_length(
    ciphertext: &[u8],
    config: &AnalysisConfig,
    observer: &mut impl Observer,
) -> KeyLengthResult {
    let bound = config.key_length_bound(ciphertext.len()).max(1);
    let mut key_length = 0;

    let result = loop {
        key_length += 1;
        let ic = average_ic(ciphertext, key_length);
        observer.key_length_candidate(key_length, ic);

        if ic + config.ic_tolerance >= config.english_ic {
            break KeyLengthResult::Found(key_length);
        }
        if key_length >= bound {
            break KeyLengthResult::Exhausted(key_length);
        }
    };

    observer.key_length_result(&result);
    result
}
