use crate::alphabet::{letter_counts, ALPHABET_SIZE};


/// How well the letter distribution of `letters` lines up with `reference`.
///
/// Highest when the most common letters of `letters` are the ones `reference`
/// weights most, i.e. when `letters` already reads as English.
pub fn calculate_mutual_ic(letters: &[u8], reference: &[f64; ALPHABET_SIZE]) -> f64 {
    if letters.is_empty() {
        return 0.0;
    }
    let n = letters.len() as f64;

    letter_counts(letters)
        .iter()
        .zip(reference.iter())
        .map(|(&count, freq)| freq * (count as f64 / n))
        .sum()
}
