
pub const ALPHABET_SIZE: usize = 26;

/// Relative letter frequencies of English text, `a` through `z`.
pub const ENGLISH_FREQ_DIST: [f64; ALPHABET_SIZE] = [
    0.082, 0.015, 0.028, 0.042, 0.127, 0.022, 0.020, 0.061, 0.070, 0.002, 0.008, 0.040, 0.024,
    0.067, 0.075, 0.019, 0.001, 0.060, 0.063, 0.091, 0.028, 0.010, 0.023, 0.001, 0.020, 0.001,
];

pub fn is_letter(b: u8) -> bool {
    b.is_ascii_lowercase()
}

pub fn letter_index(letter: u8) -> u8 {
    letter - b'a'
}

pub fn index_letter(index: u8) -> u8 {
    index % ALPHABET_SIZE as u8 + b'a'
}

/// Occurrences of each of `a`..=`z` in `letters`.
///
/// Bytes outside the alphabet are not counted; `Ciphertext` keeps them out of
/// the analysis in the first place.
pub fn letter_counts(letters: &[u8]) -> [usize; ALPHABET_SIZE] {
    let mut counts = [0; ALPHABET_SIZE];

    for &letter in letters.iter().filter(|&&b| is_letter(b)) {
        counts[letter_index(letter) as usize] += 1;
    }

    counts
}
