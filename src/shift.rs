use crate::alphabet::{index_letter, letter_index, ALPHABET_SIZE};


/// Moves `letter` back `shift` places, wrapping from `a` to `z`.
pub fn shift_letter(letter: u8, shift: u8) -> u8 {
    let shift = shift % ALPHABET_SIZE as u8;
    index_letter(letter_index(letter) + ALPHABET_SIZE as u8 - shift)
}

pub fn shift_string(letters: &[u8], shift: u8) -> Vec<u8> {
    letters.iter().map(|&b| shift_letter(b, shift)).collect()
}
