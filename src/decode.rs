use crate::key::Key;
use crate::shift::shift_letter;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_with_key() {
        let key: Key = "ABC".parse().unwrap();

        assert_eq!(decode_with_key(b"abcab", &key), "aaaaa");
    }

    #[test]
    fn test_decode_with_key_lemon() {
        let key: Key = "LEMON".parse().unwrap();

        assert_eq!(decode_with_key(b"lxfopvefrnhr", &key), "attackatdawn");
    }

    #[test]
    fn test_decode_with_empty_key() {
        assert_eq!(decode_with_key(b"unchanged", &Key::new(Vec::new())), "unchanged");
    }
}

/// Undoes the repeating shift of `key` over `ciphertext`.
pub fn decode_with_key(ciphertext: &[u8], key: &Key) -> String {
    if key.is_empty() {
        return String::from_utf8_lossy(ciphertext).into_owned();
    }

    ciphertext
        .iter()
        .zip(key.shifts().iter().cycle())
        .map(|(&b, &shift)| shift_letter(b, shift) as char)
        .collect()
}
