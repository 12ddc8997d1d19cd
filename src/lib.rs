pub mod alphabet;
pub mod analysis;
pub mod config;
pub mod decode;
pub mod error;
pub mod ic;
pub mod key;
pub mod mic;
pub mod observer;
pub mod shift;
pub mod text;

#[cfg(test)]
mod tests {
    use super::analysis::{break_vigenere, Analysis};
    use super::config::AnalysisConfig;
    use super::ic::KeyLengthResult;
    use super::key::{find_key, Key};
    use super::text::Ciphertext;
    use rand::Rng;

    fn english_sample() -> String {
        super::text::clean(include_str!("../resources/english_sample.txt"))
    }

    fn encode_with_key(plaintext: &str, key: &Key) -> String {
        plaintext
            .bytes()
            .zip(key.shifts().iter().cycle())
            .map(|(b, &shift)| super::shift::shift_letter(b, 26 - shift) as char)
            .collect()
    }

    fn break_with_key(key: &str) -> Analysis {
        let key: Key = key.parse().unwrap();
        let ciphertext = Ciphertext::new(&encode_with_key(&english_sample(), &key)).unwrap();

        break_vigenere(&ciphertext, &AnalysisConfig::default(), &mut ())
    }

    #[test]
    fn test_encode_abc_example() {
        let key: Key = "ABC".parse().unwrap();

        assert_eq!(encode_with_key("aaaaa", &key), "abcab");
    }

    #[test]
    fn test_break_vigenere_key_of_3() {
        let analysis = break_with_key("KEY");

        assert_eq!(analysis.key_length, KeyLengthResult::Found(3));
        assert_eq!(analysis.key.to_string(), "KEY");
        assert_eq!(analysis.plaintext, english_sample());
    }

    #[test]
    fn test_break_vigenere_key_of_5() {
        let analysis = break_with_key("LEMON");

        assert_eq!(analysis.key_length, KeyLengthResult::Found(5));
        assert_eq!(analysis.key.to_string(), "LEMON");
        assert_eq!(analysis.plaintext, english_sample());
    }

    #[test]
    fn test_break_vigenere_key_of_7() {
        let analysis = break_with_key("CIPHERS");

        assert_eq!(analysis.key_length, KeyLengthResult::Found(7));
        assert_eq!(analysis.key.to_string(), "CIPHERS");
        assert_eq!(analysis.plaintext, english_sample());
    }

    #[test]
    fn test_break_vigenere_plain_english() {
        let analysis = break_with_key("A");

        assert_eq!(analysis.key_length, KeyLengthResult::Found(1));
        assert_eq!(analysis.key.to_string(), "A");
    }

    #[test]
    fn test_break_vigenere_is_idempotent() {
        assert_eq!(break_with_key("LEMON"), break_with_key("LEMON"));
    }

    #[test]
    fn test_random_keys_round_trip() {
        let plaintext = english_sample();
        let mut rng = rand::thread_rng();

        for _ in 0..20 {
            let key_length = rng.gen_range(1..=8);
            let key = Key::new((0..key_length).map(|_| rng.gen_range(0..26)).collect());
            let ciphertext = encode_with_key(&plaintext, &key);

            let recovered = find_key(ciphertext.as_bytes(), key_length, &mut ());
            assert_eq!(recovered, key);
            assert_eq!(
                super::decode::decode_with_key(ciphertext.as_bytes(), &recovered),
                plaintext
            );
        }
    }
}
