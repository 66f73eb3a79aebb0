use crate::alphabet::Alphabet;

use lazy_static::lazy_static;

/// Standard Base64 symbols followed by the `=` padding character.
pub const BASE64_CHARS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/=";

lazy_static! {
    /// Newline plus every printable ASCII character (32..=126), 96 in total.
    /// Space is the padding character.
    pub static ref PRINTABLE_ASCII: Alphabet = {
        let chars: String = std::iter::once('\n')
            .chain((32u8..=126).map(char::from))
            .collect();

        Alphabet::new(&chars).unwrap_or_else(|e| panic!("Printable ASCII alphabet: {}", e))
    };

    /// The 64 Base64 symbols plus `=`, which is also the padding character.
    pub static ref BASE64: Alphabet = Alphabet::with_pad(BASE64_CHARS, '=')
        .unwrap_or_else(|e| panic!("Base64 alphabet: {}", e));
}

#[cfg(test)]
mod tests {
    use super::*;

    use base64::Engine;
    use base64::engine::general_purpose::STANDARD;

    use quickcheck::TestResult;
    use quickcheck::quickcheck;

    #[test]
    fn test_preset_sizes() {
        assert_eq!(PRINTABLE_ASCII.len(), 96);
        assert_eq!(PRINTABLE_ASCII.pad(), ' ');
        assert_eq!(PRINTABLE_ASCII.char_at(0), Some('\n'));
        assert_eq!(BASE64.len(), 65);
        assert_eq!(BASE64.pad(), '=');
    }

    quickcheck! {
        fn prop_base64_output_is_in_alphabet(data: Vec<u8>) -> TestResult {
            let encoded = STANDARD.encode(&data);

            for c in encoded.chars() {
                if !BASE64.contains(c) {
                    return TestResult::error(format!(
                        "Character '{}' from Base64 encoding is missing from the alphabet",
                        c
                    ));
                }
            }

            TestResult::passed()
        }

        fn prop_printable_text_is_in_alphabet(text: String) -> TestResult {
            let printable: String = text.chars().filter(|c| c.is_ascii_graphic() || *c == ' ').collect();
            TestResult::from_bool(printable.chars().all(|c| PRINTABLE_ASCII.contains(c)))
        }
    }
}
