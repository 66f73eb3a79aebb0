use fake::Fake;
use fake::faker::lorem::en::{Sentence, Words};
use rand::SeedableRng;
use rand::rngs::StdRng;
use ring_cipher::cipher::{
    AffineCipher, AffineKey, BlockKey, Cipher, CipherConfig, MatrixCipher, VigenereCipher,
};
use ring_cipher::codec::{decrypt_text, encrypt_text};
use ring_cipher::errors::RingCipherError;
use ring_cipher::matrix::{GLn, Matrix, sample_nonsingular};
use ring_cipher::preset::{BASE64, PRINTABLE_ASCII};
use ring_cipher::ring::{ModInt, Ring, Zm};

use std::sync::{Arc, Once};

static INIT: Once = Once::new();

fn init_logger() {
    INIT.call_once(|| {
        let _ = env_logger::builder().is_test(true).try_init();
    });
}

fn fake_message() -> String {
    let words: Vec<String> = Words(5..15).fake();
    let sentence: String = Sentence(3..8).fake();
    format!("{}\n{}", words.join(" "), sentence)
}

fn all_ciphers(config: &CipherConfig) -> Result<Vec<Box<dyn Cipher>>, RingCipherError> {
    Ok(vec![
        Box::new(AffineCipher::new(PRINTABLE_ASCII.clone(), config)?) as Box<dyn Cipher>,
        Box::new(VigenereCipher::new(PRINTABLE_ASCII.clone(), config)?),
        Box::new(MatrixCipher::new(PRINTABLE_ASCII.clone(), config)?),
    ])
}

#[test]
fn happy_flow() -> Result<(), RingCipherError> {
    init_logger();

    let config = CipherConfig::from_json(r#"{ "min_block_size": 5, "block_size_range": 20, "seed": 12345 }"#)?;
    for cipher in all_ciphers(&config)? {
        for _ in 0..10 {
            let original_data = fake_message();
            let ciphertext = cipher.encrypt(&original_data)?;
            let decoded_data = cipher.decrypt(&ciphertext)?;

            assert_eq!(original_data, decoded_data);
        }
    }

    Ok(())
}

#[test]
fn bytes_through_base64_alphabet() -> Result<(), RingCipherError> {
    init_logger();

    let config = CipherConfig::try_with(8, 8, Some(7))?;
    let cipher = MatrixCipher::new(BASE64.clone(), &config)?;
    let text = "Heh safasdkjfhkjas fha sdf asda \u{1F512}";

    let ciphertext = encrypt_text(&cipher, text)?;
    assert!(ciphertext.chars().all(|c| BASE64.contains(c)));
    assert_eq!(decrypt_text(&cipher, &ciphertext)?, text);

    Ok(())
}

#[test]
fn exported_keys_rebuild_ciphers() -> Result<(), RingCipherError> {
    init_logger();

    let config = CipherConfig::try_with(6, 6, Some(99))?;
    let message = "Keys survive a JSON round trip.";

    let affine = AffineCipher::new(PRINTABLE_ASCII.clone(), &config)?;
    let affine_key = AffineKey::from_json(&affine.key().to_json()?)?;
    let restored = AffineCipher::from_key(PRINTABLE_ASCII.clone(), &affine_key)?;
    assert_eq!(restored.decrypt(&affine.encrypt(message)?)?, message);

    let matrix = MatrixCipher::new(PRINTABLE_ASCII.clone(), &config)?;
    let block_key = BlockKey::from_json(&matrix.key().to_json()?)?;
    let restored = MatrixCipher::from_key(PRINTABLE_ASCII.clone(), &block_key)?;
    assert_eq!(restored.decrypt(&matrix.encrypt(message)?)?, message);

    // the same key over a different alphabet is refused
    assert!(MatrixCipher::from_key(BASE64.clone(), &block_key).is_err());

    Ok(())
}

#[test]
fn sampled_matrices_invert() -> Result<(), RingCipherError> {
    init_logger();

    let mut rng = StdRng::seed_from_u64(31337);
    for m in [2, 9, 11, 26, 65, 96] {
        let ring = Arc::new(Zm::try_with(m)?);
        let one = ModInt::new(1, &ring);
        for n in 1..=6 {
            let a = sample_nonsingular(n, &ring, &mut rng)?;
            let id = Matrix::identity(n, &one)?;
            assert_eq!(a.as_matrix().mul(a.inverse().as_matrix())?, id);
            assert_eq!(a.inverse().as_matrix().mul(a.as_matrix())?, id);
            assert_eq!(a.determinant().mul(a.inverse().determinant()), one);

            let rebuilt = GLn::try_from_matrix(a.as_matrix().clone())?;
            assert_eq!(rebuilt.inverse(), a.inverse());
        }
    }

    Ok(())
}
