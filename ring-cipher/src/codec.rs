//! Encrypting arbitrary bytes by first turning them into Base64 text.

use crate::cipher::Cipher;
use crate::errors::RingCipherError;

use base64::Engine;
use base64::engine::general_purpose::STANDARD_NO_PAD;

/// Base64-encodes `bytes` without padding and encrypts the result.
///
/// The cipher's alphabet must contain every Base64 symbol, as
/// [`BASE64`](crate::preset::BASE64) does.
pub fn encrypt_bytes<C: Cipher + ?Sized>(cipher: &C, bytes: &[u8]) -> Result<String, RingCipherError> {
    cipher.encrypt(&STANDARD_NO_PAD.encode(bytes))
}

pub fn decrypt_bytes<C: Cipher + ?Sized>(cipher: &C, text: &str) -> Result<Vec<u8>, RingCipherError> {
    let encoded = cipher.decrypt(text)?;
    let encoded = encoded.trim_end_matches(cipher.alphabet().pad());
    Ok(STANDARD_NO_PAD.decode(encoded)?)
}

pub fn encrypt_text<C: Cipher + ?Sized>(cipher: &C, text: &str) -> Result<String, RingCipherError> {
    encrypt_bytes(cipher, text.as_bytes())
}

pub fn decrypt_text<C: Cipher + ?Sized>(cipher: &C, text: &str) -> Result<String, RingCipherError> {
    Ok(String::from_utf8(decrypt_bytes(cipher, text)?)?)
}
