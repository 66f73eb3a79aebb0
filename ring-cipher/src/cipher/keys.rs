use crate::alphabet::Alphabet;
use crate::errors::RingCipherError;
use crate::ring::{ModInt, Zm};

use serde::{Deserialize, Serialize};

use std::sync::Arc;

/// Exported key of an [`AffineCipher`](super::AffineCipher).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AffineKey {
    pub modulus: u64,
    pub a: u64,
    pub b: u64,
}

/// Exported key of a block cipher: the `n × n` matrix `a` as rows and the
/// shift column `b`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockKey {
    pub modulus: u64,
    pub a: Vec<Vec<u64>>,
    pub b: Vec<u64>,
}

impl AffineKey {
    pub fn to_json(&self) -> Result<String, RingCipherError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, RingCipherError> {
        Ok(serde_json::from_str(json)?)
    }
}

impl BlockKey {
    pub fn to_json(&self) -> Result<String, RingCipherError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, RingCipherError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// The ring a key over `alphabet` must live in.
pub(crate) fn key_ring(alphabet: &Alphabet, modulus: u64) -> Result<Arc<Zm>, RingCipherError> {
    if modulus != alphabet.len() as u64 {
        return Err(RingCipherError::InvalidParameters(format!(
            "Key modulus {} does not match an alphabet of {} characters",
            modulus,
            alphabet.len()
        )));
    }
    Ok(Arc::new(Zm::try_with(modulus)?))
}

/// Lifts an exported residue back into `ring`, rejecting values that were
/// never reduced.
pub(crate) fn residue(x: u64, ring: &Arc<Zm>) -> Result<ModInt, RingCipherError> {
    if x >= ring.modulus() {
        return Err(RingCipherError::InvalidParameters(format!(
            "Key entry {} is not a residue mod {}",
            x,
            ring.modulus()
        )));
    }
    Ok(ModInt::new(x as i64, ring))
}
