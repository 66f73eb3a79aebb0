#[derive(thiserror::Error, Debug)]
pub enum RingCipherError {
    /// Error when creating a ring with an invalid modulus (m < 2).
    #[error("InvalidModulus: {0}")]
    InvalidModulus(String),
    /// Error when a required multiplicative inverse doesn't exist (gcd(a, m) != 1).
    #[error("NoInverse: {0}")]
    NoInverse(String),
    #[error("DimensionMismatch: {0}")]
    DimensionMismatch(String),
    #[error("IndexOutOfBounds: {0}")]
    IndexOutOfBounds(String),
    /// Gauss-Jordan elimination could not find an invertible pivot.
    #[error("SingularMatrix: {0}")]
    SingularMatrix(String),
    #[error("InternalError: {0}")]
    InternalError(String),

    #[error("Character {0:?} is not part of the alphabet")]
    UnknownCharacter(char),
    #[error("InvalidParameters: {0}")]
    InvalidParameters(String),

    #[error("Data serialization: {0}")]
    SerializationError(#[from] serde_json::Error),
    #[error("Base64 decoding failed: {0}")]
    Base64Error(#[from] base64::DecodeError),
    #[error("Failed to convert decoded bytes to UTF-8: {0}")]
    Utf8Error(#[from] std::string::FromUtf8Error),
}
