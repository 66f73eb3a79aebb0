use clap::{Parser, ValueEnum};
use ring_cipher::cipher::{AffineCipher, Cipher, CipherConfig, MatrixCipher, VigenereCipher};
use ring_cipher::errors::RingCipherError;
use ring_cipher::preset::PRINTABLE_ASCII;

use serde::Serialize;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "cipher-cli")]
#[command(about = "Affine and matrix ciphers over Z_m on printable ASCII")]
#[command(version)]
struct Args {
    /// Cipher to generate a key for
    #[arg(value_enum)]
    kind: CipherKind,

    /// Message to encrypt
    message: String,

    /// JSON file with a cipher config (min_block_size, block_size_range, seed)
    config: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
enum CipherKind {
    /// Character-wise a·x + b
    Affine,
    /// Blocks shifted by a diagonal key
    Vigenere,
    /// Blocks mixed by a random invertible matrix
    Matrix,
}

#[derive(Debug, Serialize)]
struct Report {
    kind: CipherKind,
    key: serde_json::Value,
    ciphertext: String,
    decrypted: String,
}

fn load_config(path: Option<&Path>) -> Result<CipherConfig, RingCipherError> {
    let Some(path) = path else {
        return Ok(CipherConfig::default());
    };

    log::debug!("Reading cipher config from {}", path.display());
    let json = std::fs::read_to_string(path).map_err(|e| {
        RingCipherError::InvalidParameters(format!(
            "Cannot read config {}: {}",
            path.display(),
            e
        ))
    })?;
    CipherConfig::from_json(&json)
}

fn build_cipher(
    kind: CipherKind,
    config: &CipherConfig,
) -> Result<(Box<dyn Cipher>, serde_json::Value), RingCipherError> {
    let alphabet = PRINTABLE_ASCII.clone();
    match kind {
        CipherKind::Affine => {
            let cipher = AffineCipher::new(alphabet, config)?;
            let key = serde_json::to_value(cipher.key())?;
            Ok((Box::new(cipher), key))
        }
        CipherKind::Vigenere => {
            let cipher = VigenereCipher::new(alphabet, config)?;
            let key = serde_json::to_value(cipher.key())?;
            Ok((Box::new(cipher), key))
        }
        CipherKind::Matrix => {
            let cipher = MatrixCipher::new(alphabet, config)?;
            let key = serde_json::to_value(cipher.key())?;
            Ok((Box::new(cipher), key))
        }
    }
}

fn run(args: &Args) -> Result<Report, RingCipherError> {
    let config = load_config(args.config.as_deref())?;

    let (cipher, key) = build_cipher(args.kind, &config)?;
    log::info!("Built {:?} cipher over {}", args.kind, cipher.alphabet());

    let ciphertext = cipher.encrypt(&args.message)?;
    let decrypted = cipher.decrypt(&ciphertext)?;
    if decrypted != args.message {
        log::warn!("Round trip changed the message (trailing padding characters are stripped)");
    }

    Ok(Report {
        kind: args.kind,
        key,
        ciphertext,
        decrypted,
    })
}

fn main() -> ExitCode {
    // Log to stderr (if you run with `RUST_LOG=debug`).
    env_logger::init();

    let args = Args::parse();
    match run(&args).and_then(|report| Ok(serde_json::to_string_pretty(&report)?)) {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{}", e);
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
