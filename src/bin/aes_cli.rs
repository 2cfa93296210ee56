// src/bin/aes_cli.rs
//! Demo CLI exercising the AES-ECB/PKCS#7 logic used by the UDFs.
//!
//! `aes_cli enc <key> <input>` encrypts the input string and prints the
//! ciphertext as lowercase hex and standard base64. `aes_cli dec <key>
//! <hex>` takes the hex rendering back to the plaintext. Diagnostics go
//! to stderr with distinct exit codes so scripts can tell failure modes
//! apart: 2 usage, 3 bad key length, 4 unknown mode, 5 crypto failure.

use std::process::ExitCode;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use aes_udf::consts::VALID_KEY_LENGTHS;
use aes_udf::crypto::{decrypt_to_vec, encrypt_to_vec};

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 4 {
        let prog = args.first().map(String::as_str).unwrap_or("aes_cli");
        eprintln!("Usage: {prog} enc|dec <key> <input>");
        return ExitCode::from(2);
    }
    let (mode, key, input) = (args[1].as_str(), args[2].as_bytes(), args[3].as_str());

    if !VALID_KEY_LENGTHS.contains(&key.len()) {
        eprintln!("key length must be 16/24/32 bytes");
        return ExitCode::from(3);
    }

    let result = match mode {
        "enc" => encrypt_to_vec(input.as_bytes(), key),
        "dec" => {
            let ciphertext = match hex::decode(input) {
                Ok(bytes) => bytes,
                Err(_) => {
                    eprintln!("dec input must be the lowercase-hex ciphertext");
                    return ExitCode::from(2);
                }
            };
            decrypt_to_vec(&ciphertext, key)
        }
        other => {
            eprintln!("unknown mode: {other}");
            return ExitCode::from(4);
        }
    };

    match result {
        Ok(out) => {
            println!("hex:{}", hex::encode(&out));
            println!("b64:{}", STANDARD.encode(&out));
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("crypto failed: {err}");
            ExitCode::from(5)
        }
    }
}
