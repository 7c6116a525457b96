//! Authenticated-encryption tokens: XChaCha20-Poly1305
//!
//! Token format (frozen, version 0x01):
//! ```text
//! [1 byte: version][8 bytes: unix seconds, big-endian][24 bytes: random nonce][ciphertext + 16-byte tag]
//! AAD = version byte || timestamp
//! ```
//!
//! `seal` draws a fresh nonce per call, so sealing the same plaintext twice
//! under the same key never yields the same token. `open` is all-or-nothing:
//! any malformation, truncation, tamper, or key mismatch surfaces as the one
//! uniform [`CryptoError::InvalidToken`], and no partial plaintext escapes.

use std::time::{SystemTime, UNIX_EPOCH};

use chacha20poly1305::{
    aead::{Aead, KeyInit, Payload},
    XChaCha20Poly1305, XNonce,
};
use rand::RngCore;

use crate::error::{CryptoError, CryptoResult};
use crate::key::Key;
use crate::{NONCE_SIZE, TAG_SIZE};

/// Current (and only) token format version byte.
pub const TOKEN_VERSION: u8 = 0x01;

const TIMESTAMP_SIZE: usize = 8;
const HEADER_SIZE: usize = 1 + TIMESTAMP_SIZE + NONCE_SIZE;

/// Smallest possible well-formed token: header plus the tag of an empty
/// ciphertext.
pub const MIN_TOKEN_SIZE: usize = HEADER_SIZE + TAG_SIZE;

/// Seal `plaintext` under `key` into one opaque token.
pub fn seal(plaintext: &[u8], key: &Key) -> CryptoResult<Vec<u8>> {
    let timestamp = unix_now();
    seal_at(plaintext, key, timestamp)
}

// Timestamp injection point so tests can pin the header.
fn seal_at(plaintext: &[u8], key: &Key, timestamp: u64) -> CryptoResult<Vec<u8>> {
    let cipher = XChaCha20Poly1305::new(key.as_bytes().into());

    let mut nonce_bytes = [0u8; NONCE_SIZE];
    rand::thread_rng().fill_bytes(&mut nonce_bytes);
    let nonce = XNonce::from_slice(&nonce_bytes);

    let mut token = Vec::with_capacity(HEADER_SIZE + plaintext.len() + TAG_SIZE);
    token.push(TOKEN_VERSION);
    token.extend_from_slice(&timestamp.to_be_bytes());
    token.extend_from_slice(&nonce_bytes);

    let ciphertext = cipher
        .encrypt(
            nonce,
            Payload {
                msg: plaintext,
                aad: &token[..1 + TIMESTAMP_SIZE],
            },
        )
        .map_err(|_| CryptoError::InvalidToken)?;

    token.extend_from_slice(&ciphertext);
    Ok(token)
}

/// Open a token produced by [`seal`], returning the plaintext.
///
/// Fails closed with [`CryptoError::InvalidToken`] on any defect: token too
/// short, unrecognized version byte, or authentication failure (wrong key,
/// corruption, truncation, tampering).
pub fn open(token: &[u8], key: &Key) -> CryptoResult<Vec<u8>> {
    if token.len() < MIN_TOKEN_SIZE || token[0] != TOKEN_VERSION {
        return Err(CryptoError::InvalidToken);
    }

    let aad = &token[..1 + TIMESTAMP_SIZE];
    let nonce = XNonce::from_slice(&token[1 + TIMESTAMP_SIZE..HEADER_SIZE]);
    let ciphertext = &token[HEADER_SIZE..];

    let cipher = XChaCha20Poly1305::new(key.as_bytes().into());
    cipher
        .decrypt(
            nonce,
            Payload {
                msg: ciphertext,
                aad,
            },
        )
        .map_err(|_| CryptoError::InvalidToken)
}

/// Creation timestamp embedded in a token, as unix seconds.
///
/// Reads the unauthenticated header only; it is diagnostic information, not
/// a verified claim, until [`open`] succeeds on the same token.
pub fn token_timestamp(token: &[u8]) -> CryptoResult<u64> {
    if token.len() < MIN_TOKEN_SIZE || token[0] != TOKEN_VERSION {
        return Err(CryptoError::InvalidToken);
    }
    let mut ts = [0u8; TIMESTAMP_SIZE];
    ts.copy_from_slice(&token[1..1 + TIMESTAMP_SIZE]);
    Ok(u64::from_be_bytes(ts))
}

fn unix_now() -> u64 {
    // A clock before 1970 is not a case worth failing a seal over
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
