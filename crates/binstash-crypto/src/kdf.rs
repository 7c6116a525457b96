//! Key derivation: password → 256-bit key via PBKDF2-HMAC-SHA256
//!
//! This path is for interactive derive-then-use flows, not for storing a
//! password database, so the salt is a fixed constant: the goal is an
//! implementation-specific dictionary-attack cost, not per-user salting.
//! The iteration count is set roughly 3x above the usual PBKDF2 floor and
//! costs about a second of CPU on commodity hardware. That cost is the
//! feature, not a bug.

use pbkdf2::pbkdf2_hmac;
use secrecy::{ExposeSecret, SecretString};
use sha2::Sha256;

use crate::error::{CryptoError, CryptoResult};
use crate::key::Key;
use crate::KEY_SIZE;

/// Frozen salt. Changing it silently invalidates every previously derived
/// key, so it must never change.
const SALT: [u8; 16] = [
    0xda, 0x34, 0x2c, 0x39, 0x32, 0x80, 0x88, 0xf1, 0xc8, 0x18, 0x78, 0x40, 0x51, 0x95, 0x2a, 0x26,
];

/// Frozen iteration count. Same compatibility commitment as [`SALT`].
const ITERATIONS: u32 = 1_745_202;

/// Derive a 256-bit key from a password.
///
/// Deterministic: the same password always yields the same key, on every
/// platform. Fails with [`CryptoError::EmptyPassword`] if the password is
/// empty or whitespace-only.
pub fn derive_key(password: &SecretString) -> CryptoResult<Key> {
    if password.expose_secret().trim().is_empty() {
        return Err(CryptoError::EmptyPassword);
    }

    let mut out = [0u8; KEY_SIZE];
    pbkdf2_hmac::<Sha256>(
        password.expose_secret().as_bytes(),
        &SALT,
        ITERATIONS,
        &mut out,
    );
    Ok(Key::from_bytes(out))
}
