//! The 256-bit key value type
//!
//! Keys cross process boundaries as URL-safe base64 text (44 chars, padding
//! kept); in memory they are fixed 32-byte arrays, zeroized on drop and
//! redacted in Debug output. Anything that is not exactly 32 bytes is
//! rejected before use.

use base64::{engine::general_purpose::URL_SAFE, Engine as _};
use rand::RngCore;
use zeroize::Zeroize;

use crate::error::{CryptoError, CryptoResult};
use crate::KEY_SIZE;

/// A 256-bit symmetric key. Zeroized on drop.
#[derive(Clone)]
pub struct Key {
    bytes: [u8; KEY_SIZE],
}

impl Key {
    pub fn from_bytes(bytes: [u8; KEY_SIZE]) -> Self {
        Self { bytes }
    }

    /// Build a key from a byte slice, rejecting anything but 32 bytes.
    pub fn from_slice(bytes: &[u8]) -> CryptoResult<Self> {
        let bytes: [u8; KEY_SIZE] = bytes
            .try_into()
            .map_err(|_| CryptoError::InvalidKeyLength(bytes.len()))?;
        Ok(Self { bytes })
    }

    /// Parse the URL-safe base64 boundary encoding produced by [`Key::to_base64`].
    pub fn from_base64(encoded: &str) -> CryptoResult<Self> {
        let mut decoded = URL_SAFE
            .decode(encoded.trim())
            .map_err(|_| CryptoError::KeyEncoding)?;
        let key = Self::from_slice(&decoded);
        // decoded holds key material; clear it regardless of outcome
        decoded.zeroize();
        key
    }

    /// Generate a fresh random key from the OS CSPRNG.
    pub fn generate() -> Self {
        let mut bytes = [0u8; KEY_SIZE];
        rand::thread_rng().fill_bytes(&mut bytes);
        Self { bytes }
    }

    pub fn as_bytes(&self) -> &[u8; KEY_SIZE] {
        &self.bytes
    }

    /// URL-safe base64 encoding of the raw key, padding kept, no line wraps.
    pub fn to_base64(&self) -> String {
        URL_SAFE.encode(self.bytes)
    }
}

impl Drop for Key {
    fn drop(&mut self) {
        self.bytes.zeroize();
    }
}

impl std::fmt::Debug for Key {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Key").field("bytes", &"[REDACTED]").finish()
    }
}
