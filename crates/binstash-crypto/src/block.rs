//! Raw AES-256 transform of single 256-bit blocks
//!
//! No chaining mode, no IV, no padding, no authentication: a 32-byte block is
//! the two 16-byte AES blocks of an ECB pass. ECB leaks equality between
//! blocks, which is acceptable here only because the intended inputs are
//! already uniformly random 256-bit hash digests. Do not point this at
//! general plaintext; that is what [`crate::seal`] is for.
//!
//! Decryption of arbitrary bytes never fails on format grounds, only on
//! length. Knowing whether a ciphertext block is meaningful is the caller's
//! problem.

use aes::cipher::{generic_array::GenericArray, BlockDecrypt, BlockEncrypt, KeyInit};
use aes::Aes256;

use crate::error::{CryptoError, CryptoResult};
use crate::BLOCK_SIZE;

const HALF: usize = BLOCK_SIZE / 2;

/// Stateless AES-256 single-block cipher for opaque 256-bit values.
pub struct BlockCipher256 {
    cipher: Aes256,
}

impl BlockCipher256 {
    /// Build from exactly 32 bytes of key material.
    pub fn new(key: &[u8]) -> CryptoResult<Self> {
        let cipher =
            Aes256::new_from_slice(key).map_err(|_| CryptoError::InvalidKeyLength(key.len()))?;
        Ok(Self { cipher })
    }

    /// Encrypt one 256-bit block. Input and output are exactly 32 bytes.
    pub fn encrypt_block(&self, plaintext: &[u8]) -> CryptoResult<[u8; BLOCK_SIZE]> {
        let block = check_block(plaintext)?;
        let mut lo = GenericArray::clone_from_slice(&block[..HALF]);
        let mut hi = GenericArray::clone_from_slice(&block[HALF..]);
        self.cipher.encrypt_block(&mut lo);
        self.cipher.encrypt_block(&mut hi);
        Ok(join(&lo, &hi))
    }

    /// Decrypt one 256-bit block. Input and output are exactly 32 bytes.
    pub fn decrypt_block(&self, ciphertext: &[u8]) -> CryptoResult<[u8; BLOCK_SIZE]> {
        let block = check_block(ciphertext)?;
        let mut lo = GenericArray::clone_from_slice(&block[..HALF]);
        let mut hi = GenericArray::clone_from_slice(&block[HALF..]);
        self.cipher.decrypt_block(&mut lo);
        self.cipher.decrypt_block(&mut hi);
        Ok(join(&lo, &hi))
    }

    /// [`Self::encrypt_block`] over a 64-char lowercase hex block.
    pub fn encrypt_hex(&self, plaintext_hex: &str) -> CryptoResult<String> {
        let plaintext = hex::decode(plaintext_hex)?;
        Ok(hex::encode(self.encrypt_block(&plaintext)?))
    }

    /// [`Self::decrypt_block`] over a 64-char lowercase hex block.
    pub fn decrypt_hex(&self, ciphertext_hex: &str) -> CryptoResult<String> {
        let ciphertext = hex::decode(ciphertext_hex)?;
        Ok(hex::encode(self.decrypt_block(&ciphertext)?))
    }
}

fn check_block(data: &[u8]) -> CryptoResult<&[u8; BLOCK_SIZE]> {
    data.try_into()
        .map_err(|_| CryptoError::InvalidBlockLength(data.len()))
}

fn join(lo: &aes::Block, hi: &aes::Block) -> [u8; BLOCK_SIZE] {
    let mut out = [0u8; BLOCK_SIZE];
    out[..HALF].copy_from_slice(lo);
    out[HALF..].copy_from_slice(hi);
    out
}
