use thiserror::Error;

use crate::{BLOCK_SIZE, KEY_SIZE};

pub type CryptoResult<T> = Result<T, CryptoError>;

#[derive(Debug, Error)]
pub enum CryptoError {
    #[error("empty passwords are not allowed, for safety reasons")]
    EmptyPassword,

    #[error("key must be exactly {KEY_SIZE} bytes, got {0}")]
    InvalidKeyLength(usize),

    #[error("block must be exactly {BLOCK_SIZE} bytes, got {0}")]
    InvalidBlockLength(usize),

    /// Uniform failure for every way opening a token can go wrong: wrong key,
    /// flipped byte, truncation, unknown version. Deliberately carries no
    /// detail that would let a caller distinguish the cases.
    #[error("invalid, corrupted, or mismatched token")]
    InvalidToken,

    #[error("key is not valid URL-safe base64")]
    KeyEncoding,

    #[error("invalid hex block: {0}")]
    HexEncoding(#[from] hex::FromHexError),
}
