use std::path::PathBuf;

use thiserror::Error;

use binstash_crypto::CryptoError;

pub type CodecResult<T> = Result<T, CodecError>;

#[derive(Debug, Error)]
pub enum CodecError {
    #[error("serialization failed: {0}")]
    Serialize(#[source] postcard::Error),

    #[error("deserialization failed: {0}")]
    Deserialize(#[source] postcard::Error),

    #[error("compression failed: {0}")]
    Compress(#[source] std::io::Error),

    #[error("decompression failed: {0}")]
    Decompress(#[source] std::io::Error),

    #[error(transparent)]
    Crypto(#[from] CryptoError),

    #[error("blob not found: {path}")]
    NotFound { path: PathBuf },

    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
