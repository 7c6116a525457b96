//! The encode/decode pipeline
//!
//! Encode: postcard serialize → zstd compress (if asked) → seal (if keyed) →
//! write to disk (if a destination is given) → return the final bytes.
//! Decode runs the same stages inverted and in reverse order. The on-disk
//! blob is exactly the encoded bytes, no extra header.
//!
//! Each call logs one info record with the size of every intermediate
//! representation and the wall time of every stage, in the humanized forms
//! from binstash-core.

use std::fmt::Write as _;
use std::path::Path;
use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::info;

use binstash_core::{humanize_duration, humanize_len, Stopwatch};
use binstash_crypto::Key;

use crate::error::{CodecError, CodecResult};

/// zstd effort tier; top of the normal (non-long-window) range.
const COMPRESSION_LEVEL: i32 = 19;

/// Encode `value` into a self-describing byte blob.
///
/// `compress` and `key` select the optional pipeline stages; `destination`
/// additionally writes the final bytes to disk, overwriting any existing
/// file. The final bytes are returned in every case, written or not, and a
/// write failure is surfaced as [`CodecError::Io`], never swallowed.
pub fn encode<T: Serialize + ?Sized>(
    value: &T,
    compress: bool,
    key: Option<&Key>,
    destination: Option<&Path>,
) -> CodecResult<Vec<u8>> {
    let sw = Stopwatch::start();
    let serialized = postcard::to_stdvec(value).map_err(CodecError::Serialize)?;
    let serialized_len = serialized.len();
    let serialize_time = sw.elapsed();

    let (blob, compressed_len, compress_time) = if compress {
        let sw = Stopwatch::start();
        let compressed =
            zstd::encode_all(serialized.as_slice(), COMPRESSION_LEVEL).map_err(CodecError::Compress)?;
        let len = compressed.len();
        (compressed, Some(len), sw.elapsed())
    } else {
        (serialized, None, Duration::ZERO)
    };

    let (blob, encrypted_len, encrypt_time) = if let Some(key) = key {
        let sw = Stopwatch::start();
        let token = binstash_crypto::seal(&blob, key)?;
        let len = token.len();
        (token, Some(len), sw.elapsed())
    } else {
        (blob, None, Duration::ZERO)
    };

    info!(
        "encoded blob: {}",
        stage_summary(
            serialized_len,
            serialize_time,
            compressed_len,
            compress_time,
            encrypted_len,
            encrypt_time,
        )
    );

    if let Some(path) = destination {
        let sw = Stopwatch::start();
        std::fs::write(path, &blob).map_err(|source| CodecError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        info!(
            "blob saved: {} ({})",
            path.display(),
            humanize_duration(sw.elapsed())
        );
    }

    Ok(blob)
}

/// Decode a blob produced by [`encode`] back into a value.
///
/// If `source` is given it wins and `data` is ignored; a missing file is
/// [`CodecError::NotFound`]. With neither `source` nor `data` there is
/// nothing to load yet and the call is a documented no-op returning
/// `Ok(None)`. The `compress` and `key` arguments must match the ones used
/// to encode; any stage failure surfaces its specific error.
pub fn decode<T: DeserializeOwned>(
    data: Option<&[u8]>,
    source: Option<&Path>,
    compress: bool,
    key: Option<&Key>,
) -> CodecResult<Option<T>> {
    let blob: Vec<u8> = match (source, data) {
        (Some(path), _) => {
            let sw = Stopwatch::start();
            let bytes = std::fs::read(path).map_err(|source| match source.kind() {
                std::io::ErrorKind::NotFound => CodecError::NotFound {
                    path: path.to_path_buf(),
                },
                _ => CodecError::Io {
                    path: path.to_path_buf(),
                    source,
                },
            })?;
            info!(
                "blob read: {} ({})",
                path.display(),
                humanize_duration(sw.elapsed())
            );
            bytes
        }
        (None, Some(bytes)) => bytes.to_vec(),
        (None, None) => return Ok(None),
    };

    let (blob, encrypted_len, decrypt_time) = if let Some(key) = key {
        let encrypted_len = blob.len();
        let sw = Stopwatch::start();
        let plain = binstash_crypto::open(&blob, key)?;
        (plain, Some(encrypted_len), sw.elapsed())
    } else {
        (blob, None, Duration::ZERO)
    };

    let (blob, compressed_len, decompress_time) = if compress {
        let compressed_len = blob.len();
        let sw = Stopwatch::start();
        let plain = zstd::decode_all(blob.as_slice()).map_err(CodecError::Decompress)?;
        (plain, Some(compressed_len), sw.elapsed())
    } else {
        (blob, None, Duration::ZERO)
    };

    let sw = Stopwatch::start();
    let value = postcard::from_bytes(&blob).map_err(CodecError::Deserialize)?;

    info!(
        "decoded blob: {}",
        stage_summary(
            blob.len(),
            sw.elapsed(),
            compressed_len,
            decompress_time,
            encrypted_len,
            decrypt_time,
        )
    );

    Ok(Some(value))
}

fn stage_summary(
    serialized_len: usize,
    serialize_time: Duration,
    compressed_len: Option<usize>,
    compress_time: Duration,
    encrypted_len: Option<usize>,
    encrypt_time: Duration,
) -> String {
    let mut summary = format!(
        "{} serialized ({})",
        humanize_len(serialized_len),
        humanize_duration(serialize_time)
    );
    if let Some(len) = compressed_len {
        let _ = write!(
            summary,
            "; {} compressed ({})",
            humanize_len(len),
            humanize_duration(compress_time)
        );
    }
    if let Some(len) = encrypted_len {
        let _ = write!(
            summary,
            "; {} encrypted ({})",
            humanize_len(len),
            humanize_duration(encrypt_time)
        );
    }
    summary
}
