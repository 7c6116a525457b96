//! binstash-crypto: the crypto primitives behind the binstash codec
//!
//! Three independent tools sharing one key type:
//!
//! - `kdf`: password → [`Key`] via PBKDF2-HMAC-SHA256 with frozen constants
//! - `seal`: authenticated-encryption tokens (XChaCha20-Poly1305)
//! - `block`: raw AES-256 transform of single 256-bit blocks, for opaque
//!   hash digests only
//!
//! Key derivation never feeds the other two automatically: callers derive a
//! [`Key`] once and pass it wherever it is needed. No component holds state
//! across calls, so everything here is freely usable from concurrent threads.

pub mod block;
pub mod error;
pub mod kdf;
pub mod key;
pub mod seal;

pub use block::BlockCipher256;
pub use error::{CryptoError, CryptoResult};
pub use kdf::derive_key;
pub use key::Key;
pub use seal::{open, seal};

/// Size of a symmetric key in bytes (256-bit)
pub const KEY_SIZE: usize = 32;

/// Size of an XChaCha20-Poly1305 nonce (192-bit)
pub const NONCE_SIZE: usize = 24;

/// Size of a Poly1305 authentication tag
pub const TAG_SIZE: usize = 16;

/// Size of the fixed block handled by [`BlockCipher256`] (256-bit)
pub const BLOCK_SIZE: usize = 32;
