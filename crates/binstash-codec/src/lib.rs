//! binstash-codec: self-describing binary object blobs
//!
//! Encode pipeline: value → postcard bytes → zstd compress (optional) →
//! seal (optional) → disk (optional). Decode applies the exact inverse in
//! reverse order. Each stage either succeeds or stops the whole call with a
//! typed error; nothing is retried or silently skipped.
//!
//! Payloads are anything `serde` can represent; the [`Value`] enum covers the
//! dynamic case (nested maps, sequences, sets, primitives) when there is no
//! static type to deserialize into.

pub mod codec;
pub mod error;
pub mod value;

pub use codec::{decode, encode};
pub use error::{CodecError, CodecResult};
pub use value::Value;
