//! binstash-core: shared glue for the binstash workspace
//!
//! - `error`: the core error taxonomy (`CoreError`)
//! - `humanize`: human-readable byte sizes (1024 steps), decimal sizes
//!   (1000 steps), and durations
//! - `timer`: `Stopwatch` and the `TimedScope` log-on-drop guard
//! - `hash`: SHA-256 fingerprints of byte slices and files
//! - `logging`: tracing-subscriber setup for binaries and tests

pub mod error;
pub mod hash;
pub mod humanize;
pub mod logging;
pub mod timer;

pub use error::{CoreError, CoreResult};
pub use hash::{sha256_bytes, sha256_file, sha256_hex};
pub use humanize::{humanize_bytes, humanize_decimal, humanize_duration, humanize_len, humanize_seconds};
pub use timer::{Stopwatch, TimedScope};
