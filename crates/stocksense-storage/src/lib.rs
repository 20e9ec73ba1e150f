//! # stocksense-storage
//!
//! Key-value persistence for the StockSense portal.
//!
//! The portal keeps exactly two blobs: the lockout counter in a durable
//! store and the login session in a volatile store. Both sit behind the
//! [`KeyValueStore`] trait so the backend can be swapped:
//!
//! - [`MemoryStore`]: `HashMap`-backed, lives as long as the process
//! - [`FileStore`]: one `<key>.json` file per key under a data directory
//!
//! [`JsonCodec`] adds typed encode/decode on top and reports whether a
//! value was actually loaded or a default was substituted ([`LoadOutcome`]).

pub mod codec;
pub mod file;
pub mod memory;
pub mod traits;

pub use codec::{JsonCodec, LoadOutcome};
pub use file::FileStore;
pub use memory::MemoryStore;
pub use traits::KeyValueStore;
