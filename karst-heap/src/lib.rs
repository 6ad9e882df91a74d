//!
//! This crate contains the heap side of karst values: objects that several values hold at once,
//! kept alive by a plain (non-atomic) holder count.
//!

/// The `Shared` handle and the holder protocol.
pub mod shared;
/// Per-thread allocation counters. Mostly useful for tests and debugging leaks.
pub mod stats;

pub use shared::{Shareable, Shared};
pub use stats::{live_objects, HeapStats};
