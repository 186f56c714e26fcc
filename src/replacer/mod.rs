//! Page replacement policies.
//!
//! Each replacer owns its frames and bookkeeping, and implements
//! [`ReplacementPolicy`](crate::ReplacementPolicy).

mod fifo;
mod lru;
mod optimal;

pub use {fifo::FifoReplacer, lru::LruReplacer, optimal::OptimalReplacer};
