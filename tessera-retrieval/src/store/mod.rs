//! Chunk store adapters.
//!
//! The engine only ever talks to `IChunkStore`; this module ships the
//! in-memory implementation used by tests and small deployments.

mod memory;

pub use memory::MemoryChunkStore;
