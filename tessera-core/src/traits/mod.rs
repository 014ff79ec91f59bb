//! Collaborator interfaces consumed by the engine. Instances are
//! constructed by the caller and injected; there are no singletons.

pub mod cancellation;
pub mod embedder;
pub mod expander;
pub mod store;

pub use cancellation::{Cancellable, CancellationToken};
pub use embedder::IEmbeddingProvider;
pub use expander::ISynonymExpander;
pub use store::IChunkStore;
