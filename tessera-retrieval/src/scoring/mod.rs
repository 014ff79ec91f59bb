//! Per-strategy scorers. All pure functions over a chunk and the query;
//! batching and parallelism live in `batch`.

pub mod batch;
pub mod keyword;
pub mod semantic;
pub mod synonym;
