#![forbid(unsafe_code)]

pub mod builtin;
pub mod store;

pub use store::{CorpusError, KnowledgeStore, KnowledgeStoreBuilder, MISSING_CONTENT};
