//! In-memory transcript client. Used for demo mode and tests.

pub mod in_memory_client;

pub use in_memory_client::InMemoryTranscriptClient;
