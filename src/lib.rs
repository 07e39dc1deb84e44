//! transcript-viewer: sort, paginate, and extend student transcripts with Hexagonal Architecture.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod shared;
pub mod usecases;
