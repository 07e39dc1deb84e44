//! Application use cases. Orchestrate domain logic via ports.

pub mod enrollment_service;
pub mod transcript_view;

pub use enrollment_service::EnrollmentService;
pub use transcript_view::{NoopObserver, PageSnapshot, TranscriptCache, TranscriptView};
