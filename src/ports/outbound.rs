//! Outbound ports. Application calls into infrastructure.
//!
//! Implemented by adapters.

use crate::domain::{DomainError, NewGradeForm, NewStudentForm, StudentId, Transcript};

/// Data access client for the transcript service.
#[async_trait::async_trait]
pub trait TranscriptClient: Send + Sync {
    /// Fetch every transcript (student plus grades).
    async fn get_all_transcripts(&self) -> Result<Vec<Transcript>, DomainError>;

    /// Register a new student. Returns the ID assigned by the service.
    async fn create_student(&self, form: &NewStudentForm) -> Result<StudentId, DomainError>;

    /// Record a grade for an existing student.
    async fn create_grade(&self, form: &NewGradeForm) -> Result<(), DomainError>;
}
