//! New-student and new-grade submissions.
//!
//! Submits to the transcript client and returns. Does not touch the view; callers
//! refresh the view themselves after a successful submission.

use crate::domain::{DomainError, NewGradeForm, NewStudentForm, StudentId};
use crate::ports::TranscriptClient;
use std::sync::Arc;
use tracing::info;

pub struct EnrollmentService {
    client: Arc<dyn TranscriptClient>,
}

impl EnrollmentService {
    pub fn new(client: Arc<dyn TranscriptClient>) -> Self {
        Self { client }
    }

    /// Register a student. Returns the service-assigned ID.
    pub async fn submit_student(&self, form: &NewStudentForm) -> Result<StudentId, DomainError> {
        let id = self.client.create_student(form).await?;
        info!(student_id = id, name = %form.name, "student created");
        Ok(id)
    }

    /// Coerce the raw grade fields and record the grade.
    pub async fn submit_grade(
        &self,
        student_id: &str,
        course: &str,
        grade: &str,
    ) -> Result<NewGradeForm, DomainError> {
        let form = NewGradeForm::from_input(student_id, course, grade)?;
        self.client.create_grade(&form).await?;
        info!(
            student_id = form.student_id,
            course = %form.course,
            grade = form.grade,
            "grade recorded"
        );
        Ok(form)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryTranscriptClient;

    #[tokio::test]
    async fn test_submit_student_then_grade() {
        let client = Arc::new(InMemoryTranscriptClient::new());
        let service = EnrollmentService::new(client.clone());

        let id = service
            .submit_student(&NewStudentForm::new("Grace"))
            .await
            .unwrap();
        service
            .submit_grade(&id.to_string(), "cs4530", "95")
            .await
            .unwrap();

        let all = client.get_all_transcripts().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].student.name, "Grace");
        assert_eq!(all[0].average(), Some(95.0));
    }

    #[tokio::test]
    async fn test_submit_grade_rejects_non_numeric_before_calling_client() {
        let client = Arc::new(InMemoryTranscriptClient::new());
        let service = EnrollmentService::new(client);
        let err = service.submit_grade("1", "cs1", "A+").await.unwrap_err();
        assert!(matches!(err, DomainError::InvalidInput(_)));
    }
}
