//! Implements TranscriptClient over a Vec held in memory.
//!
//! Mirrors the transcript service: IDs are assigned sequentially, a grade for a course
//! that already has one replaces it, grades for unknown students are rejected.

use crate::domain::{
    CourseGrade, DomainError, NewGradeForm, NewStudentForm, StudentId, Transcript,
};
use crate::ports::TranscriptClient;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::RwLock;
use tracing::debug;

#[derive(Debug, Default)]
struct Store {
    transcripts: Vec<Transcript>,
    next_id: StudentId,
}

/// In-memory transcript store.
pub struct InMemoryTranscriptClient {
    store: RwLock<Store>,
    /// When set, every fetch fails (exercises degraded display).
    fail_fetch: AtomicBool,
}

impl InMemoryTranscriptClient {
    pub fn new() -> Self {
        Self::with_transcripts(Vec::new())
    }

    /// Seed with existing transcripts. New IDs continue after the largest seeded ID.
    pub fn with_transcripts(transcripts: Vec<Transcript>) -> Self {
        let next_id = transcripts
            .iter()
            .map(|t| t.student.id)
            .max()
            .map_or(1, |max| max + 1);
        Self {
            store: RwLock::new(Store {
                transcripts,
                next_id,
            }),
            fail_fetch: AtomicBool::new(false),
        }
    }

    /// Sample data for demo mode: enough students to span several pages.
    pub fn demo() -> Self {
        const NAMES: &[&str] = &[
            "Avery", "blake", "Casey", "Devon", "Emerson", "Finley", "Gray", "Harper", "Indigo",
            "Jordan", "Kai", "Logan", "Morgan", "Noel", "Oakley", "Parker", "Quinn", "Riley",
            "Sage", "Taylor", "Umi", "Val", "Wren", "Xen", "Yael", "Zion",
        ];
        const COURSES: &[&str] = &["cs2500", "cs3500", "cs4530", "cs4550"];

        let transcripts = (0..45i64)
            .map(|i| {
                let name = format!("{} {}", NAMES[i as usize % NAMES.len()], i / 26 + 1);
                // Every seventh student has no grades yet.
                let grades = if i % 7 == 3 {
                    Vec::new()
                } else {
                    COURSES
                        .iter()
                        .take(1 + (i as usize % COURSES.len()))
                        .enumerate()
                        .map(|(j, c)| CourseGrade::new(*c, (55 + (i * 13 + j as i64 * 7) % 46) as f64))
                        .collect()
                };
                Transcript::new(100 + (i * 37) % 45, name, grades)
            })
            .collect();
        Self::with_transcripts(transcripts)
    }

    pub fn set_fail_fetch(&self, fail: bool) {
        self.fail_fetch.store(fail, Ordering::SeqCst);
    }
}

impl Default for InMemoryTranscriptClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl TranscriptClient for InMemoryTranscriptClient {
    async fn get_all_transcripts(&self) -> Result<Vec<Transcript>, DomainError> {
        if self.fail_fetch.load(Ordering::SeqCst) {
            return Err(DomainError::Client("transcript store unavailable".into()));
        }
        let store = self.store.read().await;
        Ok(store.transcripts.clone())
    }

    async fn create_student(&self, form: &NewStudentForm) -> Result<StudentId, DomainError> {
        let mut store = self.store.write().await;
        let id = store.next_id;
        store.next_id += 1;
        store
            .transcripts
            .push(Transcript::new(id, form.name.clone(), Vec::new()));
        debug!(student_id = id, "in-memory student created");
        Ok(id)
    }

    async fn create_grade(&self, form: &NewGradeForm) -> Result<(), DomainError> {
        let mut store = self.store.write().await;
        let transcript = store
            .transcripts
            .iter_mut()
            .find(|t| t.student.id == form.student_id)
            .ok_or_else(|| {
                DomainError::Client(format!("no student with ID {}", form.student_id))
            })?;
        match transcript
            .grades
            .iter_mut()
            .find(|g| g.course == form.course)
        {
            Some(existing) => existing.grade = form.grade,
            None => transcript
                .grades
                .push(CourseGrade::new(form.course.clone(), form.grade)),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_ids_continue_after_seed() {
        let client = InMemoryTranscriptClient::with_transcripts(vec![Transcript::new(
            41,
            "Seed",
            vec![],
        )]);
        let id = client
            .create_student(&NewStudentForm::new("Next"))
            .await
            .unwrap();
        assert_eq!(id, 42);
    }

    #[tokio::test]
    async fn test_grade_for_same_course_replaces() {
        let client = InMemoryTranscriptClient::new();
        let id = client
            .create_student(&NewStudentForm::new("Ada"))
            .await
            .unwrap();
        for grade in [70.0, 88.0] {
            client
                .create_grade(&NewGradeForm {
                    student_id: id,
                    course: "cs4530".into(),
                    grade,
                })
                .await
                .unwrap();
        }
        let all = client.get_all_transcripts().await.unwrap();
        assert_eq!(all[0].grades, vec![CourseGrade::new("cs4530", 88.0)]);
    }

    #[tokio::test]
    async fn test_grade_for_unknown_student_fails() {
        let client = InMemoryTranscriptClient::new();
        let err = client
            .create_grade(&NewGradeForm {
                student_id: 9,
                course: "cs1".into(),
                grade: 1.0,
            })
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Client(_)));
    }

    #[tokio::test]
    async fn test_fail_fetch_toggle() {
        let client = InMemoryTranscriptClient::demo();
        assert_eq!(client.get_all_transcripts().await.unwrap().len(), 45);
        client.set_fail_fetch(true);
        assert!(client.get_all_transcripts().await.is_err());
    }
}
