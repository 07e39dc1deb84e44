//! Form inputs for new students and new grades.
//!
//! The only checks are numeric coercion of ID and grade fields; names and course
//! numbers are passed through trimmed.

use crate::domain::{DomainError, StudentId};

#[derive(Debug, Clone, PartialEq)]
pub struct NewStudentForm {
    pub name: String,
}

impl NewStudentForm {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.trim().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewGradeForm {
    pub student_id: StudentId,
    pub course: String,
    pub grade: f64,
}

impl NewGradeForm {
    /// Build from raw text fields, coercing the numeric ones.
    pub fn from_input(student_id: &str, course: &str, grade: &str) -> Result<Self, DomainError> {
        let student_id = student_id.trim().parse::<StudentId>().map_err(|_| {
            DomainError::InvalidInput(format!("student ID '{}' is not an integer", student_id))
        })?;
        let grade = coerce_grade(grade)?;
        Ok(Self {
            student_id,
            course: course.trim().to_string(),
            grade,
        })
    }
}

/// Parse a grade as a finite number.
pub fn coerce_grade(raw: &str) -> Result<f64, DomainError> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|g| g.is_finite())
        .ok_or_else(|| DomainError::InvalidInput(format!("grade '{}' is not a number", raw)))
}
