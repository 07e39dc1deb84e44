//! Domain entities. Pure data structures for the core business.
//!
//! No HTTP/IO types here. Field names on the wire follow the transcript service
//! (`studentID`, `studentName`), mapped with serde renames.

use serde::{Deserialize, Serialize};

/// Student identifier as issued by the transcript service.
pub type StudentId = i64;

/// A student record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    #[serde(rename = "studentID")]
    pub id: StudentId,
    #[serde(rename = "studentName")]
    pub name: String,
}

/// One recorded grade for a course.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseGrade {
    /// Course number (e.g. "cs4530"). Older payloads omit it.
    #[serde(default)]
    pub course: String,
    pub grade: f64,
}

/// A student paired with all recorded course grades.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transcript {
    pub student: Student,
    #[serde(default)]
    pub grades: Vec<CourseGrade>,
}

impl Transcript {
    pub fn new(id: StudentId, name: impl Into<String>, grades: Vec<CourseGrade>) -> Self {
        Self {
            student: Student {
                id,
                name: name.into(),
            },
            grades,
        }
    }

    /// Arithmetic mean of the grade values. `None` when there are no grades.
    pub fn average(&self) -> Option<f64> {
        if self.grades.is_empty() {
            return None;
        }
        let total: f64 = self.grades.iter().map(|g| g.grade).sum();
        Some(total / self.grades.len() as f64)
    }
}

impl CourseGrade {
    pub fn new(course: impl Into<String>, grade: f64) -> Self {
        Self {
            course: course.into(),
            grade,
        }
    }
}
