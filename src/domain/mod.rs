//! Core domain layer. No external I/O dependencies.
//!
//! Entities and business rules live here: ordering, pagination, form coercion.

pub mod entities;
pub mod errors;
pub mod forms;
pub mod ordering;
pub mod pagination;

pub use entities::{CourseGrade, Student, StudentId, Transcript};
pub use errors::DomainError;
pub use forms::{NewGradeForm, NewStudentForm};
pub use ordering::{SortDirection, SortKey, sort_transcripts};
pub use pagination::{PAGE_SIZE, PageField, page_bounds, page_count, paginate};
