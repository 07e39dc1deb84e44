//! Transcript ordering. Pure functions; input slices are never mutated.
//!
//! Sorting is stable (`slice::sort_by`): entries that compare equal keep their input
//! order in both directions. Transcripts without grades have no average and are placed
//! after every graded transcript regardless of direction.

use crate::domain::{DomainError, Transcript};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Column the list is ordered by. `None` keeps the fetched order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    None,
    Id,
    Name,
    Average,
}

impl SortKey {
    /// Selector options in display order.
    pub const ALL: [SortKey; 4] = [SortKey::None, SortKey::Id, SortKey::Name, SortKey::Average];

    /// Map a selector value (`"id"`, `"name"`, `"average"`) to a key.
    /// Anything else, including the empty placeholder, means no sorting.
    pub fn from_selector(value: &str) -> Self {
        match value.trim() {
            "id" => SortKey::Id,
            "name" => SortKey::Name,
            "average" => SortKey::Average,
            _ => SortKey::None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::None => "",
            SortKey::Id => "id",
            SortKey::Name => "name",
            SortKey::Average => "average",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortKey::None => "No sorting",
            SortKey::Id => "Student ID",
            SortKey::Name => "Student name",
            SortKey::Average => "Average Grade",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub const ALL: [SortDirection; 2] = [SortDirection::Ascending, SortDirection::Descending];

    /// Orient an ascending comparison result.
    pub fn apply(self, ord: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ord,
            SortDirection::Descending => ord.reverse(),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SortDirection::Ascending => "asc",
            SortDirection::Descending => "desc",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortDirection::Ascending => f.write_str("Ascending"),
            SortDirection::Descending => f.write_str("Descending"),
        }
    }
}

impl FromStr for SortDirection {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "asc" => Ok(SortDirection::Ascending),
            "desc" => Ok(SortDirection::Descending),
            other => Err(DomainError::InvalidInput(format!(
                "unknown sort direction '{}'",
                other
            ))),
        }
    }
}

/// Return a new vector with the transcripts ordered by `key` in `direction`.
pub fn sort_transcripts(
    transcripts: &[Transcript],
    key: SortKey,
    direction: SortDirection,
) -> Vec<Transcript> {
    let mut sorted = transcripts.to_vec();
    if key != SortKey::None {
        sorted.sort_by(|a, b| compare(a, b, key, direction));
    }
    sorted
}

/// Comparator used by [`sort_transcripts`]. Total for every key.
pub fn compare(a: &Transcript, b: &Transcript, key: SortKey, direction: SortDirection) -> Ordering {
    match key {
        SortKey::None => Ordering::Equal,
        SortKey::Id => direction.apply(a.student.id.cmp(&b.student.id)),
        SortKey::Name => direction.apply(locale_cmp(&a.student.name, &b.student.name)),
        SortKey::Average => compare_averages(a.average(), b.average(), direction),
    }
}

/// Missing averages go last in both directions; direction only orients graded entries.
fn compare_averages(a: Option<f64>, b: Option<f64>, direction: SortDirection) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => direction.apply(x.total_cmp(&y)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// One collation unit: lowercase base letter, the combining marks on it, and
/// whether the source letter was uppercase.
struct CollationUnit {
    base: char,
    marks: Vec<char>,
    upper: bool,
}

/// Canonically decompose `s` and group combining marks with the letter they follow.
fn collation_units(s: &str) -> Vec<CollationUnit> {
    let mut units: Vec<CollationUnit> = Vec::with_capacity(s.len());
    for c in s.nfd() {
        if is_combining_mark(c) {
            if let Some(last) = units.last_mut() {
                last.marks.push(c);
                continue;
            }
        }
        let upper = c.is_uppercase();
        units.extend(c.to_lowercase().map(|base| CollationUnit {
            base,
            marks: Vec::new(),
            upper,
        }));
    }
    units
}

/// Human-oriented string ordering in three levels:
/// base letters ignoring case and accents, then accents (unaccented first),
/// then case (lowercase first). Code point order breaks any remaining tie.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    let ua = collation_units(a);
    let ub = collation_units(b);
    let primary = ua.iter().map(|u| u.base).cmp(ub.iter().map(|u| u.base));
    primary
        .then_with(|| ua.iter().map(|u| &u.marks).cmp(ub.iter().map(|u| &u.marks)))
        .then_with(|| ua.iter().map(|u| u.upper).cmp(ub.iter().map(|u| u.upper)))
        .then_with(|| a.cmp(b))
}
