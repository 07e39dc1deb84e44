//! Text rendering of the current page. Formatting is pure; `print_page` writes to stdout.

use crate::domain::{SortKey, Transcript};
use crate::usecases::PageSnapshot;
use crossterm::ExecutableCommand;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use std::io::{Write, stdout};

/// One-line summary: ID, name, average, then each course grade.
pub fn transcript_line(t: &Transcript) -> String {
    let average = t
        .average()
        .map_or_else(|| "  n/a".to_string(), |avg| format!("{:>5.1}", avg));
    let grades = if t.grades.is_empty() {
        "no grades".to_string()
    } else {
        t.grades
            .iter()
            .map(|g| {
                if g.course.is_empty() {
                    format!("{}", g.grade)
                } else {
                    format!("{} {}", g.course, g.grade)
                }
            })
            .collect::<Vec<_>>()
            .join(", ")
    };
    format!(
        "#{:<6} {:<24} avg {}  ({})",
        t.student.id, t.student.name, average, grades
    )
}

/// Header: page position, list size, and active ordering.
pub fn page_header(s: &PageSnapshot) -> String {
    let page = match s.page {
        Some(p) => format!("Page {} of {}", p, s.page_count.max(1)),
        None => "Page -".to_string(),
    };
    let order = match s.sort_key {
        SortKey::None => "unsorted".to_string(),
        key => format!("by {} ({})", key, s.direction),
    };
    let fetched = s
        .fetched_at
        .map(|t| format!(", fetched {}", t.format("%H:%M:%S")))
        .unwrap_or_default();
    format!(
        "{} | {} transcripts | {}{}",
        page, s.total, order, fetched
    )
}

pub fn print_page(s: &PageSnapshot) {
    let mut out = stdout();
    let _ = out.execute(SetForegroundColor(Color::Cyan));
    let _ = out.execute(Print(format!("\r\n{}\r\n", page_header(s))));
    let _ = out.execute(ResetColor);
    if s.items.is_empty() {
        let _ = out.execute(Print("  (nothing to show)\r\n"));
    }
    for t in &s.items {
        let _ = out.execute(Print(format!("  {}\r\n", transcript_line(t))));
    }
    let _ = out.flush();
}

/// Print a one-line status message in `color`.
pub fn print_status(message: &str, color: Color) {
    let mut out = stdout();
    let _ = out.execute(SetForegroundColor(color));
    let _ = out.execute(Print(format!("{}\r\n", message)));
    let _ = out.execute(ResetColor);
    let _ = out.flush();
}
