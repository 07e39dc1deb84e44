//! Pagination over the ordered transcript list, plus the page-number input field.
//!
//! Pages are 1-based windows of [`PAGE_SIZE`] entries. A page past the end is empty.

use std::num::NonZeroUsize;
use std::ops::Range;

/// Number of transcripts shown per page.
pub const PAGE_SIZE: usize = 20;

/// Index range of `page` within a sequence of `len` items, clamped to `len`.
pub fn page_bounds(len: usize, page: NonZeroUsize) -> Range<usize> {
    let start = (page.get() - 1).saturating_mul(PAGE_SIZE);
    if start >= len {
        return len..len;
    }
    let end = start.saturating_add(PAGE_SIZE).min(len);
    start..end
}

/// The slice of `items` shown on `page`.
pub fn paginate<T>(items: &[T], page: NonZeroUsize) -> &[T] {
    &items[page_bounds(items.len(), page)]
}

/// Number of non-empty pages for `len` items.
pub fn page_count(len: usize) -> usize {
    len.div_ceil(PAGE_SIZE)
}

/// Integer prefix parse: optional leading whitespace and sign, then digits.
/// A `0x`/`0X` prefix selects hexadecimal, otherwise decimal. Trailing characters
/// are ignored (`"12abc"` is 12). No digits after the prefix means `None`.
pub fn parse_int_prefix(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let (radix, rest) = match rest.get(..2) {
        Some("0x") | Some("0X") => (16, &rest[2..]),
        _ => (10, rest),
    };
    let digits: &str = &rest[..rest
        .find(|c: char| !c.is_digit(radix))
        .unwrap_or(rest.len())];
    if digits.is_empty() {
        return None;
    }
    let magnitude = digits
        .chars()
        .filter_map(|c| c.to_digit(radix))
        .fold(0i64, |acc, d| {
            acc.saturating_mul(i64::from(radix))
                .saturating_add(i64::from(d))
        });
    Some(if negative { -magnitude } else { magnitude })
}

/// Page-number input. Either holds valid positive-integer text or is unset.
///
/// Every input replaces the state: text that parses to an integer >= 1 is kept,
/// anything else clears the field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageField {
    text: String,
    page: Option<NonZeroUsize>,
}

impl PageField {
    /// Field showing page 1.
    pub fn new() -> Self {
        Self {
            text: "1".to_string(),
            page: Some(NonZeroUsize::MIN),
        }
    }

    /// Apply one edit of the input text. Returns the resulting page, if any.
    pub fn input(&mut self, raw: &str) -> Option<NonZeroUsize> {
        let page = parse_int_prefix(raw)
            .filter(|&n| n >= 1)
            .map(|n| usize::try_from(n).unwrap_or(usize::MAX))
            .and_then(NonZeroUsize::new);
        match page {
            Some(p) => {
                self.text = raw.to_string();
                self.page = Some(p);
            }
            None => self.clear(),
        }
        self.page
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.page = None;
    }

    pub fn page(&self) -> Option<NonZeroUsize> {
        self.page
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_unset(&self) -> bool {
        self.page.is_none()
    }
}

impl Default for PageField {
    fn default() -> Self {
        Self::new()
    }
}
