//! View observer outbound port. Receives view events for logging or error reporting.

use crate::domain::{DomainError, SortDirection, SortKey};
use std::num::NonZeroUsize;

/// Observability collaborator for the transcript view.
///
/// State changes in the view are pure; every side effect that only reports on them
/// goes through this trait. Implemented by adapters (e.g. tracing).
pub trait ViewObserver: Send + Sync {
    fn sort_key_changed(&self, key: SortKey);

    fn direction_changed(&self, direction: SortDirection);

    /// `None` when the page field was reset by invalid input.
    fn page_changed(&self, page: Option<NonZeroUsize>);

    fn transcripts_loaded(&self, count: usize);

    /// A fetch failed; the view keeps its previous (possibly empty) list.
    fn fetch_failed(&self, error: &DomainError);
}
