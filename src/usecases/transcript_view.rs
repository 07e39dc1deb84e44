//! Transcript view state: the fetched list, sort selection, and page field.
//!
//! - Fetches once on `mount`, then only on explicit `refresh`
//! - Sort and page changes recompute synchronously; no client calls
//! - Fetch failures never escape: the list degrades and the observer is told

use crate::domain::{
    DomainError, PageField, SortDirection, SortKey, Transcript, page_count, paginate,
    sort_transcripts,
};
use crate::ports::{TranscriptClient, ViewObserver};
use chrono::{DateTime, Utc};
use std::num::NonZeroUsize;
use std::sync::Arc;
use tracing::{debug, warn};

/// Reloadable cache holding the last successfully fetched transcript list.
#[derive(Debug, Default)]
pub struct TranscriptCache {
    records: Vec<Transcript>,
    fetched_at: Option<DateTime<Utc>>,
}

impl TranscriptCache {
    /// Replace the contents wholesale.
    pub fn replace(&mut self, records: Vec<Transcript>) {
        self.records = records;
        self.fetched_at = Some(Utc::now());
    }

    pub fn records(&self) -> &[Transcript] {
        &self.records
    }

    /// `None` until the first successful fetch.
    pub fn fetched_at(&self) -> Option<DateTime<Utc>> {
        self.fetched_at
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// What the renderer needs for one screen.
#[derive(Debug, Clone)]
pub struct PageSnapshot {
    pub items: Vec<Transcript>,
    pub page: Option<NonZeroUsize>,
    pub page_count: usize,
    pub total: usize,
    pub sort_key: SortKey,
    pub direction: SortDirection,
    pub fetched_at: Option<DateTime<Utc>>,
}

/// Root view. Owns the transcript cache and the user's sort/page selection.
pub struct TranscriptView {
    client: Arc<dyn TranscriptClient>,
    observer: Arc<dyn ViewObserver>,
    cache: TranscriptCache,
    sort_key: SortKey,
    direction: SortDirection,
    page: PageField,
    /// Cache contents in the current sort order.
    ordered: Vec<Transcript>,
    mounted: bool,
}

impl TranscriptView {
    pub fn new(client: Arc<dyn TranscriptClient>, observer: Arc<dyn ViewObserver>) -> Self {
        Self {
            client,
            observer,
            cache: TranscriptCache::default(),
            sort_key: SortKey::default(),
            direction: SortDirection::default(),
            page: PageField::new(),
            ordered: Vec::new(),
            mounted: false,
        }
    }

    /// Initial load. Only the first call fetches. Returns whether the list is loaded.
    pub async fn mount(&mut self) -> bool {
        if self.mounted {
            debug!("view already mounted; skipping fetch");
            return self.cache.fetched_at().is_some();
        }
        self.mounted = true;
        self.refresh().await
    }

    /// Re-fetch the full list and replace the cache. On failure the previous
    /// contents stay and the observer receives the error.
    pub async fn refresh(&mut self) -> bool {
        match self.client.get_all_transcripts().await {
            Ok(records) => {
                self.observer.transcripts_loaded(records.len());
                self.cache.replace(records);
                self.recompute();
                true
            }
            Err(e) => {
                warn!(error = %e, kept = self.cache.len(), "transcript fetch failed");
                self.observer.fetch_failed(&e);
                false
            }
        }
    }

    pub fn set_sort_key(&mut self, key: SortKey) {
        self.sort_key = key;
        self.observer.sort_key_changed(key);
        self.recompute();
    }

    pub fn set_direction(&mut self, direction: SortDirection) {
        self.direction = direction;
        self.observer.direction_changed(direction);
        self.recompute();
    }

    /// Apply raw page-number text. Invalid or non-positive input unsets the page.
    pub fn set_page_input(&mut self, raw: &str) -> Option<NonZeroUsize> {
        let page = self.page.input(raw);
        self.observer.page_changed(page);
        page
    }

    fn recompute(&mut self) {
        self.ordered = sort_transcripts(self.cache.records(), self.sort_key, self.direction);
    }

    /// Every cached transcript in the current order.
    pub fn ordered(&self) -> &[Transcript] {
        &self.ordered
    }

    /// Transcripts on the current page. Empty when the page field is unset.
    pub fn visible(&self) -> &[Transcript] {
        match self.page.page() {
            Some(p) => paginate(&self.ordered, p),
            None => &[],
        }
    }

    pub fn snapshot(&self) -> PageSnapshot {
        PageSnapshot {
            items: self.visible().to_vec(),
            page: self.page.page(),
            page_count: page_count(self.ordered.len()),
            total: self.ordered.len(),
            sort_key: self.sort_key,
            direction: self.direction,
            fetched_at: self.cache.fetched_at(),
        }
    }

    pub fn sort_key(&self) -> SortKey {
        self.sort_key
    }

    pub fn direction(&self) -> SortDirection {
        self.direction
    }

    pub fn page_field(&self) -> &PageField {
        &self.page
    }

    pub fn cache(&self) -> &TranscriptCache {
        &self.cache
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }
}

/// Observer that discards every event.
pub struct NoopObserver;

impl ViewObserver for NoopObserver {
    fn sort_key_changed(&self, _key: SortKey) {}
    fn direction_changed(&self, _direction: SortDirection) {}
    fn page_changed(&self, _page: Option<NonZeroUsize>) {}
    fn transcripts_loaded(&self, _count: usize) {}
    fn fetch_failed(&self, _error: &DomainError) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CourseGrade, NewGradeForm, NewStudentForm, StudentId};
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingClient {
        transcripts: Vec<Transcript>,
        fail: bool,
        fetches: AtomicUsize,
    }

    impl CountingClient {
        fn new(transcripts: Vec<Transcript>) -> Self {
            Self {
                transcripts,
                fail: false,
                fetches: AtomicUsize::new(0),
            }
        }

        fn failing() -> Self {
            Self {
                fail: true,
                ..Self::new(vec![])
            }
        }
    }

    #[async_trait::async_trait]
    impl TranscriptClient for CountingClient {
        async fn get_all_transcripts(&self) -> Result<Vec<Transcript>, DomainError> {
            self.fetches.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(DomainError::Client("connection refused".into()));
            }
            Ok(self.transcripts.clone())
        }

        async fn create_student(&self, _form: &NewStudentForm) -> Result<StudentId, DomainError> {
            unreachable!("view never creates students")
        }

        async fn create_grade(&self, _form: &NewGradeForm) -> Result<(), DomainError> {
            unreachable!("view never creates grades")
        }
    }

    #[derive(Default)]
    struct RecordingObserver {
        events: Mutex<Vec<String>>,
    }

    impl RecordingObserver {
        fn events(&self) -> Vec<String> {
            self.events.lock().unwrap().clone()
        }

        fn push(&self, e: String) {
            self.events.lock().unwrap().push(e);
        }
    }

    impl ViewObserver for RecordingObserver {
        fn sort_key_changed(&self, key: SortKey) {
            self.push(format!("sort:{}", key.as_str()));
        }
        fn direction_changed(&self, direction: SortDirection) {
            self.push(format!("dir:{}", direction.as_str()));
        }
        fn page_changed(&self, page: Option<NonZeroUsize>) {
            self.push(format!("page:{:?}", page.map(NonZeroUsize::get)));
        }
        fn transcripts_loaded(&self, count: usize) {
            self.push(format!("loaded:{}", count));
        }
        fn fetch_failed(&self, _error: &DomainError) {
            self.push("failed".to_string());
        }
    }

    fn fixture() -> Vec<Transcript> {
        vec![
            Transcript::new(
                2,
                "B",
                vec![CourseGrade::new("c1", 80.0), CourseGrade::new("c2", 90.0)],
            ),
            Transcript::new(1, "A", vec![]),
            Transcript::new(3, "C", vec![CourseGrade::new("c1", 100.0)]),
        ]
    }

    fn ids(ts: &[Transcript]) -> Vec<i64> {
        ts.iter().map(|t| t.student.id).collect()
    }

    #[tokio::test]
    async fn test_mount_fetches_once() {
        let client = Arc::new(CountingClient::new(fixture()));
        let mut view = TranscriptView::new(client.clone(), Arc::new(NoopObserver));
        assert!(view.mount().await);
        assert!(view.mount().await);
        assert_eq!(client.fetches.load(Ordering::SeqCst), 1);
        assert_eq!(ids(view.visible()), vec![2, 1, 3]);
        assert!(view.cache().fetched_at().is_some());
    }

    #[tokio::test]
    async fn test_mount_failure_leaves_empty_list() {
        let observer = Arc::new(RecordingObserver::default());
        let mut view = TranscriptView::new(Arc::new(CountingClient::failing()), observer.clone());
        assert!(!view.mount().await);
        assert!(view.visible().is_empty());
        assert!(view.cache().fetched_at().is_none());
        assert_eq!(observer.events(), vec!["failed".to_string()]);
    }

    #[tokio::test]
    async fn test_sort_changes_do_not_fetch() {
        let client = Arc::new(CountingClient::new(fixture()));
        let observer = Arc::new(RecordingObserver::default());
        let mut view = TranscriptView::new(client.clone(), observer.clone());
        view.mount().await;

        view.set_sort_key(SortKey::Id);
        assert_eq!(ids(view.visible()), vec![1, 2, 3]);
        view.set_direction(SortDirection::Descending);
        assert_eq!(ids(view.visible()), vec![3, 2, 1]);
        view.set_sort_key(SortKey::Average);
        assert_eq!(ids(view.visible()), vec![3, 2, 1]);
        view.set_sort_key(SortKey::None);
        assert_eq!(ids(view.visible()), vec![2, 1, 3]);

        assert_eq!(client.fetches.load(Ordering::SeqCst), 1);
        assert_eq!(
            observer.events(),
            vec!["loaded:3", "sort:id", "dir:desc", "sort:average", "sort:"]
        );
    }

    #[tokio::test]
    async fn test_invalid_page_input_shows_nothing() {
        let mut view =
            TranscriptView::new(Arc::new(CountingClient::new(fixture())), Arc::new(NoopObserver));
        view.mount().await;
        for raw in ["0", "-5", "abc"] {
            assert_eq!(view.set_page_input(raw), None);
            assert!(view.page_field().is_unset());
            assert!(view.visible().is_empty());
            view.set_page_input("1");
        }
    }

    #[tokio::test]
    async fn test_snapshot_reports_pages() {
        let many: Vec<Transcript> = (1..=25)
            .map(|id| Transcript::new(id, format!("s{}", id), vec![]))
            .collect();
        let mut view =
            TranscriptView::new(Arc::new(CountingClient::new(many)), Arc::new(NoopObserver));
        view.mount().await;

        let first = view.snapshot();
        assert_eq!(first.items.len(), 20);
        assert_eq!(first.page_count, 2);
        assert_eq!(first.total, 25);

        view.set_page_input("2");
        assert_eq!(ids(&view.snapshot().items), (21..=25).collect::<Vec<_>>());

        view.set_page_input("3");
        assert!(view.snapshot().items.is_empty());
    }
}
