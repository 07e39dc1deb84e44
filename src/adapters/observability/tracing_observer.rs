//! Implements ViewObserver by emitting tracing events.

use crate::domain::{DomainError, SortDirection, SortKey};
use crate::ports::ViewObserver;
use std::num::NonZeroUsize;
use tracing::{error, info};

/// Logs view events. Fetch failures are reported at error level.
#[derive(Debug, Default)]
pub struct TracingObserver;

impl ViewObserver for TracingObserver {
    fn sort_key_changed(&self, key: SortKey) {
        info!(sort_key = key.as_str(), "Selected sort order {}", key);
    }

    fn direction_changed(&self, direction: SortDirection) {
        info!(direction = direction.as_str(), "Selected sort direction {}", direction);
    }

    fn page_changed(&self, page: Option<NonZeroUsize>) {
        match page {
            Some(p) => info!(page = p.get(), "page selected"),
            None => info!("page cleared (invalid input)"),
        }
    }

    fn transcripts_loaded(&self, count: usize) {
        info!(count, "transcripts loaded");
    }

    fn fetch_failed(&self, error: &DomainError) {
        error!(error = %error, "could not load transcripts; showing previous list");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Write for Captured {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl Captured {
        fn text(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    /// Run `f` with a plain-text subscriber and return everything it logged.
    fn capture(f: impl FnOnce()) -> String {
        let out = Captured::default();
        let writer = out.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .without_time()
            .finish();
        tracing::subscriber::with_default(subscriber, f);
        out.text()
    }

    #[test]
    fn test_view_events_are_logged() {
        let observer = TracingObserver;
        let logs = capture(|| {
            observer.sort_key_changed(SortKey::Name);
            observer.direction_changed(SortDirection::Descending);
            observer.page_changed(NonZeroUsize::new(3));
            observer.page_changed(None);
            observer.transcripts_loaded(42);
        });
        assert!(logs.contains("Selected sort order Student name"));
        assert!(logs.contains("sort_key=\"name\""));
        assert!(logs.contains("Selected sort direction Descending"));
        assert!(logs.contains("page=3"));
        assert!(logs.contains("page cleared (invalid input)"));
        assert!(logs.contains("count=42"));
        assert!(!logs.contains("ERROR"));
    }

    #[test]
    fn test_fetch_failure_logged_at_error_level() {
        let logs = capture(|| {
            TracingObserver.fetch_failed(&DomainError::Client("connection refused".into()))
        });
        assert!(logs.contains("ERROR"));
        assert!(logs.contains("connection refused"));
    }
}
