use std::sync::Arc;
use transcript_viewer::adapters::memory::InMemoryTranscriptClient;
use transcript_viewer::domain::{CourseGrade, NewStudentForm, SortDirection, SortKey, Transcript};
use transcript_viewer::usecases::{EnrollmentService, NoopObserver, TranscriptView};

fn ids(ts: &[Transcript]) -> Vec<i64> {
    ts.iter().map(|t| t.student.id).collect()
}

fn seeded(count: i64) -> Vec<Transcript> {
    (1..=count)
        .map(|id| {
            Transcript::new(
                id,
                format!("Student {:02}", id),
                vec![CourseGrade::new("cs4530", (id % 10) as f64 * 10.0)],
            )
        })
        .collect()
}

#[tokio::test]
async fn new_student_appears_after_refresh() {
    let client = Arc::new(InMemoryTranscriptClient::with_transcripts(seeded(3)));
    let enrollment = EnrollmentService::new(client.clone());
    let mut view = TranscriptView::new(client, Arc::new(NoopObserver));
    assert!(view.mount().await);
    assert_eq!(view.ordered().len(), 3);

    let id = enrollment
        .submit_student(&NewStudentForm::new("Newcomer"))
        .await
        .unwrap();
    // Submissions do not reach the view until it is refreshed.
    assert_eq!(view.ordered().len(), 3);

    enrollment
        .submit_grade(&id.to_string(), "cs4530", "100")
        .await
        .unwrap();
    assert!(view.refresh().await);

    view.set_sort_key(SortKey::Average);
    view.set_direction(SortDirection::Descending);
    assert_eq!(view.visible()[0].student.name, "Newcomer");
}

#[tokio::test]
async fn failed_refresh_keeps_previous_list() {
    let client = Arc::new(InMemoryTranscriptClient::with_transcripts(seeded(5)));
    let mut view = TranscriptView::new(client.clone(), Arc::new(NoopObserver));
    view.mount().await;
    let fetched_at = view.cache().fetched_at();

    client.set_fail_fetch(true);
    assert!(!view.refresh().await);
    assert_eq!(ids(view.visible()), vec![1, 2, 3, 4, 5]);
    assert_eq!(view.cache().fetched_at(), fetched_at);
}

#[tokio::test]
async fn sorted_order_spans_pages() {
    let client = Arc::new(InMemoryTranscriptClient::with_transcripts(seeded(25)));
    let mut view = TranscriptView::new(client, Arc::new(NoopObserver));
    view.mount().await;

    view.set_sort_key(SortKey::Id);
    view.set_direction(SortDirection::Descending);
    assert_eq!(ids(view.visible()), (6..=25).rev().collect::<Vec<_>>());

    view.set_page_input("2");
    assert_eq!(ids(view.visible()), vec![5, 4, 3, 2, 1]);

    view.set_page_input("abc");
    assert!(view.visible().is_empty());
    assert_eq!(view.ordered().len(), 25);
}
