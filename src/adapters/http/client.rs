//! Implements TranscriptClient against the transcript REST service.
//!
//! Routes:
//! - `GET  /transcripts` lists every transcript
//! - `POST /transcripts` with `{"name"}` creates a student, answers `{"studentID"}`
//! - `POST /transcripts/{studentID}/{course}` with `{"grade"}` records a grade

use crate::domain::{DomainError, NewGradeForm, NewStudentForm, StudentId, Transcript};
use crate::ports::TranscriptClient;
use reqwest::{Client, Response, Url};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info};

/// reqwest-backed transcript client.
pub struct HttpTranscriptClient {
    client: Client,
    base_url: Url,
}

#[derive(Serialize)]
struct CreateStudentBody<'a> {
    name: &'a str,
}

#[derive(Deserialize)]
struct CreatedStudent {
    #[serde(rename = "studentID")]
    student_id: StudentId,
}

#[derive(Serialize)]
struct CreateGradeBody {
    grade: f64,
}

impl HttpTranscriptClient {
    /// Create a client for the service at `base_url` (e.g. "http://localhost:4001").
    ///
    /// # Errors
    /// Returns `DomainError::Config` if the URL is not a valid base URL or the
    /// HTTP client cannot be built.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, DomainError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| DomainError::Config(format!("invalid API URL '{}': {}", base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(DomainError::Config(format!(
                "API URL '{}' cannot be used as a base",
                base_url
            )));
        }
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| DomainError::Config(format!("build HTTP client: {}", e)))?;
        Ok(Self { client, base_url })
    }

    /// Join path segments onto the base URL, percent-encoding each one.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, DomainError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| DomainError::Config(format!("API URL '{}' has no path", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Fail on non-2xx, keeping status and body text in the error.
    async fn check(res: Response) -> Result<Response, DomainError> {
        if res.status().is_success() {
            return Ok(res);
        }
        let status = res.status();
        let text = res.text().await.unwrap_or_else(|_| "unknown".to_string());
        Err(DomainError::Client(format!(
            "transcript service error {}: {}",
            status, text
        )))
    }
}

/// Parse the body of `GET /transcripts`.
pub fn decode_transcripts(body: &str) -> Result<Vec<Transcript>, DomainError> {
    serde_json::from_str(body).map_err(|e| DomainError::Decode(format!("transcripts: {}", e)))
}

#[async_trait::async_trait]
impl TranscriptClient for HttpTranscriptClient {
    async fn get_all_transcripts(&self) -> Result<Vec<Transcript>, DomainError> {
        let url = self.endpoint(&["transcripts"])?;
        debug!(url = %url, "fetching transcripts");
        let res = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| DomainError::Client(format!("Request failed: {}", e)))?;
        let body = Self::check(res)
            .await?
            .text()
            .await
            .map_err(|e| DomainError::Client(format!("read body: {}", e)))?;
        let transcripts = decode_transcripts(&body)?;
        info!(count = transcripts.len(), "transcripts fetched");
        Ok(transcripts)
    }

    async fn create_student(&self, form: &NewStudentForm) -> Result<StudentId, DomainError> {
        let url = self.endpoint(&["transcripts"])?;
        let res = self
            .client
            .post(url)
            .json(&CreateStudentBody { name: &form.name })
            .send()
            .await
            .map_err(|e| DomainError::Client(format!("Request failed: {}", e)))?;
        let body = Self::check(res)
            .await?
            .text()
            .await
            .map_err(|e| DomainError::Client(format!("read body: {}", e)))?;
        let created: CreatedStudent = serde_json::from_str(&body)
            .map_err(|e| DomainError::Decode(format!("created student: {}", e)))?;
        Ok(created.student_id)
    }

    async fn create_grade(&self, form: &NewGradeForm) -> Result<(), DomainError> {
        let student = form.student_id.to_string();
        let url = self.endpoint(&["transcripts", &student, &form.course])?;
        let res = self
            .client
            .post(url)
            .json(&CreateGradeBody { grade: form.grade })
            .send()
            .await
            .map_err(|e| DomainError::Client(format!("Request failed: {}", e)))?;
        Self::check(res).await?;
        Ok(())
    }
}
