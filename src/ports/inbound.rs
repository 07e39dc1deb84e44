//! Inbound port. UI (adapter) calls into the application.

use crate::domain::DomainError;

/// Input port: UI/CLI drives the transcript view.
#[async_trait::async_trait]
pub trait InputPort: Send + Sync {
    /// Mount the view and run the interactive loop until the user quits.
    async fn run(&self) -> Result<(), DomainError>;
}
