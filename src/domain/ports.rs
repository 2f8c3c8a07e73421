use crate::domain::model::{CheckoutSession, SessionRequest, TestMail, TrackerIssue};
use crate::utils::error::Result;
use async_trait::async_trait;

#[async_trait]
pub trait CheckoutProvider: Send + Sync {
    async fn create_session(&self, request: &SessionRequest) -> Result<CheckoutSession>;
}

#[async_trait]
pub trait IssueTracker: Send + Sync {
    /// `Ok(None)` means the repository listing was not found upstream,
    /// which callers treat as "no bugs" rather than an error.
    async fn list_bug_reports(&self) -> Result<Option<Vec<TrackerIssue>>>;
}

#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, mail: &TestMail) -> Result<()>;
}
