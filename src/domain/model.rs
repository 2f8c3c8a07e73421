use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Page observer
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageLink {
    pub href: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageImage {
    pub src: String,
    pub alt: String,
}

/// Bounded snapshot of a page: truncated body text plus capped link/image lists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageSnapshot {
    pub url: String,
    pub title: String,
    pub text: String,
    pub links: Vec<PageLink>,
    pub images: Vec<PageImage>,
}

/// Inbound observer commands, tagged the way the extension messages are.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type")]
pub enum ObserverCommand {
    #[serde(rename = "EXTRACT_PAGE")]
    ExtractPage,
    #[serde(rename = "CAPTURE_SELECTION")]
    CaptureSelection,
}

/// Per-command synchronous replies. Untagged: the extract reply is the
/// snapshot itself, the selection reply is `{"selection": ...}`.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum ObserverReply {
    Snapshot(PageSnapshot),
    Selection { selection: String },
}

/// Fire-and-forget page-load summary, no reply expected.
#[derive(Debug, Clone, Serialize)]
pub struct PageAnnouncement {
    #[serde(rename = "type")]
    pub kind: String,
    pub url: String,
    pub title: String,
    pub meta: String,
}

// ---------------------------------------------------------------------------
// Checkout
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CheckoutPayload {
    pub price_id: Option<String>,
    #[serde(alias = "customerEmail")]
    pub email: Option<String>,
    pub success_url: Option<String>,
    pub cancel_url: Option<String>,
}

/// Fully resolved session request handed to the payment provider.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionRequest {
    pub price_id: String,
    pub customer_email: Option<String>,
    pub success_url: String,
    pub cancel_url: String,
}

/// Provider-hosted payment flow instance, as returned by the provider API.
#[derive(Debug, Clone, Deserialize)]
pub struct CheckoutSession {
    pub id: String,
    pub url: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutAck {
    pub session_id: String,
    pub url: String,
}

// ---------------------------------------------------------------------------
// Issue tracker
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct TrackerLabel {
    pub name: String,
}

/// Raw issue record from the tracker listing endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct TrackerIssue {
    pub number: u64,
    pub title: String,
    #[serde(default)]
    pub body: Option<String>,
    pub state: String,
    #[serde(default)]
    pub labels: Vec<TrackerLabel>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub html_url: String,
    /// Present when the record is actually a pull request; those are skipped.
    #[serde(default)]
    pub pull_request: Option<serde_json::Value>,
}

/// A tracked bug, derived 1:1 from a tracker issue.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Bug {
    pub number: u64,
    pub title: String,
    pub description: String,
    pub status: String,
    pub priority: String,
    pub labels: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub url: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct BugSummary {
    pub bugs: Vec<Bug>,
    pub total: usize,
    pub open: usize,
    pub closed: usize,
    pub timestamp: String,
}

// ---------------------------------------------------------------------------
// Signups / enrollment
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SignupPayload {
    pub email: Option<String>,
    pub name: Option<String>,
    pub interest: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct EnrollmentPayload {
    pub email: Option<String>,
    pub name: Option<String>,
    #[serde(rename = "courseName")]
    pub course_name: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Ack {
    pub success: bool,
    pub message: String,
    pub email: String,
}

// ---------------------------------------------------------------------------
// Mail
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct TestMail {
    pub to: String,
    pub subject: String,
    pub text_body: String,
    pub html_body: String,
}
