use crate::domain::model::{Bug, BugSummary, TrackerIssue, TrackerLabel};
use crate::domain::ports::IssueTracker;
use crate::utils::error::Result;
use chrono::Utc;

const DEFAULT_PRIORITY: &str = "normal";

/// Fetches the tracker listing and reshapes it into the aggregate summary.
/// A missing repository upstream degrades to an empty summary.
pub async fn fetch_bug_summary(tracker: &dyn IssueTracker) -> Result<BugSummary> {
    let issues = tracker.list_bug_reports().await?.unwrap_or_default();
    tracing::debug!(count = issues.len(), "tracker listing fetched");
    Ok(summarize(issues))
}

pub fn summarize(issues: Vec<TrackerIssue>) -> BugSummary {
    let bugs: Vec<Bug> = issues
        .into_iter()
        .filter(|issue| issue.pull_request.is_none())
        .map(to_bug)
        .collect();

    let open = bugs.iter().filter(|bug| bug.status == "open").count();
    let closed = bugs.len() - open;

    BugSummary {
        total: bugs.len(),
        open,
        closed,
        timestamp: Utc::now().to_rfc3339(),
        bugs,
    }
}

fn to_bug(issue: TrackerIssue) -> Bug {
    let status = if issue.state == "closed" {
        "closed"
    } else {
        "open"
    };

    Bug {
        number: issue.number,
        title: issue.title,
        description: issue.body.unwrap_or_default(),
        status: status.to_string(),
        priority: classify_priority(&issue.labels),
        labels: issue.labels.into_iter().map(|label| label.name).collect(),
        created_at: issue.created_at,
        updated_at: issue.updated_at,
        url: issue.html_url,
    }
}

/// Priority is whatever label mentions "priority", by substring match.
/// "priority: high" yields "high"; a bare "priority" label is kept as-is.
pub fn classify_priority(labels: &[TrackerLabel]) -> String {
    for label in labels {
        let name = label.name.to_lowercase();
        if !name.contains("priority") {
            continue;
        }
        if let Some((_, value)) = name.split_once(':') {
            let value = value.trim();
            if !value.is_empty() {
                return value.to_string();
            }
        }
        return name;
    }
    DEFAULT_PRIORITY.to_string()
}
