//! Moderation reports filed against posts.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::id::{PostId, ReportId};
use super::post::{Post, PostRecord};
use crate::error::{ContentError, Result};

/// A report document as returned by `/backoffice/reports`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportRecord {
    #[serde(rename = "_id", alias = "id", default)]
    pub id: Option<String>,
    #[serde(default)]
    pub post: Option<PostRecord>,
    #[serde(default)]
    pub user: Option<String>,
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// A validated report with its populated post.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ReportId>,
    pub post: Post,
    /// Reporter username or IP address.
    pub user: String,
    pub reason: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl TryFrom<ReportRecord> for Report {
    type Error = ContentError;

    fn try_from(record: ReportRecord) -> Result<Self> {
        let report_id = record.id.clone().unwrap_or_else(|| "<missing>".to_string());
        let post = record
            .post
            .ok_or_else(|| ContentError::invalid_post(&report_id, "report has no post"))
            .and_then(Post::try_from)?;

        Ok(Report {
            id: record.id.map(ReportId::new),
            post,
            user: record.user.unwrap_or_default(),
            reason: record.reason.unwrap_or_default(),
            created_at: record.created_at,
        })
    }
}

impl Report {
    pub fn concerns(&self, post_id: &PostId) -> bool {
        &self.post.id == post_id
    }
}

/// Validate a batch of report records, skipping the ones whose post was
/// deleted or is malformed.
pub fn parse_reports(records: Vec<ReportRecord>) -> Vec<Report> {
    records
        .into_iter()
        .filter_map(|record| match Report::try_from(record) {
            Ok(report) => Some(report),
            Err(e) => {
                warn!(error = %e, "Skipping invalid report record");
                None
            }
        })
        .collect()
}
