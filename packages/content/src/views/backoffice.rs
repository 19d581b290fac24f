//! Moderation views: status tabs, decisions, reports and the author table.
//!
//! Decisions are applied to the locally held collection after the backend
//! call succeeds, so the tabs update without refetching.

use serde::Serialize;
use std::fmt;
use tracing::info;

use crate::extract::ContentSnippetExtractor;
use crate::pagination::{paginate, Page, PageRequest, AUTHOR_TABLE_PER_PAGE};
use crate::parser::HtmlParser;
use crate::types::{Post, PostId, PostStatus, Report, ReportId, Role, SnippetConfig, User};

use super::feed::{related_card, PostCard};

// ============================================================================
// Status tabs
// ============================================================================

pub fn by_status(posts: &[Post], status: PostStatus) -> Vec<&Post> {
    posts.iter().filter(|post| post.status == status).collect()
}

/// Post count per status, in tab order (pending, approved, rejected).
pub fn status_counts(posts: &[Post]) -> Vec<(PostStatus, usize)> {
    PostStatus::ALL
        .iter()
        .map(|status| (*status, posts.iter().filter(|p| p.status == *status).count()))
        .collect()
}

// ============================================================================
// Decisions
// ============================================================================

/// A moderator's verdict on a post.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Approve,
    Reject,
}

impl Decision {
    pub fn target_status(&self) -> PostStatus {
        match self {
            Decision::Approve => PostStatus::Approved,
            Decision::Reject => PostStatus::Rejected,
        }
    }

    /// Path segment of the moderation endpoint.
    pub fn as_str(&self) -> &'static str {
        match self {
            Decision::Approve => "approve",
            Decision::Reject => "reject",
        }
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Move `post_id` to the decision's status. Returns `false` if the post is
/// not in the collection.
pub fn apply_decision(posts: &mut [Post], post_id: &PostId, decision: Decision) -> bool {
    match posts.iter_mut().find(|post| &post.id == post_id) {
        Some(post) => {
            let from = post.status;
            post.status = decision.target_status();
            info!(post_id = %post_id, %from, to = %post.status, "Applied moderation decision");
            true
        }
        None => false,
    }
}

/// Drop a deleted post together with every report filed against it.
/// Returns the removed post, if it was present.
pub fn remove_post(
    posts: &mut Vec<Post>,
    reports: &mut Vec<Report>,
    post_id: &PostId,
) -> Option<Post> {
    reports.retain(|report| !report.concerns(post_id));
    let index = posts.iter().position(|post| &post.id == post_id)?;
    Some(posts.remove(index))
}

// ============================================================================
// Reports
// ============================================================================

/// A report rendered with a card of the reported post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportCard {
    pub id: Option<ReportId>,
    pub reporter: String,
    pub reason: String,
    pub post: PostCard,
}

pub fn report_cards<P: HtmlParser>(
    extractor: &ContentSnippetExtractor<P>,
    reports: &[Report],
    config: &SnippetConfig,
) -> Vec<ReportCard> {
    reports
        .iter()
        .map(|report| ReportCard {
            id: report.id.clone(),
            reporter: report.user.clone(),
            reason: report.reason.clone(),
            post: related_card(extractor, &report.post, config),
        })
        .collect()
}

// ============================================================================
// Author table
// ============================================================================

/// Regular (non-admin) accounts matching `query`, five per page.
pub fn author_table(users: Vec<User>, query: &str, page: usize) -> Page<User> {
    let query = query.trim();
    let authors: Vec<User> = users
        .into_iter()
        .filter(|user| user.role == Role::User)
        .filter(|user| query.is_empty() || user.matches(query))
        .collect();

    paginate(authors, &PageRequest::new(page, AUTHOR_TABLE_PER_PAGE).validate())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{user, PostFixture};
    use crate::types::ReportRecord;

    fn report(id: &str, post_id: &str) -> Report {
        Report::try_from(ReportRecord {
            id: Some(id.to_string()),
            post: Some(PostFixture::new(post_id).record()),
            user: Some("127.0.0.1".to_string()),
            reason: Some("spam".to_string()),
            created_at: None,
        })
        .unwrap()
    }

    fn posts() -> Vec<Post> {
        vec![
            PostFixture::new("p1").status(PostStatus::Pending).build(),
            PostFixture::new("p2").status(PostStatus::Approved).build(),
            PostFixture::new("p3").status(PostStatus::Pending).build(),
        ]
    }

    #[test]
    fn test_status_counts() {
        assert_eq!(
            status_counts(&posts()),
            vec![
                (PostStatus::Pending, 2),
                (PostStatus::Approved, 1),
                (PostStatus::Rejected, 0)
            ]
        );
    }

    #[test]
    fn test_apply_decision_moves_post_between_tabs() {
        let mut posts = posts();
        assert!(apply_decision(&mut posts, &PostId::new("p1"), Decision::Reject));
        assert_eq!(by_status(&posts, PostStatus::Pending).len(), 1);
        assert_eq!(by_status(&posts, PostStatus::Rejected)[0].id.as_str(), "p1");

        assert!(!apply_decision(&mut posts, &PostId::new("missing"), Decision::Approve));
    }

    #[test]
    fn test_remove_post_drops_its_reports() {
        let mut posts = posts();
        let mut reports = vec![report("r1", "p1"), report("r2", "p2"), report("r3", "p1")];

        let removed = remove_post(&mut posts, &mut reports, &PostId::new("p1"));
        assert_eq!(removed.map(|p| p.id), Some(PostId::new("p1")));
        assert_eq!(posts.len(), 2);
        assert_eq!(reports.len(), 1);
        assert!(reports[0].concerns(&PostId::new("p2")));
    }

    #[test]
    fn test_author_table_filters_and_pages() {
        let mut users: Vec<User> = (0..7)
            .map(|i| user(&format!("u{i}"), &format!("writer{i}"), Role::User))
            .collect();
        users.push(user("a1", "writer-admin", Role::Admin));

        let first = author_table(users.clone(), "", 1);
        assert_eq!(first.items.len(), 5);
        assert_eq!(first.page_info.total_items, 7);
        assert_eq!(first.page_info.total_pages, 2);

        let search = author_table(users, "WRITER3", 1);
        assert_eq!(search.items.len(), 1);
        assert_eq!(search.items[0].username, "writer3");
    }

    #[test]
    fn test_report_cards() {
        let cards = report_cards(
            &ContentSnippetExtractor::new(),
            &[report("r1", "p1")],
            &SnippetConfig::default(),
        );
        assert_eq!(cards[0].reason, "spam");
        assert_eq!(cards[0].post.id.as_str(), "p1");
    }
}
