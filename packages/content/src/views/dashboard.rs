//! Backoffice statistics.

use chrono::Datelike;
use serde::Serialize;
use std::collections::BTreeMap;

use crate::types::{Post, User};

pub const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_users: usize,
    pub total_posts: usize,
    pub total_likes: usize,
    pub total_comments: usize,
    /// Sorted by category name.
    pub posts_per_category: BTreeMap<String, usize>,
    /// Index 0 is January. Posts without a creation date are not counted.
    pub posts_per_month: [usize; 12],
}

impl DashboardStats {
    pub fn compute(users: &[User], posts: &[Post]) -> Self {
        let mut posts_per_category = BTreeMap::new();
        let mut posts_per_month = [0usize; 12];

        for post in posts {
            *posts_per_category.entry(post.category.clone()).or_insert(0) += 1;
            if let Some(created_at) = post.created_at {
                posts_per_month[created_at.month0() as usize] += 1;
            }
        }

        DashboardStats {
            total_users: users.len(),
            total_posts: posts.len(),
            total_likes: posts.iter().map(Post::like_count).sum(),
            total_comments: posts.iter().map(Post::comment_count).sum(),
            posts_per_category,
            posts_per_month,
        }
    }

    /// `(label, count)` for each month, January first.
    pub fn months(&self) -> impl Iterator<Item = (&'static str, usize)> {
        MONTH_LABELS.into_iter().zip(self.posts_per_month)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{date, user, PostFixture};
    use crate::types::Role;

    #[test]
    fn test_compute() {
        let users = vec![user("u1", "a", Role::User), user("u2", "b", Role::Admin)];
        let posts = vec![
            PostFixture::new("p1")
                .category("Tech")
                .created_at(date(2024, 1, 15))
                .liked_by(&["u1"])
                .build(),
            PostFixture::new("p2")
                .category("Art")
                .created_at(date(2024, 1, 20))
                .comments(2)
                .build(),
            PostFixture::new("p3")
                .category("Tech")
                .created_at(date(2023, 12, 31))
                .build(),
            PostFixture::new("p4").category("Tech").build(),
        ];

        let stats = DashboardStats::compute(&users, &posts);
        assert_eq!(stats.total_users, 2);
        assert_eq!(stats.total_posts, 4);
        assert_eq!(stats.total_likes, 1);
        assert_eq!(stats.total_comments, 2);

        let categories: Vec<_> = stats.posts_per_category.iter().collect();
        assert_eq!(categories, vec![(&"Art".to_string(), &1), (&"Tech".to_string(), &3)]);

        assert_eq!(stats.posts_per_month[0], 2);
        assert_eq!(stats.posts_per_month[11], 1);
        assert_eq!(stats.posts_per_month.iter().sum::<usize>(), 3);
    }

    #[test]
    fn test_months_labels() {
        let stats = DashboardStats::compute(&[], &[]);
        let months: Vec<_> = stats.months().collect();
        assert_eq!(months.len(), 12);
        assert_eq!(months[0], ("Jan", 0));
        assert_eq!(months[11], ("Dec", 0));
    }
}
