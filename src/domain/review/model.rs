//! Review domain entity

use uuid::Uuid;

use crate::shared::unix_now;

/// A peer review of a stylist.
#[derive(Debug, Clone, PartialEq)]
pub struct Review {
    pub id: String,
    /// Reviewer
    pub user_id: String,
    /// Target stylist
    pub stylist_id: String,
    pub rating: i32,
    pub comment: String,
    pub created_at: i64,
}

/// Review as submitted by the caller.
#[derive(Debug, Clone)]
pub struct NewReview {
    pub user_id: String,
    pub stylist_id: String,
    pub rating: i32,
    pub comment: String,
}

impl NewReview {
    /// Stamp an id and creation time, targeting the decoded stylist id.
    pub fn into_review(self, stylist_id: String) -> Review {
        Review {
            id: Uuid::new_v4().to_string(),
            user_id: self.user_id,
            stylist_id,
            rating: self.rating,
            comment: self.comment,
            created_at: unix_now(),
        }
    }
}
