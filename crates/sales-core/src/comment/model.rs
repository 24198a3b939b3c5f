//! Comment data model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A customer comment on a sales item
///
/// Author, text and rating are fixed at construction. The vote count is
/// the only mutable state and changes through [`Comment::upvote`] and
/// [`Comment::downvote`]. The rating is stored as given; range checks
/// belong to the owning item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    author: String,
    text: String,
    rating: i32,
    #[serde(default)]
    vote_count: i64,
    created_at: DateTime<Utc>,
}

impl Comment {
    /// Create a comment with no votes
    pub fn new(author: impl Into<String>, text: impl Into<String>, rating: i32) -> Self {
        Self {
            author: author.into(),
            text: text.into(),
            rating,
            vote_count: 0,
            created_at: Utc::now(),
        }
    }

    /// Record one helpful vote; the tally saturates at `i64::MAX`
    pub fn upvote(&mut self) {
        self.vote_count = self.vote_count.saturating_add(1);
    }

    /// Record one unhelpful vote; the tally saturates at `i64::MIN`
    pub fn downvote(&mut self) {
        self.vote_count = self.vote_count.saturating_sub(1);
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn rating(&self) -> i32 {
        self.rating
    }

    /// Net vote tally (upvotes minus downvotes)
    pub fn vote_count(&self) -> i64 {
        self.vote_count
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_comment() -> Comment {
        Comment::new("Alice", "Great product!", 5)
    }

    #[test]
    fn test_comment_creation() {
        let comment = create_test_comment();
        assert_eq!(comment.author(), "Alice");
        assert_eq!(comment.text(), "Great product!");
        assert_eq!(comment.rating(), 5);
        assert_eq!(comment.vote_count(), 0);
    }

    #[test]
    fn test_upvote() {
        let mut comment = create_test_comment();
        comment.upvote();
        assert_eq!(comment.vote_count(), 1);
        comment.upvote();
        assert_eq!(comment.vote_count(), 2);
    }

    #[test]
    fn test_downvote_goes_negative() {
        let mut comment = create_test_comment();
        comment.downvote();
        assert_eq!(comment.vote_count(), -1);
        comment.downvote();
        assert_eq!(comment.vote_count(), -2);
    }

    #[test]
    fn test_mixed_votes() {
        let mut comment = create_test_comment();
        comment.upvote();
        comment.upvote();
        comment.downvote();
        assert_eq!(comment.vote_count(), 1);
    }

    #[test]
    fn test_vote_tally_saturates() {
        let mut comment = create_test_comment();
        comment.vote_count = i64::MAX;
        comment.upvote();
        assert_eq!(comment.vote_count(), i64::MAX);

        comment.vote_count = i64::MIN;
        comment.downvote();
        assert_eq!(comment.vote_count(), i64::MIN);
    }

    #[test]
    fn test_out_of_range_rating_stored_verbatim() {
        let zero = Comment::new("Bob", "Poor product.", 0);
        assert_eq!(zero.rating(), 0);

        let six = Comment::new("Carol", "Not recommended.", 6);
        assert_eq!(six.rating(), 6);
    }

    #[test]
    fn test_author_not_normalized() {
        let comment = Comment::new("  alice ", "", 3);
        assert_eq!(comment.author(), "  alice ");
        assert_eq!(comment.text(), "");
    }

    #[test]
    fn test_comment_serialization() {
        let mut comment = create_test_comment();
        comment.upvote();

        let json = serde_json::to_string(&comment).unwrap();
        let comment2: Comment = serde_json::from_str(&json).unwrap();
        assert_eq!(comment, comment2);
    }
}
