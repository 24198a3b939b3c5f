//! Aggregate statistics over a sales item's comments

use crate::comment::Comment;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Summary of the comments on one item
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReviewStats {
    /// Number of comments
    pub count: usize,
    /// Mean rating, absent when there are no comments
    pub average_rating: Option<f64>,
    /// Comment count per rating value
    pub by_rating: BTreeMap<i32, usize>,
    /// Sum of all net vote counts, saturating at the `i64` bounds
    pub total_votes: i64,
}

impl ReviewStats {
    /// Compute statistics for a slice of comments
    pub fn from_comments(comments: &[Comment]) -> Self {
        let mut by_rating = BTreeMap::new();
        let mut rating_sum: i64 = 0;
        let mut total_votes: i64 = 0;

        for comment in comments {
            *by_rating.entry(comment.rating()).or_insert(0) += 1;
            rating_sum += i64::from(comment.rating());
            total_votes = total_votes.saturating_add(comment.vote_count());
        }

        let average_rating = if comments.is_empty() {
            None
        } else {
            Some(rating_sum as f64 / comments.len() as f64)
        };

        Self {
            count: comments.len(),
            average_rating,
            by_rating,
            total_votes,
        }
    }
}
