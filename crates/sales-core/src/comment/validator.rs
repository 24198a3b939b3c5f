//! Comment validation

use super::model::Comment;
use crate::error::{Result, SalesError};
use crate::types::RatingRange;
use serde::Serialize;

/// Validator for comments entering a sales item
///
/// Serializes as its rating range.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CommentValidator {
    ratings: RatingRange,
}

impl CommentValidator {
    /// Create a new validator with the default 1..=5 rating range
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new validator with a custom rating range
    pub fn with_rating_range(ratings: RatingRange) -> Self {
        Self { ratings }
    }

    /// Accepted rating range
    pub fn rating_range(&self) -> RatingRange {
        self.ratings
    }

    /// Validate a star rating
    pub fn validate_rating(&self, rating: i32) -> Result<()> {
        if !self.ratings.contains(rating) {
            return Err(SalesError::InvalidRating {
                rating,
                min: self.ratings.min,
                max: self.ratings.max,
            });
        }

        Ok(())
    }

    /// Validate that `author` has not commented yet (exact, case-sensitive match)
    pub fn validate_author(&self, author: &str, existing: &[Comment]) -> Result<()> {
        if existing.iter().any(|c| c.author() == author) {
            return Err(SalesError::DuplicateAuthor(author.to_string()));
        }

        Ok(())
    }

    /// Validate a prospective comment against the existing ones
    ///
    /// The rating is checked before the author.
    pub fn validate_new_comment(
        &self,
        author: &str,
        rating: i32,
        existing: &[Comment],
    ) -> Result<()> {
        self.validate_rating(rating)?;
        self.validate_author(author, existing)?;
        Ok(())
    }
}
