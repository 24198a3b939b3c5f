//! Sales item data model

use super::stats::ReviewStats;
use crate::comment::{Comment, CommentValidator};
use crate::config::ReviewConfig;
use crate::error::{Result, SalesError};
use crate::types::{Price, RatingRange};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, trace};

/// A product offered for sale, with its customer comments
///
/// Comments are kept in insertion order and each author may hold at most
/// one of them. Index-based operations ignore positions past the end.
#[derive(Debug, Clone, Serialize)]
pub struct SalesItem {
    name: String,
    price: Price,
    comments: Vec<Comment>,
    #[serde(rename = "ratings")]
    validator: CommentValidator,
}

impl SalesItem {
    /// Create an item with no comments and the default 1..=5 rating range
    pub fn new(name: impl Into<String>, price: u64) -> Self {
        Self {
            name: name.into(),
            price: Price::from_cents(price),
            comments: Vec::new(),
            validator: CommentValidator::new(),
        }
    }

    /// Create an item whose rating range comes from configuration
    ///
    /// Fails with [`SalesError::Config`] when the range is empty.
    pub fn with_config(
        name: impl Into<String>,
        price: u64,
        config: &ReviewConfig,
    ) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            validator: CommentValidator::with_rating_range(config.rating_range()),
            ..Self::new(name, price)
        })
    }

    /// Accepted rating range
    pub fn rating_range(&self) -> RatingRange {
        self.validator.rating_range()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Price in cents
    pub fn price(&self) -> u64 {
        self.price.cents()
    }

    /// Price as a typed amount
    pub fn unit_price(&self) -> Price {
        self.price
    }

    /// Add a comment, returning `false` when it was rejected
    pub fn add_comment(
        &mut self,
        author: impl Into<String>,
        text: impl Into<String>,
        rating: i32,
    ) -> bool {
        self.try_add_comment(author, text, rating).is_ok()
    }

    /// Add a comment, returning the reason on rejection
    ///
    /// Fails with [`SalesError::InvalidRating`] when the rating is out of
    /// range and [`SalesError::DuplicateAuthor`] when the author already
    /// commented. Nothing is stored on failure.
    pub fn try_add_comment(
        &mut self,
        author: impl Into<String>,
        text: impl Into<String>,
        rating: i32,
    ) -> Result<()> {
        let author = author.into();

        if let Err(err) = self
            .validator
            .validate_new_comment(&author, rating, &self.comments)
        {
            debug!("Rejected comment on {:?}: {}", self.name, err);
            return Err(err);
        }

        debug!("Added comment by {:?} to {:?}", author, self.name);
        self.comments.push(Comment::new(author, text, rating));
        Ok(())
    }

    pub fn number_of_comments(&self) -> usize {
        self.comments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.comments.is_empty()
    }

    /// All comments in insertion order
    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    /// Get a comment by position
    pub fn comment(&self, index: usize) -> Option<&Comment> {
        self.comments.get(index)
    }

    /// Get the comment written by `author`
    pub fn comment_by_author(&self, author: &str) -> Option<&Comment> {
        self.comments.iter().find(|c| c.author() == author)
    }

    /// Upvote the comment at `index`; out-of-range indices are ignored
    pub fn upvote_comment(&mut self, index: usize) {
        match self.comments.get_mut(index) {
            Some(comment) => {
                comment.upvote();
                debug!("Upvoted comment {} on {:?}", index, self.name);
            }
            None => trace!("Ignored upvote for missing comment {}", index),
        }
    }

    /// Downvote the comment at `index`; out-of-range indices are ignored
    pub fn downvote_comment(&mut self, index: usize) {
        match self.comments.get_mut(index) {
            Some(comment) => {
                comment.downvote();
                debug!("Downvoted comment {} on {:?}", index, self.name);
            }
            None => trace!("Ignored downvote for missing comment {}", index),
        }
    }

    /// Remove the comment at `index`, shifting later comments down
    ///
    /// Returns `false` and leaves the item unchanged when `index` is out
    /// of range.
    pub fn remove_comment(&mut self, index: usize) -> bool {
        match self.try_remove_comment(index) {
            Ok(_) => true,
            Err(err) => {
                trace!("Ignored removal: {}", err);
                false
            }
        }
    }

    /// Remove and return the comment at `index`
    pub fn try_remove_comment(&mut self, index: usize) -> Result<Comment> {
        if index >= self.comments.len() {
            return Err(SalesError::CommentNotFound {
                index,
                len: self.comments.len(),
            });
        }

        let comment = self.comments.remove(index);
        debug!("Removed comment by {:?} from {:?}", comment.author(), self.name);
        Ok(comment)
    }

    /// Comment with the highest vote count
    ///
    /// Ties go to the earliest comment. Returns `None` when there are no
    /// comments.
    pub fn find_most_helpful_comment(&self) -> Option<&Comment> {
        self.comments.iter().fold(None, |best, comment| match best {
            Some(best) if best.vote_count() >= comment.vote_count() => Some(best),
            _ => Some(comment),
        })
    }

    /// Mean rating over all comments
    pub fn average_rating(&self) -> Option<f64> {
        self.stats().average_rating
    }

    /// Comment count per rating value
    pub fn count_by_rating(&self) -> BTreeMap<i32, usize> {
        self.stats().by_rating
    }

    /// Aggregate statistics over the comments
    pub fn stats(&self) -> ReviewStats {
        ReviewStats::from_comments(&self.comments)
    }
}

// Custom deserialization to re-check every comment
impl<'de> serde::de::Deserialize<'de> for SalesItem {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::de::Deserializer<'de>,
    {
        use serde::de::Error;

        #[derive(Deserialize)]
        struct SalesItemHelper {
            name: String,
            price: Price,
            #[serde(default)]
            comments: Vec<Comment>,
            #[serde(default)]
            ratings: RatingRange,
        }

        let helper = SalesItemHelper::deserialize(deserializer)?;
        if !helper.ratings.is_valid() {
            return Err(D::Error::custom(format!(
                "empty rating range {}",
                helper.ratings
            )));
        }

        let validator = CommentValidator::with_rating_range(helper.ratings);
        let mut comments = Vec::with_capacity(helper.comments.len());
        for comment in helper.comments {
            validator
                .validate_new_comment(comment.author(), comment.rating(), &comments)
                .map_err(D::Error::custom)?;
            comments.push(comment);
        }

        Ok(Self {
            name: helper.name,
            price: helper.price,
            comments,
            validator,
        })
    }
}
