//! JSON exporter for sales items

use super::exporter::Exporter;
use crate::comment::Comment;
use crate::error::Result;
use crate::item::{ReviewStats, SalesItem};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// JSON exporter with compact mode support
pub struct JsonExporter {
    /// Whether to use pretty-print formatting
    pretty: bool,
    /// Whether vote counts are emitted
    include_votes: bool,
    /// Format name
    name: String,
}

impl JsonExporter {
    /// Create a new JSON exporter
    pub fn new(compact: bool) -> Self {
        Self {
            pretty: !compact,
            include_votes: true,
            name: if compact {
                "json-compact".to_string()
            } else {
                "json".to_string()
            },
        }
    }

    /// Create a compact JSON exporter
    pub fn compact() -> Self {
        Self::new(true)
    }

    /// Create a pretty-printed JSON exporter
    pub fn pretty() -> Self {
        Self::new(false)
    }

    /// Set whether vote counts are emitted
    pub fn with_votes(mut self, include: bool) -> Self {
        self.include_votes = include;
        self
    }
}

impl Exporter for JsonExporter {
    fn export(&self, item: &SalesItem) -> Result<String> {
        let data = ExportData::from_item(item, self.include_votes);

        let json = if self.pretty {
            serde_json::to_string_pretty(&data)?
        } else {
            serde_json::to_string(&data)?
        };

        Ok(json)
    }

    fn format_name(&self) -> &str {
        &self.name
    }

    fn file_extension(&self) -> &str {
        "json"
    }
}

/// Exported item structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportData {
    /// Item name
    pub name: String,
    /// Price in cents
    pub price: u64,
    /// Price formatted in major units
    pub price_display: String,
    /// Author of the most helpful comment
    #[serde(skip_serializing_if = "Option::is_none")]
    pub most_helpful: Option<String>,
    /// Comments in insertion order
    pub comments: Vec<ExportComment>,
    /// Summary statistics
    pub stats: ReviewStats,
}

impl ExportData {
    /// Build export data from an item
    pub fn from_item(item: &SalesItem, include_votes: bool) -> Self {
        Self {
            name: item.name().to_string(),
            price: item.price(),
            price_display: item.unit_price().to_string(),
            most_helpful: item
                .find_most_helpful_comment()
                .map(|c| c.author().to_string()),
            comments: item
                .comments()
                .iter()
                .map(|c| ExportComment::from_comment(c, include_votes))
                .collect(),
            stats: item.stats(),
        }
    }
}

/// Exported comment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportComment {
    pub author: String,
    pub text: String,
    pub rating: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub votes: Option<i64>,
    pub created_at: DateTime<Utc>,
}

impl ExportComment {
    fn from_comment(comment: &Comment, include_votes: bool) -> Self {
        Self {
            author: comment.author().to_string(),
            text: comment.text().to_string(),
            rating: comment.rating(),
            votes: include_votes.then(|| comment.vote_count()),
            created_at: comment.created_at(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn create_test_item() -> SalesItem {
        let mut item = SalesItem::new("Brain surgery for Dummies", 21998);
        item.add_comment("Alice", "Great product!", 5);
        item.add_comment("Bob", "Not bad.", 4);
        item.upvote_comment(1);
        item
    }

    #[test]
    fn test_json_export() {
        let exporter = JsonExporter::pretty();
        let json = exporter.export(&create_test_item()).unwrap();

        let parsed: ExportData = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.name, "Brain surgery for Dummies");
        assert_eq!(parsed.price, 21998);
        assert_eq!(parsed.price_display, "219.98");
        assert_eq!(parsed.most_helpful.as_deref(), Some("Bob"));
        assert_eq!(parsed.comments.len(), 2);
        assert_eq!(parsed.comments[1].votes, Some(1));
        assert_eq!(parsed.stats.count, 2);
    }

    #[test]
    fn test_compact_is_single_line() {
        let exporter = JsonExporter::compact();
        assert_eq!(exporter.format_name(), "json-compact");

        let json = exporter.export(&create_test_item()).unwrap();
        assert!(!json.contains('\n'));
    }

    #[test]
    fn test_votes_omitted() {
        let exporter = JsonExporter::compact().with_votes(false);
        let json = exporter.export(&create_test_item()).unwrap();
        assert!(!json.contains("\"votes\""));

        let parsed: ExportData = serde_json::from_str(&json).unwrap();
        assert!(parsed.comments.iter().all(|c| c.votes.is_none()));
    }

    #[test]
    fn test_empty_item() {
        let item = SalesItem::new("Empty", 0);
        let json = JsonExporter::compact().export(&item).unwrap();
        assert!(!json.contains("most_helpful"));
        assert!(json.contains("\"comments\":[]"));
    }
}
