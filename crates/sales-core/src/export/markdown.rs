//! Markdown exporter for sales items

use super::exporter::Exporter;
use crate::comment::Comment;
use crate::error::Result;
use crate::item::SalesItem;

/// Markdown review page exporter
pub struct MarkdownExporter {
    /// Include vote counts
    include_votes: bool,
    /// Include statistics section
    include_stats: bool,
}

impl MarkdownExporter {
    /// Create a new Markdown exporter with default settings
    pub fn new() -> Self {
        Self {
            include_votes: true,
            include_stats: true,
        }
    }

    /// Set whether to include vote counts
    pub fn with_votes(mut self, include: bool) -> Self {
        self.include_votes = include;
        self
    }

    /// Set whether to include statistics
    pub fn with_stats(mut self, include: bool) -> Self {
        self.include_stats = include;
        self
    }

    fn render_header(&self, item: &SalesItem) -> String {
        let mut header = format!("# {}\n\n", item.name());
        header.push_str(&format!("**Price:** {}\n", item.unit_price()));
        header.push_str(&format!("**Comments:** {}\n\n", item.number_of_comments()));
        header
    }

    fn render_stats(&self, item: &SalesItem) -> String {
        let stats = item.stats();
        let mut out = String::from("## Ratings\n\n");

        if let Some(avg) = stats.average_rating {
            out.push_str(&format!("Average rating: {:.1}\n\n", avg));
        }

        for (rating, count) in stats.by_rating.iter().rev() {
            out.push_str(&format!("- {} {}: {}\n", rating, stars(*rating), count));
        }
        out.push('\n');
        out
    }

    fn render_comment(&self, comment: &Comment) -> String {
        let mut out = format!("### {} {}\n\n", comment.author(), stars(comment.rating()));
        if !comment.text().is_empty() {
            for line in comment.text().lines() {
                if line.is_empty() {
                    out.push_str(">\n");
                } else {
                    out.push_str(&format!("> {}\n", line));
                }
            }
            out.push('\n');
        }
        if self.include_votes {
            let votes = comment.vote_count();
            let noun = if votes == 1 || votes == -1 { "vote" } else { "votes" };
            out.push_str(&format!("_{} {}_\n\n", votes, noun));
        }
        out
    }
}

impl Default for MarkdownExporter {
    fn default() -> Self {
        Self::new()
    }
}

impl Exporter for MarkdownExporter {
    fn export(&self, item: &SalesItem) -> Result<String> {
        let mut out = self.render_header(item);

        if item.is_empty() {
            out.push_str("_No comments yet._\n");
            return Ok(out);
        }

        if self.include_stats {
            out.push_str(&self.render_stats(item));
        }

        if let Some(best) = item.find_most_helpful_comment() {
            out.push_str(&format!("**Most helpful:** {}\n\n", best.author()));
        }

        out.push_str("## Comments\n\n");
        for comment in item.comments() {
            out.push_str(&self.render_comment(comment));
        }

        Ok(out)
    }

    fn format_name(&self) -> &str {
        "markdown"
    }

    fn file_extension(&self) -> &str {
        "md"
    }
}

/// Star bar for a rating; out-of-range ratings are clamped for display
fn stars(rating: i32) -> String {
    "★".repeat(rating.clamp(0, 10) as usize)
}
