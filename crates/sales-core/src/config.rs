//! Configuration management for sales-review

use crate::error::{Result, SalesError};
use crate::types::{RatingRange, DEFAULT_MAX_RATING, DEFAULT_MIN_RATING};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Comment review settings
    pub review: ReviewConfig,
    /// Export settings
    pub export: ExportConfig,
}

impl Config {
    /// Parse a configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config =
            toml::from_str(content).map_err(|e| SalesError::Toml(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
            .map_err(|e| e.with_context(format!("Failed to load config {}", path.display())))
    }

    /// Serialize to pretty TOML
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| SalesError::Toml(e.to_string()))
    }

    /// Check cross-field constraints
    pub fn validate(&self) -> Result<()> {
        self.review.validate()?;

        if self.export.default_format.trim().is_empty() {
            return Err(SalesError::Config(
                "export.default_format cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}

/// Comment review configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReviewConfig {
    /// Lowest accepted rating
    pub min_rating: i32,
    /// Highest accepted rating
    pub max_rating: i32,
}

impl ReviewConfig {
    /// Accepted rating range
    pub fn rating_range(&self) -> RatingRange {
        RatingRange::new(self.min_rating, self.max_rating)
    }

    /// Reject an empty rating range
    pub fn validate(&self) -> Result<()> {
        if !self.rating_range().is_valid() {
            return Err(SalesError::Config(format!(
                "min_rating ({}) is greater than max_rating ({})",
                self.min_rating, self.max_rating
            )));
        }

        Ok(())
    }
}

impl Default for ReviewConfig {
    fn default() -> Self {
        Self {
            min_rating: DEFAULT_MIN_RATING,
            max_rating: DEFAULT_MAX_RATING,
        }
    }
}

/// Export-related configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Default export format
    pub default_format: String,
    /// Include vote counts in export
    pub include_votes: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            default_format: "markdown".to_string(),
            include_votes: true,
        }
    }
}
