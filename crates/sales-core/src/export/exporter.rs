//! Exporter trait and manager

use crate::config::ExportConfig;
use crate::error::{Result, SalesError};
use crate::item::SalesItem;
use std::collections::HashMap;

/// Trait for sales item exporters
pub trait Exporter: Send + Sync {
    /// Export an item to string
    fn export(&self, item: &SalesItem) -> Result<String>;

    /// Get the format name
    fn format_name(&self) -> &str;

    /// Get the file extension
    fn file_extension(&self) -> &str;
}

/// Manager for handling multiple export formats
pub struct ExportManager {
    exporters: HashMap<String, Box<dyn Exporter>>,
    default_format: String,
}

impl ExportManager {
    /// Create a new export manager with default exporters
    pub fn new() -> Self {
        Self::from_config(&ExportConfig::default())
    }

    /// Create a manager whose exporters follow the given settings
    pub fn from_config(config: &ExportConfig) -> Self {
        let mut manager = Self {
            exporters: HashMap::new(),
            default_format: config.default_format.clone(),
        };

        manager.register(Box::new(
            super::json::JsonExporter::pretty().with_votes(config.include_votes),
        ));
        manager.register(Box::new(
            super::json::JsonExporter::compact().with_votes(config.include_votes),
        ));
        manager.register(Box::new(
            super::markdown::MarkdownExporter::new().with_votes(config.include_votes),
        ));

        manager
    }

    /// Register a new exporter
    pub fn register(&mut self, exporter: Box<dyn Exporter>) {
        self.exporters
            .insert(exporter.format_name().to_string(), exporter);
    }

    /// Export an item to the specified format
    pub fn export(&self, item: &SalesItem, format: &str) -> Result<String> {
        let exporter = self.exporters.get(format).ok_or_else(|| {
            SalesError::Validation(format!("Unknown export format: {}", format))
        })?;

        exporter.export(item)
    }

    /// Export an item to the configured default format
    pub fn export_default(&self, item: &SalesItem) -> Result<String> {
        self.export(item, &self.default_format)
    }

    /// Get list of available format names
    pub fn available_formats(&self) -> Vec<String> {
        let mut formats: Vec<_> = self.exporters.keys().cloned().collect();
        formats.sort();
        formats
    }

    /// Check if a format is available
    pub fn has_format(&self, format: &str) -> bool {
        self.exporters.contains_key(format)
    }

    /// Get an exporter by format name
    pub fn get(&self, format: &str) -> Option<&dyn Exporter> {
        self.exporters.get(format).map(|e| e.as_ref())
    }
}

impl Default for ExportManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_item() -> SalesItem {
        let mut item = SalesItem::new("Brain surgery for Dummies", 21998);
        item.add_comment("Alice", "Great product!", 5);
        item
    }

    struct TestExporter;

    impl Exporter for TestExporter {
        fn export(&self, _item: &SalesItem) -> Result<String> {
            Ok("test export".to_string())
        }

        fn format_name(&self) -> &str {
            "test"
        }

        fn file_extension(&self) -> &str {
            "txt"
        }
    }

    #[test]
    fn test_export_manager_creation() {
        let manager = ExportManager::new();
        assert!(manager.has_format("json"));
        assert!(manager.has_format("json-compact"));
        assert!(manager.has_format("markdown"));
    }

    #[test]
    fn test_register_exporter() {
        let mut manager = ExportManager::new();
        manager.register(Box::new(TestExporter));
        assert!(manager.has_format("test"));
        assert_eq!(manager.get("test").unwrap().file_extension(), "txt");
        assert_eq!(manager.export(&create_test_item(), "test").unwrap(), "test export");
    }

    #[test]
    fn test_export_unknown_format() {
        let manager = ExportManager::new();
        let result = manager.export(&create_test_item(), "unknown");
        assert!(matches!(result, Err(SalesError::Validation(_))));
    }

    #[test]
    fn test_available_formats() {
        let manager = ExportManager::new();
        assert_eq!(
            manager.available_formats(),
            vec!["json", "json-compact", "markdown"]
        );
    }

    #[test]
    fn test_export_default_format() {
        let config = ExportConfig {
            default_format: "json".to_string(),
            include_votes: true,
        };
        let manager = ExportManager::from_config(&config);
        let out = manager.export_default(&create_test_item()).unwrap();
        assert!(out.trim_start().starts_with('{'));
    }

    #[test]
    fn test_include_votes_propagates() {
        let config = ExportConfig {
            default_format: "markdown".to_string(),
            include_votes: false,
        };
        let manager = ExportManager::from_config(&config);
        let md = manager.export_default(&create_test_item()).unwrap();
        assert!(!md.contains("votes"));
    }
}
