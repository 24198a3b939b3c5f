//! Export functionality for sales items
//!
//! Exporters render a [`SalesItem`](crate::SalesItem) and its comments as
//! JSON (pretty or compact) or as a Markdown review page.
//!
//! # Example
//!
//! ```
//! use sales_core::export::ExportManager;
//! use sales_core::SalesItem;
//!
//! let mut item = SalesItem::new("Brain surgery for Dummies", 21998);
//! item.add_comment("Alice", "Great product!", 5);
//!
//! let manager = ExportManager::new();
//! let md = manager.export(&item, "markdown").unwrap();
//! assert!(md.starts_with("# Brain surgery for Dummies"));
//! ```

mod exporter;
mod json;
mod markdown;

pub use exporter::{ExportManager, Exporter};
pub use json::{ExportComment, ExportData, JsonExporter};
pub use markdown::MarkdownExporter;
