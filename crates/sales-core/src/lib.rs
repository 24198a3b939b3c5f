//! sales-core - Core library for sales-review
//!
//! This crate provides the data model for sales items and the customer
//! comments attached to them, including voting, rating validation,
//! configuration and export.

pub mod error;
pub mod types;
pub mod config;
pub mod comment;
pub mod item;
pub mod export;

pub use comment::{Comment, CommentValidator};
pub use error::{Result, SalesError};
pub use item::SalesItem;
pub use types::*;
