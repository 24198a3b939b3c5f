//! Comment system module
//!
//! Handles comment data and validation of new comments.

pub mod model;
pub mod validator;

pub use model::Comment;
pub use validator::CommentValidator;
