//! Invocation handlers for the blog service.

pub mod generate;

pub use generate::{BlogHandler, BlogOutcome, COMPLETION_MESSAGE};
