//! Invocation handlers for the template service.

pub mod generate;

pub use generate::{TemplateHandler, TemplateResponse, EMPTY_TEMPLATE_MESSAGE, PREVIEW_CHARS};
