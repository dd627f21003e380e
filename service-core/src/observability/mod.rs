pub mod logging;

pub use logging::{init_tracing, invocation_span};
