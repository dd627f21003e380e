pub mod normalizer;
pub mod object_key;
pub mod prompt;

pub use normalizer::normalize;
pub use object_key::template_key;
pub use prompt::build_template_prompt;
