pub mod object_key;
pub mod prompt;

pub use object_key::blog_output_key;
pub use prompt::build_blog_prompt;
