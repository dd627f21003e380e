/// Wrap a blog topic in the Mistral instruction template.
pub fn build_blog_prompt(topic: &str) -> String {
    format!(
        "<s>[INST] Write a 200-word blog on the topic: {} \n    Assistant:[/INST]</s>",
        topic
    )
}
