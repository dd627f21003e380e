/// Wrap a template request in the Mistral instruction template.
pub fn build_template_prompt(request: &str) -> String {
    format!(
        "<s>[INST] Generate a valid AWS CloudFormation YAML template for the following request. \
         Do NOT include any explanation or markdown formatting:\n\n{} [/INST]</s>",
        request
    )
}
