//! Extraction of the template body from raw model text.
//!
//! Extractors run in order and the first match wins: a `yaml`-tagged fence,
//! then any fence, then the trimmed text itself.

use once_cell::sync::Lazy;
use regex::Regex;

static YAML_FENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)```yaml(.*?)```").expect("valid yaml fence pattern"));

static ANY_FENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)```(.*?)```").expect("valid fence pattern"));

type Extractor = fn(&str) -> Option<String>;

const EXTRACTORS: &[Extractor] = &[yaml_fence, any_fence, trimmed];

/// Reduce raw model output to the template body.
pub fn normalize(raw: &str) -> String {
    EXTRACTORS
        .iter()
        .find_map(|extract| extract(raw))
        .unwrap_or_default()
}

fn first_capture(pattern: &Regex, text: &str) -> Option<String> {
    pattern
        .captures(text)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().trim().to_string())
}

fn yaml_fence(text: &str) -> Option<String> {
    first_capture(&YAML_FENCE, text)
}

fn any_fence(text: &str) -> Option<String> {
    first_capture(&ANY_FENCE, text)
}

fn trimmed(text: &str) -> Option<String> {
    Some(text.trim().to_string())
}
