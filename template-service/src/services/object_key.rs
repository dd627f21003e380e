use chrono::{DateTime, Utc};

pub const KEY_PREFIX: &str = "cloudformation/generated-template-";

/// Key for a generated template, stamped to the second in UTC.
pub fn template_key(at: &DateTime<Utc>) -> String {
    format!("{}{}.yaml", KEY_PREFIX, at.format("%Y%m%d%H%M%S"))
}
