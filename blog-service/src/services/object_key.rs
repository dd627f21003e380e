use chrono::{DateTime, Local};

pub const KEY_PREFIX: &str = "blog-output/";

/// Key for a generated post: `blog-output/HHMMSS.txt` in local time.
///
/// Two posts written within the same second share a key and the later one wins.
pub fn blog_output_key(at: &DateTime<Local>) -> String {
    format!("{}{}.txt", KEY_PREFIX, at.format("%H%M%S"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn key_uses_hour_minute_second() {
        let at = Local.with_ymd_and_hms(2024, 3, 9, 7, 5, 2).unwrap();
        assert_eq!(blog_output_key(&at), "blog-output/070502.txt");
    }
}
