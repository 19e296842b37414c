use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Tried in order; the first pattern that matches anywhere in the input wins.
    static ref VIDEO_ID_PATTERNS: Vec<Regex> = [
        r"youtube\.com/shorts/([a-zA-Z0-9_-]{11})",
        r"youtu\.be/([a-zA-Z0-9_-]{11})",
        r"youtube\.com/watch\?v=([a-zA-Z0-9_-]{11})",
        r"m\.youtube\.com/watch\?v=([a-zA-Z0-9_-]{11})",
        r"^([a-zA-Z0-9_-]{11})$", // bare ID
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).expect("video ID pattern is valid"))
    .collect();

    /// Latin or Cyrillic letters, ASCII digits and underscore.
    static ref HASHTAG_PATTERN: Regex =
        Regex::new(r"#([[\p{Latin}\p{Cyrillic}&&\p{L}]0-9_]+)").expect("hashtag pattern is valid");
}

pub const SUPPORTED_URL_FORMATS: &str = "youtube.com/shorts/ID, youtu.be/ID, \
     youtube.com/watch?v=ID, m.youtube.com/watch?v=ID or the bare 11-character ID";

/// Extracts the 11-character video ID from the supported YouTube link shapes.
///
/// Supported formats:
/// - https://youtube.com/shorts/VIDEO_ID (any subdomain)
/// - https://youtu.be/VIDEO_ID
/// - https://www.youtube.com/watch?v=VIDEO_ID
/// - https://m.youtube.com/watch?v=VIDEO_ID
/// - VIDEO_ID
pub fn extract_youtube_video_id(url: &str) -> Option<String> {
    VIDEO_ID_PATTERNS
        .iter()
        .find_map(|pattern| pattern.captures(url))
        .and_then(|captures| captures.get(1))
        .map(|m| m.as_str().to_string())
}

/// Collects the distinct hashtags of `text` without the leading `#`,
/// in the order they first appear.
pub fn extract_hashtags(text: Option<&str>) -> Vec<String> {
    let Some(text) = text.filter(|t| !t.is_empty()) else {
        return Vec::new();
    };

    let mut hashtags: Vec<String> = Vec::new();
    for captures in HASHTAG_PATTERN.captures_iter(text) {
        let tag = &captures[1];
        if !hashtags.iter().any(|seen| seen == tag) {
            hashtags.push(tag.to_string());
        }
    }
    hashtags
}

/// Parse ISO8601 duration string (PT1H2M3S) to total seconds
pub fn parse_iso8601_duration_to_seconds(duration_str: &str) -> i64 {
    let Some(duration_part) = duration_str.strip_prefix("PT") else {
        return 0;
    };

    let mut total_seconds = 0.0;
    let mut current_number = String::new();

    for ch in duration_part.chars() {
        if ch.is_ascii_digit() || ch == '.' {
            current_number.push(ch);
        } else {
            if let Ok(num) = current_number.parse::<f64>() {
                match ch {
                    'H' => total_seconds += num * 3600.0,
                    'M' => total_seconds += num * 60.0,
                    'S' => total_seconds += num,
                    _ => {}
                }
            }
            current_number.clear();
        }
    }

    total_seconds as i64
}
