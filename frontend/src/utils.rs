pub fn format_iso8601_date(iso_date: &str) -> String {
    if let Ok(datetime) = iso_date.parse::<chrono::DateTime<chrono::Utc>>() {
        datetime.format("%Y-%m-%d").to_string()
    } else {
        iso_date.to_string()
    }
}

// Formats each x1000 step
pub fn format_number(number: u64) -> String {
    let num_str = number.to_string();
    let mut result = String::new();
    let len = num_str.len();

    for (i, c) in num_str.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result
}

/// PT1H2M3S -> 01:02:03, PT45S -> 00:45
pub fn format_iso8601_duration(duration: &str) -> String {
    let Some(rest) = duration.strip_prefix("PT") else {
        return duration.to_string();
    };

    let (mut hours, mut minutes, mut seconds) = (0u32, 0u32, 0u32);
    let mut current = String::new();
    for ch in rest.chars() {
        match ch {
            '0'..='9' => current.push(ch),
            'H' | 'M' | 'S' => {
                let value = current.parse::<u32>().unwrap_or(0);
                match ch {
                    'H' => hours = value,
                    'M' => minutes = value,
                    _ => seconds = value,
                }
                current.clear();
            }
            _ => current.clear(),
        }
    }

    if hours != 0 {
        format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
    } else {
        format!("{:02}:{:02}", minutes, seconds)
    }
}

pub fn youtube_watch_url(video_id: &str) -> String {
    format!("https://www.youtube.com/watch?v={video_id}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_thousands() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1000), "1,000");
        assert_eq!(format_number(1234567), "1,234,567");
    }

    #[test]
    fn formats_dates() {
        assert_eq!(format_iso8601_date("2024-03-10T15:30:00Z"), "2024-03-10");
        assert_eq!(format_iso8601_date("not a date"), "not a date");
    }

    #[test]
    fn formats_durations() {
        assert_eq!(format_iso8601_duration("PT45S"), "00:45");
        assert_eq!(format_iso8601_duration("PT1M5S"), "01:05");
        assert_eq!(format_iso8601_duration("PT1H2M3S"), "01:02:03");
        assert_eq!(format_iso8601_duration("PT2H"), "02:00:00");
        assert_eq!(format_iso8601_duration(""), "");
    }
}
