use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref DURATION_RE: Regex =
        Regex::new(r"^PT(?:(\d+)H)?(?:(\d+)M)?(?:(\d+)S)?$").expect("valid duration regex");
}

/// Parse an ISO8601 duration string (PT1H2M3S) to total seconds.
///
/// Anything without the PT prefix, or that does not match the
/// hour/minute/second layout, yields 0 - the upstream source is trusted
/// enough that malformed input degrades instead of erroring.
pub fn parse_duration(encoded: &str) -> u64 {
    let caps = match DURATION_RE.captures(encoded) {
        Some(caps) => caps,
        None => return 0,
    };

    let group = |index: usize| -> u64 {
        caps.get(index)
            .and_then(|m| m.as_str().parse::<u64>().ok())
            .unwrap_or(0)
    };

    group(1) * 3600 + group(2) * 60 + group(3)
}

pub fn video_url(video_id: &str) -> String {
    format!("https://www.youtube.com/watch?v={video_id}")
}

pub fn channel_url(channel_id: &str) -> String {
    format!("https://www.youtube.com/channel/{channel_id}")
}
