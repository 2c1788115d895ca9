use url::Url;

use crate::error::{Result, TimedTextError};

/// Accept a bare video id or a watch/short/embed URL and return the id.
pub fn parse_video_id(input: &str) -> Result<String> {
    let input = input.trim();
    let invalid = || TimedTextError::InvalidVideoReference {
        input: input.to_string(),
    };

    if is_video_id(input) {
        return Ok(input.to_string());
    }

    let url = Url::parse(input).map_err(|_| invalid())?;
    let host = url.host_str().unwrap_or_default();

    let candidate = if host.ends_with("youtu.be") {
        url.path_segments().and_then(|mut s| s.next()).map(str::to_string)
    } else if host.ends_with("youtube.com") {
        let mut segments = url.path_segments().into_iter().flatten();
        match segments.next() {
            Some("watch") => url
                .query_pairs()
                .find(|(key, _)| key == "v")
                .map(|(_, value)| value.into_owned()),
            Some("embed" | "shorts" | "live" | "v") => segments.next().map(str::to_string),
            _ => None,
        }
    } else {
        None
    };

    candidate
        .filter(|id| is_video_id(id))
        .ok_or_else(invalid)
}

fn is_video_id(candidate: &str) -> bool {
    !candidate.is_empty()
        && candidate
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}
