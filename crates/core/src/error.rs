use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TimedTextError {
    #[error("Request failed for {url}: {source}")]
    RequestFailed {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Invalid URL: {0}")]
    UrlError(#[from] url::ParseError),

    #[error("Response is not valid UTF-8: {0}")]
    Utf8Error(#[from] std::str::Utf8Error),

    #[error("XML parse error: {0}")]
    XmlError(#[from] roxmltree::Error),

    #[error("Malformed <{element}> element: missing `{attribute}` attribute")]
    MissingAttribute {
        element: String,
        attribute: &'static str,
    },

    #[error("Malformed <{element}> element: `{attribute}` is not a number ({value:?})")]
    InvalidNumber {
        element: String,
        attribute: &'static str,
        value: String,
    },

    #[error("Cannot merge tracks: track {track} has {found} cues, expected {expected}")]
    CueCountMismatch {
        track: usize,
        expected: usize,
        found: usize,
    },

    #[error("Not a video id or watch URL: {input}")]
    InvalidVideoReference { input: String },

    #[error("No subtitles available for video {video_id}")]
    NoSubtitles { video_id: String },

    #[error("Failed to write {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl TimedTextError {
    /// True for upstream data that could not be understood, as opposed to
    /// transport or filesystem failures.
    pub fn is_malformed_input(&self) -> bool {
        matches!(
            self,
            TimedTextError::Utf8Error(_)
                | TimedTextError::XmlError(_)
                | TimedTextError::MissingAttribute { .. }
                | TimedTextError::InvalidNumber { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, TimedTextError>;
