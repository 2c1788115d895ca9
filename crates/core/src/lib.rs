//! tubesrt core library
//!
//! Fetches caption listings and tracks from the YouTube timed-text endpoint,
//! converts them to SubRip and merges several languages into one file.

pub mod catalog;
pub mod client;
pub mod config;
pub mod cue;
pub mod error;
pub mod format;
pub mod merge;
pub mod output;
pub mod srt;
pub mod transport;
pub mod video;
pub mod xml;

// Re-export commonly used items at crate root
pub use catalog::{LanguageCatalog, LanguageEntry};
pub use client::{Availability, TimedTextClient, TrackRequest, Unavailable, resolve_track};
pub use config::TimedTextConfig;
pub use cue::{Cue, CueSequence, decode_text, extract_cues};
pub use error::{Result, TimedTextError};
pub use format::{format_catalog_readable, format_srt_timestamp};
pub use merge::{MergePolicy, merge_tracks};
pub use output::default_output_path;
pub use srt::{SubtitleDocument, SubtitleEntry};
pub use transport::{Fetch, Fetched, HttpFetcher};
pub use video::parse_video_id;
