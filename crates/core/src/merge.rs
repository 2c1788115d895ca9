use crate::{
    cue::{Cue, CueSequence},
    error::{Result, TimedTextError},
};

/// What to do when tracks of the same video disagree on cue count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MergePolicy {
    /// Refuse to merge.
    #[default]
    Strict,
    /// Drop the cues past the end of the shortest track.
    Shortest,
}

/// Stack the text of parallel tracks cue by cue, one line per track in the
/// given order. Timing is taken from the first track. `None` for no tracks.
pub fn merge_tracks(tracks: &[CueSequence], policy: MergePolicy) -> Result<Option<CueSequence>> {
    let Some(first) = tracks.first() else {
        return Ok(None);
    };

    let count = match policy {
        MergePolicy::Strict => {
            if let Some((track, other)) = tracks
                .iter()
                .enumerate()
                .find(|(_, other)| other.len() != first.len())
            {
                return Err(TimedTextError::CueCountMismatch {
                    track,
                    expected: first.len(),
                    found: other.len(),
                });
            }
            first.len()
        }
        MergePolicy::Shortest => tracks.iter().map(Vec::len).min().unwrap_or(0),
    };

    let merged = (0..count)
        .map(|i| {
            let text = tracks
                .iter()
                .map(|track| track[i].text.as_str())
                .collect::<Vec<_>>()
                .join("\n");
            Cue::new(first[i].start, first[i].end, text.trim_end())
        })
        .collect();

    Ok(Some(merged))
}
