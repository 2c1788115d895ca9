use std::{fmt, path::Path};

use tokio::fs;

use crate::{
    cue::Cue,
    error::{Result, TimedTextError},
    format::format_srt_timestamp,
};

#[derive(Debug, Clone, PartialEq)]
pub struct SubtitleEntry {
    /// 1-based position in the document.
    pub index: usize,
    pub start: f64,
    pub end: f64,
    pub text: String,
}

impl fmt::Display for SubtitleEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.index)?;
        writeln!(
            f,
            "{} --> {}",
            format_srt_timestamp(self.start),
            format_srt_timestamp(self.end)
        )?;
        writeln!(f, "{}", self.text)?;
        writeln!(f)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubtitleDocument {
    entries: Vec<SubtitleEntry>,
}

impl SubtitleDocument {
    pub fn from_cues(cues: &[Cue]) -> Self {
        let entries = cues
            .iter()
            .enumerate()
            .map(|(i, cue)| SubtitleEntry {
                index: i + 1,
                start: cue.start,
                end: cue.end,
                text: cue.text.clone(),
            })
            .collect();
        Self { entries }
    }

    pub fn entries(&self) -> &[SubtitleEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn to_srt(&self) -> String {
        self.to_string()
    }

    /// Write the document as UTF-8 SRT.
    pub async fn save(&self, path: &Path) -> Result<()> {
        fs::write(path, self.to_srt())
            .await
            .map_err(|source| TimedTextError::WriteFailed {
                path: path.to_path_buf(),
                source,
            })
    }
}

impl fmt::Display for SubtitleDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in &self.entries {
            write!(f, "{}", entry)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_single_entry() {
        let doc = SubtitleDocument::from_cues(&[Cue::new(0.0, 1.5, "Hello")]);
        assert!(doc.to_srt().starts_with("1\n00:00:00,000 --> 00:00:01,500\nHello\n"));
        assert_eq!(doc.to_srt(), "1\n00:00:00,000 --> 00:00:01,500\nHello\n\n");
    }

    #[test]
    fn numbers_entries_in_cue_order() {
        let doc = SubtitleDocument::from_cues(&[
            Cue::new(1.0, 3.5, "A & B"),
            Cue::new(4.0, 5.0, "Hi\nBonjour"),
        ]);

        assert_eq!(doc.len(), 2);
        assert_eq!(doc.entries()[1].index, 2);
        assert_eq!(
            doc.to_srt(),
            "1\n00:00:01,000 --> 00:00:03,500\nA & B\n\n\
             2\n00:00:04,000 --> 00:00:05,000\nHi\nBonjour\n\n"
        );
    }

    #[test]
    fn empty_document_serializes_to_nothing() {
        let doc = SubtitleDocument::from_cues(&[]);
        assert!(doc.is_empty());
        assert_eq!(doc.to_srt(), "");
    }
}
