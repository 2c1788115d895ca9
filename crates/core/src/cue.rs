use serde::Serialize;

use crate::{
    error::{Result, TimedTextError},
    xml::XmlElement,
};

/// One timed caption unit. Times are in seconds.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Cue {
    pub start: f64,
    pub end: f64,
    pub text: String,
}

impl Cue {
    pub fn new(start: f64, end: f64, text: impl Into<String>) -> Self {
        Self {
            start,
            end,
            text: text.into(),
        }
    }

    pub fn duration(&self) -> f64 {
        self.end - self.start
    }
}

/// Cues of one track, in the order the platform listed them.
pub type CueSequence = Vec<Cue>;

/// Track text arrives HTML-escaped on top of the XML escaping.
pub fn decode_text(raw: &str) -> String {
    html_escape::decode_html_entities(raw).into_owned()
}

/// Walk the root of a track response into cues.
pub fn extract_cues(root: &XmlElement) -> Result<CueSequence> {
    root.children
        .iter()
        .map(|element| -> Result<Cue> {
            let start = seconds_attr(element, "start")?;
            let duration = seconds_attr(element, "dur")?;
            let text = element.text.as_deref().map(decode_text).unwrap_or_default();
            Ok(Cue::new(start, start + duration, text))
        })
        .collect()
}

fn seconds_attr(element: &XmlElement, attribute: &'static str) -> Result<f64> {
    let value = element.required_attr(attribute)?;
    value
        .trim()
        .parse::<f64>()
        .map_err(|_| TimedTextError::InvalidNumber {
            element: element.name.clone(),
            attribute,
            value: value.to_string(),
        })
}
