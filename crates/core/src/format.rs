use crate::catalog::{LanguageCatalog, LanguageEntry};

/// Format seconds as an SRT `HH:MM:SS,mmm` timestamp, rounded to the
/// nearest millisecond.
pub fn format_srt_timestamp(seconds: f64) -> String {
    let total_ms = if seconds.is_finite() && seconds > 0.0 {
        (seconds * 1000.0).round() as u64
    } else {
        0
    };
    let hours = total_ms / 3_600_000;
    let minutes = (total_ms % 3_600_000) / 60_000;
    let secs = (total_ms % 60_000) / 1_000;
    let millis = total_ms % 1_000;
    format!("{:02}:{:02}:{:02},{:03}", hours, minutes, secs, millis)
}

/// Format a language catalog as a human-readable table
pub fn format_catalog_readable(catalog: &LanguageCatalog) -> String {
    let mut output = String::new();

    for (code, entry) in &catalog.languages {
        let marker = if catalog.default_lang.as_deref() == Some(code.as_str()) {
            "*"
        } else {
            " "
        };
        let description = match entry {
            LanguageEntry::Native(name) if name.is_empty() => "native track".to_string(),
            LanguageEntry::Native(name) => format!("native track \"{}\"", name),
            LanguageEntry::TranslateOnly => "machine translation".to_string(),
        };
        output.push_str(&format!("{} {:<10} {}\n", marker, code, description));
    }

    output
}
