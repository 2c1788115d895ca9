use std::path::{Path, PathBuf};

/// Default file for a download, e.g. `dir/abc123.en+fr.srt`.
pub fn default_output_path<S: AsRef<str>>(dir: &Path, video_id: &str, lang_codes: &[S]) -> PathBuf {
    let langs = lang_codes
        .iter()
        .map(|code| sanitize(code.as_ref()))
        .collect::<Vec<_>>()
        .join("+");

    if langs.is_empty() {
        dir.join(format!("{}.srt", video_id))
    } else {
        dir.join(format!("{}.{}.srt", video_id, langs))
    }
}

fn sanitize(lang_code: &str) -> String {
    lang_code
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' { c } else { '_' })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_file_after_video_and_languages() {
        let path = default_output_path(Path::new("out"), "abc123", &["en", "fr"]);
        assert_eq!(path, PathBuf::from("out/abc123.en+fr.srt"));
    }

    #[test]
    fn no_languages_gives_plain_name() {
        let path = default_output_path::<&str>(Path::new("."), "abc123", &[]);
        assert_eq!(path, PathBuf::from("./abc123.srt"));
    }

    #[test]
    fn odd_characters_are_replaced() {
        let path = default_output_path(Path::new(""), "abc123", &["zh/Hans"]);
        assert_eq!(path, PathBuf::from("abc123.zh_Hans.srt"));
    }
}
