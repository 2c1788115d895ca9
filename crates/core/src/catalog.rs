use std::collections::BTreeMap;

use serde::Serialize;

use crate::{error::Result, xml::XmlElement};

/// How a language can be obtained for a video.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "name", rename_all = "snake_case")]
pub enum LanguageEntry {
    /// A track authored in this language, identified by its track name
    /// (which may be empty).
    Native(String),
    /// Only reachable as a machine translation of the default track.
    TranslateOnly,
}

impl LanguageEntry {
    pub fn track_name(&self) -> Option<&str> {
        match self {
            LanguageEntry::Native(name) => Some(name.as_str()),
            LanguageEntry::TranslateOnly => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LanguageCatalog {
    pub languages: BTreeMap<String, LanguageEntry>,
    pub default_lang: Option<String>,
}

impl LanguageCatalog {
    /// No tracks at all: the video has no captions.
    pub fn is_empty(&self) -> bool {
        self.languages.is_empty() && self.default_lang.is_none()
    }

    pub fn get(&self, lang_code: &str) -> Option<&LanguageEntry> {
        self.languages.get(lang_code)
    }

    /// Code and track name of the default track, if it is a native one.
    pub fn default_track(&self) -> Option<(&str, &str)> {
        let code = self.default_lang.as_deref()?;
        let name = self.get(code)?.track_name()?;
        Some((code, name))
    }

    /// Build a catalog from the root of a listing response.
    pub fn from_listing(root: &XmlElement) -> Result<Self> {
        let mut catalog = LanguageCatalog::default();

        for entry in &root.children {
            let lang_code = entry.required_attr("lang_code")?;
            match entry.attr("name") {
                Some(name) => {
                    if entry.has_attr("lang_default") {
                        catalog.default_lang = Some(lang_code.to_string());
                    }
                    catalog
                        .languages
                        .insert(lang_code.to_string(), LanguageEntry::Native(name.to_string()));
                }
                // translation targets repeat codes that already have a track
                None => {
                    catalog
                        .languages
                        .entry(lang_code.to_string())
                        .or_insert(LanguageEntry::TranslateOnly);
                }
            }
        }

        Ok(catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::xml;

    fn catalog(listing: &str) -> LanguageCatalog {
        LanguageCatalog::from_listing(&xml::parse(listing.as_bytes()).unwrap()).unwrap()
    }

    #[test]
    fn native_default_and_translate_only_entries() {
        let catalog = catalog(
            r#"<transcript_list docid="1">
                <track id="0" name="English" lang_code="en" lang_default="true"/>
                <target id="1" lang_code="fr" urlfrag="&amp;tlang=fr"/>
            </transcript_list>"#,
        );

        assert_eq!(catalog.default_lang.as_deref(), Some("en"));
        assert_eq!(catalog.get("en"), Some(&LanguageEntry::Native("English".into())));
        assert_eq!(catalog.get("fr"), Some(&LanguageEntry::TranslateOnly));
        assert_eq!(catalog.default_track(), Some(("en", "English")));
    }

    #[test]
    fn native_entry_wins_over_translation_target() {
        let catalog = catalog(
            r#"<transcript_list>
                <target lang_code="de"/>
                <track name="" lang_code="de"/>
                <target lang_code="de"/>
            </transcript_list>"#,
        );

        assert_eq!(catalog.get("de"), Some(&LanguageEntry::Native(String::new())));
        assert_eq!(catalog.default_lang, None);
    }

    #[test]
    fn default_flag_ignored_on_translation_targets() {
        let catalog = catalog(r#"<transcript_list><target lang_code="es" lang_default="true"/></transcript_list>"#);
        assert_eq!(catalog.default_lang, None);
        assert!(!catalog.is_empty());
        assert_eq!(catalog.default_track(), None);
    }

    #[test]
    fn empty_listing_means_no_captions() {
        assert!(catalog("<transcript_list/>").is_empty());
    }

    #[test]
    fn entry_without_lang_code_is_malformed() {
        let root = xml::parse(br#"<transcript_list><track name="x"/></transcript_list>"#).unwrap();
        let err = LanguageCatalog::from_listing(&root).unwrap_err();
        assert!(err.is_malformed_input());
    }
}
