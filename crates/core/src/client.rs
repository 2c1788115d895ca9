use std::path::Path;

use thiserror::Error;
use tracing::{debug, info};

use crate::{
    catalog::{LanguageCatalog, LanguageEntry},
    config::TimedTextConfig,
    cue::{CueSequence, extract_cues},
    error::{Result, TimedTextError},
    merge::{MergePolicy, merge_tracks},
    srt::SubtitleDocument,
    transport::{Fetch, HttpFetcher},
    xml,
};

/// Why a requested language yielded no track. These are expected outcomes,
/// skipped per language rather than treated as failures.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Unavailable {
    #[error("video has no captions")]
    NoCaptions,

    #[error("language {lang_code} is not offered for this video")]
    LanguageNotListed { lang_code: String },

    #[error("language {lang_code} is only available as a machine translation")]
    TranslationNotPermitted { lang_code: String },

    #[error("language {lang_code} needs a default track to translate from, but there is none")]
    NoDefaultTrack { lang_code: String },

    #[error("track for {lang_code} was not found")]
    TrackNotFound { lang_code: String },
}

pub type Availability<T> = std::result::Result<T, Unavailable>;

/// Parameters for one track request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackRequest {
    pub lang: String,
    pub name: String,
    pub translate_to: Option<String>,
}

impl TrackRequest {
    pub fn is_translation(&self) -> bool {
        self.translate_to.is_some()
    }
}

/// Decide which track to request for `lang_code`. Translations are always
/// derived from the default track; the platform serves no others.
pub fn resolve_track(
    catalog: &LanguageCatalog,
    lang_code: &str,
    allow_translate: bool,
) -> Availability<TrackRequest> {
    if catalog.is_empty() {
        return Err(Unavailable::NoCaptions);
    }

    match catalog.get(lang_code) {
        None => Err(Unavailable::LanguageNotListed {
            lang_code: lang_code.to_string(),
        }),
        Some(LanguageEntry::Native(name)) => Ok(TrackRequest {
            lang: lang_code.to_string(),
            name: name.clone(),
            translate_to: None,
        }),
        Some(LanguageEntry::TranslateOnly) if !allow_translate => {
            Err(Unavailable::TranslationNotPermitted {
                lang_code: lang_code.to_string(),
            })
        }
        Some(LanguageEntry::TranslateOnly) => {
            let (default_code, default_name) =
                catalog
                    .default_track()
                    .ok_or_else(|| Unavailable::NoDefaultTrack {
                        lang_code: lang_code.to_string(),
                    })?;
            Ok(TrackRequest {
                lang: default_code.to_string(),
                name: default_name.to_string(),
                translate_to: Some(lang_code.to_string()),
            })
        }
    }
}

/// Client for the timed-text endpoint. Every call is a single GET awaited
/// in sequence; nothing is cached between calls.
pub struct TimedTextClient<F = HttpFetcher> {
    config: TimedTextConfig,
    fetcher: F,
    merge_policy: MergePolicy,
}

impl TimedTextClient<HttpFetcher> {
    pub fn new(config: TimedTextConfig) -> Self {
        Self::with_fetcher(config, HttpFetcher::new())
    }
}

impl<F: Fetch> TimedTextClient<F> {
    pub fn with_fetcher(config: TimedTextConfig, fetcher: F) -> Self {
        Self {
            config,
            fetcher,
            merge_policy: MergePolicy::default(),
        }
    }

    pub fn with_merge_policy(mut self, merge_policy: MergePolicy) -> Self {
        self.merge_policy = merge_policy;
        self
    }

    pub fn config(&self) -> &TimedTextConfig {
        &self.config
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    pub fn merge_policy(&self) -> MergePolicy {
        self.merge_policy
    }

    /// Languages available for a video. `None` when the listing itself is
    /// not found, which is different from an empty catalog.
    pub async fn list_languages(&self, video_id: &str) -> Result<Option<LanguageCatalog>> {
        let url = self.config.list_url(video_id);
        let Some(body) = self.fetcher.get(&url).await?.into_found() else {
            debug!(video_id, "no language listing");
            return Ok(None);
        };

        let catalog = LanguageCatalog::from_listing(&xml::parse(&body)?)?;
        debug!(
            video_id,
            languages = catalog.languages.len(),
            default = ?catalog.default_lang,
            "language listing"
        );
        Ok(Some(catalog))
    }

    /// Fetch one language against an already listed catalog.
    pub async fn fetch_track(
        &self,
        video_id: &str,
        catalog: &LanguageCatalog,
        lang_code: &str,
        allow_translate: bool,
    ) -> Result<Availability<CueSequence>> {
        let request = match resolve_track(catalog, lang_code, allow_translate) {
            Ok(request) => request,
            Err(reason) => return Ok(Err(reason)),
        };

        let url = self.config.track_url(
            video_id,
            &request.lang,
            &request.name,
            request.translate_to.as_deref(),
        );
        let Some(body) = self.fetcher.get(&url).await?.into_found() else {
            return Ok(Err(Unavailable::TrackNotFound {
                lang_code: lang_code.to_string(),
            }));
        };

        let cues = extract_cues(&xml::parse(&body)?)?;
        debug!(video_id, lang_code, cues = cues.len(), "track fetched");
        Ok(Ok(cues))
    }

    /// Cues for one language, or `None` when the video does not offer it.
    pub async fn fetch_subtitle(
        &self,
        video_id: &str,
        lang_code: &str,
        allow_translate: bool,
    ) -> Result<Option<CueSequence>> {
        let catalog = self.list_languages(video_id).await?.unwrap_or_default();
        match self
            .fetch_track(video_id, &catalog, lang_code, allow_translate)
            .await?
        {
            Ok(cues) => Ok(Some(cues)),
            Err(reason) => {
                info!(video_id, lang_code, %reason, "no subtitle");
                Ok(None)
            }
        }
    }

    /// Fetch every requested language that is available and merge them into
    /// one document. Unavailable languages are skipped; `None` if none is left.
    pub async fn build_document<S: AsRef<str>>(
        &self,
        video_id: &str,
        lang_codes: &[S],
        allow_translate: bool,
    ) -> Result<Option<SubtitleDocument>> {
        let catalog = self.list_languages(video_id).await?.unwrap_or_default();

        let mut tracks = Vec::with_capacity(lang_codes.len());
        for lang_code in lang_codes {
            let lang_code = lang_code.as_ref();
            match self
                .fetch_track(video_id, &catalog, lang_code, allow_translate)
                .await?
            {
                Ok(cues) => tracks.push(cues),
                Err(reason) => info!(video_id, lang_code, %reason, "skipping language"),
            }
        }

        let merged = merge_tracks(&tracks, self.merge_policy)?;
        Ok(merged.map(|cues| SubtitleDocument::from_cues(&cues)))
    }

    /// Build the document and write it to `path`. Nothing is written when no
    /// language could be fetched.
    pub async fn save_subtitle<S: AsRef<str>>(
        &self,
        path: &Path,
        video_id: &str,
        lang_codes: &[S],
        allow_translate: bool,
    ) -> Result<SubtitleDocument> {
        let document = self
            .build_document(video_id, lang_codes, allow_translate)
            .await?
            .ok_or_else(|| TimedTextError::NoSubtitles {
                video_id: video_id.to_string(),
            })?;

        document.save(path).await?;
        info!(video_id, path = %path.display(), entries = document.len(), "subtitle saved");
        Ok(document)
    }
}
