use url::Url;

use crate::error::Result;

pub const DEFAULT_BASE_URL: &str = "https://www.youtube.com/api/timedtext";
pub const DEFAULT_HOST_LANG: &str = "en-US";

/// Where the timed-text endpoint lives and how listings are requested.
#[derive(Clone, Debug)]
pub struct TimedTextConfig {
    pub base_url: Url,
    /// Interface language (`hl`) sent with listing requests.
    pub host_lang: String,
}

impl Default for TimedTextConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default base URL is valid"),
            host_lang: DEFAULT_HOST_LANG.to_string(),
        }
    }
}

impl TimedTextConfig {
    pub fn with_base_url(base_url: &str) -> Result<Self> {
        Ok(Self {
            base_url: Url::parse(base_url)?,
            ..Self::default()
        })
    }

    /// Listing of every caption track and translation target for a video.
    pub fn list_url(&self, video_id: &str) -> Url {
        let mut url = self.base_url.clone();
        url.query_pairs_mut()
            .clear()
            .append_pair("caps", "asr")
            .append_pair("hl", &self.host_lang)
            .append_pair("tlangs", "1")
            .append_pair("type", "list")
            .append_pair("v", video_id)
            .append_pair("vssids", "1");
        url
    }

    /// A single track. `translate_to` asks the platform to machine-translate
    /// the named track into that language.
    pub fn track_url(
        &self,
        video_id: &str,
        lang: &str,
        name: &str,
        translate_to: Option<&str>,
    ) -> Url {
        let mut url = self.base_url.clone();
        {
            let mut query = url.query_pairs_mut();
            query.clear().append_pair("lang", lang).append_pair("name", name);
            if let Some(tlang) = translate_to {
                query.append_pair("tlang", tlang);
            }
            query.append_pair("v", video_id);
        }
        url
    }
}
