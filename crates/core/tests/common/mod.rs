use std::{collections::HashMap, sync::Mutex};

use tubesrt_core::{Fetch, Fetched, Result, TimedTextClient, TimedTextConfig};
use url::Url;

pub const VIDEO_ID: &str = "abc123";

pub const LISTING: &str = r#"<?xml version="1.0" encoding="utf-8" ?>
<transcript_list docid="4242">
  <track id="0" name="English" lang_code="en" lang_original="English" lang_translated="English" lang_default="true"/>
  <track id="1" name="Français" lang_code="fr" lang_original="Français" lang_translated="French"/>
  <target id="2" urlfrag="&amp;tlang=de" lang_code="de" lang_original="Deutsch" lang_translated="German"/>
  <target id="3" urlfrag="&amp;tlang=fr" lang_code="fr" lang_original="Français" lang_translated="French"/>
</transcript_list>"#;

pub const ENGLISH: &str = r#"<?xml version="1.0" encoding="utf-8" ?>
<transcript><text start="1.0" dur="2.5">A &amp;amp; B</text><text start="4.0" dur="1.0">C</text></transcript>"#;

pub const FRENCH: &str = r#"<?xml version="1.0" encoding="utf-8" ?>
<transcript><text start="1.0" dur="2.5">A et B</text><text start="4.0" dur="1.0">C&#39;est</text></transcript>"#;

pub const GERMAN: &str = r#"<?xml version="1.0" encoding="utf-8" ?>
<transcript><text start="1.0" dur="2.5">A und B</text><text start="4.0" dur="1.0">Zeh</text></transcript>"#;

/// In-memory endpoint: answers known URLs, 404 for everything else, and
/// records every request in order.
#[derive(Default)]
pub struct FakeEndpoint {
    responses: HashMap<String, Vec<u8>>,
    requests: Mutex<Vec<Url>>,
}

impl FakeEndpoint {
    pub fn respond(mut self, url: Url, body: &str) -> Self {
        self.responses.insert(url.to_string(), body.as_bytes().to_vec());
        self
    }

    pub fn requests(&self) -> Vec<Url> {
        self.requests.lock().unwrap().clone()
    }
}

impl Fetch for FakeEndpoint {
    async fn get(&self, url: &Url) -> Result<Fetched> {
        self.requests.lock().unwrap().push(url.clone());
        Ok(match self.responses.get(url.as_str()) {
            Some(body) => Fetched::Found(body.clone()),
            None => Fetched::NotFound,
        })
    }
}

pub fn config() -> TimedTextConfig {
    TimedTextConfig::with_base_url("http://timedtext.test/api/timedtext").unwrap()
}

/// Endpoint serving the listing plus native en/fr and translated de.
pub fn full_endpoint() -> FakeEndpoint {
    let config = config();
    FakeEndpoint::default()
        .respond(config.list_url(VIDEO_ID), LISTING)
        .respond(config.track_url(VIDEO_ID, "en", "English", None), ENGLISH)
        .respond(config.track_url(VIDEO_ID, "fr", "Français", None), FRENCH)
        .respond(config.track_url(VIDEO_ID, "en", "English", Some("de")), GERMAN)
}

pub fn client(endpoint: FakeEndpoint) -> TimedTextClient<FakeEndpoint> {
    TimedTextClient::with_fetcher(config(), endpoint)
}
