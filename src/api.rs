// API client module: a small blocking HTTP client that talks to the cxg.de
// nopaste api. One client instance performs exactly one request per run,
// so it stays synchronous.

use std::time::Duration;

use reqwest::blocking::{Client, Response};
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::Url;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

use crate::config::{Config, Format};
use crate::error::{Error, Result};

/// Path segment under which pastes are created and fetched.
pub const PASTE_PATH: &str = "paste";

const JSON: &str = "application/json";

/// Api client holding a reqwest blocking client and the parsed base url.
#[derive(Clone, Debug)]
pub struct PasteClient {
    client: Client,
    base_url: Url,
}

/// Payload sent to create a paste.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct NewPaste {
    pub title: String,
    pub content: String,
    pub format: Format,
}

/// Answer of the create call.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct CreatedPaste {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub url: String,
}

/// A paste as returned by the fetch call. Only `content` is required; the
/// creation date is kept as a `serde_json::Value` because the service does
/// not promise a timestamp encoding.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Paste {
    pub title: Option<String>,
    pub format: Option<String>,
    pub crdate: Option<serde_json::Value>,
    pub content: String,
}

impl NewPaste {
    pub fn from_config(config: &Config, content: String) -> Self {
        Self {
            title: config.title().to_string(),
            content,
            format: config.format(),
        }
    }
}

impl PasteClient {
    /// Create a client for the api rooted at `base_url`. Every request is
    /// bounded by `timeout`.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|e| Error::Config(format!("invalid url {base_url:?}: {e}")))?;
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|source| Error::Network {
                url: base_url.to_string(),
                source,
            })?;
        Ok(Self { client, base_url })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(config.url(), config.timeout())
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Url the create call posts to: `<base>/paste`.
    pub fn create_url(&self) -> Result<Url> {
        api_url(&self.base_url, &[PASTE_PATH])
    }

    /// Url of a single paste: `<base>/paste/<id>`. The id is pushed as one
    /// percent-encoded segment, so a `/` inside it stays inside the segment.
    pub fn paste_url(&self, id: &str) -> Result<Url> {
        if matches!(id, "" | "." | "..") {
            return Err(Error::Config(format!("invalid paste id {id:?}")));
        }
        api_url(&self.base_url, &[PASTE_PATH, id])
    }

    /// Create a paste by POSTing its JSON form to `<base>/paste`.
    pub fn create(&self, paste: &NewPaste) -> Result<CreatedPaste> {
        let url = self.create_url()?;
        let payload = serde_json::to_vec(paste).map_err(|e| Error::Protocol {
            url: url.to_string(),
            reason: format!("failed to encode paste: {e}"),
        })?;

        tracing::debug!(
            "Making a paste to url {} with title {:?}, raw content length of {} and with the format {}.",
            url,
            paste.title,
            paste.content.len(),
            paste.format.as_str(),
        );
        tracing::debug!("Sending json to {}: {}", url, String::from_utf8_lossy(&payload));

        let res = self
            .client
            .post(url.clone())
            .header(CONTENT_TYPE, JSON)
            .header(ACCEPT, JSON)
            .body(payload)
            .send()
            .map_err(|source| Error::Network {
                url: url.to_string(),
                source,
            })?;
        read_json(&url, res)
    }

    /// Fetch a single paste by id.
    pub fn fetch(&self, id: &str) -> Result<Paste> {
        let url = self.paste_url(id)?;
        tracing::debug!("Sending request to url: {}", url);

        let res = self
            .client
            .get(url.clone())
            .header(ACCEPT, JSON)
            .send()
            .map_err(|source| Error::Network {
                url: url.to_string(),
                source,
            })?;
        read_json(&url, res)
    }
}

/// Joins path segments onto `base`, dropping a trailing empty segment first
/// so `http://host/` and `http://host` behave the same.
fn api_url(base: &Url, segments: &[&str]) -> Result<Url> {
    let mut url = base.clone();
    {
        let mut path = url.path_segments_mut().map_err(|_| {
            Error::Config(format!("url {base} cannot be used as an api base"))
        })?;
        path.pop_if_empty();
        path.extend(segments);
    }
    Ok(url)
}

/// Reads the whole body, then checks the status and decodes the JSON.
fn read_json<T: DeserializeOwned>(url: &Url, res: Response) -> Result<T> {
    let status = res.status();
    let body = res.text().map_err(|source| Error::Network {
        url: url.to_string(),
        source,
    })?;

    tracing::debug!(
        "The server answered with code {} and with text:\n\n{}\n",
        status.as_u16(),
        body
    );

    if !status.is_success() {
        return Err(Error::http(url.as_str(), status, &body));
    }
    serde_json::from_str(&body).map_err(|e| Error::Protocol {
        url: url.to_string(),
        reason: e.to_string(),
    })
}

fn string_or_number<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "expected a string or number id, got {other}"
        ))),
    }
}
