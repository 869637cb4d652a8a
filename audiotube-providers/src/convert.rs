use crate::request::{Body, HttpRequest};
use anyhow::Context;
use audiotube_core::types::VideoId;
use url::Url;

#[derive(Clone, PartialEq, Eq)]
pub struct ConversionApiConfig {
    pub base_url: String,
    pub api_host: String,
    pub api_key: String,
}

impl std::fmt::Debug for ConversionApiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConversionApiConfig")
            .field("base_url", &self.base_url)
            .field("api_host", &self.api_host)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

/// Builds the single outbound call of the wire contract:
/// `GET {base_url}/dl?id={video_id}` with the two static caller headers.
pub fn build_conversion_request(
    cfg: &ConversionApiConfig,
    id: &VideoId,
) -> anyhow::Result<HttpRequest> {
    let mut url = Url::parse(&cfg.base_url)
        .with_context(|| format!("parse conversion base url: {}", cfg.base_url))?;
    url.path_segments_mut()
        .map_err(|()| anyhow::anyhow!("conversion base url cannot be a base: {}", cfg.base_url))?
        .pop_if_empty()
        .push("dl");
    url.query_pairs_mut().append_pair("id", id.as_str());

    Ok(HttpRequest {
        method: "GET".into(),
        url: url.into(),
        headers: vec![
            ("Accept".into(), "application/json".into()),
            ("X-RapidAPI-Key".into(), cfg.api_key.clone()),
            ("X-RapidAPI-Host".into(), cfg.api_host.clone()),
        ],
        body: Body::Empty,
    })
}
