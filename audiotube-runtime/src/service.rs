use async_trait::async_trait;
use audiotube_core::types::VideoId;
use audiotube_engine::traits::ConversionService;
use audiotube_providers::convert::{ConversionApiConfig, build_conversion_request};
use audiotube_providers::parse::{ConversionResponse, parse_conversion_response};
use audiotube_providers::runtime;

/// The real conversion service: build the request, execute it, and decode
/// the body. Non-2xx statuses surface as errors with a body excerpt so logs
/// stay useful when the service misbehaves.
pub struct HttpConversionService {
    cfg: ConversionApiConfig,
}

impl HttpConversionService {
    pub fn new(cfg: ConversionApiConfig) -> Self {
        Self { cfg }
    }
}

#[async_trait]
impl ConversionService for HttpConversionService {
    async fn convert(&self, id: &VideoId) -> anyhow::Result<ConversionResponse> {
        let req = build_conversion_request(&self.cfg, id)?;
        log::debug!("conversion request: {req:?}");

        let resp = runtime::execute(&req).await?;
        if !(200..=299).contains(&resp.status) {
            return Err(anyhow::anyhow!(
                "conversion request failed: status={} body={}",
                resp.status,
                String::from_utf8_lossy(&resp.body[..resp.body.len().min(256)])
            ));
        }

        let parsed = parse_conversion_response(&resp.body)?;
        log::info!("conversion response for {id}: status={}", parsed.status);
        Ok(parsed)
    }
}
