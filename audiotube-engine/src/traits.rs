use async_trait::async_trait;
use audiotube_core::types::VideoId;
use audiotube_providers::parse::ConversionResponse;

/// The external conversion service, seen as an opaque collaborator: one call
/// per submission, no retries, no cancellation.
///
/// Implementations return `Err` only for transport-level failures (no
/// response, non-2xx, undecodable body); a well-formed response with a
/// non-"ok" status is an `Ok` the engine inspects.
#[async_trait]
pub trait ConversionService: Send + Sync {
    async fn convert(&self, id: &VideoId) -> anyhow::Result<ConversionResponse>;
}

/// Opens a link in the platform's browsing context. Pass-through only: no
/// download management, no validation of the target.
#[async_trait]
pub trait LinkOpener: Send + Sync {
    async fn open(&self, link: &str) -> anyhow::Result<()>;
}
