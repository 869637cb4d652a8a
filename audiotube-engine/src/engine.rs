use crate::session::Session;
use crate::traits::{ConversionService, LinkOpener};
use audiotube_core::error::ConvertError;
use audiotube_core::types::ConversionResult;
use audiotube_core::video_id::extract_video_id;
use std::future::Future;
use std::sync::Arc;

const STAGE_LOADING: &str = "loading";
const STAGE_SUCCESS: &str = "success";
const STAGE_FAILED: &str = "failed";

pub struct ConverterEngine {
    service: Arc<dyn ConversionService>,
    opener: Arc<dyn LinkOpener>,
}

impl ConverterEngine {
    pub fn new(service: Arc<dyn ConversionService>, opener: Arc<dyn LinkOpener>) -> Self {
        Self { service, opener }
    }

    /// Runs one submission (validate -> extract -> single request -> status
    /// check), driving `session` through its transitions.
    pub async fn submit(
        &self,
        session: &mut Session,
        input: &str,
    ) -> Result<ConversionResult, ConvertError> {
        self.submit_with_hook(session, input, |_stage| async {}).await
    }

    /// Same as `submit`, but emits a stage hook as the submission progresses.
    ///
    /// The hook is intended for UI progress and must be fast.
    pub async fn submit_with_hook<F, Fut>(
        &self,
        session: &mut Session,
        input: &str,
        on_stage: F,
    ) -> Result<ConversionResult, ConvertError>
    where
        F: Fn(&'static str) -> Fut,
        Fut: Future<Output = ()>,
    {
        if session.state().is_loading() {
            return Err(ConvertError::RequestInFlight);
        }

        // Input errors are recovered locally: no request, and the session
        // keeps showing whatever it showed before.
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(ConvertError::EmptyInput);
        }
        let Some(id) = extract_video_id(trimmed) else {
            return Err(ConvertError::InvalidUrl);
        };

        session.begin()?;
        on_stage(STAGE_LOADING).await;

        match self.service.convert(&id).await {
            Ok(resp) if resp.is_ok() => {
                let result = ConversionResult {
                    title: resp.title,
                    link: resp.link,
                };
                session.complete(result.clone());
                on_stage(STAGE_SUCCESS).await;
                Ok(result)
            }
            Ok(resp) => {
                let msg = format!("service returned status: {}", resp.status);
                session.fail(msg.clone());
                on_stage(STAGE_FAILED).await;
                Err(ConvertError::ConversionFailed(msg))
            }
            Err(e) => {
                let msg = e.to_string();
                session.fail(msg.clone());
                on_stage(STAGE_FAILED).await;
                Err(ConvertError::ConversionFailed(msg))
            }
        }
    }

    /// Opens the current result's link in a new browsing context.
    ///
    /// A no-op when the session holds no result, matching a UI where the
    /// download action only exists alongside one.
    pub async fn open_result(&self, session: &Session) -> anyhow::Result<()> {
        let Some(result) = session.state().result() else {
            return Ok(());
        };
        self.opener.open(&result.link).await
    }
}
