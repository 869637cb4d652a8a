use thiserror::Error;

/// Everything a conversion attempt can fail with.
///
/// None of these are fatal: every variant returns control to the caller
/// awaiting the next user action.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    /// The user submitted with no text; no request was attempted.
    #[error("no URL was provided")]
    EmptyInput,

    /// Input does not match any recognized YouTube URL shape; no request was
    /// attempted.
    #[error("not a recognizable YouTube video URL")]
    InvalidUrl,

    /// The service answered with a non-"ok" status, or the request could not
    /// be completed at all. The message is human-readable only; the service
    /// exposes no failure taxonomy worth modelling.
    #[error("conversion failed: {0}")]
    ConversionFailed(String),

    /// A submission arrived while another one was still pending.
    #[error("a conversion is already in progress")]
    RequestInFlight,
}

impl ConvertError {
    /// True when resubmitting with corrected input may help.
    pub fn is_input_error(&self) -> bool {
        matches!(self, Self::EmptyInput | Self::InvalidUrl)
    }
}
