use audiotube_core::error::ConvertError;
use audiotube_core::types::ConversionResult;
use serde::{Deserialize, Serialize};

/// What the interface currently displays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum UiState {
    Idle,
    Loading,
    Success(ConversionResult),
    Failed(String),
}

impl UiState {
    // A stable string label for UI display.
    // This is intentionally not derived from `Debug`.
    pub fn label(&self) -> &'static str {
        match self {
            UiState::Idle => "idle",
            UiState::Loading => "loading",
            UiState::Success(_) => "success",
            UiState::Failed(_) => "failed",
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, UiState::Loading)
    }

    pub fn result(&self) -> Option<&ConversionResult> {
        match self {
            UiState::Success(result) => Some(result),
            _ => None,
        }
    }
}

/// The single piece of mutable state a conversion front-end owns.
///
/// Explicitly constructed and passed into the engine; there is no ambient
/// global. `Loading` encodes the one-request-in-flight condition, so
/// [`Session::begin`] is the precondition gate for a new submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    state: UiState,
}

impl Session {
    pub fn new() -> Self {
        Self { state: UiState::Idle }
    }

    pub fn state(&self) -> &UiState {
        &self.state
    }

    /// Enters `Loading`, discarding any previous result or failure.
    ///
    /// Fails with [`ConvertError::RequestInFlight`] while a request is
    /// pending; the caller must wait for completion before resubmitting.
    pub fn begin(&mut self) -> Result<(), ConvertError> {
        if self.state.is_loading() {
            return Err(ConvertError::RequestInFlight);
        }
        self.state = UiState::Loading;
        Ok(())
    }

    pub fn complete(&mut self, result: ConversionResult) {
        self.state = UiState::Success(result);
    }

    pub fn fail(&mut self, reason: impl Into<String>) {
        self.state = UiState::Failed(reason.into());
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result() -> ConversionResult {
        ConversionResult {
            title: "t".into(),
            link: "https://files.example/x.mp3".into(),
        }
    }

    #[test]
    fn starts_idle() {
        let session = Session::new();
        assert_eq!(session.state(), &UiState::Idle);
        assert_eq!(session.state().label(), "idle");
    }

    #[test]
    fn begin_clears_previous_result() {
        let mut session = Session::new();
        session.begin().unwrap();
        session.complete(result());
        assert!(session.state().result().is_some());

        session.begin().unwrap();
        assert!(session.state().result().is_none());
        assert!(session.state().is_loading());
    }

    #[test]
    fn begin_is_rejected_while_loading() {
        let mut session = Session::new();
        session.begin().unwrap();
        assert_eq!(session.begin(), Err(ConvertError::RequestInFlight));
    }

    #[test]
    fn failure_leaves_no_result() {
        let mut session = Session::new();
        session.begin().unwrap();
        session.fail("service said no");
        assert_eq!(session.state().result(), None);
        assert_eq!(session.state().label(), "failed");
    }

    #[test]
    fn can_resubmit_after_failure() {
        let mut session = Session::new();
        session.begin().unwrap();
        session.fail("transport error");
        session.begin().unwrap();
        assert!(session.state().is_loading());
    }
}
