/// Session state for the upload/result cycle
///
/// The four loose fields (image ref, label, loading flag, payload) are
/// collapsed into one tagged phase so impossible combinations (loading
/// with a stale result still set) cannot be represented. A monotonic
/// request token guards against overlapping uploads: only the most recently
/// dispatched request may write its outcome back.
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::api::{Analysis, Verdict};

/// Where the current upload cycle stands.
#[derive(Debug, Clone)]
pub enum Phase {
    /// Nothing uploaded yet (or state freshly cleared)
    Idle,
    /// A request is in flight; no result is visible
    Loading,
    /// The endpoint answered and the payload was decoded
    Succeeded { verdict: Verdict, payload: Value },
    /// The request failed; `message` is the user-facing line
    Failed { message: String },
}

/// Identifies one dispatched request. Tokens are handed out in issue order
/// and only the newest one is allowed to complete the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestToken(u64);

/// In-memory state for the lifetime of the window. Never persisted.
#[derive(Debug)]
pub struct Session {
    /// The currently previewed image, if any
    selected_image: Option<PathBuf>,
    /// Current position in the upload state machine
    phase: Phase,
    /// Count of requests dispatched so far (token source)
    issued: u64,
    /// Token of the request whose outcome we are waiting for
    active: Option<RequestToken>,
}

impl Session {
    pub fn new() -> Self {
        Session {
            selected_image: None,
            phase: Phase::Idle,
            issued: 0,
            active: None,
        }
    }

    /// Start a new upload cycle for `path`.
    ///
    /// Clears any previous result and payload before the request goes out,
    /// marks the session loading, and issues the token the caller must hand
    /// back in `finish_upload`. A token issued earlier becomes stale the
    /// moment this returns.
    pub fn begin_upload(&mut self, path: PathBuf) -> RequestToken {
        self.selected_image = Some(path);
        self.phase = Phase::Loading;

        self.issued += 1;
        let token = RequestToken(self.issued);
        self.active = Some(token);
        token
    }

    /// Record the outcome of a dispatched request.
    ///
    /// Returns false (leaving state untouched) when `token` is not the
    /// active one: the response belongs to an upload that has since been
    /// superseded, or to a cycle that already completed.
    pub fn finish_upload(
        &mut self,
        token: RequestToken,
        outcome: Result<Analysis, String>,
    ) -> bool {
        if self.active != Some(token) {
            return false;
        }
        self.active = None;

        self.phase = match outcome {
            Ok(analysis) => Phase::Succeeded {
                verdict: analysis.verdict,
                payload: analysis.payload,
            },
            Err(message) => Phase::Failed { message },
        };
        true
    }

    /// True strictly between request dispatch and the accepted outcome
    pub fn is_loading(&self) -> bool {
        matches!(self.phase, Phase::Loading)
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn selected_image(&self) -> Option<&Path> {
        self.selected_image.as_deref()
    }

    /// The text line summarizing the outcome, if the cycle has one
    pub fn result_label(&self) -> Option<String> {
        match &self.phase {
            Phase::Idle | Phase::Loading => None,
            Phase::Succeeded { verdict, .. } => Some(verdict.to_string()),
            Phase::Failed { message } => Some(message.clone()),
        }
    }

    /// The decoded response body of a successful cycle
    pub fn raw_payload(&self) -> Option<&Value> {
        match &self.phase {
            Phase::Succeeded { payload, .. } => Some(payload),
            _ => None,
        }
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
    use serde_json::json;

    fn analysis(payload: Value) -> Analysis {
        Analysis {
            verdict: Verdict::from_payload(&payload),
            payload,
        }
    }

    #[test]
    fn test_new_session_is_empty() {
        let session = Session::new();
        assert!(!session.is_loading());
        assert!(session.selected_image().is_none());
        assert!(session.result_label().is_none());
        assert!(session.raw_payload().is_none());
    }

    #[test]
    fn test_begin_upload_sets_loading_and_clears_nothing_visible() {
        let mut session = Session::new();
        session.begin_upload(PathBuf::from("cat.png"));

        assert!(session.is_loading());
        assert_eq!(
            session.selected_image(),
            Some(Path::new("cat.png"))
        );
        assert!(session.result_label().is_none());
        assert!(session.raw_payload().is_none());
    }

    #[test]
    fn test_successful_cycle() {
        let mut session = Session::new();
        let token = session.begin_upload(PathBuf::from("cat.png"));

        let payload = json!({ "description": "This is a real image of a cat." });
        assert!(session.finish_upload(token, Ok(analysis(payload))));

        assert!(!session.is_loading());
        assert_eq!(session.result_label().as_deref(), Some("Image is real"));
        assert_eq!(
            session.raw_payload().unwrap()["description"],
            "This is a real image of a cat."
        );
    }

    #[test]
    fn test_failed_cycle_keeps_no_payload() {
        let mut session = Session::new();
        let token = session.begin_upload(PathBuf::from("cat.png"));

        assert!(session.finish_upload(token, Err("Server Error: 500".to_string())));

        assert!(!session.is_loading());
        assert_eq!(session.result_label().as_deref(), Some("Server Error: 500"));
        assert!(session.raw_payload().is_none());
    }

    #[test]
    fn test_new_upload_clears_previous_result_before_resolving() {
        let mut session = Session::new();
        let token = session.begin_upload(PathBuf::from("a.png"));
        session.finish_upload(token, Ok(analysis(json!({ "description": "This is a real image" }))));
        assert!(session.result_label().is_some());

        // Dropping the next file wipes the old verdict and payload
        session.begin_upload(PathBuf::from("b.png"));
        assert!(session.is_loading());
        assert!(session.result_label().is_none());
        assert!(session.raw_payload().is_none());
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let mut session = Session::new();
        let first = session.begin_upload(PathBuf::from("a.png"));
        let second = session.begin_upload(PathBuf::from("b.png"));

        // The superseded request resolves first; nothing may change
        assert!(!session.finish_upload(first, Err("Error: timed out".to_string())));
        assert!(session.is_loading());
        assert!(session.result_label().is_none());

        // The active request lands normally
        let payload = json!({ "description": "Deepfake Detected." });
        assert!(session.finish_upload(second, Ok(analysis(payload))));
        assert_eq!(session.result_label().as_deref(), Some("Deepfake detected"));
    }

    #[test]
    fn test_stale_response_after_completion_is_discarded() {
        let mut session = Session::new();
        let first = session.begin_upload(PathBuf::from("a.png"));
        let second = session.begin_upload(PathBuf::from("b.png"));

        assert!(session.finish_upload(second, Err("Error: refused".to_string())));

        // The older request finally resolves; the settled outcome stays
        assert!(!session.finish_upload(first, Ok(analysis(json!({})))));
        assert_eq!(session.result_label().as_deref(), Some("Error: refused"));
    }

    #[test]
    fn test_double_completion_is_rejected() {
        let mut session = Session::new();
        let token = session.begin_upload(PathBuf::from("a.png"));

        assert!(session.finish_upload(token, Ok(analysis(json!({})))));
        assert!(!session.finish_upload(token, Err("Error: again".to_string())));
        assert_eq!(
            session.result_label().as_deref(),
            Some("Unexpected API response.")
        );
    }
}
