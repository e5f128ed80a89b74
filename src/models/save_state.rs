//! Two-step save state machine
//!
//! `Idle -> Saving -> Submitting | Failed`. Only `Saving` blocks a new
//! attempt. A submission normally navigates away, but a form answered with
//! 204 or aimed at another target leaves the page usable.

use serde::{Deserialize, Serialize};

use crate::error::{MyInfoError, Result};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum SaveState {
    #[default]
    Idle,
    /// Genre request is in flight
    Saving,
    Submitting,
    Failed,
}

impl SaveState {
    pub fn as_str(&self) -> &'static str {
        match self {
            SaveState::Idle => "idle",
            SaveState::Saving => "saving",
            SaveState::Submitting => "submitting",
            SaveState::Failed => "failed",
        }
    }

    pub fn is_busy(&self) -> bool {
        matches!(self, SaveState::Saving)
    }
}

/// What the page must do once the genre request has settled
#[derive(Debug, PartialEq, Eq)]
pub enum SaveStep {
    /// Re-enable fields, then submit the form
    Submit,
    /// Tell the user; the form is not submitted
    ReportFailure(MyInfoError),
}

#[derive(Clone, Debug, Default)]
pub struct SaveCoordinator {
    state: SaveState,
}

impl SaveCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SaveState {
        self.state
    }

    /// Enter `Saving`. Only valid in edit mode and when no save is running.
    pub fn begin(&mut self, editing: bool) -> Result<()> {
        if self.state.is_busy() {
            return Err(MyInfoError::SaveInFlight);
        }
        if !editing {
            return Err(MyInfoError::NotEditing);
        }
        self.state = SaveState::Saving;
        Ok(())
    }

    /// Settle the in-flight request.
    pub fn complete(&mut self, outcome: Result<()>) -> SaveStep {
        match outcome {
            Ok(()) => {
                self.state = SaveState::Submitting;
                SaveStep::Submit
            }
            Err(e) => {
                self.state = SaveState::Failed;
                SaveStep::ReportFailure(e)
            }
        }
    }

    /// The native submission itself threw; the page stays put.
    pub fn submission_failed(&mut self) {
        self.state = SaveState::Failed;
    }
}

pub fn is_success_status(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Map an HTTP status onto the save outcome
pub fn status_outcome(status: u16) -> Result<()> {
    if is_success_status(status) {
        Ok(())
    } else {
        Err(MyInfoError::GenreSaveRejected { status })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_path() {
        let mut save = SaveCoordinator::new();
        save.begin(true).unwrap();
        assert_eq!(save.state(), SaveState::Saving);

        assert_eq!(save.complete(status_outcome(200)), SaveStep::Submit);
        assert_eq!(save.state(), SaveState::Submitting);
    }

    #[test]
    fn test_failure_path_allows_retry() {
        let mut save = SaveCoordinator::new();
        save.begin(true).unwrap();

        let step = save.complete(status_outcome(500));
        assert_eq!(
            step,
            SaveStep::ReportFailure(MyInfoError::GenreSaveRejected { status: 500 })
        );
        assert_eq!(save.state(), SaveState::Failed);

        assert!(save.begin(true).is_ok());
    }

    #[test]
    fn test_second_begin_while_saving_is_rejected() {
        let mut save = SaveCoordinator::new();
        save.begin(true).unwrap();
        assert_eq!(save.begin(true), Err(MyInfoError::SaveInFlight));
    }

    #[test]
    fn test_page_stays_usable_after_submission() {
        let mut save = SaveCoordinator::new();
        save.begin(true).unwrap();
        save.complete(Ok(()));

        assert!(!save.state().is_busy());
        assert!(save.begin(true).is_ok());
    }

    #[test]
    fn test_begin_requires_edit_mode() {
        let mut save = SaveCoordinator::new();
        assert_eq!(save.begin(false), Err(MyInfoError::NotEditing));
        assert_eq!(save.state(), SaveState::Idle);
    }

    #[test]
    fn test_status_ranges() {
        assert!(is_success_status(200));
        assert!(is_success_status(204));
        assert!(is_success_status(299));
        assert!(!is_success_status(199));
        assert!(!is_success_status(302));
        assert!(!is_success_status(404));
    }
}
