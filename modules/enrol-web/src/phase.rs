/// Lifecycle of one form interaction.
///
/// Transitions happen only on submit-start, store-success, store-error,
/// and user reset. At most one submission is in flight at a time; a
/// submit while already submitting is ignored rather than restarted.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FormPhase {
    #[default]
    Idle,
    Submitting,
    Success,
    Error(String),
}

impl FormPhase {
    /// User pressed submit. Only an editable form (idle, or showing a
    /// previous store error) starts a new submission.
    pub fn submit_start(self) -> FormPhase {
        match self {
            FormPhase::Idle | FormPhase::Error(_) => FormPhase::Submitting,
            other => other,
        }
    }

    /// The store accepted the insert.
    pub fn store_success(self) -> FormPhase {
        match self {
            FormPhase::Submitting => FormPhase::Success,
            other => other,
        }
    }

    /// The store rejected or failed the insert; the form stays editable
    /// with the message shown as a page-level banner.
    pub fn store_error(self, message: String) -> FormPhase {
        match self {
            FormPhase::Submitting => FormPhase::Error(message),
            other => other,
        }
    }

    /// "Submit another" from the confirmation panel, or starting over.
    pub fn reset(self) -> FormPhase {
        FormPhase::Idle
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self, FormPhase::Submitting)
    }
}
