use thiserror::Error;

use crate::core::wizard::{WizardEvent, WizardStep};

/// Errors raised while driving the project wizard.
#[derive(Debug, Error)]
pub enum WizardError {
    /// The event has no transition from the current step.
    #[error("Event {event} is not valid on step {step:?}")]
    UnexpectedEvent { step: WizardStep, event: String },

    /// Strict validation is enabled and required fields are missing.
    #[error("Project details incomplete: {0}")]
    IncompleteDraft(String),

    /// Navigation attempted without a signed-in user.
    #[error("Sign in to manage projects")]
    Unauthenticated,
}

impl WizardError {
    pub(crate) fn unexpected(step: WizardStep, event: &WizardEvent) -> Self {
        WizardError::UnexpectedEvent {
            step,
            event: event.name().to_string(),
        }
    }
}

/// Failures reported by the identity service.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// The provider accepted the attempt but needs further steps.
    #[error("Login requires additional steps.")]
    Incomplete,

    #[error("Login failed. Please check your credentials.")]
    InvalidCredentials,

    #[error("Sign up failed. Please try again.")]
    SignUpFailed,

    #[error("Verification failed. Please try again.")]
    VerificationFailed,

    #[error("Identity service unavailable: {0}")]
    Unavailable(String),
}
