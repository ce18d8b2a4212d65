//! Submission state shared by the login and sign-up forms.
//!
//! DESIGN
//! ======
//! `Idle -> Validating -> Submitting -> Redirecting`, with every failure
//! returning to `Idle` and setting `error`. `begin` only succeeds from `Idle`,
//! which is what keeps a second submit from racing an in-flight request.
//! `Redirecting` is terminal: the page is about to unmount.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use crate::error::FormError;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormPhase {
    #[default]
    Idle,
    Validating,
    Submitting,
    Redirecting,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormState {
    phase: FormPhase,
    error: Option<String>,
}

impl FormState {
    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    /// Message to show above the form, if any.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Whether the submit control should be disabled.
    pub fn is_busy(&self) -> bool {
        self.phase != FormPhase::Idle
    }

    /// Start handling a submit event. Returns `false` (and changes nothing)
    /// unless the form is idle.
    pub fn begin(&mut self) -> bool {
        if self.phase != FormPhase::Idle {
            return false;
        }
        self.phase = FormPhase::Validating;
        true
    }

    /// Validation passed; the request is about to be sent.
    pub fn mark_submitting(&mut self) {
        if self.phase == FormPhase::Validating {
            self.phase = FormPhase::Submitting;
        }
    }

    /// Return to `Idle` showing `err`.
    pub fn fail(&mut self, err: &FormError) {
        if self.phase == FormPhase::Redirecting {
            return;
        }
        self.phase = FormPhase::Idle;
        self.error = Some(err.to_string());
    }

    /// Apply the outcome of a submission.
    pub fn finish<T>(&mut self, outcome: &Result<T, FormError>) {
        match outcome {
            Ok(_) => self.phase = FormPhase::Redirecting,
            Err(err) => self.fail(err),
        }
    }
}
