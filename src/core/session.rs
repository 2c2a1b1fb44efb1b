//! Submission flow: a draft is edited permissively, validated on submit, and
//! frozen into a read-only record once accepted.

use crate::core::time::Clock;
use crate::core::validation::{validate, ValidationReport};
use crate::domain::{ApplicationDraft, Field, Skill, SubmittedApplication};

/// Lifecycle states of an intake session. `Submitted` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Editing,
    Submitted,
}

/// Fire-and-forget recipient of accepted submissions. Runs once, after the
/// transition to `Submitted` is recorded.
pub trait SubmissionObserver {
    fn on_submitted(&self, application: &SubmittedApplication);
}

/// Emits the accepted record as a structured JSON info event.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogObserver;

impl SubmissionObserver for LogObserver {
    fn on_submitted(&self, application: &SubmittedApplication) {
        match serde_json::to_string(application) {
            Ok(payload) => {
                tracing::info!(target: "intake_core::submission", %payload, "Application submitted.")
            }
            Err(err) => {
                tracing::warn!("Failed to serialize submitted application: {err}")
            }
        }
    }
}

/// Owns the draft, the latest validation report, and the frozen record.
///
/// Mutators never reject input while editing; once submitted the draft is
/// frozen and they become no-ops.
pub struct IntakeSession<C: Clock> {
    draft: ApplicationDraft,
    errors: ValidationReport,
    state: SessionState,
    submission: Option<SubmittedApplication>,
    clock: C,
    observers: Vec<Box<dyn SubmissionObserver>>,
}

impl<C: Clock> IntakeSession<C> {
    /// Creates a session holding an empty draft.
    pub fn new(clock: C) -> Self {
        Self::with_draft(clock, ApplicationDraft::new())
    }

    /// Creates a session around an existing draft.
    pub fn with_draft(clock: C, draft: ApplicationDraft) -> Self {
        Self {
            draft,
            errors: ValidationReport::default(),
            state: SessionState::Editing,
            submission: None,
            clock,
            observers: Vec::new(),
        }
    }

    pub fn register_observer(&mut self, observer: Box<dyn SubmissionObserver>) {
        self.observers.push(observer);
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn draft(&self) -> &ApplicationDraft {
        &self.draft
    }

    /// Report from the most recent rejected submit attempt.
    pub fn errors(&self) -> &ValidationReport {
        &self.errors
    }

    pub fn submission(&self) -> Option<&SubmittedApplication> {
        self.submission.as_ref()
    }

    /// Replaces a scalar field while editing; ignored once submitted.
    pub fn set_field(&mut self, field: Field, value: &str) {
        if self.state == SessionState::Editing {
            self.draft.set_field(field, value);
        }
    }

    /// Toggles a catalog skill while editing; ignored once submitted.
    pub fn toggle_skill(&mut self, skill: Skill, present: bool) {
        if self.state == SessionState::Editing {
            self.draft.toggle_skill(skill, present);
        }
    }

    /// Runs one submit attempt.
    ///
    /// A clean report freezes the draft, records the transition, and then
    /// notifies observers exactly once. A dirty report keeps the session in
    /// `Editing` with the errors retained for display. Submitting again after
    /// acceptance returns the existing record without re-validating or
    /// re-notifying.
    pub fn submit(&mut self) -> Result<&SubmittedApplication, &ValidationReport> {
        if self.state == SessionState::Editing {
            let report = validate(&self.draft, self.clock.now());
            if report.is_empty() {
                let application =
                    SubmittedApplication::from_valid_draft(&self.draft, self.clock.now());
                self.state = SessionState::Submitted;
                self.errors = ValidationReport::default();
                self.submission = Some(application);
                if let Some(accepted) = self.submission.as_ref() {
                    for observer in &self.observers {
                        observer.on_submitted(accepted);
                    }
                }
            } else {
                self.errors = report;
            }
        }

        match self.submission.as_ref() {
            Some(application) => Ok(application),
            None => Err(&self.errors),
        }
    }
}
