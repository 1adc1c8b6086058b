//! Form session controller
//!
//! Owns the field values and validation errors of one form session and
//! mediates every edit, validation pass and submission attempt.
//!
//! Phases:
//! - `Idle`: editing; submit is enabled
//! - `Submitting`: a record has been handed to the store and no result has
//!   come back yet
//! - `Succeeded`: the store accepted the row; the form resets to its
//!   defaults once the reset timer expires

use serde::Serialize;
use std::time::Duration;
use tokio::time::Instant;
use tracing::{debug, error, info, warn};

use crate::error::StoreError;
use crate::record::build_record;
use crate::rules::{FieldRules, HOME_COUNTRY};
use crate::store::SubmissionStore;
use crate::timer::{ResetTimer, SUCCESS_RESET_DELAY};
use crate::types::{Field, FormState, StoredSubmission, SubmissionRecord, ValidationErrors};
use crate::validation::validate;

/// Shown after the store accepted the submission
pub const SUCCESS_NOTICE: &str = "تم إرسال البيانات بنجاح! سنتواصل معك قريباً";

/// Shown for any store failure; details only go to the log
pub const SUBMIT_FAILURE_NOTICE: &str = "حدث خطأ أثناء الإرسال. يرجى المحاولة مرة أخرى.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Idle,
    Submitting,
    Succeeded,
}

/// Result of one submit attempt
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Validation failed; the errors are on the session
    Invalid,
    /// A previous submission has not settled yet
    InFlight,
    /// The store accepted the row
    Submitted(Option<StoredSubmission>),
    /// The store call failed; the form state is untouched
    Failed { notice: &'static str },
}

#[derive(Debug)]
pub struct FormSession {
    state: FormState,
    errors: ValidationErrors,
    submitting: bool,
    pending_reset: Option<ResetTimer>,
    reset_delay: Duration,
}

impl Default for FormSession {
    fn default() -> Self {
        Self::new()
    }
}

impl FormSession {
    pub fn new() -> Self {
        Self::with_reset_delay(SUCCESS_RESET_DELAY)
    }

    pub fn with_reset_delay(reset_delay: Duration) -> Self {
        Self {
            state: FormState::default(),
            errors: ValidationErrors::new(),
            submitting: false,
            pending_reset: None,
            reset_delay,
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    /// Which conditional fields are currently shown
    pub fn rules(&self) -> FieldRules {
        FieldRules::of(&self.state)
    }

    pub fn phase(&self) -> Phase {
        if self.submitting {
            Phase::Submitting
        } else if self.pending_reset.is_some() {
            Phase::Succeeded
        } else {
            Phase::Idle
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn just_succeeded(&self) -> bool {
        self.pending_reset.is_some()
    }

    pub fn submit_enabled(&self) -> bool {
        !self.submitting
    }

    // ==================== Editing ====================

    /// Apply one user edit.
    ///
    /// Clears the field's error immediately. Selecting a home-country city
    /// restores the default country; changing the representative type clears
    /// whichever conditional field it hides.
    pub fn edit(&mut self, field: Field, value: impl Into<String>) {
        self.state.set(field, value.into());
        self.errors.remove(field);

        match field {
            Field::City => {
                if !self.rules().country.is_required() {
                    self.state.country = HOME_COUNTRY.to_string();
                }
            }
            Field::RepresentativeType => {
                let rules = self.rules();
                if !rules.medical_specialty.is_required() {
                    self.state.medical_specialty.clear();
                }
                if !rules.brand_field.is_required() {
                    self.state.brand_field.clear();
                }
            }
            _ => {}
        }
    }

    /// Recompute all errors from scratch. Returns true when the form is valid.
    pub fn validate(&mut self) -> bool {
        self.errors = validate(&self.state);
        self.errors.is_empty()
    }

    // ==================== Submission ====================

    /// Start a submission: validate, then hand back the record to send.
    ///
    /// Once the record is built, a reset still pending from an earlier
    /// success is cancelled so it cannot wipe the form under the new attempt.
    /// An invalid attempt leaves that reset in place.
    pub fn begin_submit(&mut self) -> Result<SubmissionRecord, SubmitOutcome> {
        if self.submitting {
            debug!("Submit ignored, previous submission still in flight");
            return Err(SubmitOutcome::InFlight);
        }

        if !self.validate() {
            warn!(
                fields = ?self.errors.fields().collect::<Vec<_>>(),
                "Submission blocked by validation"
            );
            return Err(SubmitOutcome::Invalid);
        }

        let record = build_record(&self.state).map_err(|e| {
            error!(error = %e, "Could not build submission record");
            SubmitOutcome::Invalid
        })?;

        if self.cancel_reset() {
            debug!("Pending reset cancelled by new submission");
        }

        self.submitting = true;
        Ok(record)
    }

    /// Settle a submission started with [`begin_submit`](Self::begin_submit)
    pub fn complete_submit(
        &mut self,
        result: Result<Option<StoredSubmission>, StoreError>,
    ) -> SubmitOutcome {
        self.submitting = false;

        match result {
            Ok(row) => {
                info!(
                    id = ?row.as_ref().map(|r| r.id),
                    reset_in_ms = self.reset_delay.as_millis() as u64,
                    "Form submitted"
                );
                self.pending_reset = Some(ResetTimer::start(self.reset_delay));
                SubmitOutcome::Submitted(row)
            }
            Err(e) => {
                error!(error = %e, "Error submitting form");
                SubmitOutcome::Failed {
                    notice: SUBMIT_FAILURE_NOTICE,
                }
            }
        }
    }

    /// Validate, send to the store and settle, in one call
    pub async fn submit<S>(&mut self, store: &S) -> SubmitOutcome
    where
        S: SubmissionStore + ?Sized,
    {
        let record = match self.begin_submit() {
            Ok(record) => record,
            Err(outcome) => return outcome,
        };

        let result = store.insert(&record).await;
        self.complete_submit(result)
    }

    // ==================== Success Reset ====================

    pub fn reset_deadline(&self) -> Option<Instant> {
        self.pending_reset.map(|t| t.deadline())
    }

    /// Wait for the pending reset and apply it.
    ///
    /// Returns false immediately when no reset is pending.
    pub async fn wait_reset(&mut self) -> bool {
        let Some(timer) = self.pending_reset else {
            return false;
        };
        timer.elapsed().await;
        self.reset();
        true
    }

    /// Apply the pending reset if its deadline has passed
    pub fn poll_reset(&mut self) -> bool {
        match self.pending_reset {
            Some(timer) if timer.is_due() => {
                self.reset();
                true
            }
            _ => false,
        }
    }

    /// Drop a pending reset without touching the form
    pub fn cancel_reset(&mut self) -> bool {
        self.pending_reset.take().is_some()
    }

    fn reset(&mut self) {
        self.pending_reset = None;
        self.state = FormState::default();
        self.errors.clear();
        debug!("Form reset to defaults");
    }
}
