//! Wizard state and transitions.

use tracing::{debug, info};

use regdesk_model::{PlayerSlot, RegistrationRecord};

use crate::client::{SubmitOutcome, SubmitRegistration};
use crate::step::WizardStep;
use crate::validate::{ErrorMap, validate_player, validate_team};

/// Result of one forward transition attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advance {
    /// The wizard moved to a new step.
    Moved(WizardStep),
    /// Validation failed; the error map holds the field messages and the
    /// wizard stays on the current step.
    Blocked,
    /// The final step validated and a submission was attempted. On success
    /// the wizard is on `Done`; on failure it stays on the last step with
    /// the filled record intact so the user can resubmit.
    Submitted(SubmitOutcome),
}

/// Session state for one registration: current step, the record being
/// filled, and the error map from the last validation attempt.
#[derive(Debug, Default)]
pub struct Wizard {
    step: WizardStep,
    record: RegistrationRecord,
    errors: ErrorMap,
}

impl Wizard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn record(&self) -> &RegistrationRecord {
        &self.record
    }

    /// The record is mutated field-by-field as the user types.
    pub fn record_mut(&mut self) -> &mut RegistrationRecord {
        &mut self.record
    }

    /// Field errors from the most recent transition attempt.
    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    /// Attempt a forward transition, validating the current step.
    ///
    /// On the final form step a successful validation submits the record
    /// through `client` instead of advancing.
    pub fn advance(&mut self, client: &dyn SubmitRegistration) -> Advance {
        match self.step {
            WizardStep::Intro => {
                self.step = self.step.next();
                Advance::Moved(self.step)
            }
            WizardStep::Team => self.validate_and_move(validate_team(&self.record)),
            WizardStep::Player(slot) if !self.step.is_final_form_step() => {
                self.validate_and_move(validate_player(&self.record, slot))
            }
            WizardStep::Player(_) => {
                self.errors = validate_player(&self.record, PlayerSlot::Five);
                if !self.errors.is_empty() {
                    debug!(step = %self.step, errors = self.errors.len(), "step blocked");
                    return Advance::Blocked;
                }
                let outcome = client.submit(&self.record);
                if outcome.success {
                    info!("registration submitted");
                    self.step = WizardStep::Done;
                }
                Advance::Submitted(outcome)
            }
            WizardStep::Done => Advance::Moved(WizardStep::Done),
        }
    }

    /// Move back one step. Validation state is left as-is so the user can
    /// see what was wrong when they return.
    pub fn back(&mut self) {
        self.step = self.step.back();
    }

    /// Start over for another registration: empty record, no errors.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    fn validate_and_move(&mut self, errors: ErrorMap) -> Advance {
        self.errors = errors;
        if self.errors.is_empty() {
            self.step = self.step.next();
            Advance::Moved(self.step)
        } else {
            debug!(step = %self.step, errors = self.errors.len(), "step blocked");
            Advance::Blocked
        }
    }
}
