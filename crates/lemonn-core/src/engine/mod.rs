//! Stepped form engine.
//!
//! Pipeline: input event → Field Store → Validation Gate → host snapshot
//! → (advance) Step Sequencer → (submit) Submission Assembler → host save
//!
//! A [`FormSession`] is one in-progress fill of a form, owned by the screen
//! that opened it. It is discarded on cancel or after a successful submit;
//! every call after that returns an error instead of silently succeeding.

mod assembler;
mod gate;
mod sequencer;
mod store;

pub use assembler::*;
pub use gate::*;
pub use sequencer::*;
pub use store::*;

use std::fmt;

use chrono::NaiveDate;
use log::{debug, error, info, warn};
use serde::Serialize;
use thiserror::Error;

use crate::models::{FieldValue, FormDefinition, ScalarValue, SchemaError, SubmissionRecord};

/// Session errors.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum SessionError {
    #[error(transparent)]
    Field(#[from] FieldError),

    #[error(transparent)]
    Assembly(#[from] AssemblyError),

    #[error("Incomplete submission: {0}")]
    IncompleteSubmission(Incomplete),

    #[error("Session was cancelled and discarded")]
    Discarded,

    #[error("Session was already submitted")]
    Submitted,
}

pub type SessionResult<T> = Result<T, SessionError>;

/// Why a submission was refused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Incomplete {
    /// Assembly was attempted before the last step
    NotAtFinalStep { step: usize, last: usize },
    /// Required fields are still empty somewhere in the form
    MissingFields(Vec<String>),
}

impl fmt::Display for Incomplete {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Incomplete::NotAtFinalStep { step, last } => {
                write!(f, "on step {} of {}", step + 1, last + 1)
            }
            Incomplete::MissingFields(names) => write!(f, "missing {}", names.join(", ")),
        }
    }
}

/// Lifecycle of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SessionState {
    Active,
    Cancelled,
    Submitted,
}

/// Result of a forward navigation attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advance {
    /// Moved from one step to the next
    Moved { from: usize, to: usize },
    /// Required fields on the current step are empty; nothing changed
    Blocked { missing: Vec<String> },
    /// Already on the last step; nothing changed
    AtFinalStep,
}

impl Advance {
    pub fn moved(&self) -> bool {
        matches!(self, Advance::Moved { .. })
    }
}

/// What a host screen needs to render navigation state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionSnapshot {
    pub step: usize,
    pub step_label: String,
    pub step_count: usize,
    /// Required fields on the current step that are still empty
    pub missing: Vec<String>,
    pub state: SessionState,
}

impl SessionSnapshot {
    /// Whether the host should enable its "Next" control.
    pub fn can_advance(&self) -> bool {
        self.missing.is_empty() && self.step + 1 < self.step_count
    }

    pub fn is_final_step(&self) -> bool {
        self.step + 1 == self.step_count
    }
}

/// Callbacks into the screen that owns a session.
pub trait FormHost: Send {
    /// Called after every field mutation and navigation.
    fn on_change(&self, _snapshot: &SessionSnapshot) {}

    /// Called exactly once per successful submit.
    fn on_save(&self, record: SubmissionRecord);

    /// Called when the session is cancelled.
    fn on_cancel(&self) {}
}

/// Host that ignores every callback.
pub struct NoopHost;

impl FormHost for NoopHost {
    fn on_save(&self, _record: SubmissionRecord) {}
}

/// Source of the current calendar date for age computation.
pub trait Clock: Send {
    fn today(&self) -> NaiveDate;
}

/// Local calendar date.
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        chrono::Local::now().date_naive()
    }
}

/// Fixed date, for tests and replays.
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// Builder for [`FormSession`].
pub struct FormSessionBuilder {
    definition: FormDefinition,
    host: Box<dyn FormHost>,
    clock: Box<dyn Clock>,
}

impl FormSessionBuilder {
    pub fn host(mut self, host: impl FormHost + 'static) -> Self {
        self.host = Box::new(host);
        self
    }

    pub fn boxed_host(mut self, host: Box<dyn FormHost>) -> Self {
        self.host = host;
        self
    }

    pub fn clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Validate the definition and open the session at step 0.
    pub fn build(self) -> Result<FormSession, SchemaError> {
        self.definition.validate()?;

        let session = FormSession {
            id: uuid::Uuid::new_v4().to_string(),
            store: FieldStore::new(&self.definition.schema),
            sequencer: StepSequencer::new(self.definition.schema.step_count()),
            definition: self.definition,
            state: SessionState::Active,
            host: self.host,
            clock: self.clock,
        };
        info!(
            "session {} opened for '{}' ({} steps)",
            session.id,
            session.definition.schema.title,
            session.sequencer.len()
        );
        Ok(session)
    }
}

/// One in-progress fill of a multi-step form.
pub struct FormSession {
    id: String,
    definition: FormDefinition,
    store: FieldStore,
    sequencer: StepSequencer,
    state: SessionState,
    host: Box<dyn FormHost>,
    clock: Box<dyn Clock>,
}

impl FormSession {
    pub fn builder(definition: FormDefinition) -> FormSessionBuilder {
        FormSessionBuilder {
            definition,
            host: Box::new(NoopHost),
            clock: Box::new(SystemClock),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn definition(&self) -> &FormDefinition {
        &self.definition
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn step(&self) -> usize {
        self.sequencer.index()
    }

    pub fn step_count(&self) -> usize {
        self.sequencer.len()
    }

    /// Current value of a field, or `None` if undeclared.
    pub fn value(&self, name: &str) -> Option<&FieldValue> {
        self.store.get(name)
    }

    /// Required fields on the current step that are still empty.
    pub fn missing(&self) -> Vec<String> {
        ValidationGate::check_step(self.current_step(), &self.store).missing
    }

    /// Whether the current step's required fields are all filled.
    pub fn can_advance(&self) -> bool {
        ValidationGate::can_advance(self.current_step(), &self.store)
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            step: self.sequencer.index(),
            step_label: self.current_step().label.clone(),
            step_count: self.sequencer.len(),
            missing: self.missing(),
            state: self.state,
        }
    }

    /// Overwrite a text or flag field.
    pub fn set_scalar(&mut self, name: &str, value: impl Into<ScalarValue>) -> SessionResult<()> {
        self.ensure_active()?;
        let value = value.into();
        if let Err(e) = self.store.set_scalar(name, value) {
            error!("session {}: {}", self.id, e);
            return Err(e.into());
        }
        debug!("session {}: set '{}'", self.id, name);
        self.notify();
        Ok(())
    }

    /// Check (`present = true`) or uncheck an item of a multi field.
    pub fn toggle_multi(&mut self, name: &str, item: &str, present: bool) -> SessionResult<()> {
        self.ensure_active()?;
        if let Err(e) = self.store.toggle_multi(name, item, present) {
            error!("session {}: {}", self.id, e);
            return Err(e.into());
        }
        debug!("session {}: toggled '{}' in '{}' to {}", self.id, item, name, present);
        self.notify();
        Ok(())
    }

    /// Move to the next step if the current step's required fields are filled.
    pub fn advance(&mut self) -> SessionResult<Advance> {
        self.ensure_active()?;

        if self.sequencer.is_terminal() {
            return Ok(Advance::AtFinalStep);
        }

        let report = ValidationGate::check_step(self.current_step(), &self.store);
        if !report.is_open() {
            warn!(
                "session {}: step {} blocked, missing {}",
                self.id,
                self.sequencer.index(),
                report.missing.join(", ")
            );
            let outcome = Advance::Blocked {
                missing: report.missing,
            };
            self.notify();
            return Ok(outcome);
        }

        let from = self.sequencer.index();
        self.sequencer.forward();
        let to = self.sequencer.index();
        debug!("session {}: step {} -> {}", self.id, from, to);
        self.notify();
        Ok(Advance::Moved { from, to })
    }

    /// Move to the previous step. No validation. Returns false at step 0.
    pub fn retreat(&mut self) -> SessionResult<bool> {
        self.ensure_active()?;
        let moved = self.sequencer.back();
        if moved {
            debug!("session {}: back to step {}", self.id, self.sequencer.index());
            self.notify();
        }
        Ok(moved)
    }

    /// Discard the session. Every later call fails with [`SessionError::Discarded`].
    pub fn cancel(&mut self) -> SessionResult<()> {
        self.ensure_active()?;
        self.state = SessionState::Cancelled;
        info!("session {} cancelled at step {}", self.id, self.sequencer.index());
        self.host.on_cancel();
        Ok(())
    }

    /// Build the submission record without closing the session.
    ///
    /// Requires the terminal step and every required field of every step.
    pub fn assemble(&self) -> SessionResult<SubmissionRecord> {
        self.ensure_active()?;

        if !self.sequencer.is_terminal() {
            warn!("session {}: assemble attempted on step {}", self.id, self.sequencer.index());
            return Err(SessionError::IncompleteSubmission(Incomplete::NotAtFinalStep {
                step: self.sequencer.index(),
                last: self.sequencer.last(),
            }));
        }

        let report = ValidationGate::check_all(&self.definition.schema, &self.store);
        if !report.is_open() {
            warn!("session {}: submission missing {}", self.id, report.missing.join(", "));
            return Err(SessionError::IncompleteSubmission(Incomplete::MissingFields(
                report.missing,
            )));
        }

        Ok(assemble(
            &self.definition.schema.title,
            &self.store,
            &self.definition.mapping,
            self.clock.today(),
        )?)
    }

    /// Assemble, hand the record to the host once, and close the session.
    pub fn submit(&mut self) -> SessionResult<SubmissionRecord> {
        self.submit_with(|_| Ok::<(), SessionError>(()))
            .map(|(record, ())| record)
    }

    /// Like [`submit`](Self::submit), but runs `encode` on the record first.
    ///
    /// If `encode` fails the session stays active and the host is not called.
    pub fn submit_with<T, E>(
        &mut self,
        encode: impl FnOnce(&SubmissionRecord) -> Result<T, E>,
    ) -> Result<(SubmissionRecord, T), E>
    where
        E: From<SessionError>,
    {
        let record = self.assemble()?;
        let encoded = encode(&record)?;
        self.state = SessionState::Submitted;
        info!("session {} submitted '{}'", self.id, record.form);
        self.host.on_save(record.clone());
        Ok((record, encoded))
    }

    fn current_step(&self) -> &crate::models::StepSpec {
        &self.definition.schema.steps[self.sequencer.index()]
    }

    fn ensure_active(&self) -> SessionResult<()> {
        match self.state {
            SessionState::Active => Ok(()),
            SessionState::Cancelled => Err(SessionError::Discarded),
            SessionState::Submitted => Err(SessionError::Submitted),
        }
    }

    fn notify(&self) {
        self.host.on_change(&self.snapshot());
    }
}
