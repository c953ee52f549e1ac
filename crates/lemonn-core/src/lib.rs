//! Lemonn Core Library
//!
//! Stepped form engine for pediatric therapy clinic screens: patient intake,
//! activity generation and IEP creation all run through the same engine.
//!
//! # Architecture
//!
//! ```text
//!   Host screen input (keystroke / checkbox / Next / Back)
//!                         │
//!                 ┌───────▼───────┐
//!                 │  Field Store  │  typed values per declared field
//!                 └───────┬───────┘
//!                         │
//!                 ┌───────▼───────┐
//!                 │Validation Gate│──── snapshot ───▶ host.on_change
//!                 └───────┬───────┘  (step, missing fields)
//!                         │ advance
//!                 ┌───────▼───────┐
//!                 │Step Sequencer │  index in [0, N-1]
//!                 └───────┬───────┘
//!                         │ submit on last step
//!                 ┌───────▼───────┐
//!                 │   Assembler   │──── record ─────▶ host.on_save (once)
//!                 └───────────────┘
//! ```
//!
//! # Core Principle
//!
//! **Submission is all-or-nothing.** The assembler re-checks every required
//! field of every step, even though each step was gated on the way forward.
//!
//! # Modules
//!
//! - [`models`]: Domain types (FormSchema, FieldValue, SubmissionRecord, Patient, etc.)
//! - [`engine`]: Field store, step sequencer, validation gate, assembler, session
//! - [`roster`]: In-memory patient roster shared by reference between screens

pub mod engine;
pub mod models;
pub mod roster;

// Re-export commonly used types
pub use engine::{
    Advance, FixedClock, FormHost, FormSession, Incomplete, SessionError, SessionSnapshot,
    SessionState, SystemClock,
};
pub use models::{
    FieldKind, FieldValue, FormDefinition, FormSchema, NewPatient, Patient, RecordValue,
    ScalarValue, StepSpec, SubmissionMapping, SubmissionRecord, Transform,
};
pub use roster::PatientRoster;

// UniFFI setup - using proc macros
uniffi::setup_scaffolding!();

use std::sync::{Arc, Mutex};

use engine::FieldError;
use models::SchemaError;

// =========================================================================
// FFI Error Type
// =========================================================================

#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum LemonnError {
    #[error("Schema error: {0}")]
    SchemaError(String),

    #[error("Unknown field kind: {0}")]
    UnknownFieldKind(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Incomplete submission: {0}")]
    IncompleteSubmission(String),

    #[error("Session discarded: {0}")]
    SessionDiscarded(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<SchemaError> for LemonnError {
    fn from(e: SchemaError) -> Self {
        LemonnError::SchemaError(e.to_string())
    }
}

impl From<SessionError> for LemonnError {
    fn from(e: SessionError) -> Self {
        match e {
            SessionError::Field(FieldError::UnknownFieldKind { .. }) => {
                LemonnError::UnknownFieldKind(e.to_string())
            }
            SessionError::Field(_) | SessionError::Assembly(_) => {
                LemonnError::InvalidInput(e.to_string())
            }
            SessionError::IncompleteSubmission(reason) => {
                LemonnError::IncompleteSubmission(reason.to_string())
            }
            SessionError::Discarded | SessionError::Submitted => {
                LemonnError::SessionDiscarded(e.to_string())
            }
        }
    }
}

impl From<serde_json::Error> for LemonnError {
    fn from(e: serde_json::Error) -> Self {
        LemonnError::SerializationError(e.to_string())
    }
}

impl<T> From<std::sync::PoisonError<T>> for LemonnError {
    fn from(e: std::sync::PoisonError<T>) -> Self {
        LemonnError::Internal(format!("Lock poisoned: {}", e))
    }
}

// =========================================================================
// Host Callback Interface
// =========================================================================

/// Callbacks implemented by the foreign host screen.
///
/// Invoked while the session lock is held; implementations must not call back
/// into the same session synchronously.
#[uniffi::export(callback_interface)]
pub trait FfiFormHost: Send + Sync {
    fn on_change(&self, snapshot: FfiSnapshot);
    fn on_save(&self, record_json: String);
    fn on_cancel(&self);
}

struct ForeignHost(Box<dyn FfiFormHost>);

impl FormHost for ForeignHost {
    fn on_change(&self, snapshot: &SessionSnapshot) {
        self.0.on_change(snapshot.clone().into());
    }

    fn on_save(&self, record: SubmissionRecord) {
        match record.to_json() {
            Ok(json) => self.0.on_save(json),
            Err(e) => log::error!("failed to serialize '{}' record: {}", record.form, e),
        }
    }

    fn on_cancel(&self) {
        self.0.on_cancel();
    }
}

// =========================================================================
// Factory Functions (exported to FFI)
// =========================================================================

/// Open a form session from a JSON form definition.
#[uniffi::export]
pub fn start_form(
    definition_json: String,
    host: Box<dyn FfiFormHost>,
) -> Result<Arc<FfiFormSession>, LemonnError> {
    let definition = FormDefinition::from_json(&definition_json)?;
    let session = FormSession::builder(definition)
        .boxed_host(Box::new(ForeignHost(host)))
        .build()?;
    Ok(Arc::new(FfiFormSession {
        session: Mutex::new(session),
    }))
}

/// Create an empty patient roster.
#[uniffi::export]
pub fn new_patient_roster() -> Arc<FfiPatientRoster> {
    Arc::new(FfiPatientRoster {
        roster: Mutex::new(PatientRoster::new()),
    })
}

/// Create a roster pre-filled with the dashboard's sample patients.
#[uniffi::export]
pub fn sample_patient_roster() -> Arc<FfiPatientRoster> {
    Arc::new(FfiPatientRoster {
        roster: Mutex::new(PatientRoster::with_sample_patients()),
    })
}

// =========================================================================
// Form Session Object
// =========================================================================

/// Thread-safe form session wrapper for FFI.
#[derive(uniffi::Object)]
pub struct FfiFormSession {
    session: Mutex<FormSession>,
}

#[uniffi::export]
impl FfiFormSession {
    /// Current navigation state.
    pub fn snapshot(&self) -> Result<FfiSnapshot, LemonnError> {
        let session = self.session.lock()?;
        Ok(session.snapshot().into())
    }

    /// Set a text, select or radio field.
    pub fn set_text(&self, name: String, value: String) -> Result<FfiSnapshot, LemonnError> {
        let mut session = self.session.lock()?;
        session.set_scalar(&name, value)?;
        Ok(session.snapshot().into())
    }

    /// Set a single checkbox field.
    pub fn set_flag(&self, name: String, value: bool) -> Result<FfiSnapshot, LemonnError> {
        let mut session = self.session.lock()?;
        session.set_scalar(&name, value)?;
        Ok(session.snapshot().into())
    }

    /// Check or uncheck one item of a checkbox group.
    pub fn toggle(
        &self,
        name: String,
        item: String,
        present: bool,
    ) -> Result<FfiSnapshot, LemonnError> {
        let mut session = self.session.lock()?;
        session.toggle_multi(&name, &item, present)?;
        Ok(session.snapshot().into())
    }

    /// Try to move to the next step.
    pub fn advance(&self) -> Result<FfiAdvance, LemonnError> {
        let mut session = self.session.lock()?;
        let outcome = session.advance()?;
        let moved = outcome.moved();
        let missing = match outcome {
            Advance::Blocked { missing } => missing,
            _ => Vec::new(),
        };
        Ok(FfiAdvance {
            moved,
            step: session.step() as u32,
            missing,
        })
    }

    /// Move to the previous step. Returns false on the first step.
    pub fn retreat(&self) -> Result<bool, LemonnError> {
        let mut session = self.session.lock()?;
        Ok(session.retreat()?)
    }

    /// Discard the session.
    pub fn cancel(&self) -> Result<(), LemonnError> {
        let mut session = self.session.lock()?;
        Ok(session.cancel()?)
    }

    /// Assemble the record as JSON without closing the session.
    pub fn assemble(&self) -> Result<String, LemonnError> {
        let session = self.session.lock()?;
        let record = session.assemble()?;
        Ok(record.to_json()?)
    }

    /// Submit the form. The host's `on_save` receives the same JSON.
    ///
    /// The record is encoded before the session closes, so a serialization
    /// failure leaves the session open.
    pub fn submit(&self) -> Result<String, LemonnError> {
        let mut session = self.session.lock()?;
        let (_, json) = session.submit_with(|record| record.to_json().map_err(LemonnError::from))?;
        Ok(json)
    }
}

// =========================================================================
// Patient Roster Object
// =========================================================================

/// Thread-safe patient roster wrapper for FFI.
#[derive(uniffi::Object)]
pub struct FfiPatientRoster {
    roster: Mutex<PatientRoster>,
}

#[uniffi::export]
impl FfiPatientRoster {
    /// Add a patient.
    pub fn add_patient(
        &self,
        name: String,
        age: i64,
        diagnosis: String,
        upcoming_session: Option<String>,
    ) -> Result<FfiPatient, LemonnError> {
        if name.trim().is_empty() {
            return Err(LemonnError::InvalidInput("patient name is empty".into()));
        }
        let mut roster = self.roster.lock()?;
        let new = NewPatient {
            name,
            age,
            diagnosis,
            upcoming_session,
        };
        Ok(roster.add(new).clone().into())
    }

    /// Get a patient by ID.
    pub fn get_patient(&self, id: String) -> Result<Option<FfiPatient>, LemonnError> {
        let roster = self.roster.lock()?;
        Ok(roster.get(&id).cloned().map(Into::into))
    }

    /// All patients in insertion order.
    pub fn list_patients(&self) -> Result<Vec<FfiPatient>, LemonnError> {
        let roster = self.roster.lock()?;
        Ok(roster.list().iter().cloned().map(Into::into).collect())
    }

    /// Search patients by name or diagnosis.
    pub fn search_patients(&self, term: String) -> Result<Vec<FfiPatient>, LemonnError> {
        let roster = self.roster.lock()?;
        Ok(roster
            .search(&term)
            .into_iter()
            .cloned()
            .map(Into::into)
            .collect())
    }
}

// =========================================================================
// FFI Types
// =========================================================================

/// FFI-safe session snapshot.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiSnapshot {
    pub step: u32,
    pub step_label: String,
    pub step_count: u32,
    pub missing: Vec<String>,
    pub can_advance: bool,
    pub is_final_step: bool,
}

impl From<SessionSnapshot> for FfiSnapshot {
    fn from(snapshot: SessionSnapshot) -> Self {
        Self {
            step: snapshot.step as u32,
            step_count: snapshot.step_count as u32,
            can_advance: snapshot.can_advance(),
            is_final_step: snapshot.is_final_step(),
            step_label: snapshot.step_label,
            missing: snapshot.missing,
        }
    }
}

/// FFI-safe navigation outcome.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiAdvance {
    pub moved: bool,
    pub step: u32,
    pub missing: Vec<String>,
}

/// FFI-safe patient.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiPatient {
    pub id: String,
    pub name: String,
    pub age: i64,
    pub diagnosis: String,
    pub upcoming_session: Option<String>,
}

impl From<Patient> for FfiPatient {
    fn from(patient: Patient) -> Self {
        Self {
            id: patient.id,
            name: patient.name,
            age: patient.age,
            diagnosis: patient.diagnosis,
            upcoming_session: patient.upcoming_session,
        }
    }
}
