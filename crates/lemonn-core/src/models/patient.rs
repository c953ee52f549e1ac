//! Patient models.

use serde::{Deserialize, Serialize};

/// A patient on the clinic roster.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Patient {
    /// Local UUID, generated when the patient is added
    pub id: String,
    /// Full name
    pub name: String,
    /// Age in whole years at intake
    pub age: i64,
    /// Diagnoses as a single display string
    pub diagnosis: String,
    /// Next scheduled session, if any
    pub upcoming_session: Option<String>,
    /// Creation timestamp
    pub created_at: String,
}

/// Patient data before it is added to a roster.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewPatient {
    pub name: String,
    pub age: i64,
    pub diagnosis: String,
    pub upcoming_session: Option<String>,
}

impl NewPatient {
    pub fn new(name: impl Into<String>, age: i64, diagnosis: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            age,
            diagnosis: diagnosis.into(),
            upcoming_session: None,
        }
    }

    pub fn with_upcoming_session(mut self, session: impl Into<String>) -> Self {
        self.upcoming_session = Some(session.into());
        self
    }
}

impl Patient {
    /// Create a patient with a fresh ID.
    pub fn new(new: NewPatient) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: new.name,
            age: new.age,
            diagnosis: new.diagnosis,
            upcoming_session: new.upcoming_session,
            created_at: chrono::Utc::now().to_rfc3339(),
        }
    }

    pub fn has_upcoming_session(&self) -> bool {
        self.upcoming_session.is_some()
    }
}
