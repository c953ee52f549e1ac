//! Intake submission → roster entry.

use lemonn_core::models::{NewPatient, RecordValue, SubmissionRecord};
use log::debug;
use thiserror::Error;

/// Errors reading an intake record.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum IntakeError {
    #[error("Intake record has no '{0}' output")]
    MissingOutput(&'static str),

    #[error("Intake output '{output}' should be {expected}")]
    WrongType {
        output: &'static str,
        expected: &'static str,
    },

    #[error("Intake record has an empty patient name")]
    EmptyName,
}

pub type IntakeResult<T> = Result<T, IntakeError>;

/// Build a roster entry from an assembled patient intake record.
///
/// Reads the `name`, `age` and `diagnosis` outputs. An empty diagnosis is
/// kept as-is; only the name must be non-empty.
pub fn new_patient(record: &SubmissionRecord) -> IntakeResult<NewPatient> {
    let name = text(record, "name")?;
    if name.is_empty() {
        return Err(IntakeError::EmptyName);
    }

    let age = match record.get("age") {
        Some(RecordValue::Number(n)) => *n,
        Some(_) => {
            return Err(IntakeError::WrongType {
                output: "age",
                expected: "a number",
            })
        }
        None => return Err(IntakeError::MissingOutput("age")),
    };

    let diagnosis = text(record, "diagnosis")?;
    debug!("Intake record for '{}' (age {}) ready for roster", name, age);

    Ok(NewPatient::new(name, age, diagnosis))
}

fn text<'a>(record: &'a SubmissionRecord, output: &'static str) -> IntakeResult<&'a str> {
    match record.get(output) {
        Some(RecordValue::Text(s)) => Ok(s.as_str()),
        Some(_) => Err(IntakeError::WrongType {
            output,
            expected: "text",
        }),
        None => Err(IntakeError::MissingOutput(output)),
    }
}
