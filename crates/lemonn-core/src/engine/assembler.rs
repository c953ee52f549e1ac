//! Submission assembler: field values → [`SubmissionRecord`].

use chrono::{Datelike, NaiveDate};
use thiserror::Error;

use crate::models::{FieldValue, RecordValue, SubmissionMapping, SubmissionRecord, Transform};

use super::store::FieldStore;

/// Date format produced by HTML date inputs.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Assembly errors.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AssemblyError {
    #[error("Field '{field}' holds '{value}', expected a YYYY-MM-DD date")]
    InvalidDate { field: String, value: String },

    #[error("Mapping reads undeclared field '{0}'")]
    UndeclaredField(String),
}

pub type AssemblyResult<T> = Result<T, AssemblyError>;

/// Whole years between `birth` and `today`.
///
/// `today.year - birth.year`, minus one while `(month, day)` of `today` is
/// before that of `birth`.
///
/// No clamping: a birth date after `today` yields a negative age, and that
/// value is passed through to the record unchanged.
pub fn age_on(birth: NaiveDate, today: NaiveDate) -> i64 {
    let mut age = i64::from(today.year() - birth.year());
    if (today.month(), today.day()) < (birth.month(), birth.day()) {
        age -= 1;
    }
    age
}

/// Age from an optional `YYYY-MM-DD` string. Empty input yields 0.
pub fn age_from_text(field: &str, birth: &str, today: NaiveDate) -> AssemblyResult<i64> {
    let birth = birth.trim();
    if birth.is_empty() {
        return Ok(0);
    }

    let date = NaiveDate::parse_from_str(birth, DATE_FORMAT).map_err(|_| AssemblyError::InvalidDate {
        field: field.to_string(),
        value: birth.to_string(),
    })?;
    Ok(age_on(date, today))
}

/// Apply every mapping rule to the store.
///
/// Completeness is checked by the session before this runs; the assembler
/// itself only reports malformed values.
pub fn assemble(
    form: &str,
    store: &FieldStore,
    mapping: &SubmissionMapping,
    today: NaiveDate,
) -> AssemblyResult<SubmissionRecord> {
    let mut record = SubmissionRecord::new(form);
    for rule in mapping.rules() {
        let value = apply(&rule.transform, store, today)?;
        record.insert(rule.output.clone(), value);
    }
    Ok(record)
}

fn apply(transform: &Transform, store: &FieldStore, today: NaiveDate) -> AssemblyResult<RecordValue> {
    match transform {
        Transform::Copy { field } => Ok(match lookup(store, field)? {
            FieldValue::Text(s) => RecordValue::Text(s.clone()),
            FieldValue::Flag(b) => RecordValue::Flag(*b),
            FieldValue::Multi(set) => RecordValue::List(set.to_vec()),
        }),
        Transform::Join { field, delimiter } => Ok(RecordValue::Text(match lookup(store, field)? {
            FieldValue::Multi(set) => set.join(delimiter),
            FieldValue::Text(s) => s.clone(),
            FieldValue::Flag(b) => b.to_string(),
        })),
        Transform::AgeFromBirthDate { field } => {
            let birth = lookup(store, field)?.as_text().unwrap_or_default();
            Ok(RecordValue::Number(age_from_text(field, birth, today)?))
        }
        Transform::Collect { fields } => {
            let mut items = Vec::new();
            for field in fields {
                if let Some(text) = lookup(store, field)?.as_text() {
                    if !text.is_empty() {
                        items.push(text.to_string());
                    }
                }
            }
            Ok(RecordValue::List(items))
        }
    }
}

fn lookup<'a>(store: &'a FieldStore, field: &str) -> AssemblyResult<&'a FieldValue> {
    store
        .get(field)
        .ok_or_else(|| AssemblyError::UndeclaredField(field.to_string()))
}
