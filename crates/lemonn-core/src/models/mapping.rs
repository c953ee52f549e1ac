//! Submission mapping: how field values become record outputs.

use serde::{Deserialize, Serialize};

use super::field::FieldKind;

/// Delimiter used when joining a multi field into one display string.
pub const DEFAULT_DELIMITER: &str = ", ";

fn default_delimiter() -> String {
    DEFAULT_DELIMITER.to_string()
}

/// Pure transform applied to one or more fields to produce an output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Transform {
    /// Value as-is (multi fields become a list)
    Copy { field: String },
    /// Multi field joined into a single string
    Join {
        field: String,
        #[serde(default = "default_delimiter")]
        delimiter: String,
    },
    /// Whole years elapsed since a `YYYY-MM-DD` text field
    AgeFromBirthDate { field: String },
    /// Non-empty text fields gathered into a list
    Collect { fields: Vec<String> },
}

impl Transform {
    pub fn copy(field: impl Into<String>) -> Self {
        Transform::Copy { field: field.into() }
    }

    pub fn join(field: impl Into<String>) -> Self {
        Transform::Join {
            field: field.into(),
            delimiter: default_delimiter(),
        }
    }

    pub fn age_from_birth_date(field: impl Into<String>) -> Self {
        Transform::AgeFromBirthDate { field: field.into() }
    }

    pub fn collect<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Transform::Collect {
            fields: fields.into_iter().map(Into::into).collect(),
        }
    }

    /// Field names this transform reads.
    pub fn sources(&self) -> Vec<&str> {
        match self {
            Transform::Copy { field }
            | Transform::Join { field, .. }
            | Transform::AgeFromBirthDate { field } => vec![field.as_str()],
            Transform::Collect { fields } => fields.iter().map(String::as_str).collect(),
        }
    }

    /// Field kind the transform needs from its sources, if restricted.
    pub fn required_kind(&self) -> Option<FieldKind> {
        match self {
            Transform::Copy { .. } => None,
            Transform::Join { .. } => Some(FieldKind::Multi),
            Transform::AgeFromBirthDate { .. } | Transform::Collect { .. } => Some(FieldKind::Text),
        }
    }

    /// Short name used in error messages.
    pub fn name(&self) -> &'static str {
        match self {
            Transform::Copy { .. } => "copy",
            Transform::Join { .. } => "join",
            Transform::AgeFromBirthDate { .. } => "ageFromBirthDate",
            Transform::Collect { .. } => "collect",
        }
    }
}

/// One output of the submission record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OutputRule {
    pub output: String,
    pub transform: Transform,
}

/// Ordered list of output rules.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct SubmissionMapping {
    rules: Vec<OutputRule>,
}

impl SubmissionMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style rule addition.
    pub fn with(mut self, output: impl Into<String>, transform: Transform) -> Self {
        self.rules.push(OutputRule {
            output: output.into(),
            transform,
        });
        self
    }

    pub fn rules(&self) -> &[OutputRule] {
        &self.rules
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
