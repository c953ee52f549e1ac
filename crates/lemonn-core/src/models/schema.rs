//! Form schemas and definitions.
//!
//! A [`FormDefinition`] is the configuration a host screen hands to the engine:
//! the ordered steps with their fields and required subsets, plus the mapping
//! used at submit time. Definitions are checked once when a session is built,
//! so kind mismatches between the mapping and the fields surface before any
//! user input is accepted.

use std::collections::{HashMap, HashSet};
use std::fmt;

use serde::de::{Deserializer, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::field::FieldKind;
use super::mapping::SubmissionMapping;

/// Schema errors.
#[derive(Error, Debug)]
pub enum SchemaError {
    #[error("Form '{0}' has no steps")]
    NoSteps(String),

    #[error("Field '{0}' is declared more than once")]
    DuplicateField(String),

    #[error("Step '{step}' requires undeclared field '{field}'")]
    RequiredNotDeclared { step: String, field: String },

    #[error("Output '{output}' reads undeclared field '{field}'")]
    UnknownSource { output: String, field: String },

    #[error("Output '{output}' applies {transform} to {kind} field '{field}'")]
    TransformKind {
        output: String,
        transform: &'static str,
        field: String,
        kind: FieldKind,
    },

    #[error("Output '{0}' is mapped more than once")]
    DuplicateOutput(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type SchemaResult<T> = Result<T, SchemaError>;

/// A named, typed field slot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: String,
    pub kind: FieldKind,
}

impl FieldSpec {
    pub fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }
}

/// One page of a multi-step form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StepSpec {
    /// Heading shown for the step
    #[serde(alias = "stepLabel")]
    pub label: String,
    /// Fields rendered on this step
    #[serde(default, alias = "fieldKinds", deserialize_with = "deserialize_fields")]
    pub fields: Vec<FieldSpec>,
    /// Names of fields that must be non-empty before leaving the step
    #[serde(default, alias = "requiredFieldNames")]
    pub required: Vec<String>,
}

/// Accepts either `[{"name", "kind"}, ...]` or a `{name: kind}` map.
/// Map entries keep document order.
fn deserialize_fields<'de, D>(deserializer: D) -> Result<Vec<FieldSpec>, D::Error>
where
    D: Deserializer<'de>,
{
    struct FieldsVisitor;

    impl<'de> Visitor<'de> for FieldsVisitor {
        type Value = Vec<FieldSpec>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a list of fields or a map of field name to kind")
        }

        fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
            let mut fields = Vec::new();
            while let Some(field) = seq.next_element::<FieldSpec>()? {
                fields.push(field);
            }
            Ok(fields)
        }

        fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
            let mut fields = Vec::new();
            while let Some((name, kind)) = map.next_entry::<String, FieldKind>()? {
                fields.push(FieldSpec { name, kind });
            }
            Ok(fields)
        }
    }

    deserializer.deserialize_any(FieldsVisitor)
}

impl StepSpec {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            fields: Vec::new(),
            required: Vec::new(),
        }
    }

    /// Add an optional field.
    pub fn field(mut self, name: impl Into<String>, kind: FieldKind) -> Self {
        self.fields.push(FieldSpec::new(name, kind));
        self
    }

    /// Add a required field.
    pub fn required(mut self, name: impl Into<String>, kind: FieldKind) -> Self {
        let name = name.into();
        self.required.push(name.clone());
        self.fields.push(FieldSpec::new(name, kind));
        self
    }
}

/// Ordered steps of a form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FormSchema {
    pub title: String,
    pub steps: Vec<StepSpec>,
}

impl FormSchema {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            steps: Vec::new(),
        }
    }

    pub fn step(mut self, step: StepSpec) -> Self {
        self.steps.push(step);
        self
    }

    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    /// All declared fields across every step, in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = &FieldSpec> {
        self.steps.iter().flat_map(|s| s.fields.iter())
    }

    /// Declared kind of a field.
    pub fn kind_of(&self, name: &str) -> Option<FieldKind> {
        self.fields().find(|f| f.name == name).map(|f| f.kind)
    }

    /// Check structural invariants: at least one step, unique field names,
    /// required names declared on their own step.
    pub fn validate(&self) -> SchemaResult<()> {
        if self.steps.is_empty() {
            return Err(SchemaError::NoSteps(self.title.clone()));
        }

        let mut seen = HashSet::new();
        for field in self.fields() {
            if !seen.insert(field.name.as_str()) {
                return Err(SchemaError::DuplicateField(field.name.clone()));
            }
        }

        for step in &self.steps {
            for name in &step.required {
                if !step.fields.iter().any(|f| &f.name == name) {
                    return Err(SchemaError::RequiredNotDeclared {
                        step: step.label.clone(),
                        field: name.clone(),
                    });
                }
            }
        }

        Ok(())
    }
}

/// Schema plus submission mapping.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FormDefinition {
    pub schema: FormSchema,
    #[serde(default)]
    pub mapping: SubmissionMapping,
}

impl FormDefinition {
    pub fn new(schema: FormSchema, mapping: SubmissionMapping) -> Self {
        Self { schema, mapping }
    }

    /// Parse and validate a definition from JSON.
    pub fn from_json(json: &str) -> SchemaResult<Self> {
        let definition: FormDefinition = serde_json::from_str(json)?;
        definition.validate()?;
        Ok(definition)
    }

    pub fn to_json(&self) -> SchemaResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validate the schema and check every mapping source against it.
    pub fn validate(&self) -> SchemaResult<()> {
        self.schema.validate()?;

        let kinds: HashMap<&str, FieldKind> = self
            .schema
            .fields()
            .map(|f| (f.name.as_str(), f.kind))
            .collect();

        let mut outputs = HashSet::new();
        for rule in self.mapping.rules() {
            if !outputs.insert(rule.output.as_str()) {
                return Err(SchemaError::DuplicateOutput(rule.output.clone()));
            }

            for source in rule.transform.sources() {
                let kind = kinds.get(source).copied().ok_or_else(|| SchemaError::UnknownSource {
                    output: rule.output.clone(),
                    field: source.to_string(),
                })?;

                if let Some(needed) = rule.transform.required_kind() {
                    if needed != kind {
                        return Err(SchemaError::TransformKind {
                            output: rule.output.clone(),
                            transform: rule.transform.name(),
                            field: source.to_string(),
                            kind,
                        });
                    }
                }
            }
        }

        Ok(())
    }
}
