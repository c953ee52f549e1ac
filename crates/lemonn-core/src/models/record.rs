//! Submission records handed back to the host screen.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One assembled output value.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum RecordValue {
    Text(String),
    Flag(bool),
    Number(i64),
    List(Vec<String>),
}

/// The finished, validated output of a form session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SubmissionRecord {
    /// Title of the form that produced this record
    pub form: String,
    /// Output values keyed by output name
    pub fields: BTreeMap<String, RecordValue>,
}

impl SubmissionRecord {
    pub fn new(form: impl Into<String>) -> Self {
        Self {
            form: form.into(),
            fields: BTreeMap::new(),
        }
    }

    pub fn insert(&mut self, output: impl Into<String>, value: RecordValue) {
        self.fields.insert(output.into(), value);
    }

    pub fn get(&self, output: &str) -> Option<&RecordValue> {
        self.fields.get(output)
    }

    pub fn text(&self, output: &str) -> Option<&str> {
        match self.fields.get(output) {
            Some(RecordValue::Text(s)) => Some(s),
            _ => None,
        }
    }

    pub fn number(&self, output: &str) -> Option<i64> {
        match self.fields.get(output) {
            Some(RecordValue::Number(n)) => Some(*n),
            _ => None,
        }
    }

    pub fn flag(&self, output: &str) -> Option<bool> {
        match self.fields.get(output) {
            Some(RecordValue::Flag(b)) => Some(*b),
            _ => None,
        }
    }

    pub fn list(&self, output: &str) -> Option<&[String]> {
        match self.fields.get(output) {
            Some(RecordValue::List(items)) => Some(items),
            _ => None,
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typed_accessors() {
        let mut record = SubmissionRecord::new("Add a new patient");
        record.insert("name", RecordValue::Text("Aarav".into()));
        record.insert("age", RecordValue::Number(5));
        record.insert("goals", RecordValue::List(vec!["Turn-taking".into()]));

        assert_eq!(record.text("name"), Some("Aarav"));
        assert_eq!(record.number("age"), Some(5));
        assert_eq!(record.list("goals").map(<[String]>::len), Some(1));
        assert_eq!(record.text("age"), None);
        assert_eq!(record.flag("name"), None);
    }

    #[test]
    fn test_json_is_flat() {
        let mut record = SubmissionRecord::new("Intake");
        record.insert("age", RecordValue::Number(4));
        record.insert("name", RecordValue::Text("Meera".into()));

        let json = record.to_json().unwrap();
        assert_eq!(json, r#"{"form":"Intake","fields":{"age":4,"name":"Meera"}}"#);
    }
}
