#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use chrono::NaiveDate;
use lemonn_core::{
    FieldKind, FixedClock, FormDefinition, FormHost, FormSchema, FormSession, SessionSnapshot,
    StepSpec, SubmissionMapping, SubmissionRecord, Transform,
};

/// Route engine logs to the test harness.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Step 0 requires `name`, step 1 requires `diagnosis` (multi).
pub fn two_step_definition() -> FormDefinition {
    let schema = FormSchema::new("Add a new patient")
        .step(
            StepSpec::new("Basic Information")
                .required("name", FieldKind::Text)
                .field("dateOfBirth", FieldKind::Text),
        )
        .step(StepSpec::new("Diagnosis & Clinical Profile").required("diagnosis", FieldKind::Multi));
    let mapping = SubmissionMapping::new()
        .with("name", Transform::copy("name"))
        .with("age", Transform::age_from_birth_date("dateOfBirth"))
        .with("diagnosis", Transform::join("diagnosis"));
    FormDefinition::new(schema, mapping)
}

/// Schema with `steps` steps, each requiring one text field `field{i}`.
pub fn linear_definition(steps: usize) -> FormDefinition {
    let mut schema = FormSchema::new("Linear");
    for i in 0..steps {
        schema = schema.step(StepSpec::new(format!("Step {}", i + 1)).required(format!("field{}", i), FieldKind::Text));
    }
    FormDefinition::new(schema, SubmissionMapping::new())
}

pub fn fixed_date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid test date")
}

/// Host that records every callback.
#[derive(Clone, Default)]
pub struct RecordingHost {
    pub changes: Arc<Mutex<Vec<SessionSnapshot>>>,
    pub saved: Arc<Mutex<Vec<SubmissionRecord>>>,
    pub cancels: Arc<Mutex<usize>>,
}

impl FormHost for RecordingHost {
    fn on_change(&self, snapshot: &SessionSnapshot) {
        self.changes.lock().unwrap().push(snapshot.clone());
    }

    fn on_save(&self, record: SubmissionRecord) {
        self.saved.lock().unwrap().push(record);
    }

    fn on_cancel(&self) {
        *self.cancels.lock().unwrap() += 1;
    }
}

pub fn open(definition: FormDefinition, host: RecordingHost, today: NaiveDate) -> FormSession {
    init_logging();
    FormSession::builder(definition)
        .host(host)
        .clock(FixedClock(today))
        .build()
        .expect("valid definition")
}
