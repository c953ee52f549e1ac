//! Built-in clinic form definitions.
//!
//! Each definition pairs the step layout the clinic screens render with the
//! mapping that turns a finished session into a submission record.

use lemonn_core::models::{FieldKind, FormDefinition, FormSchema, StepSpec, SubmissionMapping, Transform};
use serde::{Deserialize, Serialize};

/// The forms the clinic screens open.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum FormKind {
    PatientIntake,
    ActivityRequest,
    IepPlan,
}

impl FormKind {
    pub const ALL: [FormKind; 3] = [FormKind::PatientIntake, FormKind::ActivityRequest, FormKind::IepPlan];

    /// Look up a form by its camelCase name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }

    pub fn name(self) -> &'static str {
        match self {
            FormKind::PatientIntake => "patientIntake",
            FormKind::ActivityRequest => "activityRequest",
            FormKind::IepPlan => "iepPlan",
        }
    }
}

/// Definition for a form kind.
pub fn definition(kind: FormKind) -> FormDefinition {
    match kind {
        FormKind::PatientIntake => patient_intake(),
        FormKind::ActivityRequest => activity_request(),
        FormKind::IepPlan => iep_plan(),
    }
}

/// Seven-step patient intake. Only the name and birth date are required.
pub fn patient_intake() -> FormDefinition {
    let schema = FormSchema::new("Add a new patient")
        .step(
            StepSpec::new("Basic Information")
                .required("fullName", FieldKind::Text)
                .field("preferredName", FieldKind::Text)
                .required("dateOfBirth", FieldKind::Text)
                .field("gender", FieldKind::Text),
        )
        .step(
            StepSpec::new("Diagnosis & Clinical Profile")
                .field("primaryDiagnosis", FieldKind::Multi)
                .field("severityLevel", FieldKind::Text),
        )
        .step(
            StepSpec::new("Communication Profile")
                .field("primaryCommunicationMode", FieldKind::Text)
                .field("homeLanguages", FieldKind::Multi)
                .field("preferredLanguage", FieldKind::Text),
        )
        .step(
            StepSpec::new("Behavior & Attention")
                .field("attentionSpan", FieldKind::Text)
                .field("followingInstructions", FieldKind::Text)
                .field("behavioralConsiderations", FieldKind::Multi),
        )
        .step(
            StepSpec::new("Sensory Profile")
                .field("showSensoryProfile", FieldKind::Flag)
                .field("visual", FieldKind::Text)
                .field("auditory", FieldKind::Text)
                .field("tactile", FieldKind::Text)
                .field("movement", FieldKind::Text)
                .field("tasteSmell", FieldKind::Text),
        )
        .step(
            StepSpec::new("Interests & Learning Style")
                .field("favoriteTopics", FieldKind::Multi)
                .field("learningStylePreference", FieldKind::Multi),
        )
        .step(StepSpec::new("Therapy Goals").field("therapyGoals", FieldKind::Multi));

    let mapping = SubmissionMapping::new()
        .with("name", Transform::copy("fullName"))
        .with("age", Transform::age_from_birth_date("dateOfBirth"))
        .with("diagnosis", Transform::join("primaryDiagnosis"))
        .with("therapyGoals", Transform::copy("therapyGoals"));

    FormDefinition::new(schema, mapping)
}

/// Activity generation request. Every field is required.
pub fn activity_request() -> FormDefinition {
    let schema = FormSchema::new("Generate Activities")
        .step(
            StepSpec::new("Session Context")
                .required("therapyGoalTypes", FieldKind::Multi)
                .required("smartGoal", FieldKind::Text)
                .required("therapyPhase", FieldKind::Text)
                .required("sessionLength", FieldKind::Text)
                .required("activityTypes", FieldKind::Multi)
                .required("currentInterests", FieldKind::Text)
                .required("attentionSpan", FieldKind::Text)
                .required("sensoryPreferences", FieldKind::Multi),
        )
        .step(
            StepSpec::new("Engagement Feedback")
                .required("lastActivityResponse", FieldKind::Text)
                .required("challengingBehaviors", FieldKind::Multi),
        );

    let mut mapping = SubmissionMapping::new();
    for field in schema.fields() {
        mapping = mapping.with(field.name.clone(), Transform::copy(field.name.clone()));
    }

    FormDefinition::new(schema, mapping)
}

/// Three-step IEP creation.
pub fn iep_plan() -> FormDefinition {
    let schema = FormSchema::new("Create IEP")
        .step(
            StepSpec::new("Communication Profile")
                .field("communicationStyles", FieldKind::Multi)
                .field("communicateNeedsEffectively", FieldKind::Text)
                .field("initiateInteraction", FieldKind::Text)
                .field("understandSimpleInstructions", FieldKind::Text)
                .field("followTwoStepDirections", FieldKind::Text)
                .field("concerns", FieldKind::Multi),
        )
        .step(
            StepSpec::new("IEP Planning & Activity Setup")
                .required("iepDuration", FieldKind::Text)
                .required("sessionsPerWeek", FieldKind::Text)
                .required("sessionLength", FieldKind::Text)
                .field("sessionSettings", FieldKind::Multi)
                .field("goalDomains", FieldKind::Multi)
                .required("familyPriority1", FieldKind::Text)
                .required("familyPriority2", FieldKind::Text)
                .required("familyPriority3", FieldKind::Text),
        )
        .step(
            StepSpec::new("Daily Routines & Activities")
                .required("morningRoutine", FieldKind::Text)
                .required("afternoonRoutine", FieldKind::Text)
                .required("eveningRoutine", FieldKind::Text)
                .field("preferredActivityTypes", FieldKind::Multi)
                .field("availableMaterials", FieldKind::Multi)
                .field("otherMaterials", FieldKind::Text),
        );

    let mapping = SubmissionMapping::new()
        .with("communicationStyles", Transform::copy("communicationStyles"))
        .with("concerns", Transform::copy("concerns"))
        .with("iepDuration", Transform::copy("iepDuration"))
        .with("sessionsPerWeek", Transform::copy("sessionsPerWeek"))
        .with("sessionLength", Transform::copy("sessionLength"))
        .with("settings", Transform::join("sessionSettings"))
        .with("goalDomains", Transform::copy("goalDomains"))
        .with(
            "familyPriorities",
            Transform::collect(["familyPriority1", "familyPriority2", "familyPriority3"]),
        )
        .with(
            "routines",
            Transform::collect(["morningRoutine", "afternoonRoutine", "eveningRoutine"]),
        )
        .with("preferredActivityTypes", Transform::copy("preferredActivityTypes"))
        .with("availableMaterials", Transform::copy("availableMaterials"))
        .with("otherMaterials", Transform::copy("otherMaterials"));

    FormDefinition::new(schema, mapping)
}
