//! In-memory patient roster.
//!
//! One explicit store, handed by reference to the screens that need it. A
//! writer borrows it mutably, so only one screen adds patients at a time.

use log::info;
use strsim::jaro_winkler;

use crate::models::{NewPatient, Patient};

/// Minimum Jaro-Winkler similarity for a typo-tolerant name match.
const FUZZY_THRESHOLD: f64 = 0.85;

/// Ordered list of patients.
#[derive(Debug, Clone, Default)]
pub struct PatientRoster {
    patients: Vec<Patient>,
}

/// Dashboard sample patients: `(name, age, diagnosis, upcoming session)`.
const SAMPLE_PATIENTS: &[(&str, i64, &str, Option<&str>)] = &[
    ("Yash Maheshwari", 12, "ADHD", Some("May 15th, 2025")),
    ("Rashmika Chauhan", 17, "ASD", Some("May 12th, 2025")),
    ("Manish Phulke", 10, "ASD", Some("May 20th, 2025")),
    ("Shweta Mishra", 16, "Speech Delay", None),
    ("Manisha Kamble", 19, "ASD", Some("May 18th, 2025")),
    ("Jagjeet Singh", 11, "ADHD", Some("May 22nd, 2025")),
];

impl PatientRoster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Roster pre-filled with the dashboard's sample patients.
    pub fn with_sample_patients() -> Self {
        let mut roster = Self::new();
        for &(name, age, diagnosis, session) in SAMPLE_PATIENTS {
            let mut new = NewPatient::new(name, age, diagnosis);
            if let Some(session) = session {
                new = new.with_upcoming_session(session);
            }
            roster.add(new);
        }
        roster
    }

    /// Add a patient, assigning a fresh ID.
    pub fn add(&mut self, new: NewPatient) -> &Patient {
        let patient = Patient::new(new);
        info!("roster: added patient {} ({})", patient.id, patient.name);
        self.patients.push(patient);
        &self.patients[self.patients.len() - 1]
    }

    pub fn get(&self, id: &str) -> Option<&Patient> {
        self.patients.iter().find(|p| p.id == id)
    }

    /// Patients in insertion order.
    pub fn list(&self) -> &[Patient] {
        &self.patients
    }

    pub fn len(&self) -> usize {
        self.patients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patients.is_empty()
    }

    /// Case-insensitive substring search over name and diagnosis.
    ///
    /// An empty term returns everyone. When no substring matches, names are
    /// compared by similarity so a misspelled search still finds the patient,
    /// best match first.
    pub fn search(&self, term: &str) -> Vec<&Patient> {
        let needle = term.trim().to_lowercase();
        if needle.is_empty() {
            return self.patients.iter().collect();
        }

        let hits: Vec<&Patient> = self
            .patients
            .iter()
            .filter(|p| {
                p.name.to_lowercase().contains(&needle) || p.diagnosis.to_lowercase().contains(&needle)
            })
            .collect();
        if !hits.is_empty() {
            return hits;
        }

        let mut scored: Vec<(f64, &Patient)> = self
            .patients
            .iter()
            .map(|p| (name_similarity(&p.name, &needle), p))
            .filter(|(score, _)| *score >= FUZZY_THRESHOLD)
            .collect();
        scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));
        scored.into_iter().map(|(_, p)| p).collect()
    }
}

/// Best similarity between the needle and the full name or any single word of it.
fn name_similarity(name: &str, needle: &str) -> f64 {
    let name = name.to_lowercase();
    std::iter::once(name.as_str())
        .chain(name.split_whitespace())
        .map(|part| jaro_winkler(part, needle))
        .fold(0.0, f64::max)
}
