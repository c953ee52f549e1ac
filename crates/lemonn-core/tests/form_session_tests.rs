//! End-to-end form session tests.

mod common;

use common::{fixed_date, open, two_step_definition, RecordingHost};
use lemonn_core::{Advance, Incomplete, RecordValue, SessionError, SessionState};

#[test]
fn test_two_step_intake_scenario() {
    let host = RecordingHost::default();
    let mut session = open(two_step_definition(), host.clone(), fixed_date(2025, 6, 1));

    // Empty name keeps us on step 0
    session.set_scalar("name", "").unwrap();
    let outcome = session.advance().unwrap();
    assert_eq!(
        outcome,
        Advance::Blocked {
            missing: vec!["name".to_string()]
        }
    );
    assert_eq!(session.step(), 0);

    session.set_scalar("name", "Aarav").unwrap();
    assert_eq!(session.advance().unwrap(), Advance::Moved { from: 0, to: 1 });

    // No diagnosis yet
    let err = session.assemble().unwrap_err();
    assert_eq!(
        err,
        SessionError::IncompleteSubmission(Incomplete::MissingFields(vec!["diagnosis".into()]))
    );

    session.toggle_multi("diagnosis", "Apraxia of Speech", true).unwrap();
    let record = session.assemble().unwrap();
    assert_eq!(
        record.get("diagnosis"),
        Some(&RecordValue::Text("Apraxia of Speech".into()))
    );
    assert_eq!(record.text("name"), Some("Aarav"));
    assert_eq!(record.number("age"), Some(0));

    // assemble() alone does not hand anything to the host
    assert!(host.saved.lock().unwrap().is_empty());
    assert_eq!(session.state(), SessionState::Active);
}

#[test]
fn test_submit_delivers_record_once() {
    let host = RecordingHost::default();
    let mut session = open(two_step_definition(), host.clone(), fixed_date(2025, 3, 14));

    session.set_scalar("name", "Meera").unwrap();
    session.set_scalar("dateOfBirth", "2020-03-15").unwrap();
    session.advance().unwrap();
    session.toggle_multi("diagnosis", "ADHD", true).unwrap();
    session.toggle_multi("diagnosis", "Stuttering", true).unwrap();

    let record = session.submit().unwrap();
    assert_eq!(record.number("age"), Some(4));
    assert_eq!(record.text("diagnosis"), Some("ADHD, Stuttering"));

    assert_eq!(session.submit().unwrap_err(), SessionError::Submitted);
    let saved = host.saved.lock().unwrap();
    assert_eq!(saved.len(), 1);
    assert_eq!(saved[0], record);
}

#[test]
fn test_cancel_at_each_step_discards() {
    for step in 0..2 {
        let host = RecordingHost::default();
        let mut session = open(two_step_definition(), host.clone(), fixed_date(2025, 6, 1));
        session.set_scalar("name", "Aarav").unwrap();
        if step == 1 {
            session.advance().unwrap();
        }

        session.cancel().unwrap();
        assert_eq!(session.state(), SessionState::Cancelled);
        assert_eq!(session.advance(), Err(SessionError::Discarded));
        assert_eq!(session.retreat(), Err(SessionError::Discarded));
        assert_eq!(session.assemble().unwrap_err(), SessionError::Discarded);
        assert_eq!(session.submit().unwrap_err(), SessionError::Discarded);
        assert_eq!(
            session.toggle_multi("diagnosis", "ADHD", true),
            Err(SessionError::Discarded)
        );

        assert_eq!(*host.cancels.lock().unwrap(), 1);
        assert!(host.saved.lock().unwrap().is_empty());
    }
}

#[test]
fn test_host_sees_missing_fields_after_each_mutation() {
    let host = RecordingHost::default();
    let mut session = open(two_step_definition(), host.clone(), fixed_date(2025, 6, 1));

    session.set_scalar("dateOfBirth", "2019-05-02").unwrap();
    session.set_scalar("name", "Aarav").unwrap();
    session.set_scalar("name", "").unwrap();

    let changes = host.changes.lock().unwrap();
    let missing: Vec<Vec<String>> = changes.iter().map(|c| c.missing.clone()).collect();
    assert_eq!(
        missing,
        vec![vec!["name".to_string()], vec![], vec!["name".to_string()]]
    );
    assert!(changes.iter().all(|c| c.step == 0 && c.step_count == 2));
    assert_eq!(changes[0].step_label, "Basic Information");
}

#[test]
fn test_invalid_birth_date_fails_assembly() {
    let mut session = open(two_step_definition(), RecordingHost::default(), fixed_date(2025, 6, 1));
    session.set_scalar("name", "Aarav").unwrap();
    session.set_scalar("dateOfBirth", "not a date").unwrap();
    session.advance().unwrap();
    session.toggle_multi("diagnosis", "ADHD", true).unwrap();

    assert!(matches!(
        session.submit(),
        Err(SessionError::Assembly(_))
    ));
    assert_eq!(session.state(), SessionState::Active);
}
