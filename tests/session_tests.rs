mod common;

use chrono::NaiveDate;
use common::{fixed_now, manager_draft, FixedClock};
use intake_core::core::session::{IntakeSession, SessionState};
use intake_core::domain::{Field, PositionDetails, Skill};

#[test]
fn manager_application_submits_end_to_end() {
    let mut session = IntakeSession::with_draft(FixedClock(fixed_now()), manager_draft());

    let record = session.submit().expect("expected a clean submit").clone();
    assert_eq!(session.state(), SessionState::Submitted);
    assert_eq!(record.full_name, "Jane Doe");
    assert_eq!(record.email, "j@x.com");
    assert_eq!(record.phone_number, "5551234");
    assert_eq!(
        record.details,
        PositionDetails::Manager {
            summary: "Led a team of 5".into()
        }
    );
    assert_eq!(record.skills.len(), 1);
    assert!(record.skills.contains(&Skill::Python));
    assert_eq!(
        record.interview_time.date(),
        NaiveDate::from_ymd_opt(2030, 5, 2).unwrap()
    );
    assert_eq!(record.submitted_at, fixed_now());
}

#[test]
fn rejected_submit_self_loops_until_the_draft_is_corrected() {
    let mut draft = manager_draft();
    draft.set_field(Field::Email, "not-an-email");
    let mut session = IntakeSession::with_draft(FixedClock(fixed_now()), draft);

    assert!(session.submit().is_err());
    assert_eq!(session.state(), SessionState::Editing);
    assert_eq!(session.errors().message(Field::Email), Some("Email is invalid"));

    // Correct through the session's own mutators and resubmit.
    session.set_field(Field::Email, "jane@corp.example");
    assert!(session.submit().is_ok());
    assert_eq!(session.state(), SessionState::Submitted);
    assert!(session.errors().is_empty());
}

#[test]
fn submitted_state_is_terminal_and_frozen() {
    let mut session = IntakeSession::with_draft(FixedClock(fixed_now()), manager_draft());
    let first_id = session.submit().expect("clean submit").id;

    session.set_field(Field::FullName, "Impostor");
    session.toggle_skill(Skill::JavaScript, true);
    assert_eq!(session.draft().full_name, "Jane Doe");
    assert!(!session.draft().skills.contains(&Skill::JavaScript));

    // Re-submitting returns the same frozen record.
    let second_id = session.submit().expect("still submitted").id;
    assert_eq!(first_id, second_id);
}

#[test]
fn developer_submission_carries_the_typed_experience() {
    let mut session = IntakeSession::with_draft(FixedClock(fixed_now()), common::developer_draft());
    let record = session.submit().expect("clean submit").clone();
    assert_eq!(
        record.details,
        PositionDetails::Developer {
            experience_years: 5.0
        }
    );
}

#[test]
fn unspecified_position_freezes_without_details() {
    let mut draft = manager_draft();
    draft.set_field(Field::Position, "");
    draft.set_field(Field::ManagementExperience, "");
    let mut session = IntakeSession::with_draft(FixedClock(fixed_now()), draft);

    let record = session.submit().expect("clean submit").clone();
    assert_eq!(record.details, PositionDetails::Unspecified);
}
