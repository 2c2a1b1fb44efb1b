use chrono::{DateTime, TimeZone, Utc};

use intake_core::core::time::Clock;
use intake_core::domain::{ApplicationDraft, Field, Skill};

/// Clock pinned to a known instant so validation stays deterministic.
#[allow(dead_code)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// The instant all fixed-clock tests treat as "now".
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2030, 5, 1, 12, 0, 0).unwrap()
}

/// Complete Manager application, one day ahead of [`fixed_now`].
#[allow(dead_code)]
pub fn manager_draft() -> ApplicationDraft {
    let mut draft = ApplicationDraft::new();
    draft.set_field(Field::FullName, "Jane Doe");
    draft.set_field(Field::Email, "j@x.com");
    draft.set_field(Field::PhoneNumber, "5551234");
    draft.set_field(Field::Position, "Manager");
    draft.set_field(Field::ManagementExperience, "Led a team of 5");
    draft.toggle_skill(Skill::Python, true);
    draft.set_field(Field::PreferredInterviewTime, "2030-05-02T09:00");
    draft
}

/// Complete Developer application, one day ahead of [`fixed_now`].
#[allow(dead_code)]
pub fn developer_draft() -> ApplicationDraft {
    let mut draft = ApplicationDraft::new();
    draft.set_field(Field::FullName, "Sam Park");
    draft.set_field(Field::Email, "sam@dev.io");
    draft.set_field(Field::PhoneNumber, "5559876");
    draft.set_field(Field::Position, "Developer");
    draft.set_field(Field::RelevantExperience, "5");
    draft.toggle_skill(Skill::React, true);
    draft.set_field(Field::PreferredInterviewTime, "2030-05-02T10:00");
    draft
}
