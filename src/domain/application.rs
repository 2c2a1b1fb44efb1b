use std::collections::BTreeSet;
use std::fmt;

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::position::Position;
use crate::domain::skill::Skill;

/// Identifies a form field. Doubles as the key of validation-error mappings.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    FullName,
    Email,
    PhoneNumber,
    Position,
    RelevantExperience,
    PortfolioUrl,
    ManagementExperience,
    AdditionalSkills,
    PreferredInterviewTime,
}

impl Field {
    /// Wire name matching the original form's field names.
    pub fn key(&self) -> &'static str {
        match self {
            Field::FullName => "fullName",
            Field::Email => "email",
            Field::PhoneNumber => "phoneNumber",
            Field::Position => "applyingForPosition",
            Field::RelevantExperience => "relevantExperience",
            Field::PortfolioUrl => "portfolioURL",
            Field::ManagementExperience => "managementExperience",
            Field::AdditionalSkills => "additionalSkills",
            Field::PreferredInterviewTime => "preferredInterviewTime",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Field::FullName => "Full Name",
            Field::Email => "Email",
            Field::PhoneNumber => "Phone Number",
            Field::Position => "Applying for Position",
            Field::RelevantExperience => "Relevant Experience (years)",
            Field::PortfolioUrl => "Portfolio URL",
            Field::ManagementExperience => "Management Experience",
            Field::AdditionalSkills => "Additional Skills",
            Field::PreferredInterviewTime => "Preferred Interview Time",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The in-progress application record.
///
/// Entry is permissive: every scalar field holds the raw text the applicant
/// typed, and nothing is rejected until a submit attempt runs the validator.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ApplicationDraft {
    pub full_name: String,
    pub email: String,
    pub phone_number: String,
    pub position: Option<Position>,
    pub relevant_experience: String,
    pub portfolio_url: String,
    pub management_experience: String,
    pub skills: BTreeSet<Skill>,
    pub preferred_interview_time: String,
}

impl ApplicationDraft {
    /// Creates an empty draft, mirroring the form's initial state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the named scalar field's value. Never fails and never
    /// validates. The position is parsed leniently; unrecognized text leaves
    /// it unset. The skills set is only reachable through [`toggle_skill`],
    /// so `AdditionalSkills` is ignored here.
    ///
    /// [`toggle_skill`]: ApplicationDraft::toggle_skill
    pub fn set_field(&mut self, field: Field, value: &str) {
        match field {
            Field::FullName => self.full_name = value.to_string(),
            Field::Email => self.email = value.to_string(),
            Field::PhoneNumber => self.phone_number = value.to_string(),
            Field::Position => self.position = Position::parse(value),
            Field::RelevantExperience => self.relevant_experience = value.to_string(),
            Field::PortfolioUrl => self.portfolio_url = value.to_string(),
            Field::ManagementExperience => self.management_experience = value.to_string(),
            Field::PreferredInterviewTime => self.preferred_interview_time = value.to_string(),
            Field::AdditionalSkills => {}
        }
    }

    /// Adds or removes a catalog skill. Idempotent in both directions.
    pub fn toggle_skill(&mut self, skill: Skill, present: bool) {
        if present {
            self.skills.insert(skill);
        } else {
            self.skills.remove(&skill);
        }
    }

    /// Parses the preferred interview time, accepting the `datetime-local`
    /// shape (`YYYY-MM-DDTHH:MM`) with optional seconds and either a `T` or a
    /// space separator.
    pub fn parsed_interview_time(&self) -> Option<NaiveDateTime> {
        const FORMATS: [&str; 4] = [
            "%Y-%m-%dT%H:%M",
            "%Y-%m-%dT%H:%M:%S",
            "%Y-%m-%d %H:%M",
            "%Y-%m-%d %H:%M:%S",
        ];
        let raw = self.preferred_interview_time.trim();
        FORMATS
            .iter()
            .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
    }
}

/// Position-dependent answers, modeled as a tagged union so an irrelevant
/// field cannot exist on a submitted record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum PositionDetails {
    Unspecified,
    Developer {
        experience_years: f64,
    },
    Designer {
        experience_years: f64,
        portfolio_url: String,
    },
    Manager {
        summary: String,
    },
}

impl PositionDetails {
    pub fn position(&self) -> Option<Position> {
        match self {
            PositionDetails::Unspecified => None,
            PositionDetails::Developer { .. } => Some(Position::Developer),
            PositionDetails::Designer { .. } => Some(Position::Designer),
            PositionDetails::Manager { .. } => Some(Position::Manager),
        }
    }

    fn from_draft(draft: &ApplicationDraft) -> Self {
        let experience_years = draft.relevant_experience.trim().parse::<f64>().unwrap_or(0.0);
        match draft.position {
            None => PositionDetails::Unspecified,
            Some(Position::Developer) => PositionDetails::Developer { experience_years },
            Some(Position::Designer) => PositionDetails::Designer {
                experience_years,
                portfolio_url: draft.portfolio_url.trim().to_string(),
            },
            Some(Position::Manager) => PositionDetails::Manager {
                summary: draft.management_experience.trim().to_string(),
            },
        }
    }
}

/// The frozen, read-only record produced when a draft passes validation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SubmittedApplication {
    pub id: Uuid,
    pub full_name: String,
    pub email: String,
    pub phone_number: String,
    pub details: PositionDetails,
    pub skills: BTreeSet<Skill>,
    pub interview_time: NaiveDateTime,
    pub submitted_at: DateTime<Utc>,
}

impl SubmittedApplication {
    /// Freezes a draft that already passed validation.
    ///
    /// Lenient fallbacks keep this total; callers run the validator first, so
    /// the fallbacks are unreachable on the accepted path.
    pub fn from_valid_draft(draft: &ApplicationDraft, submitted_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            full_name: draft.full_name.trim().to_string(),
            email: draft.email.trim().to_string(),
            phone_number: draft.phone_number.trim().to_string(),
            details: PositionDetails::from_draft(draft),
            skills: draft.skills.clone(),
            interview_time: draft
                .parsed_interview_time()
                .unwrap_or_else(|| submitted_at.naive_utc()),
            submitted_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_keys_match_the_original_form_names() {
        assert_eq!(Field::FullName.key(), "fullName");
        assert_eq!(Field::Position.key(), "applyingForPosition");
        assert_eq!(Field::PortfolioUrl.key(), "portfolioURL");
        assert_eq!(Field::PreferredInterviewTime.key(), "preferredInterviewTime");
    }

    #[test]
    fn set_field_replaces_scalars_without_validation() {
        let mut draft = ApplicationDraft::new();
        draft.set_field(Field::FullName, "Jane Doe");
        draft.set_field(Field::Email, "not-an-email");
        assert_eq!(draft.full_name, "Jane Doe");
        assert_eq!(draft.email, "not-an-email");
    }

    #[test]
    fn unrecognized_position_text_leaves_the_discriminant_unset() {
        let mut draft = ApplicationDraft::new();
        draft.set_field(Field::Position, "Developer");
        assert_eq!(draft.position, Some(Position::Developer));
        draft.set_field(Field::Position, "Astronaut");
        assert_eq!(draft.position, None);
    }

    #[test]
    fn toggle_skill_round_trips() {
        let mut draft = ApplicationDraft::new();
        let before = draft.skills.clone();
        draft.toggle_skill(Skill::React, true);
        draft.toggle_skill(Skill::React, true);
        assert_eq!(draft.skills.len(), 1);
        draft.toggle_skill(Skill::React, false);
        assert_eq!(draft.skills, before);
    }

    #[test]
    fn interview_time_accepts_datetime_local_shapes() {
        let mut draft = ApplicationDraft::new();
        draft.set_field(Field::PreferredInterviewTime, "2031-06-01T09:30");
        assert!(draft.parsed_interview_time().is_some());
        draft.set_field(Field::PreferredInterviewTime, "2031-06-01 09:30:15");
        assert!(draft.parsed_interview_time().is_some());
        draft.set_field(Field::PreferredInterviewTime, "soon");
        assert!(draft.parsed_interview_time().is_none());
    }
}
