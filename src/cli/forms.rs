//! Interactive wizard for the job-application form.
//!
//! Entry is permissive: prompts accept anything, including empty values, and
//! the draft is only validated when the applicant submits. Each validation
//! error is shown next to its field label and just the offending fields are
//! re-prompted, with current values kept as defaults, before the next
//! attempt.

use crate::cli::{io, output};
use crate::core::session::IntakeSession;
use crate::core::time::Clock;
use crate::domain::{ApplicationDraft, Field, Position, Skill};
use crate::errors::IntakeError;

const POSITION_UNSET_LABEL: &str = "(not selected)";

/// High-level result of a wizard run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormResult {
    /// The session accepted a submission; the frozen record is on the session.
    Completed,
    Cancelled,
}

enum PromptFlow {
    Continue,
    Cancel,
}

/// Runs the full wizard against the session: one pass over every visible
/// field, then submit attempts with error-driven re-prompts until the draft
/// is accepted or the applicant cancels.
pub fn run_wizard<C: Clock>(session: &mut IntakeSession<C>) -> Result<FormResult, IntakeError> {
    output::section("Job Application Form");
    output::info("Answers are collected first and checked when you submit.");

    for field in [Field::FullName, Field::Email, Field::PhoneNumber, Field::Position] {
        if let PromptFlow::Cancel = prompt_field(session, field)? {
            return Ok(FormResult::Cancelled);
        }
    }

    // Conditional visibility: only the fields the chosen position requires.
    for field in position_fields(session.draft().position) {
        if let PromptFlow::Cancel = prompt_field(session, field)? {
            return Ok(FormResult::Cancelled);
        }
    }

    for field in [Field::AdditionalSkills, Field::PreferredInterviewTime] {
        if let PromptFlow::Cancel = prompt_field(session, field)? {
            return Ok(FormResult::Cancelled);
        }
    }

    loop {
        let errored: Vec<Field> = match session.submit() {
            Ok(_) => {
                output::success("Form submitted successfully.");
                return Ok(FormResult::Completed);
            }
            Err(report) => {
                output::warning(format!("{} field(s) need attention:", report.len()));
                for (field, message) in report.iter() {
                    output::error(format!("{}: {}", field.label(), message));
                }
                report.fields()
            }
        };

        output::info("Update the highlighted fields to try again.");
        for field in errored {
            if let PromptFlow::Cancel = prompt_field(session, field)? {
                return Ok(FormResult::Cancelled);
            }
        }
    }
}

/// Fields required by the chosen position, in form order.
fn position_fields(position: Option<Position>) -> Vec<Field> {
    let Some(position) = position else {
        return Vec::new();
    };
    let mut fields = Vec::new();
    if position.requires_experience() {
        fields.push(Field::RelevantExperience);
    }
    if position.requires_portfolio() {
        fields.push(Field::PortfolioUrl);
    }
    if position.requires_management_summary() {
        fields.push(Field::ManagementExperience);
    }
    fields
}

fn prompt_field<C: Clock>(
    session: &mut IntakeSession<C>,
    field: Field,
) -> Result<PromptFlow, IntakeError> {
    match field {
        Field::Position => {
            let mut options: Vec<&str> = vec![POSITION_UNSET_LABEL];
            options.extend(Position::ALL.iter().map(Position::label));
            let default = match session.draft().position {
                Some(position) => position as usize + 1,
                None => 0,
            };
            match io::select(field.label(), &options, default)? {
                Some(index) => {
                    session.set_field(Field::Position, options[index]);
                    Ok(PromptFlow::Continue)
                }
                None => Ok(PromptFlow::Cancel),
            }
        }
        Field::AdditionalSkills => {
            let labels: Vec<&str> = Skill::CATALOG.iter().map(Skill::label).collect();
            let preselected: Vec<bool> = Skill::CATALOG
                .iter()
                .map(|skill| session.draft().skills.contains(skill))
                .collect();
            match io::multi_select(field.label(), &labels, &preselected)? {
                Some(chosen) => {
                    for (index, skill) in Skill::CATALOG.iter().enumerate() {
                        session.toggle_skill(*skill, chosen.contains(&index));
                    }
                    Ok(PromptFlow::Continue)
                }
                None => Ok(PromptFlow::Cancel),
            }
        }
        _ => {
            let current = current_text(session.draft(), field).to_string();
            let default = if current.trim().is_empty() {
                None
            } else {
                Some(current.as_str())
            };
            let value = io::text_input(&prompt_label(field), default)?;
            session.set_field(field, &value);
            Ok(PromptFlow::Continue)
        }
    }
}

fn prompt_label(field: Field) -> String {
    match field {
        Field::PreferredInterviewTime => format!("{} (YYYY-MM-DDTHH:MM)", field.label()),
        _ => field.label().to_string(),
    }
}

fn current_text(draft: &ApplicationDraft, field: Field) -> &str {
    match field {
        Field::FullName => &draft.full_name,
        Field::Email => &draft.email,
        Field::PhoneNumber => &draft.phone_number,
        Field::RelevantExperience => &draft.relevant_experience,
        Field::PortfolioUrl => &draft.portfolio_url,
        Field::ManagementExperience => &draft.management_experience,
        Field::PreferredInterviewTime => &draft.preferred_interview_time,
        Field::Position | Field::AdditionalSkills => "",
    }
}
