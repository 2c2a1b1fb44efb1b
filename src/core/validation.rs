//! Submit-time validation for application drafts.
//!
//! Rules are evaluated independently and accumulated; a failing field never
//! stops the remaining fields from being checked. The one exception is within
//! the experience field itself, where an empty value reports "required" and
//! skips that field's numeric checks.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use crate::domain::{ApplicationDraft, Field};

/// Field-name-keyed collection of human-readable messages produced by one
/// validation pass. Empty means the draft is valid.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationReport {
    entries: BTreeMap<Field, String>,
}

impl ValidationReport {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Message recorded for the field, if any.
    pub fn message(&self, field: Field) -> Option<&str> {
        self.entries.get(&field).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.entries.iter().map(|(field, msg)| (*field, msg.as_str()))
    }

    /// Fields that currently carry an error, in stable order.
    pub fn fields(&self) -> Vec<Field> {
        self.entries.keys().copied().collect()
    }
}

/// Validates a draft against the submission rules.
///
/// Pure: the caller supplies `now`, and identical inputs always yield an
/// identical report. Unparseable input becomes a report entry, never a fault.
pub fn validate(draft: &ApplicationDraft, now: DateTime<Utc>) -> ValidationReport {
    let mut entries = BTreeMap::new();

    if draft.full_name.trim().is_empty() {
        entries.insert(Field::FullName, "Full Name is required".to_string());
    }

    let email = draft.email.trim();
    if email.is_empty() {
        entries.insert(Field::Email, "Email is required".to_string());
    } else if !looks_like_email(email) {
        entries.insert(Field::Email, "Email is invalid".to_string());
    }

    let phone = draft.phone_number.trim();
    if phone.is_empty() {
        entries.insert(Field::PhoneNumber, "Phone Number is required".to_string());
    } else if parse_number(phone).is_none() {
        entries.insert(
            Field::PhoneNumber,
            "Phone Number must be a valid number".to_string(),
        );
    }

    if let Some(position) = draft.position {
        if position.requires_experience() {
            // Empty wins over the numeric checks for this field only.
            let raw = draft.relevant_experience.trim();
            if raw.is_empty() {
                entries.insert(
                    Field::RelevantExperience,
                    "Relevant Experience is required".to_string(),
                );
            } else {
                match parse_number(raw) {
                    None => {
                        entries.insert(
                            Field::RelevantExperience,
                            "Relevant Experience must be a number".to_string(),
                        );
                    }
                    Some(years) if years <= 0.0 => {
                        entries.insert(
                            Field::RelevantExperience,
                            "Relevant Experience must be greater than 0".to_string(),
                        );
                    }
                    Some(_) => {}
                }
            }
        }

        if position.requires_portfolio() {
            if draft.portfolio_url.trim().is_empty() {
                entries.insert(
                    Field::PortfolioUrl,
                    "Portfolio URL is required".to_string(),
                );
            } else if !looks_like_url(&draft.portfolio_url) {
                entries.insert(
                    Field::PortfolioUrl,
                    "Portfolio URL must be a valid URL".to_string(),
                );
            }
        }

        if position.requires_management_summary() && draft.management_experience.trim().is_empty() {
            entries.insert(
                Field::ManagementExperience,
                "Management Experience is required".to_string(),
            );
        }
    }

    if draft.skills.is_empty() {
        entries.insert(
            Field::AdditionalSkills,
            "Select at least one skill".to_string(),
        );
    }

    if draft.preferred_interview_time.trim().is_empty() {
        entries.insert(
            Field::PreferredInterviewTime,
            "Preferred Interview Time is required".to_string(),
        );
    } else {
        // Strictly future; an interview scheduled for "now" is too late.
        let is_future = draft
            .parsed_interview_time()
            .map(|time| time > now.naive_utc())
            .unwrap_or(false);
        if !is_future {
            entries.insert(
                Field::PreferredInterviewTime,
                "Preferred Interview Time must be a future date/time".to_string(),
            );
        }
    }

    ValidationReport { entries }
}

fn parse_number(input: &str) -> Option<f64> {
    input.trim().parse::<f64>().ok()
}

/// True when the text contains a `local@domain.tld` shaped substring: a
/// non-whitespace char before `@`, then a non-whitespace run, a dot, and at
/// least one more non-whitespace char.
fn looks_like_email(input: &str) -> bool {
    let chars: Vec<char> = input.chars().collect();
    for (at, ch) in chars.iter().enumerate() {
        if *ch != '@' {
            continue;
        }
        if at == 0 || chars[at - 1].is_whitespace() {
            continue;
        }
        let mut run = 0usize;
        for cursor in at + 1..chars.len() {
            let current = chars[cursor];
            if current.is_whitespace() {
                break;
            }
            if current == '.'
                && run >= 1
                && chars
                    .get(cursor + 1)
                    .map(|next| !next.is_whitespace())
                    .unwrap_or(false)
            {
                return true;
            }
            run += 1;
        }
    }
    false
}

/// True when the whole value is `http://` or `https://` followed by at least
/// one character, with no whitespace anywhere after the scheme.
fn looks_like_url(input: &str) -> bool {
    let rest = input
        .strip_prefix("https://")
        .or_else(|| input.strip_prefix("http://"));
    match rest {
        Some(rest) => !rest.is_empty() && !rest.chars().any(char::is_whitespace),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_shape_check_matches_the_form_pattern() {
        assert!(looks_like_email("j@x.com"));
        assert!(looks_like_email("first.last@sub.domain.org"));
        // An embedded valid address satisfies the unanchored pattern.
        assert!(looks_like_email("reach me at j@x.com today"));
        assert!(!looks_like_email("j@x"));
        assert!(!looks_like_email("@x.com"));
        assert!(!looks_like_email("j@.com"));
        assert!(!looks_like_email("j@x. com"));
        assert!(!looks_like_email("plainaddress"));
    }

    #[test]
    fn url_shape_check_is_anchored_and_rejects_whitespace() {
        assert!(looks_like_url("http://x.com"));
        assert!(looks_like_url("https://portfolio.example/work"));
        assert!(!looks_like_url("ftp://x"));
        assert!(!looks_like_url("http://"));
        assert!(!looks_like_url("http://two words"));
        assert!(!looks_like_url(" http://x.com"));
    }

    #[test]
    fn phone_accepts_generic_numeric_strings() {
        assert!(parse_number("5551234").is_some());
        assert!(parse_number("+15551234").is_some());
        assert!(parse_number("555.1234").is_some());
        assert!(parse_number("555-1234").is_none());
        assert!(parse_number("call me").is_none());
    }
}
