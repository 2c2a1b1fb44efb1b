//! Read-only rendering of an accepted application.

use crate::cli::output;
use crate::domain::{PositionDetails, SubmittedApplication};

pub fn render(application: &SubmittedApplication) {
    output::section("Form Submitted Successfully");
    entry("Full Name", &application.full_name);
    entry("Email", &application.email);
    entry("Phone Number", &application.phone_number);

    match &application.details {
        PositionDetails::Unspecified => entry("Applying for Position", "Not specified"),
        PositionDetails::Developer { experience_years } => {
            entry("Applying for Position", "Developer");
            entry("Relevant Experience (years)", &format_years(*experience_years));
        }
        PositionDetails::Designer {
            experience_years,
            portfolio_url,
        } => {
            entry("Applying for Position", "Designer");
            entry("Relevant Experience (years)", &format_years(*experience_years));
            entry("Portfolio URL", portfolio_url);
        }
        PositionDetails::Manager { summary } => {
            entry("Applying for Position", "Manager");
            entry("Management Experience", summary);
        }
    }

    let skills = application
        .skills
        .iter()
        .map(|skill| skill.label())
        .collect::<Vec<_>>()
        .join(", ");
    entry("Additional Skills", &skills);
    entry(
        "Preferred Interview Time",
        &application.interview_time.format("%Y-%m-%d %H:%M").to_string(),
    );
    entry("Receipt", &application.id.to_string());
    entry(
        "Submitted At",
        &application.submitted_at.format("%Y-%m-%d %H:%M UTC").to_string(),
    );
}

fn entry(label: &str, value: &str) {
    println!("{label}: {value}");
}

fn format_years(value: f64) -> String {
    if value.fract().abs() < f64::EPSILON {
        format!("{value:.0}")
    } else {
        format!("{value:.1}")
    }
}
