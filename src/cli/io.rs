//! Prompt wrappers shared by the wizard.
//!
//! Every prompt first consults [`crate::cli::test_mode`]; scripted answers
//! bypass the terminal entirely so the full flow can run under test runners.

use dialoguer::{theme::ColorfulTheme, Input, MultiSelect, Select};

use crate::cli::test_mode::{self, ScriptedAnswer};
use crate::errors::IntakeError;

/// Prompts for free-form text. Empty input is accepted; validation happens at
/// submit time, not here.
pub fn text_input(label: &str, default: Option<&str>) -> Result<String, IntakeError> {
    if let Some(scripted) = test_mode::next_input(label) {
        return match scripted {
            ScriptedAnswer::Value(value) => Ok(value),
            ScriptedAnswer::Exhausted => Err(IntakeError::ScriptedInputExhausted),
        };
    }

    let theme = ColorfulTheme::default();
    let mut prompt = Input::<String>::with_theme(&theme)
        .with_prompt(label)
        .allow_empty(true);
    if let Some(value) = default {
        prompt = prompt.default(value.to_string()).show_default(true);
    }
    Ok(prompt.interact_text()?)
}

/// Prompts for a single choice. Returns `None` when the applicant escapes out
/// of the menu, which cancels the wizard.
pub fn select(label: &str, options: &[&str], default: usize) -> Result<Option<usize>, IntakeError> {
    if let Some(scripted) = test_mode::next_input(label) {
        return match scripted {
            ScriptedAnswer::Value(value) => Ok(Some(resolve_option(&value, options, default))),
            ScriptedAnswer::Exhausted => Err(IntakeError::ScriptedInputExhausted),
        };
    }

    let theme = ColorfulTheme::default();
    let chosen = Select::with_theme(&theme)
        .with_prompt(label)
        .items(options)
        .default(default)
        .interact_opt()?;
    Ok(chosen)
}

/// Prompts for any number of choices. Returns `None` on escape.
pub fn multi_select(
    label: &str,
    options: &[&str],
    preselected: &[bool],
) -> Result<Option<Vec<usize>>, IntakeError> {
    if let Some(scripted) = test_mode::next_input(label) {
        return match scripted {
            ScriptedAnswer::Value(value) => Ok(Some(resolve_options(&value, options))),
            ScriptedAnswer::Exhausted => Err(IntakeError::ScriptedInputExhausted),
        };
    }

    let theme = ColorfulTheme::default();
    let chosen = MultiSelect::with_theme(&theme)
        .with_prompt(label)
        .items(options)
        .defaults(preselected)
        .interact_opt()?;
    Ok(chosen)
}

/// Maps a scripted answer to an option index by label (case-insensitive) or
/// zero-based position; anything else keeps the default.
fn resolve_option(value: &str, options: &[&str], default: usize) -> usize {
    let trimmed = value.trim();
    if let Some(index) = options
        .iter()
        .position(|option| option.eq_ignore_ascii_case(trimmed))
    {
        return index;
    }
    match trimmed.parse::<usize>() {
        Ok(index) if index < options.len() => index,
        _ => default,
    }
}

/// Maps a comma-separated scripted answer to option indexes; unknown entries
/// are ignored so scripts stay forgiving.
fn resolve_options(value: &str, options: &[&str]) -> Vec<usize> {
    let trimmed = value.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("none") {
        return Vec::new();
    }
    let mut chosen = Vec::new();
    for entry in trimmed.split(',') {
        let index = resolve_entry(entry, options);
        if let Some(index) = index {
            if !chosen.contains(&index) {
                chosen.push(index);
            }
        }
    }
    chosen
}

fn resolve_entry(entry: &str, options: &[&str]) -> Option<usize> {
    let trimmed = entry.trim();
    options
        .iter()
        .position(|option| option.eq_ignore_ascii_case(trimmed))
        .or_else(|| match trimmed.parse::<usize>() {
            Ok(index) if index < options.len() => Some(index),
            _ => None,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scripted_choice_resolution_accepts_labels_and_indexes() {
        let options = ["(not selected)", "Developer", "Designer", "Manager"];
        assert_eq!(resolve_option("manager", &options, 0), 3);
        assert_eq!(resolve_option("2", &options, 0), 2);
        assert_eq!(resolve_option("astronaut", &options, 0), 0);
    }

    #[test]
    fn scripted_multi_choice_resolution_ignores_unknown_entries() {
        let options = ["JavaScript", "React", "Python"];
        assert_eq!(resolve_options("python, react", &options), vec![2, 1]);
        assert_eq!(resolve_options("python, warp-drive", &options), vec![2]);
        assert!(resolve_options("", &options).is_empty());
        assert!(resolve_options("none", &options).is_empty());
    }
}
