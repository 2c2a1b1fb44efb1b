use serde::{Deserialize, Serialize};

/// Enumerates the positions an applicant can apply for.
///
/// The draft stores `Option<Position>`; `None` models the form's unselected
/// state, which the validator treats as "no position-specific rules apply".
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Position {
    Developer,
    Designer,
    Manager,
}

impl Position {
    pub const ALL: [Position; 3] = [Position::Developer, Position::Designer, Position::Manager];

    /// Parses user text leniently (trimmed, case-insensitive). Anything that
    /// does not name a known position yields `None`, leaving the field unset.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_ascii_lowercase().as_str() {
            "developer" => Some(Position::Developer),
            "designer" => Some(Position::Designer),
            "manager" => Some(Position::Manager),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Position::Developer => "Developer",
            Position::Designer => "Designer",
            Position::Manager => "Manager",
        }
    }

    /// Positions whose applicants must report relevant experience.
    pub fn requires_experience(&self) -> bool {
        matches!(self, Position::Developer | Position::Designer)
    }

    pub fn requires_portfolio(&self) -> bool {
        matches!(self, Position::Designer)
    }

    pub fn requires_management_summary(&self) -> bool {
        matches!(self, Position::Manager)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_is_lenient_about_case_and_whitespace() {
        assert_eq!(Position::parse("  designer "), Some(Position::Designer));
        assert_eq!(Position::parse("MANAGER"), Some(Position::Manager));
        assert_eq!(Position::parse("Select..."), None);
        assert_eq!(Position::parse(""), None);
    }
}
