use serde::{Deserialize, Serialize};

/// Fixed catalog of skills offered as checkboxes on the form.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Skill {
    JavaScript,
    React,
    Python,
}

impl Skill {
    pub const CATALOG: [Skill; 3] = [Skill::JavaScript, Skill::React, Skill::Python];

    pub fn label(&self) -> &'static str {
        match self {
            Skill::JavaScript => "JavaScript",
            Skill::React => "React",
            Skill::Python => "Python",
        }
    }
}
