pub mod application;
pub mod position;
pub mod skill;

pub use application::{ApplicationDraft, Field, PositionDetails, SubmittedApplication};
pub use position::Position;
pub use skill::Skill;
