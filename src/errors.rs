use thiserror::Error;

/// Error type that captures common runtime failures.
///
/// Validation findings never surface here; they travel as entries in a
/// [`crate::core::validation::ValidationReport`].
#[derive(Debug, Error)]
pub enum IntakeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),
    #[error("Scripted input exhausted before the form completed")]
    ScriptedInputExhausted,
}
