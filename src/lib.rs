#![doc(test(attr(deny(warnings))))]

//! Intake Core implements a job-application intake form: permissive draft
//! entry, submit-time validation, and a terminal wizard that renders the
//! submitted application read-only.

pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod errors;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Intake Core tracing initialized.");
    });
}
