pub mod session;
pub mod time;
pub mod validation;

pub use session::{IntakeSession, LogObserver, SessionState, SubmissionObserver};
pub use time::{Clock, SystemClock};
pub use validation::{validate, ValidationReport};
