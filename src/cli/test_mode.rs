//! Scripted prompt answers so integration tests can drive the wizard without
//! a terminal.
//!
//! Set `INTAKE_TEST_INPUTS` to a `|`-separated list of answers; prompts
//! consume them in order and echo the consumed value for assertion purposes.

use std::{collections::VecDeque, env, sync::Mutex};

use once_cell::sync::Lazy;

const INPUTS_ENV: &str = "INTAKE_TEST_INPUTS";

/// A scripted answer, or a signal that the script ran out of them.
#[derive(Debug, Clone)]
pub enum ScriptedAnswer {
    Value(String),
    Exhausted,
}

struct InputQueue {
    enabled: bool,
    inputs: VecDeque<String>,
}

impl InputQueue {
    fn from_env() -> Self {
        if let Ok(raw) = env::var(INPUTS_ENV) {
            Self {
                enabled: true,
                inputs: raw.split('|').map(str::to_string).collect(),
            }
        } else {
            Self {
                enabled: false,
                inputs: VecDeque::new(),
            }
        }
    }
}

static QUEUE: Lazy<Mutex<InputQueue>> = Lazy::new(|| Mutex::new(InputQueue::from_env()));

/// Next scripted answer for a prompt, or `None` when running interactively.
pub fn next_input(label: &str) -> Option<ScriptedAnswer> {
    let mut queue = QUEUE.lock().ok()?;
    if !queue.enabled {
        return None;
    }
    match queue.inputs.pop_front() {
        Some(value) => {
            println!("{label}: {value} [scripted]");
            Some(ScriptedAnswer::Value(value))
        }
        None => Some(ScriptedAnswer::Exhausted),
    }
}
