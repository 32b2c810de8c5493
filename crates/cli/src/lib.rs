//! `munimatch` — reconcile a regional master-list template against the
//! municipality registry.

pub mod exit_codes;
pub mod update;

use exit_codes::{EXIT_ERROR, EXIT_USAGE};

#[derive(Debug)]
pub struct CliError {
    pub code: u8,
    pub message: String,
    pub hint: Option<String>,
}

impl CliError {
    pub fn args(msg: impl Into<String>) -> Self {
        Self { code: EXIT_USAGE, message: msg.into(), hint: None }
    }

    pub fn general(msg: impl Into<String>) -> Self {
        Self { code: EXIT_ERROR, message: msg.into(), hint: None }
    }
}
