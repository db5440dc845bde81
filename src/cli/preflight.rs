//! Pre-flight checks before expensive operations.
//!
//! Validates that required configuration is available before starting a
//! recognition job that would otherwise fail midway.

use crate::error::{Result, TaleError};
use crate::recognition::API_KEY_VAR;

/// Requirements for different operations.
#[derive(Debug, Clone, Copy)]
pub enum Operation {
    /// Transcription requires the service API key.
    Transcribe,
}

/// Run pre-flight checks for the given operation.
///
/// Returns Ok(()) if all checks pass, or an error describing what's missing.
pub fn check(operation: Operation) -> Result<()> {
    match operation {
        Operation::Transcribe => check_api_key(),
    }
}

/// Check if the service API key is configured.
fn check_api_key() -> Result<()> {
    match std::env::var(API_KEY_VAR) {
        Ok(key) if !key.is_empty() => Ok(()),
        Ok(_) => Err(TaleError::Config(format!(
            "{} is empty. Set it with: export {}='...'",
            API_KEY_VAR, API_KEY_VAR
        ))),
        Err(_) => Err(TaleError::Config(format!(
            "{} not set. Set it with: export {}='...'",
            API_KEY_VAR, API_KEY_VAR
        ))),
    }
}
