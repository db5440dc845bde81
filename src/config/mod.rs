//! Configuration module for Tale.
//!
//! Handles loading and managing application settings.

mod settings;

pub use settings::{GeneralSettings, RecognitionSettings, Settings};
