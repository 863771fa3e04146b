use crate::error::{Failure, Outcome};
use crate::logging::log_debug;
use serde::{Deserialize, Serialize};

use std::env::VarError;

/// Environment variable toggling panic capture.
pub const CAPTURE_PANICS_ENV: &str = "GUARD_CAPTURE_PANICS";
/// Environment variable toggling suppressed-failure chaining.
pub const CHAIN_SUPPRESSED_ENV: &str = "GUARD_CHAIN_SUPPRESSED";

/// Behaviour switches for a guarded run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GuardConfig {
    /// Convert panics in guarded code into `Panic` failures.
    ///
    /// When disabled the panic unwinds to the caller, but the cleanup action
    /// still runs exactly once while unwinding.
    pub capture_panics: bool,

    /// Keep the failure displaced by a failing cleanup as the cleanup
    /// failure's `suppressed` source. When disabled the displaced failure is
    /// dropped.
    pub chain_suppressed: bool,
}

impl Default for GuardConfig {
    fn default() -> Self {
        Self {
            capture_panics: true,
            chain_suppressed: true,
        }
    }
}

impl GuardConfig {
    /// Load configuration from the environment, falling back to defaults
    /// for unset variables.
    ///
    /// # Errors
    ///
    /// Returns a `Conversion` failure naming the variable when a value is
    /// not valid unicode or not one of `true/false/1/0/yes/no/on/off`, or
    /// when the loaded configuration fails [`GuardConfig::validate`].
    pub fn from_env() -> Outcome<Self> {
        let defaults = Self::default();
        let config = Self {
            capture_panics: bool_from_env(CAPTURE_PANICS_ENV, defaults.capture_panics)?,
            chain_suppressed: bool_from_env(CHAIN_SUPPRESSED_ENV, defaults.chain_suppressed)?,
        };
        config.validate()?;

        log_debug!(
            capture_panics = config.capture_panics,
            chain_suppressed = config.chain_suppressed,
            "Guard configuration loaded from environment"
        );

        Ok(config)
    }

    /// Check that this configuration can be honoured by the current build.
    ///
    /// # Errors
    ///
    /// Returns a `Conversion` failure when `capture_panics` is set in a
    /// build compiled with `panic = "abort"`, where panics cannot be caught.
    pub fn validate(&self) -> Outcome<()> {
        if self.capture_panics && cfg!(panic = "abort") {
            return Err(Failure::conversion(format!(
                "{CAPTURE_PANICS_ENV} requires panic = \"unwind\""
            ))
            .with_payload(serde_json::json!({
                "variable": CAPTURE_PANICS_ENV,
                "value": self.capture_panics,
            })));
        }
        Ok(())
    }
}

fn bool_from_env(name: &str, default: bool) -> Outcome<bool> {
    match std::env::var(name) {
        Ok(raw) => parse_flag(&raw).ok_or_else(|| {
            Failure::conversion(format!("invalid value for {name}: '{raw}'"))
                .with_payload(serde_json::json!({ "variable": name, "value": raw }))
        }),
        Err(VarError::NotPresent) => Ok(default),
        Err(VarError::NotUnicode(raw)) => {
            let value = raw.to_string_lossy().into_owned();
            Err(
                Failure::conversion(format!("invalid value for {name}: '{value}'"))
                    .with_payload(serde_json::json!({ "variable": name, "value": value })),
            )
        }
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
