//! Error types for TokenLabs.

/// Top-level error type for the wizard runtime.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Wizard error: {0}")]
    Wizard(#[from] WizardError),

    #[error("Settings error: {0}")]
    Settings(#[from] SettingsError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-related errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue { key: String, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Wizard state-machine errors surfaced to the user as inline validation
/// messages. A rejected transition never mutates wizard state.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WizardError {
    /// A gated transition was attempted with required fields missing.
    #[error("Missing required field(s): {}", .0.join(", "))]
    MissingFields(Vec<String>),

    /// The requested transition is not legal from the current step.
    #[error("Cannot {action} while in the {step} step")]
    InvalidTransition {
        action: &'static str,
        step: &'static str,
    },
}

impl WizardError {
    pub fn missing(fields: &[&str]) -> Self {
        Self::MissingFields(fields.iter().map(|f| f.to_string()).collect())
    }
}

/// Settings persistence errors.
///
/// Load failures are not represented here: a missing or corrupt settings
/// file silently falls back to defaults. Only save failures are reported.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("Failed to serialize settings: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Failed to write {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Advisory-call failures.
///
/// These never propagate to wizard callers; the advisory client logs them
/// and substitutes the fixed fallback value. They exist so the log line can
/// say what actually went wrong.
#[derive(Debug, thiserror::Error)]
pub enum AdvisoryError {
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Malformed response: {0}")]
    Malformed(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_message_names_each_field() {
        let err = WizardError::missing(&["name", "symbol"]);
        assert_eq!(err.to_string(), "Missing required field(s): name, symbol");
    }

    #[test]
    fn invalid_transition_message_names_action_and_step() {
        let err = WizardError::InvalidTransition {
            action: "submit payment",
            step: "setup",
        };
        assert_eq!(
            err.to_string(),
            "Cannot submit payment while in the setup step"
        );
    }
}
