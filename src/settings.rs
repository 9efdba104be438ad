//! Receiver settings persistence.
//!
//! Stores the three receiver wallet addresses and the base service fee in
//! ~/.tokenlabs/settings.json. The file is read once at startup and
//! overwritten in full on every admin save. A missing or unparsable file
//! falls back to the fixed defaults; there is no schema versioning.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::SettingsError;
use crate::network::Network;

/// Admin-owned receiver configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReceiverSettings {
    /// Receiver wallet for SOLANA payments.
    #[serde(default = "default_solana_wallet")]
    pub solana_wallet: String,

    /// Receiver wallet for ETHEREUM payments.
    #[serde(default = "default_ethereum_wallet")]
    pub ethereum_wallet: String,

    /// Receiver wallet for XRP payments.
    #[serde(default = "default_xrp_wallet")]
    pub xrp_wallet: String,

    /// Base service fee in the selected network's native currency.
    /// Accepted verbatim; no range validation is applied (the fee is
    /// presentational and never verified against a payment).
    #[serde(default = "default_service_fee")]
    pub service_fee: f64,
}

fn default_solana_wallet() -> String {
    "ADminSoLanaWaLLetAddr3ssHeresm7v5G".to_string()
}

fn default_ethereum_wallet() -> String {
    "0xADminEthWaLLetAddr3ssHeres67891".to_string()
}

fn default_xrp_wallet() -> String {
    "rADminXrpWaLLetAddr3ssHeresX123".to_string()
}

fn default_service_fee() -> f64 {
    0.01
}

impl Default for ReceiverSettings {
    fn default() -> Self {
        Self {
            solana_wallet: default_solana_wallet(),
            ethereum_wallet: default_ethereum_wallet(),
            xrp_wallet: default_xrp_wallet(),
            service_fee: default_service_fee(),
        }
    }
}

impl ReceiverSettings {
    /// Get the default settings file path (~/.tokenlabs/settings.json).
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".tokenlabs")
            .join("settings.json")
    }

    /// Load settings from disk, returning defaults if not found.
    pub fn load() -> Self {
        Self::load_from(&Self::default_path())
    }

    /// Load settings from a specific path.
    ///
    /// Absent or unreadable files yield defaults. A file that exists but
    /// fails to parse also yields defaults, with a warning, rather than
    /// crashing or leaving partial state.
    pub fn load_from(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(data) => serde_json::from_str(&data).unwrap_or_else(|e| {
                tracing::warn!(
                    "Unparsable settings file {}: {}. Using defaults.",
                    path.display(),
                    e
                );
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }

    /// Write the full settings record to disk, replacing any previous one.
    pub fn save_to(&self, path: &Path) -> Result<(), SettingsError> {
        let json = serde_json::to_string_pretty(self)?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| SettingsError::Write {
                path: parent.display().to_string(),
                source: e,
            })?;
        }

        std::fs::write(path, json).map_err(|e| SettingsError::Write {
            path: path.display().to_string(),
            source: e,
        })?;

        tracing::debug!("Settings saved to {}", path.display());
        Ok(())
    }

    /// Save to the default path.
    pub fn save(&self) -> Result<(), SettingsError> {
        self.save_to(&Self::default_path())
    }

    /// The receiver wallet for a given network.
    pub fn wallet_for(&self, network: Network) -> &str {
        match network {
            Network::Solana => &self.solana_wallet,
            Network::Ethereum => &self.ethereum_wallet,
            Network::Xrp => &self.xrp_wallet,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn load_without_prior_save_yields_defaults() {
        let dir = tempdir().unwrap();
        let settings = ReceiverSettings::load_from(&dir.path().join("nonexistent.json"));
        assert_eq!(settings, ReceiverSettings::default());
        assert_eq!(settings.service_fee, 0.01);
    }

    #[test]
    fn save_then_load_round_trips_exactly() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.json");

        let settings = ReceiverSettings {
            solana_wallet: "So1WalletNew".to_string(),
            ethereum_wallet: "0xEthWalletNew".to_string(),
            xrp_wallet: "rXrpWalletNew".to_string(),
            service_fee: 0.025,
        };
        settings.save_to(&path).unwrap();

        let reloaded = ReceiverSettings::load_from(&path);
        assert_eq!(reloaded, settings);
    }

    #[test]
    fn corrupt_file_falls_back_to_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "{not json at all").unwrap();

        let settings = ReceiverSettings::load_from(&path);
        assert_eq!(settings, ReceiverSettings::default());
    }

    #[test]
    fn partial_file_fills_missing_fields_with_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, r#"{"service_fee": 0.5}"#).unwrap();

        let settings = ReceiverSettings::load_from(&path);
        assert_eq!(settings.service_fee, 0.5);
        assert_eq!(settings.solana_wallet, "ADminSoLanaWaLLetAddr3ssHeresm7v5G");
    }

    #[test]
    fn wallet_for_selects_by_network() {
        let settings = ReceiverSettings::default();
        assert_eq!(
            settings.wallet_for(Network::Ethereum),
            "0xADminEthWaLLetAddr3ssHeres67891"
        );
        assert_eq!(
            settings.wallet_for(Network::Xrp),
            "rADminXrpWaLLetAddr3ssHeresX123"
        );
    }

    #[test]
    fn default_path_lives_under_tokenlabs_dir() {
        let path = ReceiverSettings::default_path();
        assert!(path.ends_with("settings.json"));
        assert!(path.to_string_lossy().contains(".tokenlabs"));
    }
}
