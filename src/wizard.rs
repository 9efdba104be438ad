//! Wizard controller: the linear token-creation flow.
//!
//! Owns the step state (`setup → payment → minting → success`), the token
//! draft, and the deployment record produced by the simulated mint. All
//! transitions are guarded; a rejected transition returns a validation
//! error and mutates nothing.
//!
//! There is no blockchain integration behind any of this. The pasted
//! payment hash is stored verbatim without verification, and the "mint" is
//! a fixed-duration timer followed by placeholder output. There is
//! deliberately no payment-failed or mint-failed branch: timer expiry
//! advances to success unconditionally.

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::advisory::TokenomicsAssessment;
use crate::error::WizardError;
use crate::network::Network;
use crate::settings::ReceiverSettings;

/// Fixed network gas fee added to the service fee for display. Constant
/// across networks; purely presentational.
pub const NETWORK_BASE_FEE: f64 = 0.005;

/// How long the simulated mint runs before unconditionally succeeding.
pub const DEFAULT_MINT_DURATION: Duration = Duration::from_secs(4);

/// Wizard phases, in flow order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Step {
    Setup,
    Payment,
    Minting,
    Success,
}

impl Step {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Setup => "setup",
            Self::Payment => "payment",
            Self::Minting => "minting",
            Self::Success => "success",
        }
    }
}

/// User-entered token parameters, mutable until payment is submitted.
///
/// `decimals` and `total_supply` are accepted verbatim with no range
/// validation, matching the product's behavior.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenDraft {
    pub name: String,
    pub symbol: String,
    pub decimals: u32,
    pub total_supply: String,
    pub description: String,
    /// Always mirrors the wizard's currently selected network.
    pub network: Network,
}

impl Default for TokenDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            symbol: String::new(),
            decimals: 9,
            total_supply: "1000000000".to_string(),
            description: String::new(),
            network: Network::Solana,
        }
    }
}

impl TokenDraft {
    /// Fields still required before the setup → payment transition.
    pub fn missing_for_review(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.name.trim().is_empty() {
            missing.push("name");
        }
        if self.symbol.trim().is_empty() {
            missing.push("symbol");
        }
        missing
    }

    /// Fields still required before a tokenomics assessment may be
    /// requested. The advisory client does not re-check these.
    pub fn missing_for_assessment(&self) -> Vec<&'static str> {
        let mut missing = self.missing_for_review();
        if self.description.trim().is_empty() {
            missing.push("description");
        }
        missing
    }
}

/// Outcome of the simulated mint.
///
/// Created when payment is submitted, finalized when the mint timer
/// elapses, and never mutated afterward. The contract address and tx hash
/// are fixed placeholders keyed only by the selected network.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeploymentRecord {
    pub step: Step,
    pub contract_address: Option<String>,
    pub tx_hash: Option<String>,
    /// Verbatim copy of the user-supplied payment hash (trimmed).
    pub payment_tx_hash: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// The wizard state machine.
///
/// Single-threaded and event-driven: every mutation happens in response to
/// one discrete user action or the one-shot mint timer.
#[derive(Debug, Clone)]
pub struct WizardController {
    step: Step,
    draft: TokenDraft,
    assessment: Option<TokenomicsAssessment>,
    deployment: Option<DeploymentRecord>,
    settings: ReceiverSettings,
    mint_duration: Duration,
}

impl WizardController {
    /// Create a wizard in the setup step with the given receiver settings.
    ///
    /// Settings are injected once at startup; the admin panel edits its own
    /// copy and persists it for the next run.
    pub fn new(settings: ReceiverSettings) -> Self {
        Self {
            step: Step::Setup,
            draft: TokenDraft::default(),
            assessment: None,
            deployment: None,
            settings,
            mint_duration: DEFAULT_MINT_DURATION,
        }
    }

    /// Override the mint timer duration (tests run it in milliseconds).
    pub fn with_mint_duration(mut self, duration: Duration) -> Self {
        self.mint_duration = duration;
        self
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn draft(&self) -> &TokenDraft {
        &self.draft
    }

    /// Mutable access to the draft for form edits during setup.
    pub fn draft_mut(&mut self) -> &mut TokenDraft {
        &mut self.draft
    }

    pub fn settings(&self) -> &ReceiverSettings {
        &self.settings
    }

    pub fn assessment(&self) -> Option<&TokenomicsAssessment> {
        self.assessment.as_ref()
    }

    pub fn deployment(&self) -> Option<&DeploymentRecord> {
        self.deployment.as_ref()
    }

    pub fn mint_duration(&self) -> Duration {
        self.mint_duration
    }

    /// Store (or reset, with `None`) the advisory result.
    pub fn set_assessment(&mut self, assessment: Option<TokenomicsAssessment>) {
        self.assessment = assessment;
    }

    /// Select a network. Legal only during setup; the draft's network field
    /// is overwritten immediately so it always mirrors the selection.
    pub fn select_network(&mut self, network: Network) -> Result<(), WizardError> {
        if self.step != Step::Setup {
            return Err(WizardError::InvalidTransition {
                action: "change network",
                step: self.step.as_str(),
            });
        }
        self.draft.network = network;
        Ok(())
    }

    pub fn network(&self) -> Network {
        self.draft.network
    }

    /// Currency code for fee display on the selected network.
    pub fn currency(&self) -> &'static str {
        self.draft.network.currency()
    }

    /// Receiver wallet for the selected network.
    pub fn receiver_wallet(&self) -> &str {
        self.settings.wallet_for(self.draft.network)
    }

    /// Total displayed cost: base service fee plus the fixed network fee.
    /// Never checked against the pasted payment hash.
    pub fn total_cost(&self) -> f64 {
        self.settings.service_fee + NETWORK_BASE_FEE
    }

    /// Total cost with 3-decimal fixed formatting, e.g. "0.015".
    pub fn formatted_total_cost(&self) -> String {
        format!("{:.3}", self.total_cost())
    }

    /// setup → payment. Requires a non-empty name and symbol.
    pub fn review_and_pay(&mut self) -> Result<(), WizardError> {
        if self.step != Step::Setup {
            return Err(WizardError::InvalidTransition {
                action: "review and pay",
                step: self.step.as_str(),
            });
        }

        let missing = self.draft.missing_for_review();
        if !missing.is_empty() {
            return Err(WizardError::missing(&missing));
        }

        self.step = Step::Payment;
        self.assessment = None;
        Ok(())
    }

    /// payment → setup. Always legal from payment; no side effects.
    pub fn back_to_setup(&mut self) -> Result<(), WizardError> {
        if self.step != Step::Payment {
            return Err(WizardError::InvalidTransition {
                action: "go back to setup",
                step: self.step.as_str(),
            });
        }
        self.step = Step::Setup;
        Ok(())
    }

    /// payment → minting. Requires a non-empty (after trimming) payment
    /// hash; stores the trimmed hash verbatim and arms the mint timer.
    ///
    /// The hash is never verified against any chain.
    pub fn submit_payment(&mut self, raw_hash: &str) -> Result<(), WizardError> {
        if self.step != Step::Payment {
            return Err(WizardError::InvalidTransition {
                action: "submit payment",
                step: self.step.as_str(),
            });
        }

        let hash = raw_hash.trim();
        if hash.is_empty() {
            return Err(WizardError::missing(&["transaction hash"]));
        }

        self.step = Step::Minting;
        self.deployment = Some(DeploymentRecord {
            step: Step::Minting,
            contract_address: None,
            tx_hash: None,
            payment_tx_hash: Some(hash.to_string()),
            created_at: Utc::now(),
        });
        Ok(())
    }

    /// minting → success, unconditionally. Populates the deployment record
    /// with the placeholder contract address and tx hash for the selected
    /// network.
    ///
    /// Callers normally reach this through [`run_minting`](Self::run_minting);
    /// it is exposed separately so the timer can live outside the machine.
    pub fn complete_minting(&mut self) -> Result<&DeploymentRecord, WizardError> {
        if self.step != Step::Minting {
            return Err(WizardError::InvalidTransition {
                action: "complete minting",
                step: self.step.as_str(),
            });
        }

        let placeholders = self.draft.network.mint_placeholders();
        let record = self
            .deployment
            .as_mut()
            .ok_or(WizardError::InvalidTransition {
                action: "complete minting",
                step: "minting",
            })?;

        record.step = Step::Success;
        record.contract_address = Some(placeholders.contract_address.to_string());
        record.tx_hash = Some(placeholders.tx_hash.to_string());
        self.step = Step::Success;

        tracing::info!(
            network = self.draft.network.as_str(),
            symbol = %self.draft.symbol,
            "Simulated mint complete"
        );
        Ok(record)
    }

    /// Run the one-shot mint timer, then complete the mint. No cancellation
    /// path and no retry: expiry always advances to success.
    pub async fn run_minting(&mut self) -> Result<&DeploymentRecord, WizardError> {
        if self.step != Step::Minting {
            return Err(WizardError::InvalidTransition {
                action: "run minting",
                step: self.step.as_str(),
            });
        }
        tokio::time::sleep(self.mint_duration).await;
        self.complete_minting()
    }

    /// any → setup. Clears all draft state, the advisory result, and the
    /// deployment record.
    pub fn restart(&mut self) {
        self.step = Step::Setup;
        self.draft = TokenDraft::default();
        self.assessment = None;
        self.deployment = None;
    }
}
