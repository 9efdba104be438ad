//! End-to-end wizard flow tests over the public crate API.
//!
//! Walks the full setup → payment → minting → success path with the mint
//! timer shortened to milliseconds, and exercises settings injection and
//! restart behavior the way the CLI front-end uses them.

use std::time::Duration;

use pretty_assertions::assert_eq;
use tempfile::tempdir;

use tokenlabs::admin::AdminSession;
use tokenlabs::network::Network;
use tokenlabs::settings::ReceiverSettings;
use tokenlabs::wizard::{Step, WizardController};

fn fast_wizard(settings: ReceiverSettings) -> WizardController {
    WizardController::new(settings).with_mint_duration(Duration::from_millis(5))
}

#[tokio::test]
async fn galactic_credits_happy_path() {
    let mut wizard = fast_wizard(ReceiverSettings::default());
    wizard.draft_mut().name = "Galactic Credits".to_string();
    wizard.draft_mut().symbol = "GALA".to_string();
    assert_eq!(wizard.network(), Network::Solana);

    wizard.review_and_pay().unwrap();
    assert_eq!(wizard.step(), Step::Payment);
    assert_eq!(wizard.formatted_total_cost(), "0.015");

    wizard.submit_payment("abc123").unwrap();
    assert_eq!(wizard.step(), Step::Minting);

    let record = wizard.run_minting().await.unwrap().clone();
    assert_eq!(wizard.step(), Step::Success);
    assert_eq!(record.payment_tx_hash.as_deref(), Some("abc123"));
    assert_eq!(record.contract_address.as_deref(), Some("7nE8v5G...p9w2k"));
    assert_eq!(record.tx_hash.as_deref(), Some("5f2d6...3e9a"));
}

#[tokio::test]
async fn payment_screen_shows_the_injected_receiver_wallet() {
    let mut settings = ReceiverSettings::default();
    settings.ethereum_wallet = "0xCustomReceiver".to_string();
    settings.service_fee = 0.02;

    let mut wizard = fast_wizard(settings);
    wizard.select_network(Network::Ethereum).unwrap();
    wizard.draft_mut().name = "Ether Beans".to_string();
    wizard.draft_mut().symbol = "BEAN".to_string();
    wizard.review_and_pay().unwrap();

    assert_eq!(wizard.receiver_wallet(), "0xCustomReceiver");
    assert_eq!(wizard.currency(), "ETH");
    assert_eq!(wizard.formatted_total_cost(), "0.025");
}

#[tokio::test]
async fn restart_after_success_returns_to_a_clean_setup() {
    let mut wizard = fast_wizard(ReceiverSettings::default());
    wizard.draft_mut().name = "Galactic Credits".to_string();
    wizard.draft_mut().symbol = "GALA".to_string();
    wizard.review_and_pay().unwrap();
    wizard.submit_payment("abc123").unwrap();
    wizard.run_minting().await.unwrap();

    wizard.restart();
    assert_eq!(wizard.step(), Step::Setup);
    assert!(wizard.draft().name.is_empty());
    assert!(wizard.deployment().is_none());

    // The flow is immediately usable again.
    wizard.draft_mut().name = "Second Token".to_string();
    wizard.draft_mut().symbol = "TWO".to_string();
    wizard.review_and_pay().unwrap();
    assert_eq!(wizard.step(), Step::Payment);
}

#[test]
fn admin_edits_persist_across_a_simulated_restart() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");

    // First run: unlock, edit, save.
    let mut session = AdminSession::new(ReceiverSettings::load_from(&path));
    assert!(session.unlock("Goodnews123"));
    {
        let settings = session.settings_mut().unwrap();
        settings.solana_wallet = "NewSolReceiver".to_string();
        settings.service_fee = 0.03;
    }
    session.into_settings().unwrap().save_to(&path).unwrap();

    // "Restart": a fresh load sees exactly the saved values.
    let reloaded = ReceiverSettings::load_from(&path);
    assert_eq!(reloaded.solana_wallet, "NewSolReceiver");
    assert_eq!(reloaded.service_fee, 0.03);

    let wizard = WizardController::new(reloaded);
    assert_eq!(wizard.receiver_wallet(), "NewSolReceiver");
    assert_eq!(wizard.formatted_total_cost(), "0.035");
}
