//! Interactive wizard front-end.
//!
//! Drives the [`WizardController`] through the terminal: network cards and
//! the draft form during setup (with the AI advisor sidebar actions), the
//! payment address + QR link, a minting wait, and the success screen.
//!
//! The prompt loop is strictly sequential, so at most one advisory call of
//! each kind can ever be in flight: the triggering menu item simply cannot
//! be re-entered until the call returns.

use std::io;

use crate::advisory::AdvisoryClient;
use crate::cli::prompts::{
    confirm, input, input_with_default, print_error, print_header, print_info, print_step,
    print_success, select_one,
};
use crate::config::AdvisoryConfig;
use crate::network::NETWORKS;
use crate::qr::qr_image_url;
use crate::settings::ReceiverSettings;
use crate::wizard::{Step, WizardController};

/// Run the full wizard until the user quits.
pub async fn run_wizard() -> anyhow::Result<()> {
    let settings = ReceiverSettings::load();
    let advisory = AdvisoryClient::new(AdvisoryConfig::from_env()?);
    let mut wizard = WizardController::new(settings);

    print_header("TOKENLABS — Create your token");

    loop {
        match wizard.step() {
            Step::Setup => {
                if !setup_screen(&mut wizard, &advisory).await? {
                    return Ok(());
                }
            }
            Step::Payment => payment_screen(&mut wizard)?,
            Step::Minting => minting_screen(&mut wizard).await?,
            Step::Success => {
                success_screen(&wizard);
                if confirm("Create another token?", false)? {
                    wizard.restart();
                } else {
                    return Ok(());
                }
            }
        }
    }
}

/// One pass over the setup menu. Returns false when the user quits.
async fn setup_screen(
    wizard: &mut WizardController,
    advisory: &AdvisoryClient,
) -> anyhow::Result<bool> {
    print_step(1, 3, "Configuration");
    print_draft_summary(wizard);
    print_cost_panel(wizard);

    let options = vec![
        "Select network".to_string(),
        "Edit token name".to_string(),
        "Edit symbol (ticker)".to_string(),
        "Edit total supply".to_string(),
        "Edit decimals".to_string(),
        "Edit description".to_string(),
        "AI enhance description".to_string(),
        "Analyze tokenomics".to_string(),
        "Reset analysis".to_string(),
        "Review & pay".to_string(),
        "Quit".to_string(),
    ];

    match select_one("What next?", &options)? {
        0 => select_network_screen(wizard)?,
        1 => wizard.draft_mut().name = input("Token name (e.g. Galactic Credits)")?,
        2 => wizard.draft_mut().symbol = input("Symbol (e.g. GALA)")?,
        3 => {
            // Accepted verbatim; supply is display-only and unvalidated.
            let current = wizard.draft().total_supply.clone();
            wizard.draft_mut().total_supply = input_with_default("Total supply", &current)?;
        }
        4 => edit_decimals(wizard)?,
        5 => wizard.draft_mut().description = input("Describe what your token is for")?,
        6 => enhance_description(wizard, advisory).await,
        7 => analyze_tokenomics(wizard, advisory).await,
        8 => {
            wizard.set_assessment(None);
            print_info("Analysis reset.");
        }
        9 => {
            if let Err(e) = wizard.review_and_pay() {
                print_error(&e.to_string());
            }
        }
        _ => return Ok(false),
    }

    Ok(true)
}

fn select_network_screen(wizard: &mut WizardController) -> io::Result<()> {
    let cards: Vec<String> = NETWORKS
        .iter()
        .map(|n| format!("{} — {}", n.display_name(), n.tagline()))
        .collect();
    let index = select_one("Select network:", &cards)?;
    let network = NETWORKS[index];

    if let Err(e) = wizard.select_network(network) {
        print_error(&e.to_string());
    } else {
        print_success(&format!(
            "Network set to {} (fees in {})",
            network.display_name(),
            network.currency()
        ));
    }
    Ok(())
}

fn edit_decimals(wizard: &mut WizardController) -> io::Result<()> {
    let raw = input_with_default("Decimals", &wizard.draft().decimals.to_string())?;
    match raw.parse::<u32>() {
        // No range check: any parseable value is accepted.
        Ok(decimals) => wizard.draft_mut().decimals = decimals,
        Err(_) => print_error(&format!("'{raw}' is not a whole number; keeping current value")),
    }
    Ok(())
}

async fn enhance_description(wizard: &mut WizardController, advisory: &AdvisoryClient) {
    let missing = wizard.draft().missing_for_assessment();
    if !missing.is_empty() {
        print_error(&format!(
            "Fill in {} before requesting AI copy.",
            missing.join(", ")
        ));
        return;
    }

    print_info("Asking the AI copywriter...");
    let enhanced = advisory.rewrite_description(wizard.draft()).await;
    wizard.draft_mut().description = enhanced;
    print_success("Description updated.");
    print_info(&wizard.draft().description);
}

async fn analyze_tokenomics(wizard: &mut WizardController, advisory: &AdvisoryClient) {
    let missing = wizard.draft().missing_for_assessment();
    if !missing.is_empty() {
        print_error(&format!(
            "Fill in {} before requesting an analysis.",
            missing.join(", ")
        ));
        return;
    }

    print_info("Analyzing tokenomics...");
    let assessment = advisory.assess_tokenomics(wizard.draft()).await;

    println!();
    print_info(&format!("Viability score: {:.0}%", assessment.viability_score));
    print_info(&format!("Analysis: {}", assessment.market_analysis));
    for suggestion in &assessment.suggested_improvements {
        print_info(&format!("Suggestion: {suggestion}"));
    }
    for warning in &assessment.risk_warnings {
        print_info(&format!("Risk: {warning}"));
    }

    wizard.set_assessment(Some(assessment));
}

fn payment_screen(wizard: &mut WizardController) -> anyhow::Result<()> {
    print_step(2, 3, "Payment");
    println!();
    print_info(&format!(
        "Payment amount: {} {}",
        wizard.formatted_total_cost(),
        wizard.currency()
    ));
    print_info(&format!("Network: {}", wizard.network()));
    print_info(&format!("Receiver address: {}", wizard.receiver_wallet()));
    print_info(&format!("Scan to pay: {}", qr_image_url(wizard.receiver_wallet())));
    println!();
    print_info(&format!(
        "Send exactly {} {}. Deployment starts immediately after hash submission.",
        wizard.formatted_total_cost(),
        wizard.currency()
    ));
    println!();

    let raw = input("Paste your transaction ID ('back' to return to configuration)")?;
    if raw.eq_ignore_ascii_case("back") {
        wizard.back_to_setup()?;
        return Ok(());
    }

    if let Err(e) = wizard.submit_payment(&raw) {
        print_error(&e.to_string());
    }
    Ok(())
}

async fn minting_screen(wizard: &mut WizardController) -> anyhow::Result<()> {
    print_step(3, 3, "Minting");
    print_info("Minting asset...");
    print_info(&format!(
        "Communicating with {} validators",
        wizard.network()
    ));
    if let Some(record) = wizard.deployment()
        && let Some(ref hash) = record.payment_tx_hash
    {
        let preview: String = hash.chars().take(12).collect();
        print_info(&format!("Verifying payment hash {preview}..."));
    }

    wizard.run_minting().await?;
    Ok(())
}

fn success_screen(wizard: &WizardController) {
    let draft = wizard.draft();
    print_header("Token Successfully Minted!");
    print_info(&format!(
        "Your new asset {} ({}) is now live on the {} mainnet.",
        draft.name, draft.symbol, draft.network
    ));
    println!();

    if let Some(record) = wizard.deployment() {
        if let Some(ref address) = record.contract_address {
            print_info(&format!("Contract address:  {address}"));
        }
        if let Some(ref hash) = record.tx_hash {
            print_info(&format!("Transaction hash:  {hash}"));
        }
        if let Some(ref hash) = record.payment_tx_hash {
            print_info(&format!("Payment tx hash:   {hash}"));
        }
    }
    println!();
}

fn print_draft_summary(wizard: &WizardController) {
    let draft = wizard.draft();
    print_info(&format!(
        "Network: {} | Name: {} | Symbol: {} | Supply: {} | Decimals: {}",
        draft.network.display_name(),
        if draft.name.is_empty() { "-" } else { &draft.name },
        if draft.symbol.is_empty() { "-" } else { &draft.symbol },
        draft.total_supply,
        draft.decimals,
    ));
    if !draft.description.is_empty() {
        print_info(&format!("Description: {}", draft.description));
    }
    if let Some(assessment) = wizard.assessment() {
        print_info(&format!(
            "AI advisor: viability {:.0}%",
            assessment.viability_score
        ));
    }
}

fn print_cost_panel(wizard: &WizardController) {
    let currency = wizard.currency();
    print_info(&format!(
        "Estimated costs — gas ~{:.3} {currency}, creation fee {:.3} {currency}, total {} {currency}",
        crate::wizard::NETWORK_BASE_FEE,
        wizard.settings().service_fee,
        wizard.formatted_total_cost(),
    ));
}
