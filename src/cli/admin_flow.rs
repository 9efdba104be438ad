//! Admin panel flow: unlock, edit receiver wallets and fee, save.

use crate::admin::AdminSession;
use crate::cli::prompts::{
    confirm, input, input_with_default, print_error, print_header, print_info, print_success,
    select_one,
};
use crate::network::{NETWORKS, Network};
use crate::qr::qr_image_url;
use crate::settings::ReceiverSettings;

/// Run the admin panel against the persisted settings.
pub fn run_admin() -> anyhow::Result<()> {
    let settings = ReceiverSettings::load();
    let mut session = AdminSession::new(settings);

    print_header("Admin Access Required");
    while !session.is_unlocked() {
        let attempt = input("Enter admin password ('q' to return to site)")?;
        if attempt.eq_ignore_ascii_case("q") {
            return Ok(());
        }
        if !session.unlock(&attempt) {
            print_error("Wrong password");
        }
    }

    print_header("Admin Dashboard");
    print_info("Configure receiver wallets and platform fees.");

    loop {
        print_settings(session.settings());

        let options = vec![
            "Edit Solana receiver".to_string(),
            "Edit Ethereum receiver".to_string(),
            "Edit XRP receiver".to_string(),
            "Edit service fee (base)".to_string(),
            "Save all changes".to_string(),
            "Exit without saving".to_string(),
        ];

        match select_one("What next?", &options)? {
            0 => edit_wallet(&mut session, Network::Solana)?,
            1 => edit_wallet(&mut session, Network::Ethereum)?,
            2 => edit_wallet(&mut session, Network::Xrp)?,
            3 => edit_fee(&mut session)?,
            4 => {
                session.settings().save()?;
                print_success("Settings updated successfully!");
                return Ok(());
            }
            _ => {
                if confirm("Discard unsaved changes?", false)? {
                    return Ok(());
                }
            }
        }
    }
}

fn edit_wallet(session: &mut AdminSession, network: Network) -> anyhow::Result<()> {
    let Some(settings) = session.settings_mut() else {
        print_error("Panel is locked");
        return Ok(());
    };

    let current = settings.wallet_for(network).to_string();
    let address = input_with_default(&format!("{} receiver", network.display_name()), &current)?;

    match network {
        Network::Solana => settings.solana_wallet = address,
        Network::Ethereum => settings.ethereum_wallet = address,
        Network::Xrp => settings.xrp_wallet = address,
    }
    print_info(&format!(
        "QR preview: {}",
        qr_image_url(settings.wallet_for(network))
    ));
    Ok(())
}

fn edit_fee(session: &mut AdminSession) -> anyhow::Result<()> {
    let Some(settings) = session.settings_mut() else {
        print_error("Panel is locked");
        return Ok(());
    };

    let raw = input_with_default("Service fee (base)", &settings.service_fee.to_string())?;
    match raw.parse::<f64>() {
        // Any parseable value is accepted; no range validation by design.
        Ok(fee) => settings.service_fee = fee,
        Err(_) => print_error(&format!("'{raw}' is not a number; keeping current value")),
    }
    Ok(())
}

fn print_settings(settings: &ReceiverSettings) {
    println!();
    for network in NETWORKS {
        print_info(&format!(
            "{:<12} {}",
            network.display_name(),
            settings.wallet_for(network)
        ));
    }
    print_info(&format!("Service fee  {}", settings.service_fee));
    println!();
}
