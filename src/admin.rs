//! Admin panel session: unlock gate plus receiver-settings editing.
//!
//! The gate is a fixed shared-secret string compared against typed input.
//! This is explicitly NOT a security boundary: the secret ships in the
//! binary and the comparison happens client-side. It is modeled as a pure
//! boolean session flag, nothing more. Do not extend it into a credential
//! system.

use crate::settings::ReceiverSettings;

/// Shared secret unlocking the admin panel for the rest of the session.
const ADMIN_SECRET: &str = "Goodnews123";

/// One admin session over a working copy of the receiver settings.
///
/// Edits accumulate in the session's copy; nothing persists until the
/// caller saves the settings explicitly.
#[derive(Debug)]
pub struct AdminSession {
    unlocked: bool,
    settings: ReceiverSettings,
}

impl AdminSession {
    pub fn new(settings: ReceiverSettings) -> Self {
        Self {
            unlocked: false,
            settings,
        }
    }

    /// Attempt to unlock with the given input. Once unlocked, the session
    /// stays unlocked.
    pub fn unlock(&mut self, input: &str) -> bool {
        if input == ADMIN_SECRET {
            self.unlocked = true;
        }
        self.unlocked
    }

    pub fn is_unlocked(&self) -> bool {
        self.unlocked
    }

    pub fn settings(&self) -> &ReceiverSettings {
        &self.settings
    }

    /// Mutable settings access, gated on the session being unlocked.
    pub fn settings_mut(&mut self) -> Option<&mut ReceiverSettings> {
        if self.unlocked {
            Some(&mut self.settings)
        } else {
            None
        }
    }

    /// Consume the session, returning the edited settings for persistence.
    /// `None` while locked.
    pub fn into_settings(self) -> Option<ReceiverSettings> {
        if self.unlocked { Some(self.settings) } else { None }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrong_secret_keeps_session_locked() {
        let mut session = AdminSession::new(ReceiverSettings::default());
        assert!(!session.unlock("letmein"));
        assert!(!session.is_unlocked());
        assert!(session.settings_mut().is_none());
        assert!(session.into_settings().is_none());
    }

    #[test]
    fn correct_secret_unlocks_for_the_session() {
        let mut session = AdminSession::new(ReceiverSettings::default());
        assert!(session.unlock("Goodnews123"));
        assert!(session.is_unlocked());

        // A later wrong input does not re-lock.
        assert!(session.unlock("nope"));
        assert!(session.settings_mut().is_some());
    }

    #[test]
    fn edits_survive_into_settings() {
        let mut session = AdminSession::new(ReceiverSettings::default());
        session.unlock("Goodnews123");
        session.settings_mut().unwrap().service_fee = 0.05;
        let settings = session.into_settings().unwrap();
        assert_eq!(settings.service_fee, 0.05);
    }
}
