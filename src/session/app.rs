//! Screening application state
//!
//! Couples navigation with the session lifetime: logging in opens a fresh
//! `ScreeningSession`, logging out discards it and every observation in it.

use crate::config::ScreeningConfig;
use crate::error::{Result, ScreeningError};
use crate::input::SurveyForm;

use super::navigation::{CredentialVerifier, Navigator, Page};
use super::screening::{Dashboard, ScreeningOutcome, ScreeningSession};

/// The survey tool as one user drives it
#[derive(Debug)]
pub struct ScreeningApp<V> {
    config: ScreeningConfig,
    navigator: Navigator<V>,
    session: Option<ScreeningSession>,
}

impl<V: CredentialVerifier> ScreeningApp<V> {
    /// Start on the login page with no session
    #[must_use]
    pub const fn new(config: ScreeningConfig, verifier: V) -> Self {
        Self {
            config,
            navigator: Navigator::new(verifier),
            session: None,
        }
    }

    /// Page currently shown
    #[must_use]
    pub const fn page(&self) -> Page {
        self.navigator.page()
    }

    /// Open the survey page and start a new session
    pub fn login(&mut self, secret: &str) -> Result<()> {
        self.navigator.login(secret)?;
        if self.session.is_none() {
            self.session = Some(ScreeningSession::new(self.config.clone()));
        }
        Ok(())
    }

    /// Return to the login page, discarding the session
    pub fn logout(&mut self) {
        if let Some(session) = self.session.take() {
            log::info!(
                "Discarding session with {} observations",
                session.aggregator().len()
            );
        }
        self.navigator.logout();
    }

    /// Current session, if logged in
    #[must_use]
    pub const fn session(&self) -> Option<&ScreeningSession> {
        self.session.as_ref()
    }

    /// Submit a survey form
    pub fn submit_form(&mut self, form: &SurveyForm) -> Result<ScreeningOutcome> {
        let session = self.session.as_mut().ok_or(ScreeningError::NotLoggedIn)?;
        session.submit_form(form).inspect_err(|e| {
            log::warn!("Rejected submission for child {:?}: {e}", form.child_id.trim());
        })
    }

    /// Ward chart and hotspot table for the current session
    pub fn dashboard(&self) -> Result<Dashboard> {
        self.session
            .as_ref()
            .map(ScreeningSession::dashboard)
            .ok_or(ScreeningError::NotLoggedIn)
    }
}
