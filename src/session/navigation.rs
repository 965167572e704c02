//! Page navigation between login and survey
//!
//! Reaching the survey page requires a secret accepted by a
//! `CredentialVerifier`. The only shipped verifier, `DemoPassphrase`, is a
//! demo gate and must not be relied on as access control.

use std::fmt;

use serde::Serialize;

use crate::error::{Result, ScreeningError};

/// Pass phrase used by the demo build when none is configured
pub const DEFAULT_DEMO_PASSPHRASE: &str = "asha123";

/// Page currently shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    /// Pass phrase prompt
    Login,
    /// Survey form and dashboard
    Survey,
}

/// Decides whether a secret grants access to the survey page
pub trait CredentialVerifier {
    /// Whether `secret` is accepted
    fn verify(&self, secret: &str) -> bool;
}

/// Fixed pass phrase for demos
#[derive(Clone)]
pub struct DemoPassphrase {
    passphrase: String,
}

impl DemoPassphrase {
    /// Create a gate accepting `passphrase`
    #[must_use]
    pub fn new(passphrase: impl Into<String>) -> Self {
        Self {
            passphrase: passphrase.into(),
        }
    }
}

impl Default for DemoPassphrase {
    fn default() -> Self {
        Self::new(DEFAULT_DEMO_PASSPHRASE)
    }
}

impl fmt::Debug for DemoPassphrase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DemoPassphrase")
            .field("passphrase", &"<redacted>")
            .finish()
    }
}

impl CredentialVerifier for DemoPassphrase {
    fn verify(&self, secret: &str) -> bool {
        secret.trim() == self.passphrase
    }
}

/// Tracks the current page
#[derive(Debug)]
pub struct Navigator<V> {
    verifier: V,
    page: Page,
}

impl<V: CredentialVerifier> Navigator<V> {
    /// Start on the login page
    #[must_use]
    pub const fn new(verifier: V) -> Self {
        Self {
            verifier,
            page: Page::Login,
        }
    }

    /// Page currently shown
    #[must_use]
    pub const fn page(&self) -> Page {
        self.page
    }

    /// Whether the survey page is reachable
    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        self.page == Page::Survey
    }

    /// Move to the survey page if `secret` is accepted
    pub fn login(&mut self, secret: &str) -> Result<Page> {
        if self.verifier.verify(secret) {
            log::info!("Login accepted, opening survey page");
            self.page = Page::Survey;
            Ok(self.page)
        } else {
            log::warn!("Login rejected");
            Err(ScreeningError::AccessDenied)
        }
    }

    /// Return to the login page
    pub fn logout(&mut self) -> Page {
        log::info!("Logged out");
        self.page = Page::Login;
        self.page
    }
}
