//! Session handling
//!
//! Login/survey navigation and the screening session that holds the
//! observations recorded while the survey page is open.

pub mod app;
pub mod navigation;
pub mod screening;

pub use app::ScreeningApp;
pub use navigation::{CredentialVerifier, DEFAULT_DEMO_PASSPHRASE, DemoPassphrase, Navigator, Page};
pub use screening::{Dashboard, ScreeningOutcome, ScreeningSession};
