//! creds - Local command-line credential store
//!
//! Stores named site credentials as a single JSON file on local disk.
//! Secrets are produced by an external generator (pwgen by default) and
//! stored reversibly encoded (base64), not encrypted.
//!
//! Commands:
//! - add: Add a credential (prompts for site, login, comment)
//! - remove <PATTERN>: Remove the single credential whose site matches
//! - get <PATTERN>: Show a credential with its secret decoded

pub mod error;
pub mod matcher;
pub mod ops;
pub mod paths;
pub mod record;
pub mod secret;
pub mod store;

pub use error::StoreError;
pub use record::{CredentialRecord, NewCredential, RevealedCredential};
pub use secret::SecretGenerator;
pub use store::CredStore;
