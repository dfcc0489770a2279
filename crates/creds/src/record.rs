//! Credential record types

use serde::{Deserialize, Serialize};

use crate::error::StoreError;
use crate::secret::{decode_secret, encode_secret};

/// One stored credential. Field declaration order is the on-disk key order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialRecord {
    /// Site name; not required to be unique
    pub site: String,
    /// Login name, free text
    pub login: String,
    /// Free text, may be empty
    pub comment: String,
    /// Base64-encoded plaintext secret. Encoded, not encrypted.
    pub secret: String,
}

/// The user-entered fields of a new credential. Never carries a secret;
/// secrets are always generated.
#[derive(Debug, Clone)]
pub struct NewCredential {
    pub site: String,
    pub login: String,
    pub comment: String,
}

/// A credential with its secret decoded back to plaintext
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealedCredential {
    pub site: String,
    pub login: String,
    pub comment: String,
    pub secret: String,
}

impl CredentialRecord {
    /// Build a record from user input plus a freshly generated plaintext
    /// secret, encoding the secret for storage.
    pub fn new(new: NewCredential, plaintext_secret: &str) -> Self {
        Self {
            site: new.site,
            login: new.login,
            comment: new.comment,
            secret: encode_secret(plaintext_secret),
        }
    }

    /// Decode the stored secret and expose all fields as plaintext
    pub fn reveal(&self) -> Result<RevealedCredential, StoreError> {
        Ok(RevealedCredential {
            site: self.site.clone(),
            login: self.login.clone(),
            comment: self.comment.clone(),
            secret: decode_secret(&self.secret)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_encodes_secret() {
        let new = NewCredential {
            site: "example.com".to_string(),
            login: "alice".to_string(),
            comment: String::new(),
        };

        let record = CredentialRecord::new(new, "hunter2");
        assert_eq!(record.site, "example.com");
        assert_ne!(record.secret, "hunter2");

        let revealed = record.reveal().unwrap();
        assert_eq!(revealed.login, "alice");
        assert_eq!(revealed.secret, "hunter2");
    }

    #[test]
    fn test_reveal_corrupt_secret() {
        let record = CredentialRecord {
            site: "example.com".to_string(),
            login: "alice".to_string(),
            comment: String::new(),
            secret: "not base64 at all!!!".to_string(),
        };

        let err = record.reveal().unwrap_err();
        assert!(matches!(err, StoreError::Decode(_)));
    }

    #[test]
    fn test_serialized_field_order() {
        let record = CredentialRecord {
            site: "a".to_string(),
            login: "b".to_string(),
            comment: "c".to_string(),
            secret: "ZA==".to_string(),
        };

        let json = serde_json::to_string(&record).unwrap();
        let site_pos = json.find("\"site\"").unwrap();
        let login_pos = json.find("\"login\"").unwrap();
        let comment_pos = json.find("\"comment\"").unwrap();
        let secret_pos = json.find("\"secret\"").unwrap();
        assert!(site_pos < login_pos && login_pos < comment_pos && comment_pos < secret_pos);
    }
}
