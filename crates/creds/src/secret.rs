//! Secret generation and reversible encoding
//!
//! Secrets are obtained from an external generator program and stored
//! base64-encoded. The encoding guards against accidental terminal or log
//! leakage of the raw secret, not against a motivated attacker.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use std::process::Command;
use tracing::debug;

use crate::error::StoreError;

/// Length of secrets produced by the default generator invocation
pub const SECRET_LENGTH: usize = 24;

/// Encode a plaintext secret for storage
pub fn encode_secret(plaintext: &str) -> String {
    STANDARD.encode(plaintext.as_bytes())
}

/// Decode a stored secret back to plaintext
pub fn decode_secret(encoded: &str) -> Result<String, StoreError> {
    let bytes = STANDARD
        .decode(encoded)
        .map_err(|e| StoreError::Decode(format!("invalid base64: {}", e)))?;

    String::from_utf8(bytes).map_err(|e| StoreError::Decode(format!("not valid UTF-8: {}", e)))
}

/// External secret generator
///
/// Runs a program and treats its trimmed stdout as the plaintext secret.
/// The default is `pwgen -s -y -n 24 1`: one secure random secret drawn
/// from a character set without ambiguous symbols, exactly
/// [`SECRET_LENGTH`] characters long.
pub struct SecretGenerator {
    program: String,
    args: Vec<String>,
}

impl Default for SecretGenerator {
    fn default() -> Self {
        let length = SECRET_LENGTH.to_string();
        Self::new("pwgen", ["-s", "-y", "-n", length.as_str(), "1"])
    }
}

impl SecretGenerator {
    /// Create a generator for an arbitrary program and arguments
    pub fn new<I, S>(program: &str, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.to_string(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// Run the generator and return its trimmed stdout as the secret
    pub fn generate(&self) -> Result<String, StoreError> {
        debug!(program = %self.program, "running secret generator");

        let output = Command::new(&self.program)
            .args(&self.args)
            .output()
            .map_err(|e| StoreError::Generator(format!("{}: {}", self.program, e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(StoreError::Generator(format!(
                "{} exited with {}: {}",
                self.program,
                output.status,
                stderr.trim()
            )));
        }

        let secret = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if secret.is_empty() {
            return Err(StoreError::Generator(format!(
                "{} produced no output",
                self.program
            )));
        }

        Ok(secret)
    }
}
