//! creds - Local command-line credential store
//!
//! Stores site credentials as a JSON file on local disk. Secrets are
//! generated with pwgen and stored base64-encoded (not encrypted).
//!
//! Commands:
//! - add: Add a credential (prompts for site, login, comment)
//! - remove <PATTERN>: Remove the single credential whose site matches
//! - get <PATTERN>: Show a credential with its secret decoded

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use creds::{ops, paths, CredStore, NewCredential, SecretGenerator};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "creds")]
#[command(about = "Local credential store - site/login/comment records with generated secrets")]
#[command(version)]
#[command(after_help = r#"STORAGE:
    Credentials live in one JSON file (default ~/.creds/store.json),
    created with owner-only permissions. Secrets are base64-encoded,
    not encrypted - protect the store file accordingly.

PATTERNS:
    remove and get take a regular expression matched anywhere inside
    the site name. A pattern matching more than one site is an error;
    anchor the pattern (^site$) to disambiguate."#)]
struct Cli {
    /// Store file to use instead of the default
    #[arg(short, long, global = true)]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a credential (prompts for site, login, comment; secret is generated)
    Add,

    /// Remove the single credential whose site matches the pattern
    Remove {
        /// Regular expression matched against site names
        pattern: String,
    },

    /// Show the single credential whose site matches, with its secret decoded
    Get {
        /// Regular expression matched against site names
        pattern: String,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let store_path = match cli.file {
        Some(path) => path,
        None => paths::default_store_path().context("Failed to resolve default store path")?,
    };
    let store = CredStore::new(store_path);

    match cli.command {
        Commands::Add => cmd_add(&store),
        Commands::Remove { pattern } => cmd_remove(&store, &pattern),
        Commands::Get { pattern } => cmd_get(&store, &pattern),
    }
}

/// Print a prompt and read one trimmed line from stdin
fn prompt(label: &str) -> Result<String> {
    print!("{}", label);
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .context("Failed to read input")?;

    Ok(input.trim_end_matches(['\r', '\n']).to_string())
}

/// Add a credential
fn cmd_add(store: &CredStore) -> Result<()> {
    let new = NewCredential {
        site: prompt("Site: ")?,
        login: prompt("Login: ")?,
        comment: prompt("Comment: ")?,
    };

    let generator = SecretGenerator::default();
    let record = ops::add(store, &generator, new)?;

    // Never echo the secret back on add
    println!("success: Credential stored: {}", record.site);

    Ok(())
}

/// Remove a credential
fn cmd_remove(store: &CredStore, pattern: &str) -> Result<()> {
    let removed = ops::remove(store, pattern)?;
    println!("success: Credential removed: {}", removed.site);
    Ok(())
}

/// Show a credential with its secret decoded
fn cmd_get(store: &CredStore, pattern: &str) -> Result<()> {
    let revealed = ops::get(store, pattern)?;

    println!("Site: {}", revealed.site);
    println!("Login: {}", revealed.login);
    println!("Comment: {}", revealed.comment);
    println!("Secret: {}", revealed.secret);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse() {
        let cli = Cli::try_parse_from(["creds", "add"]).unwrap();
        assert!(matches!(cli.command, Commands::Add));
        assert!(cli.file.is_none());

        let cli = Cli::try_parse_from(["creds", "remove", "example"]).unwrap();
        if let Commands::Remove { pattern } = cli.command {
            assert_eq!(pattern, "example");
        } else {
            panic!("Expected Remove command");
        }

        let cli = Cli::try_parse_from(["creds", "get", "example"]).unwrap();
        if let Commands::Get { pattern } = cli.command {
            assert_eq!(pattern, "example");
        } else {
            panic!("Expected Get command");
        }
    }

    #[test]
    fn test_cli_file_flag() {
        let cli = Cli::try_parse_from(["creds", "-f", "/tmp/alt.json", "get", "example"]).unwrap();
        assert_eq!(cli.file, Some(PathBuf::from("/tmp/alt.json")));

        // Global flag also works after the subcommand
        let cli = Cli::try_parse_from(["creds", "get", "example", "--file", "/tmp/alt.json"])
            .unwrap();
        assert_eq!(cli.file, Some(PathBuf::from("/tmp/alt.json")));
    }

    #[test]
    fn test_cli_rejects_bad_shapes() {
        // Missing pattern
        assert!(Cli::try_parse_from(["creds", "remove"]).is_err());
        assert!(Cli::try_parse_from(["creds", "get"]).is_err());

        // Missing or unknown subcommand
        assert!(Cli::try_parse_from(["creds"]).is_err());
        assert!(Cli::try_parse_from(["creds", "frobnicate"]).is_err());

        // Extra positional
        assert!(Cli::try_parse_from(["creds", "get", "a", "b"]).is_err());
    }
}
