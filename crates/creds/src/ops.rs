//! Store operations: add, remove, get
//!
//! Each operation is one load, compute, save cycle against the on-disk
//! store (get omits the save). No state persists across invocations, so
//! each call is one transition applied to the file.

use tracing::debug;

use crate::error::StoreError;
use crate::matcher::{find_matches, matched_sites};
use crate::record::{CredentialRecord, NewCredential, RevealedCredential};
use crate::secret::SecretGenerator;
use crate::store::CredStore;

/// Generate a secret, append a new record, save. Returns the stored record.
///
/// A missing store file starts as the empty store; a corrupt one is an
/// error. The secret is never taken as input.
pub fn add(
    store: &CredStore,
    generator: &SecretGenerator,
    new: NewCredential,
) -> Result<CredentialRecord, StoreError> {
    let mut records = store.load_or_empty()?;

    let plaintext = generator.generate()?;
    let record = CredentialRecord::new(new, &plaintext);

    records.push(record.clone());
    store.save(&records)?;

    debug!(site = %record.site, "credential added");
    Ok(record)
}

/// Remove the single record whose site matches `pattern`.
///
/// Zero matches is `NotFound`; more than one is `Ambiguous` listing every
/// matched site. In both failure cases nothing is written and the store
/// file is left exactly as it was.
pub fn remove(store: &CredStore, pattern: &str) -> Result<CredentialRecord, StoreError> {
    let mut records = store.load_or_empty()?;
    let matches = find_matches(&records, pattern)?;

    match matches.as_slice() {
        [] => Err(StoreError::NotFound(pattern.to_string())),
        [index] => {
            // Vec::remove preserves the relative order of the rest
            let removed = records.remove(*index);
            store.save(&records)?;
            debug!(site = %removed.site, "credential removed");
            Ok(removed)
        }
        _ => Err(StoreError::Ambiguous {
            pattern: pattern.to_string(),
            sites: matched_sites(&records, &matches),
        }),
    }
}

/// Look up the single record whose site matches `pattern` and decode its
/// secret. Ambiguous matches decode nothing.
pub fn get(store: &CredStore, pattern: &str) -> Result<RevealedCredential, StoreError> {
    let records = store.load_or_empty()?;
    let matches = find_matches(&records, pattern)?;

    match matches.as_slice() {
        [] => Err(StoreError::NotFound(pattern.to_string())),
        [index] => records[*index].reveal(),
        _ => Err(StoreError::Ambiguous {
            pattern: pattern.to_string(),
            sites: matched_sites(&records, &matches),
        }),
    }
}
