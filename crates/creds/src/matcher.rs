//! Site pattern matching
//!
//! Patterns are regular expressions tested with an unanchored search, so a
//! pattern matches when it occurs anywhere inside the site name ("x"
//! matches both "x" and "x2"). Explicit anchors still work.

use regex::Regex;

use crate::error::StoreError;
use crate::record::CredentialRecord;

/// Find the indices of all records whose site matches `pattern`.
///
/// The pattern is compiled first; an invalid pattern fails before any
/// matching is attempted. Indices come back in original sequence order;
/// zero, one, or many may match.
pub fn find_matches(
    records: &[CredentialRecord],
    pattern: &str,
) -> Result<Vec<usize>, StoreError> {
    let re = Regex::new(pattern)?;

    Ok(records
        .iter()
        .enumerate()
        .filter(|(_, record)| re.is_match(&record.site))
        .map(|(i, _)| i)
        .collect())
}

/// Site names for a set of matched indices, for ambiguity reporting
pub fn matched_sites(records: &[CredentialRecord], indices: &[usize]) -> Vec<String> {
    indices.iter().map(|&i| records[i].site.clone()).collect()
}
