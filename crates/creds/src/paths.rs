//! Default store location

use std::fs;
use std::io;
use std::path::PathBuf;

use crate::error::StoreError;

/// Resolve the default store path, `~/.creds/store.json`, creating the
/// dotfile directory if needed. An explicit `--file` path bypasses this
/// entirely and is used exactly as given.
pub fn default_store_path() -> Result<PathBuf, StoreError> {
    let home = dirs::home_dir().ok_or_else(|| {
        StoreError::Io(io::Error::new(
            io::ErrorKind::NotFound,
            "home directory not found",
        ))
    })?;

    let dir = home.join(".creds");
    fs::create_dir_all(&dir)?;

    Ok(dir.join("store.json"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_path_shape() {
        let path = default_store_path().unwrap();
        assert!(path.ends_with(".creds/store.json"));
        assert!(path.parent().unwrap().is_dir());
    }
}
