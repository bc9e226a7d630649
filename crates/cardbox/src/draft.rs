//! Persistence of the working card between CLI invocations.
//!
//! The editor mutates a single record; between runs it lives as a pretty
//! JSON file in the user data directory. A missing or corrupt draft falls
//! back to a default card rather than failing the command.

use std::path::Path;

use tracing::{debug, warn};

use crate::card::ContactCard;
use crate::error::{Error, Result};

/// Load the working card from the given path.
///
/// A missing file yields a default card. A corrupt file is logged and
/// also yields a default card; the next save overwrites it.
///
/// # Errors
///
/// Returns an error only if the file exists but cannot be read.
pub fn load(path: impl AsRef<Path>) -> Result<ContactCard> {
    let path = path.as_ref();
    if !path.exists() {
        debug!("No draft at {}, starting fresh", path.display());
        return Ok(ContactCard::default());
    }

    let contents = std::fs::read_to_string(path)?;
    match serde_json::from_str(&contents) {
        Ok(card) => Ok(card),
        Err(e) => {
            warn!("Draft at {} is corrupt ({}), starting fresh", path.display(), e);
            Ok(ContactCard::default())
        }
    }
}

/// Save the working card to the given path, creating parent directories.
///
/// # Errors
///
/// Returns an error if the directories cannot be created or the file
/// cannot be written.
pub fn save(path: impl AsRef<Path>, card: &ContactCard) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.exists() {
            std::fs::create_dir_all(parent).map_err(|source| Error::DirectoryCreate {
                path: parent.to_path_buf(),
                source,
            })?;
        }
    }

    let contents = serde_json::to_string_pretty(card)?;
    std::fs::write(path, contents)?;
    debug!("Saved draft to {}", path.display());
    Ok(())
}

/// Remove the draft file if it exists.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be removed.
pub fn clear(path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    if path.exists() {
        std::fs::remove_file(path)?;
        debug!("Removed draft at {}", path.display());
    }
    Ok(())
}
