use crate::creature::Creature;
use crate::errors::{RosterError, RosterResult};
use schema::CreatureData;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Parses a RON list of creature definitions and validates every entry.
///
/// Loading stops at the first invalid creature; the error names it.
pub fn parse_roster(text: &str) -> RosterResult<Vec<Creature>> {
    let entries: Vec<CreatureData> = ron::from_str(text)?;

    entries
        .into_iter()
        .map(|data| {
            let name = data.name.clone();
            Creature::try_from(data).map_err(|source| RosterError::Invalid { name, source })
        })
        .collect()
}

/// Reads and parses a roster file from disk.
pub fn load_roster(path: &Path) -> RosterResult<Vec<Creature>> {
    let text = fs::read_to_string(path).map_err(|source| RosterError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let creatures = parse_roster(&text)?;
    debug!(path = %path.display(), count = creatures.len(), "loaded roster");
    Ok(creatures)
}
