use serde::{Deserialize, Serialize};

/// A creature definition as it appears in a roster file.
///
/// Values are kept raw here. Type labels stay strings and numbers are not
/// range-checked, so that validation happens in exactly one place when the
/// definition is turned into a live creature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatureData {
    pub name: String,
    pub size: (i64, i64), // weight, height
    pub types: Vec<String>,
    pub stats: Vec<i64>, // HP, ATK, DEF
}
