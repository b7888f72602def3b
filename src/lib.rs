// In: src/lib.rs

//! Pokemon Combat
//!
//! Validated creatures, an eighteen-type effectiveness chart and a
//! deterministic one-on-one battle loop, plus a small searchable catalog and
//! RON roster loading.

// --- MODULE DECLARATIONS ---
pub mod battle;
pub mod config;
pub mod creature;
pub mod errors;
pub mod pokedex;
pub mod roster;
pub mod type_chart;

// --- PUBLIC API RE-EXPORTS ---

// --- From the `schema` crate ---
pub use schema::{CreatureData, ElementalType};

// --- From this crate's modules (`src/`) ---
pub use battle::engine::Battle;
pub use battle::state::{BattleEvent, BattleOutcome, BattleReport, EventBus};
pub use config::BattleConfig;
pub use creature::{Creature, Size, Typing};
pub use pokedex::Pokedex;
pub use roster::{load_roster, parse_roster};
pub use type_chart::TypeChart;

// Crate-specific error and result types.
pub use errors::{ConfigError, RosterError, RosterResult, ValidationError, ValidationResult};
