// Pokemon Combat Schema - Shared type definitions
// This crate contains the closed enums and the on-disk data shapes that are
// shared between the pokemon-combat library and any tooling that produces
// roster files.

// Re-export the main types
pub use creature_data::*;
pub use elemental_types::*;

pub mod creature_data;
pub mod elemental_types;
