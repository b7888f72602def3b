use std::path::PathBuf;
use thiserror::Error;

/// Reasons a creature refuses to be constructed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A creature carries exactly three stats: HP, ATK and DEF
    #[error("a creature must have exactly 3 stats, got {0}")]
    InvalidStatCount(usize),
    /// Every stat must be a positive integer
    #[error("stat #{index} must be a positive integer, got {value}")]
    InvalidStatValue { index: usize, value: i64 },
    /// The stats are individually valid but their total does not fit in an i64
    #[error("stat total overflows: {stats:?}")]
    StatTotalOverflow { stats: [i64; 3] },
    /// Weight and height must both be positive integers
    #[error("weight and height must be positive integers, got ({weight}, {height})")]
    InvalidSize { weight: i64, height: i64 },
    /// The label is not one of the eighteen elemental types
    #[error("unknown elemental type: {0:?}")]
    InvalidType(String),
    /// A roster entry listed no types, or more than two
    #[error("a creature must have one or two types, got {0}")]
    InvalidTypeCount(usize),
    #[error("a creature must have a non-empty name")]
    EmptyName,
}

/// Errors raised while loading a roster file.
#[derive(Debug, Error)]
pub enum RosterError {
    #[error("failed to read roster {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed roster: {0}")]
    Parse(#[from] ron::error::SpannedError),
    #[error("invalid creature {name:?}: {source}")]
    Invalid {
        name: String,
        #[source]
        source: ValidationError,
    },
}

/// Errors raised while loading a battle configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed config: {0}")]
    Parse(#[from] ron::error::SpannedError),
}

/// Type alias for Results using ValidationError
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Type alias for Results using RosterError
pub type RosterResult<T> = Result<T, RosterError>;
