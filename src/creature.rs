use crate::errors::{ValidationError, ValidationResult};
use schema::{CreatureData, ElementalType};
use serde::{Deserialize, Serialize};
use std::fmt;

const HEALTH: usize = 0;
const ATTACK: usize = 1;
const DEFENSE: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Size {
    pub weight: i64,
    pub height: i64,
}

/// One primary type and an optional secondary type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Typing {
    pub primary: ElementalType,
    pub secondary: Option<ElementalType>,
}

impl Typing {
    pub fn single(primary: ElementalType) -> Self {
        Self {
            primary,
            secondary: None,
        }
    }

    pub fn dual(primary: ElementalType, secondary: ElementalType) -> Self {
        Self {
            primary,
            secondary: Some(secondary),
        }
    }

    /// The primary type, followed by the secondary one if present.
    pub fn iter(&self) -> impl Iterator<Item = ElementalType> {
        std::iter::once(self.primary).chain(self.secondary)
    }

    pub fn contains(&self, element: ElementalType) -> bool {
        self.primary == element || self.secondary == Some(element)
    }
}

impl fmt::Display for Typing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.secondary {
            Some(secondary) => write!(f, "{} / {}", self.primary, secondary),
            None => write!(f, "{}", self.primary),
        }
    }
}

/// A battling creature.
///
/// Everything is validated once in the constructor. Afterwards the only way
/// to change a creature is [`Creature::set_health`], which the battle engine
/// uses to record damage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Creature {
    name: String,
    size: Size,
    typing: Typing,
    stats: [i64; 3], // HP, ATK, DEF
    total_stats: i64,
}

impl Creature {
    /// Builds a creature from raw values, parsing the type labels.
    ///
    /// Checks run in a fixed order: stat count, stat values, size, types and
    /// finally the name. The first failing check is the one reported.
    pub fn new(
        name: &str,
        size: (i64, i64),
        types: (&str, Option<&str>),
        stats: &[i64],
    ) -> ValidationResult<Self> {
        let stats = validate_stats(stats)?;
        let size = validate_size(size)?;
        let primary = parse_type(types.0)?;
        let secondary = types.1.map(parse_type).transpose()?;

        Self::assemble(
            name,
            size,
            Typing {
                primary,
                secondary,
            },
            stats,
        )
    }

    /// Builds a creature from already-typed elemental types.
    pub fn with_types(
        name: &str,
        size: (i64, i64),
        primary: ElementalType,
        secondary: Option<ElementalType>,
        stats: &[i64],
    ) -> ValidationResult<Self> {
        let stats = validate_stats(stats)?;
        let size = validate_size(size)?;

        Self::assemble(
            name,
            size,
            Typing {
                primary,
                secondary,
            },
            stats,
        )
    }

    fn assemble(name: &str, size: Size, typing: Typing, stats: [i64; 3]) -> ValidationResult<Self> {
        if name.trim().is_empty() {
            return Err(ValidationError::EmptyName);
        }

        Ok(Self {
            name: name.to_string(),
            size,
            typing,
            stats,
            total_stats: stats.iter().sum(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn typing(&self) -> Typing {
        self.typing
    }

    pub fn primary_type(&self) -> ElementalType {
        self.typing.primary
    }

    pub fn secondary_type(&self) -> Option<ElementalType> {
        self.typing.secondary
    }

    pub fn has_type(&self, element: ElementalType) -> bool {
        self.typing.contains(element)
    }

    /// A copy of HP, ATK and DEF. Mutating it has no effect on the creature.
    pub fn stats(&self) -> [i64; 3] {
        self.stats
    }

    /// Sum of the stats as they were at construction time.
    pub fn total_stats(&self) -> i64 {
        self.total_stats
    }

    pub fn health(&self) -> i64 {
        self.stats[HEALTH]
    }

    pub fn attack(&self) -> i64 {
        self.stats[ATTACK]
    }

    pub fn defense(&self) -> i64 {
        self.stats[DEFENSE]
    }

    /// Overwrites HP. Not validated: callers clamp to zero themselves.
    pub fn set_health(&mut self, value: i64) {
        self.stats[HEALTH] = value;
    }

    pub fn is_defeated(&self) -> bool {
        self.health() <= 0
    }
}

impl fmt::Display for Creature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}) HP:{} ATK:{} DEF:{}",
            self.name,
            self.typing,
            self.health(),
            self.attack(),
            self.defense()
        )
    }
}

impl TryFrom<CreatureData> for Creature {
    type Error = ValidationError;

    fn try_from(data: CreatureData) -> ValidationResult<Self> {
        let (primary, secondary) = match data.types.as_slice() {
            [primary] => (primary.as_str(), None),
            [primary, secondary] => (primary.as_str(), Some(secondary.as_str())),
            other => {
                // Stat problems still win over a bad type list, like in `new`.
                validate_stats(&data.stats)?;
                validate_size(data.size)?;
                return Err(ValidationError::InvalidTypeCount(other.len()));
            }
        };

        Creature::new(&data.name, data.size, (primary, secondary), &data.stats)
    }
}

fn validate_stats(stats: &[i64]) -> ValidationResult<[i64; 3]> {
    let stats: [i64; 3] = stats
        .try_into()
        .map_err(|_| ValidationError::InvalidStatCount(stats.len()))?;

    if let Some((index, &value)) = stats.iter().enumerate().find(|&(_, &value)| value <= 0) {
        return Err(ValidationError::InvalidStatValue { index, value });
    }

    // `total_stats` sums these once the creature is assembled.
    stats
        .iter()
        .try_fold(0i64, |total, &value| total.checked_add(value))
        .ok_or(ValidationError::StatTotalOverflow { stats })?;

    Ok(stats)
}

fn validate_size((weight, height): (i64, i64)) -> ValidationResult<Size> {
    if weight <= 0 || height <= 0 {
        return Err(ValidationError::InvalidSize { weight, height });
    }
    Ok(Size { weight, height })
}

fn parse_type(label: &str) -> ValidationResult<ElementalType> {
    label
        .parse()
        .map_err(|_| ValidationError::InvalidType(label.to_string()))
}
