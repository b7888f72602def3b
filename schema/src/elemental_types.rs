use serde::{Deserialize, Serialize};
use strum::{Display, EnumCount, EnumIter, EnumString};

/// The closed set of elemental types a creature can carry.
///
/// Parsing goes through `FromStr` (derived by strum) and only accepts the
/// canonical label, e.g. `"Fire"`. Anything else is rejected.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    EnumCount,
)]
pub enum ElementalType {
    Steel,
    Water,
    Bug,
    Dragon,
    Electric,
    Ghost,
    Fire,
    Fairy,
    Ice,
    Fighting,
    Normal,
    Grass,
    Psychic,
    Rock,
    Dark,
    Ground,
    Poison,
    Flying,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn test_there_are_eighteen_types() {
        assert_eq!(ElementalType::COUNT, 18);
        assert_eq!(ElementalType::iter().count(), 18);
    }

    #[test]
    fn test_every_label_round_trips_through_display() {
        for element in ElementalType::iter() {
            let label = element.to_string();
            assert_eq!(ElementalType::from_str(&label), Ok(element));
        }
    }

    #[test]
    fn test_unknown_labels_are_rejected() {
        assert!(ElementalType::from_str("Dinosaur").is_err());
        assert!(ElementalType::from_str("fire").is_err());
        assert!(ElementalType::from_str("").is_err());
    }
}
