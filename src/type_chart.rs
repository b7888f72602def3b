use crate::creature::Typing;
use schema::ElementalType;
use std::collections::HashMap;
use std::sync::LazyLock;

use ElementalType::*;

/// Attacker, the types it hits for double damage, the types that resist it.
type Matchup = (ElementalType, &'static [ElementalType], &'static [ElementalType]);

const STANDARD_MATCHUPS: &[Matchup] = &[
    (Steel, &[Ice, Rock, Fairy], &[Steel, Fire, Electric, Water]),
    (Water, &[Fire, Ground, Rock], &[Water, Grass, Dragon]),
    (
        Bug,
        &[Grass, Psychic, Dark],
        &[Flying, Fire, Fighting, Fairy, Poison, Ghost, Steel],
    ),
    (Dragon, &[Dragon], &[Steel]),
    (Electric, &[Flying, Water], &[Grass, Electric, Dragon]),
    (Ghost, &[Psychic, Ghost], &[Dark]),
    (Fire, &[Grass, Ice, Bug, Steel], &[Water, Fire, Rock, Dragon]),
    (Fairy, &[Rock, Dragon, Dark], &[Fire, Poison, Steel]),
    (Ice, &[Flying, Grass, Ground, Dragon], &[Ice, Water, Fire, Steel]),
    (
        Fighting,
        &[Ice, Normal, Rock, Dark, Steel],
        &[Flying, Bug, Fairy, Psychic, Poison],
    ),
    (Normal, &[], &[Rock, Steel]),
    (
        Grass,
        &[Water, Rock, Ground],
        &[Flying, Grass, Bug, Fire, Dragon, Poison, Steel],
    ),
    (Psychic, &[Fighting, Poison], &[Fairy, Steel]),
    (Rock, &[Ice, Flying, Bug, Fire], &[Ground, Fighting, Steel]),
    (Dark, &[Psychic, Ghost], &[Fairy, Fighting, Dark]),
    (Ground, &[Electric, Rock, Fire, Poison, Steel], &[Bug, Grass]),
    (Poison, &[Grass, Fairy], &[Rock, Ground, Poison, Ghost]),
    (Flying, &[Grass, Bug, Fighting], &[Electric, Rock, Steel]),
];

const SUPER_EFFECTIVE: f64 = 2.0;
const NOT_VERY_EFFECTIVE: f64 = 0.5;
const NEUTRAL: f64 = 1.0;

static STANDARD_CHART: LazyLock<TypeChart> = LazyLock::new(TypeChart::from_standard_matchups);

/// Attacking type -> defending type -> damage multiplier.
///
/// Pairs with no entry are neutral. A chart is never modified once built;
/// battles borrow it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TypeChart {
    entries: HashMap<ElementalType, HashMap<ElementalType, f64>>,
}

impl TypeChart {
    /// A chart where every matchup is neutral.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The shared eighteen-type chart, built on first use.
    pub fn standard() -> &'static TypeChart {
        &STANDARD_CHART
    }

    fn from_standard_matchups() -> Self {
        STANDARD_MATCHUPS
            .iter()
            .fold(Self::empty(), |chart, (attacking, strong, weak)| {
                let chart = strong.iter().fold(chart, |chart, defending| {
                    chart.with_entry(*attacking, *defending, SUPER_EFFECTIVE)
                });
                weak.iter().fold(chart, |chart, defending| {
                    chart.with_entry(*attacking, *defending, NOT_VERY_EFFECTIVE)
                })
            })
    }

    /// Adds or replaces a single matchup.
    pub fn with_entry(mut self, attacking: ElementalType, defending: ElementalType, multiplier: f64) -> Self {
        self.entries
            .entry(attacking)
            .or_default()
            .insert(defending, multiplier);
        self
    }

    /// The raw multiplier for one attacking type against one defending type.
    pub fn multiplier(&self, attacking: ElementalType, defending: ElementalType) -> f64 {
        self.entries
            .get(&attacking)
            .and_then(|row| row.get(&defending))
            .copied()
            .unwrap_or(NEUTRAL)
    }

    /// Combined multiplier for an attacker's types against a defender's types.
    ///
    /// Every attacker type is applied against the defender's primary type and,
    /// if there is one, its secondary type. The product is rounded to the
    /// nearest integer at the end, so a lone resistance (0.5) counts as
    /// neutral and a double resistance (0.25) wipes out the damage entirely.
    pub fn effectiveness(&self, attacker: Typing, defender: Typing) -> f64 {
        let product: f64 = attacker
            .iter()
            .map(|attacking| {
                defender
                    .iter()
                    .map(|defending| self.multiplier(attacking, defending))
                    .product::<f64>()
            })
            .product();

        product.round()
    }
}
