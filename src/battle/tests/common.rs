use crate::battle::engine::Battle;
use crate::battle::state::{BattleEvent, BattleReport};
use crate::config::BattleConfig;
use crate::creature::Creature;
use crate::type_chart::TypeChart;
use schema::ElementalType;

/// A builder for creating test creatures with common defaults.
///
/// # Example
/// ```ignore
/// let creature = TestCreatureBuilder::new("Charmander")
///     .with_types(ElementalType::Fire, None)
///     .with_stats(39, 52, 43)
///     .build();
/// ```
pub struct TestCreatureBuilder {
    name: String,
    primary: ElementalType,
    secondary: Option<ElementalType>,
    stats: [i64; 3],
    current_hp: Option<i64>,
}

impl TestCreatureBuilder {
    /// Creates a Normal-type builder with 100 HP / 50 ATK / 50 DEF.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            primary: ElementalType::Normal,
            secondary: None,
            stats: [100, 50, 50],
            current_hp: None,
        }
    }

    pub fn with_types(mut self, primary: ElementalType, secondary: Option<ElementalType>) -> Self {
        self.primary = primary;
        self.secondary = secondary;
        self
    }

    pub fn with_stats(mut self, hp: i64, attack: i64, defense: i64) -> Self {
        self.stats = [hp, attack, defense];
        self
    }

    /// Overrides HP after construction, bypassing validation.
    pub fn with_hp(mut self, hp: i64) -> Self {
        self.current_hp = Some(hp);
        self
    }

    pub fn build(self) -> Creature {
        let mut creature = match Creature::with_types(
            &self.name,
            (10, 10),
            self.primary,
            self.secondary,
            &self.stats,
        ) {
            Ok(creature) => creature,
            Err(err) => panic!("Failed to build test creature {}: {}", self.name, err),
        };

        if let Some(hp) = self.current_hp {
            creature.set_health(hp);
        }

        creature
    }
}

/// Runs a battle on the standard chart with the default config.
pub fn run_battle(first: &mut Creature, second: &mut Creature) -> BattleReport {
    Battle::new(first, second, TypeChart::standard()).run()
}

/// Runs a battle on the standard chart with a custom config.
pub fn run_battle_with_config(first: &mut Creature, second: &mut Creature, config: BattleConfig) -> BattleReport {
    Battle::with_config(first, second, TypeChart::standard(), config).run()
}

/// Damage dealt by `attacker` in every attack it made, in order.
pub fn damage_by(report: &BattleReport, attacker_name: &str) -> Vec<i64> {
    report
        .attacks()
        .filter_map(|event| match event {
            BattleEvent::DamageDealt { attacker, damage, .. } if attacker == attacker_name => Some(*damage),
            _ => None,
        })
        .collect()
}

pub fn damage_event(attacker: &str, defender: &str, damage: i64, remaining_hp: i64) -> BattleEvent {
    BattleEvent::DamageDealt {
        attacker: attacker.to_string(),
        defender: defender.to_string(),
        damage,
        remaining_hp,
    }
}
