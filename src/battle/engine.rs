use crate::battle::calculators::resolve_attack;
use crate::battle::state::{BattleEvent, BattleOutcome, BattleReport, EventBus};
use crate::config::BattleConfig;
use crate::creature::Creature;
use crate::type_chart::TypeChart;
use tracing::{debug, info, warn};

/// A one-on-one fight between two borrowed creatures.
///
/// The battle never owns its combatants. It holds them mutably for as long
/// as it lives and writes damage straight into their HP, so the caller sees
/// the final state once the battle is dropped.
#[derive(Debug)]
pub struct Battle<'a> {
    first: &'a mut Creature,
    second: &'a mut Creature,
    chart: &'a TypeChart,
    config: BattleConfig,
}

impl<'a> Battle<'a> {
    /// `first` always attacks first.
    pub fn new(first: &'a mut Creature, second: &'a mut Creature, chart: &'a TypeChart) -> Self {
        Self::with_config(first, second, chart, BattleConfig::default())
    }

    pub fn with_config(
        first: &'a mut Creature,
        second: &'a mut Creature,
        chart: &'a TypeChart,
        config: BattleConfig,
    ) -> Self {
        Self {
            first,
            second,
            chart,
            config,
        }
    }

    pub fn first(&self) -> &Creature {
        &*self.first
    }

    pub fn second(&self) -> &Creature {
        &*self.second
    }

    /// Multipliers for (first -> second, second -> first).
    pub fn effectiveness(&self) -> (f64, f64) {
        (
            self.chart.effectiveness(self.first.typing(), self.second.typing()),
            self.chart.effectiveness(self.second.typing(), self.first.typing()),
        )
    }

    /// Runs the fight until one creature reaches zero HP or the round limit
    /// is hit.
    ///
    /// Multipliers are computed once up front. Each round the first creature
    /// strikes, then the second one strikes back if it is still standing.
    pub fn run(&mut self) -> BattleReport {
        let mut bus = EventBus::new();
        let (first_multiplier, second_multiplier) = self.effectiveness();

        info!(
            first = self.first.name(),
            second = self.second.name(),
            first_multiplier,
            second_multiplier,
            "battle started"
        );
        bus.push(BattleEvent::BattleStarted {
            first: self.first.name().to_string(),
            second: self.second.name().to_string(),
        });

        let mut rounds: u32 = 0;
        while self.first.health() > 0 && self.second.health() > 0 {
            if let Some(limit) = self.config.max_rounds {
                if rounds >= limit {
                    warn!(rounds, "round limit reached with both creatures standing");
                    bus.push(BattleEvent::RoundLimitReached { rounds });
                    return BattleReport {
                        outcome: BattleOutcome::Stalemate { rounds },
                        events: bus.into_events(),
                    };
                }
            }
            rounds = next_round(rounds);

            let event = resolve_attack(self.first, self.second, first_multiplier);
            debug!(round = rounds, "{}", event.format());
            bus.push(event);
            if self.second.health() == 0 {
                break;
            }

            let event = resolve_attack(self.second, self.first, second_multiplier);
            debug!(round = rounds, "{}", event.format());
            bus.push(event);
            if self.first.health() == 0 {
                break;
            }
        }

        // A creature that entered already at or below zero loses without a fight.
        let (winner, loser) = if self.first.is_defeated() {
            (self.second.name(), self.first.name())
        } else {
            (self.first.name(), self.second.name())
        };

        info!(winner, loser, rounds, "battle finished");
        bus.push(BattleEvent::CreatureDefeated {
            creature: loser.to_string(),
        });

        BattleReport {
            outcome: BattleOutcome::Defeated {
                winner: winner.to_string(),
                loser: loser.to_string(),
                rounds,
            },
            events: bus.into_events(),
        }
    }
}

/// The counter sticks at `u32::MAX` so an unbounded battle keeps looping.
fn next_round(rounds: u32) -> u32 {
    rounds.saturating_add(1)
}
