use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub enum BattleEvent {
    BattleStarted {
        first: String,
        second: String,
    },
    DamageDealt {
        attacker: String,
        defender: String,
        damage: i64,
        remaining_hp: i64,
    },
    CreatureDefeated {
        creature: String,
    },
    RoundLimitReached {
        rounds: u32,
    },
}

impl BattleEvent {
    /// Formats the event into the line written to the battle log.
    pub fn format(&self) -> String {
        match self {
            BattleEvent::BattleStarted { first, second } => {
                format!("{} and {} enter the battle; {} attacks first", first, second, first)
            }
            BattleEvent::DamageDealt {
                attacker,
                defender,
                damage,
                remaining_hp,
            } => format!(
                "{} dealt {} damage; {} has {} HP left",
                attacker, damage, defender, remaining_hp
            ),
            BattleEvent::CreatureDefeated { creature } => format!("{} is defeated", creature),
            BattleEvent::RoundLimitReached { rounds } => format!(
                "Round limit of {} reached; the battle ends in a stalemate",
                rounds
            ),
        }
    }
}

/// How a battle ended.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub enum BattleOutcome {
    Defeated {
        winner: String,
        loser: String,
        rounds: u32,
    },
    /// Both creatures were still standing when the round limit ran out.
    Stalemate { rounds: u32 },
}

impl BattleOutcome {
    pub fn winner(&self) -> Option<&str> {
        match self {
            BattleOutcome::Defeated { winner, .. } => Some(winner),
            BattleOutcome::Stalemate { .. } => None,
        }
    }

    pub fn loser(&self) -> Option<&str> {
        match self {
            BattleOutcome::Defeated { loser, .. } => Some(loser),
            BattleOutcome::Stalemate { .. } => None,
        }
    }

    pub fn rounds(&self) -> u32 {
        match self {
            BattleOutcome::Defeated { rounds, .. } | BattleOutcome::Stalemate { rounds } => *rounds,
        }
    }
}

/// Everything a finished battle produced.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct BattleReport {
    pub outcome: BattleOutcome,
    pub events: Vec<BattleEvent>,
}

impl BattleReport {
    /// The human-readable battle log, one line per event.
    pub fn log_lines(&self) -> Vec<String> {
        self.events.iter().map(BattleEvent::format).collect()
    }

    /// Damage events only, in the order the attacks happened.
    pub fn attacks(&self) -> impl Iterator<Item = &BattleEvent> {
        self.events
            .iter()
            .filter(|event| matches!(event, BattleEvent::DamageDealt { .. }))
    }
}

/// Collects battle events in the order they happen.
#[derive(Debug, Clone, Default)]
pub struct EventBus {
    events: Vec<BattleEvent>,
}

impl EventBus {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn push(&mut self, event: BattleEvent) {
        self.events.push(event);
    }

    pub fn into_events(self) -> Vec<BattleEvent> {
        self.events
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}
