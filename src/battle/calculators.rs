use crate::battle::state::BattleEvent;
use crate::creature::Creature;

/// Base power every attack is scaled from.
pub const BASE_POWER: f64 = 50.0;

/// `round(50 * attack / defense * multiplier)`.
///
/// Defense is never zero for a constructed creature, so the division is safe.
pub fn calculate_damage(attacker: &Creature, defender: &Creature, multiplier: f64) -> i64 {
    let ratio = attacker.attack() as f64 / defender.defense() as f64;
    (BASE_POWER * ratio * multiplier).round() as i64
}

/// Subtracts `damage` from the defender's HP, flooring it at zero.
/// Returns the HP the defender is left with.
pub fn apply_damage(defender: &mut Creature, damage: i64) -> i64 {
    let remaining = (defender.health() - damage).max(0);
    defender.set_health(remaining);
    remaining
}

/// One attack from start to finish: compute, apply, describe.
pub fn resolve_attack(attacker: &Creature, defender: &mut Creature, multiplier: f64) -> BattleEvent {
    let damage = calculate_damage(attacker, defender, multiplier);
    let remaining_hp = apply_damage(defender, damage);

    BattleEvent::DamageDealt {
        attacker: attacker.name().to_string(),
        defender: defender.name().to_string(),
        damage,
        remaining_hp,
    }
}
