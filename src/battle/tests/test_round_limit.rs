#[cfg(test)]
mod tests {
    use crate::battle::state::{BattleEvent, BattleOutcome};
    use crate::battle::tests::common::{damage_by, run_battle, run_battle_with_config, TestCreatureBuilder};
    use crate::config::{BattleConfig, DEFAULT_MAX_ROUNDS};
    use pretty_assertions::assert_eq;
    use schema::ElementalType;

    /// Fire/Water against itself multiplies out to 0.25, which rounds to 0
    /// in both directions.
    fn steamer(name: &str) -> crate::creature::Creature {
        TestCreatureBuilder::new(name)
            .with_types(ElementalType::Fire, Some(ElementalType::Water))
            .with_stats(50, 50, 50)
            .build()
    }

    #[test]
    fn test_mutual_zero_damage_hits_the_round_limit() {
        let mut first = steamer("First");
        let mut second = steamer("Second");

        let report = run_battle_with_config(&mut first, &mut second, BattleConfig::with_max_rounds(10));

        assert_eq!(report.outcome, BattleOutcome::Stalemate { rounds: 10 });
        assert_eq!(damage_by(&report, "First"), vec![0; 10]);
        assert_eq!(damage_by(&report, "Second"), vec![0; 10]);
        assert_eq!(
            report.events.last(),
            Some(&BattleEvent::RoundLimitReached { rounds: 10 })
        );
        assert_eq!(first.health(), 50);
        assert_eq!(second.health(), 50);
    }

    #[test]
    fn test_default_config_bounds_the_loop() {
        let mut first = steamer("First");
        let mut second = steamer("Second");

        let report = run_battle(&mut first, &mut second);

        assert_eq!(
            report.outcome,
            BattleOutcome::Stalemate {
                rounds: DEFAULT_MAX_ROUNDS
            }
        );
        // start + two attacks per round + the limit notice
        assert_eq!(report.events.len(), 2 + 2 * DEFAULT_MAX_ROUNDS as usize);
    }

    #[test]
    fn test_limit_is_checked_between_rounds() {
        let mut first = TestCreatureBuilder::new("First").build();
        let mut second = TestCreatureBuilder::new("Second").build();

        let report = run_battle_with_config(&mut first, &mut second, BattleConfig::with_max_rounds(1));

        assert_eq!(report.outcome, BattleOutcome::Stalemate { rounds: 1 });
        assert_eq!(first.health(), 50);
        assert_eq!(second.health(), 50);
    }

    #[test]
    fn test_zero_limit_stops_before_any_attack() {
        let mut first = TestCreatureBuilder::new("First").build();
        let mut second = TestCreatureBuilder::new("Second").build();

        let report = run_battle_with_config(&mut first, &mut second, BattleConfig::with_max_rounds(0));

        assert_eq!(report.attacks().count(), 0);
        assert_eq!(report.outcome, BattleOutcome::Stalemate { rounds: 0 });
    }

    #[test]
    fn test_battle_that_finishes_in_time_is_not_a_stalemate() {
        let mut first = TestCreatureBuilder::new("First").build();
        let mut second = TestCreatureBuilder::new("Second").build();

        let report = run_battle_with_config(&mut first, &mut second, BattleConfig::with_max_rounds(2));

        assert_eq!(report.outcome.winner(), Some("First"));
    }

    #[test]
    fn test_unbounded_config_still_finishes_a_decisive_battle() {
        let mut first = TestCreatureBuilder::new("First").with_stats(500, 10, 50).build();
        let mut second = TestCreatureBuilder::new("Second").with_stats(500, 10, 50).build();

        let report = run_battle_with_config(&mut first, &mut second, BattleConfig::unbounded());

        // 10 damage a hit: First lands its 50th hit before Second does.
        assert_eq!(report.outcome.winner(), Some("First"));
        assert_eq!(report.outcome.rounds(), 50);
    }
}
