//! Property tests over randomly played positions.

use proptest::prelude::*;
use rustc_hash::FxHashSet;

use rust_backgammon::core::{
    DiePair, GameRng, MoveKind, Position, Side, CHECKERS_PER_SIDE, NUM_PLAYABLE_POINTS,
};
use rust_backgammon::rules::{
    apply_move, classify, expand_roll, generate_move_rolls, moves_for_die, Regime,
};

/// Play `turns` random turns from the opening and return the position.
fn random_position(seed: u64, turns: usize) -> Position {
    let mut rng = GameRng::new(seed);
    let first = if seed % 2 == 0 { Side::First } else { Side::Second };
    let mut pos = Position::starting(first);

    for _ in 0..turns {
        if classify(&pos) == Regime::GameOver {
            break;
        }
        let dice = rng.roll_dice();
        let rolls = expand_roll(&pos, dice);
        if let Some((_, end)) = rng.choose(&rolls) {
            pos = *end;
        }
        pos = pos.flip_turn();
    }
    pos
}

fn die_pair() -> impl Strategy<Value = DiePair> {
    (1u8..=6, 1u8..=6).prop_map(|(a, b)| DiePair::new(a, b).unwrap())
}

fn assert_well_formed(pos: &Position) {
    for side in Side::ALL {
        assert_eq!(pos.checkers(side) + pos.borne_off(side), CHECKERS_PER_SIDE);
    }
    for point in &pos.points()[..NUM_PLAYABLE_POINTS] {
        assert_eq!(point.count == 0, point.owner.is_none());
    }
    assert!(pos.validate().is_ok());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn test_reachable_positions_are_well_formed(seed in any::<u64>(), turns in 0usize..120) {
        let pos = random_position(seed, turns);
        assert_well_formed(&pos);
    }

    #[test]
    fn test_single_moves_keep_position_well_formed(
        seed in any::<u64>(),
        turns in 0usize..120,
        die in 1u8..=6,
    ) {
        let pos = random_position(seed, turns);
        let mover = pos.side_to_move();
        let before = pos.checker_counts();

        for mv in moves_for_die(&pos, die) {
            let after = apply_move(&pos, mv);
            assert_well_formed(&after);
            prop_assert_eq!(after.side_to_move(), mover);

            // Hit checkers go to the bar; only a bear-off removes one
            let counts = after.checker_counts();
            let removed = usize::from(mv.kind() == MoveKind::BearOff);
            prop_assert_eq!(counts[mover], before[mover] - removed, "{}", mv);
            prop_assert_eq!(counts[mover.opponent()], before[mover.opponent()], "{}", mv);
        }
    }

    #[test]
    fn test_regime_matches_board(seed in any::<u64>(), turns in 0usize..120) {
        let pos = random_position(seed, turns);
        let mover = pos.side_to_move();
        let regime = classify(&pos);

        if pos.bar_count(mover) > 0 {
            prop_assert_eq!(regime, Regime::BarEntry);
        } else if Side::ALL.iter().any(|&side| pos.checkers(side) == 0) {
            prop_assert_eq!(regime, Regime::GameOver);
        } else if pos.all_home(mover) {
            prop_assert_eq!(regime, Regime::BearingOff);
        } else {
            prop_assert_eq!(regime, Regime::Normal);
        }
    }

    #[test]
    fn test_dice_order_does_not_matter(
        seed in any::<u64>(),
        turns in 0usize..120,
        dice in die_pair(),
    ) {
        let pos = random_position(seed, turns);
        let swapped = DiePair::new(dice.second(), dice.first()).unwrap();

        let ends = |pair| -> FxHashSet<Position> {
            expand_roll(&pos, pair).into_iter().map(|(_, end)| end).collect()
        };
        prop_assert_eq!(ends(dice), ends(swapped));
    }

    #[test]
    fn test_rolls_are_distinct_and_uniform_length(
        seed in any::<u64>(),
        turns in 0usize..120,
        dice in die_pair(),
    ) {
        let pos = random_position(seed, turns);
        let expanded = expand_roll(&pos, dice);

        let ends: FxHashSet<Position> = expanded.iter().map(|(_, end)| *end).collect();
        prop_assert_eq!(ends.len(), expanded.len());

        if let Some((first, _)) = expanded.first() {
            prop_assert!(expanded.iter().all(|(roll, _)| roll.len() == first.len()));
        }
    }

    #[test]
    fn test_doubles_use_every_playable_die(
        seed in any::<u64>(),
        turns in 0usize..120,
        die in 1u8..=6,
    ) {
        let pos = random_position(seed, turns);
        let dice = DiePair::new(die, die).unwrap();

        for (roll, end) in expand_roll(&pos, dice) {
            prop_assert!(roll.len() <= 4);
            // A shorter roll is only allowed when the die cannot be played
            // any further
            if roll.len() < 4 {
                prop_assert!(moves_for_die(&end, die).is_empty(), "{} could go on", roll);
            }
        }

        let rolls = generate_move_rolls(&pos, dice);
        if rolls.iter().any(|roll| roll.len() == 4) {
            prop_assert!(rolls.iter().all(|roll| roll.len() == 4));
        }
    }
}
