//! Single-die move generation.
//!
//! Given a position and one die value, list every atomic move the side to
//! move could make with that die under the current regime. An empty result
//! is not an error; it means the die cannot be used.

use smallvec::SmallVec;

use crate::core::{Move, Position, Side};

use super::regime::{classify, Regime};

/// Moves available for one die. Inline capacity covers every legal case
/// without spilling (at most 15 origins plus one bear-off).
pub type DieMoves = SmallVec<[Move; 16]>;

/// All legal moves for `die` in `pos`.
///
/// A value outside `1..=6` is not a die and yields no moves.
#[must_use]
pub fn moves_for_die(pos: &Position, die: u8) -> DieMoves {
    if !(1..=6).contains(&die) {
        return DieMoves::new();
    }
    let side = pos.side_to_move();

    match classify(pos) {
        Regime::GameOver => DieMoves::new(),
        Regime::BarEntry => entry_move(pos, side, die).into_iter().collect(),
        Regime::Normal => point_moves(pos, side, die),
        Regime::BearingOff => {
            let mut moves = point_moves(pos, side, die);
            moves.extend(bear_off_moves(pos, side, die));
            moves
        }
    }
}

/// The single bar entry for `die`, unless the entry point is blocked.
fn entry_move(pos: &Position, side: Side, die: u8) -> Option<Move> {
    let entry = side.entry_point(die);
    (!pos.point(entry).is_blocked_for(side)).then(|| Move::enter(side, entry))
}

/// Point-to-point moves that stay on the board and avoid blocked points.
fn point_moves(pos: &Position, side: Side, die: u8) -> DieMoves {
    pos.occupied_by(side)
        .filter_map(|(from, _)| {
            let to = side.advance(from, die)?;
            (!pos.point(to).is_blocked_for(side)).then_some(Move::normal(from, to))
        })
        .collect()
}

/// Bear-off moves: the checker exactly `die` pips out, and the farthest
/// checker when the die overshoots it. At most one move per origin.
fn bear_off_moves(pos: &Position, side: Side, die: u8) -> DieMoves {
    let mut moves = DieMoves::new();

    let exact = side.point_at_pips(die as usize);
    if pos.point(exact).is_owned_by(side) {
        moves.push(Move::bear_off(exact));
    }

    if let Some(farthest) = pos.farthest_point(side) {
        if die as usize >= side.pips_to_exit(farthest) && farthest != exact {
            moves.push(Move::bear_off(farthest));
        }
    }

    moves
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::MoveKind;

    fn sorted(mut moves: DieMoves) -> Vec<Move> {
        moves.sort_by_key(|m| (m.origin(), m.target()));
        moves.into_vec()
    }

    #[test]
    fn test_opening_six_for_first() {
        let pos = Position::starting(Side::First);
        let moves = sorted(moves_for_die(&pos, 6));

        // The checkers on point 5 would run off the board
        assert_eq!(
            moves,
            vec![Move::normal(7, 1), Move::normal(12, 6), Move::normal(23, 17)]
        );
    }

    #[test]
    fn test_blocked_destination() {
        // Second holds point 11 with five checkers
        let pos = Position::starting(Side::First);
        let moves = moves_for_die(&pos, 1);
        assert!(moves.iter().all(|m| m.target() != 11));
        assert!(!moves.contains(&Move::normal(12, 11)));
        assert!(moves.contains(&Move::normal(23, 22)));
    }

    #[test]
    fn test_hittable_destination_is_legal() {
        let pos = Position::empty(Side::Second)
            .place(2, Side::Second, 1)
            .place(5, Side::First, 1)
            .place(10, Side::First, 14)
            .place(20, Side::Second, 14);
        let moves = moves_for_die(&pos, 3);
        assert!(moves.contains(&Move::normal(2, 5)));
    }

    #[test]
    fn test_bar_entry_single_move() {
        let pos = Position::starting(Side::First)
            .place(23, Side::First, 1)
            .with_bar(Side::First, 1);

        // die 6 enters on point 18, held by Second
        assert!(moves_for_die(&pos, 6).is_empty());

        // die 2 enters on point 22, open
        let moves = moves_for_die(&pos, 2);
        assert_eq!(moves.as_slice(), &[Move::enter(Side::First, 22)]);
        assert_eq!(moves[0].kind(), MoveKind::BarEntry);
    }

    #[test]
    fn test_bar_entry_onto_blot() {
        let pos = Position::starting(Side::Second)
            .place(0, Side::Second, 1)
            .with_bar(Side::Second, 1)
            .place(3, Side::First, 1)
            .place(5, Side::First, 4);
        let moves = moves_for_die(&pos, 4);
        assert_eq!(moves.as_slice(), &[Move::enter(Side::Second, 3)]);
    }

    #[test]
    fn test_bear_off_exact() {
        let pos = Position::empty(Side::First)
            .place(0, Side::First, 5)
            .place(3, Side::First, 10)
            .place(20, Side::Second, 15);
        assert_eq!(moves_for_die(&pos, 4).as_slice(), &[Move::bear_off(3)]);

        // A 3 only moves inside the home board: point 2 is empty and a
        // checker still sits 4 pips out
        assert_eq!(moves_for_die(&pos, 3).as_slice(), &[Move::normal(3, 0)]);
    }

    #[test]
    fn test_bear_off_overshoot() {
        // Farthest checker is 3 pips out; a 4 bears it off
        let pos = Position::empty(Side::First)
            .place(2, Side::First, 2)
            .place(0, Side::First, 13)
            .place(12, Side::Second, 15);
        let moves = moves_for_die(&pos, 4);
        assert_eq!(moves.as_slice(), &[Move::bear_off(2)]);
    }

    #[test]
    fn test_no_overshoot_when_farther_checker_exists() {
        let pos = Position::empty(Side::Second)
            .place(18, Side::Second, 1) // 6 pips
            .place(22, Side::Second, 14) // 2 pips
            .place(5, Side::First, 15);
        let moves = sorted(moves_for_die(&pos, 4));
        // 4-pip point is empty and a 6-pip checker remains: no bear-off
        assert!(moves.iter().all(|m| m.kind() == MoveKind::Normal));
        assert_eq!(moves, vec![Move::normal(18, 22)]);
    }

    #[test]
    fn test_game_over_has_no_moves() {
        let pos = Position::empty(Side::First).place(3, Side::First, 2);
        for die in 1..=6 {
            assert!(moves_for_die(&pos, die).is_empty());
        }
    }

    #[test]
    fn test_out_of_range_die_has_no_moves() {
        let normal = Position::starting(Side::First);
        let bearing_off = Position::empty(Side::First)
            .place(2, Side::First, 3)
            .place(0, Side::First, 12)
            .place(23, Side::Second, 15);

        for pos in [normal, bearing_off] {
            assert!(!moves_for_die(&pos, 1).is_empty());
            for die in [0, 7, 255] {
                assert!(moves_for_die(&pos, die).is_empty(), "die {die}");
            }
        }
    }
}
