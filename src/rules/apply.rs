//! Applying moves to positions.
//!
//! Moves are assumed to come from the generator. Applying a move that does
//! not belong to the position is a programming error and panics; the side
//! to move is never changed here (passing the turn is the caller's job).

use crate::core::{Move, MoveKind, MoveRoll, Position};

use super::regime::{classify, Regime};

/// Apply one move, returning the new position.
///
/// # Panics
///
/// If the origin is not occupied by the side to move, or a bear-off is
/// applied outside the bearing-off regime.
#[must_use]
pub fn apply_move(pos: &Position, mv: Move) -> Position {
    let side = pos.side_to_move();
    assert!(
        pos.point(mv.origin()).is_owned_by(side),
        "move {mv} starts from a point {side} does not occupy"
    );

    let mut next = *pos;
    match mv.kind() {
        MoveKind::Normal | MoveKind::BarEntry => {
            next.lift(mv.origin());

            let to = mv.target();
            let target = next.point(to);
            debug_assert!(!target.is_blocked_for(side), "move {mv} lands on a blocked point");

            if target.is_blot_of(side.opponent()) {
                let opponent = side.opponent();
                next.drop_checker(opponent.bar_index(), opponent);
                next.set_single(to, side);
            } else {
                next.drop_checker(to, side);
            }
        }
        MoveKind::BearOff => {
            assert_eq!(
                classify(pos),
                Regime::BearingOff,
                "bear-off {mv} applied outside the bearing-off regime"
            );
            next.lift(mv.origin());
        }
    }
    next
}

/// Apply every move of `roll` in order. The turn does not change.
#[must_use]
pub fn apply_move_roll(pos: &Position, roll: &MoveRoll) -> Position {
    roll.iter().fold(*pos, |acc, &mv| apply_move(&acc, mv))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Point, Side};

    #[test]
    fn test_normal_move() {
        let start = Position::starting(Side::First);
        let after = apply_move(&start, Move::normal(23, 17));

        assert_eq!(after.point(23).count, 1);
        assert_eq!(after.point(17), Point { count: 1, owner: Some(Side::First) });
        assert_eq!(after.side_to_move(), Side::First);
        // Input is untouched
        assert_eq!(start, Position::starting(Side::First));
    }

    #[test]
    fn test_making_a_point() {
        let start = Position::starting(Side::First);
        let roll: MoveRoll = [Move::normal(7, 4), Move::normal(5, 4)].into_iter().collect();
        let after = apply_move_roll(&start, &roll);

        assert_eq!(after.point(7).count, 2);
        assert_eq!(after.point(5).count, 4);
        assert!(after.point(4).is_made_by(Side::First));
    }

    #[test]
    fn test_four_moves_of_doubles() {
        let start = Position::starting(Side::Second);
        let roll: MoveRoll = std::iter::repeat(Move::normal(11, 17)).take(4).collect();
        let after = apply_move_roll(&start, &roll);

        assert_eq!(after.point(11).count, 1);
        assert_eq!(after.point(17), Point { count: 4, owner: Some(Side::Second) });
    }

    #[test]
    fn test_hit_sends_blot_to_bar() {
        let start = Position::empty(Side::First)
            .place(5, Side::First, 1)
            .place(3, Side::Second, 1)
            .place(10, Side::First, 14)
            .place(20, Side::Second, 14);
        let after = apply_move(&start, Move::normal(5, 3));

        assert_eq!(after.point(3), Point { count: 1, owner: Some(Side::First) });
        assert_eq!(after.point(5), Point::EMPTY);
        assert_eq!(after.bar_count(Side::Second), 1);
        assert_eq!(after.checkers(Side::Second), 15);
    }

    #[test]
    fn test_bar_entry() {
        let start = Position::starting(Side::Second)
            .place(16, Side::Second, 2)
            .with_bar(Side::Second, 1);
        let after = apply_move(&start, Move::enter(Side::Second, 0));

        assert_eq!(after.bar_count(Side::Second), 0);
        assert_eq!(after.point(0).count, 3);
    }

    #[test]
    fn test_bar_entry_hits() {
        let start = Position::starting(Side::First)
            .place(12, Side::First, 4)
            .place(23, Side::First, 1)
            .with_bar(Side::First, 2)
            .place(18, Side::Second, 1)
            .place(16, Side::Second, 7);
        let after = apply_move(&start, Move::enter(Side::First, 18));

        assert_eq!(after.bar_count(Side::First), 1);
        assert_eq!(after.bar_count(Side::Second), 1);
        assert_eq!(after.point(18), Point { count: 1, owner: Some(Side::First) });
    }

    #[test]
    fn test_bear_off() {
        let start = Position::empty(Side::Second)
            .place(18, Side::Second, 2)
            .place(22, Side::Second, 13)
            .place(1, Side::First, 15);
        let after = apply_move(&start, Move::bear_off(22));

        assert_eq!(after.point(22).count, 12);
        assert_eq!(after.checkers(Side::Second), 14);
        assert_eq!(after.borne_off(Side::Second), 1);
    }

    #[test]
    #[should_panic(expected = "does not occupy")]
    fn test_wrong_owner_panics() {
        let start = Position::starting(Side::First);
        let _ = apply_move(&start, Move::normal(0, 6));
    }

    #[test]
    #[should_panic(expected = "outside the bearing-off regime")]
    fn test_bear_off_outside_regime_panics() {
        let start = Position::starting(Side::First);
        let _ = apply_move(&start, Move::bear_off(5));
    }
}
