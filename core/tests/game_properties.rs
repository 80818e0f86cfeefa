//! Property tests for the reveal state machine.
//!
//! Invariants covered:
//! - Repeating a reveal changes nothing.
//! - Won and Lost are terminal: later reveals leave the revealed set and outcome untouched.
//! - A game is won exactly on the last safe reveal and lost on the first mine.
//! - Duration is 0 until the game ends and the floored seconds between start and end after.
use std::cell::Cell as TimeCell;
use std::rc::Rc;

use chrono::{DateTime, TimeDelta, Utc};
use minefind_core::*;
use proptest::prelude::*;

fn safe_cells(board: &Board) -> Vec<Coord2> {
    board
        .iter()
        .filter(|(_, cell)| !cell.is_mine())
        .map(|(coords, _)| coords)
        .collect()
}

#[test]
fn eight_by_eight_is_won_on_the_55th_safe_reveal() {
    let board = RandomBoardGenerator::new(8).generate(Preset::Small.config());
    assert_eq!(board.mine_count(), 9);
    let safe = safe_cells(&board);
    assert_eq!(safe.len(), 55);

    let mut engine = GameEngine::new(board);
    for (i, &coords) in safe.iter().rev().enumerate() {
        let outcome = engine.reveal(coords).unwrap();
        if i + 1 < safe.len() {
            assert_eq!(outcome, Outcome::InProgress, "won early at reveal {}", i + 1);
        } else {
            assert_eq!(outcome, Outcome::Won);
        }
    }
    assert_eq!(engine.revealed_count(), 55);
    assert!(engine.ended_at().is_some());
}

#[test]
fn end_to_end_first_reveal() {
    let board = generate(8).unwrap();
    assert_eq!(board.mines().len(), 9);
    let corner_is_mine = board[(0, 0)].is_mine();

    let mut engine = GameEngine::new(board);
    let outcome = engine.reveal((0, 0)).unwrap();

    if corner_is_mine {
        assert_eq!(outcome, Outcome::Lost);
    } else {
        assert_eq!(outcome, Outcome::InProgress);
        assert_eq!(engine.revealed_count(), 1);
    }
}

#[test]
fn duration_floors_elapsed_seconds() {
    let time = Rc::new(TimeCell::new(DateTime::<Utc>::UNIX_EPOCH));
    let handle = time.clone();
    let board = Board::from_mine_coords(3, &[(1, 1)]).unwrap();
    let mut engine = GameEngine::with_clock(board, move || handle.get());

    time.set(time.get() + TimeDelta::milliseconds(1_500));
    engine.reveal((0, 0)).unwrap();
    assert_eq!(engine.duration(), 0);

    time.set(time.get() + TimeDelta::milliseconds(2_000));
    engine.reveal((1, 1)).unwrap();
    assert_eq!(engine.outcome(), Outcome::Lost);
    assert_eq!(engine.duration(), 3);
    assert_eq!(
        engine.ended_at().unwrap() - engine.started_at(),
        TimeDelta::milliseconds(3_500)
    );
}

proptest! {
    #[test]
    fn repeated_reveal_is_idempotent(seed in any::<u64>(), x in 0u8..9, y in 0u8..9) {
        let board = RandomBoardGenerator::new(seed).generate(Preset::Medium.config());
        let mut engine = GameEngine::new(board);

        let first = engine.reveal((x, y)).unwrap();
        let count = engine.revealed_count();
        let second = engine.reveal((x, y)).unwrap();

        prop_assert_eq!(first, second);
        prop_assert_eq!(engine.revealed_count(), count);
        prop_assert_eq!(count, 1);
    }

    #[test]
    fn mine_reveal_loses_immediately(
        seed in any::<u64>(),
        safe_reveals in 0usize..40,
        pick in any::<prop::sample::Index>(),
    ) {
        let board = RandomBoardGenerator::new(seed).generate(Preset::Small.config());
        let safe = safe_cells(&board);
        let mine = *pick.get(board.mines());
        let mut engine = GameEngine::new(board);

        for &coords in safe.iter().take(safe_reveals) {
            prop_assert_eq!(engine.reveal(coords).unwrap(), Outcome::InProgress);
        }
        prop_assert_eq!(engine.reveal(mine).unwrap(), Outcome::Lost);
        prop_assert_eq!(engine.triggered_mine(), Some(mine));
    }

    #[test]
    fn terminal_states_are_final(
        seed in any::<u64>(),
        size in 3u8..=10,
        moves in proptest::collection::vec((0u8..10, 0u8..10), 1..200),
    ) {
        let board = RandomBoardGenerator::new(seed).generate(GameConfig::new(size).unwrap());
        let mut engine = GameEngine::new(board);
        let mut finished: Option<(Outcome, CellCount)> = None;

        for (x, y) in moves {
            let coords = (x % size, y % size);
            let before = engine.revealed_count();
            let outcome = engine.reveal(coords).unwrap();

            match finished {
                Some((final_outcome, final_count)) => {
                    prop_assert_eq!(outcome, final_outcome);
                    prop_assert_eq!(engine.revealed_count(), final_count);
                }
                None => {
                    prop_assert!(engine.revealed_count() >= before);
                    prop_assert!(engine.revealed_count() <= before + 1);
                    if outcome.is_finished() {
                        finished = Some((outcome, engine.revealed_count()));
                    } else {
                        prop_assert_eq!(engine.duration(), 0);
                        prop_assert!(engine.ended_at().is_none());
                    }
                }
            }
        }
    }

    #[test]
    fn win_happens_exactly_at_last_safe_cell(seed in any::<u64>(), size in 1u8..=12) {
        let board = RandomBoardGenerator::new(seed).generate(GameConfig::new(size).unwrap());
        let safe = safe_cells(&board);
        let mut engine = GameEngine::new(board);

        for (i, &coords) in safe.iter().enumerate() {
            let outcome = engine.reveal(coords).unwrap();
            let expected = if i + 1 == safe.len() { Outcome::Won } else { Outcome::InProgress };
            prop_assert_eq!(outcome, expected);
        }
    }
}
