use memory_match::core::{stars_for, Board, MoveCounter, TurnOutcome, TurnResolver, TurnState};
use memory_match::types::{CardStatus, Difficulty, GameError};

/// Easy board where even positions carry picture 3 or 5 and odd ones 7 or 9.
fn easy_board() -> Board {
    Board::from_pairs(&[3, 7, 3, 7, 5, 9, 5, 9, 1, 2, 1, 2, 4, 6, 4, 6])
}

#[test]
fn test_pair_of_threes_scores_one_move_and_three_stars() {
    let mut board = easy_board();
    let mut turn = TurnResolver::new();
    let mut moves = MoveCounter::new();

    assert_eq!(turn.select(&mut board, 0), TurnOutcome::FirstRevealed(0));
    let outcome = turn.select(&mut board, 2);
    assert_eq!(outcome, TurnOutcome::Matched { first: 0, second: 2 });
    assert!(outcome.completes_turn());
    let count = moves.record_move();

    assert_eq!(board.status(0), Some(CardStatus::Matched));
    assert_eq!(board.status(2), Some(CardStatus::Matched));
    assert_eq!(count, 1);
    assert_eq!(stars_for(count, Difficulty::Easy), 3);
}

#[test]
fn test_adjacent_cards_of_different_pictures_mismatch() {
    let mut board = easy_board();
    let mut turn = TurnResolver::new();

    turn.select(&mut board, 0);
    assert_eq!(
        turn.select(&mut board, 1),
        TurnOutcome::Mismatch { first: 0, second: 1 }
    );
    assert_eq!(turn.state(), TurnState::Idle);
    // Both stay face up until the flip-back runs.
    assert_eq!(board.status(0), Some(CardStatus::Revealed));
    assert_eq!(board.status(1), Some(CardStatus::Revealed));
}

#[test]
fn test_matched_cards_are_permanent() {
    let mut board = easy_board();
    let mut turn = TurnResolver::new();
    turn.select(&mut board, 1);
    turn.select(&mut board, 3);

    // Re-selecting is ignored and the sweep leaves them alone.
    assert!(matches!(turn.select(&mut board, 1), TurnOutcome::Ignored(_)));
    turn.select(&mut board, 0);
    turn.select(&mut board, 4);
    let flipped = board.reset_unmatched_to_hidden();

    assert_eq!(flipped.as_slice(), &[0, 4]);
    assert_eq!(board.status(1), Some(CardStatus::Matched));
    assert_eq!(board.status(3), Some(CardStatus::Matched));
    assert_eq!(board.matched_count(), 2);
}

#[test]
fn test_board_complete_only_when_all_matched() {
    let mut board = Board::from_pairs(&[1, 1, 2, 2]);
    assert!(!board.is_complete());
    board.mark_matched(0, 1).unwrap();
    assert!(!board.is_complete());
    board.mark_matched(2, 3).unwrap();
    assert!(board.is_complete());

    assert!(!Board::new().is_complete());
}

#[test]
fn test_mark_matched_rejects_bad_pairs() {
    let mut board = Board::from_pairs(&[1, 2, 1, 2]);
    assert_eq!(board.mark_matched(0, 0), Err(GameError::SameCard(0)));
    assert_eq!(
        board.mark_matched(0, 1),
        Err(GameError::PairMismatch { first: 0, second: 1 })
    );
    assert_eq!(board.mark_matched(0, 9), Err(GameError::UnknownCard(9)));
    board.mark_matched(0, 2).unwrap();
    assert_eq!(board.mark_matched(2, 0), Err(GameError::AlreadyResolved(2)));
}

#[test]
fn test_star_table() {
    assert_eq!(stars_for(15, Difficulty::Easy), 3);
    assert_eq!(stars_for(16, Difficulty::Easy), 2);
    assert_eq!(stars_for(22, Difficulty::Easy), 2);
    assert_eq!(stars_for(23, Difficulty::Easy), 1);

    assert_eq!(stars_for(25, Difficulty::Hard), 3);
    assert_eq!(stars_for(26, Difficulty::Hard), 2);
    assert_eq!(stars_for(37, Difficulty::Hard), 2);
    assert_eq!(stars_for(38, Difficulty::Hard), 1);
}
