//! Known counts of the Tic-Tac-Toe game tree

mod common;

use common::board;
use ttt_minimax::{
    Player,
    tictactoe::{GameOutcome, count_games, reachable_boards, reachable_from},
};

#[test]
fn reachable_board_counts() {
    let boards = reachable_boards();
    assert_eq!(boards.len(), 5478);

    let terminal = boards.iter().filter(|b| b.is_terminal()).count();
    assert_eq!(terminal, 958);

    assert!(boards.iter().all(|b| b.is_reachable()));
}

#[test]
fn complete_game_counts() {
    let counts = count_games(&ttt_minimax::initial_state());
    assert_eq!(counts.total(), 255_168);
    assert_eq!(counts.x_wins, 131_184);
    assert_eq!(counts.o_wins, 77_904);
    assert_eq!(counts.draws, 46_080);
}

#[test]
fn subtree_is_contained_in_full_tree() {
    let root = board("X../.O./...");
    let all: std::collections::HashSet<_> = reachable_boards().into_iter().collect();
    let sub = reachable_from(root);
    assert_eq!(sub[0], root);
    assert!(sub.iter().all(|b| all.contains(b)));
}

#[test]
fn terminal_outcomes_match_winner() {
    for b in reachable_boards().into_iter().filter(|b| b.is_terminal()) {
        match GameOutcome::of(&b) {
            Some(GameOutcome::Win(Player::X)) => assert_eq!(b.utility(), 1),
            Some(GameOutcome::Win(Player::O)) => assert_eq!(b.utility(), -1),
            Some(GameOutcome::Draw) => assert!(b.is_draw()),
            None => panic!("terminal board {} has no outcome", b.encode()),
        }
    }
}
