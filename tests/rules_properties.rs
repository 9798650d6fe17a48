//! Rule invariants checked over every reachable board
//! (and, where the rule is total, over every syntactically valid board)

mod common;

use common::{all_boards, at, board, cells_changed};
use ttt_minimax::{
    Cell, Error, Player, actions, initial_state, player, result, terminal,
    tictactoe::reachable_boards, utility, winner,
};

fn count(b: &ttt_minimax::Board, cell: Cell) -> usize {
    b.rows().iter().flatten().filter(|&&c| c == cell).count()
}

mod turn_rule {
    use super::*;

    #[test]
    fn x_moves_iff_counts_are_equal() {
        for b in reachable_boards() {
            let equal = count(&b, Cell::X) == count(&b, Cell::O);
            assert_eq!(
                player(&b) == Player::X,
                equal,
                "turn rule violated on {}",
                b.encode()
            );
        }
    }

    #[test]
    fn initial_state_is_empty_with_x_to_move() {
        let b = initial_state();
        assert_eq!(count(&b, Cell::Empty), 9);
        assert_eq!(player(&b), Player::X);
        assert!(!terminal(&b));
    }
}

mod transition {
    use super::*;

    #[test]
    fn result_changes_exactly_one_cell_to_the_movers_mark() {
        for b in reachable_boards() {
            if terminal(&b) {
                continue;
            }
            let mover = player(&b).to_cell();
            let before = actions(&b);
            for &a in &before {
                let next = result(&b, a).expect("enumerated action is legal");
                assert_eq!(cells_changed(&b, &next), 1);
                assert_eq!(next.get(a), mover);
                assert_eq!(actions(&next).len(), before.len() - 1);
            }
        }
    }

    #[test]
    fn successors_cover_every_legal_action() {
        for b in all_boards() {
            let successors: Vec<_> = b.successors().collect();
            let listed: Vec<_> = successors.iter().map(|&(a, _)| a).collect();
            assert_eq!(listed, actions(&b));
            for (a, next) in successors {
                assert_eq!(result(&b, a).unwrap(), next);
            }
        }
    }

    #[test]
    fn result_leaves_input_untouched() {
        let b = board("X../.O./...");
        let copy = b;
        let _next = result(&b, at(2, 2)).unwrap();
        assert_eq!(b, copy);
    }

    #[test]
    fn result_rejects_occupied_cells() {
        for b in all_boards() {
            for a in ttt_minimax::Action::ALL {
                let outcome = result(&b, a);
                if b.get(a) == Cell::Empty {
                    assert!(outcome.is_ok());
                } else {
                    assert!(
                        matches!(outcome, Err(Error::IllegalMove { row, col }) if row == a.row() && col == a.col()),
                        "expected IllegalMove for {a} on {}",
                        b.encode()
                    );
                }
            }
        }
    }

    #[test]
    fn actions_have_no_duplicates_and_are_row_major() {
        for b in all_boards() {
            let list = actions(&b);
            assert!(list.windows(2).all(|w| w[0].index() < w[1].index()));
            assert_eq!(list.len(), count(&b, Cell::Empty));
        }
    }
}

mod terminal_classifier {
    use super::*;

    #[test]
    fn terminal_iff_winner_or_no_actions() {
        for b in all_boards() {
            assert_eq!(
                terminal(&b),
                winner(&b).is_some() || actions(&b).is_empty(),
                "terminal mismatch on {}",
                b.encode()
            );
        }
    }

    #[test]
    fn winner_checks_x_before_o() {
        // Both players have a line; only possible on an unreachable board
        let b = board("XXX/OOO/...");
        assert_eq!(winner(&b), Some(Player::X));
    }

    #[test]
    fn each_line_family_is_detected() {
        assert_eq!(winner(&board("X../.X./..X")), Some(Player::X));
        assert_eq!(winner(&board("..O/.O./O..")), Some(Player::O));
        assert_eq!(winner(&board(".../OOO/X.X")), Some(Player::O));
        assert_eq!(winner(&board(".X./OXO/.X.")), Some(Player::X));
        assert_eq!(winner(&board("XO./OX./...")), None);
    }

    #[test]
    fn full_board_without_line_is_a_draw() {
        let b = board("XOX/OXO/OXO");
        assert!(terminal(&b));
        assert_eq!(winner(&b), None);
        assert_eq!(utility(&b), 0);
    }
}

mod utility_function {
    use super::*;

    #[test]
    fn utility_is_zero_exactly_without_winner() {
        for b in reachable_boards().into_iter().filter(|b| terminal(b)) {
            let u = utility(&b);
            assert!((-1..=1).contains(&u));
            assert_eq!(u == 0, winner(&b).is_none());
            match winner(&b) {
                Some(Player::X) => assert_eq!(u, 1),
                Some(Player::O) => assert_eq!(u, -1),
                None => {}
            }
        }
    }

    #[test]
    fn utility_of_non_terminal_board_is_zero() {
        assert_eq!(utility(&initial_state()), 0);
    }
}
