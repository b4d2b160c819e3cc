use tictactoe::{winner, winning_line, Board, Mark, LINES};

const XO: [Mark; 2] = [Mark::X, Mark::O];

#[test]
fn test_empty_board_has_no_winner() {
    assert_eq!(winning_line(&Board::empty()), None);
    assert_eq!(winner(&Board::empty()), None);
}

#[test]
fn test_diagonal_win_scenario() {
    // X at 0, 4, 8; O at 1, 2.
    let board = Board::project(XO, &[0, 1, 4, 2, 8]);
    assert_eq!(winning_line(&board), Some([0, 4, 8]));
    assert_eq!(winner(&board), Some(Mark::X));
}

#[test]
fn test_full_board_draw_has_no_winner() {
    let board = Board::project(XO, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);
    assert!(board.is_full());
    assert_eq!(winning_line(&board), None);
    assert_eq!(winner(&board), None);
}

#[test]
fn test_every_line_is_detected() {
    for line in LINES {
        // X takes the line; O plays two cells off it.
        let spare: Vec<usize> = (0..9).filter(|c| !line.contains(c)).collect();
        let moves = [line[0], spare[0], line[1], spare[1], line[2]];
        let board = Board::project(XO, &moves);
        assert_eq!(winning_line(&board), Some(line));
        assert_eq!(winner(&board), Some(Mark::X));
    }
}

#[test]
fn test_first_matching_line_wins_ties() {
    // X holds both the top row and the anti-diagonal; rows are checked
    // first.
    let board = Board::project(XO, &[0, 3, 1, 5, 2, 7, 4, 8, 6]);
    assert_eq!(board.mark_at(0), Some(Mark::X));
    assert_eq!(board.mark_at(6), Some(Mark::X));
    assert_eq!(winning_line(&board), Some([0, 1, 2]));
}

#[test]
fn test_relabel_symmetry() {
    // Swapping the marks leaves the winning cells unchanged.
    let moves = [0, 1, 4, 2, 8];
    let board = Board::project(XO, &moves);
    let relabeled = Board::project([Mark::O, Mark::X], &moves);
    assert_eq!(winning_line(&board), winning_line(&relabeled));
    assert_eq!(winner(&board), Some(Mark::X));
    assert_eq!(winner(&relabeled), Some(Mark::O));
}
