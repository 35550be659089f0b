use connect_four::error::MoveError;
use connect_four::game::{Cell, GameController, GameStatus, Player, Position};

fn play(game: &mut GameController, columns: &[usize]) {
    for &col in columns {
        game.apply_move(col).unwrap();
    }
}

#[test]
fn vertical_win_in_first_column() {
    let mut game = GameController::new();
    play(&mut game, &[0, 6, 0, 6, 0, 6]);
    assert_eq!(game.status(), GameStatus::InProgress);

    let result = game.apply_move(0).unwrap();
    assert_eq!(result.player, Player::One);
    assert_eq!(result.row, 2);
    assert_eq!(result.status, GameStatus::Won(Player::One));

    let line = result.winning_line.expect("winning line");
    let mut rows: Vec<usize> = line.iter().map(|p| p.row).collect();
    rows.sort_unstable();
    assert_eq!(rows, vec![2, 3, 4, 5]);
    assert!(line.iter().all(|p| p.column == 0));
    assert_eq!(game.winning_line(), Some(&line));
    assert_eq!(game.status_message(), "Player 1 Wins!!!");
}

#[test]
fn full_board_without_a_line_is_a_tie() {
    let moves = [
        1, 3, 1, 1, 1, 1, 1, 3, 5, 2, 3, 0, 4, 3, 2, 5, 5, 2, 6, 0, 6, 4, 0, 0, 0, 4, 2, 6, 3, 0,
        5, 4, 2, 2, 4, 4, 6, 5, 5, 6, 6, 3,
    ];
    assert_eq!(moves.len(), 42);

    let mut game = GameController::new();
    let (last, rest) = moves.split_last().unwrap();
    for &col in rest {
        let result = game.apply_move(col).unwrap();
        assert_eq!(result.status, GameStatus::InProgress);
    }

    let result = game.apply_move(*last).unwrap();
    assert_eq!(result.status, GameStatus::Tied);
    assert_eq!(result.winning_line, None);
    assert!(game.board().is_full());
    assert_eq!(game.status_message(), "Tie Game");
    assert!(game.legal_columns().is_empty());
}

#[test]
fn win_on_the_last_empty_cell_beats_a_tie() {
    let moves = [
        2, 2, 4, 5, 3, 3, 6, 1, 1, 6, 0, 2, 5, 1, 5, 6, 3, 3, 3, 6, 6, 3, 2, 5, 2, 2, 4, 0, 6, 4,
        0, 0, 4, 5, 5, 0, 1, 1, 4, 1, 0, 4,
    ];
    let mut game = GameController::new();
    let (last, rest) = moves.split_last().unwrap();
    for &col in rest {
        game.apply_move(col).unwrap();
    }

    let result = game.apply_move(*last).unwrap();
    assert!(game.board().is_full());
    assert_eq!(result.status, GameStatus::Won(Player::Two));
    assert_eq!(
        result.winning_line,
        Some([
            Position::new(0, 1),
            Position::new(0, 2),
            Position::new(0, 3),
            Position::new(0, 4),
        ])
    );
}

#[test]
fn terminal_game_rejects_every_move_without_mutating() {
    let mut game = GameController::new();
    play(&mut game, &[0, 6, 0, 6, 0, 6, 0]);

    let snapshot = game.clone();
    for col in 0..game.columns() {
        assert_eq!(game.apply_move(col), Err(MoveError::GameOver));
    }
    assert_eq!(game, snapshot);
}

#[test]
fn full_column_is_rejected_and_turn_is_kept() {
    let mut game = GameController::new();
    play(&mut game, &[2, 2, 2, 2, 2, 2]);
    assert!(game.is_column_full(2));
    assert_eq!(game.current_player(), Player::One);

    let snapshot = game.clone();
    assert_eq!(game.apply_move(2), Err(MoveError::ColumnFull { column: 2 }));
    assert_eq!(game, snapshot);

    let result = game.apply_move(3).unwrap();
    assert_eq!(result.player, Player::One);
    assert_eq!(game.cell_state(5, 3), Cell::Player1);
}

#[test]
fn custom_dimensions_are_respected() {
    let mut game = GameController::with_dimensions(4, 5);
    assert_eq!((game.rows(), game.columns()), (4, 5));
    assert_eq!(
        game.apply_move(5),
        Err(MoveError::InvalidColumn {
            column: 5,
            columns: 5
        })
    );
    let result = game.apply_move(4).unwrap();
    assert_eq!(result.row, 3);
}
