//! State machine tests: rejection reasons, rollback and bookkeeping.

use super::*;
use crate::board::{BoardBuilder, PieceState, SpecialMove};

fn sq(name: &str) -> Square {
    name.parse().expect("valid square")
}

fn play(game: &mut GameState, from: &str, to: &str) -> Move {
    game.apply_move(sq(from), sq(to), None)
        .unwrap_or_else(|e| panic!("{from} -> {to} should be legal: {e}"))
}

/// White bishop on e2 pinned to its king by a rook on e7; a moved black
/// knight sits on b5 within the bishop's reach.
fn pinned_bishop() -> GameState {
    let board = BoardBuilder::new()
        .piece(sq("e1"), Color::White, Piece::King)
        .piece(sq("e2"), Color::White, Piece::Bishop)
        .piece(sq("e7"), Color::Black, Piece::Rook)
        .piece(sq("a8"), Color::Black, Piece::King)
        .piece(sq("b5"), Color::Black, Piece::Knight)
        .moved(sq("b5"))
        .build();
    GameState::from_board(board, Color::White)
}

fn castling_board() -> BoardBuilder {
    BoardBuilder::new()
        .piece(sq("e1"), Color::White, Piece::King)
        .piece(sq("a1"), Color::White, Piece::Rook)
        .piece(sq("h1"), Color::White, Piece::Rook)
        .piece(sq("e8"), Color::Black, Piece::King)
}

#[test]
fn test_new_game_defaults() {
    let game = new_game("Alice", "Bob");
    assert_eq!(game.mover(), Color::White);
    assert_eq!(game.outcome(), Outcome::InProgress);
    assert!(game.history().is_empty());
    assert_eq!(game.current_player().name, "Alice");
    assert_eq!(game.player(Color::Black).name, "Bob");
    assert_eq!(game.snapshot()[7][4], Some((Piece::King, Color::White)));
    assert_eq!(game.snapshot()[1][0], Some((Piece::Pawn, Color::Black)));
    assert_eq!(game.snapshot()[4][4], None);
}

#[test]
fn test_initial_position_has_twenty_moves() {
    let game = new_game("w", "b");
    let moves = game.legal_moves();
    assert_eq!(moves.len(), 20);

    let pawn_moves = moves
        .iter()
        .filter(|m| game.board().piece_at(m.from).map(|p| p.kind) == Some(Piece::Pawn))
        .count();
    assert_eq!(pawn_moves, 16);
    assert_eq!(moves.len() - pawn_moves, 4);
}

#[test]
fn test_legal_moves_are_row_major() {
    let moves = new_game("w", "b").legal_moves();
    let keys: Vec<(Square, Square)> = moves.iter().map(|m| (m.from, m.to)).collect();
    let mut sorted = keys.clone();
    sorted.sort();
    assert_eq!(keys, sorted);
    assert_eq!(keys[0], (sq("a2"), sq("a4")));
}

#[test]
fn test_rejections_report_their_reason() {
    let mut game = new_game("w", "b");
    let before = game.clone();

    assert_eq!(
        game.apply_move(Square(8, 4), sq("e4"), None),
        Err(MoveError::InvalidSquare {
            square: Square(8, 4)
        })
    );
    assert_eq!(
        game.apply_move(sq("e2"), Square(4, -1), None),
        Err(MoveError::InvalidSquare {
            square: Square(4, -1)
        })
    );
    assert_eq!(
        game.apply_move(sq("e4"), sq("e5"), None),
        Err(MoveError::NoPieceAtSquare { square: sq("e4") })
    );
    assert_eq!(
        game.apply_move(sq("e7"), sq("e5"), None),
        Err(MoveError::WrongSideToMove {
            expected: Color::White,
            found: Color::Black
        })
    );
    assert_eq!(
        game.apply_move(sq("e2"), sq("e5"), None),
        Err(MoveError::IllegalGeometry {
            from: sq("e2"),
            to: sq("e5")
        })
    );
    assert_eq!(
        game.apply_move(sq("a1"), sq("a2"), None),
        Err(MoveError::IllegalGeometry {
            from: sq("a1"),
            to: sq("a2")
        })
    );
    assert_eq!(
        game.apply_move(sq("e1"), sq("g1"), None),
        Err(MoveError::CastlingBlocked {
            from: sq("e1"),
            to: sq("g1")
        })
    );

    assert_eq!(game, before);
}

#[test]
fn test_pinned_piece_cannot_expose_king() {
    let mut game = pinned_bishop();
    let before = game.clone();

    assert_eq!(
        game.apply_move(sq("e2"), sq("b5"), None),
        Err(MoveError::MoveLeavesKingInCheck {
            from: sq("e2"),
            to: sq("b5")
        })
    );
    assert_eq!(game, before);

    let knight = game.board().piece_at(sq("b5")).expect("knight restored");
    assert!(knight.has_moved);
    let bishop = game.board().piece_at(sq("e2")).expect("bishop restored");
    assert!(!bishop.has_moved);
}

#[test]
fn test_pinned_piece_may_move_along_the_pin() {
    let board = BoardBuilder::new()
        .piece(sq("e1"), Color::White, Piece::King)
        .piece(sq("e2"), Color::White, Piece::Rook)
        .piece(sq("e7"), Color::Black, Piece::Rook)
        .piece(sq("a8"), Color::Black, Piece::King)
        .build();
    let game = GameState::from_board(board, Color::White);

    let dests: Vec<Square> = game.legal_destinations(sq("e2")).into_iter().collect();
    assert_eq!(
        dests,
        vec![sq("e7"), sq("e6"), sq("e5"), sq("e4"), sq("e3")]
    );
}

#[test]
fn test_kingside_castling_moves_rook() {
    let mut game = GameState::from_board(castling_board().build(), Color::White);
    let mv = play(&mut game, "e1", "g1");

    assert_eq!(mv.special, SpecialMove::CastleKingside);
    assert_eq!(game.board().piece_at(sq("g1")).map(|p| p.kind), Some(Piece::King));
    assert_eq!(game.board().piece_at(sq("f1")).map(|p| p.kind), Some(Piece::Rook));
    assert!(game.board().is_empty(sq("h1")));
    assert!(game.board().piece_at(sq("f1")).is_some_and(|p| p.has_moved));
    assert_eq!(game.mover(), Color::Black);
}

#[test]
fn test_queenside_castling_moves_rook() {
    let mut game = GameState::from_board(castling_board().build(), Color::White);
    let mv = play(&mut game, "e1", "c1");

    assert_eq!(mv.special, SpecialMove::CastleQueenside);
    assert_eq!(game.board().piece_at(sq("c1")).map(|p| p.kind), Some(Piece::King));
    assert_eq!(game.board().piece_at(sq("d1")).map(|p| p.kind), Some(Piece::Rook));
    assert!(game.board().is_empty(sq("a1")));
}

#[test]
fn test_castling_blocked_by_history_and_pieces() {
    let cases = [
        castling_board().moved(sq("e1")),
        castling_board().moved(sq("h1")),
        castling_board().clear(sq("h1")),
        castling_board().piece(sq("g1"), Color::White, Piece::Knight),
        castling_board().piece(sq("h1"), Color::Black, Piece::Rook),
    ];

    for builder in cases {
        let mut game = GameState::from_board(builder.build(), Color::White);
        let before = game.clone();
        assert_eq!(
            game.apply_move(sq("e1"), sq("g1"), None),
            Err(MoveError::CastlingBlocked {
                from: sq("e1"),
                to: sq("g1")
            })
        );
        assert_eq!(game, before);
    }
}

#[test]
fn test_castling_requires_king_on_home_square() {
    let mut board = Board::empty();
    board.set_piece(sq("f1"), PieceState::new(Piece::King, Color::White));
    board.set_piece(sq("h1"), PieceState::new(Piece::Rook, Color::White));
    board.set_piece(sq("a8"), PieceState::new(Piece::King, Color::Black));
    let mut game = GameState::from_board(board, Color::White);
    let before = game.clone();

    assert_eq!(
        game.apply_move(sq("f1"), sq("h1"), None),
        Err(MoveError::CastlingBlocked {
            from: sq("f1"),
            to: sq("h1")
        })
    );
    assert_eq!(game, before);
    assert_eq!(
        game.board().piece_at(sq("h1")).map(|p| p.kind),
        Some(Piece::Rook)
    );
    assert!(!game.legal_destinations(sq("f1")).contains(&sq("h1")));
}

#[test]
fn test_castling_queenside_blocked_by_b_file_piece() {
    let board = castling_board()
        .piece(sq("b1"), Color::White, Piece::Knight)
        .build();
    let mut game = GameState::from_board(board, Color::White);
    assert!(matches!(
        game.apply_move(sq("e1"), sq("c1"), None),
        Err(MoveError::CastlingBlocked { .. })
    ));
}

#[test]
fn test_castling_through_or_into_check() {
    // In check, crossing an attacked f1, landing on an attacked g1.
    for attacker in ["e5", "f5", "g5"] {
        let board = castling_board()
            .piece(sq(attacker), Color::Black, Piece::Rook)
            .build();
        let mut game = GameState::from_board(board, Color::White);
        let before = game.clone();
        assert_eq!(
            game.apply_move(sq("e1"), sq("g1"), None),
            Err(MoveError::CastlingThroughCheck {
                from: sq("e1"),
                to: sq("g1")
            }),
            "rook on {attacker}"
        );
        assert_eq!(game, before);
    }
}

#[test]
fn test_attacked_b_file_does_not_stop_queenside_castling() {
    let board = castling_board()
        .piece(sq("b5"), Color::Black, Piece::Rook)
        .build();
    let mut game = GameState::from_board(board, Color::White);
    let mv = play(&mut game, "e1", "c1");
    assert_eq!(mv.special, SpecialMove::CastleQueenside);
}

#[test]
fn test_castling_lost_after_king_returns() {
    let mut game = GameState::from_board(castling_board().build(), Color::White);
    play(&mut game, "e1", "f1");
    play(&mut game, "e8", "d8");
    play(&mut game, "f1", "e1");
    play(&mut game, "d8", "e8");

    assert_eq!(
        game.apply_move(sq("e1"), sq("g1"), None),
        Err(MoveError::CastlingBlocked {
            from: sq("e1"),
            to: sq("g1")
        })
    );
}

#[test]
fn test_castling_listed_only_when_safe() {
    let safe = GameState::from_board(castling_board().build(), Color::White);
    let dests = safe.legal_destinations(sq("e1"));
    assert!(dests.contains(&sq("g1")));
    assert!(dests.contains(&sq("c1")));

    let board = castling_board()
        .piece(sq("f5"), Color::Black, Piece::Rook)
        .build();
    let attacked = GameState::from_board(board, Color::White);
    let dests = attacked.legal_destinations(sq("e1"));
    assert!(!dests.contains(&sq("g1")));
    assert!(dests.contains(&sq("c1")));
}

#[test]
fn test_en_passant_window_is_one_ply() {
    let board = BoardBuilder::new()
        .piece(sq("e1"), Color::White, Piece::King)
        .piece(sq("e2"), Color::White, Piece::Pawn)
        .piece(sq("d4"), Color::Black, Piece::Pawn)
        .piece(sq("h8"), Color::Black, Piece::King)
        .build();

    let mut game = GameState::from_board(board, Color::White);
    play(&mut game, "e2", "e4");
    assert!(game.legal_destinations(sq("d4")).contains(&sq("e3")));

    let mut taken = game.clone();
    let mv = play(&mut taken, "d4", "e3");
    assert_eq!(mv.special, SpecialMove::EnPassant);
    assert_eq!(mv.captured.map(|p| p.kind), Some(Piece::Pawn));
    assert!(taken.board().is_empty(sq("e4")));

    play(&mut game, "h8", "h7");
    play(&mut game, "e1", "f1");
    assert_eq!(
        game.apply_move(sq("d4"), sq("e3"), None),
        Err(MoveError::IllegalGeometry {
            from: sq("d4"),
            to: sq("e3")
        })
    );
}

#[test]
fn test_en_passant_needs_double_step() {
    let board = BoardBuilder::new()
        .piece(sq("e1"), Color::White, Piece::King)
        .piece(sq("e4"), Color::White, Piece::Pawn)
        .piece(sq("d4"), Color::Black, Piece::Pawn)
        .piece(sq("h8"), Color::Black, Piece::King)
        .build();
    let mut game = GameState::from_board(board, Color::Black);

    assert!(matches!(
        game.apply_move(sq("d4"), sq("e3"), None),
        Err(MoveError::IllegalGeometry { .. })
    ));
}

#[test]
fn test_en_passant_exposing_king_is_rolled_back() {
    // Both pawns leave the fifth rank, opening it for the rook.
    let board = BoardBuilder::new()
        .piece(sq("a5"), Color::White, Piece::King)
        .piece(sq("b5"), Color::White, Piece::Pawn)
        .piece(sq("c5"), Color::Black, Piece::Pawn)
        .piece(sq("h5"), Color::Black, Piece::Rook)
        .piece(sq("h8"), Color::Black, Piece::King)
        .just_advanced_two(sq("c5"))
        .build();
    let mut game = GameState::from_board(board, Color::White);
    let before = game.clone();

    assert_eq!(
        game.apply_move(sq("b5"), sq("c6"), None),
        Err(MoveError::MoveLeavesKingInCheck {
            from: sq("b5"),
            to: sq("c6")
        })
    );
    assert_eq!(game, before);
    assert!(game
        .board()
        .piece_at(sq("c5"))
        .is_some_and(|p| p.just_advanced_two));
}

#[test]
fn test_double_step_sets_flag_and_next_move_clears_it() {
    let mut game = new_game("w", "b");
    play(&mut game, "e2", "e4");
    assert!(game
        .board()
        .piece_at(sq("e4"))
        .is_some_and(|p| p.just_advanced_two && p.has_moved));

    play(&mut game, "g8", "f6");
    assert!(game
        .board()
        .piece_at(sq("e4"))
        .is_some_and(|p| !p.just_advanced_two));
}

#[test]
fn test_moved_pawn_cannot_double_step() {
    let mut game = new_game("w", "b");
    play(&mut game, "a2", "a3");
    play(&mut game, "h7", "h6");
    assert!(matches!(
        game.apply_move(sq("a3"), sq("a5"), None),
        Err(MoveError::IllegalGeometry { .. })
    ));
}

#[test]
fn test_promotion_choices() {
    let board = || {
        BoardBuilder::new()
            .piece(sq("e1"), Color::White, Piece::King)
            .piece(sq("a7"), Color::White, Piece::Pawn)
            .piece(sq("h6"), Color::Black, Piece::King)
            .build()
    };

    let cases = [
        (Some(Piece::Knight), Piece::Knight),
        (Some(Piece::Rook), Piece::Rook),
        (Some(Piece::Bishop), Piece::Bishop),
        (Some(Piece::Queen), Piece::Queen),
        (None, Piece::Queen),
        (Some(Piece::King), Piece::Queen),
        (Some(Piece::Pawn), Piece::Queen),
    ];

    for (choice, expected) in cases {
        let mut game = GameState::from_board(board(), Color::White);
        let mv = game
            .apply_move(sq("a7"), sq("a8"), choice)
            .expect("promotion is legal");
        assert_eq!(mv.special, SpecialMove::Promotion(expected));
        assert_eq!(
            game.board().piece_at(sq("a8")),
            Some(PieceState {
                kind: expected,
                color: Color::White,
                has_moved: true,
                just_advanced_two: false,
            })
        );
    }
}

#[test]
fn test_capture_promotion_records_captured_piece() {
    let board = BoardBuilder::new()
        .piece(sq("e1"), Color::White, Piece::King)
        .piece(sq("g2"), Color::Black, Piece::Pawn)
        .piece(sq("h1"), Color::White, Piece::Rook)
        .piece(sq("a8"), Color::Black, Piece::King)
        .build();
    let mut game = GameState::from_board(board, Color::Black);

    let mv = game
        .apply_move(sq("g2"), sq("h1"), Some(Piece::Knight))
        .expect("capture promotion");
    assert_eq!(mv.captured.map(|p| p.kind), Some(Piece::Rook));
    assert_eq!(
        game.board().piece_at(sq("h1")).map(|p| (p.kind, p.color)),
        Some((Piece::Knight, Color::Black))
    );
}

#[test]
fn test_fools_mate_is_checkmate() {
    let mut game = new_game("w", "b");
    play(&mut game, "f2", "f3");
    play(&mut game, "e7", "e5");
    play(&mut game, "g2", "g4");
    play(&mut game, "d8", "h4");

    assert_eq!(
        game.outcome(),
        Outcome::Checkmate {
            winner: Color::Black
        }
    );
    assert!(game.is_in_check());
    assert!(game.legal_moves().is_empty());

    let before = game.clone();
    assert_eq!(
        game.apply_move(sq("a2"), sq("a3"), None),
        Err(MoveError::GameAlreadyOver)
    );
    assert_eq!(game, before);
    assert!(game.legal_destinations(sq("a2")).is_empty());
}

#[test]
fn test_queen_move_stalemates() {
    let board = BoardBuilder::new()
        .piece(sq("g6"), Color::White, Piece::King)
        .piece(sq("f5"), Color::White, Piece::Queen)
        .piece(sq("h8"), Color::Black, Piece::King)
        .build();
    let mut game = GameState::from_board(board, Color::White);
    play(&mut game, "f5", "f7");

    assert_eq!(game.outcome(), Outcome::Stalemate);
    assert!(!game.is_in_check());
}

#[test]
fn test_check_is_not_terminal() {
    let mut game = new_game("w", "b");
    play(&mut game, "e2", "e4");
    play(&mut game, "f7", "f6");
    play(&mut game, "d1", "h5");

    assert!(game.is_in_check());
    assert_eq!(game.outcome(), Outcome::InProgress);
    assert_eq!(
        game.legal_moves()
            .iter()
            .map(|m| (m.from, m.to))
            .collect::<Vec<_>>(),
        vec![(sq("g7"), sq("g6"))]
    );
}

#[test]
fn test_from_board_detects_terminal_position() {
    let board = BoardBuilder::new()
        .piece(sq("g6"), Color::White, Piece::King)
        .piece(sq("f7"), Color::White, Piece::Queen)
        .piece(sq("h8"), Color::Black, Piece::King)
        .build();
    let game = GameState::from_board(board, Color::Black);
    assert_eq!(game.outcome(), Outcome::Stalemate);
}

#[test]
fn test_legal_destinations() {
    let game = new_game("w", "b");
    let pawn: Vec<Square> = game.legal_destinations(sq("e2")).into_iter().collect();
    assert_eq!(pawn, vec![sq("e4"), sq("e3")]);
    let knight: Vec<Square> = game.legal_destinations(sq("g1")).into_iter().collect();
    assert_eq!(knight, vec![sq("f3"), sq("h3")]);

    assert!(game.legal_destinations(sq("e4")).is_empty());
    assert!(game.legal_destinations(Square(-1, 0)).is_empty());
}

#[test]
fn test_legal_destinations_for_side_not_on_move() {
    let game = new_game("w", "b");
    assert_eq!(game.mover(), Color::White);
    let black_pawn: Vec<Square> = game.legal_destinations(sq("e7")).into_iter().collect();
    assert_eq!(black_pawn, vec![sq("e6"), sq("e5")]);

    // Listing moves for the other side never changes whose turn it is.
    let black_knight = game.legal_destinations(sq("b8"));
    assert_eq!(black_knight.into_iter().collect::<Vec<_>>(), vec![sq("a6"), sq("c6")]);
    assert_eq!(game.mover(), Color::White);
}

#[test]
fn test_history_records_moves_in_order() {
    let mut game = new_game("w", "b");
    play(&mut game, "e2", "e4");
    play(&mut game, "d7", "d5");
    let capture = play(&mut game, "e4", "d5");

    let history: Vec<String> = game.history().iter().map(ToString::to_string).collect();
    assert_eq!(history, vec!["e2 to e4", "d7 to d5", "e4 to d5"]);
    assert_eq!(capture.captured.map(|p| p.kind), Some(Piece::Pawn));
    assert_eq!(game.last_move(), Some(&capture));
}
