use super::*;
use chess_core::Piece;

fn pos(fen: &str) -> Position {
    Position::from_fen(fen).expect("valid FEN")
}

/// Same position with ranks flipped and colors swapped.
fn mirrored(pos: &Position) -> Position {
    let mut m = Position::empty();
    for s in 0..64u8 {
        if let Some(pc) = pos.piece_at(s) {
            m.set_piece(s ^ 56, Some(Piece::new(pc.color.other(), pc.kind)));
        }
    }
    m.side_to_move = pos.side_to_move.other();
    m
}

#[test]
fn test_startpos_is_balanced_at_every_level() {
    let tables = EvalTables::default();
    let white = Position::startpos();
    let black = pos("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR b KQkq - 0 1");
    for level in EngineLevel::ALL {
        assert_eq!(evaluate_position(&white, level, &tables), 0, "level {level}");
        assert_eq!(evaluate_position(&black, level, &tables), 0, "level {level}");
    }
}

#[test]
fn test_material_from_side_to_move() {
    let tables = EvalTables::default();
    let white = pos("4k3/8/8/8/8/8/8/3QK3 w - - 0 1");
    let black = pos("4k3/8/8/8/8/8/8/3QK3 b - - 0 1");

    assert_eq!(evaluate_material(&white, &tables), 900);
    assert_eq!(evaluate_position(&white, EngineLevel::Beginner, &tables), 900);
    assert_eq!(evaluate_position(&black, EngineLevel::Beginner, &tables), -900);
}

#[test]
fn test_side_flip_negates_score() {
    let tables = EvalTables::default();
    let white = pos("r1bqk2r/pppp1ppp/2n2n2/2b1p3/2B1P3/5N2/PPPP1PPP/RNBQK2R w - - 4 4");
    let mut black = white;
    black.side_to_move = Color::Black;

    for level in EngineLevel::ALL {
        assert_eq!(
            evaluate_position(&white, level, &tables),
            -evaluate_position(&black, level, &tables),
            "level {level}"
        );
    }
}

#[test]
fn test_mirrored_position_scores_the_same() {
    let tables = EvalTables::default();
    let original = pos("r2qk2r/ppp2ppp/2n1bn2/3pp3/1b2P3/2NP1N2/PPPB1PPP/R2QKB1R w - - 0 7");
    let mirror = mirrored(&original);

    for level in EngineLevel::ALL {
        assert_eq!(
            evaluate_position(&original, level, &tables),
            evaluate_position(&mirror, level, &tables),
            "level {level}"
        );
    }
}

#[test]
fn test_positional_terms_gated_by_tier() {
    let tables = EvalTables::default();
    let rim = pos("4k3/8/8/8/8/8/8/N3K3 w - - 0 1");
    let centre = pos("4k3/8/8/8/3N4/8/8/4K3 w - - 0 1");

    for level in [EngineLevel::Random, EngineLevel::Beginner] {
        assert_eq!(
            evaluate_position(&rim, level, &tables),
            evaluate_position(&centre, level, &tables)
        );
    }
    assert!(
        evaluate_position(&centre, EngineLevel::Easy, &tables)
            > evaluate_position(&rim, EngineLevel::Easy, &tables)
    );
}

#[test]
fn test_structural_terms_gated_by_tier() {
    let tables = EvalTables::default();
    // Same material and piece-square totals; only the pawn shape differs
    let doubled = pos("4k3/8/8/8/8/4P3/4P3/4K3 w - - 0 1");
    let connected = pos("4k3/8/8/8/8/4P3/3P4/4K3 w - - 0 1");

    assert_eq!(evaluate_pawn_structure(&doubled), -5);
    assert_eq!(evaluate_pawn_structure(&connected), 45);

    let easy_gap = evaluate_position(&connected, EngineLevel::Easy, &tables)
        - evaluate_position(&doubled, EngineLevel::Easy, &tables);
    let medium_gap = evaluate_position(&connected, EngineLevel::Medium, &tables)
        - evaluate_position(&doubled, EngineLevel::Medium, &tables);
    assert!(medium_gap > easy_gap);
}

#[test]
fn test_zero_weights_leave_material_only() {
    let tables = EvalTables::new(EvalWeights {
        piece_square: 0,
        mobility: 0,
        king_safety: 0,
        pawn_structure: 0,
    });
    let game = pos("r1bqk2r/pppp1ppp/2n2n2/2b1p3/2B1P3/5N2/PPPP1PPP/RNBQK2R w - - 4 4");
    let material = evaluate_material(&game, &tables);
    assert_eq!(evaluate_position(&game, EngineLevel::Expert, &tables), material);
}

#[test]
fn test_king_shield() {
    // White king tucked behind three pawns, Black king bare on an open file
    let sheltered = pos("6k1/8/8/8/8/8/5PPP/6K1 w - - 0 1");
    assert_eq!(evaluate_king_safety(&sheltered), 3 * SHIELD_NEAR - OPEN_KING_FILE);

    // Kings away from their home ranks get nothing either way
    let centralised = pos("8/8/8/8/4K3/8/8/4k3 w - - 0 1");
    assert_eq!(evaluate_king_safety(&centralised), 0);
}

#[test]
fn test_passed_pawn_outscores_blocked_pawn() {
    // The e-pawn faces a black pawn on d6 in one, nothing in the other
    let blocked = pos("4k3/8/3p4/8/4P3/8/8/4K3 w - - 0 1");
    let passed = pos("4k3/8/8/8/4P3/3p4/8/4K3 w - - 0 1");

    assert_eq!(evaluate_pawn_structure(&blocked), 0);
    assert!(pawn_structure_for(&passed, Color::White) > pawn_structure_for(&blocked, Color::White));
}

#[test]
fn test_mobility_counts_both_sides() {
    assert_eq!(evaluate_mobility(&Position::startpos()), 0);

    // Rook adds 10 moves for White (a2..a8, b1..d1)
    let bare = pos("4k3/8/8/8/8/8/8/4K3 w - - 0 1");
    let with_rook = pos("4k3/8/8/8/8/8/8/R3K3 w - - 0 1");
    assert_eq!(evaluate_mobility(&bare), 0);
    assert_eq!(evaluate_mobility(&with_rook), 10 * MOBILITY_PER_MOVE);
}

#[test]
fn test_square_bonus_flips_for_black() {
    let tables = EvalTables::default();
    // e2 for White and e7 for Black are the same table cell
    assert_eq!(
        tables.square_bonus(PieceKind::Pawn, Color::White, 12),
        tables.square_bonus(PieceKind::Pawn, Color::Black, 52)
    );
    assert_eq!(tables.square_bonus(PieceKind::Pawn, Color::White, 12), -20);
    assert_eq!(tables.square_bonus(PieceKind::Knight, Color::Black, 56), -50);
}
