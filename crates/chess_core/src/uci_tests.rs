use super::*;

#[test]
fn test_parse_square_names() {
    assert_eq!(coord_to_sq("a1"), Some(0));
    assert_eq!(coord_to_sq("h8"), Some(63));
    assert_eq!(coord_to_sq("e4"), Some(28));
    assert_eq!(coord_to_sq("i1"), None);
    assert_eq!(coord_to_sq("a9"), None);
    assert_eq!(coord_to_sq("e"), None);
    assert_eq!(sq_to_coord(28), "e4");
}

#[test]
fn test_parse_coordinate_move() {
    let mv = parse_coordinate_move("e2e4").unwrap();
    assert_eq!((mv.from, mv.to), (12, 28));
    assert!(mv.is_quiet());

    let mv = parse_coordinate_move("a7a8n").unwrap();
    assert_eq!(mv.promo, Some(PieceKind::Knight));

    assert_eq!(parse_coordinate_move("e2"), None);
    assert_eq!(parse_coordinate_move("e2e9"), None);
    assert_eq!(parse_coordinate_move("e7e8k"), None);
    assert_eq!(parse_coordinate_move("e2e4e5"), None);
    assert_eq!(parse_coordinate_move("é2e4"), None);
}

#[test]
fn test_parse_uci_move_carries_flags() {
    let pos = Position::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
    let mv = parse_uci_move(&pos, "e1g1").expect("castle is legal");
    assert!(mv.is_castle());

    let pos = Position::startpos();
    assert!(parse_uci_move(&pos, "e2e4").unwrap().is_double_push());
    // Well-formed but illegal
    assert_eq!(parse_uci_move(&pos, "e2e5"), None);
    assert!(!is_move_legal(&pos, &Move::new(12, 36)));
}

#[test]
fn test_promotion_defaults_to_queen() {
    let pos = Position::from_fen("7k/4P3/8/8/8/8/8/4K3 w - - 0 1").unwrap();
    let mv = parse_uci_move(&pos, "e7e8").unwrap();
    assert_eq!(mv.promo, Some(PieceKind::Queen));
    assert_eq!(move_to_uci(mv), "e7e8q");

    let mv = parse_uci_move(&pos, "e7e8r").unwrap();
    assert_eq!(mv.promo, Some(PieceKind::Rook));
    assert_eq!(move_to_uci(mv), "e7e8r");
}

#[test]
fn test_move_to_uci_plain() {
    assert_eq!(move_to_uci(Move::new(12, 28)), "e2e4");
}

#[test]
fn test_set_position_startpos_moves() {
    let mut pos = Position::empty();
    set_position_from_uci(&mut pos, &["startpos", "moves", "e2e4", "e7e5", "g1f3"]).unwrap();
    assert_eq!(
        pos.to_fen(),
        "rnbqkbnr/pppp1ppp/8/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R b KQkq - 1 2"
    );
}

#[test]
fn test_set_position_fen_and_skip_illegal() {
    let mut pos = Position::startpos();
    set_position_from_uci(
        &mut pos,
        &["fen", "4k3/8/8/8/8/8/8/4K3", "w", "-", "-", "0", "1", "moves", "e1e3", "e1d1"],
    )
    .unwrap();
    // e1e3 is skipped, e1d1 applied
    assert_eq!(pos.to_fen(), "4k3/8/8/8/8/8/8/3K4 b - - 1 1");

    let err = set_position_from_uci(&mut pos, &["fen", "bad"]);
    assert!(err.is_err());
}
