use super::*;

fn pos(fen: &str) -> Position {
    Position::from_fen(fen).expect("valid FEN")
}

fn at(name: &str) -> u8 {
    coord_to_sq(name).unwrap()
}

#[test]
fn test_pawn_attacks_follow_color() {
    // White pawn on e4 attacks d5 and f5, never d3/f3
    let p = pos("4k3/8/8/8/4P3/8/8/4K3 w - - 0 1");
    assert!(p.is_square_attacked(at("d5"), Color::White));
    assert!(p.is_square_attacked(at("f5"), Color::White));
    assert!(!p.is_square_attacked(at("d3"), Color::White));
    assert!(!p.is_square_attacked(at("e5"), Color::White));

    // Black pawn on e5 attacks d4 and f4
    let p = pos("4k3/8/8/4p3/8/8/8/4K3 w - - 0 1");
    assert!(p.is_square_attacked(at("d4"), Color::Black));
    assert!(p.is_square_attacked(at("f4"), Color::Black));
    assert!(!p.is_square_attacked(at("d6"), Color::Black));
}

#[test]
fn test_pawn_attacks_do_not_wrap() {
    // White pawn on h4: index +9 would land on a6's neighbour a5 region
    let p = pos("4k3/8/8/8/7P/8/8/4K3 w - - 0 1");
    assert!(p.is_square_attacked(at("g5"), Color::White));
    assert!(!p.is_square_attacked(at("a6"), Color::White));
    assert!(!p.is_square_attacked(at("a5"), Color::White));

    // White pawn on a4 must not attack h4/h5
    let p = pos("4k3/8/8/8/P7/8/8/4K3 w - - 0 1");
    assert!(p.is_square_attacked(at("b5"), Color::White));
    assert!(!p.is_square_attacked(at("h4"), Color::White));
    assert!(!p.is_square_attacked(at("h5"), Color::White));
}

#[test]
fn test_knight_attacks_from_corner() {
    let p = pos("4k3/8/8/8/8/8/8/N3K3 w - - 0 1");
    assert!(p.is_square_attacked(at("b3"), Color::White));
    assert!(p.is_square_attacked(at("c2"), Color::White));
    // a1 + 6 = g1 and a1 + 15 = h2 by raw offset; both must be rejected
    assert!(!p.is_square_attacked(at("g1"), Color::White));
    assert!(!p.is_square_attacked(at("h2"), Color::White));
}

#[test]
fn test_knight_on_h_file_does_not_wrap() {
    let p = pos("4k3/8/8/8/7N/8/8/4K3 w - - 0 1");
    assert!(p.is_square_attacked(at("g6"), Color::White));
    assert!(p.is_square_attacked(at("f3"), Color::White));
    assert!(!p.is_square_attacked(at("a6"), Color::White));
    assert!(!p.is_square_attacked(at("b5"), Color::White));
}

#[test]
fn test_rook_ray_blocked() {
    // Rook on a1, own pawn on a4, own knight on c1
    let p = pos("4k3/8/8/8/P7/8/8/R1N4K w - - 0 1");
    assert!(p.is_square_attacked(at("a3"), Color::White));
    assert!(!p.is_square_attacked(at("a5"), Color::White));
    assert!(p.is_square_attacked(at("b1"), Color::White));
    assert!(!p.is_square_attacked(at("d1"), Color::White));
}

#[test]
fn test_rook_ray_does_not_wrap_rank() {
    // Rook on h3; a4 is the next index but a different rank
    let p = pos("4k3/8/8/8/8/7R/8/4K3 w - - 0 1");
    assert!(p.is_square_attacked(at("a3"), Color::White));
    assert!(!p.is_square_attacked(at("a4"), Color::White));
}

#[test]
fn test_bishop_ray_does_not_wrap_diagonal() {
    // Bishop on h4: raw +7 is a6's row... must stop at the edge
    let p = pos("4k3/8/8/8/7B/8/8/4K3 w - - 0 1");
    assert!(p.is_square_attacked(at("g5"), Color::White));
    assert!(p.is_square_attacked(at("d8"), Color::White));
    assert!(!p.is_square_attacked(at("a5"), Color::White));
    assert!(!p.is_square_attacked(at("a4"), Color::White));
}

#[test]
fn test_wrong_class_blocks_ray() {
    // Black knight on e4 sits between the black rook on e8 and e1
    let p = pos("4r2k/8/8/8/4n3/8/8/K7 w - - 0 1");
    assert!(!p.is_square_attacked(at("e1"), Color::Black));
    assert!(p.is_square_attacked(at("e5"), Color::Black));
    // Queen counts on both rays
    let p = pos("7k/8/8/8/4q3/8/8/K7 w - - 0 1");
    assert!(p.is_square_attacked(at("e1"), Color::Black));
    assert!(p.is_square_attacked(at("b1"), Color::Black));
}

#[test]
fn test_king_adjacency() {
    let p = pos("8/8/8/8/8/8/8/K6k w - - 0 1");
    assert!(p.is_square_attacked(at("b2"), Color::White));
    assert!(p.is_square_attacked(at("g2"), Color::Black));
    assert!(!p.is_square_attacked(at("h2"), Color::White));
    assert!(!p.is_square_attacked(at("a2"), Color::Black));
}

#[test]
fn test_offset_stays_on_board() {
    assert_eq!(offset(at("a1"), -1, 0), None);
    assert_eq!(offset(at("h8"), 1, 1), None);
    assert_eq!(offset(at("e4"), 1, 2), Some(at("f6")));
}
