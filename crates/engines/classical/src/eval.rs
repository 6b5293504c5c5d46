//! Static evaluation.
//!
//! Every term is computed from White's point of view in centipawns; the blend
//! is flipped to the side to move at the end (negamax convention). Terms above
//! the engine's tier contribute nothing rather than being skipped, so the
//! blend stays well defined as terms change.

use chess_core::{Color, PieceKind, Position, file_of, pseudo_legal_moves, rank_of, sq};
use serde::{Deserialize, Serialize};

use crate::level::EngineLevel;

/// Material values in centipawns, indexed by PieceKind::idx().
/// Order: Pawn, Knight, Bishop, Rook, Queen, King
pub const PIECE_VALUES: [i32; 6] = [100, 320, 330, 500, 900, 0];

/// Raw centipawns per pseudo-legal move of difference.
const MOBILITY_PER_MOVE: i32 = 10;
const SHIELD_NEAR: i32 = 15;
const SHIELD_FAR: i32 = 8;
const OPEN_KING_FILE: i32 = -20;
const DOUBLED_PAWN: i32 = -20;
const ISOLATED_PAWN: i32 = -15;
const PASSED_PAWN: i32 = 20;
const PASSED_PAWN_PER_RANK: i32 = 5;

/// Blend weights, in percent of each raw term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvalWeights {
    pub piece_square: i32,
    pub mobility: i32,
    pub king_safety: i32,
    pub pawn_structure: i32,
}

impl Default for EvalWeights {
    fn default() -> Self {
        Self {
            piece_square: 30,
            mobility: 10,
            king_safety: 20,
            pawn_structure: 10,
        }
    }
}

// Piece-square tables, laid out as seen from White with rank 8 on top.
#[rustfmt::skip]
const PAWN_TABLE: [i32; 64] = [
     0,  0,  0,  0,  0,  0,  0,  0,
    50, 50, 50, 50, 50, 50, 50, 50,
    10, 10, 20, 30, 30, 20, 10, 10,
     5,  5, 10, 25, 25, 10,  5,  5,
     0,  0,  0, 20, 20,  0,  0,  0,
     5, -5,-10,  0,  0,-10, -5,  5,
     5, 10, 10,-20,-20, 10, 10,  5,
     0,  0,  0,  0,  0,  0,  0,  0,
];

#[rustfmt::skip]
const KNIGHT_TABLE: [i32; 64] = [
    -50,-40,-30,-30,-30,-30,-40,-50,
    -40,-20,  0,  0,  0,  0,-20,-40,
    -30,  0, 10, 15, 15, 10,  0,-30,
    -30,  5, 15, 20, 20, 15,  5,-30,
    -30,  0, 15, 20, 20, 15,  0,-30,
    -30,  5, 10, 15, 15, 10,  5,-30,
    -40,-20,  0,  5,  5,  0,-20,-40,
    -50,-40,-30,-30,-30,-30,-40,-50,
];

#[rustfmt::skip]
const BISHOP_TABLE: [i32; 64] = [
    -20,-10,-10,-10,-10,-10,-10,-20,
    -10,  0,  0,  0,  0,  0,  0,-10,
    -10,  0,  5, 10, 10,  5,  0,-10,
    -10,  5,  5, 10, 10,  5,  5,-10,
    -10,  0, 10, 10, 10, 10,  0,-10,
    -10, 10, 10, 10, 10, 10, 10,-10,
    -10,  5,  0,  0,  0,  0,  5,-10,
    -20,-10,-10,-10,-10,-10,-10,-20,
];

#[rustfmt::skip]
const ROOK_TABLE: [i32; 64] = [
     0,  0,  0,  0,  0,  0,  0,  0,
     5, 10, 10, 10, 10, 10, 10,  5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
     0,  0,  0,  5,  5,  0,  0,  0,
];

#[rustfmt::skip]
const QUEEN_TABLE: [i32; 64] = [
    -20,-10,-10, -5, -5,-10,-10,-20,
    -10,  0,  0,  0,  0,  0,  0,-10,
    -10,  0,  5,  5,  5,  5,  0,-10,
     -5,  0,  5,  5,  5,  5,  0, -5,
      0,  0,  5,  5,  5,  5,  0, -5,
    -10,  5,  5,  5,  5,  5,  0,-10,
    -10,  0,  5,  0,  0,  0,  0,-10,
    -20,-10,-10, -5, -5,-10,-10,-20,
];

#[rustfmt::skip]
const KING_TABLE: [i32; 64] = [
    -30,-40,-40,-50,-50,-40,-40,-30,
    -30,-40,-40,-50,-50,-40,-40,-30,
    -30,-40,-40,-50,-50,-40,-40,-30,
    -30,-40,-40,-50,-50,-40,-40,-30,
    -20,-30,-30,-40,-40,-30,-30,-20,
    -10,-20,-20,-20,-20,-20,-20,-10,
     20, 20,  0,  0,  0,  0, 20, 20,
     20, 30, 10,  0,  0, 10, 30, 20,
];

/// Evaluation lookup data. Built once per engine and handed to the search by
/// reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvalTables {
    pub piece_values: [i32; 6],
    pub piece_square: [[i32; 64]; 6],
    pub weights: EvalWeights,
}

impl EvalTables {
    pub fn new(weights: EvalWeights) -> Self {
        Self {
            piece_values: PIECE_VALUES,
            piece_square: [
                PAWN_TABLE,
                KNIGHT_TABLE,
                BISHOP_TABLE,
                ROOK_TABLE,
                QUEEN_TABLE,
                KING_TABLE,
            ],
            weights,
        }
    }

    #[inline]
    pub fn value(&self, kind: PieceKind) -> i32 {
        self.piece_values[kind.idx()]
    }

    /// Table bonus for `kind` of color `c` standing on `sq`.
    #[inline]
    pub fn square_bonus(&self, kind: PieceKind, c: Color, sq: u8) -> i32 {
        // Tables are drawn rank 8 first, so White reads them flipped.
        let idx = match c {
            Color::White => sq ^ 56,
            Color::Black => sq,
        };
        self.piece_square[kind.idx()][idx as usize]
    }
}

impl Default for EvalTables {
    fn default() -> Self {
        Self::new(EvalWeights::default())
    }
}

/// Evaluates the position from the side-to-move's perspective.
///
/// Returns a score in centipawns:
/// - Positive = good for side to move
/// - Negative = bad for side to move
/// - 0 = equal position
pub fn evaluate_position(pos: &Position, level: EngineLevel, tables: &EvalTables) -> i32 {
    let w = &tables.weights;
    let mut score = evaluate_material(pos, tables);

    if level.uses_positional_terms() {
        score += evaluate_piece_squares(pos, tables) * w.piece_square / 100;
        score += evaluate_mobility(pos) * w.mobility / 100;
    }

    if level.uses_structural_terms() {
        score += evaluate_king_safety(pos) * w.king_safety / 100;
        score += evaluate_pawn_structure(pos) * w.pawn_structure / 100;
    }

    // Convert to side-to-move perspective
    if pos.side_to_move == Color::White {
        score
    } else {
        -score
    }
}

/// Signed material balance, White minus Black.
pub fn evaluate_material(pos: &Position, tables: &EvalTables) -> i32 {
    pos.board
        .iter()
        .flatten()
        .map(|pc| {
            let v = tables.value(pc.kind);
            if pc.color == Color::White { v } else { -v }
        })
        .sum()
}

pub fn evaluate_piece_squares(pos: &Position, tables: &EvalTables) -> i32 {
    let mut score = 0;
    for s in 0..64u8 {
        if let Some(pc) = pos.piece_at(s) {
            let v = tables.square_bonus(pc.kind, pc.color, s);
            score += if pc.color == Color::White { v } else { -v };
        }
    }
    score
}

/// Difference in pseudo-legal move counts.
pub fn evaluate_mobility(pos: &Position) -> i32 {
    let count = |c: Color| {
        let mut p = *pos;
        p.side_to_move = c;
        p.en_passant = if c == pos.side_to_move { pos.en_passant } else { None };
        pseudo_legal_moves(&p).len() as i32
    };
    (count(Color::White) - count(Color::Black)) * MOBILITY_PER_MOVE
}

/// Pawn shield in front of a king still near its home rank, and a penalty
/// for a king file with no own pawn.
pub fn evaluate_king_safety(pos: &Position) -> i32 {
    king_safety_for(pos, Color::White) - king_safety_for(pos, Color::Black)
}

fn king_safety_for(pos: &Position, c: Color) -> i32 {
    let Some(ksq) = pos.king_sq(c) else {
        return 0;
    };
    let kf = file_of(ksq);
    let kr = rank_of(ksq);
    let fwd = c.forward();
    if kr != c.home_rank() && kr != c.home_rank() + fwd {
        return 0;
    }

    let own_pawn = |s: Option<u8>| {
        s.and_then(|s| pos.piece_at(s))
            .is_some_and(|pc| pc.color == c && pc.kind == PieceKind::Pawn)
    };

    let mut score = 0;
    for df in -1..=1 {
        if own_pawn(sq(kf + df, kr + fwd)) {
            score += SHIELD_NEAR;
        } else if own_pawn(sq(kf + df, kr + 2 * fwd)) {
            score += SHIELD_FAR;
        }
    }
    if !(0..8).any(|r| own_pawn(sq(kf, r))) {
        score += OPEN_KING_FILE;
    }
    score
}

/// Doubled, isolated and passed pawns.
pub fn evaluate_pawn_structure(pos: &Position) -> i32 {
    pawn_structure_for(pos, Color::White) - pawn_structure_for(pos, Color::Black)
}

fn pawn_structure_for(pos: &Position, c: Color) -> i32 {
    let mut own_files = [0i32; 8];
    let mut own = Vec::with_capacity(8);
    let mut enemy = Vec::with_capacity(8);
    for s in 0..64u8 {
        match pos.piece_at(s) {
            Some(pc) if pc.kind == PieceKind::Pawn && pc.color == c => {
                own_files[file_of(s) as usize] += 1;
                own.push(s);
            }
            Some(pc) if pc.kind == PieceKind::Pawn => enemy.push(s),
            _ => {}
        }
    }

    let mut score = 0;
    for &n in &own_files {
        if n > 1 {
            score += DOUBLED_PAWN * (n - 1);
        }
    }

    let fwd = c.forward();
    for &s in &own {
        let f = file_of(s);
        let r = rank_of(s);

        let left = if f > 0 { own_files[(f - 1) as usize] } else { 0 };
        let right = if f < 7 { own_files[(f + 1) as usize] } else { 0 };
        if left == 0 && right == 0 {
            score += ISOLATED_PAWN;
        }

        let blocked = enemy.iter().any(|&e| {
            (file_of(e) - f).abs() <= 1 && (rank_of(e) - r) * fwd > 0
        });
        if !blocked {
            let advanced = i32::from((r - c.pawn_rank()) * fwd);
            score += PASSED_PAWN + PASSED_PAWN_PER_RANK * advanced;
        }
    }
    score
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
