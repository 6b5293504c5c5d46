use crate::{
    attacks::{DIAGONALS, KING_DELTAS, KNIGHT_DELTAS, ORTHOGONALS, offset},
    board::Position,
    types::*,
};

const QUEEN_DIRS: [(i8, i8); 8] = [
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
];

/// Generate all legal moves, returning a freshly allocated vector.
pub fn legal_moves(pos: &Position) -> Vec<Move> {
    let mut out = Vec::with_capacity(64);
    legal_moves_into(pos, &mut out);
    out
}

/// Generate all legal moves into the provided buffer, reusing it across calls.
///
/// Each candidate is played on a copy of the position and dropped if it leaves
/// the mover's king attacked.
pub fn legal_moves_into(pos: &Position, out: &mut Vec<Move>) {
    out.clear();
    pseudo_moves(pos, out);

    let mover = pos.side_to_move;
    out.retain(|&mv| {
        let mut next = *pos;
        next.apply_move(mv);
        !next.in_check(mover)
    });
}

/// Moves that follow piece movement rules without the king-safety filter.
pub fn pseudo_legal_moves(pos: &Position) -> Vec<Move> {
    let mut out = Vec::with_capacity(64);
    pseudo_moves(pos, &mut out);
    out
}

impl Position {
    pub fn legal_moves(&self) -> Vec<Move> {
        legal_moves(self)
    }

    pub fn is_checkmate(&self) -> bool {
        self.in_check(self.side_to_move) && legal_moves(self).is_empty()
    }

    pub fn is_stalemate(&self) -> bool {
        !self.in_check(self.side_to_move) && legal_moves(self).is_empty()
    }
}

fn pseudo_moves(pos: &Position, out: &mut Vec<Move>) {
    for sq in 0..64u8 {
        let pc = match pos.piece_at(sq) {
            Some(p) => p,
            None => continue,
        };
        if pc.color != pos.side_to_move {
            continue;
        }
        match pc.kind {
            PieceKind::Pawn => gen_pawn(pos, sq, pc.color, out),
            PieceKind::Knight => gen_steps(pos, sq, pc.color, out, &KNIGHT_DELTAS),
            PieceKind::Bishop => gen_slider(pos, sq, pc.color, out, &DIAGONALS),
            PieceKind::Rook => gen_slider(pos, sq, pc.color, out, &ORTHOGONALS),
            PieceKind::Queen => gen_slider(pos, sq, pc.color, out, &QUEEN_DIRS),
            PieceKind::King => {
                gen_steps(pos, sq, pc.color, out, &KING_DELTAS);
                gen_castle(pos, sq, pc.color, out);
            }
        }
    }
}

/// Pushes `mv`, expanded into one move per promotion piece when it lands on
/// the far rank.
fn push_pawn_move(mv: Move, c: Color, out: &mut Vec<Move>) {
    if rank_of(mv.to) == c.promotion_rank() {
        for pk in PieceKind::PROMOTIONS {
            out.push(mv.with_promotion(pk));
        }
    } else {
        out.push(mv);
    }
}

fn gen_pawn(pos: &Position, from: u8, c: Color, out: &mut Vec<Move>) {
    let dir = c.forward();

    // forward 1
    if let Some(to) = offset(from, 0, dir)
        && pos.piece_at(to).is_none()
    {
        push_pawn_move(Move::new(from, to), c, out);

        // forward 2 from start, both squares empty
        if rank_of(from) == c.pawn_rank()
            && let Some(to2) = offset(from, 0, 2 * dir)
            && pos.piece_at(to2).is_none()
        {
            out.push(Move::new(from, to2).with_flags(MoveFlags::DOUBLE_PAWN_PUSH));
        }
    }

    // captures + en-passant
    for df in [-1, 1] {
        let Some(to) = offset(from, df, dir) else {
            continue;
        };
        match pos.piece_at(to) {
            Some(tpc) if tpc.color != c => {
                push_pawn_move(Move::capture(from, to, tpc), c, out);
            }
            Some(_) => {}
            None => {
                // The en-passant square is only reachable from the rank the
                // enemy pawn landed on.
                if pos.en_passant == Some(to)
                    && rank_of(from) == c.pawn_rank() + 3 * dir
                    && let Some(victim_sq) = offset(to, 0, -dir)
                    && let Some(victim) = pos.piece_at(victim_sq)
                    && victim.color != c
                    && victim.kind == PieceKind::Pawn
                {
                    out.push(Move::capture(from, to, victim).with_flags(MoveFlags::EN_PASSANT));
                }
            }
        }
    }
}

/// Single-step pieces: knight jumps and king steps.
fn gen_steps(pos: &Position, from: u8, c: Color, out: &mut Vec<Move>, deltas: &[(i8, i8)]) {
    for &(df, dr) in deltas {
        if let Some(to) = offset(from, df, dr) {
            match pos.piece_at(to) {
                None => out.push(Move::new(from, to)),
                Some(pc) if pc.color != c => out.push(Move::capture(from, to, pc)),
                _ => {}
            }
        }
    }
}

fn gen_slider(pos: &Position, from: u8, c: Color, out: &mut Vec<Move>, dirs: &[(i8, i8)]) {
    let f0 = file_of(from);
    let r0 = rank_of(from);
    for (df, dr) in dirs {
        let mut f = f0 + df;
        let mut r = r0 + dr;
        while let Some(to) = sq(f, r) {
            match pos.piece_at(to) {
                None => out.push(Move::new(from, to)),
                Some(pc) if pc.color != c => {
                    out.push(Move::capture(from, to, pc));
                    break;
                }
                _ => break,
            }
            f += df;
            r += dr;
        }
    }
}

fn gen_castle(pos: &Position, from: u8, c: Color, out: &mut Vec<Move>) {
    // Must be on original king square
    let home = c.home_rank() as u8 * 8;
    let king_from = home + 4;
    if from != king_from {
        return;
    }

    // Can't castle out of check.
    let enemy = c.other();
    if pos.is_square_attacked(king_from, enemy) {
        return;
    }

    let rook = Some(Piece::new(c, PieceKind::Rook));
    let empty = |s: u8| pos.piece_at(s).is_none();
    let safe = |s: u8| !pos.is_square_attacked(s, enemy);

    // King side: f and g empty and unattacked
    if pos.castling.kingside(c)
        && pos.piece_at(home + 7) == rook
        && empty(home + 5)
        && empty(home + 6)
        && safe(home + 5)
        && safe(home + 6)
    {
        out.push(Move::new(king_from, home + 6).with_flags(MoveFlags::CASTLING));
    }
    // Queen side: b, c, d empty; only c and d must be unattacked
    if pos.castling.queenside(c)
        && pos.piece_at(home) == rook
        && empty(home + 3)
        && empty(home + 2)
        && empty(home + 1)
        && safe(home + 3)
        && safe(home + 2)
    {
        out.push(Move::new(king_from, home + 2).with_flags(MoveFlags::CASTLING));
    }
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
