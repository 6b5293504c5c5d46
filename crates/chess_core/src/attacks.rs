//! Square attack detection on the mailbox board.
//!
//! Every step is taken in (file, rank) space and re-validated with [`sq`], so a
//! ray or jump can never wrap from the h-file onto the a-file (or vice versa).
//! The same delta tables drive move generation.

use crate::{board::Position, types::*};

/// L-shaped knight jumps as (file, rank) deltas.
pub const KNIGHT_DELTAS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (-1, 2),
    (-2, 1),
    (1, -2),
    (2, -1),
    (-1, -2),
    (-2, -1),
];

/// The eight neighbouring squares.
pub const KING_DELTAS: [(i8, i8); 8] = [
    (1, 1),
    (1, 0),
    (1, -1),
    (0, 1),
    (0, -1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
];

pub const DIAGONALS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
pub const ORTHOGONALS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Square reached from `from` by a (file, rank) step, if still on the board.
#[inline]
pub fn offset(from: u8, df: i8, dr: i8) -> Option<u8> {
    sq(file_of(from) + df, rank_of(from) + dr)
}

impl Position {
    /// Is `target` attacked by any piece of color `by`?
    ///
    /// Checked in order pawns, knights, sliders, king; returns on the first hit.
    pub fn is_square_attacked(&self, target: u8, by: Color) -> bool {
        self.pawn_attacks(target, by)
            || self.knight_attacks(target, by)
            || self.slider_attacks(target, by, &DIAGONALS, PieceKind::Bishop)
            || self.slider_attacks(target, by, &ORTHOGONALS, PieceKind::Rook)
            || self.king_attacks(target, by)
    }

    fn holds(&self, s: u8, by: Color, kind: PieceKind) -> bool {
        matches!(self.piece_at(s), Some(pc) if pc.color == by && pc.kind == kind)
    }

    fn pawn_attacks(&self, target: u8, by: Color) -> bool {
        // An attacking pawn stands one rank behind the target, from its own
        // direction of travel.
        let dr = -by.forward();
        [-1, 1].into_iter().any(|df| {
            offset(target, df, dr).is_some_and(|s| self.holds(s, by, PieceKind::Pawn))
        })
    }

    fn knight_attacks(&self, target: u8, by: Color) -> bool {
        KNIGHT_DELTAS.iter().any(|&(df, dr)| {
            offset(target, df, dr).is_some_and(|s| self.holds(s, by, PieceKind::Knight))
        })
    }

    fn king_attacks(&self, target: u8, by: Color) -> bool {
        KING_DELTAS.iter().any(|&(df, dr)| {
            offset(target, df, dr).is_some_and(|s| self.holds(s, by, PieceKind::King))
        })
    }

    /// Ray-casts along `dirs`. The first occupant ends the ray and counts only
    /// if it is `by`'s `kind` or queen.
    fn slider_attacks(&self, target: u8, by: Color, dirs: &[(i8, i8)], kind: PieceKind) -> bool {
        let tf = file_of(target);
        let tr = rank_of(target);
        for &(df, dr) in dirs {
            let mut f = tf + df;
            let mut r = tr + dr;
            while let Some(s) = sq(f, r) {
                if let Some(pc) = self.piece_at(s) {
                    if pc.color == by && (pc.kind == kind || pc.kind == PieceKind::Queen) {
                        return true;
                    }
                    break;
                }
                f += df;
                r += dr;
            }
        }
        false
    }
}

#[cfg(test)]
#[path = "attacks_tests.rs"]
mod attacks_tests;
