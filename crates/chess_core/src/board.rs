use std::fmt;

use tracing::warn;

use crate::{error::FenError, types::*};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CastlingRights {
    pub wk: bool,
    pub wq: bool,
    pub bk: bool,
    pub bq: bool,
}

impl CastlingRights {
    pub const ALL: CastlingRights = CastlingRights {
        wk: true,
        wq: true,
        bk: true,
        bq: true,
    };
    pub const NONE: CastlingRights = CastlingRights {
        wk: false,
        wq: false,
        bk: false,
        bq: false,
    };

    pub fn kingside(&self, c: Color) -> bool {
        match c {
            Color::White => self.wk,
            Color::Black => self.bk,
        }
    }

    pub fn queenside(&self, c: Color) -> bool {
        match c {
            Color::White => self.wq,
            Color::Black => self.bq,
        }
    }

    fn revoke(&mut self, c: Color, wing: Wing) {
        match (c, wing) {
            (Color::White, Wing::King) => self.wk = false,
            (Color::White, Wing::Queen) => self.wq = false,
            (Color::Black, Wing::King) => self.bk = false,
            (Color::Black, Wing::Queen) => self.bq = false,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Wing {
    King,
    Queen,
}

/// Rook origin squares and the right each one guards.
const ROOK_HOMES: [(u8, Color, Wing); 4] = [
    (0, Color::White, Wing::Queen),
    (7, Color::White, Wing::King),
    (56, Color::Black, Wing::Queen),
    (63, Color::Black, Wing::King),
];

/// Rook (from, to) for a castling king landing on `king_to`.
pub fn castle_rook_squares(king_to: u8) -> Option<(u8, u8)> {
    match king_to {
        6 => Some((7, 5)),
        2 => Some((0, 3)),
        62 => Some((63, 61)),
        58 => Some((56, 59)),
        _ => None,
    }
}

/// A full game position. `Copy` on purpose: search and legality checks
/// clone-then-mutate instead of undoing moves.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Position {
    pub board: [Option<Piece>; 64],
    pub side_to_move: Color,
    pub castling: CastlingRights,
    pub en_passant: Option<u8>, // square behind a pawn that just advanced 2
    pub halfmove_clock: u32,
    pub fullmove_number: u32,
}

impl Default for Position {
    fn default() -> Self {
        Self::startpos()
    }
}

impl Position {
    pub const START_FEN: &'static str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

    /// An empty board with White to move and no castling rights.
    pub fn empty() -> Self {
        Position {
            board: [None; 64],
            side_to_move: Color::White,
            castling: CastlingRights::NONE,
            en_passant: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    pub fn startpos() -> Self {
        let mut p = Position {
            castling: CastlingRights::ALL,
            ..Position::empty()
        };

        // Pawns
        for f in 0..8 {
            p.board[8 + f] = Some(Piece::new(Color::White, PieceKind::Pawn));
            p.board[48 + f] = Some(Piece::new(Color::Black, PieceKind::Pawn));
        }
        // Back ranks
        let back = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        for (f, &kind) in back.iter().enumerate() {
            p.board[f] = Some(Piece::new(Color::White, kind));
            p.board[56 + f] = Some(Piece::new(Color::Black, kind));
        }
        p
    }

    /// Parses a Forsyth-Edwards record. The move counters may be omitted.
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        if !(4..=6).contains(&parts.len()) {
            return Err(FenError::FieldCount(parts.len()));
        }

        let board_part = parts[0];
        let stm_part = parts[1];
        let castle_part = parts[2];
        let ep_part = parts[3];
        let halfmove_part = parts.get(4).copied().unwrap_or("0");
        let fullmove_part = parts.get(5).copied().unwrap_or("1");

        let mut board = [None; 64];
        let ranks: Vec<&str> = board_part.split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::RankCount(ranks.len()));
        }

        for (rank_idx, rank_str) in ranks.iter().enumerate() {
            let mut file: usize = 0;
            let rank = 7 - rank_idx; // FEN lists rank 8 .. 1
            for ch in rank_str.chars() {
                if let Some(d) = ch.to_digit(10) {
                    if d == 0 {
                        return Err(FenError::InvalidPiece(ch));
                    }
                    file += d as usize;
                } else {
                    let pc = Piece::from_char(ch).ok_or(FenError::InvalidPiece(ch))?;
                    if file >= 8 {
                        return Err(FenError::RankWidth {
                            rank: rank + 1,
                            files: file + 1,
                        });
                    }
                    board[rank * 8 + file] = Some(pc);
                    file += 1;
                }
            }
            if file != 8 {
                return Err(FenError::RankWidth {
                    rank: rank + 1,
                    files: file,
                });
            }
        }

        let side_to_move = match stm_part {
            "w" => Color::White,
            "b" => Color::Black,
            _ => return Err(FenError::InvalidSide(stm_part.to_string())),
        };

        let mut castling = CastlingRights::NONE;
        if castle_part != "-" {
            for c in castle_part.chars() {
                match c {
                    'K' => castling.wk = true,
                    'Q' => castling.wq = true,
                    'k' => castling.bk = true,
                    'q' => castling.bq = true,
                    _ => return Err(FenError::InvalidCastling(c)),
                }
            }
        }

        let en_passant = if ep_part == "-" {
            None
        } else {
            Some(coord_to_sq(ep_part).ok_or_else(|| FenError::InvalidEnPassant(ep_part.to_string()))?)
        };

        let halfmove_clock: u32 = halfmove_part
            .parse()
            .map_err(|_| FenError::InvalidCounter(halfmove_part.to_string()))?;
        let fullmove_number: u32 = fullmove_part
            .parse()
            .map_err(|_| FenError::InvalidCounter(fullmove_part.to_string()))?;

        Ok(Position {
            board,
            side_to_move,
            castling,
            en_passant,
            halfmove_clock,
            fullmove_number,
        })
    }

    /// Serializes to a Forsyth-Edwards record.
    pub fn to_fen(&self) -> String {
        let mut fen = String::with_capacity(90);
        for rank in (0..8).rev() {
            let mut empty = 0;
            for file in 0..8 {
                match self.board[rank * 8 + file] {
                    None => empty += 1,
                    Some(pc) => {
                        if empty > 0 {
                            fen.push_str(&empty.to_string());
                            empty = 0;
                        }
                        fen.push(pc.to_char());
                    }
                }
            }
            if empty > 0 {
                fen.push_str(&empty.to_string());
            }
            if rank > 0 {
                fen.push('/');
            }
        }

        fen.push(' ');
        fen.push(match self.side_to_move {
            Color::White => 'w',
            Color::Black => 'b',
        });

        fen.push(' ');
        let len_before = fen.len();
        for (held, ch) in [
            (self.castling.wk, 'K'),
            (self.castling.wq, 'Q'),
            (self.castling.bk, 'k'),
            (self.castling.bq, 'q'),
        ] {
            if held {
                fen.push(ch);
            }
        }
        if fen.len() == len_before {
            fen.push('-');
        }

        fen.push(' ');
        match self.en_passant {
            Some(ep) => fen.push_str(&sq_to_coord(ep)),
            None => fen.push('-'),
        }

        fen.push_str(&format!(" {} {}", self.halfmove_clock, self.fullmove_number));
        fen
    }

    pub fn king_sq(&self, c: Color) -> Option<u8> {
        for i in 0..64 {
            if let Some(pc) = self.board[i]
                && pc.color == c
                && pc.kind == PieceKind::King
            {
                return Some(i as u8);
            }
        }
        None
    }

    pub fn count(&self, c: Color, kind: PieceKind) -> usize {
        self.board
            .iter()
            .flatten()
            .filter(|pc| pc.color == c && pc.kind == kind)
            .count()
    }

    pub fn piece_at(&self, sq: u8) -> Option<Piece> {
        self.board[sq as usize]
    }
    pub fn set_piece(&mut self, sq: u8, pc: Option<Piece>) {
        self.board[sq as usize] = pc;
    }

    /// Whether `c`'s king is attacked. A board without that king reports
    /// `false` and logs the anomaly.
    pub fn in_check(&self, c: Color) -> bool {
        let ksq = match self.king_sq(c) {
            Some(s) => s,
            None => {
                warn!(color = ?c, fen = %self.to_fen(), "no king found");
                return false;
            }
        };
        self.is_square_attacked(ksq, c.other())
    }

    pub fn is_fifty_move_draw(&self) -> bool {
        self.halfmove_clock >= 100
    }

    /// Applies a pseudo-legal move. No legality checks are made.
    pub fn apply_move(&mut self, mv: Move) {
        let from = mv.from;
        let to = mv.to;
        let Some(moved) = self.piece_at(from) else {
            warn!(mv = %format!("{}{}", sq_to_coord(from), sq_to_coord(to)), "no piece on from-square");
            return;
        };

        self.update_castling_rights(from, to, moved);

        let mut captured = self.piece_at(to);

        if mv.is_castle() && moved.kind == PieceKind::King {
            self.set_piece(from, None);
            self.set_piece(to, Some(moved));
            if let Some((rf, rt)) = castle_rook_squares(to) {
                let rook = self.piece_at(rf);
                self.set_piece(rf, None);
                self.set_piece(rt, rook);
            }
        } else if mv.is_en_passant() {
            // The captured pawn sits behind the destination.
            if let Some(cs) = sq(file_of(to), rank_of(to) - moved.color.forward()) {
                captured = self.piece_at(cs);
                self.set_piece(cs, None);
            }
            self.set_piece(from, None);
            self.set_piece(to, Some(moved));
        } else {
            let placed = if moved.kind == PieceKind::Pawn
                && rank_of(to) == moved.color.promotion_rank()
            {
                Piece::new(moved.color, mv.promo.unwrap_or(PieceKind::Queen))
            } else {
                moved
            };
            self.set_piece(from, None);
            self.set_piece(to, Some(placed));
        }

        self.en_passant = None;
        if moved.kind == PieceKind::Pawn {
            let fr = rank_of(from);
            let tr = rank_of(to);
            if (tr - fr).abs() == 2 {
                self.en_passant = sq(file_of(from), (fr + tr) / 2);
            }
        }

        self.halfmove_clock = if moved.kind == PieceKind::Pawn || captured.is_some() {
            0
        } else {
            self.halfmove_clock.saturating_add(1)
        };

        if self.side_to_move == Color::Black {
            self.fullmove_number = self.fullmove_number.saturating_add(1);
        }
        self.side_to_move = self.side_to_move.other();
    }

    /// Clears rights on a king move, or when a move leaves or lands on a
    /// rook's home square (covers captured rooks).
    fn update_castling_rights(&mut self, from: u8, to: u8, moved: Piece) {
        if moved.kind == PieceKind::King {
            self.castling.revoke(moved.color, Wing::King);
            self.castling.revoke(moved.color, Wing::Queen);
        }
        for (home, owner, wing) in ROOK_HOMES {
            if from == home || to == home {
                self.castling.revoke(owner, wing);
            }
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..8).rev() {
            write!(f, "{}  ", rank + 1)?;
            for file in 0..8 {
                let ch = self.board[rank * 8 + file].map_or('.', Piece::to_char);
                write!(f, "{ch} ")?;
            }
            writeln!(f)?;
        }
        write!(f, "\n   a b c d e f g h")
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
