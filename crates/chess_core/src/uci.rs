//! Coordinate move notation (`e2e4`, `e7e8q`) and protocol position setup.

use tracing::warn;

use crate::{board::Position, error::FenError, movegen::legal_moves, types::*};

/// Text used when there is no move to report.
pub const NULL_MOVE_TEXT: &str = "0000";

pub fn move_to_uci(mv: Move) -> String {
    let mut s = String::with_capacity(5);
    s.push_str(&sq_to_coord(mv.from));
    s.push_str(&sq_to_coord(mv.to));
    if let Some(p) = mv.promo {
        s.push(match p {
            PieceKind::Rook | PieceKind::Bishop | PieceKind::Knight => p.to_char(),
            _ => 'q',
        });
    }
    s
}

/// Parses coordinate text into a bare from/to(/promotion) move.
///
/// Pure syntax: no flags are set and legality is not checked. Malformed text
/// yields `None`.
pub fn parse_coordinate_move(txt: &str) -> Option<Move> {
    let txt = txt.trim();
    if !txt.is_ascii() || !(4..=5).contains(&txt.len()) {
        return None;
    }
    let from = coord_to_sq(&txt[0..2])?;
    let to = coord_to_sq(&txt[2..4])?;
    let mut mv = Move::new(from, to);
    if let Some(ch) = txt.chars().nth(4) {
        let kind = match PieceKind::from_char(ch)? {
            k @ (PieceKind::Queen | PieceKind::Rook | PieceKind::Bishop | PieceKind::Knight) => k,
            _ => return None,
        };
        mv = mv.with_promotion(kind);
    }
    Some(mv)
}

/// Looks `input` up among the legal moves so the returned move carries the
/// correct flags. A promotion without a piece matches the queen promotion.
pub fn find_legal_move(pos: &Position, input: &Move) -> Option<Move> {
    let wanted = input.promo.unwrap_or(PieceKind::Queen);
    legal_moves(pos).into_iter().find(|m| {
        m.from == input.from && m.to == input.to && m.promo.is_none_or(|p| p == wanted)
    })
}

pub fn is_move_legal(pos: &Position, input: &Move) -> bool {
    find_legal_move(pos, input).is_some()
}

pub fn parse_uci_move(pos: &Position, txt: &str) -> Option<Move> {
    let mv = parse_coordinate_move(txt)?;
    find_legal_move(pos, &mv)
}

/// Handles the arguments of a `position` command:
/// `startpos [moves ...]` or `fen <record> [moves ...]`.
pub fn set_position_from_uci(pos: &mut Position, args: &[&str]) -> Result<(), FenError> {
    let moves_at = args.iter().position(|&a| a == "moves");
    let setup = &args[..moves_at.unwrap_or(args.len())];

    *pos = match setup.first() {
        Some(&"fen") => Position::from_fen(&setup[1..].join(" "))?,
        _ => Position::startpos(),
    };

    if let Some(idx) = moves_at {
        for txt in &args[idx + 1..] {
            match parse_uci_move(pos, txt) {
                Some(mv) => pos.apply_move(mv),
                None => warn!(mv = %txt, fen = %pos.to_fen(), "skipping illegal move"),
            }
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "uci_tests.rs"]
mod uci_tests;
