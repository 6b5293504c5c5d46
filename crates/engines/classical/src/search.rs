//! Negamax search with alpha-beta pruning

use std::cmp::Reverse;

use chess_core::{Deadline, Move, Position, file_of, legal_moves, rank_of};
use rand::seq::SliceRandom;
use tracing::trace;

use crate::eval::{EvalTables, evaluate_position};
use crate::level::EngineLevel;

/// Score of delivering mate at the root. Mates further away score lower.
pub const MATE_SCORE: i32 = 20_000;
const INFINITY: i32 = 30_000;

const CAPTURE_BONUS: i32 = 1000;
const PROMOTION_BONUS: i32 = 900;
const CASTLE_BONUS: i32 = 100;
const CENTRE_BONUS: i32 = 10;

/// Result from select_move indicating whether search completed or was stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOutcome {
    /// Best move found and its score (None if no legal moves exist)
    pub best_move: Option<(Move, i32)>,
    pub nodes: u64,
    /// True if search was stopped early due to time
    pub stopped: bool,
}

struct SearchContext<'a> {
    level: EngineLevel,
    tables: &'a EvalTables,
    deadline: &'a Deadline,
    nodes: u64,
    stopped: bool,
}

/// Searches the position and returns the best move with its score.
///
/// # Arguments
/// * `pos` - The position to search
/// * `depth` - Search depth in plies (ignored by the random tier)
/// * `level` - Tier gating evaluation terms
/// * `tables` - Evaluation data
/// * `deadline` - Wall-clock point after which the search winds down
///
/// Root moves are tried in ordered sequence and the first one reaching the
/// highest score wins. Once the deadline passes, no further root moves are
/// started and the best so far is returned.
pub fn select_move(
    pos: &Position,
    depth: u8,
    level: EngineLevel,
    tables: &EvalTables,
    deadline: &Deadline,
) -> SearchOutcome {
    let mut moves = legal_moves(pos);

    if moves.is_empty() {
        return SearchOutcome {
            best_move: None,
            nodes: 0,
            stopped: false,
        };
    }

    if level == EngineLevel::Random {
        let pick = moves.choose(&mut rand::thread_rng()).copied();
        return SearchOutcome {
            best_move: pick.map(|mv| (mv, 0)),
            nodes: 0,
            stopped: false,
        };
    }

    order_moves(pos, &mut moves, tables);

    let mut ctx = SearchContext {
        level,
        tables,
        deadline,
        nodes: 0,
        stopped: false,
    };
    let mut best: Option<(Move, i32)> = None;

    for mv in moves {
        // Check time before starting each root move
        if best.is_some() && deadline.expired() {
            trace!(nodes = ctx.nodes, "deadline passed between root moves");
            ctx.stopped = true;
            break;
        }

        let mut child = *pos;
        child.apply_move(mv);

        let alpha = best.map_or(-INFINITY, |(_, s)| s);
        let score = -alpha_beta(&child, depth.saturating_sub(1), 1, -INFINITY, -alpha, &mut ctx);

        // An interrupted move only stands in when nothing finished.
        if ctx.stopped {
            if best.is_none() {
                best = Some((mv, score));
            }
            break;
        }

        if best.is_none_or(|(_, s)| score > s) {
            best = Some((mv, score));
        }
    }

    SearchOutcome {
        best_move: best,
        nodes: ctx.nodes,
        stopped: ctx.stopped,
    }
}

/// Recursive negamax search with alpha-beta pruning.
///
/// Scores are from the side to move. `ply` is the distance from the root and
/// makes nearer mates score higher.
fn alpha_beta(
    pos: &Position,
    depth: u8,
    ply: i32,
    mut alpha: i32,
    beta: i32,
    ctx: &mut SearchContext<'_>,
) -> i32 {
    ctx.nodes += 1;

    // Check time periodically
    if ctx.deadline.poll(ctx.nodes) {
        trace!(nodes = ctx.nodes, ply, "search deadline hit");
        ctx.stopped = true;
        return 0;
    }

    let mut moves = legal_moves(pos);

    if moves.is_empty() {
        if pos.in_check(pos.side_to_move) {
            return -(MATE_SCORE - ply); // Checkmate
        }
        return 0; // Stalemate
    }

    // Mate on the hundredth halfmove still counts as mate.
    if pos.is_fifty_move_draw() {
        return 0;
    }

    if depth == 0 {
        return evaluate_position(pos, ctx.level, ctx.tables);
    }

    order_moves(pos, &mut moves, ctx.tables);

    let mut best = -INFINITY;

    for mv in moves {
        let mut child = *pos;
        child.apply_move(mv);

        let score = -alpha_beta(&child, depth - 1, ply + 1, -beta, -alpha, ctx);

        if ctx.stopped {
            return best.max(score);
        }

        if score > best {
            best = score;
        }
        if best > alpha {
            alpha = best;
        }
        if alpha >= beta {
            break; // Beta cutoff
        }
    }

    best
}

/// Sorts moves so the most promising come first. The sort is stable: equal
/// scores keep generation order.
pub fn order_moves(pos: &Position, moves: &mut [Move], tables: &EvalTables) {
    moves.sort_by_key(|mv| Reverse(move_order_score(pos, mv, tables)));
}

/// Heuristic priority: captures by victim value less a tenth of the attacker,
/// then promotions, castling and moves into the centre.
pub fn move_order_score(pos: &Position, mv: &Move, tables: &EvalTables) -> i32 {
    let mut score = 0;

    if let Some(victim) = mv.captured {
        let attacker = pos.piece_at(mv.from).map_or(0, |pc| tables.value(pc.kind));
        score += CAPTURE_BONUS + tables.value(victim.kind) - attacker / 10;
    }
    if mv.is_promotion() {
        score += PROMOTION_BONUS;
    }
    if mv.is_castle() {
        score += CASTLE_BONUS;
    }

    let centre = 2..=5;
    if centre.contains(&file_of(mv.to)) && centre.contains(&rank_of(mv.to)) {
        score += CENTRE_BONUS;
    }

    score
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
