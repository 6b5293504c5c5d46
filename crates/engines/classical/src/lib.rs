//! Classical Chess Engine
//!
//! Alpha-beta search over a blended static evaluation, with difficulty tiers
//! that fix the depth and the evaluation terms in play.

mod config;
mod eval;
mod level;
mod search;

use std::time::Duration;

use chess_core::{Deadline, Engine, Move, Position, SearchLimits, SearchResult};
use tracing::debug;

pub use config::{ConfigError, EngineConfig, MAX_CONFIG_DEPTH};
pub use eval::{
    EvalTables, EvalWeights, PIECE_VALUES, evaluate_king_safety, evaluate_material,
    evaluate_mobility, evaluate_pawn_structure, evaluate_piece_squares, evaluate_position,
};
pub use level::EngineLevel;
pub use search::{MATE_SCORE, SearchOutcome, move_order_score, order_moves, select_move};

/// Classical chess engine using negamax with alpha-beta pruning.
///
/// This engine uses:
/// - Negamax search with alpha-beta pruning and capture-first move ordering
/// - Material evaluation blended with tier-gated positional terms
/// - 50-move rule detection
/// - Time control support for move time limits
#[derive(Debug, Clone)]
pub struct ClassicalEngine {
    level: EngineLevel,
    max_depth: Option<u8>,
    time_limit: Option<Duration>,
    tables: EvalTables,
    nodes_searched: u64,
    last_evaluation: i32,
    last_depth: u8,
}

impl ClassicalEngine {
    pub fn new(level: EngineLevel) -> Self {
        Self {
            level,
            max_depth: None,
            time_limit: None,
            tables: EvalTables::default(),
            nodes_searched: 0,
            last_evaluation: 0,
            last_depth: 0,
        }
    }

    pub fn from_config(config: &EngineConfig) -> Self {
        Self {
            max_depth: config.max_depth,
            time_limit: config.time_limit(),
            tables: EvalTables::new(config.weights),
            ..Self::new(config.level)
        }
    }

    pub fn level(&self) -> EngineLevel {
        self.level
    }

    pub fn set_level(&mut self, level: EngineLevel) {
        self.level = level;
    }

    pub fn time_limit(&self) -> Option<Duration> {
        self.time_limit
    }

    pub fn set_time_limit(&mut self, limit: Option<Duration>) {
        self.time_limit = limit;
    }

    /// `None` falls back to the tier's depth.
    pub fn set_max_depth(&mut self, depth: Option<u8>) {
        self.max_depth = depth;
    }

    /// Depth the next search will use.
    pub fn depth(&self) -> u8 {
        self.max_depth.unwrap_or_else(|| self.level.depth())
    }

    pub fn tables(&self) -> &EvalTables {
        &self.tables
    }

    /// Picks a move for the side to move. `None` means there is no legal
    /// move (checkmate or stalemate).
    pub fn select_move(
        &mut self,
        pos: &Position,
        depth: u8,
        time_budget: Option<Duration>,
    ) -> Option<Move> {
        let deadline = time_budget.map_or_else(Deadline::none, Deadline::from_now);
        self.run(pos, depth, &deadline).best_move.map(|(mv, _)| mv)
    }

    /// Searches with the engine's own depth and time limit.
    pub fn best_move(&mut self, pos: &Position) -> Option<Move> {
        self.select_move(pos, self.depth(), self.time_limit)
    }

    pub fn nodes_searched(&self) -> u64 {
        self.nodes_searched
    }

    /// Score of the last chosen move, from the mover's side.
    pub fn last_evaluation(&self) -> i32 {
        self.last_evaluation
    }

    pub fn last_depth(&self) -> u8 {
        self.last_depth
    }

    fn run(&mut self, pos: &Position, depth: u8, deadline: &Deadline) -> SearchOutcome {
        let outcome = search::select_move(pos, depth, self.level, &self.tables, deadline);

        self.nodes_searched = outcome.nodes;
        self.last_evaluation = outcome.best_move.map_or(0, |(_, s)| s);
        self.last_depth = if self.level == EngineLevel::Random { 0 } else { depth };

        debug!(
            level = %self.level,
            depth = self.last_depth,
            nodes = self.nodes_searched,
            score = self.last_evaluation,
            stopped = outcome.stopped,
            elapsed_ms = deadline.elapsed().as_millis() as u64,
            "search finished"
        );

        outcome
    }
}

impl Default for ClassicalEngine {
    fn default() -> Self {
        Self::new(EngineLevel::default())
    }
}

impl Engine for ClassicalEngine {
    fn search(&mut self, pos: &Position, limits: SearchLimits) -> SearchResult {
        // Time-only limits carry an unbounded depth; the tier depth applies then.
        let depth = if limits.depth == u8::MAX {
            self.depth()
        } else {
            limits.depth
        };
        let deadline = SearchLimits {
            move_time: limits.move_time.or(self.time_limit),
            ..limits
        }
        .start();

        let outcome = self.run(pos, depth, &deadline);

        SearchResult {
            best_move: outcome.best_move.map(|(mv, _)| mv),
            score: self.last_evaluation,
            depth: self.last_depth,
            nodes: outcome.nodes,
            stopped: outcome.stopped,
        }
    }

    fn name(&self) -> &str {
        "Classical 1.0"
    }

    fn new_game(&mut self) {
        self.nodes_searched = 0;
        self.last_evaluation = 0;
        self.last_depth = 0;
    }

    fn set_option(&mut self, name: &str, value: &str) -> bool {
        let value = value.trim();
        match name.to_ascii_lowercase().as_str() {
            "level" => match value.parse() {
                Ok(level) => {
                    self.set_level(level);
                    true
                }
                Err(_) => false,
            },
            "depth" => match value.parse::<u8>() {
                Ok(0) => {
                    self.set_max_depth(None);
                    true
                }
                Ok(d) if d <= MAX_CONFIG_DEPTH => {
                    self.set_max_depth(Some(d));
                    true
                }
                _ => false,
            },
            "movetime" => match value.parse::<u64>() {
                Ok(0) => {
                    self.set_time_limit(None);
                    true
                }
                Ok(ms) => {
                    self.set_time_limit(Some(Duration::from_millis(ms)));
                    true
                }
                Err(_) => false,
            },
            _ => false,
        }
    }
}
