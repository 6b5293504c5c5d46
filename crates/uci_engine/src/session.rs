//! UCI command handling, independent of the process's stdin/stdout.

use std::io::{self, Write};
use std::time::Duration;

use chess_core::{Engine, NULL_MOVE_TEXT, Position, SearchLimits, move_to_uci, set_position_from_uci};
use classical_engine::{ClassicalEngine, EngineLevel, MAX_CONFIG_DEPTH};
use tracing::{debug, info, warn};

/// Whether the read loop should keep going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct UciSession {
    pos: Position,
    engine: ClassicalEngine,
}

impl UciSession {
    pub fn new(engine: ClassicalEngine) -> Self {
        Self {
            pos: Position::startpos(),
            engine,
        }
    }

    pub fn position(&self) -> &Position {
        &self.pos
    }

    pub fn engine(&self) -> &ClassicalEngine {
        &self.engine
    }

    /// Handles one input line, writing any replies to `out`.
    pub fn handle_line(&mut self, line: &str, out: &mut impl Write) -> io::Result<Flow> {
        let parts: Vec<&str> = line.split_whitespace().collect();
        let Some((&cmd, args)) = parts.split_first() else {
            return Ok(Flow::Continue);
        };

        match cmd {
            "uci" => {
                writeln!(out, "id name {}", self.engine.name())?;
                writeln!(out, "id author {}", self.engine.author())?;
                let levels: Vec<String> = EngineLevel::ALL
                    .iter()
                    .map(|l| format!("var {}", l.name()))
                    .collect();
                writeln!(
                    out,
                    "option name Level type combo default {} {}",
                    self.engine.level().name(),
                    levels.join(" ")
                )?;
                writeln!(
                    out,
                    "option name Depth type spin default 0 min 0 max {MAX_CONFIG_DEPTH}"
                )?;
                let movetime = self.engine.time_limit().map_or(0, |t| t.as_millis());
                writeln!(
                    out,
                    "option name MoveTime type spin default {movetime} min 0 max 600000"
                )?;
                writeln!(out, "uciok")?;
            }
            "isready" => writeln!(out, "readyok")?,
            "setoption" => self.set_option(args),
            "ucinewgame" => {
                self.pos = Position::startpos();
                self.engine.new_game();
            }
            "position" => {
                if let Err(e) = set_position_from_uci(&mut self.pos, args) {
                    warn!(error = %e, "rejected position command");
                }
            }
            "go" => self.go(args, out)?,
            "d" => {
                writeln!(out, "{}", self.pos)?;
                writeln!(out, "Fen: {}", self.pos.to_fen())?;
            }
            "quit" => return Ok(Flow::Quit),
            _ => debug!(command = cmd, "ignoring unknown command"),
        }

        out.flush()?;
        Ok(Flow::Continue)
    }

    /// `setoption name <id> [value <x>]`; names may contain spaces.
    fn set_option(&mut self, args: &[&str]) {
        let name_at = args.iter().position(|&a| a == "name");
        let value_at = args.iter().position(|&a| a == "value");

        let Some(name_at) = name_at else {
            warn!("setoption without a name");
            return;
        };
        let name_end = value_at.filter(|&v| v > name_at).unwrap_or(args.len());
        let name = args[name_at + 1..name_end].join(" ");
        let value = value_at.map(|v| args[v + 1..].join(" ")).unwrap_or_default();

        if self.engine.set_option(&name, &value) {
            info!(option = %name, value = %value, "option set");
        } else {
            warn!(option = %name, value = %value, "unsupported option or value");
        }
    }

    fn go(&mut self, args: &[&str], out: &mut impl Write) -> io::Result<()> {
        let limits = parse_go(args);
        let result = self.engine.search(&self.pos, limits);

        writeln!(
            out,
            "info depth {} score cp {} nodes {}",
            result.depth, result.score, result.nodes
        )?;
        let best = result.best_move.map_or_else(|| NULL_MOVE_TEXT.to_string(), move_to_uci);
        writeln!(out, "bestmove {best}")
    }
}

/// Reads `depth` and `movetime` from a `go` command. Anything else falls
/// back to the engine's own limits.
pub fn parse_go(args: &[&str]) -> SearchLimits {
    let mut depth = None;
    let mut move_time = None;

    let mut it = args.iter();
    while let Some(&tok) = it.next() {
        match tok {
            "depth" => depth = it.next().and_then(|v| v.parse::<u8>().ok()),
            "movetime" => {
                move_time = it
                    .next()
                    .and_then(|v| v.parse::<u64>().ok())
                    .map(Duration::from_millis)
            }
            _ => {}
        }
    }

    SearchLimits {
        // u8::MAX tells the engine to use its configured depth
        depth: depth.filter(|&d| d > 0).unwrap_or(u8::MAX),
        move_time,
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod session_tests;
