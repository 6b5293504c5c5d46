//! Perft timing run over the usual move generator verification positions.
//!
//! Usage:
//!   cargo run --release --example perft_bench -p chess_core -- [depth] [fen]
//!
//! With a FEN the per-move split is printed as well, which makes it easy to
//! diff against another engine's `divide` output.

use chess_core::{Position, perft, perft_divide};
use std::env;
use std::time::Instant;

const TEST_POSITIONS: &[(&str, &str)] = &[
    (
        "Starting position",
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
    ),
    (
        "Kiwipete",
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq -",
    ),
    ("Position 3", "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - -"),
    (
        "Position 4",
        "r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq -",
    ),
    (
        "Position 5",
        "rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w KQ -",
    ),
];

fn main() {
    let args: Vec<String> = env::args().collect();
    let depth: u8 = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(4);

    if let Some(fen) = args.get(2) {
        match Position::from_fen(fen) {
            Ok(pos) => run_divide(&pos, depth),
            Err(e) => eprintln!("bad FEN: {e}"),
        }
        return;
    }

    let mut total_nodes = 0u64;
    let start = Instant::now();
    for (name, fen) in TEST_POSITIONS {
        let Ok(pos) = Position::from_fen(fen) else {
            continue;
        };
        let t = Instant::now();
        let nodes = perft(&pos, depth);
        let elapsed = t.elapsed();
        total_nodes += nodes;
        println!(
            "{name:.<24} depth {depth}: {nodes:>12} nodes in {elapsed:>9.3?} ({:.2} Mn/s)",
            nodes as f64 / 1_000_000.0 / elapsed.as_secs_f64().max(1e-9)
        );
    }
    let elapsed = start.elapsed();
    println!("{:=<70}", "");
    println!(
        "TOTAL: {total_nodes} nodes in {elapsed:.3?} ({:.2} Mn/s)",
        total_nodes as f64 / 1_000_000.0 / elapsed.as_secs_f64().max(1e-9)
    );
}

fn run_divide(pos: &Position, depth: u8) {
    let start = Instant::now();
    let split = perft_divide(pos, depth);
    let mut total = 0u64;
    for (mv, nodes) in &split {
        println!("{mv}: {nodes}");
        total += nodes;
    }
    println!();
    println!("Moves: {}", split.len());
    println!("Nodes: {total} ({:.3?})", start.elapsed());
}
