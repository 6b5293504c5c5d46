use crate::{board::Position, movegen::legal_moves_into, types::Move};

/// Pure perft node count.
/// Counts all legal positions from the current one down to `depth`.
pub fn perft(pos: &Position, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }

    fn inner(pos: &Position, depth: u8, layers: &mut [Vec<Move>]) -> u64 {
        let Some((buf, rest)) = layers.split_first_mut() else {
            return 1;
        };

        legal_moves_into(pos, buf);
        if depth == 1 {
            return buf.len() as u64;
        }

        let mut nodes = 0u64;
        for &mv in buf.iter() {
            let mut next = *pos;
            next.apply_move(mv);
            nodes += inner(&next, depth - 1, rest);
        }
        nodes
    }

    let mut layers = vec![Vec::with_capacity(64); depth as usize];
    inner(pos, depth, &mut layers[..])
}

/// Per-root-move node counts, sorted by move text. Handy when hunting a
/// generator bug against a reference engine.
pub fn perft_divide(pos: &Position, depth: u8) -> Vec<(String, u64)> {
    let mut out: Vec<(String, u64)> = crate::movegen::legal_moves(pos)
        .into_iter()
        .map(|mv| {
            let mut next = *pos;
            next.apply_move(mv);
            (
                crate::uci::move_to_uci(mv),
                perft(&next, depth.saturating_sub(1)),
            )
        })
        .collect();
    out.sort();
    out
}
