use crate::game::GameState;

impl GameState {
    /// Count leaf positions reachable in exactly `depth` plies.
    ///
    /// Each child is produced through [`GameState::apply_move`], so the
    /// count covers the same bookkeeping a real game performs.
    #[must_use]
    pub fn perft(&self, depth: usize) -> u64 {
        if depth == 0 {
            return 1;
        }

        let moves = self.legal_moves();
        if depth == 1 {
            return moves.len() as u64;
        }

        let mut nodes = 0;
        for m in moves {
            let mut child = self.clone();
            if child.apply_move(m.from, m.to, m.promotion()).is_ok() {
                nodes += child.perft(depth - 1);
            }
        }

        nodes
    }
}
