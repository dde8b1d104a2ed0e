//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `rules.rs` - Per-piece movement geometry
//! - `attacks.rs` - Attack and check detection
//! - `movegen.rs` - Pseudo-legal and legal move enumeration
//! - `make_unmake.rs` - Make/unmake move correctness
//! - `perft.rs` - Leaf counts against known values
//! - `proptest.rs` - Property-based tests


use crate::board::{Board, BoardBuilder, Square};

pub(super) fn sq(name: &str) -> Square {
    name.parse().expect("valid square")
}

pub(super) fn board_from(placement: &str) -> Board {
    BoardBuilder::from_placement(placement)
        .expect("valid placement")
        .build()
}
