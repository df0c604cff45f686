//! Coloring algorithms: greedy initializer and Kempe-chain local search.

/// greedy DSATUR algorithm (initial coloring provider)
pub mod greedy_dsatur;

/// Kempe-chain neighborhood local search
pub mod kempe;
