// Derivation stages between the base table and the chart builders:
// filtering, group aggregation, cumulative round curves, composite scores.

pub mod aggregate;
pub mod composite;
pub mod cumulative;
pub mod filter;
