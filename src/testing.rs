//! Shared helpers for unit tests: seeded random graphs and a logging setup.

use rand::Rng;

use crate::prelude::*;

/// Creates a random graph with `n` nodes where every off-diagonal cell is an edge with probability `p`.
/// Edge weights are drawn from `1..=max_weight`, and negated with probability `1/2` if `allow_negative`.
pub(crate) fn random_graph<R: Rng>(
    rng: &mut R,
    n: NumNodes,
    p: f64,
    max_weight: Weight,
    allow_negative: bool,
) -> WeightMatrix {
    assert!(n > 0 && max_weight > 0);

    let rows: Vec<Vec<Weight>> = (0..n)
        .map(|u| {
            (0..n)
                .map(|v| {
                    if u == v || !rng.random_bool(p) {
                        return 0;
                    }

                    let w = rng.random_range(1..=max_weight);
                    if allow_negative && rng.random_bool(0.5) { -w } else { w }
                })
                .collect()
        })
        .collect();

    WeightMatrix::from_rows(&rows).expect("random rows are always a valid graph")
}

/// Installs a `tracing` subscriber writing to the test output (once per test binary).
pub(crate) fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
