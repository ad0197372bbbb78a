#![allow(dead_code)]

use wgraphs::prelude::*;

/// Installs a `tracing` subscriber honoring `RUST_LOG` (once per test binary).
pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn graph<R: AsRef<[Weight]>>(rows: &[R]) -> WeightMatrix {
    WeightMatrix::from_rows(rows).expect("test matrix must be a valid graph")
}
