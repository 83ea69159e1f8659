//! Error taxonomy.
//!
//! Invariant violations are non-recoverable bugs and `panic!` via `assert`,
//! the same way the underlying data-model invariants do. Regex and
//! time-formatting failures are silently absorbed at the point they occur
//! and never escape as errors — a failed match behaves like no match, and a
//! failed time format falls back to a raw rendering. Only output I/O
//! failure is the caller's responsibility, so it is the only variant
//! modeled as a `Result`.

#[derive(Debug, thiserror::Error)]
pub enum EmitError {
    #[error("failed to write diff output: {0}")]
    Io(#[from] std::io::Error),
}
