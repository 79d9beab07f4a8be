//! Command implementations

pub mod benchmark;
pub mod simple;
pub mod solve;

pub use benchmark::{BenchmarkResult, run_benchmark};
pub use simple::{Session, run_session_loop, run_simple};
pub use solve::{SolveConfig, SolveResult, solve_word};
