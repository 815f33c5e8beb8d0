//! Command implementations

pub mod analyze;
pub mod check;
pub mod simple;

pub use analyze::analyze_root;
pub use check::{CheckConfig, CheckResult, check_word};
pub use simple::{run_simple, run_simple_with};
