//! Game rules
//!
//! Validation and scoring of candidates, round and session state, and
//! achievable-word analysis.

pub mod analysis;
pub mod round;
pub mod session;
pub mod validator;

pub use analysis::{Achievable, Analysis, achievable_words};
pub use round::{Round, new_round};
pub use session::{Session, Statistics};
pub use validator::{Accepted, Rejection, evaluate, is_original, is_possible, is_real};
