use serde::{Serialize, Deserialize};
use std::fmt;

/// Selects which formula a quiz case exercises.
///
/// - `Softmax`      — scores to probability distribution (`activation::softmax`).
/// - `CrossEntropy` — summed binary cross-entropy (`loss::cross_entropy`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Formula {
    Softmax,
    CrossEntropy,
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Formula::Softmax => write!(f, "softmax"),
            Formula::CrossEntropy => write!(f, "cross_entropy"),
        }
    }
}
