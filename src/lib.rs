pub mod error;
pub mod activation;
pub mod loss;
pub mod quiz;

// Convenience re-exports
pub use error::{FormulaError, Result};
pub use activation::softmax::{softmax, softmax_stable};
pub use loss::cross_entropy::cross_entropy;
pub use quiz::{Formula, QuizCase, QuizSet, Grade};
