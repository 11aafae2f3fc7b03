pub mod formula;
pub mod case;
pub mod grade;
pub mod quiz_set;

pub use formula::Formula;
pub use case::QuizCase;
pub use grade::Grade;
pub use quiz_set::QuizSet;
