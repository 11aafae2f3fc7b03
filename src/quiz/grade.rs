use serde::{Serialize, Deserialize};
use std::fmt;

use crate::quiz::formula::Formula;

/// Outcome of grading one `QuizCase`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Grade {
    pub formula: Formula,
    pub expected: Vec<f64>,
    pub returned: Vec<f64>,
    /// True when lengths match and every returned value is finite and within
    /// the quiz tolerance of the expected one.
    pub correct: bool,
}

impl Grade {
    pub fn new(formula: Formula, expected: Vec<f64>, returned: Vec<f64>, tolerance: f64) -> Grade {
        let correct = expected.len() == returned.len()
            && expected
                .iter()
                .zip(returned.iter())
                .all(|(e, r)| r.is_finite() && (e - r).abs() <= tolerance);
        Grade { formula, expected, returned, correct }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Trying {}.", self.formula)?;
        writeln!(f, "The correct answer is")?;
        writeln!(f, "{:?}", self.expected)?;
        writeln!(f, "And your code returned")?;
        writeln!(f, "{:?}", self.returned)?;
        writeln!(f)?;
        write!(f, "{}", if self.correct { "Correct!" } else { "Incorrect." })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn within_tolerance_is_correct() {
        let g = Grade::new(Formula::CrossEntropy, vec![1.0], vec![1.0 + 1e-13], 1e-12);
        assert!(g.correct);
    }

    #[test]
    fn outside_tolerance_is_incorrect() {
        let g = Grade::new(Formula::CrossEntropy, vec![1.0], vec![1.1], 1e-12);
        assert!(!g.correct);
    }

    #[test]
    fn non_finite_is_never_correct() {
        let g = Grade::new(Formula::CrossEntropy, vec![f64::INFINITY], vec![f64::INFINITY], 1e-12);
        assert!(!g.correct);
    }

    #[test]
    fn length_mismatch_is_incorrect() {
        let g = Grade::new(Formula::Softmax, vec![0.5, 0.5], vec![1.0], 1e-12);
        assert!(!g.correct);
    }

    #[test]
    fn display_follows_grader_layout() {
        let g = Grade::new(Formula::Softmax, vec![1.0], vec![1.0], 1e-12);
        let text = g.to_string();
        assert!(text.starts_with("Trying softmax."));
        assert!(text.contains("The correct answer is\n[1.0]\nAnd your code returned\n[1.0]"));
        assert!(text.ends_with("Correct!"));
    }
}
