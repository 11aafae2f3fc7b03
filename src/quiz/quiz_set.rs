use log::{info, warn};
use serde::{Serialize, Deserialize};

use crate::error::Result;
use crate::quiz::case::QuizCase;
use crate::quiz::grade::Grade;

fn default_tolerance() -> f64 {
    1e-12
}

/// A named collection of quiz cases plus the tolerance they are graded with.
///
/// Can be saved to / loaded from JSON so new questions are added as data
/// rather than code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizSet {
    pub name: String,
    /// Maximum absolute difference accepted per value.
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,
    pub cases: Vec<QuizCase>,
}

impl QuizSet {
    /// The two coursework questions with their published answers.
    pub fn builtin() -> QuizSet {
        QuizSet {
            name: "introduction-to-neural-networks".to_string(),
            tolerance: default_tolerance(),
            cases: vec![
                QuizCase::Softmax {
                    scores: vec![5.0, 6.0, 7.0],
                    expected: vec![0.09003057317038046, 0.24472847105479764, 0.6652409557748219],
                },
                QuizCase::CrossEntropy {
                    labels: vec![1.0, 0.0, 1.0, 1.0],
                    predictions: vec![0.4, 0.6, 0.1, 0.5],
                    expected: 4.828313737302301,
                },
            ],
        }
    }

    /// Evaluates every case in order. A case whose inputs are rejected
    /// (`InvalidInput`) aborts grading with that error.
    pub fn grade(&self) -> Result<Vec<Grade>> {
        let mut grades = Vec::with_capacity(self.cases.len());
        for (i, case) in self.cases.iter().enumerate() {
            let returned = case.evaluate()?;
            let grade = Grade::new(case.formula(), case.expected(), returned, self.tolerance);
            if grade.correct {
                info!("{} case {}: correct", self.name, i + 1);
            } else {
                warn!(
                    "{} case {}: expected {:?}, got {:?}",
                    self.name,
                    i + 1,
                    grade.expected,
                    grade.returned
                );
            }
            grades.push(grade);
        }
        Ok(grades)
    }

    /// Serializes the quiz to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    /// Deserializes a `QuizSet` from a JSON file.
    pub fn load_json(path: &str) -> Result<QuizSet> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        Ok(serde_json::from_reader(reader)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FormulaError;

    #[test]
    fn builtin_quiz_passes() {
        let grades = QuizSet::builtin().grade().unwrap();
        assert_eq!(grades.len(), 2);
        assert!(grades.iter().all(|g| g.correct));
    }

    #[test]
    fn wrong_answer_is_graded_incorrect() {
        let quiz = QuizSet {
            name: "wrong".to_string(),
            tolerance: 1e-12,
            cases: vec![QuizCase::CrossEntropy {
                labels: vec![1.0, 0.0, 1.0, 1.0],
                predictions: vec![0.4, 0.6, 0.9, 0.5],
                expected: 4.828313737302301,
            }],
        };
        let grades = quiz.grade().unwrap();
        assert!(!grades[0].correct);
    }

    #[test]
    fn rejected_case_aborts_grading() {
        let quiz = QuizSet {
            name: "bad".to_string(),
            tolerance: 1e-12,
            cases: vec![QuizCase::Softmax { scores: vec![], expected: vec![] }],
        };
        assert!(matches!(quiz.grade(), Err(FormulaError::InvalidInput(_))));
    }

    #[test]
    fn tolerance_defaults_when_missing() {
        let quiz: QuizSet = serde_json::from_str(
            r#"{"name":"q","cases":[{"formula":"softmax","scores":[0.0],"expected":[1.0]}]}"#,
        ).unwrap();
        assert_eq!(quiz.tolerance, 1e-12);
        assert_eq!(quiz.cases[0].formula(), crate::quiz::formula::Formula::Softmax);
    }
}
