use serde::{Serialize, Deserialize};

use crate::activation::softmax::softmax;
use crate::error::Result;
use crate::loss::cross_entropy::cross_entropy;
use crate::quiz::formula::Formula;

/// One quiz question: the inputs to a formula and the answer it must produce.
///
/// Serialized with a `formula` tag, e.g.
/// `{"formula":"softmax","scores":[5,6,7],"expected":[...]}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "formula", rename_all = "snake_case")]
pub enum QuizCase {
    Softmax {
        scores: Vec<f64>,
        expected: Vec<f64>,
    },
    CrossEntropy {
        labels: Vec<f64>,
        predictions: Vec<f64>,
        expected: f64,
    },
}

impl QuizCase {
    pub fn formula(&self) -> Formula {
        match self {
            QuizCase::Softmax { .. } => Formula::Softmax,
            QuizCase::CrossEntropy { .. } => Formula::CrossEntropy,
        }
    }

    /// The answer this case expects, flattened to a list.
    pub fn expected(&self) -> Vec<f64> {
        match self {
            QuizCase::Softmax { expected, .. } => expected.clone(),
            QuizCase::CrossEntropy { expected, .. } => vec![*expected],
        }
    }

    /// Runs the formula on this case's inputs.
    pub fn evaluate(&self) -> Result<Vec<f64>> {
        match self {
            QuizCase::Softmax { scores, .. } => softmax(scores),
            QuizCase::CrossEntropy { labels, predictions, .. } => {
                cross_entropy(labels, predictions).map(|loss| vec![loss])
            }
        }
    }
}
