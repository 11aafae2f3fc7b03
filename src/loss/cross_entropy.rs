use log::{debug, warn};

use crate::error::{FormulaError, Result};

/// Binary cross-entropy summed over every label/prediction pair:
///   L = -Σ [ y_i·ln(p_i) + (1 - y_i)·ln(1 - p_i) ]
///
/// `labels`      — 0/1 categories, or soft labels in [0, 1]
/// `predictions` — predicted probabilities, same length as `labels`
///
/// No epsilon is added inside `ln`: a prediction of exactly 0 or 1 that
/// contradicts its label yields an infinite loss, and a prediction of 0 or 1
/// paired with a soft label yields NaN. An empty pair of slices sums to 0.
///
/// Returns `FormulaError::InvalidInput` when the lengths differ.
pub fn cross_entropy(labels: &[f64], predictions: &[f64]) -> Result<f64> {
    if labels.len() != predictions.len() {
        return Err(FormulaError::InvalidInput(format!(
            "cross_entropy needs equal lengths, got {} labels and {} predictions",
            labels.len(),
            predictions.len()
        )));
    }

    let loss = -labels
        .iter()
        .zip(predictions.iter())
        .map(|(y, p)| y * p.ln() + (1.0 - y) * (1.0 - p).ln())
        .sum::<f64>();

    if loss.is_finite() {
        debug!("cross_entropy -> {loss}");
    } else {
        warn!("cross_entropy is non-finite ({loss}); a prediction contradicts its label with certainty");
    }
    Ok(loss)
}
