use log::{debug, warn};

use crate::error::{FormulaError, Result};

/// Maps an ordered sequence of scores (logits) to a probability distribution:
///   softmax(x)_i = exp(x_i) / Σ_j exp(x_j)
///
/// The output has the same length and order as `scores`. No max-shift is
/// applied, so inputs above roughly 709 overflow `exp` and the result holds
/// NaN. Use `softmax_stable` when inputs may be that large.
///
/// Returns `FormulaError::InvalidInput` for an empty slice.
pub fn softmax(scores: &[f64]) -> Result<Vec<f64>> {
    if scores.is_empty() {
        return Err(FormulaError::InvalidInput(
            "softmax requires at least one score".to_string(),
        ));
    }

    let denominator: f64 = scores.iter().map(|x| x.exp()).sum();
    let result: Vec<f64> = scores.iter().map(|x| x.exp() / denominator).collect();

    report(&result);
    Ok(result)
}

/// Softmax with the maximum score subtracted before exponentiating.
///
/// Agrees with `softmax` up to rounding for moderate inputs and stays finite
/// for any finite input, since the largest exponent is exactly 0. Non-finite
/// scores are not shifted away: an infinite or NaN score makes the result NaN.
pub fn softmax_stable(scores: &[f64]) -> Result<Vec<f64>> {
    let max = scores
        .iter()
        .copied()
        .fold(None, |acc: Option<f64>, x| Some(acc.map_or(x, |m| m.max(x))))
        .ok_or_else(|| {
            FormulaError::InvalidInput("softmax requires at least one score".to_string())
        })?;

    let exps: Vec<f64> = scores.iter().map(|x| (x - max).exp()).collect();
    let denominator: f64 = exps.iter().sum();
    let result: Vec<f64> = exps.into_iter().map(|e| e / denominator).collect();

    report(&result);
    Ok(result)
}

fn report(result: &[f64]) {
    if result.iter().any(|p| !p.is_finite()) {
        warn!("softmax produced non-finite values: {:?}", result);
    } else {
        debug!("softmax -> {:?}", result);
    }
}
