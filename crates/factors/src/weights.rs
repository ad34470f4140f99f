//! Coefficient aggregation into factor weights.

use ndarray::Array1;
use quantrank_primitives::{Factor, FactorWeights, Feature, TopFeature};

use crate::factor_for;

/// Aggregate fitted coefficients into normalized factor weights.
///
/// Each factor's raw importance is the mean absolute coefficient over the
/// features mapped to it (0 when no feature maps there). The five
/// importances are normalized to sum to 1; when the total importance is
/// exactly zero the equal-weight fallback is returned instead.
#[must_use]
pub fn aggregate_factor_weights(
    features: &[Feature],
    coefficients: &Array1<f64>,
) -> FactorWeights {
    let mut sums = [0.0f64; 5];
    let mut counts = [0usize; 5];

    for (&feature, &coefficient) in features.iter().zip(coefficients.iter()) {
        let idx = factor_index(factor_for(feature));
        sums[idx] += coefficient.abs();
        counts[idx] += 1;
    }

    let mut means = [0.0f64; 5];
    for idx in 0..5 {
        if counts[idx] > 0 {
            means[idx] = sums[idx] / counts[idx] as f64;
        }
    }

    let total: f64 = means.iter().sum();
    if total == 0.0 {
        return FactorWeights::EQUAL;
    }

    FactorWeights {
        value: means[0] / total,
        quality: means[1] / total,
        growth: means[2] / total,
        momentum: means[3] / total,
        risk: means[4] / total,
    }
}

/// Rank features by descending coefficient magnitude.
///
/// Returns at most `limit` entries, each carrying the feature's mapped
/// factor for downstream display.
#[must_use]
pub fn rank_features(
    features: &[Feature],
    coefficients: &Array1<f64>,
    limit: usize,
) -> Vec<TopFeature> {
    let mut ranked: Vec<TopFeature> = features
        .iter()
        .zip(coefficients.iter())
        .map(|(&feature, &coefficient)| TopFeature {
            name: feature.name().to_string(),
            coefficient,
            factor: factor_for(feature),
        })
        .collect();

    ranked.sort_by(|a, b| b.coefficient.abs().total_cmp(&a.coefficient.abs()));
    ranked.truncate(limit);
    ranked
}

const fn factor_index(factor: Factor) -> usize {
    match factor {
        Factor::Value => 0,
        Factor::Quality => 1,
        Factor::Growth => 2,
        Factor::Momentum => 3,
        Factor::Risk => 4,
    }
}
