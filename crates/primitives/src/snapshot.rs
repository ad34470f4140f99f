//! Serialized analysis snapshot schema.
//!
//! The JSON layout is a published contract consumed by the screening
//! preset feature; field spellings here are load-bearing.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{Date, Factor, FactorWeights, Horizon};

/// One ranked regression coefficient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopFeature {
    /// Feature name.
    pub name: String,
    /// Fitted coefficient on the standardized feature.
    pub coefficient: f64,
    /// Factor the feature maps to.
    pub factor: Factor,
}

/// Ordinary least squares results for one horizon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearReport {
    /// In-sample coefficient of determination.
    pub r2: f64,
    /// Aggregated factor weights.
    pub factors: FactorWeights,
}

/// Best ridge regression results for one horizon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RidgeReport {
    /// In-sample coefficient of determination.
    pub r2: f64,
    /// Selected regularization strength.
    pub lambda: f64,
    /// Aggregated factor weights.
    pub factors: FactorWeights,
}

/// Full results for one target horizon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HorizonReport {
    /// Rows that survived feature filtering.
    pub samples: usize,
    /// Feature columns used.
    pub features: usize,
    /// OLS fit.
    pub linear_regression: LinearReport,
    /// Best ridge fit from the regularization grid.
    pub ridge_regression: RidgeReport,
    /// Up to ten coefficients ranked by descending magnitude.
    pub top_features: Vec<TopFeature>,
}

/// Dated, versioned record of one full engine run.
///
/// Written to a dated history file and to an overwritten "latest" file;
/// the previous "latest" is what run-over-run drift is computed against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisSnapshot {
    /// Generation timestamp.
    pub generated_at: DateTime<Utc>,
    /// Generation calendar day.
    pub generated_date: Date,
    /// Number of instrument snapshots collected.
    pub data_points: usize,
    /// 30-day horizon results, absent when under-sampled.
    #[serde(rename = "return30d", default, skip_serializing_if = "Option::is_none")]
    pub return_30d: Option<HorizonReport>,
    /// 90-day horizon results, absent when under-sampled.
    #[serde(rename = "return90d", default, skip_serializing_if = "Option::is_none")]
    pub return_90d: Option<HorizonReport>,
    /// 180-day horizon results, absent when under-sampled.
    #[serde(rename = "return180d", default, skip_serializing_if = "Option::is_none")]
    pub return_180d: Option<HorizonReport>,
    /// 365-day horizon results, absent when under-sampled.
    #[serde(rename = "return365d", default, skip_serializing_if = "Option::is_none")]
    pub return_365d: Option<HorizonReport>,
}

impl AnalysisSnapshot {
    /// Create an empty snapshot shell.
    #[must_use]
    pub const fn new(generated_at: DateTime<Utc>, generated_date: Date, data_points: usize) -> Self {
        Self {
            generated_at,
            generated_date,
            data_points,
            return_30d: None,
            return_90d: None,
            return_180d: None,
            return_365d: None,
        }
    }

    /// Results for a horizon, if that horizon was fitted.
    #[must_use]
    pub const fn report(&self, horizon: Horizon) -> Option<&HorizonReport> {
        match horizon {
            Horizon::D30 => self.return_30d.as_ref(),
            Horizon::D90 => self.return_90d.as_ref(),
            Horizon::D180 => self.return_180d.as_ref(),
            Horizon::D365 => self.return_365d.as_ref(),
        }
    }

    /// Attach results for a horizon.
    pub fn insert(&mut self, horizon: Horizon, report: HorizonReport) {
        match horizon {
            Horizon::D30 => self.return_30d = Some(report),
            Horizon::D90 => self.return_90d = Some(report),
            Horizon::D180 => self.return_180d = Some(report),
            Horizon::D365 => self.return_365d = Some(report),
        }
    }
}
