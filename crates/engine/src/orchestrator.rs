//! Full-run orchestration.

use chrono::Utc;
use quantrank_collect::Collector;
use quantrank_factors::{aggregate_factor_weights, rank_features};
use quantrank_math::{Normalization, standardize};
use quantrank_model::{LinearFit, build_feature_matrix, fit_best_ridge, fit_ols};
use quantrank_primitives::{
    AnalysisSnapshot, Date, FactorWeights, Horizon, HorizonReport, LinearReport, RidgeReport,
};
use quantrank_traits::{DataStore, SnapshotRepository};
use tracing::{error, info, warn};

use crate::{DriftReport, EngineError, compute_drift};

/// Maximum ranked coefficients reported per horizon.
pub const TOP_FEATURE_COUNT: usize = 10;

/// Tunables for one engine run.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Minimum collected instruments before any regression is attempted.
    pub min_universe: usize,
    /// Minimum matrix rows for a horizon to be fitted.
    pub min_samples: usize,
    /// Fetch permits for the collector.
    pub concurrency: usize,
    /// Horizon drift is reported on.
    pub reference_horizon: Horizon,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self { min_universe: 10, min_samples: 5, concurrency: 4, reference_horizon: Horizon::D90 }
    }
}

/// Fitted models and retained scaling for one horizon.
///
/// Carried on the outcome so callers can score new observations on the
/// training scale; the serialized snapshot holds only the aggregate view.
#[derive(Debug, Clone)]
pub struct HorizonModel {
    /// Target horizon.
    pub horizon: Horizon,
    /// Ordinary least squares fit.
    pub ols: LinearFit,
    /// Best ridge fit from the grid.
    pub ridge: LinearFit,
    /// Standardization parameters the fits were trained on.
    pub normalization: Normalization,
}

/// Result of one full engine run.
#[derive(Debug, Clone)]
pub struct AnalysisOutcome {
    /// The snapshot that was persisted.
    pub snapshot: AnalysisSnapshot,
    /// Per-horizon fitted models, in processing order.
    pub models: Vec<HorizonModel>,
    /// Drift against the previous "latest" snapshot, when comparable.
    pub drift: Option<DriftReport>,
    /// Recommended preset: 90-day ridge factors, else 30-day, else none.
    pub recommended: Option<FactorWeights>,
}

/// Drives collection, per-horizon training, drift, and persistence.
///
/// Both the data source and the snapshot sink are injected, so tests and
/// alternative deployments substitute their own implementations.
#[derive(Debug)]
pub struct Engine<S, R> {
    store: S,
    repo: R,
    config: EngineConfig,
}

impl<S: DataStore, R: SnapshotRepository> Engine<S, R> {
    /// Create an engine with default configuration.
    pub fn new(store: S, repo: R) -> Self {
        Self::with_config(store, repo, EngineConfig::default())
    }

    /// Create an engine with custom configuration.
    pub const fn with_config(store: S, repo: R, config: EngineConfig) -> Self {
        Self { store, repo, config }
    }

    /// Get the configuration.
    #[must_use]
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Run the full pipeline as of the given date.
    ///
    /// Horizons are processed in the fixed [30, 90, 180, 365] order; a
    /// horizon with too few samples or a failed fit is skipped and the
    /// others proceed independently. The previous "latest" snapshot is read
    /// before the new one overwrites it.
    ///
    /// # Errors
    /// Returns an error when the universe listing fails, fewer than
    /// `min_universe` instruments survive collection, or the new snapshot
    /// cannot be persisted.
    pub async fn run(&self, as_of: Date) -> Result<AnalysisOutcome, EngineError> {
        let collector = Collector::new(self.config.concurrency);
        let universe = collector.collect(&self.store, as_of).await?;

        if universe.len() < self.config.min_universe {
            return Err(EngineError::InsufficientUniverse {
                required: self.config.min_universe,
                actual: universe.len(),
            });
        }

        let previous = match self.repo.load_latest() {
            Ok(previous) => previous,
            Err(err) => {
                warn!(error = %err, "previous snapshot unreadable, drift disabled");
                None
            }
        };

        let mut snapshot = AnalysisSnapshot::new(Utc::now(), as_of, universe.len());
        let mut models = Vec::new();

        for horizon in Horizon::ALL {
            let matrix = build_feature_matrix(&universe, horizon);
            if matrix.n_samples() < self.config.min_samples {
                info!(%horizon, samples = matrix.n_samples(), "horizon skipped: too few samples");
                continue;
            }

            let (z, normalization) = standardize(&matrix.x);

            let ols = match fit_ols(&z, &matrix.y) {
                Ok(fit) => fit,
                Err(err) => {
                    error!(%horizon, error = %err, "horizon skipped: least squares fit failed");
                    continue;
                }
            };
            let ridge = match fit_best_ridge(&z, &matrix.y) {
                Ok(fit) => fit,
                Err(err) => {
                    error!(%horizon, error = %err, "horizon skipped: ridge sweep failed");
                    continue;
                }
            };

            info!(
                %horizon,
                samples = matrix.n_samples(),
                ols_r2 = ols.r_squared,
                ridge_r2 = ridge.r_squared,
                lambda = ridge.lambda.unwrap_or(0.0),
                "horizon fitted"
            );

            snapshot.insert(
                horizon,
                HorizonReport {
                    samples: matrix.n_samples(),
                    features: matrix.n_features(),
                    linear_regression: LinearReport {
                        r2: ols.r_squared,
                        factors: aggregate_factor_weights(&matrix.features, &ols.coefficients),
                    },
                    ridge_regression: RidgeReport {
                        r2: ridge.r_squared,
                        lambda: ridge.lambda.unwrap_or(0.0),
                        factors: aggregate_factor_weights(&matrix.features, &ridge.coefficients),
                    },
                    top_features: rank_features(
                        &matrix.features,
                        &ridge.coefficients,
                        TOP_FEATURE_COUNT,
                    ),
                },
            );
            models.push(HorizonModel { horizon, ols, ridge, normalization });
        }

        let drift = previous
            .as_ref()
            .and_then(|prev| compute_drift(prev, &snapshot, self.config.reference_horizon));

        let recommended = snapshot
            .report(Horizon::D90)
            .or_else(|| snapshot.report(Horizon::D30))
            .map(|report| report.ridge_regression.factors);

        self.repo.store(&snapshot)?;

        Ok(AnalysisOutcome { snapshot, models, drift, recommended })
    }
}
