#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/quantrank/quantrank-rs/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

mod instrument;
pub use instrument::{FundamentalMetrics, InstrumentSnapshot, PricePoint, Symbol};

mod feature;
pub use feature::Feature;

mod horizon;
pub use horizon::{Horizon, HorizonReturns};

mod factor;
pub use factor::{Factor, FactorWeights};

mod matrix;
pub use matrix::FeatureMatrix;

mod snapshot;
pub use snapshot::{AnalysisSnapshot, HorizonReport, LinearReport, RidgeReport, TopFeature};

/// Re-export common date type.
pub type Date = chrono::NaiveDate;
