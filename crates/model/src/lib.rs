#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/quantrank/quantrank-rs/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

mod design;
pub use design::build_feature_matrix;

mod regression;
pub use regression::{LinearFit, RIDGE_GRID, fit_best_ridge, fit_least_squares, fit_ols};

mod error;
pub use error::ModelError;
