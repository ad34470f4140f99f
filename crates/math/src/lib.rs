#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/quantrank/quantrank-rs/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

mod standardize;
pub use standardize::{Normalization, standardize};

mod linalg;
pub use linalg::solve_linear_system;

mod error;
pub use error::MathError;
