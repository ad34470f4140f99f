#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/quantrank/quantrank-rs/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

mod returns;
pub use returns::realized_returns;

mod collector;
pub use collector::{Collector, MIN_PRICE_HISTORY, PRICE_HISTORY_WINDOW};

mod error;
pub use error::CollectError;
