#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/quantrank/quantrank-rs/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

mod repository;
pub use repository::FsSnapshotRepository;

mod drift;
pub use drift::{DriftReport, FactorDelta, compute_drift};

mod orchestrator;
pub use orchestrator::{AnalysisOutcome, Engine, EngineConfig, HorizonModel, TOP_FEATURE_COUNT};

mod error;
pub use error::EngineError;
