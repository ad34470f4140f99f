//! # quantrank
//!
//! A factor-weight learning engine for equity screening.
//!
//! This crate provides a unified interface to the quantrank ecosystem.
//! Individual components can be enabled via feature flags.
//!
//! ## Features
//!
//! - `full` (default): Enables all components
//! - `primitives`: Core type definitions
//! - `traits`: Trait abstractions
//! - `math`: Mathematical operations
//! - `model`: Regression training
//! - `factors`: Feature-to-factor taxonomy
//! - `collect`: Instrument data collection
//! - `engine`: Run orchestration and snapshot history
//! - `cli`: Dependencies for the `learn` binary
//!
//! ## Example
//!
//! ```rust,ignore
//! // With default features (all components):
//! use quantrank::engine::{Engine, EngineConfig};
//! use quantrank::primitives::Horizon;
//!
//! // Or with specific features only:
//! // [dependencies]
//! // quantrank = { version = "0.2", default-features = false, features = ["model"] }
//! ```

#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

#[cfg(feature = "primitives")]
#[doc(inline)]
pub use quantrank_primitives as primitives;
#[cfg(feature = "traits")]
#[doc(inline)]
pub use quantrank_traits as traits;
#[cfg(feature = "math")]
#[doc(inline)]
pub use quantrank_math as math;
#[cfg(feature = "model")]
#[doc(inline)]
pub use quantrank_model as model;
#[cfg(feature = "factors")]
#[doc(inline)]
pub use quantrank_factors as factors;
#[cfg(feature = "collect")]
#[doc(inline)]
pub use quantrank_collect as collect;
#[cfg(feature = "engine")]
#[doc(inline)]
pub use quantrank_engine as engine;
