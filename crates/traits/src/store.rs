//! Instrument data access trait definitions.

use async_trait::async_trait;
use quantrank_primitives::{FundamentalMetrics, PricePoint, Symbol};

/// Errors that can occur while reading instrument data.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Instrument is unknown to the store.
    #[error("instrument not found: {0}")]
    NotFound(String),

    /// Underlying I/O failure.
    #[error("i/o error: {0}")]
    Io(String),

    /// Stored record could not be decoded.
    #[error("malformed record for {symbol}: {reason}")]
    Malformed {
        /// Affected instrument.
        symbol: String,
        /// Decode failure description.
        reason: String,
    },

    /// Backend-specific failure.
    #[error("backend error: {0}")]
    Backend(String),
}

impl StoreError {
    /// Returns whether this error affects a single instrument only.
    #[must_use]
    pub const fn is_instrument_local(&self) -> bool {
        matches!(self, Self::NotFound(_) | Self::Malformed { .. })
    }
}

/// Read access to stored instrument data.
///
/// The engine owns no persistence; an implementation of this trait is
/// injected into the collector and orchestrator.
#[async_trait]
pub trait DataStore: Send + Sync {
    /// Symbols of all active instruments.
    async fn active_symbols(&self) -> Result<Vec<Symbol>, StoreError>;

    /// Latest stored metrics for one instrument, `None` when no metrics
    /// record exists.
    async fn latest_metrics(&self, symbol: &Symbol)
    -> Result<Option<FundamentalMetrics>, StoreError>;

    /// Up to `limit` most recent price points, ordered most-recent-first.
    async fn price_history(
        &self,
        symbol: &Symbol,
        limit: usize,
    ) -> Result<Vec<PricePoint>, StoreError>;
}
