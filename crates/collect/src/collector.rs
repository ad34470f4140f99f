//! Per-instrument snapshot collection.

use futures_util::{StreamExt, stream};
use quantrank_primitives::{Date, InstrumentSnapshot, Symbol};
use quantrank_traits::DataStore;
use tracing::{debug, info, warn};

use crate::{CollectError, realized_returns};

/// Minimum price points an instrument needs to be considered.
pub const MIN_PRICE_HISTORY: usize = 30;

/// Most recent price points fetched per instrument.
pub const PRICE_HISTORY_WINDOW: usize = 365;

/// Assembles one [`InstrumentSnapshot`] per usable instrument.
///
/// Fetches run through a fixed-permit concurrent pipeline; completion order
/// does not affect the result set, and the collector returns only after
/// every fetch has settled.
#[derive(Debug, Clone)]
pub struct Collector {
    concurrency: usize,
}

impl Collector {
    /// Create a collector with the given fetch-permit count.
    #[must_use]
    pub const fn new(concurrency: usize) -> Self {
        Self { concurrency }
    }

    /// Collect snapshots for every active instrument.
    ///
    /// Instruments without metrics, with fewer than [`MIN_PRICE_HISTORY`]
    /// price points, or with no computable 30/90/180-day return are skipped
    /// with a logged reason. Per-instrument store errors are logged and
    /// non-fatal.
    ///
    /// # Errors
    /// Returns an error only when the active-instrument listing itself
    /// cannot be read.
    pub async fn collect<S: DataStore>(
        &self,
        store: &S,
        as_of: Date,
    ) -> Result<Vec<InstrumentSnapshot>, CollectError> {
        let symbols = store.active_symbols().await?;
        let universe = symbols.len();

        let snapshots: Vec<InstrumentSnapshot> = stream::iter(symbols)
            .map(|symbol| assemble(store, symbol, as_of))
            .buffer_unordered(self.concurrency.max(1))
            .filter_map(|snapshot| async move { snapshot })
            .collect()
            .await;

        info!(universe, collected = snapshots.len(), "instrument collection finished");
        Ok(snapshots)
    }
}

impl Default for Collector {
    fn default() -> Self {
        Self::new(4)
    }
}

async fn assemble<S: DataStore>(
    store: &S,
    symbol: Symbol,
    as_of: Date,
) -> Option<InstrumentSnapshot> {
    let metrics = match store.latest_metrics(&symbol).await {
        Ok(Some(metrics)) => metrics,
        Ok(None) => {
            debug!(symbol = %symbol, "skipped: no stored metrics");
            return None;
        }
        Err(err) => {
            warn!(symbol = %symbol, error = %err, "skipped: metrics fetch failed");
            return None;
        }
    };

    let history = match store.price_history(&symbol, PRICE_HISTORY_WINDOW).await {
        Ok(history) => history,
        Err(err) => {
            warn!(symbol = %symbol, error = %err, "skipped: price history fetch failed");
            return None;
        }
    };

    if history.len() < MIN_PRICE_HISTORY {
        debug!(symbol = %symbol, points = history.len(), "skipped: price history too short");
        return None;
    }

    let returns = realized_returns(&history, as_of);
    if !returns.has_recent() {
        debug!(symbol = %symbol, "skipped: no computable 30/90/180-day return");
        return None;
    }

    Some(InstrumentSnapshot::new(symbol, metrics, returns))
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use async_trait::async_trait;
    use chrono::Duration;
    use quantrank_primitives::{FundamentalMetrics, PricePoint};
    use quantrank_traits::{DataStore, StoreError};

    use super::*;

    struct FakeStore {
        metrics: HashMap<String, FundamentalMetrics>,
        prices: HashMap<String, Vec<PricePoint>>,
        fail_symbol: Option<String>,
    }

    #[async_trait]
    impl DataStore for FakeStore {
        async fn active_symbols(&self) -> Result<Vec<Symbol>, StoreError> {
            let mut symbols: Vec<String> = self.prices.keys().cloned().collect();
            symbols.sort();
            Ok(symbols.into_iter().map(Symbol::new).collect())
        }

        async fn latest_metrics(
            &self,
            symbol: &Symbol,
        ) -> Result<Option<FundamentalMetrics>, StoreError> {
            if self.fail_symbol.as_deref() == Some(symbol.as_str()) {
                return Err(StoreError::Backend("injected failure".to_string()));
            }
            Ok(self.metrics.get(symbol.as_str()).cloned())
        }

        async fn price_history(
            &self,
            symbol: &Symbol,
            limit: usize,
        ) -> Result<Vec<PricePoint>, StoreError> {
            let mut history = self.prices.get(symbol.as_str()).cloned().unwrap_or_default();
            history.truncate(limit);
            Ok(history)
        }
    }

    fn as_of() -> Date {
        Date::from_ymd_opt(2026, 8, 7).unwrap()
    }

    fn daily_history(days: usize) -> Vec<PricePoint> {
        (0..days)
            .map(|i| {
                PricePoint::new(as_of() - Duration::days(i as i64), 100.0 + i as f64 * 0.5)
            })
            .collect()
    }

    fn metrics() -> FundamentalMetrics {
        FundamentalMetrics { pe_ratio: Some(20.0), ..FundamentalMetrics::default() }
    }

    #[tokio::test]
    async fn collects_usable_instruments() {
        let store = FakeStore {
            metrics: [("AAA".to_string(), metrics()), ("BBB".to_string(), metrics())].into(),
            prices: [
                ("AAA".to_string(), daily_history(120)),
                ("BBB".to_string(), daily_history(60)),
            ]
            .into(),
            fail_symbol: None,
        };

        let snapshots = Collector::new(2).collect(&store, as_of()).await.unwrap();
        assert_eq!(snapshots.len(), 2);
        let aaa = snapshots.iter().find(|s| s.symbol.as_str() == "AAA").unwrap();
        assert!(aaa.returns.d30.is_some());
        assert!(aaa.returns.d90.is_some());
    }

    #[tokio::test]
    async fn skips_missing_metrics_and_short_history() {
        let store = FakeStore {
            // CCC has prices but no metrics; DDD has metrics but 10 points.
            metrics: [("DDD".to_string(), metrics()), ("EEE".to_string(), metrics())].into(),
            prices: [
                ("CCC".to_string(), daily_history(120)),
                ("DDD".to_string(), daily_history(10)),
                ("EEE".to_string(), daily_history(120)),
            ]
            .into(),
            fail_symbol: None,
        };

        let snapshots = Collector::default().collect(&store, as_of()).await.unwrap();
        assert_eq!(snapshots.len(), 1);
        assert_eq!(snapshots[0].symbol.as_str(), "EEE");
    }

    #[tokio::test]
    async fn recent_only_history_is_skipped() {
        // Two points per day over the last 20 days clears the length
        // threshold, but nothing is old enough to anchor any horizon.
        let recent: Vec<PricePoint> = (0..40)
            .map(|i| PricePoint::new(as_of() - Duration::days(i as i64 / 2), 90.0 + i as f64))
            .collect();

        let store = FakeStore {
            metrics: [("NEW".to_string(), metrics())].into(),
            prices: [("NEW".to_string(), recent)].into(),
            fail_symbol: None,
        };

        let snapshots = Collector::default().collect(&store, as_of()).await.unwrap();
        assert!(snapshots.is_empty());
    }

    #[tokio::test]
    async fn per_instrument_failure_is_non_fatal() {
        let store = FakeStore {
            metrics: [("AAA".to_string(), metrics()), ("BAD".to_string(), metrics())].into(),
            prices: [
                ("AAA".to_string(), daily_history(120)),
                ("BAD".to_string(), daily_history(120)),
            ]
            .into(),
            fail_symbol: Some("BAD".to_string()),
        };

        let snapshots = Collector::default().collect(&store, as_of()).await.unwrap();
        assert_eq!(snapshots.len(), 1);
        assert_eq!(snapshots[0].symbol.as_str(), "AAA");
    }
}
