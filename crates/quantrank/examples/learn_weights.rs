//! Run the full learning pipeline over a small in-memory universe.
//!
//! Usage: `cargo run --example learn_weights`

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Duration;
use quantrank::engine::{Engine, FsSnapshotRepository};
use quantrank::primitives::{Date, FundamentalMetrics, Horizon, PricePoint, Symbol};
use quantrank::traits::{DataStore, StoreError};

struct DemoStore {
    metrics: HashMap<String, FundamentalMetrics>,
    prices: HashMap<String, Vec<PricePoint>>,
}

#[async_trait]
impl DataStore for DemoStore {
    async fn active_symbols(&self) -> Result<Vec<Symbol>, StoreError> {
        let mut symbols: Vec<String> = self.metrics.keys().cloned().collect();
        symbols.sort();
        Ok(symbols.into_iter().map(Symbol::new).collect())
    }

    async fn latest_metrics(
        &self,
        symbol: &Symbol,
    ) -> Result<Option<FundamentalMetrics>, StoreError> {
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

fn demo_universe(as_of: Date) -> DemoStore {
    let mut metrics = HashMap::new();
    let mut prices = HashMap::new();

    for i in 0..15usize {
        let f = i as f64;
        let symbol = format!("DEMO{i:02}");

        metrics.insert(
            symbol.clone(),
            FundamentalMetrics {
                pe_ratio: Some(8.0 + 2.0 * f),
                pb_ratio: Some(0.8 + 0.25 * f),
                ps_ratio: Some(1.5 + 0.4 * f),
                forward_pe: Some(7.0 + 1.8 * f),
                roe: Some(0.04 + 0.012 * f),
                roa: Some(0.02 + 0.006 * f),
                profit_margin: Some(0.08 + 0.015 * f),
                debt_to_equity: Some(1.6 - 0.07 * f),
                revenue_growth_qoq: Some(-0.02 + 0.008 * f),
                earnings_growth_qoq: Some(-0.01 + 0.006 * f),
                beta: Some(0.7 + 0.06 * f),
                market_cap: Some(2.0e9 * (1.0 + f)),
                avg_volume: Some(8.0e5 + 3.0e5 * f),
                shares_outstanding: Some(9.0e7 + 4.0e7 * f),
                insider_percent: Some(0.3 + 0.25 * f),
                institution_percent: Some(35.0 + 3.0 * f),
            },
        );

        // A year of daily closes; cheaper names trend up a little faster.
        let drift = 0.0004 + 0.0002 * f;
        let series: Vec<PricePoint> = (0..365)
            .map(|age| {
                let close = 80.0 * (1.0 - drift).powi(age as i32);
                PricePoint::new(as_of - Duration::days(age as i64), close)
            })
            .collect();
        prices.insert(symbol, series);
    }

    DemoStore { metrics, prices }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let as_of = chrono::Utc::now().date_naive();
    let out_dir = std::env::temp_dir().join("quantrank-demo");

    let engine = Engine::new(demo_universe(as_of), FsSnapshotRepository::new(&out_dir));
    let outcome = engine.run(as_of).await?;

    println!("Fitted horizons:");
    for horizon in Horizon::ALL {
        if let Some(report) = outcome.snapshot.report(horizon) {
            println!(
                "  {horizon}: {} samples, ridge R2 {:.4} (lambda {})",
                report.samples, report.ridge_regression.r2, report.ridge_regression.lambda,
            );
        }
    }

    if let Some(weights) = outcome.recommended {
        println!("\nRecommended preset:");
        println!(
            "  value {:.3} | quality {:.3} | growth {:.3} | momentum {:.3} | risk {:.3}",
            weights.value, weights.quality, weights.growth, weights.momentum, weights.risk,
        );
    }

    println!("\nSnapshots written under {}", out_dir.display());
    Ok(())
}
