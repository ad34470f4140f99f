//! Factor-weight learning CLI tool.
//!
//! Reads instrument data from a directory of JSON files, runs the full
//! learning pipeline, and writes the analysis snapshot files.
//!
//! Usage: `cargo run --bin learn --features cli -- [--data DIR] [--out DIR] [--date YYYY-MM-DD]`
//!
//! Expected data layout:
//! - `<data>/instruments.json` — JSON array of ticker symbols
//! - `<data>/metrics/<SYMBOL>.json` — one stored metrics record
//! - `<data>/prices/<SYMBOL>.json` — price points, most-recent-first

use std::env;
use std::io::ErrorKind;
use std::path::PathBuf;

use anyhow::Context;
use async_trait::async_trait;
use quantrank::engine::{Engine, FsSnapshotRepository};
use quantrank::primitives::{Date, FundamentalMetrics, Horizon, PricePoint, Symbol};
use quantrank::traits::{DataStore, StoreError};
use tracing::info;

/// Default instrument data directory.
const DEFAULT_DATA_DIR: &str = "data";

/// Default snapshot output directory.
const DEFAULT_OUT_DIR: &str = "analysis";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = env::args().collect();
    let data_dir = flag_value(&args, "--data").unwrap_or_else(|| DEFAULT_DATA_DIR.to_string());
    let out_dir = flag_value(&args, "--out").unwrap_or_else(|| DEFAULT_OUT_DIR.to_string());
    let as_of = match flag_value(&args, "--date") {
        Some(raw) => raw.parse::<Date>().with_context(|| format!("invalid --date {raw}"))?,
        None => chrono::Utc::now().date_naive(),
    };

    info!(data = %data_dir, out = %out_dir, %as_of, "starting factor-weight learning run");

    let store = JsonFileStore::new(&data_dir);
    let repo = FsSnapshotRepository::new(&out_dir);
    let engine = Engine::new(store, repo);

    let outcome = engine.run(as_of).await.context("learning run failed")?;

    println!("\nFactor-weight analysis ({} instruments)", outcome.snapshot.data_points);
    println!("{:-<68}", "");
    for horizon in Horizon::ALL {
        match outcome.snapshot.report(horizon) {
            Some(report) => println!(
                "{:>5}: {:>3} samples | OLS R2 {:>7.4} | ridge R2 {:>7.4} (lambda {})",
                horizon.to_string(),
                report.samples,
                report.linear_regression.r2,
                report.ridge_regression.r2,
                report.ridge_regression.lambda,
            ),
            None => println!("{:>5}: skipped (insufficient samples)", horizon.to_string()),
        }
    }

    if let Some(weights) = &outcome.recommended {
        println!("\nRecommended factor preset:");
        println!(
            "  value {:.3} | quality {:.3} | growth {:.3} | momentum {:.3} | risk {:.3}",
            weights.value, weights.quality, weights.growth, weights.momentum, weights.risk,
        );
    } else {
        println!("\nNo horizon produced enough data for a recommended preset.");
    }

    if let Some(drift) = &outcome.drift {
        println!("\nDrift vs previous run ({} horizon):", drift.horizon);
        for delta in &drift.factors {
            println!(
                "  {:>8}: {:.3} -> {:.3}  ({:+.3}, {:+.1}%)",
                delta.factor.to_string(),
                delta.previous,
                delta.current,
                delta.delta,
                delta.pct_change,
            );
        }
        println!(
            "  R2 {:+.4}, samples {:+}",
            drift.r2_delta, drift.samples_delta,
        );
    }

    Ok(())
}

fn flag_value(args: &[String], flag: &str) -> Option<String> {
    args.iter().position(|a| a == flag).and_then(|i| args.get(i + 1).cloned())
}

/// Instrument store backed by a directory of JSON files.
struct JsonFileStore {
    root: PathBuf,
}

impl JsonFileStore {
    fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn read_json<T: serde::de::DeserializeOwned>(
        &self,
        path: PathBuf,
        symbol: &str,
    ) -> Result<Option<T>, StoreError> {
        let payload = match std::fs::read_to_string(&path) {
            Ok(payload) => payload,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(StoreError::Io(err.to_string())),
        };

        serde_json::from_str(&payload)
            .map(Some)
            .map_err(|err| StoreError::Malformed { symbol: symbol.to_string(), reason: err.to_string() })
    }
}

#[async_trait]
impl DataStore for JsonFileStore {
    async fn active_symbols(&self) -> Result<Vec<Symbol>, StoreError> {
        let path = self.root.join("instruments.json");
        let payload = std::fs::read_to_string(&path).map_err(|err| {
            StoreError::Io(format!("{}: {err}", path.display()))
        })?;

        let symbols: Vec<String> = serde_json::from_str(&payload).map_err(|err| {
            StoreError::Malformed { symbol: "instruments".to_string(), reason: err.to_string() }
        })?;
        Ok(symbols.into_iter().map(Symbol::new).collect())
    }

    async fn latest_metrics(
        &self,
        symbol: &Symbol,
    ) -> Result<Option<FundamentalMetrics>, StoreError> {
        let path = self.root.join("metrics").join(format!("{}.json", symbol.as_str()));
        self.read_json(path, symbol.as_str())
    }

    async fn price_history(
        &self,
        symbol: &Symbol,
        limit: usize,
    ) -> Result<Vec<PricePoint>, StoreError> {
        let path = self.root.join("prices").join(format!("{}.json", symbol.as_str()));
        let mut history: Vec<PricePoint> =
            self.read_json(path, symbol.as_str())?.unwrap_or_default();
        history.truncate(limit);
        Ok(history)
    }
}
