//! Instrument-level input types.

use derive_more::Display;
use serde::{Deserialize, Serialize};

use crate::{Date, Feature, HorizonReturns};

/// Stock ticker symbol.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub struct Symbol(pub String);

impl Symbol {
    /// Create a new symbol.
    #[must_use]
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Get the symbol as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Symbol {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for Symbol {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// One observation in a price series.
///
/// Series handed to the engine are ordered most-recent-first.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    /// Observation date.
    pub date: Date,
    /// Closing price.
    pub close: f64,
}

impl PricePoint {
    /// Create a new price point.
    #[must_use]
    pub const fn new(date: Date, close: f64) -> Self {
        Self { date, close }
    }
}

/// The stored fundamental/technical metrics for one instrument.
///
/// Every field is nullable; a missing field excludes the instrument from any
/// feature matrix that requires it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FundamentalMetrics {
    /// Trailing price-to-earnings ratio.
    pub pe_ratio: Option<f64>,
    /// Price-to-book ratio.
    pub pb_ratio: Option<f64>,
    /// Price-to-sales ratio.
    pub ps_ratio: Option<f64>,
    /// Forward price-to-earnings ratio.
    pub forward_pe: Option<f64>,
    /// Return on equity.
    pub roe: Option<f64>,
    /// Return on assets.
    pub roa: Option<f64>,
    /// Net profit margin.
    pub profit_margin: Option<f64>,
    /// Debt-to-equity ratio.
    pub debt_to_equity: Option<f64>,
    /// Quarter-over-quarter revenue growth.
    pub revenue_growth_qoq: Option<f64>,
    /// Quarter-over-quarter earnings growth.
    pub earnings_growth_qoq: Option<f64>,
    /// Market beta.
    pub beta: Option<f64>,
    /// Market capitalization.
    pub market_cap: Option<f64>,
    /// Average daily trading volume.
    pub avg_volume: Option<f64>,
    /// Shares outstanding.
    pub shares_outstanding: Option<f64>,
    /// Percentage of shares held by insiders.
    pub insider_percent: Option<f64>,
    /// Percentage of shares held by institutions.
    pub institution_percent: Option<f64>,
}

impl FundamentalMetrics {
    /// Look up a metric by feature.
    #[must_use]
    pub const fn get(&self, feature: Feature) -> Option<f64> {
        match feature {
            Feature::PeRatio => self.pe_ratio,
            Feature::PbRatio => self.pb_ratio,
            Feature::PsRatio => self.ps_ratio,
            Feature::ForwardPe => self.forward_pe,
            Feature::Roe => self.roe,
            Feature::Roa => self.roa,
            Feature::ProfitMargin => self.profit_margin,
            Feature::DebtToEquity => self.debt_to_equity,
            Feature::RevenueGrowthQoq => self.revenue_growth_qoq,
            Feature::EarningsGrowthQoq => self.earnings_growth_qoq,
            Feature::Beta => self.beta,
            Feature::MarketCap => self.market_cap,
            Feature::AvgVolume => self.avg_volume,
            Feature::SharesOutstanding => self.shares_outstanding,
            Feature::InsiderPercent => self.insider_percent,
            Feature::InstitutionPercent => self.institution_percent,
        }
    }
}

/// One instrument's features and realized forward returns, built fresh per
/// run and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstrumentSnapshot {
    /// Ticker symbol.
    pub symbol: Symbol,
    /// Stored metrics at collection time.
    pub metrics: FundamentalMetrics,
    /// Realized returns over the fixed horizons.
    pub returns: HorizonReturns,
}

impl InstrumentSnapshot {
    /// Create a new instrument snapshot.
    #[must_use]
    pub const fn new(
        symbol: Symbol,
        metrics: FundamentalMetrics,
        returns: HorizonReturns,
    ) -> Self {
        Self { symbol, metrics, returns }
    }

    /// Look up a feature value.
    #[must_use]
    pub const fn feature(&self, feature: Feature) -> Option<f64> {
        self.metrics.get(feature)
    }
}
