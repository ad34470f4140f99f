//! The fixed feature set used as regression inputs.

/// A named fundamental/technical feature.
///
/// `Feature::ALL` fixes the canonical column order of every feature matrix.
/// Realized returns are regression targets and are deliberately not part of
/// this enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feature {
    /// Trailing price-to-earnings ratio.
    PeRatio,
    /// Price-to-book ratio.
    PbRatio,
    /// Price-to-sales ratio.
    PsRatio,
    /// Forward price-to-earnings ratio.
    ForwardPe,
    /// Return on equity.
    Roe,
    /// Return on assets.
    Roa,
    /// Net profit margin.
    ProfitMargin,
    /// Debt-to-equity ratio.
    DebtToEquity,
    /// Quarter-over-quarter revenue growth.
    RevenueGrowthQoq,
    /// Quarter-over-quarter earnings growth.
    EarningsGrowthQoq,
    /// Market beta.
    Beta,
    /// Market capitalization.
    MarketCap,
    /// Average daily trading volume.
    AvgVolume,
    /// Shares outstanding.
    SharesOutstanding,
    /// Percentage of shares held by insiders.
    InsiderPercent,
    /// Percentage of shares held by institutions.
    InstitutionPercent,
}

impl Feature {
    /// All features in canonical matrix-column order.
    pub const ALL: [Self; 16] = [
        Self::PeRatio,
        Self::PbRatio,
        Self::PsRatio,
        Self::ForwardPe,
        Self::Roe,
        Self::Roa,
        Self::ProfitMargin,
        Self::DebtToEquity,
        Self::RevenueGrowthQoq,
        Self::EarningsGrowthQoq,
        Self::Beta,
        Self::MarketCap,
        Self::AvgVolume,
        Self::SharesOutstanding,
        Self::InsiderPercent,
        Self::InstitutionPercent,
    ];

    /// Stable name used in snapshots and store records.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::PeRatio => "pe_ratio",
            Self::PbRatio => "pb_ratio",
            Self::PsRatio => "ps_ratio",
            Self::ForwardPe => "forward_pe",
            Self::Roe => "roe",
            Self::Roa => "roa",
            Self::ProfitMargin => "profit_margin",
            Self::DebtToEquity => "debt_to_equity",
            Self::RevenueGrowthQoq => "revenue_growth_qoq",
            Self::EarningsGrowthQoq => "earnings_growth_qoq",
            Self::Beta => "beta",
            Self::MarketCap => "market_cap",
            Self::AvgVolume => "avg_volume",
            Self::SharesOutstanding => "shares_outstanding",
            Self::InsiderPercent => "insider_percent",
            Self::InstitutionPercent => "institution_percent",
        }
    }
}

impl std::fmt::Display for Feature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn canonical_order_is_complete_and_unique() {
        let names: HashSet<&str> = Feature::ALL.iter().map(|f| f.name()).collect();
        assert_eq!(names.len(), Feature::ALL.len());
    }

    #[test]
    fn display_matches_name() {
        assert_eq!(Feature::PeRatio.to_string(), "pe_ratio");
        assert_eq!(Feature::InstitutionPercent.to_string(), "institution_percent");
    }
}
