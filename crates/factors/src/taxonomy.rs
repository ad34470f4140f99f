//! Static feature-to-factor assignment.

use quantrank_primitives::{Factor, Feature};

/// The economic factor a feature belongs to.
///
/// This table is declared taxonomy, not computed: every feature maps to
/// exactly one factor, and changes here are reviewed as product decisions.
#[must_use]
pub const fn factor_for(feature: Feature) -> Factor {
    match feature {
        Feature::PeRatio | Feature::PbRatio | Feature::PsRatio | Feature::ForwardPe => {
            Factor::Value
        }
        Feature::Roe
        | Feature::Roa
        | Feature::ProfitMargin
        | Feature::InsiderPercent
        | Feature::InstitutionPercent => Factor::Quality,
        Feature::RevenueGrowthQoq | Feature::EarningsGrowthQoq => Factor::Growth,
        Feature::AvgVolume => Factor::Momentum,
        Feature::Beta | Feature::DebtToEquity | Feature::MarketCap | Feature::SharesOutstanding => {
            Factor::Risk
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_feature_is_assigned() {
        let mut counts = [0usize; 5];
        for feature in Feature::ALL {
            let idx = Factor::ALL.iter().position(|&f| f == factor_for(feature)).unwrap();
            counts[idx] += 1;
        }
        // value, quality, growth, momentum, risk
        assert_eq!(counts, [4, 5, 2, 1, 4]);
    }

    #[test]
    fn valuation_multiples_are_value() {
        assert_eq!(factor_for(Feature::PeRatio), Factor::Value);
        assert_eq!(factor_for(Feature::ForwardPe), Factor::Value);
    }

    #[test]
    fn leverage_and_size_are_risk() {
        assert_eq!(factor_for(Feature::DebtToEquity), Factor::Risk);
        assert_eq!(factor_for(Feature::MarketCap), Factor::Risk);
        assert_eq!(factor_for(Feature::SharesOutstanding), Factor::Risk);
    }
}
