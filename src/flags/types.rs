use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::types::{MarketRegion, NewsItem};

/// Semantic condition tag derived from continuous features.
///
/// A closed vocabulary: the classifier can only emit these, and the
/// profile rules can only test these, so a typo on either side fails to
/// compile instead of silently never matching. The literal string values
/// appear only at the serialization boundary.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Flag {
    TrendUpStrong,
    TrendDown,
    RangeBound,
    MomentumSpike,
    MomentumUp,
    MomentumDown,
    SpikeUp,
    SpikeDown,
    TechExtremeOverbought,
    TechOverbought,
    TechExtremeOversold,
    TechOversold,
    VolatilityHigh,
    VolatilityLow,
    ValuationExpensive,
    ValuationCheap,
    QualityStrong,
    QualityWeak,
    MarketRiskOff,
    MarketRiskOn,
    NewsPositiveEvent,
    NewsNegativeEvent,
    NewsMixedOrThin,
    NewsLowRelevance,
    NeutralSignal,
}

impl Flag {
    pub fn as_str(&self) -> &'static str {
        match self {
            Flag::TrendUpStrong => "TREND_UP_STRONG",
            Flag::TrendDown => "TREND_DOWN",
            Flag::RangeBound => "RANGE_BOUND",
            Flag::MomentumSpike => "MOMENTUM_SPIKE",
            Flag::MomentumUp => "MOMENTUM_UP",
            Flag::MomentumDown => "MOMENTUM_DOWN",
            Flag::SpikeUp => "SPIKE_UP",
            Flag::SpikeDown => "SPIKE_DOWN",
            Flag::TechExtremeOverbought => "TECH_EXTREME_OVERBOUGHT",
            Flag::TechOverbought => "TECH_OVERBOUGHT",
            Flag::TechExtremeOversold => "TECH_EXTREME_OVERSOLD",
            Flag::TechOversold => "TECH_OVERSOLD",
            Flag::VolatilityHigh => "VOLATILITY_HIGH",
            Flag::VolatilityLow => "VOLATILITY_LOW",
            Flag::ValuationExpensive => "VALUATION_EXPENSIVE",
            Flag::ValuationCheap => "VALUATION_CHEAP",
            Flag::QualityStrong => "QUALITY_STRONG",
            Flag::QualityWeak => "QUALITY_WEAK",
            Flag::MarketRiskOff => "MARKET_RISK_OFF",
            Flag::MarketRiskOn => "MARKET_RISK_ON",
            Flag::NewsPositiveEvent => "NEWS_POSITIVE_EVENT",
            Flag::NewsNegativeEvent => "NEWS_NEGATIVE_EVENT",
            Flag::NewsMixedOrThin => "NEWS_MIXED_OR_THIN",
            Flag::NewsLowRelevance => "NEWS_LOW_RELEVANCE",
            Flag::NeutralSignal => "NEUTRAL_SIGNAL",
        }
    }
}

impl fmt::Display for Flag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Raw features feeding one classification pass. Returns are percentages
/// over the named window; volatility is annualized percent; the risk
/// index is a VIX-like market-wide gauge.
#[derive(Clone, Debug, Default)]
pub struct FeatureSet {
    pub ticker: String,
    pub company_name: String,
    pub region: MarketRegion,
    pub ret_1w: f64,
    pub ret_1m: f64,
    pub ret_3m: f64,
    pub rsi: f64,
    pub volatility: f64,
    pub pe: Option<f64>,
    /// Fractions below 1.0 are treated as ratios and scaled to percent.
    pub roe: Option<f64>,
    pub risk_index: Option<f64>,
    pub news: Vec<NewsItem>,
}
