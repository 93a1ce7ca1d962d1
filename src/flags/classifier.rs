//! Flag classifier.
//!
//! Each feature dimension contributes flags independently through fixed
//! thresholds; the dimensions never interact. NaN inputs simply fail every
//! comparison and contribute nothing. The news dimension always yields
//! exactly one flag, and a floor tops the set up to three so downstream
//! pattern matching always has something to work with.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};

use crate::config::config::NewsCfg;
use crate::core::types::MarketRegion;
use crate::flags::types::{FeatureSet, Flag};
use crate::news::relevance::{RelevanceScorer, TitleTone};

// 3-month trend.
const TREND_STRONG: f64 = 20.0;
const TREND_WEAK: f64 = -15.0;
const RANGE_BAND: f64 = 5.0;

// 1-month momentum.
const MOMENTUM_SPIKE: f64 = 15.0;
const MOMENTUM_STEP: f64 = 5.0;

const RSI_EXTREME_OVERBOUGHT: f64 = 80.0;
const RSI_OVERBOUGHT: f64 = 70.0;
const RSI_EXTREME_OVERSOLD: f64 = 20.0;
const RSI_OVERSOLD: f64 = 30.0;

const VOLATILITY_HIGH: f64 = 50.0;
const VOLATILITY_LOW: f64 = 20.0;

// P/E bands differ by listing market.
const PE_EXPENSIVE_KOREA: f64 = 25.0;
const PE_CHEAP_KOREA: f64 = 8.0;
const PE_EXPENSIVE_US: f64 = 35.0;
const PE_CHEAP_US: f64 = 12.0;

const ROE_STRONG: f64 = 20.0;
const ROE_WEAK: f64 = 5.0;

const RISK_OFF: f64 = 25.0;
const RISK_ON: f64 = 15.0;

const MIN_FLAGS: usize = 3;

pub struct FlagClassifier {
    cfg: NewsCfg,
    relevance: RelevanceScorer,
}

impl FlagClassifier {
    pub fn new(cfg: NewsCfg) -> Self {
        Self {
            cfg,
            relevance: RelevanceScorer::new(),
        }
    }

    pub fn classify(&self, features: &FeatureSet, now: DateTime<Utc>) -> BTreeSet<Flag> {
        let mut flags = BTreeSet::new();

        // 1. Trend (3m)
        if features.ret_3m > TREND_STRONG {
            flags.insert(Flag::TrendUpStrong);
        } else if features.ret_3m < TREND_WEAK {
            flags.insert(Flag::TrendDown);
        } else if features.ret_3m > -RANGE_BAND && features.ret_3m < RANGE_BAND {
            flags.insert(Flag::RangeBound);
        }

        // 2. Momentum (1m)
        if features.ret_1m > MOMENTUM_SPIKE {
            flags.insert(Flag::MomentumSpike);
            flags.insert(Flag::SpikeUp);
        } else if features.ret_1m > MOMENTUM_STEP {
            flags.insert(Flag::MomentumUp);
        } else if features.ret_1m < -MOMENTUM_SPIKE {
            flags.insert(Flag::MomentumDown);
            flags.insert(Flag::SpikeDown);
        } else if features.ret_1m < -MOMENTUM_STEP {
            flags.insert(Flag::MomentumDown);
        }

        // 3. RSI
        if features.rsi >= RSI_EXTREME_OVERBOUGHT {
            flags.insert(Flag::TechExtremeOverbought);
        } else if features.rsi >= RSI_OVERBOUGHT {
            flags.insert(Flag::TechOverbought);
        } else if features.rsi <= RSI_EXTREME_OVERSOLD {
            flags.insert(Flag::TechExtremeOversold);
        } else if features.rsi <= RSI_OVERSOLD {
            flags.insert(Flag::TechOversold);
        }

        // 4. Volatility
        if features.volatility > VOLATILITY_HIGH {
            flags.insert(Flag::VolatilityHigh);
        } else if features.volatility < VOLATILITY_LOW {
            flags.insert(Flag::VolatilityLow);
        }

        // 5. Valuation
        if let Some(pe) = features.pe {
            let (expensive, cheap) = match features.region {
                MarketRegion::Korea => (PE_EXPENSIVE_KOREA, PE_CHEAP_KOREA),
                MarketRegion::Us => (PE_EXPENSIVE_US, PE_CHEAP_US),
            };
            if pe > expensive {
                flags.insert(Flag::ValuationExpensive);
            } else if pe < cheap {
                flags.insert(Flag::ValuationCheap);
            }
        }

        // 6. Quality
        if let Some(roe) = features.roe {
            let roe_pct = if roe < 1.0 { roe * 100.0 } else { roe };
            if roe_pct > ROE_STRONG {
                flags.insert(Flag::QualityStrong);
            } else if roe_pct < ROE_WEAK {
                flags.insert(Flag::QualityWeak);
            }
        }

        // 7. Market-wide risk
        if let Some(risk) = features.risk_index {
            if risk > RISK_OFF {
                flags.insert(Flag::MarketRiskOff);
            } else if risk < RISK_ON {
                flags.insert(Flag::MarketRiskOn);
            }
        }

        // 8. News: only the most relevant article speaks, and only when it
        // clears the relevance bar.
        flags.insert(self.news_flag(features, now));

        // 9. Floor
        if flags.len() < MIN_FLAGS {
            flags.insert(Flag::NeutralSignal);
        }

        flags
    }

    fn news_flag(&self, features: &FeatureSet, now: DateTime<Utc>) -> Flag {
        match self
            .relevance
            .best(&features.news, &features.ticker, &features.company_name, now)
        {
            Some((top, score)) if score >= self.cfg.relevance_threshold => {
                match self.relevance.title_tone(&top.title) {
                    TitleTone::Positive => Flag::NewsPositiveEvent,
                    TitleTone::Negative => Flag::NewsNegativeEvent,
                    TitleTone::Mixed => Flag::NewsMixedOrThin,
                }
            }
            Some(_) => Flag::NewsLowRelevance,
            None => Flag::NewsMixedOrThin,
        }
    }
}
