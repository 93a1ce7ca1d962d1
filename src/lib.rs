//! stockmind
//!
//! Decision-fusion core for stock analysis: calibrates per-domain scores
//! into probabilities, chains them through conditional gates, and folds
//! the result into an action recommendation with a confidence label.
//! A parallel path classifies raw technical/fundamental/news features
//! into semantic flags and matches them against a catalog of execution
//! profiles.
//!
//! Everything in this crate is a pure function of its inputs (plus an
//! explicit `now` where news recency matters); the HTTP/report shell
//! lives elsewhere and calls in-process.

pub mod config;
pub mod core;
pub mod flags;
pub mod fusion;
pub mod news;
pub mod profile;
pub mod scoring;

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};

pub use crate::config::config::{AppCfg, FusionCfg, NewsCfg};
pub use crate::core::confidence::{ConfidenceLevel, map_confidence_level};
pub use crate::core::types::{Action, MarketRegion, NewsItem};
pub use crate::flags::classifier::FlagClassifier;
pub use crate::flags::types::{FeatureSet, Flag};
pub use crate::fusion::engine::FusionEngine;
pub use crate::fusion::types::{FusionResult, ScoreSet};
pub use crate::profile::selector::ProfileCatalog;
pub use crate::profile::types::ActionProfile;

/// One-shot fusion with the given calibration constants.
pub fn fuse(scores: &ScoreSet, data_quality: f64, cfg: &FusionCfg) -> FusionResult {
    FusionEngine::new(cfg.clone()).fuse(scores, data_quality)
}

/// Classify features into flags and select the matching action profile.
pub fn classify_and_select(
    features: &FeatureSet,
    now: DateTime<Utc>,
    cfg: &AppCfg,
) -> (BTreeSet<Flag>, &'static ActionProfile) {
    let classifier = FlagClassifier::new(cfg.news.clone());
    let flags = classifier.classify(features, now);
    let profile = ProfileCatalog::default().select(&flags, Some(features.rsi));
    (flags, profile)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_facade_end_to_end() {
        let cfg = AppCfg::default();
        let features = FeatureSet {
            ticker: "AAPL".to_string(),
            company_name: "Apple".to_string(),
            ret_3m: 25.0,
            ret_1m: 8.0,
            rsi: 55.0,
            volatility: 30.0,
            ..Default::default()
        };

        let (flags, profile) = classify_and_select(&features, Utc::now(), &cfg);
        assert!(flags.contains(&Flag::TrendUpStrong));
        assert!(flags.contains(&Flag::MomentumUp));
        assert_eq!(profile.id, "MOMENTUM_CHASER");

        let scores = ScoreSet {
            market: 80.0,
            industry: Some(70.0),
            stock: 75.0,
            timing: 60.0,
        };
        let result = fuse(&scores, 1.0, &cfg.fusion);
        assert_eq!(result.action, Action::Buy);
    }

    #[test]
    fn test_producers_feed_fusion() {
        // The 0-10 producers rescale onto the engine's 0-100 axis.
        let market = scoring::market::us_market_score(Some(4.0), Some(5.0), None);
        let stock = scoring::company::us_company_score(Some(8.0), Some(2.0), &[], None, Some(25.0));
        let timing = scoring::outlook::outlook_score(
            Some(2.0),
            Some(6.0),
            Some(12.0),
            Some(25.0),
            Some(55.0),
        );
        let sector = scoring::sector::sector_score(None);

        let scores = ScoreSet {
            market: scoring::to_hundred(market),
            industry: Some(sector),
            stock: scoring::to_hundred(stock),
            timing: scoring::to_hundred(timing),
        };
        let result = fuse(&scores, 1.0, &FusionCfg::default());
        assert!(result.p_up > 0.5);
        assert_ne!(result.action, Action::FusionFailed);
    }
}
