//! Profile selector.
//!
//! A priority-ordered table of (predicate, profile) pairs: the first rule
//! whose predicate holds wins. Order matters: a flag set can satisfy
//! several rules at once, and the table encodes which concern dominates
//! (an extreme-overbought reading trumps everything, momentum beats value
//! recovery, and so on). Keeping the rules as a plain list keeps that
//! priority visible and testable.

use std::collections::BTreeSet;

use crate::flags::types::Flag;
use crate::profile::types::ActionProfile;

static EXTREME_OVERBOUGHT_PAUSE: ActionProfile = ActionProfile {
    id: "EXTREME_OVERBOUGHT_PAUSE",
    decision_action: "Hold",
    execution_style: "Pause new entries; consider taking partial profits on the existing position",
    position_sizing: "Reduce",
    invalidators: &["RSI falls back below 70"],
    take_profit_rule: "Take partial profits at the current level (RSI 80+)",
    stop_rule: "Reduce further on a break of short-term support (5-day moving average)",
    summary: "Severely overheated conditions: hold off on new entries and consider locking in gains.",
    risk_note: "RSI above 80 carries a high probability of a short-term pullback.",
    market_condition: "overheated",
};

static MOMENTUM_CHASER: ActionProfile = ActionProfile {
    id: "MOMENTUM_CHASER",
    decision_action: "Buy",
    execution_style: "Trend following; scale in across several tranches",
    position_sizing: "Normal",
    invalidators: &[
        "Close below the 20-day moving average",
        "RSI breaks above 80",
    ],
    take_profit_rule: "Take partial profits when RSI reaches 75+",
    stop_rule: "Cut the position by half on a downward break of the 20-day moving average",
    summary: "A strong uptrend with confirmed momentum supports a trend-following entry.",
    risk_note: "Sharp advances invite pullbacks; scaling in is recommended over a single entry.",
    market_condition: "uptrend",
};

static VALUE_RECOVERY: ActionProfile = ActionProfile {
    id: "VALUE_RECOVERY",
    decision_action: "Buy",
    execution_style: "Scale in gradually, lowering the average entry price",
    position_sizing: "Normal",
    invalidators: &[
        "A further decline beyond -10%",
        "News of deteriorating financials",
    ],
    take_profit_rule: "Take partial profits when RSI reaches 60+",
    stop_rule: "Stop out 5% below the recent low",
    summary: "Undervalued or oversold conditions point to a possible rebound.",
    risk_note: "The bottom is not confirmed; the decline may have further to run.",
    market_condition: "undervalued",
};

static QUALITY_COMPOUNDER: ActionProfile = ActionProfile {
    id: "QUALITY_COMPOUNDER",
    decision_action: "Buy",
    execution_style: "Long-term hold; add on dips",
    position_sizing: "Large",
    invalidators: &[
        "ROE drops below 15%",
        "Structural deterioration of the industry",
    ],
    take_profit_rule: "On reaching the target return, or when valuation becomes stretched",
    stop_rule: "Only on damage to the fundamentals",
    summary: "Strong fundamentals and low volatility support long-term compounding.",
    risk_note: "The business stays sound through market selloffs, but the price can still correct.",
    market_condition: "stable",
};

static RISK_OFF_DEFENSIVE: ActionProfile = ActionProfile {
    id: "RISK_OFF_DEFENSIVE",
    decision_action: "Hold",
    execution_style: "Conservative wait; keep only a small position",
    position_sizing: "Small",
    invalidators: &["Market volatility eases (risk index below 20)"],
    take_profit_rule: "Take partial profits into short-term rebounds",
    stop_rule: "Reduce further if the broad market deteriorates",
    summary: "Defensive posture while market-wide uncertainty stays elevated.",
    risk_note: "In a broad downturn even relatively strong names have limited upside.",
    market_condition: "uncertain",
};

static EVENT_DRIVEN: ActionProfile = ActionProfile {
    id: "EVENT_DRIVEN",
    decision_action: "Respond with agility",
    execution_style: "Confirm the direction of the news flow, then trade short-term",
    position_sizing: "Small (elevated volatility)",
    invalidators: &["The news impact fades", "Volatility normalizes"],
    take_profit_rule: "Take quick profits at the peak of the news effect",
    stop_rule: "Exit immediately if the news flow reverses",
    summary: "News-driven volatility is widening; the situation calls for an agile short-term response.",
    risk_note: "News-driven spikes in either direction tend to retrace quickly.",
    market_condition: "event",
};

static OVERBOUGHT_CAUTIOUS: ActionProfile = ActionProfile {
    id: "OVERBOUGHT_CAUTIOUS",
    decision_action: "Buy",
    execution_style: "Wait for a pullback, or scale in lightly",
    position_sizing: "Small",
    invalidators: &["RSI breaks above 80"],
    take_profit_rule: "Take partial profits at RSI 75+",
    stop_rule: "Reduce on a break of short-term support",
    summary: "Short-term overheating calls for a measured approach.",
    risk_note: "The RSI 70+ zone often precedes a correction.",
    market_condition: "overheated",
};

static NEUTRAL_WAIT: ActionProfile = ActionProfile {
    id: "NEUTRAL_WAIT",
    decision_action: "Watch",
    execution_style: "Re-assess once additional signals form",
    position_sizing: "Normal",
    invalidators: &["A clear trend forms"],
    take_profit_rule: "N/A",
    stop_rule: "N/A",
    summary: "No clear directional signal; conditions are mixed.",
    risk_note: "Entering before a trend is established carries outsized risk.",
    market_condition: "neutral",
};

type FlagSet = BTreeSet<Flag>;
type Predicate = fn(&FlagSet) -> bool;

pub struct ProfileCatalog {
    rules: Vec<(Predicate, &'static ActionProfile)>,
    fallback: &'static ActionProfile,
}

impl Default for ProfileCatalog {
    fn default() -> Self {
        let rules: Vec<(Predicate, &'static ActionProfile)> = vec![
            (
                |f| f.contains(&Flag::TechExtremeOverbought),
                &EXTREME_OVERBOUGHT_PAUSE,
            ),
            (
                |f| {
                    f.contains(&Flag::TrendUpStrong)
                        && (f.contains(&Flag::MomentumSpike) || f.contains(&Flag::MomentumUp))
                        && !f.contains(&Flag::ValuationExpensive)
                        && !f.contains(&Flag::TechExtremeOverbought)
                },
                &MOMENTUM_CHASER,
            ),
            (
                |f| {
                    (f.contains(&Flag::TechOversold) || f.contains(&Flag::ValuationCheap))
                        && !f.contains(&Flag::QualityWeak)
                        && !f.contains(&Flag::TrendDown)
                },
                &VALUE_RECOVERY,
            ),
            (
                |f| {
                    f.contains(&Flag::QualityStrong)
                        && f.contains(&Flag::VolatilityLow)
                        && !f.contains(&Flag::TrendDown)
                },
                &QUALITY_COMPOUNDER,
            ),
            (
                |f| {
                    f.contains(&Flag::MarketRiskOff)
                        && (f.contains(&Flag::VolatilityLow) || f.contains(&Flag::QualityStrong))
                },
                &RISK_OFF_DEFENSIVE,
            ),
            (
                |f| {
                    (f.contains(&Flag::NewsPositiveEvent) || f.contains(&Flag::NewsNegativeEvent))
                        && (f.contains(&Flag::VolatilityHigh)
                            || f.contains(&Flag::SpikeUp)
                            || f.contains(&Flag::SpikeDown))
                },
                &EVENT_DRIVEN,
            ),
            (
                |f| {
                    f.contains(&Flag::TechOverbought) && !f.contains(&Flag::TechExtremeOverbought)
                },
                &OVERBOUGHT_CAUTIOUS,
            ),
        ];
        Self {
            rules,
            fallback: &NEUTRAL_WAIT,
        }
    }
}

impl ProfileCatalog {
    /// First matching rule wins. `rsi` is accepted for interface stability;
    /// the current templates are static and do not consume it.
    pub fn select(&self, flags: &FlagSet, _rsi: Option<f64>) -> &'static ActionProfile {
        for (matches, profile) in &self.rules {
            if matches(flags) {
                return profile;
            }
        }
        self.fallback
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(flags: &[Flag]) -> FlagSet {
        flags.iter().copied().collect()
    }

    #[test]
    fn test_extreme_overbought_trumps_momentum() {
        // Satisfies both rule 1 and rule 2; the table must pick rule 1.
        let flags = set(&[
            Flag::TechExtremeOverbought,
            Flag::TrendUpStrong,
            Flag::MomentumSpike,
        ]);
        let profile = ProfileCatalog::default().select(&flags, Some(85.0));
        assert_eq!(profile.id, "EXTREME_OVERBOUGHT_PAUSE");
    }

    #[test]
    fn test_momentum_chaser() {
        let flags = set(&[Flag::TrendUpStrong, Flag::MomentumUp]);
        let profile = ProfileCatalog::default().select(&flags, None);
        assert_eq!(profile.id, "MOMENTUM_CHASER");

        // Expensive valuation vetoes the chase.
        let flags = set(&[
            Flag::TrendUpStrong,
            Flag::MomentumUp,
            Flag::ValuationExpensive,
        ]);
        let profile = ProfileCatalog::default().select(&flags, None);
        assert_ne!(profile.id, "MOMENTUM_CHASER");
    }

    #[test]
    fn test_value_recovery_requires_quality() {
        let flags = set(&[Flag::TechOversold]);
        let profile = ProfileCatalog::default().select(&flags, None);
        assert_eq!(profile.id, "VALUE_RECOVERY");

        let flags = set(&[Flag::TechOversold, Flag::QualityWeak]);
        let profile = ProfileCatalog::default().select(&flags, None);
        assert_ne!(profile.id, "VALUE_RECOVERY");

        let flags = set(&[Flag::ValuationCheap, Flag::TrendDown]);
        let profile = ProfileCatalog::default().select(&flags, None);
        assert_ne!(profile.id, "VALUE_RECOVERY");
    }

    #[test]
    fn test_quality_compounder() {
        let flags = set(&[Flag::QualityStrong, Flag::VolatilityLow]);
        let profile = ProfileCatalog::default().select(&flags, None);
        assert_eq!(profile.id, "QUALITY_COMPOUNDER");
    }

    #[test]
    fn test_risk_off_defensive() {
        let flags = set(&[Flag::MarketRiskOff, Flag::QualityStrong, Flag::TrendDown]);
        let profile = ProfileCatalog::default().select(&flags, None);
        // TrendDown knocks out the compounder; risk-off still matches.
        assert_eq!(profile.id, "RISK_OFF_DEFENSIVE");
    }

    #[test]
    fn test_event_driven_needs_volatility_or_spike() {
        let flags = set(&[Flag::NewsNegativeEvent, Flag::SpikeDown]);
        let profile = ProfileCatalog::default().select(&flags, None);
        assert_eq!(profile.id, "EVENT_DRIVEN");

        let flags = set(&[Flag::NewsNegativeEvent]);
        let profile = ProfileCatalog::default().select(&flags, None);
        assert_eq!(profile.id, "NEUTRAL_WAIT");
    }

    #[test]
    fn test_plain_overbought_is_cautious() {
        let flags = set(&[Flag::TechOverbought]);
        let profile = ProfileCatalog::default().select(&flags, Some(72.0));
        assert_eq!(profile.id, "OVERBOUGHT_CAUTIOUS");
    }

    #[test]
    fn test_default_is_neutral_wait() {
        let flags = set(&[Flag::NewsMixedOrThin, Flag::NeutralSignal]);
        let profile = ProfileCatalog::default().select(&flags, None);
        assert_eq!(profile.id, "NEUTRAL_WAIT");
    }
}
