//! Fusion engine.
//!
//! Orchestrates calibration and conditional gating across the four domain
//! signals in their causal order (market → industry → stock, market →
//! timing), combines the gated probabilities, and discretizes the result
//! into an action with a confidence label. The full intermediate state is
//! returned in the breakdown so downstream reports can show how each
//! signal contributed.

use tracing::{debug, warn};

use crate::config::config::FusionCfg;
use crate::core::confidence::{ConfidenceLevel, map_confidence_level};
use crate::core::types::Action;
use crate::fusion::calibrator::Calibrator;
use crate::fusion::gate::Gate;
use crate::fusion::types::{FusionBreakdown, FusionResult, ScoreSet};

// Action grade boundaries on the rescaled probability axis, most
// optimistic first.
const GRADE_AGGRESSIVE_BUY: f64 = 0.95;
const GRADE_BUY: f64 = 0.70;
const GRADE_HOLD: f64 = 0.40;
const GRADE_SELL: f64 = 0.10;

// Raw-score thresholds for the override pass.
const RISK_OFF_MARKET: f64 = 25.0;
const WEAK_SECTOR_INDUSTRY: f64 = 30.0;
const STRONG_STOCK: f64 = 75.0;

// Below this rescaled probability an informational flag is recorded.
const LOW_UPSIDE: f64 = 0.35;

// Agreement is zero once the raw scores span this much.
const AGREEMENT_SPAN: f64 = 60.0;

pub struct FusionEngine {
    cfg: FusionCfg,
}

impl FusionEngine {
    pub fn new(cfg: FusionCfg) -> Self {
        Self { cfg }
    }

    /// Fuse the four domain scores into a rise probability, action and
    /// confidence. `data_quality` is the caller's trust in its own inputs,
    /// in [0,1].
    ///
    /// Finite out-of-range scores are not clamped; the logistic saturates
    /// them. Non-finite inputs or broken calibration constants yield the
    /// `FusionFailed` sentinel instead of a normal label.
    pub fn fuse(&self, scores: &ScoreSet, data_quality: f64) -> FusionResult {
        if let Some(reason) = self.invalid_reason(scores, data_quality) {
            warn!(reason, "fusion rejected inputs");
            return Self::failed(scores, reason);
        }

        let mut flags = Vec::new();

        // 1. Calibration: score -> probability, centered at 50.
        let p_market = Calibrator::new(self.cfg.k_market).calibrate(scores.market);
        let p_stock = Calibrator::new(self.cfg.k_stock).calibrate(scores.stock);
        let p_timing = Calibrator::new(self.cfg.k_timing).calibrate(scores.timing);

        // Missing industry: substitute the stock signal, for the gating
        // chain and for the agreement spread alike.
        let (p_industry, industry_raw) = match scores.industry {
            Some(industry) => (
                Calibrator::new(self.cfg.k_industry).calibrate(industry),
                industry,
            ),
            None => {
                flags.push("industry_score_fallback".to_string());
                (p_stock, scores.stock)
            }
        };

        // 2. Conditional gating, top-down.
        let market_gate = Gate::new(0.35, 0.30);
        let g_market = market_gate.coefficient(p_market);
        let p_industry_given_market = market_gate.pull(p_market, p_industry);

        let industry_gate = Gate::new(0.40, 0.25);
        let g_industry = industry_gate.coefficient(p_industry_given_market);
        let p_stock_given_industry = industry_gate.pull(p_industry_given_market, p_stock);

        // Timing is gated by the market as well, but keeps a floor so a
        // contrarian entry signal survives a weak market.
        let timing_gate = Gate::with_floor(0.40, 0.30, 0.2);
        let g_timing = timing_gate.coefficient(p_market);
        let p_timing_adj = timing_gate.pull(p_market, p_timing);

        // 3. Combination. The raw four-term product of near-0.5 values
        // collapses toward zero; the fourth root restores the 0-1 axis so
        // all-neutral inputs land at 0.5 against the grade boundaries.
        let p_product = p_market * p_industry_given_market * p_stock_given_industry * p_timing_adj;
        let p_up = p_product.powf(0.25);

        // 4. Discretization.
        let mut action = grade(p_up);

        // 5. Overrides on the raw input scores.
        if scores.market < RISK_OFF_MARKET {
            let shifted = action.one_step_conservative();
            debug!(%action, %shifted, market = scores.market, "risk-off override");
            flags.push(format!("risk_off_adjusted: {action}->{shifted}"));
            action = shifted;
        }
        if let Some(industry) = scores.industry {
            if industry < WEAK_SECTOR_INDUSTRY && scores.stock > STRONG_STOCK {
                flags.push("flag_relative_strength_in_weak_sector".to_string());
            }
        }
        if p_up <= LOW_UPSIDE {
            flags.push("low_upside_probability".to_string());
        }

        // 6. Confidence: raw-score agreement blended with input quality.
        let values = [scores.market, industry_raw, scores.stock, scores.timing];
        let spread = values.iter().copied().fold(f64::MIN, f64::max)
            - values.iter().copied().fold(f64::MAX, f64::min);
        let agreement = 1.0 - (spread / AGREEMENT_SPAN).clamp(0.0, 1.0);
        let confidence = 0.7 * agreement + 0.3 * data_quality;

        FusionResult {
            p_up,
            action,
            confidence,
            confidence_level: map_confidence_level(confidence),
            breakdown: FusionBreakdown {
                p_market,
                p_industry,
                p_stock,
                p_timing,
                g_market,
                g_industry,
                g_timing,
                p_industry_given_market,
                p_stock_given_industry,
                p_timing_adj,
                p_product,
                flags,
            },
            inputs: *scores,
        }
    }

    fn invalid_reason(&self, scores: &ScoreSet, data_quality: f64) -> Option<&'static str> {
        let ks = [
            self.cfg.k_market,
            self.cfg.k_industry,
            self.cfg.k_stock,
            self.cfg.k_timing,
        ];
        if ks.iter().any(|k| !k.is_finite() || *k <= 0.0) {
            return Some("invalid_calibration_constants");
        }
        let inputs = [
            scores.market,
            scores.industry.unwrap_or(scores.stock),
            scores.stock,
            scores.timing,
            data_quality,
        ];
        if inputs.iter().any(|v| !v.is_finite()) {
            return Some("non_finite_input");
        }
        None
    }

    fn failed(scores: &ScoreSet, reason: &str) -> FusionResult {
        FusionResult {
            p_up: 0.5,
            action: Action::FusionFailed,
            confidence: 0.0,
            confidence_level: ConfidenceLevel::Low,
            breakdown: FusionBreakdown {
                flags: vec![format!("fusion_failed: {reason}")],
                ..Default::default()
            },
            inputs: *scores,
        }
    }
}

fn grade(p_up: f64) -> Action {
    if p_up >= GRADE_AGGRESSIVE_BUY {
        Action::AggressiveBuy
    } else if p_up >= GRADE_BUY {
        Action::Buy
    } else if p_up >= GRADE_HOLD {
        Action::Hold
    } else if p_up >= GRADE_SELL {
        Action::Sell
    } else {
        Action::AggressiveSell
    }
}
