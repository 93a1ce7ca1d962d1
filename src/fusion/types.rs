use serde::{Deserialize, Serialize};

use crate::core::confidence::ConfidenceLevel;
use crate::core::types::Action;

/// The four per-domain scores feeding one fusion call, all on the 0-100
/// scale. Producers working in 0-10 must rescale before calling in.
///
/// A missing `industry` score is not an error: the engine substitutes the
/// stock score as its proxy and records `industry_score_fallback` in the
/// breakdown.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreSet {
    pub market: f64,
    pub industry: Option<f64>,
    pub stock: f64,
    pub timing: f64,
}

/// Every intermediate value of one fusion call, for auditability.
#[derive(Clone, Debug, Default, Serialize)]
pub struct FusionBreakdown {
    pub p_market: f64,
    pub p_industry: f64,
    pub p_stock: f64,
    pub p_timing: f64,
    pub g_market: f64,
    pub g_industry: f64,
    pub g_timing: f64,
    pub p_industry_given_market: f64,
    pub p_stock_given_industry: f64,
    pub p_timing_adj: f64,
    pub p_product: f64,
    /// Override and fallback annotations, e.g. `risk_off_adjusted: Buy->Hold`.
    pub flags: Vec<String>,
}

/// Output of one fusion call. Immutable; computed fresh per request.
#[derive(Clone, Debug, Serialize)]
pub struct FusionResult {
    pub p_up: f64,
    pub action: Action,
    pub confidence: f64,
    pub confidence_level: ConfidenceLevel,
    pub breakdown: FusionBreakdown,
    pub inputs: ScoreSet,
}
