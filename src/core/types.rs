use serde::{Deserialize, Serialize};
use std::fmt;

/// Discrete action recommendation, ordered from most to least optimistic.
///
/// `FusionFailed` is a sentinel for a computation that could not produce a
/// valid recommendation; it is never emitted by the normal grading path and
/// callers must not present it as a tradeable signal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Action {
    #[serde(rename = "Aggressive Buy")]
    AggressiveBuy,
    Buy,
    Hold,
    Sell,
    #[serde(rename = "Aggressive Sell")]
    AggressiveSell,
    #[serde(rename = "fusion_failed")]
    FusionFailed,
}

impl Action {
    pub fn label(&self) -> &'static str {
        match self {
            Action::AggressiveBuy => "Aggressive Buy",
            Action::Buy => "Buy",
            Action::Hold => "Hold",
            Action::Sell => "Sell",
            Action::AggressiveSell => "Aggressive Sell",
            Action::FusionFailed => "fusion_failed",
        }
    }

    /// One step down the conservatism scale. Saturates at `AggressiveSell`;
    /// the sentinel is left untouched.
    pub fn one_step_conservative(&self) -> Action {
        match self {
            Action::AggressiveBuy => Action::Buy,
            Action::Buy => Action::Hold,
            Action::Hold => Action::Sell,
            Action::Sell => Action::AggressiveSell,
            Action::AggressiveSell => Action::AggressiveSell,
            Action::FusionFailed => Action::FusionFailed,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Listing market of the analyzed symbol. Valuation thresholds and the
/// market-score inputs differ between the two.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MarketRegion {
    Korea,
    #[default]
    Us,
}

/// One news article as delivered by the upstream fetcher.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct NewsItem {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub published: Option<chrono::DateTime<chrono::Utc>>,
}
