use serde::Serialize;

/// A named bundle of execution guidance. Profiles are fixed templates
/// selected from the catalog, never constructed per call.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ActionProfile {
    pub id: &'static str,
    pub decision_action: &'static str,
    pub execution_style: &'static str,
    pub position_sizing: &'static str,
    pub invalidators: &'static [&'static str],
    pub take_profit_rule: &'static str,
    pub stop_rule: &'static str,
    pub summary: &'static str,
    pub risk_note: &'static str,
    pub market_condition: &'static str,
}
