//! Sector strength score (0-100), the producer of the fusion engine's
//! `industry` input. Weighted benchmark-relative returns centered at 50,
//! with a small volatility adjustment.

use serde::Deserialize;

/// Sector ETF performance relative to the broad benchmark, in percent.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
pub struct SectorSnapshot {
    pub relative_1w: f64,
    pub relative_1m: f64,
    pub relative_3m: f64,
    /// Annualized percent; absent readings skip the adjustment.
    pub volatility: Option<f64>,
}

const WEIGHT_1W: f64 = 0.2;
const WEIGHT_1M: f64 = 0.5;
const WEIGHT_3M: f64 = 0.3;

pub fn sector_score(snapshot: Option<&SectorSnapshot>) -> f64 {
    let Some(snap) = snapshot else {
        // No sector data: neutral. Callers usually pass None on to the
        // fusion engine instead, which then records its own fallback.
        return 50.0;
    };

    let weighted = WEIGHT_1W * snap.relative_1w
        + WEIGHT_1M * snap.relative_1m
        + WEIGHT_3M * snap.relative_3m;
    // Typical relative performance sits in +-10%; x2 maps that onto
    // roughly the 30-70 band around neutral.
    let perf = 50.0 + weighted * 2.0;

    let vol_adjustment = match snap.volatility {
        Some(vol) if vol > 30.0 => -5.0,
        Some(vol) if vol < 15.0 => 5.0,
        _ => 0.0,
    };

    (perf + vol_adjustment).clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_data_is_neutral() {
        assert_eq!(sector_score(None), 50.0);
    }

    #[test]
    fn test_flat_sector_is_neutral() {
        let snap = SectorSnapshot {
            volatility: Some(20.0),
            ..Default::default()
        };
        assert_eq!(sector_score(Some(&snap)), 50.0);
    }

    #[test]
    fn test_outperformance_lifts_score() {
        let snap = SectorSnapshot {
            relative_1w: 2.0,
            relative_1m: 5.0,
            relative_3m: 8.0,
            volatility: Some(20.0),
        };
        // 50 + (0.4 + 2.5 + 2.4) * 2 = 60.6
        assert!((sector_score(Some(&snap)) - 60.6).abs() < 1e-9);
    }

    #[test]
    fn test_volatility_adjustment() {
        let calm = SectorSnapshot {
            relative_1m: 2.0,
            volatility: Some(12.0),
            ..Default::default()
        };
        assert!((sector_score(Some(&calm)) - 57.0).abs() < 1e-9);

        let rough = SectorSnapshot {
            relative_1m: 2.0,
            volatility: Some(35.0),
            ..Default::default()
        };
        assert!((sector_score(Some(&rough)) - 47.0).abs() < 1e-9);
    }

    #[test]
    fn test_clamped_to_bounds() {
        let crash = SectorSnapshot {
            relative_1w: -40.0,
            relative_1m: -40.0,
            relative_3m: -40.0,
            volatility: Some(60.0),
        };
        assert_eq!(sector_score(Some(&crash)), 0.0);
    }
}
