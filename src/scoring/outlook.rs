//! Entry-timing outlook score (0-10): "is now a good moment?"
//!
//! Medium-term trend sets the direction, short-term momentum the
//! acceleration, RSI the positioning (overheated readings subtract even
//! in an uptrend, oversold readings add as rebound potential), and
//! volatility the stability.

pub fn outlook_score(
    ret_1w: Option<f64>,
    ret_1m: Option<f64>,
    ret_3m: Option<f64>,
    volatility: Option<f64>,
    rsi: Option<f64>,
) -> u8 {
    let mut score: i32 = 5;

    // 1. Medium-term trend (3m).
    if let Some(r3) = ret_3m {
        if r3 > 15.0 {
            score += 2;
        } else if r3 > 5.0 {
            score += 1;
        } else if r3 < -10.0 {
            score -= 2;
        } else if r3 < -5.0 {
            score -= 1;
        }
    }

    // 2. Short-term momentum (1w/1m).
    if let Some(r1m) = ret_1m {
        if r1m > 10.0 {
            score += 1;
        }
    }
    if let Some(r1w) = ret_1w {
        if r1w > 5.0 {
            score += 1;
        } else if r1w < -5.0 {
            score -= 1;
        }
    }

    // 3. RSI positioning.
    if let Some(rsi) = rsi {
        if rsi > 75.0 {
            score -= 2;
        } else if rsi > 65.0 {
            score -= 1;
        } else if (45.0..=60.0).contains(&rsi) {
            score += 1;
        } else if rsi < 25.0 {
            score += 2;
        } else if rsi < 35.0 {
            score += 1;
        }
    }

    // 4. Stability.
    if let Some(vol) = volatility {
        if vol < 20.0 {
            score += 1;
        } else if vol > 50.0 {
            score -= 2;
        } else if vol > 35.0 {
            score -= 1;
        }
    }

    score.clamp(0, 10) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_missing_is_neutral() {
        assert_eq!(outlook_score(None, None, None, None, None), 5);
    }

    #[test]
    fn test_healthy_uptrend() {
        // Trend +2, 1m momentum +1, 1w +1, RSI 55 +1, vol 18 +1 = 11 -> 10.
        assert_eq!(
            outlook_score(Some(6.0), Some(12.0), Some(20.0), Some(18.0), Some(55.0)),
            10
        );
    }

    #[test]
    fn test_overheated_rally_is_discounted() {
        // Same trend but RSI 78 (-2) and vol 55 (-2): 5+2+1+1-2-2 = 5.
        assert_eq!(
            outlook_score(Some(6.0), Some(12.0), Some(20.0), Some(55.0), Some(78.0)),
            5
        );
    }

    #[test]
    fn test_oversold_bounce_candidate() {
        // Trend -2, 1w -1, RSI 22 +2, vol mid: 5-2-1+2 = 4.
        assert_eq!(
            outlook_score(Some(-6.0), Some(-3.0), Some(-12.0), Some(30.0), Some(22.0)),
            4
        );
    }

    #[test]
    fn test_floor_at_zero() {
        assert_eq!(
            outlook_score(Some(-10.0), Some(-20.0), Some(-30.0), Some(60.0), Some(70.0)),
            0
        );
    }
}
