//! Market environment scores (0-10).
//!
//! Band mappings from benchmark returns, adjusted by a sentiment or FX
//! reading. "Is the water warm enough to swim at all?"

/// US market score from SPY/QQQ one-month returns and the fear & greed
/// index.
pub fn us_market_score(
    spy_ret_1m: Option<f64>,
    qqq_ret_1m: Option<f64>,
    fgi: Option<f64>,
) -> u8 {
    let rets: Vec<f64> = [spy_ret_1m, qqq_ret_1m].into_iter().flatten().collect();
    let avg_ret = if rets.is_empty() {
        0.0
    } else {
        rets.iter().sum::<f64>() / rets.len() as f64
    };

    let mut base: i32 = if avg_ret >= 8.0 {
        8
    } else if avg_ret >= 3.0 {
        7
    } else if avg_ret >= 0.0 {
        6
    } else if avg_ret >= -3.0 {
        5
    } else if avg_ret >= -8.0 {
        4
    } else {
        3
    };

    // Extreme greed nudges up, extreme fear nudges down.
    if let Some(fgi) = fgi {
        if fgi >= 80.0 {
            base += 1;
        } else if fgi <= 20.0 {
            base -= 1;
        }
    }

    base.clamp(0, 10) as u8
}

/// Korean market score from KOSPI/KOSDAQ three-month returns, with a mild
/// FX correction (a weak won is a headwind).
pub fn korea_market_score(
    kospi_ret_3m: Option<f64>,
    kosdaq_ret_3m: Option<f64>,
    usdkrw: Option<f64>,
) -> u8 {
    let rets: Vec<f64> = [kospi_ret_3m, kosdaq_ret_3m]
        .into_iter()
        .flatten()
        .collect();
    if rets.is_empty() {
        // No index data: neutral.
        return 5;
    }
    let avg_3m = rets.iter().sum::<f64>() / rets.len() as f64;

    let mut base: i32 = if avg_3m >= 20.0 {
        9
    } else if avg_3m >= 10.0 {
        8
    } else if avg_3m >= 5.0 {
        7
    } else if avg_3m >= 0.0 {
        6
    } else if avg_3m >= -5.0 {
        5
    } else if avg_3m >= -15.0 {
        4
    } else if avg_3m >= -25.0 {
        3
    } else {
        2
    };

    if let Some(fx) = usdkrw {
        if fx >= 1350.0 {
            base -= 1;
        } else if fx <= 1200.0 {
            base += 1;
        }
    }

    base.clamp(0, 10) as u8
}
