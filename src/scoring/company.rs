//! Company scores (0-10): "is this a good company?"
//!
//! Base 5, adjusted by fundamentals (ROE quality and P/E valuation),
//! relative strength against the benchmark, and the tone of the recent
//! news batch. Bands differ between the US and Korean markets: Korean
//! listings trade at a structural discount and with higher volatility, so
//! both the valuation and the alpha bars sit lower/wider.

use crate::core::types::NewsItem;

const POSITIVE_KEYWORDS: &[&str] = &[
    "beat",
    "record",
    "outperform",
    "growth",
    "strong",
    "upgrade",
    "buy",
];
const NEGATIVE_KEYWORDS: &[&str] = &[
    "miss",
    "downgrade",
    "lawsuit",
    "antitrust",
    "weak",
    "slump",
    "sell",
];

pub fn us_company_score(
    ticker_ret_1m: Option<f64>,
    benchmark_ret_1m: Option<f64>,
    news: &[NewsItem],
    pe: Option<f64>,
    roe: Option<f64>,
) -> u8 {
    let mut score: i32 = 5;

    // 1. Fundamentals: quality (ROE) and valuation (P/E).
    if let Some(roe) = roe {
        if roe > 20.0 {
            score += 2;
        } else if roe > 10.0 {
            score += 1;
        } else if roe < 0.0 {
            score -= 1;
        }
    }
    if let Some(pe) = pe {
        if pe > 0.0 && pe < 15.0 {
            score += 1;
        } else if pe > 60.0 {
            score -= 1;
        }
    }

    // 2. Relative strength against the index.
    if let (Some(ret), Some(bench)) = (ticker_ret_1m, benchmark_ret_1m) {
        let alpha = ret - bench;
        if alpha > 5.0 {
            score += 2;
        } else if alpha > 1.0 {
            score += 1;
        } else if alpha < -5.0 {
            score -= 2;
        } else if alpha < -1.0 {
            score -= 1;
        }
    }

    // 3. News tone.
    score += news_tone(news);

    score.clamp(1, 10) as u8
}

pub fn korea_company_score(
    ticker_ret_1m: Option<f64>,
    benchmark_ret_1m: Option<f64>,
    news: &[NewsItem],
    pe: Option<f64>,
    roe: Option<f64>,
) -> u8 {
    let mut score: i32 = 5;

    if let Some(roe) = roe {
        if roe > 15.0 {
            score += 2;
        } else if roe > 8.0 {
            score += 1;
        } else if roe < 0.0 {
            score -= 1;
        }
    }
    if let Some(pe) = pe {
        if pe > 0.0 && pe < 10.0 {
            score += 1;
        } else if pe > 40.0 {
            score -= 1;
        }
    }

    if let (Some(ret), Some(bench)) = (ticker_ret_1m, benchmark_ret_1m) {
        let alpha = ret - bench;
        if alpha > 7.0 {
            score += 2;
        } else if alpha > 2.0 {
            score += 1;
        } else if alpha < -7.0 {
            score -= 2;
        } else if alpha < -2.0 {
            score -= 1;
        }
    }

    score += news_tone(news);

    score.clamp(1, 10) as u8
}

/// +1 / -1 / 0 from counting articles with positive vs negative keywords.
fn news_tone(news: &[NewsItem]) -> i32 {
    let mut pos = 0;
    let mut neg = 0;
    for item in news {
        let text = format!("{} {}", item.title, item.description).to_lowercase();
        if POSITIVE_KEYWORDS.iter().any(|k| text.contains(k)) {
            pos += 1;
        }
        if NEGATIVE_KEYWORDS.iter().any(|k| text.contains(k)) {
            neg += 1;
        }
    }
    match pos.cmp(&neg) {
        std::cmp::Ordering::Greater => 1,
        std::cmp::Ordering::Less => -1,
        std::cmp::Ordering::Equal => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headline(title: &str) -> NewsItem {
        NewsItem {
            title: title.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_neutral_company_is_five() {
        assert_eq!(us_company_score(None, None, &[], None, None), 5);
    }

    #[test]
    fn test_strong_us_company() {
        // ROE 25 (+2), PE 12 (+1), alpha 6 (+2), positive news (+1) = 11 -> 10.
        let news = vec![headline("Record quarter, results beat estimates")];
        assert_eq!(
            us_company_score(Some(8.0), Some(2.0), &news, Some(12.0), Some(25.0)),
            10
        );
    }

    #[test]
    fn test_weak_us_company() {
        // ROE -5 (-1), PE 80 (-1), alpha -7 (-2), negative news (-1) = 0 -> 1.
        let news = vec![headline("Earnings miss sparks downgrade")];
        assert_eq!(
            us_company_score(Some(-5.0), Some(2.0), &news, Some(80.0), Some(-5.0)),
            1
        );
    }

    #[test]
    fn test_korea_bands_are_wider() {
        // Alpha 6 clears the US +2 bar but only +1 in Korea.
        assert_eq!(us_company_score(Some(8.0), Some(2.0), &[], None, None), 7);
        assert_eq!(korea_company_score(Some(8.0), Some(2.0), &[], None, None), 6);
        // ROE 16 is +2 in Korea, +1 in the US.
        assert_eq!(korea_company_score(None, None, &[], None, Some(16.0)), 7);
        assert_eq!(us_company_score(None, None, &[], None, Some(16.0)), 6);
    }

    #[test]
    fn test_mixed_news_cancels_out() {
        let news = vec![
            headline("Strong growth ahead"),
            headline("Lawsuit risk weighs on shares"),
        ];
        assert_eq!(us_company_score(None, None, &news, None, None), 5);
    }
}
