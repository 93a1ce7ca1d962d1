//! News directness ranking.
//!
//! Scores each article 0-100 for how directly it is about the analyzed
//! symbol and buckets the batch into direct / indirect / irrelevant, so
//! the report layer can lead with the articles that actually concern the
//! company instead of macro noise.

use aho_corasick::AhoCorasick;
use serde::Serialize;

use crate::core::types::NewsItem;
use crate::news::normalize::normalize_for_matching;

pub const SCORE_TICKER_MATCH: i32 = 60;
pub const SCORE_COMPANY_MATCH: i32 = 50;
pub const SCORE_TRUSTED_DOMAIN: i32 = 10;
pub const SCORE_KEYWORD_MATCH: i32 = 15;
pub const SCORE_EXCLUSION: i32 = -40;
pub const SCORE_MACRO: i32 = -30;

pub const DIRECT_THRESHOLD: i32 = 60;
pub const INDIRECT_THRESHOLD: i32 = 30;

const TRUSTED_DOMAINS: &[&str] = &[
    "finance.yahoo.com",
    "reuters.com",
    "bloomberg.com",
    "wsj.com",
    "cnbc.com",
    "marketwatch.com",
    "barrons.com",
    "investing.com",
];

const DIRECT_KEYWORDS: &[&str] = &[
    "rating",
    "target price",
    "upgrade",
    "downgrade",
    "earnings",
    "revenue",
    "profit",
    "sales",
    "launch",
    "product",
    "lawsuit",
    "regulation",
    "approval",
    "fda",
    "split",
    "dividend",
    "buyback",
    "merger",
    "acquisition",
];

const MACRO_KEYWORDS: &[&str] = &[
    "fed",
    "federal reserve",
    "cpi",
    "inflation",
    "rate hike",
    "interest rate",
    "nasdaq",
    "s&p 500",
    "dow jones",
    "market outlook",
];

const NEGATIVE_KEYWORDS: &[&str] = &[
    "downgrade",
    "sell",
    "miss",
    "weak",
    "concern",
    "lawsuit",
    "investigation",
    "fall",
    "drop",
];

const POSITIVE_KEYWORDS: &[&str] = &[
    "upgrade", "buy", "beat", "strong", "record", "growth", "jump", "surge", "approval",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NewsSentiment {
    Positive,
    Negative,
    Neutral,
}

#[derive(Clone, Debug, Serialize)]
pub struct RankedNews {
    pub item: NewsItem,
    pub directness: i32,
    pub sentiment: NewsSentiment,
}

#[derive(Clone, Debug, Default, Serialize)]
pub struct NewsBuckets {
    pub direct: Vec<RankedNews>,
    pub indirect: Vec<RankedNews>,
    pub irrelevant: Vec<RankedNews>,
}

pub struct NewsRanker {
    ac_direct: AhoCorasick,
    ac_macro: AhoCorasick,
    ac_positive: AhoCorasick,
    ac_negative: AhoCorasick,
}

impl Default for NewsRanker {
    fn default() -> Self {
        Self::new()
    }
}

impl NewsRanker {
    pub fn new() -> Self {
        Self {
            ac_direct: AhoCorasick::new(DIRECT_KEYWORDS)
                .expect("failed to build AC for direct keywords"),
            ac_macro: AhoCorasick::new(MACRO_KEYWORDS)
                .expect("failed to build AC for macro keywords"),
            ac_positive: AhoCorasick::new(POSITIVE_KEYWORDS)
                .expect("failed to build AC for positive keywords"),
            ac_negative: AhoCorasick::new(NEGATIVE_KEYWORDS)
                .expect("failed to build AC for negative keywords"),
        }
    }

    /// Directness of one article for the symbol, clamped to [0,100].
    ///
    /// Articles that never mention the target take the off-target penalty,
    /// and a further one if they are about macro topics instead.
    pub fn directness(&self, item: &NewsItem, ticker: &str, company_name: &str) -> i32 {
        let text = normalize_for_matching(&item.title, &item.description);
        let url = item.url.to_lowercase();

        // "005930.KS" style suffixes don't appear in prose.
        let ticker_clean = ticker.split('.').next().unwrap_or(ticker).to_lowercase();
        let company_clean = company_name
            .to_lowercase()
            .replace("inc.", "")
            .replace("corp.", "")
            .trim()
            .to_string();

        let mut score = 0;

        let ticker_hit = !ticker_clean.is_empty() && text.contains(&ticker_clean);
        if ticker_hit {
            score += SCORE_TICKER_MATCH;
        }

        let company_hit = !company_clean.is_empty() && text.contains(&company_clean);
        if company_hit {
            score += SCORE_COMPANY_MATCH;
        }

        if TRUSTED_DOMAINS.iter().any(|d| url.contains(d)) {
            score += SCORE_TRUSTED_DOMAIN;
        }

        if self.ac_direct.is_match(&text) {
            score += SCORE_KEYWORD_MATCH;
        }

        if !ticker_hit && !company_hit {
            if self.ac_macro.is_match(&text) {
                score += SCORE_MACRO;
            }
            score += SCORE_EXCLUSION;
        }

        score.clamp(0, 100)
    }

    pub fn sentiment(&self, item: &NewsItem) -> NewsSentiment {
        let text = normalize_for_matching(&item.title, &item.description);
        if self.ac_negative.is_match(&text) {
            NewsSentiment::Negative
        } else if self.ac_positive.is_match(&text) {
            NewsSentiment::Positive
        } else {
            NewsSentiment::Neutral
        }
    }

    /// Score and bucket a batch, each bucket sorted by directness.
    pub fn rank(&self, news: &[NewsItem], ticker: &str, company_name: &str) -> NewsBuckets {
        let mut ranked: Vec<RankedNews> = news
            .iter()
            .map(|item| RankedNews {
                item: item.clone(),
                directness: self.directness(item, ticker, company_name),
                sentiment: self.sentiment(item),
            })
            .collect();
        ranked.sort_by(|a, b| b.directness.cmp(&a.directness));

        let mut buckets = NewsBuckets::default();
        for r in ranked {
            if r.directness >= DIRECT_THRESHOLD {
                buckets.direct.push(r);
            } else if r.directness >= INDIRECT_THRESHOLD {
                buckets.indirect.push(r);
            } else {
                buckets.irrelevant.push(r);
            }
        }
        buckets
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(title: &str, description: &str, url: &str) -> NewsItem {
        NewsItem {
            title: title.to_string(),
            description: description.to_string(),
            url: url.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_direct_article_scores_high() {
        let ranker = NewsRanker::new();
        let n = item(
            "Tesla earnings beat expectations",
            "tsla revenue up",
            "https://www.reuters.com/markets/tesla",
        );
        // 60 ticker + 50 company + 10 domain + 15 keyword, clamped to 100.
        assert_eq!(ranker.directness(&n, "TSLA", "Tesla"), 100);
    }

    #[test]
    fn test_macro_article_scores_zero() {
        let ranker = NewsRanker::new();
        let n = item(
            "Fed signals another rate hike",
            "inflation remains sticky",
            "https://www.cnbc.com/economy",
        );
        // 10 domain - 30 macro - 40 off-target, clamped to 0.
        assert_eq!(ranker.directness(&n, "TSLA", "Tesla"), 0);
    }

    #[test]
    fn test_off_target_company_article_is_indirect_at_best() {
        let ranker = NewsRanker::new();
        let n = item(
            "Chipmaker lawsuit shakes suppliers",
            "industry wide impact",
            "",
        );
        // 15 keyword - 40 off-target, clamped to 0.
        assert_eq!(ranker.directness(&n, "TSLA", "Tesla"), 0);
    }

    #[test]
    fn test_ticker_suffix_is_stripped() {
        let ranker = NewsRanker::new();
        let n = item("005930 wins large contract", "", "");
        assert!(ranker.directness(&n, "005930.KS", "Samsung Electronics") >= SCORE_TICKER_MATCH);
    }

    #[test]
    fn test_sentiment_negative_takes_precedence() {
        let ranker = NewsRanker::new();
        let n = item("Strong quarter but shares fall", "", "");
        assert_eq!(ranker.sentiment(&n), NewsSentiment::Negative);
        let p = item("Record growth for the platform", "", "");
        assert_eq!(ranker.sentiment(&p), NewsSentiment::Positive);
        let neutral = item("Company schedules annual meeting", "", "");
        assert_eq!(ranker.sentiment(&neutral), NewsSentiment::Neutral);
    }

    #[test]
    fn test_rank_buckets_and_sorts() {
        let ranker = NewsRanker::new();
        let news = vec![
            item("Fed signals rate hike", "macro", ""),
            item(
                "Tesla launches new model",
                "",
                "https://www.bloomberg.com/tesla",
            ),
            item("Tesla mentioned in passing", "", ""),
        ];
        let buckets = ranker.rank(&news, "TSLA", "Tesla");
        // 50 + 10 + 15 for the launch article; 50 for the bare mention.
        assert_eq!(buckets.direct.len(), 1);
        assert_eq!(buckets.indirect.len(), 1);
        assert_eq!(buckets.irrelevant.len(), 1);
        assert!(buckets.direct[0].item.title.contains("launches"));
    }
}
