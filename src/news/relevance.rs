//! Per-article relevance scoring.
//!
//! Estimates how likely a single article is to actually move the analyzed
//! stock, on a 0-1 scale: direct name/ticker mention, presence of a
//! price-moving event keyword, a penalty for "stocks to watch" listicle
//! patterns, and a recency bonus decaying over 72 hours. The top-scoring
//! article's title tone drives the news flags.

use std::collections::HashSet;

use aho_corasick::AhoCorasick;
use chrono::{DateTime, Utc};

use crate::core::types::NewsItem;
use crate::news::normalize::normalize_for_matching;

pub const DIRECT_MATCH_BONUS: f64 = 0.4;
pub const EVENT_BONUS: f64 = 0.3;
pub const LISTICLE_PENALTY: f64 = 0.3;
pub const RECENCY_FRESH_BONUS: f64 = 0.2;
pub const RECENCY_RECENT_BONUS: f64 = 0.1;
pub const RECENCY_FRESH_HOURS: f64 = 24.0;
pub const RECENCY_RECENT_HOURS: f64 = 72.0;

const EVENT_KEYWORDS: &[&str] = &[
    "earnings",
    "launch",
    "contract",
    "merger",
    "acquisition",
    "lawsuit",
    "regulation",
    "approval",
];

const POSITIVE_KEYWORDS: &[&str] = &[
    "surge", "jump", "record", "beat", "buy", "upgrade", "growth", "launch",
];

const NEGATIVE_KEYWORDS: &[&str] = &[
    "drop", "fall", "miss", "sell", "downgrade", "risk", "concern", "loss",
];

const LISTICLE_PATTERNS: &[&str] = &[
    "stocks to watch",
    "stocks to buy",
    "top stocks",
    "hot stocks",
    "theme stocks",
];

// A listicle title plus this many enumeration separators marks a
// low-quality stock-listing article.
const LISTICLE_SEPARATORS: usize = 5;

/// Tone of an article title by keyword counting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TitleTone {
    Positive,
    Negative,
    Mixed,
}

pub struct RelevanceScorer {
    ac_events: AhoCorasick,
    ac_positive: AhoCorasick,
    ac_negative: AhoCorasick,
    ac_listicle: AhoCorasick,
}

impl Default for RelevanceScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl RelevanceScorer {
    pub fn new() -> Self {
        Self {
            ac_events: AhoCorasick::new(EVENT_KEYWORDS).expect("failed to build AC for events"),
            ac_positive: AhoCorasick::new(POSITIVE_KEYWORDS)
                .expect("failed to build AC for positive keywords"),
            ac_negative: AhoCorasick::new(NEGATIVE_KEYWORDS)
                .expect("failed to build AC for negative keywords"),
            ac_listicle: AhoCorasick::new(LISTICLE_PATTERNS)
                .expect("failed to build AC for listicle patterns"),
        }
    }

    /// Relevance of one article for the given symbol, clamped to [0,1].
    pub fn score(
        &self,
        item: &NewsItem,
        ticker: &str,
        company_name: &str,
        now: DateTime<Utc>,
    ) -> f64 {
        let text = normalize_for_matching(&item.title, &item.description);
        let mut score = 0.0;

        let ticker_lc = ticker.to_lowercase();
        let company_lc = company_name.to_lowercase();
        let direct = (!ticker_lc.is_empty() && text.contains(&ticker_lc))
            || (!company_lc.is_empty() && text.contains(&company_lc));
        if direct {
            score += DIRECT_MATCH_BONUS;
        }

        if self.ac_events.is_match(&text) {
            score += EVENT_BONUS;
        }

        if self.ac_listicle.is_match(&item.title.to_lowercase()) {
            let raw = format!("{} {}", item.title, item.description);
            let separators = raw.matches(|c| c == ',' || c == '·').count();
            if separators > LISTICLE_SEPARATORS {
                score -= LISTICLE_PENALTY;
            }
        }

        if let Some(published) = item.published {
            let hours_ago = (now - published).num_seconds() as f64 / 3600.0;
            if hours_ago < RECENCY_FRESH_HOURS {
                score += RECENCY_FRESH_BONUS;
            } else if hours_ago < RECENCY_RECENT_HOURS {
                score += RECENCY_RECENT_BONUS;
            }
        }

        score.clamp(0.0, 1.0)
    }

    /// Highest-scoring article of the batch, with its score.
    pub fn best<'a>(
        &self,
        news: &'a [NewsItem],
        ticker: &str,
        company_name: &str,
        now: DateTime<Utc>,
    ) -> Option<(&'a NewsItem, f64)> {
        news.iter()
            .map(|item| (item, self.score(item, ticker, company_name, now)))
            .max_by(|a, b| a.1.total_cmp(&b.1))
    }

    /// Tone of a title by counting distinct positive vs negative keywords.
    pub fn title_tone(&self, title: &str) -> TitleTone {
        let text = title.to_lowercase();
        let positive = distinct_hits(&self.ac_positive, &text);
        let negative = distinct_hits(&self.ac_negative, &text);

        if positive > negative && positive >= 1 {
            TitleTone::Positive
        } else if negative > positive && negative >= 1 {
            TitleTone::Negative
        } else {
            TitleTone::Mixed
        }
    }
}

fn distinct_hits(ac: &AhoCorasick, text: &str) -> usize {
    let hits: HashSet<usize> = ac
        .find_overlapping_iter(text)
        .map(|m| m.pattern().as_usize())
        .collect();
    hits.len()
}
