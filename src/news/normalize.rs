use deunicode::deunicode;
use regex::Regex;

/// Normalize an article's text for keyword matching: lowercase, strip
/// URLs, fold unicode to ASCII and collapse whitespace. Punctuation is
/// kept; multi-word keyword patterns rely on single spaces between words.
pub fn normalize_for_matching(title: &str, description: &str) -> String {
    lazy_static::lazy_static! {
        static ref URL_RE: Regex = Regex::new(r"https?://\S+").unwrap();
    }

    let combined = format!("{title} {description}");
    let lower = combined.to_lowercase();
    let no_url = URL_RE.replace_all(&lower, "");
    let ascii = deunicode(&no_url);

    let collapsed = ascii.split_whitespace().collect::<Vec<_>>().join(" ");

    collapsed.trim().to_string()
}
