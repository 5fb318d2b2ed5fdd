use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref RE: Regex = Regex::new(r"\w+").expect("valid regex");
}

/// Tokenize text into lowercase word runs (letters, digits, underscore).
///
/// No stemming, stopword removal or length filtering is applied.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    RE.find_iter(&lowered).map(|m| m.as_str().to_string()).collect()
}
