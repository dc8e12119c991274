//! Lexical signal extraction from free-text answers.
//!
//! Everything here is a pure function of the input text. Matches are
//! deliberately naive substring or regex tests with no word boundaries,
//! so "topic" matches "top" and "ball" matches "all". That mirrors the
//! behavior the wizard has always had; do not tighten to word-boundary
//! matching without revisiting the validator thresholds with it.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

static NUMERIC_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+").expect("pattern compiles"));
static TIMEFRAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(year|month|by 20\d{2})").expect("pattern compiles"));
static CUSTOMER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(customer|client|user)").expect("pattern compiles"));
static BOUNDARY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(focus|specific|exclude|not)").expect("pattern compiles"));
static GENERIC_ADVANTAGE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(better|faster|cheaper|quality)").expect("pattern compiles"));
static BROAD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(everyone|all|any|general)").expect("pattern compiles"));

const VAGUE_TERMS: [&str; 6] = ["best", "leading", "top", "great", "excellent", "good"];

/// Signals derived from scanning one answer. Recomputed on demand,
/// never cached; lifetime is a single analysis call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexicalSignals {
    /// Character count of the raw (untrimmed) text.
    pub length: usize,
    pub has_numeric_metric: bool,
    pub has_timeframe: bool,
    pub has_customer_focus: bool,
    /// Only meaningful for the winning-aspiration step.
    pub has_vague_term: bool,
    pub has_boundary_language: bool,
    pub has_generic_advantage_term: bool,
    /// Only consulted by the where-to-play validator heuristic.
    pub has_broad_term: bool,
}

impl LexicalSignals {
    pub fn compute(text: &str) -> Self {
        let lower = text.to_lowercase();
        Self {
            length: text.chars().count(),
            has_numeric_metric: NUMERIC_RE.is_match(text),
            has_timeframe: TIMEFRAME_RE.is_match(text),
            has_customer_focus: CUSTOMER_RE.is_match(text),
            has_vague_term: VAGUE_TERMS.iter().any(|term| lower.contains(term)),
            has_boundary_language: BOUNDARY_RE.is_match(text),
            has_generic_advantage_term: GENERIC_ADVANTAGE_RE.is_match(text),
            has_broad_term: BROAD_RE.is_match(text),
        }
    }
}

/// Count of distinct words longer than three characters appearing in
/// both texts. Case-insensitive, whitespace tokenization, no stemming.
/// Counting distinct words keeps the function symmetric.
pub fn overlap(a: &str, b: &str) -> usize {
    fn words(s: &str) -> HashSet<String> {
        s.split_whitespace()
            .map(|w| w.to_lowercase())
            .filter(|w| w.chars().count() > 3)
            .collect()
    }
    words(a).intersection(&words(b)).count()
}
