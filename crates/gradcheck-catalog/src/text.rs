//! Text heuristics for free-form catalog fields.
//!
//! Every function here is total: bad input degrades to a default, never an error.

use regex::Regex;
use std::sync::LazyLock;

static COURSE_CODE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[A-Za-z]{2,4}\s*\d{3}[A-Za-z]?").expect("course code pattern compiles")
});

static LEADING_CODE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*[A-Za-z]{2,4}\s*\d{3}[A-Za-z]?\s*[:\-–]\s*")
        .expect("leading code pattern compiles")
});

// "3 credits", "3-4 credits", "3.0 credit hours"; group 1 is the first number.
static CREDITS_PHRASE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(\d+(?:\.\d+)?)(?:\s*-\s*\d+(?:\.\d+)?)?\s+credits?")
        .expect("credits phrase pattern compiles")
});

static NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+(?:\.\d+)?").expect("number pattern compiles"));

// Separators in priority order: semicolon, sentence-ending period, ", or", ", and", comma.
static PREREQ_SPLIT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\s*;\s*|\.(?:\s+|$)|\s*,\s*or\b\s*|\s*,\s*and\b\s*|\s*,\s*")
        .expect("prerequisite separator pattern compiles")
});

/// Find a course code inside a title such as `"Csci 111: Computer Science I"`.
///
/// Returns the matched text uppercased, or `None` when the title carries no code.
pub fn find_code_in_title(title: &str) -> Option<String> {
    COURSE_CODE_RE
        .find(title)
        .map(|m| m.as_str().to_uppercase())
}

/// Strip a leading `"<CODE>: "` or `"<CODE> - "` from a title.
pub fn strip_code_prefix(title: &str) -> String {
    LEADING_CODE_RE.replace(title, "").trim().to_string()
}

/// Credits from free text. First a "<n> credit(s)" phrase, then any number, then 0.
pub fn parse_credits_text(text: &str) -> u32 {
    let text = text.trim();
    if text.is_empty() {
        return 0;
    }

    if let Some(caps) = CREDITS_PHRASE_RE.captures(text)
        && let Some(n) = caps.get(1).and_then(|m| parse_truncated(m.as_str()))
    {
        return n;
    }

    NUMBER_RE
        .find(text)
        .and_then(|m| parse_truncated(m.as_str()))
        .unwrap_or(0)
}

/// Truncate a decimal to a credit count. Negative or non-finite values become 0.
pub fn truncate_credits(value: f64) -> u32 {
    if value.is_finite() && value > 0.0 {
        value as u32
    } else {
        0
    }
}

fn parse_truncated(digits: &str) -> Option<u32> {
    digits.parse::<f64>().ok().map(truncate_credits)
}

/// Split a prerequisite sentence into clauses.
///
/// If splitting leaves nothing usable the original text is kept as one clause,
/// so a non-empty input never produces an empty list.
pub fn split_prerequisites(text: &str) -> Vec<String> {
    let text = text.trim();
    if text.is_empty() {
        return Vec::new();
    }

    let parts: Vec<String> = PREREQ_SPLIT_RE
        .split(text)
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect();

    if parts.is_empty() {
        vec![text.to_string()]
    } else {
        parts
    }
}
