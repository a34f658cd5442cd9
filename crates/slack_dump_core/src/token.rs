use std::sync::LazyLock;

use dump_logging::dump_warn;
use regex::Regex;

/// Shape of the client token embedded in the workspace page.
pub const TOKEN_PATTERN: &str = r"xoxc-[a-zA-Z0-9-]+";

static TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(TOKEN_PATTERN).expect("token pattern is valid"));

/// All distinct token candidates in `body`, in order of first occurrence.
pub fn extract_tokens(body: &str) -> Vec<String> {
    let mut tokens: Vec<String> = Vec::new();
    for found in TOKEN_RE.find_iter(body) {
        let candidate = found.as_str();
        if !tokens.iter().any(|t| t == candidate) {
            tokens.push(candidate.to_string());
        }
    }
    tokens
}

/// Picks the token to authenticate with: the first candidate in document order.
///
/// Several distinct candidates are ambiguous; the choice is logged.
pub fn select_token(candidates: &[String]) -> Option<&str> {
    let first = candidates.first()?;
    if candidates.len() > 1 {
        dump_warn!(
            "Found {} distinct tokens on the workspace page; using the first one ({})",
            candidates.len(),
            dump_logging::redact(first)
        );
    }
    Some(first.as_str())
}
