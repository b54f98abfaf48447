//! Name filter construction for the catalog listing
//!
//! The listing supports at most one of two case-insensitive filters on the
//! band name: a single-letter prefix filter (alphabet bar) or a substring
//! search (search box). The prefix filter wins when both are supplied.

/// Escape character used in LIKE patterns
const LIKE_ESCAPE: char = '\\';

/// Resolved name filter for one request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameFilter {
    /// No filter: match every band
    All,
    /// Name begins with the given letter (case-insensitive)
    Prefix(String),
    /// Name contains the given string anywhere (case-insensitive)
    Substring(String),
}

impl NameFilter {
    /// Resolve the filter from the two optional query parameters.
    ///
    /// `starts_with` takes precedence over `search`; empty or
    /// whitespace-only values count as absent. Only the first character of
    /// `starts_with` is used (the UI only ever sends one letter).
    pub fn from_params(starts_with: Option<&str>, search: Option<&str>) -> Self {
        if let Some(prefix) = starts_with.map(str::trim).filter(|s| !s.is_empty()) {
            if let Some(letter) = prefix.chars().next() {
                return NameFilter::Prefix(letter.to_string());
            }
        }
        if let Some(term) = search.map(str::trim).filter(|s| !s.is_empty()) {
            return NameFilter::Substring(term.to_string());
        }
        NameFilter::All
    }

    /// LIKE pattern for this filter, with metacharacters in the literal
    /// escaped. Returns None for the unfiltered case.
    pub fn like_pattern(&self) -> Option<String> {
        match self {
            NameFilter::All => None,
            NameFilter::Prefix(letter) => Some(format!("{}%", escape_like(letter))),
            NameFilter::Substring(term) => Some(format!("%{}%", escape_like(term))),
        }
    }
}

/// Escape `%`, `_`, and the escape character itself so user input matches
/// literally inside a LIKE pattern.
fn escape_like(literal: &str) -> String {
    let mut escaped = String::with_capacity(literal.len());
    for c in literal.chars() {
        if c == '%' || c == '_' || c == LIKE_ESCAPE {
            escaped.push(LIKE_ESCAPE);
        }
        escaped.push(c);
    }
    escaped
}
