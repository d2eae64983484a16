/// Returns true if `s` starts with `prefix`, ends with `suffix`, and has some
/// content in between.
///
/// # Examples
/// ```
/// use prodgraph_core::utils::is_delimited;
/// assert!(is_delimited("<expr>", "<", ">"));
/// assert!(!is_delimited("<>", "<", ">"));
/// assert!(!is_delimited("expr", "<", ">"));
/// ```
pub fn is_delimited(s: &str, prefix: &str, suffix: &str) -> bool {
    s.len() > prefix.len() + suffix.len() && s.starts_with(prefix) && s.ends_with(suffix)
}

/// Whether a label is a non-terminal placeholder (`<text>` with non-empty text).
///
/// # Examples
/// ```
/// use prodgraph_core::utils::is_nonterminal;
/// assert!(is_nonterminal("<digit>"));
/// assert!(!is_nonterminal("7"));
/// ```
pub fn is_nonterminal(label: &str) -> bool {
    is_delimited(label, "<", ">")
}

/// Strip one layer of `prefix`/`suffix` if both are present with content between.
pub fn strip_delimiters<'a>(s: &'a str, prefix: &str, suffix: &str) -> Option<&'a str> {
    if !is_delimited(s, prefix, suffix) {
        return None;
    }
    Some(&s[prefix.len()..s.len() - suffix.len()])
}
