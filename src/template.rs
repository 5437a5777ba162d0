//! Output template substitution.

/// Substitute transformed capture groups into an output template.
///
/// For each group index `i` (1-based, ascending), the first remaining
/// occurrence of the literal token `$i` in the evolving string is replaced
/// with the group's value. Only one substitution happens per index: a
/// template referencing `$1` twice keeps its second `$1` literal. Tokens
/// with no corresponding group are left untouched.
pub fn build_url(template: &str, groups: &[String]) -> String {
    groups
        .iter()
        .enumerate()
        .fold(template.to_string(), |url, (index, group)| {
            url.replacen(&format!("${}", index + 1), group, 1)
        })
}
