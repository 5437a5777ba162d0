//! Rule matching against candidate URLs.

use crate::config::Rule;
use regex::Regex;
use tracing::warn;

/// A successful match: the winning rule and its capture groups.
#[derive(Debug, Clone)]
pub struct RuleMatch<'a> {
    /// The first active rule whose pattern matched.
    pub rule: &'a Rule,
    /// Capture groups 1..N in appearance order, excluding the overall
    /// match. A group that did not participate is an empty string.
    pub groups: Vec<String>,
}

/// Find the first active rule whose `input_pattern` matches `url`.
///
/// Rules are tried in supplied order and the search short-circuits on the
/// first match; subsequent rules are never evaluated. Patterns use search
/// semantics: a partial match anywhere in the URL counts.
///
/// A pattern that fails to compile is skipped for this invocation and
/// reported via `warn!`; it never aborts evaluation of the remaining rules.
pub fn first_match<'a>(url: &str, rules: &'a [Rule]) -> Option<RuleMatch<'a>> {
    rules
        .iter()
        .filter(|rule| rule.is_active)
        .find_map(|rule| try_match(url, rule))
}

/// Test a single rule against the URL.
fn try_match<'a>(url: &str, rule: &'a Rule) -> Option<RuleMatch<'a>> {
    let regex = match Regex::new(&rule.input_pattern) {
        Ok(r) => r,
        Err(e) => {
            warn!(
                rule = %rule.name,
                rule_id = %rule.id,
                error = %e,
                "Skipping rule with invalid pattern"
            );
            return None;
        }
    };

    let caps = regex.captures(url)?;
    let groups = caps
        .iter()
        .skip(1)
        .map(|m| m.map(|m| m.as_str().to_string()).unwrap_or_default())
        .collect();

    Some(RuleMatch { rule, groups })
}
