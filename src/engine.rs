//! Rewrite engine: the one operation the interception layer calls.

use crate::config::Rule;
use crate::matcher;
use crate::template;
use crate::transform;
use tracing::{debug, trace};

/// Decide whether `url` should be rewritten under the supplied rule snapshot.
///
/// Returns `Some(redirect_url)` when the first active matching rule produces
/// a replacement, `None` when the request should proceed unmodified. The
/// snapshot's order is the evaluation order; only the first matching rule is
/// applied.
///
/// Evaluation is synchronous, stateless, and fail-open: a malformed rule
/// degrades to inert rather than blocking traffic, and non-HTTP(S) URLs are
/// never rewritten.
pub fn evaluate(url: &str, rules: &[Rule]) -> Option<String> {
    if !is_http_url(url) {
        trace!(url, "Skipping non-HTTP URL");
        return None;
    }

    let m = match matcher::first_match(url, rules) {
        Some(m) => m,
        None => {
            trace!(url, "No matching rewrite rule");
            return None;
        }
    };

    let transformed: Vec<String> = m
        .groups
        .iter()
        .enumerate()
        .map(|(index, group)| {
            transform::apply_pipeline(group, index + 1, &m.rule.transformation_rules)
        })
        .collect();

    let redirect = template::build_url(&m.rule.output_pattern, &transformed);

    debug!(
        url,
        rule = %m.rule.name,
        rule_id = %m.rule.id,
        redirect = %redirect,
        "Rewrite rule matched"
    );

    Some(redirect)
}

/// Scheme check: only http and https URLs are candidates for rewriting.
fn is_http_url(url: &str) -> bool {
    let scheme_end = match url.find("://") {
        Some(pos) => pos,
        None => return false,
    };
    let scheme = &url[..scheme_end];
    scheme.eq_ignore_ascii_case("http") || scheme.eq_ignore_ascii_case("https")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{TransformationRule, TransformationType};

    fn shop_rule() -> Rule {
        Rule {
            id: "shop".to_string(),
            name: "shop-rewrite".to_string(),
            description: String::new(),
            input_pattern: r"example\.com/item/(\d+)".to_string(),
            output_pattern: "https://shop.test/p/$1".to_string(),
            transformation_rules: vec![],
            is_active: true,
        }
    }

    #[test]
    fn test_plain_capture_substitution() {
        let rules = vec![shop_rule()];
        assert_eq!(
            evaluate("https://example.com/item/42", &rules),
            Some("https://shop.test/p/42".to_string())
        );
    }

    #[test]
    fn test_transformed_capture() {
        let mut rule = shop_rule();
        rule.transformation_rules.push(TransformationRule {
            kind: TransformationType::ReplaceAll,
            search_value: "4".to_string(),
            replace_value: "9".to_string(),
            target: 1,
        });
        assert_eq!(
            evaluate("https://example.com/item/42", &[rule]),
            Some("https://shop.test/p/92".to_string())
        );
    }

    #[test]
    fn test_no_match_proceeds_unmodified() {
        let rules = vec![shop_rule()];
        assert_eq!(evaluate("https://other.test/x", &rules), None);
    }

    #[test]
    fn test_inactive_rule_never_applies() {
        let mut rule = shop_rule();
        rule.is_active = false;
        assert_eq!(evaluate("https://example.com/item/42", &[rule]), None);
    }

    #[test]
    fn test_non_http_url_skipped() {
        let rules = vec![Rule {
            input_pattern: ".*".to_string(),
            output_pattern: "https://trap.test/".to_string(),
            ..shop_rule()
        }];
        assert_eq!(evaluate("ftp://example.com/item/42", &rules), None);
        assert_eq!(evaluate("chrome-extension://abc/page.html", &rules), None);
        assert_eq!(evaluate("not a url", &rules), None);
    }

    #[test]
    fn test_scheme_check_is_case_insensitive() {
        let rules = vec![shop_rule()];
        assert_eq!(
            evaluate("HTTPS://example.com/item/42", &rules),
            Some("https://shop.test/p/42".to_string())
        );
    }

    #[test]
    fn test_empty_rule_set() {
        assert_eq!(evaluate("https://example.com/item/42", &[]), None);
    }
}
