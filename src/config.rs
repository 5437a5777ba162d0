//! Rule data model and persisted record shapes.
//!
//! Field names are serialized in camelCase with a `type` tag on
//! transformations, matching the record shape the rule store persists.

use serde::{Deserialize, Serialize};

/// A URL rewrite rule.
///
/// Combines a match pattern, an output template, and an ordered
/// transformation pipeline. Rules are immutable value snapshots from the
/// engine's perspective; their lifecycle lives in the [`RuleStore`].
///
/// [`RuleStore`]: crate::store::RuleStore
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rule {
    /// Opaque unique identifier, assigned at creation.
    pub id: String,
    /// Rule name (for logging/debugging).
    pub name: String,
    /// Optional description, display-only.
    #[serde(default)]
    pub description: String,
    /// Regex tested against the full request URL (search semantics, not
    /// anchored). Capture groups are 1-indexed in appearance order.
    pub input_pattern: String,
    /// Template for the redirect URL, with `$1`..`$N` placeholders.
    pub output_pattern: String,
    /// Transformations applied to capture groups before substitution.
    /// Order is significant: steps sharing a target apply in array order.
    #[serde(default)]
    pub transformation_rules: Vec<TransformationRule>,
    /// Whether the rule participates in matching.
    #[serde(default = "default_true")]
    pub is_active: bool,
}

fn default_true() -> bool {
    true
}

/// A single transformation step applied to one capture group.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransformationRule {
    /// The operation to apply.
    #[serde(rename = "type")]
    pub kind: TransformationType,
    /// Literal search string for `ReplaceAll`/`ReplaceOne`; unused by
    /// encode/decode.
    #[serde(default)]
    pub search_value: String,
    /// Literal replacement string for `ReplaceAll`/`ReplaceOne`.
    #[serde(default)]
    pub replace_value: String,
    /// 1-based capture group index this step applies to.
    pub target: usize,
}

/// Transformation operation kinds.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum TransformationType {
    /// Replace every non-overlapping literal occurrence.
    ReplaceAll,
    /// Replace only the first literal occurrence.
    ReplaceOne,
    /// Percent-encode the value as a URL component.
    UrlEncode,
    /// Percent-decode the value.
    UrlDecode,
}

/// Persisted rule record: a single ordered sequence of rules.
///
/// The sequence order is the evaluation order; the engine never re-sorts it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuleStorage {
    /// Rules in evaluation order.
    #[serde(default)]
    pub rules: Vec<Rule>,
}
