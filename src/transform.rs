//! Per-capture-group transformation pipeline.

use crate::config::{TransformationRule, TransformationType};
use tracing::warn;

/// Apply all steps targeting `group_index` to `value`, in declaration order.
///
/// Steps fold left-to-right: each step's output feeds the next step's input.
/// Steps targeting other groups are ignored here; a step whose target has no
/// corresponding capture group simply never gets selected by any caller.
pub fn apply_pipeline(value: &str, group_index: usize, steps: &[TransformationRule]) -> String {
    steps
        .iter()
        .filter(|step| step.target == group_index)
        .fold(value.to_string(), |acc, step| apply_step(&acc, step))
}

/// Apply one transformation step to a single value.
fn apply_step(value: &str, step: &TransformationRule) -> String {
    match step.kind {
        TransformationType::ReplaceAll => value.replace(&step.search_value, &step.replace_value),
        TransformationType::ReplaceOne => {
            value.replacen(&step.search_value, &step.replace_value, 1)
        }
        TransformationType::UrlEncode => urlencoding::encode(value).into_owned(),
        TransformationType::UrlDecode => match urlencoding::decode(value) {
            Ok(decoded) => decoded.into_owned(),
            Err(e) => {
                // Malformed escapes pass through unchanged; decoding must
                // never abort the pipeline.
                warn!(error = %e, "Failed to percent-decode value, passing through");
                value.to_string()
            }
        },
    }
}
