//! Rule-based URL rewrite engine for request redirection.
//!
//! Given a candidate request URL and an ordered snapshot of rewrite rules,
//! the engine decides whether any active rule matches (first-match-wins) and
//! produces the replacement URL:
//!
//! - Regex matching with capture groups against the full URL
//! - Per-capture-group transformation pipelines (literal replace,
//!   percent-encode/decode)
//! - `$1`..`$N` placeholder substitution into an output template
//!
//! Evaluation is synchronous and fail-open: a malformed rule degrades to
//! inert, never to blocking the request.
//!
//! ## Rule File Example
//!
//! ```yaml
//! rules:
//!   - id: "8d5e9570-1f2a-4b8e-9c3d-2a1b0c9d8e7f"
//!     name: "shop-rewrite"
//!     inputPattern: "example\\.com/item/(\\d+)"
//!     outputPattern: "https://shop.test/p/$1"
//!     transformationRules:
//!       - type: ReplaceAll
//!         searchValue: "4"
//!         replaceValue: "9"
//!         target: 1
//! ```

pub mod config;
pub mod engine;
pub mod matcher;
pub mod store;
pub mod template;
pub mod transform;

pub use config::{Rule, RuleStorage, TransformationRule, TransformationType};
pub use engine::evaluate;
pub use matcher::{first_match, RuleMatch};
pub use store::{RuleDraft, RuleStore, StoreError};
