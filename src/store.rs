//! Rule store: CRUD and persistence for the rule collection.
//!
//! The store owns rule lifecycle and id assignment; the engine only ever
//! consumes [`RuleStore::list`] output as its per-invocation snapshot.

use crate::config::{Rule, RuleStorage, TransformationRule};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;
use uuid::Uuid;

/// A rule as submitted for creation, before an id has been assigned.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleDraft {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub input_pattern: String,
    pub output_pattern: String,
    #[serde(default)]
    pub transformation_rules: Vec<TransformationRule>,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

fn default_true() -> bool {
    true
}

/// Rule collection with optional file persistence.
///
/// When constructed with [`RuleStore::load`], every mutation is written back
/// to the backing file (JSON or YAML by extension) before returning.
#[derive(Debug, Default)]
pub struct RuleStore {
    storage: RuleStorage,
    path: Option<PathBuf>,
}

impl RuleStore {
    /// Create an empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an in-memory store from an existing rule collection.
    pub fn from_storage(storage: RuleStorage) -> Self {
        Self {
            storage,
            path: None,
        }
    }

    /// Load a store from a JSON or YAML file, chosen by extension.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let content = std::fs::read_to_string(&path)?;
        let storage = if is_yaml(&path) {
            serde_yaml::from_str(&content)?
        } else {
            serde_json::from_str(&content)?
        };
        Ok(Self {
            storage,
            path: Some(path),
        })
    }

    /// Rules in evaluation order. This is the engine's snapshot.
    pub fn list(&self) -> &[Rule] {
        &self.storage.rules
    }

    /// Look up a rule by id.
    pub fn get(&self, id: &str) -> Option<&Rule> {
        self.storage.rules.iter().find(|r| r.id == id)
    }

    /// Append a new rule, assigning it a fresh id.
    pub fn create(&mut self, draft: RuleDraft) -> Result<Rule, StoreError> {
        let rule = Rule {
            id: Uuid::new_v4().to_string(),
            name: draft.name,
            description: draft.description,
            input_pattern: draft.input_pattern,
            output_pattern: draft.output_pattern,
            transformation_rules: draft.transformation_rules,
            is_active: draft.is_active,
        };
        let mut next = self.storage.clone();
        next.rules.push(rule.clone());
        self.commit(next)?;
        info!(rule = %rule.name, rule_id = %rule.id, "Created rule");
        Ok(rule)
    }

    /// Replace an existing rule in place, keyed by its id.
    pub fn update(&mut self, rule: Rule) -> Result<(), StoreError> {
        let mut next = self.storage.clone();
        let slot = next
            .rules
            .iter_mut()
            .find(|r| r.id == rule.id)
            .ok_or_else(|| StoreError::NotFound { id: rule.id.clone() })?;
        *slot = rule;
        self.commit(next)
    }

    /// Remove a rule by id.
    pub fn delete(&mut self, id: &str) -> Result<(), StoreError> {
        let mut next = self.storage.clone();
        let before = next.rules.len();
        next.rules.retain(|r| r.id != id);
        if next.rules.len() == before {
            return Err(StoreError::NotFound { id: id.to_string() });
        }
        self.commit(next)
    }

    /// Flip a rule's `is_active` flag.
    pub fn toggle_active(&mut self, id: &str) -> Result<bool, StoreError> {
        let mut next = self.storage.clone();
        let rule = next
            .rules
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| StoreError::NotFound { id: id.to_string() })?;
        rule.is_active = !rule.is_active;
        let active = rule.is_active;
        self.commit(next)?;
        Ok(active)
    }

    /// Persist the prospective collection, then commit it to memory.
    ///
    /// A persist failure leaves the in-memory collection untouched, keeping
    /// it consistent with the backing file.
    fn commit(&mut self, next: RuleStorage) -> Result<(), StoreError> {
        if let Some(path) = &self.path {
            let content = if is_yaml(path) {
                serde_yaml::to_string(&next)?
            } else {
                serde_json::to_string_pretty(&next)?
            };
            std::fs::write(path, content)?;
        }
        self.storage = next;
        Ok(())
    }
}

fn is_yaml(path: &Path) -> bool {
    path.extension().is_some_and(|e| e == "yaml" || e == "yml")
}

/// Rule store errors.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("No rule with id {id}")]
    NotFound { id: String },
}
