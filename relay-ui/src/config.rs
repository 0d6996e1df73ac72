use serde::{Deserialize, Serialize};

/// What `createNode` does when its id is already registered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicatePolicy {
    /// Fail with `DuplicateNode`, leaving the existing element alone
    #[default]
    Reject,
    /// Remove the existing element from the tree, then create the new one
    Replace,
}

/// What a batch does after one of its commands fails
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailurePolicy {
    /// Stop at the failing command; later commands are not applied
    #[default]
    Abort,
    /// Log the failure and keep going
    Continue,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ApplierConfig {
    pub duplicate_policy: DuplicatePolicy,
    pub failure_policy: FailurePolicy,
    /// Emit every received batch at `debug` level
    pub log_batches: bool,
}

impl Default for ApplierConfig {
    fn default() -> Self {
        Self {
            duplicate_policy: DuplicatePolicy::default(),
            failure_policy: FailurePolicy::default(),
            log_batches: true,
        }
    }
}

impl ApplierConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
