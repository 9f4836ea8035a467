use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::engine::FixupOptions;
use crate::error::{FixupError, Result};
use crate::rules::{builtin_rules, RuleSet, RuleSpec, DEFAULT_TARGET};

/// A fixup run as loaded from a config file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixupConfig {
    /// File to rewrite
    #[serde(default = "default_target")]
    pub target: PathBuf,

    /// Copy the original next to the target before writing
    #[serde(default)]
    pub backup: bool,

    /// Fail without writing when a rule matches nothing
    #[serde(default)]
    pub strict: bool,

    /// Ordered rules, the built-in table when omitted
    #[serde(default = "default_rules")]
    pub rules: Vec<RuleSpec>,
}

fn default_target() -> PathBuf {
    PathBuf::from(DEFAULT_TARGET)
}

fn default_rules() -> Vec<RuleSpec> {
    builtin_rules().to_vec()
}

impl Default for FixupConfig {
    fn default() -> Self {
        Self {
            target: default_target(),
            backup: false,
            strict: false,
            rules: default_rules(),
        }
    }
}

impl FixupConfig {
    /// Compile the rule list
    pub fn rule_set(&self) -> Result<RuleSet> {
        RuleSet::compile(&self.rules)
    }

    /// Options implied by this config
    pub fn options(&self) -> FixupOptions {
        FixupOptions {
            dry_run: false,
            backup: self.backup,
            strict: self.strict,
        }
    }

    /// Serialize as TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| FixupError::config_error(e.to_string(), &self.target))
    }
}
