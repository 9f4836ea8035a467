//! Applies a rule set to a file: read, substitute in order, write back.

use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::error::{FixupError, Result};
use crate::rules::{RuleKind, RuleSet};
use crate::utils::fs::{
    calculate_string_hash, create_backup, read_file_to_string, write_file_atomic,
};

/// How many times one rule matched
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleReport {
    pub name: String,
    pub kind: RuleKind,
    pub matches: usize,
}

/// Output of running a rule set over a buffer
#[derive(Debug, Clone)]
pub struct Fixed {
    pub content: String,
    pub rules: Vec<RuleReport>,
}

/// Names of rules that matched nothing
fn unmatched_names(reports: &[RuleReport]) -> Vec<String> {
    reports
        .iter()
        .filter(|r| r.matches == 0)
        .map(|r| r.name.clone())
        .collect()
}

impl Fixed {
    pub fn total_matches(&self) -> usize {
        self.rules.iter().map(|r| r.matches).sum()
    }
}

/// Apply every rule in order; rule N+1 sees the output of rule N
pub fn apply_rules(buffer: &str, rules: &RuleSet) -> Fixed {
    let mut content = buffer.to_string();
    let mut reports = Vec::with_capacity(rules.len());

    for rule in rules.iter() {
        let (next, matches) = rule.apply(&content);
        if matches == 0 {
            warn!("Rule '{}' matched nothing", rule.name());
        }
        content = next;
        reports.push(RuleReport {
            name: rule.name().to_string(),
            kind: rule.kind(),
            matches,
        });
    }

    Fixed {
        content,
        rules: reports,
    }
}

/// Options for [`apply_fixups_with`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FixupOptions {
    /// Compute the result without touching the file
    pub dry_run: bool,
    /// Copy the original next to the target before writing
    pub backup: bool,
    /// Refuse to write if any rule matched nothing
    pub strict: bool,
}

/// Result of a fixup run on one file
#[derive(Debug, Clone, Serialize)]
pub struct FixupReport {
    pub path: PathBuf,
    pub rules: Vec<RuleReport>,
    pub changed: bool,
    pub written: bool,
    pub hash_before: String,
    pub hash_after: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup: Option<PathBuf>,
    #[serde(skip)]
    pub before: String,
    #[serde(skip)]
    pub after: String,
}

impl FixupReport {
    /// Names of rules that matched nothing
    pub fn unmatched(&self) -> Vec<String> {
        unmatched_names(&self.rules)
    }

    pub fn total_matches(&self) -> usize {
        self.rules.iter().map(|r| r.matches).sum()
    }
}

/// Apply the built-in rules to `path` and write the result back
pub fn apply_fixups(path: impl AsRef<Path>) -> Result<FixupReport> {
    let rules = RuleSet::builtin()?;
    apply_fixups_with(path, &rules, &FixupOptions::default())
}

/// Apply `rules` to `path` according to `options`
pub fn apply_fixups_with(
    path: impl AsRef<Path>,
    rules: &RuleSet,
    options: &FixupOptions,
) -> Result<FixupReport> {
    let path = path.as_ref();
    debug!("Applying {} rule(s) to {}", rules.len(), path.display());

    let before = read_file_to_string(path)?;
    let fixed = apply_rules(&before, rules);

    let unmatched = unmatched_names(&fixed.rules);
    if options.strict && !unmatched.is_empty() {
        return Err(FixupError::UnmatchedRules { rules: unmatched });
    }

    let changed = fixed.content != before;
    let mut report = FixupReport {
        path: path.to_path_buf(),
        hash_before: calculate_string_hash(&before),
        hash_after: calculate_string_hash(&fixed.content),
        rules: fixed.rules,
        changed,
        written: false,
        backup: None,
        before,
        after: fixed.content,
    };

    if options.dry_run {
        info!(
            "Dry run: {} replacement(s) in {}, file left untouched",
            report.total_matches(),
            path.display()
        );
        return Ok(report);
    }

    if !changed {
        info!("No changes for {}", path.display());
        return Ok(report);
    }

    if options.backup {
        report.backup = Some(create_backup(path)?);
    }

    write_file_atomic(path, &report.after)?;
    report.written = true;

    info!(
        "Applied {} replacement(s) from {} rule(s) to {}",
        report.total_matches(),
        rules.len(),
        path.display()
    );
    Ok(report)
}
