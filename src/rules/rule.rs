use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

use crate::error::{FixupError, Result};

/// How a rule locates the text it replaces
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleKind {
    /// Exact substring, replacement inserted verbatim
    #[default]
    Literal,
    /// Regular expression, replacement is a `$1` / `${name}` template
    Regex,
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RuleKind::Literal => write!(f, "literal"),
            RuleKind::Regex => write!(f, "regex"),
        }
    }
}

/// A rule as written in the built-in table or a config file
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RuleSpec {
    /// Short identifier used in reports and warnings
    pub name: String,
    #[serde(default)]
    pub kind: RuleKind,
    pub pattern: String,
    pub replacement: String,
}

impl RuleSpec {
    pub fn literal(
        name: impl Into<String>,
        pattern: impl Into<String>,
        replacement: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            kind: RuleKind::Literal,
            pattern: pattern.into(),
            replacement: replacement.into(),
        }
    }

    pub fn regex(
        name: impl Into<String>,
        pattern: impl Into<String>,
        replacement: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            kind: RuleKind::Regex,
            pattern: pattern.into(),
            replacement: replacement.into(),
        }
    }

    /// Validates the rule and builds its matcher
    pub fn compile(&self) -> Result<Rule> {
        if self.name.trim().is_empty() {
            return Err(FixupError::invalid_rule(
                "<unnamed>",
                "rule name must not be empty",
            ));
        }
        if self.pattern.is_empty() {
            return Err(FixupError::invalid_rule(
                self.name.clone(),
                "pattern must not be empty",
            ));
        }

        let matcher = match self.kind {
            RuleKind::Literal => Matcher::Literal(self.pattern.clone()),
            RuleKind::Regex => {
                let regex = Regex::new(&self.pattern).map_err(|source| FixupError::Regex {
                    rule: self.name.clone(),
                    source,
                })?;
                // An empty match would count as a hit on any buffer
                if regex.is_match("") {
                    return Err(FixupError::invalid_rule(
                        self.name.clone(),
                        "regex pattern must not match the empty string",
                    ));
                }
                Matcher::Regex(regex)
            }
        };

        Ok(Rule {
            name: self.name.clone(),
            matcher,
            replacement: self.replacement.clone(),
        })
    }
}

#[derive(Debug, Clone)]
enum Matcher {
    Literal(String),
    Regex(Regex),
}

/// A compiled rule, ready to run against a buffer
#[derive(Debug, Clone)]
pub struct Rule {
    name: String,
    matcher: Matcher,
    replacement: String,
}

impl Rule {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> RuleKind {
        match self.matcher {
            Matcher::Literal(_) => RuleKind::Literal,
            Matcher::Regex(_) => RuleKind::Regex,
        }
    }

    /// Replaces every occurrence in `buffer`.
    ///
    /// Returns the new buffer and the number of replaced occurrences. When
    /// nothing matches the buffer is returned as-is.
    pub fn apply(&self, buffer: &str) -> (String, usize) {
        let (output, count) = match &self.matcher {
            Matcher::Literal(pattern) => {
                let count = buffer.matches(pattern.as_str()).count();
                if count == 0 {
                    (buffer.to_string(), 0)
                } else {
                    (buffer.replace(pattern.as_str(), &self.replacement), count)
                }
            }
            Matcher::Regex(regex) => {
                let count = regex.find_iter(buffer).count();
                if count == 0 {
                    (buffer.to_string(), 0)
                } else {
                    let replaced = regex.replace_all(buffer, self.replacement.as_str());
                    (replaced.into_owned(), count)
                }
            }
        };

        debug!("Rule '{}' ({}) matched {} time(s)", self.name, self.kind(), count);
        (output, count)
    }
}
