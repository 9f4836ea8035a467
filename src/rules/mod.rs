pub mod builtin;
pub mod rule;

pub use builtin::{builtin_rules, DEFAULT_TARGET};
pub use rule::{Rule, RuleKind, RuleSpec};

use crate::error::Result;

/// An ordered list of compiled rules. Order is kept exactly as given.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    /// Compile every spec, failing on the first invalid one
    pub fn compile(specs: &[RuleSpec]) -> Result<Self> {
        let rules = specs
            .iter()
            .map(RuleSpec::compile)
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { rules })
    }

    /// The built-in dashboard fixups
    pub fn builtin() -> Result<Self> {
        Self::compile(builtin_rules())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Rule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FixupError;

    #[test]
    fn test_compile_keeps_order() {
        let specs = vec![
            RuleSpec::literal("b", "x", "y"),
            RuleSpec::regex("a", "y+", "z"),
        ];
        let set = RuleSet::compile(&specs).unwrap();
        let names: Vec<&str> = set.iter().map(Rule::name).collect();
        assert_eq!(names, vec!["b", "a"]);
    }

    #[test]
    fn test_compile_stops_on_bad_rule() {
        let specs = vec![
            RuleSpec::literal("ok", "x", "y"),
            RuleSpec::regex("bad", "[", "z"),
        ];
        let err = RuleSet::compile(&specs).unwrap_err();
        assert!(matches!(err, FixupError::Regex { ref rule, .. } if rule == "bad"));
    }

    #[test]
    fn test_builtin_has_fifteen_rules() {
        let set = RuleSet::builtin().unwrap();
        assert_eq!(set.len(), 15);
        assert!(!set.is_empty());
    }
}
