//! Rules and ordered rule chains.

use std::fmt;
use std::sync::Arc;

use super::result::ValidationOutcome;
use super::value::Value;

/// Type alias for the closure behind a rule.
type RuleFn = dyn Fn(&Value) -> ValidationOutcome + Send + Sync;

/// A single validation rule.
///
/// Rules are pure: they are parametrized when constructed and hold no state
/// between calls. Cloning a rule is cheap and shares the underlying closure.
///
/// # Example
///
/// ```
/// use morms::validation::{Rule, Value};
///
/// let even = Rule::when_present(
///     "even",
///     |v| v.as_number().is_some_and(|n| n % 2.0 == 0.0),
///     "Must be even",
/// );
/// assert!(even.validate(&Value::from(4)).is_valid());
/// assert_eq!(even.validate(&Value::from(3)).message(), "Must be even");
/// assert!(even.validate(&Value::Absent).is_valid());
/// ```
#[derive(Clone)]
pub struct Rule {
    name: Arc<str>,
    check: Arc<RuleFn>,
}

impl Rule {
    /// Create a rule from a closure returning a full outcome.
    pub fn new<F>(name: impl Into<String>, f: F) -> Self
    where
        F: Fn(&Value) -> ValidationOutcome + Send + Sync + 'static,
    {
        Self {
            name: Arc::from(name.into()),
            check: Arc::new(f),
        }
    }

    /// Create a rule from a predicate and the message used when it fails.
    pub fn check<F>(name: impl Into<String>, predicate: F, message: impl Into<String>) -> Self
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        let message = message.into();
        Self::new(name, move |v| {
            if predicate(v) {
                ValidationOutcome::Valid
            } else {
                ValidationOutcome::invalid(message.clone())
            }
        })
    }

    /// Like [`Rule::check`], but absent values always pass.
    ///
    /// Emptiness is left to `required`, which callers compose explicitly.
    pub fn when_present<F>(
        name: impl Into<String>,
        predicate: F,
        message: impl Into<String>,
    ) -> Self
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        Self::check(name, move |v| v.is_absent() || predicate(v), message)
    }

    /// Name of the rule, used in debug output and logs.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Run the rule against a value.
    pub fn validate(&self, value: &Value) -> ValidationOutcome {
        (self.check)(value)
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Run `rules` in order and return the first failure.
///
/// Later rules are not evaluated once one fails. An empty slice, or one
/// where every rule passes, yields [`ValidationOutcome::Valid`].
pub fn evaluate(value: &Value, rules: &[Rule]) -> ValidationOutcome {
    for rule in rules {
        let outcome = rule.validate(value);
        if outcome.is_invalid() {
            log::trace!("rule '{}' rejected {:?}: {}", rule.name(), value, outcome.message());
            return outcome;
        }
    }
    ValidationOutcome::Valid
}

/// An ordered, short-circuiting sequence of rules.
#[derive(Debug, Clone, Default)]
pub struct RuleChain {
    rules: Vec<Rule>,
}

impl RuleChain {
    /// Create an empty chain.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Append a rule and return the chain.
    pub fn with(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Append a rule.
    pub fn push(&mut self, rule: Rule) {
        self.rules.push(rule);
    }

    /// Insert a rule in front of every existing rule.
    pub fn prepend(&mut self, rule: Rule) {
        self.rules.insert(0, rule);
    }

    /// Number of rules in the chain.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check if the chain has no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// The rules, in evaluation order.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Evaluate the chain against a value. See [`evaluate`].
    pub fn evaluate(&self, value: &Value) -> ValidationOutcome {
        evaluate(value, &self.rules)
    }
}

impl From<Vec<Rule>> for RuleChain {
    fn from(rules: Vec<Rule>) -> Self {
        Self { rules }
    }
}

impl FromIterator<Rule> for RuleChain {
    fn from_iter<I: IntoIterator<Item = Rule>>(iter: I) -> Self {
        Self {
            rules: iter.into_iter().collect(),
        }
    }
}

impl Extend<Rule> for RuleChain {
    fn extend<I: IntoIterator<Item = Rule>>(&mut self, iter: I) {
        self.rules.extend(iter);
    }
}

impl IntoIterator for RuleChain {
    type Item = Rule;
    type IntoIter = std::vec::IntoIter<Rule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.into_iter()
    }
}

impl<'a> IntoIterator for &'a RuleChain {
    type Item = &'a Rule;
    type IntoIter = std::slice::Iter<'a, Rule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}
