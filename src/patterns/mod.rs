//! Pattern matchers: the linguistic signals that mark a response as a
//! command aimed at a device.
//!
//! A [`PatternSet`] is an append-only list of independent [`Matcher`]s
//! combined with OR semantics. Order carries no weight; the set only
//! answers whether *any* rule matched.

/// Built-in Korean rule pack.
pub mod korean;
/// Regex-backed matcher implementation.
pub mod rule;

pub use rule::RegexRule;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::GateError;

/// The signal a rule encodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// A device addressed, then told to issue a command or instruction.
    ExplicitCommand,
    /// A quoted utterance relayed to a device or named persona.
    QuotedDirective,
    /// Formal, manual-register imperative sentence endings.
    FormalImperative,
    /// High-frequency direct action verbs (power, press, open, reboot, reset).
    ActionVerb,
    /// A diagnostic, test or calibration step to be executed.
    DiagnosticExecution,
    /// User-supplied rule from configuration.
    Custom,
}

impl Category {
    pub fn as_str(self) -> &'static str {
        match self {
            Category::ExplicitCommand => "explicit_command",
            Category::QuotedDirective => "quoted_directive",
            Category::FormalImperative => "formal_imperative",
            Category::ActionVerb => "action_verb",
            Category::DiagnosticExecution => "diagnostic_execution",
            Category::Custom => "custom",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Language of the built-in rule pack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Locale {
    /// Korean, formal and imperative register (`"ko"`).
    #[default]
    #[serde(rename = "ko")]
    Korean,
}

/// One rule testing text for a single signal of command intent.
///
/// Implementations must be pure: no interior mutation, no dependence on
/// anything but `text`.
pub trait Matcher: Send + Sync {
    /// Stable, unique rule name.
    fn name(&self) -> &str;
    /// The signal this rule encodes.
    fn category(&self) -> Category;
    /// Whether the rule matches anywhere in `text`.
    fn is_match(&self, text: &str) -> bool;
}

/// Ordered, append-only collection of matchers.
#[derive(Default)]
pub struct PatternSet {
    rules: Vec<Box<dyn Matcher>>,
}

impl PatternSet {
    /// An empty set. Matches nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in rule pack for `locale`.
    pub fn builtin(locale: Locale) -> Self {
        let rules = match locale {
            Locale::Korean => korean::rules(),
        };
        let mut set = Self::new();
        for (name, category, expression) in rules {
            let rule = RegexRule::new(name, category, &expression)
                .expect("built-in rule expression must compile");
            set.rules.push(Box::new(rule));
        }
        set
    }

    /// Append a rule. Names are unique, so an existing rule can never be
    /// shadowed or replaced.
    pub fn push(&mut self, rule: Box<dyn Matcher>) -> Result<(), GateError> {
        if self.rules.iter().any(|r| r.name() == rule.name()) {
            return Err(GateError::DuplicateRule(rule.name().to_owned()));
        }
        self.rules.push(rule);
        Ok(())
    }

    /// True if any rule matches.
    pub fn is_match(&self, text: &str) -> bool {
        self.rules.iter().any(|r| r.is_match(text))
    }

    /// Every rule that matches `text`, in registration order.
    pub fn matching<'a>(
        &'a self,
        text: &'a str,
    ) -> impl Iterator<Item = &'a dyn Matcher> + 'a {
        self.iter().filter(move |r| r.is_match(text))
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn Matcher> {
        self.rules.iter().map(|r| r.as_ref())
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl fmt::Debug for PatternSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.rules.iter().map(|r| r.name()))
            .finish()
    }
}
