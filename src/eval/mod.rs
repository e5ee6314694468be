pub mod decision;

pub use decision::{Decision, Reason};

use crate::config::Config;
use crate::error::GateError;
use crate::patterns::{Category, Locale, Matcher, PatternSet, RegexRule};

/// Strip leading and trailing whitespace, counting the ASCII information
/// separators (U+001C..U+001F) as whitespace alongside `char::is_whitespace`.
pub fn trim_response(text: &str) -> &str {
    text.trim_matches(|c: char| c.is_whitespace() || ('\x1c'..='\x1f').contains(&c))
}

/// Classifies agent responses against a fixed [`PatternSet`].
///
/// Holds no mutable state; one engine can serve any number of threads.
#[derive(Debug)]
pub struct DecisionEngine {
    patterns: PatternSet,
}

impl Default for DecisionEngine {
    fn default() -> Self {
        Self::new(PatternSet::builtin(Locale::default()))
    }
}

impl DecisionEngine {
    pub fn new(patterns: PatternSet) -> Self {
        Self { patterns }
    }

    /// Build the engine from configuration: the locale's built-in pack,
    /// then any extra rules appended in config order.
    pub fn from_config(config: &Config) -> Result<Self, GateError> {
        let mut patterns = PatternSet::builtin(config.settings.locale);
        for extra in &config.patterns.extra {
            let rule = RegexRule::new(&extra.name, Category::Custom, &extra.expression)?;
            patterns.push(Box::new(rule))?;
        }
        log::debug!("pattern set ready: {patterns:?}");
        Ok(Self::new(patterns))
    }

    pub fn patterns(&self) -> &PatternSet {
        &self.patterns
    }

    /// Evaluate an agent response. Absent input is treated as empty.
    pub fn evaluate(&self, text: Option<&str>) -> Decision {
        let text = trim_response(text.unwrap_or_default());
        if text.is_empty() {
            return Decision::empty_response();
        }

        if log::log_enabled!(log::Level::Debug) {
            let names: Vec<&str> = self.patterns.matching(text).map(|r| r.name()).collect();
            log::debug!("matched rules: {names:?}");
        }

        if self.patterns.is_match(text) {
            Decision::approval_required(text)
        } else {
            Decision::no_command()
        }
    }

    /// Rules that match the trimmed `text`. Does not affect the decision.
    pub fn explain<'a>(&'a self, text: &'a str) -> Vec<&'a dyn Matcher> {
        self.patterns.matching(trim_response(text)).collect()
    }
}
