//! Regex-backed matcher: one named rule, one compiled expression.

use regex::{Regex, RegexBuilder};

use crate::error::GateError;
use crate::patterns::{Category, Matcher};

/// A named, categorized rule compiled from a regular expression.
///
/// Expressions are compiled case-insensitively with `.` matching newlines,
/// so a quoted instruction wrapped across lines is still seen as one unit.
/// `\b` uses Unicode word boundaries, which treat Hangul syllables as word
/// characters.
#[derive(Debug, Clone)]
pub struct RegexRule {
    name: String,
    category: Category,
    regex: Regex,
}

impl RegexRule {
    /// Compile `expression` into a rule.
    pub fn new(
        name: impl Into<String>,
        category: Category,
        expression: &str,
    ) -> Result<Self, GateError> {
        let name = name.into();
        if expression.trim().is_empty() {
            return Err(GateError::EmptyExpression(name));
        }
        let regex = RegexBuilder::new(expression)
            .case_insensitive(true)
            .dot_matches_new_line(true)
            .build()
            .map_err(|source| GateError::InvalidPattern {
                name: name.clone(),
                source,
            })?;
        Ok(Self {
            name,
            category,
            regex,
        })
    }

    /// The source expression.
    pub fn expression(&self) -> &str {
        self.regex.as_str()
    }
}

impl Matcher for RegexRule {
    fn name(&self) -> &str {
        &self.name
    }

    fn category(&self) -> Category {
        self.category
    }

    fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(expression: &str) -> RegexRule {
        RegexRule::new("test", Category::Custom, expression).unwrap()
    }

    #[test]
    fn matches_anywhere_in_text() {
        assert!(rule("arm").is_match("move the arm now"));
    }

    #[test]
    fn ignores_case() {
        assert!(rule("post").is_match("run POST"));
        assert!(rule("POST").is_match("run post"));
    }

    #[test]
    fn dot_spans_newlines() {
        assert!(rule("start.+end").is_match("start\nmiddle\nend"));
    }

    #[test]
    fn word_boundary_is_unicode_aware() {
        let r = rule(r"재부팅\b");
        assert!(r.is_match("지금 재부팅"));
        assert!(!r.is_match("재부팅하는 방법"));
    }

    #[test]
    fn keeps_name_and_category() {
        let r = RegexRule::new("arm_motion", Category::Custom, "arm").unwrap();
        assert_eq!(r.name(), "arm_motion");
        assert_eq!(r.category(), Category::Custom);
        assert_eq!(r.expression(), "arm");
    }

    #[test]
    fn invalid_expression_is_rejected() {
        let err = RegexRule::new("broken", Category::Custom, "(unclosed").unwrap_err();
        assert!(matches!(err, GateError::InvalidPattern { ref name, .. } if name == "broken"));
    }

    #[test]
    fn blank_expression_is_rejected() {
        let err = RegexRule::new("blank", Category::Custom, "  ").unwrap_err();
        assert!(matches!(err, GateError::EmptyExpression(ref name) if name == "blank"));
    }
}
