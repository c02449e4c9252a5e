//! Rule kinds and first-failure evaluation

use alloc::borrow::Cow;
use alloc::string::ToString;

use crate::email::validate_email;
use crate::error::ValidationError;
use crate::string::{validate_min_length, validate_required, GENERIC_SUBJECT};

/// A named check applied to a field's raw value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rule {
    /// Trimmed value must be non-empty
    Required { subject: Cow<'static, str> },
    /// Trimmed value must be present and look like an email address
    EmailFormat,
    /// Trimmed value must have at least `min` characters
    MinLength {
        subject: Cow<'static, str>,
        min: usize,
    },
}

impl Rule {
    pub fn required(subject: impl Into<Cow<'static, str>>) -> Self {
        Rule::Required {
            subject: subject.into(),
        }
    }

    pub fn min_length(subject: impl Into<Cow<'static, str>>, min: usize) -> Self {
        Rule::MinLength {
            subject: subject.into(),
            min,
        }
    }

    /// Parse a rule from its textual form
    ///
    /// # Examples
    /// ```
    /// use pagekit_validation::Rule;
    /// assert_eq!(Rule::parse("email"), Some(Rule::EmailFormat));
    /// assert_eq!(Rule::parse("required"), Some(Rule::required("This field")));
    /// assert_eq!(Rule::parse("required:Full name"), Some(Rule::required("Full name")));
    /// assert_eq!(Rule::parse("min-length:20"), Some(Rule::min_length("Message", 20)));
    /// assert_eq!(Rule::parse("min-length:abc"), None);
    /// ```
    pub fn parse(spec: &str) -> Option<Self> {
        let mut parts = spec.splitn(3, ':');
        let kind = parts.next()?.trim();

        match kind {
            "required" => {
                let subject = subject_or(parts.next(), GENERIC_SUBJECT);
                Some(Rule::required(subject.to_string()))
            }
            "email" => Some(Rule::EmailFormat),
            "min-length" => {
                let min = parts.next()?.trim().parse().ok()?;
                let subject = subject_or(parts.next(), "Message");
                Some(Rule::min_length(subject.to_string(), min))
            }
            _ => None,
        }
    }

    /// Run this single check against a raw value
    pub fn check(&self, value: &str) -> Result<(), ValidationError> {
        match self {
            Rule::Required { subject } => validate_required(value, subject.clone()),
            Rule::EmailFormat => validate_email(value),
            Rule::MinLength { subject, min } => validate_min_length(value, *min, subject.clone()),
        }
    }
}

/// A blank subject reads the same as a missing one
fn subject_or<'a>(part: Option<&'a str>, fallback: &'a str) -> &'a str {
    part.map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or(fallback)
}

/// Evaluate rules in order, stopping at the first failure
pub fn validate_rules(value: &str, rules: &[Rule]) -> Result<(), ValidationError> {
    rules.iter().try_for_each(|rule| rule.check(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use alloc::vec::Vec;
    use rstest::rstest;

    fn message_rules() -> Vec<Rule> {
        vec![Rule::required("Message"), Rule::min_length("Message", 20)]
    }

    #[rstest]
    #[case("", Err(ValidationError::missing("Message")))]
    #[case("    ", Err(ValidationError::missing("Message")))]
    #[case("short", Err(ValidationError::too_short("Message", 20)))]
    #[case("exactly nineteen ch", Err(ValidationError::too_short("Message", 20)))]
    #[case("exactly twenty chars", Ok(()))]
    #[case("This is a sufficiently long test message.", Ok(()))]
    fn test_message_rules(#[case] value: &str, #[case] expected: Result<(), ValidationError>) {
        assert_eq!(validate_rules(value, &message_rules()), expected);
    }

    #[rstest]
    #[case("", Err(ValidationError::missing("Email address")))]
    #[case("a@b", Err(ValidationError::MalformedEmail))]
    #[case("a@b.co", Ok(()))]
    fn test_email_rule(#[case] value: &str, #[case] expected: Result<(), ValidationError>) {
        assert_eq!(validate_rules(value, &[Rule::EmailFormat]), expected);
    }

    #[test]
    fn test_required_wins_over_later_rules() {
        let rules = vec![Rule::required("Full name"), Rule::min_length("Full name", 3)];
        assert_eq!(
            validate_rules("", &rules),
            Err(ValidationError::missing("Full name"))
        );
    }

    #[test]
    fn test_empty_rule_list_accepts_anything() {
        assert!(validate_rules("", &[]).is_ok());
    }

    #[rstest]
    #[case("required:", Rule::required(GENERIC_SUBJECT))]
    #[case("required:   ", Rule::required(GENERIC_SUBJECT))]
    #[case("min-length:5:", Rule::min_length("Message", 5))]
    #[case("min-length:5: Bio ", Rule::min_length("Bio", 5))]
    fn test_parse_blank_subject_falls_back(#[case] spec: &str, #[case] expected: Rule) {
        let rule = Rule::parse(spec).unwrap();
        assert_eq!(rule, expected);
        assert!(!rule.check("").unwrap_err().to_string().starts_with(' '));
    }

    #[test]
    fn test_parse_unknown_rule() {
        assert_eq!(Rule::parse("password:strong"), None);
        assert_eq!(Rule::parse("min-length"), None);
    }
}
