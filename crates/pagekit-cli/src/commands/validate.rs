use anyhow::Result;
use colored::Colorize;
use pagekit_validation::{validate_rules, Rule};

/// Returns whether the value passed every rule
pub fn execute(value: &str, rule_specs: &[String]) -> Result<bool> {
    let rules = parse_rules(rule_specs)?;

    match validate_rules(value, &rules) {
        Ok(()) => {
            println!("{} {}", "✓".green(), "valid".green().bold());
            Ok(true)
        }
        Err(err) => {
            println!("{} {}", "✗".red(), err.to_string().red());
            Ok(false)
        }
    }
}

fn parse_rules(specs: &[String]) -> Result<Vec<Rule>> {
    specs
        .iter()
        .map(|spec| {
            Rule::parse(spec).ok_or_else(|| {
                anyhow::anyhow!(
                    "Unknown rule '{}'. Expected required[:subject], email, or min-length:N[:subject]",
                    spec
                )
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rules_keeps_order() {
        let rules = parse_rules(&["required:Message".to_string(), "min-length:20".to_string()])
            .unwrap();
        assert_eq!(
            rules,
            vec![Rule::required("Message"), Rule::min_length("Message", 20)]
        );
    }

    #[test]
    fn test_unknown_rule_is_an_error() {
        let err = parse_rules(&["uppercase".to_string()]).unwrap_err();
        assert!(err.to_string().contains("uppercase"));
    }

    #[test]
    fn test_execute_reports_result() {
        assert!(execute("jane@example.com", &["email".to_string()]).unwrap());
        assert!(!execute("jane@", &["email".to_string()]).unwrap());
    }
}
