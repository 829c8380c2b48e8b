//! YARA rule generation
//!
//! Each rule lists the extracted strings as ASCII literals and only fires on
//! files that start with the RTF magic `{\rt`.

use tracing::debug;

use super::{ReportError, TemplateContext, TemplateEngine};
use crate::analyzer::Findings;
use crate::config::RuleConfig;
use crate::VERSION;

pub const RULE_TEMPLATE: &str = "
rule {{rule_name}} {
  meta:
    description = \"{{description}}\"
    generated_by = \"rtfsig version {{version}}\"

  strings:
{{#strings}}    $ = \"{{.}}\" ascii
{{/strings}}
  condition:
    uint32be(0) == 0x7b5c7274 and any of them
}

";

/// Escapes backslashes and double quotes for a YARA text string
pub fn escape_yara_string(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Renders a single rule matching any of `strings`
pub fn generate_yara_rule<I, S>(name: &str, description: &str, strings: I) -> Result<String, ReportError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let safe_strings: Vec<String> = strings
        .into_iter()
        .map(|s| escape_yara_string(s.as_ref()))
        .collect();
    if safe_strings.is_empty() {
        return Err(ReportError::EmptyRule(name.to_string()));
    }

    let mut context = TemplateContext::new();
    context.insert_text("rule_name", name);
    context.insert_text("description", escape_yara_string(description));
    context.insert_text("version", VERSION);
    context.insert_list("strings", safe_strings);

    TemplateEngine::render(RULE_TEMPLATE, &context)
}

/// Builds the loose and strict rules for whichever string sets are non-empty
pub fn generate_rules(findings: &Findings, config: &RuleConfig) -> Result<Vec<String>, ReportError> {
    let mut rules = Vec::new();

    if !findings.loose_strings.is_empty() {
        debug!("Generating rule {}", config.loose_rule_name);
        rules.push(generate_yara_rule(
            &config.loose_rule_name,
            &config.loose_description,
            &findings.loose_strings,
        )?);
    }

    if !findings.strict_strings.is_empty() {
        debug!("Generating rule {}", config.strict_rule_name);
        rules.push(generate_yara_rule(
            &config.strict_rule_name,
            &config.strict_description,
            &findings.strict_strings,
        )?);
    }

    Ok(rules)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_layout() {
        let rule = generate_yara_rule("test_rule", "This is a test rule", ["foo", "bar"]).unwrap();
        let expected = format!(
            "\nrule test_rule {{\n  meta:\n    description = \"This is a test rule\"\n    generated_by = \"rtfsig version {}\"\n\n  strings:\n    $ = \"foo\" ascii\n    $ = \"bar\" ascii\n\n  condition:\n    uint32be(0) == 0x7b5c7274 and any of them\n}}\n\n",
            VERSION
        );
        assert_eq!(rule, expected);
    }

    #[test]
    fn test_escaping() {
        assert_eq!(escape_yara_string(r#"\picw10"x"#), r#"\\picw10\"x"#);

        let rule = generate_yara_rule("r", "a \"quoted\" rule", [r"{\author edeca}"]).unwrap();
        assert!(rule.contains(r#"$ = "{\\author edeca}" ascii"#));
        assert!(rule.contains(r#"description = "a \"quoted\" rule""#));
    }

    #[test]
    fn test_empty_rule_is_rejected() {
        let strings: [&str; 0] = [];
        assert!(matches!(
            generate_yara_rule("empty", "nothing", strings),
            Err(ReportError::EmptyRule(_))
        ));
    }

    #[test]
    fn test_rules_follow_findings() {
        let mut findings = Findings::new();
        assert!(generate_rules(&findings, &RuleConfig::default()).unwrap().is_empty());

        findings.loose_strings.insert("bliptag-1".into());
        let rules = generate_rules(&findings, &RuleConfig::default()).unwrap();
        assert_eq!(rules.len(), 1);
        assert!(rules[0].contains("rule loose_rule {"));

        findings.strict_strings.insert("blipuid 00ff".into());
        let rules = generate_rules(&findings, &RuleConfig::default()).unwrap();
        assert_eq!(rules.len(), 2);
        assert!(rules[1].contains("rule strict_rule {"));
    }
}
