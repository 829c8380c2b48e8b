mod fixtures;

use fixtures::TestFixtures;
use rtfsig::{generate_rules, generate_yara_rule, AnalysisConfig, RtfAnalyzer, RuleConfig, VERSION};

#[test]
fn test_yara() {
    let rule = generate_yara_rule("test_rule", "This is a test rule", ["foo", "bar"]).unwrap();

    assert!(rule.contains("rule test_rule {"));
    assert!(rule.contains("description = \"This is a test rule\""));
    assert!(rule.contains(&format!("generated_by = \"rtfsig version {}\"", VERSION)));
    assert!(rule.contains("$ = \"foo\" ascii"));
    assert!(rule.contains("$ = \"bar\" ascii"));
    assert!(rule.contains("uint32be(0) == 0x7b5c7274 and any of them"));
    assert_eq!(rule.matches('{').count(), rule.matches('}').count());
}

#[test]
fn test_rules_from_document() {
    let findings = RtfAnalyzer::from_bytes(TestFixtures::BLIPTAG, &AnalysisConfig::default())
        .unwrap()
        .into_findings();
    let rules = generate_rules(&findings, &RuleConfig::default()).unwrap();

    assert_eq!(rules.len(), 2);
    assert!(rules[0].starts_with("\nrule loose_rule {"));
    assert!(rules[0].contains("$ = \"bliptag-1234567890\" ascii"));
    assert!(rules[0].contains("$ = \"0011223344556677889900aabbccddeeff\" ascii"));
    assert!(rules[1].starts_with("\nrule strict_rule {"));
    assert!(rules[1].contains("$ = \"blipuid 0011223344556677889900aabbccddeeff\" ascii"));
}

#[test]
fn test_control_words_are_escaped() {
    let findings = RtfAnalyzer::from_bytes(TestFixtures::PICTURE, &AnalysisConfig::default())
        .unwrap()
        .into_findings();
    let rules = generate_rules(&findings, &RuleConfig::default()).unwrap();

    assert_eq!(rules.len(), 1);
    assert!(rules[0].contains(r#"$ = "\\picw10\\pich10\\picwgoal10\\pichgoal10" ascii"#));
}

#[test]
fn test_custom_rule_names() {
    let findings = RtfAnalyzer::from_bytes(TestFixtures::REVISION_TABLE, &AnalysisConfig::default())
        .unwrap()
        .into_findings();
    let config = RuleConfig {
        loose_rule_name: "apt_loose".into(),
        strict_rule_name: "apt_strict".into(),
        ..RuleConfig::default()
    };
    let rules = generate_rules(&findings, &config).unwrap();

    assert!(rules[0].contains("rule apt_loose {"));
    assert!(rules[1].contains("rule apt_strict {"));
    assert!(rules[1].contains(r#"$ = "\\rsid1234\\rsid5678" ascii"#));
}

#[test]
fn test_nothing_to_signature() {
    let findings = RtfAnalyzer::from_bytes(TestFixtures::MINIMAL, &AnalysisConfig::default())
        .unwrap()
        .into_findings();
    assert!(generate_rules(&findings, &RuleConfig::default()).unwrap().is_empty());
}
