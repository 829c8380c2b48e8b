//! Configuration types for analysis and rule generation

use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Controls which scanners run over a document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Include riskier items such as the information group
    pub include_risky: bool,
}

/// Names and descriptions of the generated YARA rules
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleConfig {
    pub loose_rule_name: String,
    pub loose_description: String,
    pub strict_rule_name: String,
    pub strict_description: String,
}

/// Top level configuration, loadable from JSON or YAML
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub analysis: AnalysisConfig,
    pub rules: RuleConfig,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self { include_risky: true }
    }
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self {
            loose_rule_name: "loose_rule".into(),
            loose_description: "RTF file matching known unique identifiers (higher chance of FP, adjust 'any of them' if required)".into(),
            strict_rule_name: "strict_rule".into(),
            strict_description: "RTF file matching known unique identifiers (lower chance of FP)".into(),
        }
    }
}

impl Config {
    /// Loads a configuration file, trying JSON first and then YAML
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("Failed to read config file {}: {}", path.display(), e)))?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(content)
            .or_else(|_| serde_yaml::from_str(content))
            .map_err(|e| Error::Config(format!("Config parsing error: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        for name in [&self.rules.loose_rule_name, &self.rules.strict_rule_name] {
            if !is_valid_identifier(name) {
                return Err(Error::Config(format!("Invalid rule name: {:?}", name)));
            }
        }
        Ok(())
    }
}

/// YARA identifiers: letters, digits and underscores, not starting with a digit
fn is_valid_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}
