//! Template engine for report and rule generation
//!
//! Supports `{{name}}` placeholders and list sections written as
//! `{{#name}}...{{.}}...{{/name}}`, where the body is repeated once per item.

use std::collections::HashMap;

use super::ReportError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateValue {
    Text(String),
    List(Vec<String>),
}

#[derive(Debug, Clone, Default)]
pub struct TemplateContext {
    variables: HashMap<String, TemplateValue>,
}

impl TemplateContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_text(&mut self, key: &str, value: impl Into<String>) {
        self.variables
            .insert(key.to_string(), TemplateValue::Text(value.into()));
    }

    pub fn insert_list(&mut self, key: &str, values: Vec<String>) {
        self.variables
            .insert(key.to_string(), TemplateValue::List(values));
    }

    pub fn get(&self, key: &str) -> Option<&TemplateValue> {
        self.variables.get(key)
    }
}

/// Renders templates against a [`TemplateContext`]
pub struct TemplateEngine;

impl TemplateEngine {
    pub fn render(template: &str, context: &TemplateContext) -> Result<String, ReportError> {
        let mut output = String::with_capacity(template.len());
        let mut rest = template;

        while let Some(start) = rest.find("{{") {
            output.push_str(&rest[..start]);
            let after = &rest[start + 2..];
            let end = after
                .find("}}")
                .ok_or_else(|| ReportError::TemplateError("Unclosed placeholder".into()))?;
            let tag = after[..end].trim();
            rest = &after[end + 2..];

            if let Some(section) = tag.strip_prefix('#') {
                let close = format!("{{{{/{}}}}}", section);
                let body_end = rest.find(&close).ok_or_else(|| {
                    ReportError::TemplateError(format!("Section '{}' is not closed", section))
                })?;
                let body = &rest[..body_end];
                rest = &rest[body_end + close.len()..];

                match context.get(section) {
                    Some(TemplateValue::List(items)) => {
                        for item in items {
                            output.push_str(&body.replace("{{.}}", item));
                        }
                    }
                    Some(TemplateValue::Text(_)) => {
                        return Err(ReportError::TemplateError(format!(
                            "Section '{}' is not a list",
                            section
                        )))
                    }
                    None => {
                        return Err(ReportError::TemplateError(format!(
                            "Variable '{}' not found",
                            section
                        )))
                    }
                }
            } else {
                match context.get(tag) {
                    Some(TemplateValue::Text(value)) => output.push_str(value),
                    Some(TemplateValue::List(_)) => {
                        return Err(ReportError::TemplateError(format!(
                            "Variable '{}' is a list",
                            tag
                        )))
                    }
                    None => {
                        return Err(ReportError::TemplateError(format!(
                            "Variable '{}' not found",
                            tag
                        )))
                    }
                }
            }
        }

        output.push_str(rest);
        Ok(output)
    }
}
