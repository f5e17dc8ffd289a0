//! Custom property source backed by stylesheet text.
//!
//! Collects the custom properties declared on the document root so a tracker
//! can resolve `--breakpoint-*` values without a browser, e.g. from a
//! compiled Bootstrap stylesheet.

use indexmap::IndexMap;
use lightningcss::printer::PrinterOptions;
use lightningcss::properties::Property;
use lightningcss::properties::custom::TokenOrValue;
use lightningcss::rules::CssRule;
use lightningcss::rules::style::StyleRule;
use lightningcss::stylesheet::{ParserOptions, StyleSheet};
use lightningcss::traits::ToCss;
use tracing::debug;

use crate::error::{BreakpointError, BreakpointResult};

use super::BreakpointHost;

const ROOT_SELECTORS: [&str; 2] = [":root", "html"];

/// Host whose custom properties come from parsed CSS text.
///
/// Only top-level rules matching `:root` or `html` contribute, and later
/// declarations override earlier ones the way the cascade would for equal
/// specificity.
#[derive(Debug, Clone, PartialEq)]
pub struct StylesheetHost {
    width: u32,
    properties: IndexMap<String, String>,
}

impl StylesheetHost {
    pub fn parse(css: &str, width: u32) -> BreakpointResult<Self> {
        let stylesheet = StyleSheet::parse(css, ParserOptions::default())
            .map_err(|e| BreakpointError::Stylesheet(format!("{e:?}")))?;

        let mut properties = IndexMap::new();
        for rule in &stylesheet.rules.0 {
            if let CssRule::Style(style_rule) = rule {
                if is_root_rule(style_rule) {
                    collect_custom_properties(style_rule, &mut properties);
                }
            }
        }
        debug!(count = properties.len(), "collected root custom properties");

        Ok(Self { width, properties })
    }

    pub fn set_width(&mut self, width: u32) {
        self.width = width;
    }

    pub fn custom_property_names(&self) -> impl Iterator<Item = &str> {
        self.properties.keys().map(String::as_str)
    }
}

impl BreakpointHost for StylesheetHost {
    fn viewport_width(&self) -> u32 {
        self.width
    }

    fn custom_property(&self, name: &str) -> Option<String> {
        self.properties.get(name).cloned()
    }
}

fn is_root_rule(rule: &StyleRule) -> bool {
    let selectors = rule
        .selectors
        .to_css_string(PrinterOptions::default())
        .unwrap_or_default();
    selectors
        .split(',')
        .map(str::trim)
        .any(|selector| ROOT_SELECTORS.contains(&selector))
}

fn collect_custom_properties(rule: &StyleRule, properties: &mut IndexMap<String, String>) {
    let declarations = rule
        .declarations
        .declarations
        .iter()
        .chain(rule.declarations.important_declarations.iter());

    for declaration in declarations {
        let Property::Custom(custom) = declaration else {
            continue;
        };
        let mut value = String::new();
        for token_or_value in &custom.value.0 {
            let serialized = match token_or_value {
                TokenOrValue::Token(token) => token.to_css_string(PrinterOptions::default()),
                TokenOrValue::Length(length) => length.to_css_string(PrinterOptions::default()),
                _ => continue,
            };
            if let Ok(part) = serialized {
                value.push_str(&part);
            }
        }
        let value = value.trim();
        if !value.is_empty() {
            properties.insert(custom.name.as_ref().to_owned(), value.to_owned());
        }
    }
}
