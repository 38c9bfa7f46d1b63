//! A minimal, ordered CSS document model.
//!
//! Rules render in insertion order with a fixed layout, so the same sheet
//! always produces byte-identical text.

use std::fmt::{self, Display};

#[derive(Debug, Clone, PartialEq)]
pub struct Declaration {
    pub property: &'static str,
    pub value: String,
    pub important: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CssRule {
    pub selector: String,
    pub declarations: Vec<Declaration>,
}

impl CssRule {
    pub fn new(selector: impl Into<String>) -> Self {
        Self {
            selector: selector.into(),
            declarations: Vec::new(),
        }
    }

    pub fn decl(mut self, property: &'static str, value: impl Display) -> Self {
        self.declarations.push(Declaration {
            property,
            value: value.to_string(),
            important: false,
        });
        self
    }

    /// Adds a declaration marked `!important`, overriding the screen theme.
    pub fn important(mut self, property: &'static str, value: impl Display) -> Self {
        self.declarations.push(Declaration {
            property,
            value: value.to_string(),
            important: true,
        });
        self
    }

    /// Adds `decl` only when `condition` holds.
    pub fn decl_if(self, condition: bool, property: &'static str, value: impl Display) -> Self {
        if condition {
            self.decl(property, value)
        } else {
            self
        }
    }

    /// Marks the element as non-splittable across printed pages.
    pub fn avoid_break_inside(self) -> Self {
        self.decl("break-inside", "avoid")
            .decl("page-break-inside", "avoid")
    }

    fn write_indented(&self, f: &mut fmt::Formatter<'_>, indent: &str) -> fmt::Result {
        writeln!(f, "{}{} {{", indent, self.selector)?;
        for d in &self.declarations {
            let bang = if d.important { " !important" } else { "" };
            writeln!(f, "{}    {}: {}{};", indent, d.property, d.value, bang)?;
        }
        writeln!(f, "{}}}", indent)
    }
}

#[derive(Debug, Clone, PartialEq)]
enum CssItem {
    Comment(String),
    Rule(CssRule),
    Media { query: String, rules: Vec<CssRule> },
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CssSheet {
    items: Vec<CssItem>,
}

impl CssSheet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn comment(&mut self, text: impl Into<String>) -> &mut Self {
        self.items.push(CssItem::Comment(text.into()));
        self
    }

    pub fn rule(&mut self, rule: CssRule) -> &mut Self {
        self.items.push(CssItem::Rule(rule));
        self
    }

    pub fn media(&mut self, query: impl Into<String>, rules: Vec<CssRule>) -> &mut Self {
        self.items.push(CssItem::Media {
            query: query.into(),
            rules,
        });
        self
    }

    /// Finds the first top-level rule with exactly this selector.
    pub fn find_rule(&self, selector: &str) -> Option<&CssRule> {
        self.items.iter().find_map(|item| match item {
            CssItem::Rule(rule) if rule.selector == selector => Some(rule),
            _ => None,
        })
    }
}

impl Display for CssSheet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            match item {
                CssItem::Comment(text) => writeln!(f, "/* {} */", text)?,
                CssItem::Rule(rule) => rule.write_indented(f, "")?,
                CssItem::Media { query, rules } => {
                    writeln!(f, "@media {} {{", query)?;
                    for rule in rules {
                        rule.write_indented(f, "    ")?;
                    }
                    writeln!(f, "}}")?;
                }
            }
        }
        Ok(())
    }
}
