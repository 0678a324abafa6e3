use std::collections::HashMap;

use thiserror::Error;

use crate::format::FormatError;
use crate::template::CommandTemplate;

/// Errors raised while building or querying a template registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    #[error("unknown command template: {0}")]
    UnknownTemplate(String),
    #[error("template {key:?} declares {params} parameter(s) but its format has {slots} slot(s)")]
    ArityMismatch {
        key: String,
        slots: usize,
        params: usize,
    },
    #[error(transparent)]
    Format(#[from] FormatError),
}

/// Insertion-ordered collection of command templates with by-key lookup.
///
/// Iteration order is the order templates were first inserted; re-inserting a
/// key replaces the record without moving it.
#[derive(Debug, Clone, Default)]
pub struct TemplateRegistry {
    templates: Vec<CommandTemplate>,
    index: HashMap<String, usize>,
}

impl TemplateRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates and inserts a template. Slot count must match the declared
    /// parameter count unless the template is a passthrough.
    pub fn insert(&mut self, template: CommandTemplate) -> Result<(), TemplateError> {
        if !template.passthrough && template.format.arity() != template.params.len() {
            return Err(TemplateError::ArityMismatch {
                key: template.key.clone(),
                slots: template.format.arity(),
                params: template.params.len(),
            });
        }
        match self.index.get(&template.key) {
            Some(&slot) => self.templates[slot] = template,
            None => {
                self.index.insert(template.key.clone(), self.templates.len());
                self.templates.push(template);
            }
        }
        Ok(())
    }

    pub fn lookup(&self, name: &str) -> Result<&CommandTemplate, TemplateError> {
        self.get(name)
            .ok_or_else(|| TemplateError::UnknownTemplate(name.to_owned()))
    }

    pub fn get(&self, name: &str) -> Option<&CommandTemplate> {
        self.index.get(name).map(|&slot| &self.templates[slot])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Template keys in registry order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.templates.iter().map(|template| template.key.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &CommandTemplate> {
        self.templates.iter()
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sleep_template() -> CommandTemplate {
        CommandTemplate::new("Sleep", "s{}", &["Milliseconds"], "Waits", "s1000").unwrap()
    }

    #[test]
    fn lookup_unknown_template() {
        let registry = TemplateRegistry::new();
        match registry.lookup("Sleep") {
            Err(TemplateError::UnknownTemplate(name)) => assert_eq!(name, "Sleep"),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn arity_mismatch_rejected() {
        let mut registry = TemplateRegistry::new();
        let template =
            CommandTemplate::new("Broken", "x{}", &["A", "B"], "desc", "example").unwrap();
        match registry.insert(template) {
            Err(TemplateError::ArityMismatch { key, slots, params }) => {
                assert_eq!(key, "Broken");
                assert_eq!(slots, 1);
                assert_eq!(params, 2);
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn passthrough_skips_arity_check() {
        let mut registry = TemplateRegistry::new();
        let template = CommandTemplate::new("Raw", "{}", &["Text", "Unused"], "desc", "ex")
            .unwrap()
            .into_passthrough();
        registry.insert(template).unwrap();
        assert!(registry.contains("Raw"));
    }

    #[test]
    fn reinsert_replaces_in_place() {
        let mut registry = TemplateRegistry::new();
        registry.insert(sleep_template()).unwrap();
        registry
            .insert(CommandTemplate::new("Go To", "gt{}", &["Line Number"], "Jumps", "gt16").unwrap())
            .unwrap();

        let replacement =
            CommandTemplate::new("Sleep", "s{}", &["Delay"], "Waits a while", "s500").unwrap();
        registry.insert(replacement).unwrap();

        assert_eq!(registry.names().collect::<Vec<_>>(), ["Sleep", "Go To"]);
        assert_eq!(registry.get("Sleep").unwrap().params[0].name, "Delay");
    }
}
