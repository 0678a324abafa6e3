use rotationforge_templates::{TemplateError, TemplateRegistry};
use serde::{Deserialize, Serialize};

use crate::binding::ParamValue;

/// A chosen template plus one bound value per declared parameter.
///
/// An empty template key means the command is still unset and renders to
/// nothing. Choosing a different template always rebuilds the bindings from
/// scratch; values are never migrated between templates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandInstance {
    #[serde(rename = "command_type", default)]
    pub template: String,
    #[serde(rename = "parameters", default)]
    pub params: Vec<ParamValue>,
}

impl CommandInstance {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a command already bound to `key`, with every parameter an empty
    /// literal.
    pub fn with_template(registry: &TemplateRegistry, key: &str) -> Result<Self, TemplateError> {
        let mut command = Self::new();
        command.set_template(registry, key)?;
        Ok(command)
    }

    pub fn is_set(&self) -> bool {
        !self.template.is_empty()
    }

    /// Switches this command to another template, discarding all current
    /// bindings.
    pub fn set_template(
        &mut self,
        registry: &TemplateRegistry,
        key: &str,
    ) -> Result<(), TemplateError> {
        let template = registry.lookup(key)?;
        self.template = template.key.clone();
        self.params = template
            .params
            .iter()
            .map(|_| ParamValue::default())
            .collect();
        Ok(())
    }

    pub fn clear_template(&mut self) {
        self.template.clear();
        self.params.clear();
    }

    /// Replaces the binding at `index`; returns false when out of range.
    pub fn set_param(&mut self, index: usize, value: ParamValue) -> bool {
        match self.params.get_mut(index) {
            Some(slot) => {
                *slot = value;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rotationforge_templates::builtin;

    #[test]
    fn with_template_binds_empty_literals() {
        let command = CommandInstance::with_template(builtin(), "Set Timer").unwrap();
        assert_eq!(command.template, "Set Timer");
        assert_eq!(command.params, vec![ParamValue::default(); 2]);
    }

    #[test]
    fn switching_template_rebuilds_bindings() {
        let mut command = CommandInstance::with_template(builtin(), "Set Timer").unwrap();
        command.set_param(0, ParamValue::literal("releaseTimer"));
        command.set_param(1, ParamValue::literal("5000"));

        command.set_template(builtin(), "Sleep").unwrap();
        assert_eq!(command.params, vec![ParamValue::default()]);
    }

    #[test]
    fn unknown_template_is_rejected() {
        let mut command = CommandInstance::new();
        assert!(matches!(
            command.set_template(builtin(), "Not A Command"),
            Err(TemplateError::UnknownTemplate(_))
        ));
        assert!(!command.is_set());
    }

    #[test]
    fn set_param_bounds() {
        let mut command = CommandInstance::with_template(builtin(), "Sleep").unwrap();
        assert!(command.set_param(0, ParamValue::literal("250")));
        assert!(!command.set_param(1, ParamValue::literal("oops")));
    }

    #[test]
    fn clear_template_empties_both_fields() {
        let mut command = CommandInstance::with_template(builtin(), "Sleep").unwrap();
        command.clear_template();
        assert!(!command.is_set());
        assert!(command.params.is_empty());
    }
}
