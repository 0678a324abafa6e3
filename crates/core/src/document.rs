use std::collections::BTreeMap;

use rotationforge_templates::TemplateRegistry;
use serde::{Deserialize, Serialize};

use crate::binding::ParamValue;
use crate::command::CommandInstance;
use crate::render::render;
use crate::spells::{SelectedSpell, SpellTable};

/// One macro step: an ordered list of command instances. Key numbering is
/// 1-based and derived from position, so removing a key renumbers the rest
/// for free.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Key {
    #[serde(default)]
    pub commands: Vec<CommandInstance>,
}

impl Key {
    pub fn new() -> Self {
        Self::default()
    }

    /// The key's exported line: every non-empty command render joined with a
    /// single `|`. Empty renders contribute nothing, so there are never
    /// doubled delimiters.
    pub fn render(&self, registry: &TemplateRegistry, spells: &[SelectedSpell]) -> String {
        let parts: Vec<String> = self
            .commands
            .iter()
            .map(|command| render(command, registry, spells))
            .filter(|line| !line.is_empty())
            .collect();
        parts.join("|")
    }
}

/// An ordered group of keys. The display name is derived from position and is
/// not persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Makro {
    #[serde(rename = "Keys", default)]
    pub keys: Vec<Key>,
}

impl Makro {
    pub fn new() -> Self {
        Self::default()
    }

    /// Display name for the makro at a 0-based `position`.
    pub fn display_name(position: usize) -> String {
        format!("Makro {}", position + 1)
    }
}

/// The root aggregate the editor works on: makros, the variables table, and
/// the ten-slot spell table. Serializes losslessly as JSON (the editor-state
/// round trip) and renders one-way into the flat engine config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RotationDocument {
    #[serde(rename = "MAKRO", default)]
    pub makros: Vec<Makro>,
    #[serde(default)]
    pub variables: BTreeMap<String, String>,
    #[serde(default)]
    pub spells: SpellTable,
}

impl Default for RotationDocument {
    fn default() -> Self {
        Self {
            makros: vec![Makro::new()],
            variables: BTreeMap::new(),
            spells: SpellTable::default(),
        }
    }
}

impl RotationDocument {
    /// A fresh document: one empty makro, no variables, default spell table.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_makro(&mut self) -> &mut Makro {
        self.makros.push(Makro::new());
        let index = self.makros.len() - 1;
        &mut self.makros[index]
    }

    pub fn remove_makro(&mut self, index: usize) -> Option<Makro> {
        if index < self.makros.len() {
            Some(self.makros.remove(index))
        } else {
            None
        }
    }

    pub fn set_variable(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.variables.insert(name.into(), value.into());
    }

    pub fn remove_variable(&mut self, name: &str) -> Option<String> {
        self.variables.remove(name)
    }

    pub fn variable_names(&self) -> impl Iterator<Item = &str> {
        self.variables.keys().map(String::as_str)
    }

    /// Clears every Reference binding whose selection no longer names an
    /// existing variable. Call after the variables table changes. Literal
    /// bindings and slot-number parameters (which reference spells, not
    /// variables) are never touched.
    pub fn prune_variable_references(&mut self, registry: &TemplateRegistry) {
        let variables = &self.variables;
        for makro in &mut self.makros {
            for key in &mut makro.keys {
                for command in &mut key.commands {
                    let Some(template) = registry.get(&command.template) else {
                        continue;
                    };
                    for (value, param) in command.params.iter_mut().zip(&template.params) {
                        if param.is_slot_number() {
                            continue;
                        }
                        if let ParamValue::Var(selection) = value {
                            if !selection.is_empty() && !variables.contains_key(selection.as_str())
                            {
                                selection.clear();
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rotationforge_templates::builtin;

    #[test]
    fn fresh_document_has_one_empty_makro() {
        let doc = RotationDocument::new();
        assert_eq!(doc.makros.len(), 1);
        assert!(doc.makros[0].keys.is_empty());
        assert!(doc.variables.is_empty());
    }

    #[test]
    fn makro_names_follow_position() {
        assert_eq!(Makro::display_name(0), "Makro 1");
        assert_eq!(Makro::display_name(2), "Makro 3");
    }

    #[test]
    fn key_render_skips_empty_commands() {
        let registry = builtin();
        let mut first = CommandInstance::with_template(registry, "Sleep").unwrap();
        first.set_param(0, ParamValue::literal("1000"));
        let middle = CommandInstance::new();
        let last = CommandInstance::with_template(registry, "Random Key Up").unwrap();

        let key = Key {
            commands: vec![first, middle, last],
        };
        assert_eq!(key.render(registry, &[]), "s1000|rku");
    }

    #[test]
    fn prune_clears_only_stale_references() {
        let registry = builtin();
        let mut doc = RotationDocument::new();
        doc.set_variable("mobCount", "5");
        doc.set_variable("queueDelay", "250");

        let mut command = CommandInstance::with_template(registry, "Equal To").unwrap();
        command.set_param(0, ParamValue::reference("mobCount"));
        command.set_param(1, ParamValue::reference("queueDelay"));
        doc.makros[0].keys.push(Key {
            commands: vec![command],
        });

        doc.remove_variable("mobCount");
        doc.prune_variable_references(registry);

        let params = &doc.makros[0].keys[0].commands[0].params;
        assert_eq!(params[0], ParamValue::reference(""));
        assert_eq!(params[1], ParamValue::reference("queueDelay"));
    }

    #[test]
    fn prune_leaves_literals_and_spell_slots_alone() {
        let registry = builtin();
        let mut doc = RotationDocument::new();

        let mut spell_cmd = CommandInstance::with_template(registry, "Check Spell Use").unwrap();
        spell_cmd.set_param(0, ParamValue::reference("3: Fireball"));
        let mut literal_cmd = CommandInstance::with_template(registry, "Sleep").unwrap();
        literal_cmd.set_param(0, ParamValue::literal("ghostVariable"));
        doc.makros[0].keys.push(Key {
            commands: vec![spell_cmd, literal_cmd],
        });

        doc.prune_variable_references(registry);

        let commands = &doc.makros[0].keys[0].commands;
        assert_eq!(commands[0].params[0], ParamValue::reference("3: Fireball"));
        assert_eq!(commands[1].params[0], ParamValue::literal("ghostVariable"));
    }
}
