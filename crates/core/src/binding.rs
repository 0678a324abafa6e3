use rotationforge_templates::TemplateParam;
use serde::de::{Deserialize, Deserializer};
use serde::Serialize;

use crate::spells::SelectedSpell;

/// One bound parameter of a command instance: either a literal value typed by
/// the user or a reference to a named variable / spell slot. The two modes
/// cannot coexist.
///
/// Wire form is `{"type": "Value"|"Var", "value": "..."}`; older saved states
/// used a bare string, which deserializes as a literal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "value")]
pub enum ParamValue {
    Value(String),
    Var(String),
}

impl Default for ParamValue {
    fn default() -> Self {
        ParamValue::Value(String::new())
    }
}

impl ParamValue {
    pub fn literal(text: impl Into<String>) -> Self {
        ParamValue::Value(text.into())
    }

    pub fn reference(selection: impl Into<String>) -> Self {
        ParamValue::Var(selection.into())
    }

    pub fn is_reference(&self) -> bool {
        matches!(self, ParamValue::Var(_))
    }

    /// The stored text regardless of mode.
    pub fn text(&self) -> &str {
        match self {
            ParamValue::Value(text) | ParamValue::Var(text) => text,
        }
    }

    /// Resolves this binding into the substring injected at render time.
    ///
    /// Slot-number parameters resolve against the selected-spell labels; a
    /// selection no longer present degrades to the engine's `(VAR % )` token
    /// rather than failing the render. Other references wrap the selection in
    /// `(VAR % ...)`, or contribute nothing while still unselected.
    pub fn resolve(&self, param: &TemplateParam, spells: &[SelectedSpell]) -> String {
        match self {
            ParamValue::Value(text) => text.clone(),
            ParamValue::Var(selection) => {
                if param.is_slot_number() {
                    match spells.iter().find(|spell| spell.label == *selection) {
                        Some(spell) => format!("(VAR % {})", spell.spell_id),
                        None => "(VAR % )".to_string(),
                    }
                } else if selection.is_empty() {
                    String::new()
                } else {
                    format!("(VAR % {selection})")
                }
            }
        }
    }
}

impl<'de> Deserialize<'de> for ParamValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(serde::Deserialize)]
        enum Kind {
            Value,
            Var,
        }

        #[derive(serde::Deserialize)]
        #[serde(untagged)]
        enum Wire {
            Tagged {
                #[serde(rename = "type")]
                kind: Kind,
                #[serde(default)]
                value: String,
            },
            Legacy(String),
        }

        Ok(match Wire::deserialize(deserializer)? {
            Wire::Tagged {
                kind: Kind::Value,
                value,
            } => ParamValue::Value(value),
            Wire::Tagged {
                kind: Kind::Var,
                value,
            } => ParamValue::Var(value),
            Wire::Legacy(value) => ParamValue::Value(value),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spells() -> Vec<SelectedSpell> {
        vec![
            SelectedSpell {
                label: "3: Fireball".into(),
                spell_id: "77".into(),
            },
            SelectedSpell {
                label: "5: Frostbolt".into(),
                spell_id: "notAnId".into(),
            },
        ]
    }

    #[test]
    fn literal_resolves_verbatim() {
        let param = TemplateParam::new("Milliseconds");
        assert_eq!(
            ParamValue::literal("1000").resolve(&param, &spells()),
            "1000"
        );
        assert_eq!(ParamValue::literal("").resolve(&param, &spells()), "");
    }

    #[test]
    fn variable_reference_wraps_selection() {
        let param = TemplateParam::new("Delay Variable");
        assert_eq!(
            ParamValue::reference("queueDelay").resolve(&param, &spells()),
            "(VAR % queueDelay)"
        );
        assert_eq!(ParamValue::reference("").resolve(&param, &spells()), "");
    }

    #[test]
    fn slot_number_resolves_spell_id() {
        let param = TemplateParam::new("Slot Number");
        assert_eq!(
            ParamValue::reference("3: Fireball").resolve(&param, &spells()),
            "(VAR % 77)"
        );
    }

    #[test]
    fn stale_spell_reference_degrades() {
        let param = TemplateParam::new("Slot Number");
        assert_eq!(
            ParamValue::reference("9: Removed").resolve(&param, &spells()),
            "(VAR % )"
        );
    }

    #[test]
    fn wire_roundtrip() {
        let value = ParamValue::reference("mobCount");
        let json = serde_json::to_string(&value).unwrap();
        assert_eq!(json, r#"{"type":"Var","value":"mobCount"}"#);
        assert_eq!(serde_json::from_str::<ParamValue>(&json).unwrap(), value);
    }

    #[test]
    fn legacy_bare_string_is_a_literal() {
        let value: ParamValue = serde_json::from_str(r#""1000""#).unwrap();
        assert_eq!(value, ParamValue::literal("1000"));
    }
}
