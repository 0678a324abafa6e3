use serde::{Deserialize, Serialize};

/// Number of fixed spell slots.
pub const SPELL_SLOT_COUNT: usize = 10;

/// One of the ten fixed spell slots: the hotbar key it is mapped to, the
/// engine-side spell id, and the display name chosen from the spell catalog.
/// An empty name means the slot is not selected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpellSlot {
    #[serde(rename = "spell_entry", default)]
    pub hotbar_key: String,
    #[serde(rename = "spell_id_entry", default)]
    pub spell_id: String,
    #[serde(rename = "spell_var", default)]
    pub name: String,
}

impl SpellSlot {
    /// Default contents for the 1-based slot `number`: hotbar keys count up
    /// from key code 49 ('1'), spell ids are `spellId{n}` placeholders.
    pub fn default_for(number: usize) -> Self {
        Self {
            hotbar_key: (48 + number).to_string(),
            spell_id: format!("spellId{number}"),
            name: String::new(),
        }
    }

    /// A slot with every field cleared takes no part in the export.
    pub fn is_populated(&self) -> bool {
        !(self.hotbar_key.is_empty() && self.spell_id.is_empty() && self.name.is_empty())
    }
}

/// A selected spell as offered to Reference-mode slot-number parameters:
/// the display label (`"{slot}: {name}"`) and the spell id it resolves to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedSpell {
    pub label: String,
    pub spell_id: String,
}

/// The fixed ten-slot spell table. Serialized as a plain list; loading pads
/// short lists with slot defaults and drops entries past the tenth.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<SpellSlot>", into = "Vec<SpellSlot>")]
pub struct SpellTable {
    slots: Vec<SpellSlot>,
}

impl Default for SpellTable {
    fn default() -> Self {
        Self {
            slots: (1..=SPELL_SLOT_COUNT).map(SpellSlot::default_for).collect(),
        }
    }
}

impl From<Vec<SpellSlot>> for SpellTable {
    fn from(mut slots: Vec<SpellSlot>) -> Self {
        slots.truncate(SPELL_SLOT_COUNT);
        let missing_from = slots.len();
        slots.extend((missing_from + 1..=SPELL_SLOT_COUNT).map(SpellSlot::default_for));
        Self { slots }
    }
}

impl From<SpellTable> for Vec<SpellSlot> {
    fn from(table: SpellTable) -> Self {
        table.slots
    }
}

impl SpellTable {
    pub fn slots(&self) -> &[SpellSlot] {
        &self.slots
    }

    /// 0-based access for editing a slot in place.
    pub fn slot_mut(&mut self, index: usize) -> Option<&mut SpellSlot> {
        self.slots.get_mut(index)
    }

    /// The subsequence of slots with a chosen name, as `(label, spell id)`
    /// pairs. Labels use the 1-based slot number.
    pub fn selected(&self) -> Vec<SelectedSpell> {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, slot)| !slot.name.is_empty())
            .map(|(index, slot)| SelectedSpell {
                label: format!("{}: {}", index + 1, slot.name),
                spell_id: slot.spell_id.clone(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_table_has_ten_unselected_slots() {
        let table = SpellTable::default();
        assert_eq!(table.slots().len(), SPELL_SLOT_COUNT);
        assert_eq!(table.slots()[0].hotbar_key, "49");
        assert_eq!(table.slots()[9].spell_id, "spellId10");
        assert!(table.selected().is_empty());
    }

    #[test]
    fn selected_skips_unnamed_slots() {
        let mut table = SpellTable::default();
        table.slot_mut(2).unwrap().name = "Fireball".to_string();
        table.slot_mut(2).unwrap().spell_id = "77".to_string();
        table.slot_mut(6).unwrap().name = "Heal".to_string();

        let selected = table.selected();
        assert_eq!(selected.len(), 2);
        assert_eq!(selected[0].label, "3: Fireball");
        assert_eq!(selected[0].spell_id, "77");
        assert_eq!(selected[1].label, "7: Heal");
    }

    #[test]
    fn short_list_is_padded_on_load() {
        let table: SpellTable =
            serde_json::from_str(r#"[{"spell_entry":"90","spell_id_entry":"id","spell_var":"X"}]"#)
                .unwrap();
        assert_eq!(table.slots().len(), SPELL_SLOT_COUNT);
        assert_eq!(table.slots()[0].hotbar_key, "90");
        assert_eq!(table.slots()[1], SpellSlot::default_for(2));
    }

    #[test]
    fn long_list_is_truncated_on_load() {
        let entries: Vec<SpellSlot> = (1..=12).map(SpellSlot::default_for).collect();
        let json = serde_json::to_string(&entries).unwrap();
        let table: SpellTable = serde_json::from_str(&json).unwrap();
        assert_eq!(table.slots().len(), SPELL_SLOT_COUNT);
    }
}
