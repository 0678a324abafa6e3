//! Rotation-document model for the macro config editor.
//!
//! A document is an ordered list of makros, each an ordered list of keys,
//! each an ordered list of command instances bound to templates from
//! `rotationforge_templates`. The crate renders command lines for preview and
//! export, persists the editor state as JSON, and emits the flat text config
//! consumed by the external macro engine.

pub mod binding;
pub mod command;
pub mod document;
pub mod export;
pub mod render;
pub mod spells;
pub mod store;

pub use binding::ParamValue;
pub use command::CommandInstance;
pub use document::{Key, Makro, RotationDocument};
pub use export::{export_text, write_config, ExportError, END_KEYS_DIRECTIVE, REPEAT_DIRECTIVE};
pub use render::{preview, render, INCOMPLETE_PARAMETERS};
pub use spells::{SelectedSpell, SpellSlot, SpellTable, SPELL_SLOT_COUNT};
pub use store::{StateError, StateStore};
