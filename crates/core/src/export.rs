//! One-way export of a document into the flat text config the external macro
//! engine consumes. The emitted text is never parsed back by this crate.

use std::io;
use std::path::{Path, PathBuf};

use rotationforge_templates::TemplateRegistry;
use thiserror::Error;

use crate::document::RotationDocument;
use crate::store::write_atomic;

/// Fixed trailer: run the rotation in a loop.
pub const REPEAT_DIRECTIVE: &str = "repeat=1";

/// Fixed trailer: release any held key and reset state when keys stop.
pub const END_KEYS_DIRECTIVE: &str =
    "endkeys=dbg % stopped|store % releaseTimer,0|!eq % key,0|(VAR % key)u|store % key,0";

/// Errors raised while writing the exported config.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to write macro config {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Renders the whole document into the engine's flat config text.
///
/// Layout, in order: the `[variables]` section (non-empty values only), two
/// lines per populated spell slot, one `[Makro {n}]` section per makro with a
/// line per non-blank key, then the fixed trailer directives. Exporting the
/// same document twice yields byte-identical text.
pub fn export_text(doc: &RotationDocument, registry: &TemplateRegistry) -> String {
    use std::fmt::Write;

    let spells = doc.spells.selected();
    let mut config = String::from("[variables]\n");

    let assignments: Vec<String> = doc
        .variables
        .iter()
        .filter(|(_, value)| !value.is_empty())
        .map(|(name, value)| format!("{name}={value}"))
        .collect();
    config.push_str(&assignments.join("\n"));
    config.push('\n');

    for (index, slot) in doc.spells.slots().iter().enumerate() {
        if !slot.is_populated() {
            continue;
        }
        let number = index + 1;
        let _ = writeln!(config, "spell{number}={}", slot.hotbar_key);
        let _ = writeln!(config, "slot{number}spell=chid{number},(VAR % {})", slot.spell_id);
    }

    for (index, makro) in doc.makros.iter().enumerate() {
        let _ = writeln!(config, "\n[Makro {}]", index + 1);
        for key in &makro.keys {
            let line = key.render(registry, &spells);
            if line.is_empty() {
                continue;
            }
            config.push_str(&line);
            config.push('\n');
        }
    }

    config.push_str(REPEAT_DIRECTIVE);
    config.push('\n');
    config.push_str(END_KEYS_DIRECTIVE);
    config.push('\n');
    config
}

/// Writes the exported config atomically to `path`.
pub fn write_config(
    doc: &RotationDocument,
    registry: &TemplateRegistry,
    path: impl AsRef<Path>,
) -> Result<(), ExportError> {
    let path = path.as_ref();
    let text = export_text(doc, registry);
    write_atomic(path, text.as_bytes()).map_err(|source| ExportError::Write {
        path: path.to_path_buf(),
        source,
    })
}
