//! Pure rendering of command instances against explicit catalog snapshots.
//!
//! Rendering never fails: editing-time problems surface as displayable
//! sentinel strings so the editor stays usable mid-edit.

use rotationforge_templates::{FormatError, TemplateRegistry};

use crate::binding::ParamValue;
use crate::command::CommandInstance;
use crate::spells::SelectedSpell;

/// Sentinel shown while a template still has unbound slots.
pub const INCOMPLETE_PARAMETERS: &str = "Incomplete parameters";

const PREVIEW_LIMIT: usize = 30;

/// Renders a command into the line emitted to the macro engine.
///
/// An unset command renders to the empty string. Passthrough templates return
/// their first parameter's literal text verbatim. A stale template key from an
/// old saved state renders as an `Error:` line instead of failing.
pub fn render(
    command: &CommandInstance,
    registry: &TemplateRegistry,
    spells: &[SelectedSpell],
) -> String {
    if !command.is_set() {
        return String::new();
    }
    let template = match registry.lookup(&command.template) {
        Ok(template) => template,
        Err(err) => return format!("Error: {err}"),
    };

    if template.passthrough {
        return match command.params.first() {
            Some(ParamValue::Value(text)) => text.clone(),
            _ => String::new(),
        };
    }

    let resolved: Vec<String> = command
        .params
        .iter()
        .zip(&template.params)
        .map(|(value, param)| value.resolve(param, spells))
        .collect();

    match template.format.substitute(&resolved) {
        Ok(line) => line,
        Err(FormatError::MissingValue { .. }) => INCOMPLETE_PARAMETERS.to_string(),
        Err(err) => format!("Error: {err}"),
    }
}

/// Short display string for list rows: truncated description, `" | "`,
/// truncated render output. Cosmetic only; never exported.
pub fn preview(
    command: &CommandInstance,
    registry: &TemplateRegistry,
    spells: &[SelectedSpell],
) -> String {
    if !command.is_set() {
        return String::new();
    }
    let description = registry
        .get(&command.template)
        .map(|template| template.description.as_str())
        .unwrap_or_default();
    format!(
        "{} | {}",
        truncate(description),
        truncate(&render(command, registry, spells))
    )
}

fn truncate(text: &str) -> String {
    let cut: String = text.chars().take(PREVIEW_LIMIT).collect();
    if text.chars().count() > PREVIEW_LIMIT {
        format!("{cut}...")
    } else {
        cut
    }
}
