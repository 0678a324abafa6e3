use crate::format::{CompiledFormat, FormatError};

/// Parameter name that switches Reference-mode resolution from the variable
/// table to the spell table.
pub const SLOT_NUMBER_PARAM: &str = "slot number";

/// Registry key of the raw-passthrough escape hatch.
pub const CUSTOM_COMMAND_KEY: &str = "Custom Command";

/// A declared formal parameter slot of a command template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateParam {
    pub name: String,
}

impl TemplateParam {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Matching is case-insensitive; `"Slot Number"` in the table counts.
    pub fn is_slot_number(&self) -> bool {
        self.name.eq_ignore_ascii_case(SLOT_NUMBER_PARAM)
    }
}

/// An immutable command definition: compiled format, declared parameters, and
/// display metadata. Shared read-only by every command instance built from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandTemplate {
    pub key: String,
    pub format: CompiledFormat,
    pub params: Vec<TemplateParam>,
    pub description: String,
    pub example: String,
    /// Passthrough templates emit their first parameter verbatim and are
    /// never assembled through the format string.
    pub passthrough: bool,
}

impl CommandTemplate {
    pub fn new(
        key: impl Into<String>,
        format: &str,
        params: &[&str],
        description: impl Into<String>,
        example: impl Into<String>,
    ) -> Result<Self, FormatError> {
        Ok(Self {
            key: key.into(),
            format: CompiledFormat::parse(format)?,
            params: params.iter().map(|name| TemplateParam::new(*name)).collect(),
            description: description.into(),
            example: example.into(),
            passthrough: false,
        })
    }

    pub fn into_passthrough(mut self) -> Self {
        self.passthrough = true;
        self
    }
}
