//! Command-template catalog for the rotation config editor.
//!
//! Templates pair a positional format string with named parameter slots and
//! display metadata. The built-in table mirrors the command set understood by
//! the external macro engine; formats are compiled and validated once when the
//! registry is constructed, never per render.

pub mod builtin;
pub mod format;
pub mod registry;
pub mod template;

pub use builtin::builtin;
pub use format::{CompiledFormat, FormatError, Segment};
pub use registry::{TemplateError, TemplateRegistry};
pub use template::{CommandTemplate, TemplateParam, CUSTOM_COMMAND_KEY, SLOT_NUMBER_PARAM};
