use thiserror::Error;

/// Pieces of a compiled format string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Literal(String),
    Slot,
}

/// A positional format string parsed into literal runs and `{}` slots.
///
/// Parsing happens once, when a template enters the registry; substitution is
/// a straight walk over the segments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledFormat {
    source: String,
    segments: Vec<Segment>,
    arity: usize,
}

/// Errors raised while compiling or substituting a format string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("unmatched '{{' at byte {0}")]
    UnmatchedOpen(usize),
    #[error("unmatched '}}' at byte {0}")]
    UnmatchedClose(usize),
    #[error("no value supplied for slot {index}")]
    MissingValue { index: usize },
}

impl CompiledFormat {
    /// Parses a format string. `{}` marks a slot, `{{` and `}}` escape a
    /// literal brace, and a lone brace is rejected.
    pub fn parse(input: &str) -> Result<Self, FormatError> {
        let mut segments = Vec::new();
        let mut buffer = String::new();
        let mut arity = 0;

        let mut chars = input.char_indices().peekable();
        while let Some((pos, ch)) = chars.next() {
            match ch {
                '{' => match chars.peek().map(|&(_, next)| next) {
                    Some('{') => {
                        buffer.push('{');
                        chars.next();
                    }
                    Some('}') => {
                        flush_literal(&mut buffer, &mut segments);
                        segments.push(Segment::Slot);
                        arity += 1;
                        chars.next();
                    }
                    _ => return Err(FormatError::UnmatchedOpen(pos)),
                },
                '}' => match chars.peek().map(|&(_, next)| next) {
                    Some('}') => {
                        buffer.push('}');
                        chars.next();
                    }
                    _ => return Err(FormatError::UnmatchedClose(pos)),
                },
                other => buffer.push(other),
            }
        }
        flush_literal(&mut buffer, &mut segments);

        Ok(Self {
            source: input.to_owned(),
            segments,
            arity,
        })
    }

    /// The format string as originally written.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Number of `{}` slots.
    pub fn arity(&self) -> usize {
        self.arity
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Substitutes values positionally into the slots. Surplus values are
    /// ignored; a shortfall reports the first slot left without a value.
    pub fn substitute(&self, values: &[String]) -> Result<String, FormatError> {
        let mut output = String::new();
        let mut next = 0;
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => output.push_str(text),
                Segment::Slot => {
                    let value = values
                        .get(next)
                        .ok_or(FormatError::MissingValue { index: next })?;
                    output.push_str(value);
                    next += 1;
                }
            }
        }
        Ok(output)
    }
}

fn flush_literal(buffer: &mut String, segments: &mut Vec<Segment>) {
    if !buffer.is_empty() {
        segments.push(Segment::Literal(std::mem::take(buffer)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(items: &[&str]) -> Vec<String> {
        items.iter().map(|item| item.to_string()).collect()
    }

    #[test]
    fn parse_counts_slots() {
        let format = CompiledFormat::parse("st % {},{}").unwrap();
        assert_eq!(format.arity(), 2);
        assert_eq!(
            format.segments(),
            &[
                Segment::Literal("st % ".into()),
                Segment::Slot,
                Segment::Literal(",".into()),
                Segment::Slot,
            ]
        );
    }

    #[test]
    fn substitute_in_order() {
        let format = CompiledFormat::parse("ch{}, {}").unwrap();
        let line = format.substitute(&values(&["1", "queueDelay"])).unwrap();
        assert_eq!(line, "ch1, queueDelay");
    }

    #[test]
    fn surplus_values_are_ignored() {
        let format = CompiledFormat::parse("s{}").unwrap();
        let line = format.substitute(&values(&["1000", "extra"])).unwrap();
        assert_eq!(line, "s1000");
    }

    #[test]
    fn shortfall_reports_first_empty_slot() {
        let format = CompiledFormat::parse("eq % {},{}").unwrap();
        let err = format.substitute(&values(&["mobCount"])).unwrap_err();
        assert_eq!(err, FormatError::MissingValue { index: 1 });
    }

    #[test]
    fn escaped_braces_stay_literal() {
        let format = CompiledFormat::parse("{{{}}}").unwrap();
        assert_eq!(format.arity(), 1);
        assert_eq!(format.substitute(&values(&["x"])).unwrap(), "{x}");
    }

    #[test]
    fn lone_brace_rejected() {
        assert_eq!(
            CompiledFormat::parse("oops}"),
            Err(FormatError::UnmatchedClose(4))
        );
        assert_eq!(
            CompiledFormat::parse("{oops"),
            Err(FormatError::UnmatchedOpen(0))
        );
    }

    #[test]
    fn no_slots_passes_through() {
        let format = CompiledFormat::parse("rku").unwrap();
        assert_eq!(format.arity(), 0);
        assert_eq!(format.substitute(&[]).unwrap(), "rku");
    }
}
