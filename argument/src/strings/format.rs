//! Composite template substitution.
//!
//! Placeholders take the form `{index}` or `{index,alignment}`. A positive
//! alignment right-aligns the value in a field of that many characters, a
//! negative one left-aligns it. `{{` and `}}` produce literal braces.

use crate::errors::ArgumentError;
use crate::guard::Argument;
use std::fmt::Display;

/// Widest field an alignment may request.
const MAX_ALIGNMENT: usize = 1_000_000;

pub(super) fn format_with<'a>(
    template: impl Into<Option<&'a str>>,
    args: &[&dyn Display],
) -> Result<String, ArgumentError> {
    let template = Argument::require_not_null(template.into(), "template", None)?;

    let mut output = String::with_capacity(template.len());
    let mut chars = template.char_indices().peekable();

    while let Some((position, c)) = chars.next() {
        match c {
            '{' if chars.next_if(|&(_, next)| next == '{').is_some() => output.push('{'),
            '}' if chars.next_if(|&(_, next)| next == '}').is_some() => output.push('}'),
            '{' => {
                let mut spec = String::new();
                loop {
                    match chars.next() {
                        Some((_, '}')) => break,
                        Some((_, '{')) | None => {
                            return Err(malformed(position, "unclosed placeholder"));
                        }
                        Some((_, ch)) => spec.push(ch),
                    }
                }

                let placeholder =
                    Placeholder::parse(&spec).map_err(|reason| malformed(position, reason))?;
                let arg = args.get(placeholder.index).ok_or_else(|| {
                    malformed(
                        position,
                        &format!(
                            "index {} is out of range for {} argument(s)",
                            placeholder.index,
                            args.len()
                        ),
                    )
                })?;
                placeholder.render(*arg, &mut output);
            }
            '}' => return Err(malformed(position, "unmatched '}'")),
            _ => output.push(c),
        }
    }

    Ok(output)
}

struct Placeholder {
    index: usize,
    alignment: isize,
}

impl Placeholder {
    fn parse(spec: &str) -> Result<Self, &'static str> {
        if spec.contains(':') {
            return Err("format specifiers are not supported");
        }

        let (index, alignment) = match spec.split_once(',') {
            Some((index, alignment)) => (index, Some(alignment)),
            None => (spec, None),
        };

        let index = index
            .trim()
            .parse::<usize>()
            .map_err(|_| "placeholder index must be a non-negative integer")?;

        let alignment = match alignment {
            Some(alignment) => alignment
                .trim()
                .parse::<isize>()
                .map_err(|_| "alignment must be an integer")?,
            None => 0,
        };

        if alignment.unsigned_abs() >= MAX_ALIGNMENT {
            return Err("alignment is too large");
        }

        Ok(Self { index, alignment })
    }

    fn render(&self, arg: &dyn Display, output: &mut String) {
        let value = arg.to_string();
        let width = self.alignment.unsigned_abs();
        let padding = width.saturating_sub(value.chars().count());

        if self.alignment > 0 {
            output.extend(std::iter::repeat_n(' ', padding));
            output.push_str(&value);
        } else {
            output.push_str(&value);
            output.extend(std::iter::repeat_n(' ', padding));
        }
    }
}

fn malformed(position: usize, reason: &str) -> ArgumentError {
    log::debug!("Rejected format template at byte {position}: {reason}");
    ArgumentError::invalid_format("template", format!("{reason} at position {position}"))
}
