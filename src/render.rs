//! Terminal rendering of message bodies.

use std::fmt::{self, Write as _};
use std::io;

use nu_ansi_term::{Color, Style};
use serde_json::Value;

use crate::truncate::TruncationSpec;

const INDENT: &str = "  ";

/// Styles applied to each kind of JSON token when color is enabled.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub key: Style,
    pub string: Style,
    pub number: Style,
    pub boolean: Style,
    pub null: Style,
}

impl Default for Palette {
    fn default() -> Self {
        Palette {
            key: Color::White.normal(),
            string: Color::Green.normal(),
            number: Color::Cyan.normal(),
            boolean: Color::Yellow.normal(),
            null: Color::Magenta.normal(),
        }
    }
}

/// Pretty-prints message bodies, falling back to raw text.
#[derive(Debug, Clone)]
pub struct Renderer {
    palette: Option<Palette>,
    truncation: Option<TruncationSpec>,
}

impl Renderer {
    pub fn new(color: bool, truncation: Option<TruncationSpec>) -> Self {
        Renderer {
            palette: color.then(Palette::default),
            truncation,
        }
    }

    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = Some(palette);
        self
    }

    /// Writes the rendered `body` to `out`, followed by a newline.
    pub fn render<W>(&self, body: &str, out: &mut W) -> io::Result<()>
    where
        W: io::Write + ?Sized,
    {
        writeln!(out, "{}", self.format(body))
    }

    /// Formats `body` as indented JSON when it parses, otherwise returns it as is.
    ///
    /// Configured truncation is applied to the parsed value first, when the
    /// top-level value is an object. A failure while serializing falls back
    /// to the raw body.
    pub fn format(&self, body: &str) -> String {
        let Ok(mut value) = serde_json::from_str::<Value>(body) else {
            return body.to_string();
        };

        if let (Some(truncation), Value::Object(object)) = (&self.truncation, &mut value) {
            truncation.apply(object);
        }

        let formatted = match &self.palette {
            Some(palette) => colorize(&value, palette).ok(),
            None => serde_json::to_string_pretty(&value).ok(),
        };

        formatted.unwrap_or_else(|| body.to_string())
    }
}

/// Serializes `value` as two-space indented JSON with ANSI styling.
pub fn colorize(value: &Value, palette: &Palette) -> Result<String, fmt::Error> {
    let mut out = String::new();
    write_value(&mut out, value, palette, 0)?;
    Ok(out)
}

fn write_value(out: &mut String, value: &Value, palette: &Palette, depth: usize) -> fmt::Result {
    match value {
        Value::Null => write!(out, "{}", palette.null.paint("null")),
        Value::Bool(b) => write!(out, "{}", palette.boolean.paint(b.to_string())),
        Value::Number(n) => write!(out, "{}", palette.number.paint(n.to_string())),
        Value::String(s) => write!(out, "{}", palette.string.paint(quote(s)?)),
        Value::Array(items) => {
            if items.is_empty() {
                return out.write_str("[]");
            }

            out.write_str("[\n")?;
            for (i, item) in items.iter().enumerate() {
                write_indent(out, depth + 1)?;
                write_value(out, item, palette, depth + 1)?;
                if i + 1 < items.len() {
                    out.write_char(',')?;
                }
                out.write_char('\n')?;
            }
            write_indent(out, depth)?;
            out.write_char(']')
        }
        Value::Object(fields) => {
            if fields.is_empty() {
                return out.write_str("{}");
            }

            out.write_str("{\n")?;
            for (i, (key, field)) in fields.iter().enumerate() {
                write_indent(out, depth + 1)?;
                write!(out, "{}: ", palette.key.paint(quote(key)?))?;
                write_value(out, field, palette, depth + 1)?;
                if i + 1 < fields.len() {
                    out.write_char(',')?;
                }
                out.write_char('\n')?;
            }
            write_indent(out, depth)?;
            out.write_char('}')
        }
    }
}

fn write_indent(out: &mut String, depth: usize) -> fmt::Result {
    for _ in 0..depth {
        out.write_str(INDENT)?;
    }
    Ok(())
}

fn quote(s: &str) -> Result<String, fmt::Error> {
    serde_json::to_string(s).map_err(|_| fmt::Error)
}
