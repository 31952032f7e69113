//! Config file sources.
//!
//! Two formats are accepted, chosen by file extension:
//!
//! ```toml
//! # ui.toml
//! [ui]
//! title = "Acme Kafka"
//!
//! [ui.user-menu]
//! enabled = true
//! account-url = "https://sso.acme/account"
//!
//! [[ui.custom-menu-items]]
//! label = "Grafana"
//! url = "https://grafana.acme"
//! ```
//!
//! ```text
//! # ui.properties
//! ui.title=Acme Kafka
//! ui.user-menu.enabled=true
//! ui.custom-menu-items[0].label=Grafana
//! ```
//!
//! TOML tables are flattened into dotted keys and arrays into `[i]` indices,
//! so both files above produce the same property names.  TOML scalars keep
//! their type; properties values are always text.
//!
//! # Properties syntax
//!
//! The Java `.properties` conventions are followed, with one restriction:
//! the key must be separated from the value by `=` or `:` (a bare
//! whitespace separator is rejected as a malformed line).
//!
//! - `#` and `!` start comment lines; blank lines are skipped.
//! - A line ending in an odd number of `\` continues on the next line, whose
//!   leading whitespace is dropped.
//! - Whitespace around the key and before the value is dropped; trailing
//!   whitespace in the value is kept.
//! - Escapes: `\t`, `\n`, `\r`, `\f`, `\uXXXX` (surrogate pairs as two
//!   escapes), and `\` before any other character stands for that character
//!   (`\=`, `\:`, `\ `, `\\`).

use std::path::Path;

use kui_core::{PropertySource, PropertyValue};
use toml::{Table, Value};
use tracing::debug;

use super::error::SourceError;

/// Supported config file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Toml,
    Properties,
}

impl FileFormat {
    /// Picks the format from the file extension (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::UnsupportedFormat`] for any other extension.
    pub fn from_path(path: &Path) -> Result<Self, SourceError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("toml") => Ok(FileFormat::Toml),
            Some("properties") => Ok(FileFormat::Properties),
            _ => Err(SourceError::UnsupportedFormat(path.to_path_buf())),
        }
    }
}

/// Reads `path` and turns it into a property source named `file <path>`.
///
/// # Errors
///
/// Returns [`SourceError::UnsupportedFormat`], [`SourceError::Io`],
/// [`SourceError::Toml`] or [`SourceError::MalformedLine`].
pub fn load_file_source(path: &Path) -> Result<PropertySource, SourceError> {
    let format = FileFormat::from_path(path)?;
    let content = std::fs::read_to_string(path).map_err(|source| SourceError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let name = format!("file {}", path.display());

    match format {
        FileFormat::Toml => toml_source(name, &content),
        FileFormat::Properties => properties_source(name, &content),
    }
}

/// Parses TOML text and flattens it into a property source.
///
/// # Errors
///
/// Returns [`SourceError::Toml`] if the text is not valid TOML.
pub fn toml_source(name: impl Into<String>, content: &str) -> Result<PropertySource, SourceError> {
    let table: Table = content.parse()?;
    let mut source = PropertySource::new(name);
    flatten_table("", &table, &mut source);
    debug!("flattened {} properties from {}", source.len(), source.name());
    Ok(source)
}

fn flatten_table(prefix: &str, table: &Table, source: &mut PropertySource) {
    for (key, value) in table {
        let path = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{prefix}.{key}")
        };
        flatten_value(&path, value, source);
    }
}

fn flatten_value(path: &str, value: &Value, source: &mut PropertySource) {
    match value {
        Value::String(s) => source.insert(path, s.as_str()),
        Value::Integer(i) => source.insert(path, *i),
        Value::Float(f) => source.insert(path, *f),
        Value::Boolean(b) => source.insert(path, *b),
        Value::Datetime(d) => source.insert(path, PropertyValue::Text(d.to_string())),
        Value::Array(items) => {
            for (i, item) in items.iter().enumerate() {
                flatten_value(&format!("{path}[{i}]"), item, source);
            }
        }
        Value::Table(table) => flatten_table(path, table, source),
    }
}

/// Parses `.properties` text into a property source.
///
/// See the module docs for the accepted syntax.  The first unescaped `=` or
/// `:` of each logical line separates key from value.
///
/// # Errors
///
/// Returns [`SourceError::MalformedLine`] (1-based number of the line the
/// entry starts on) for an entry without a separator, with an empty key, or
/// with a malformed `\uXXXX` escape.
pub fn properties_source(
    name: impl Into<String>,
    content: &str,
) -> Result<PropertySource, SourceError> {
    let mut source = PropertySource::new(name);
    let mut lines = content.lines().enumerate();

    while let Some((index, raw)) = lines.next() {
        let mut line = raw.trim_start().to_string();
        if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
            continue;
        }
        while ends_with_continuation(&line) {
            line.pop();
            match lines.next() {
                Some((_, next)) => line.push_str(next.trim_start()),
                None => break,
            }
        }

        let malformed = || SourceError::MalformedLine {
            origin: source.name().to_string(),
            line: index + 1,
        };
        let sep = find_separator(&line).ok_or_else(malformed)?;
        let key = unescape(line[..sep].trim()).ok_or_else(malformed)?;
        if key.is_empty() {
            return Err(malformed());
        }
        let value = unescape(line[sep + 1..].trim_start()).ok_or_else(malformed)?;
        source.insert(key, value);
    }

    Ok(source)
}

/// An odd number of trailing backslashes marks a continuation.
fn ends_with_continuation(line: &str) -> bool {
    line.chars().rev().take_while(|&c| c == '\\').count() % 2 == 1
}

/// Byte offset of the first `=` or `:` not preceded by an escaping `\`.
fn find_separator(line: &str) -> Option<usize> {
    let mut escaped = false;
    for (i, c) in line.char_indices() {
        match c {
            _ if escaped => escaped = false,
            '\\' => escaped = true,
            '=' | ':' => return Some(i),
            _ => {}
        }
    }
    None
}

/// Resolves backslash escapes.  `None` for a malformed `\uXXXX`.
fn unescape(raw: &str) -> Option<String> {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('t') => out.push('\t'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('f') => out.push('\u{000C}'),
            Some('u') => {
                let unit = hex_unit(&mut chars)?;
                let decoded = if (0xD800..0xDC00).contains(&unit) {
                    if chars.next() != Some('\\') || chars.next() != Some('u') {
                        return None;
                    }
                    let low = hex_unit(&mut chars)?;
                    char::decode_utf16([unit, low]).next()?.ok()?
                } else {
                    char::from_u32(u32::from(unit))?
                };
                out.push(decoded);
            }
            Some(other) => out.push(other),
            // A lone trailing backslash is dropped.
            None => {}
        }
    }
    Some(out)
}

fn hex_unit(chars: &mut std::str::Chars<'_>) -> Option<u16> {
    let digits: String = chars.by_ref().take(4).collect();
    if digits.len() != 4 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    u16::from_str_radix(&digits, 16).ok()
}

// ── Tests ─────────────────────────────────────────────────────────────────────
