//! Serialises champions into the generated module text.
//!
//! The module is a single statement, `export const <name> = <json>`, where the
//! JSON object is pretty-printed with two-space indentation and sorted keys.

use std::io;

use serde::{Deserialize, Serialize};
use serde_json::ser::{Formatter, PrettyFormatter, Serializer};

use crate::collect::Champions;
use crate::error::{PackError, Result};

const INDENT: &[u8] = b"  ";

/// How non-ASCII text is written into the JSON literal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Escape {
    /// Escape everything outside printable ASCII as `\uXXXX`.
    #[default]
    Ascii,
    /// Write non-ASCII characters verbatim.
    Utf8,
}

/// Renders the complete module text for `champions`.
///
/// # Errors
///
/// Returns [`PackError::InvalidExportName`] when `export_name` is not a
/// JavaScript identifier, or [`PackError::Render`] if serialisation fails.
pub fn render_module(export_name: &str, champions: &Champions, escape: Escape) -> Result<String> {
    if !is_js_identifier(export_name) {
        return Err(PackError::InvalidExportName(export_name.to_owned()));
    }
    let json = render_json(champions, escape)?;
    Ok(format!("export const {export_name} = {json}"))
}

/// Renders `champions` as a pretty-printed JSON object.
///
/// # Errors
///
/// Returns [`PackError::Render`] if serialisation fails.
pub fn render_json(champions: &Champions, escape: Escape) -> Result<String> {
    let mut buffer = Vec::new();
    match escape {
        Escape::Ascii => {
            let mut serializer = Serializer::with_formatter(&mut buffer, AsciiFormatter::new());
            champions.serialize(&mut serializer)?;
        }
        Escape::Utf8 => {
            let formatter = PrettyFormatter::with_indent(INDENT);
            let mut serializer = Serializer::with_formatter(&mut buffer, formatter);
            champions.serialize(&mut serializer)?;
        }
    }
    String::from_utf8(buffer)
        .map_err(|err| PackError::Render(serde::ser::Error::custom(err)))
}

/// Returns `true` when `name` is usable as a JavaScript binding name.
///
/// Only ASCII identifiers are accepted; reserved words are not checked.
#[must_use]
pub fn is_js_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    let is_start = |ch: char| ch.is_ascii_alphabetic() || ch == '_' || ch == '$';
    is_start(first) && chars.all(|ch| is_start(ch) || ch.is_ascii_digit())
}

/// Pretty formatter that escapes every character outside printable ASCII.
struct AsciiFormatter<'a> {
    pretty: PrettyFormatter<'a>,
}

impl AsciiFormatter<'_> {
    fn new() -> Self {
        Self {
            pretty: PrettyFormatter::with_indent(INDENT),
        }
    }
}

impl Formatter for AsciiFormatter<'_> {
    fn begin_array<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.begin_array(writer)
    }

    fn end_array<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.end_array(writer)
    }

    fn begin_array_value<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        self.pretty.begin_array_value(writer, first)
    }

    fn end_array_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.end_array_value(writer)
    }

    fn begin_object<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.begin_object(writer)
    }

    fn end_object<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.end_object(writer)
    }

    fn begin_object_key<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        self.pretty.begin_object_key(writer, first)
    }

    fn begin_object_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.begin_object_value(writer)
    }

    fn end_object_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.end_object_value(writer)
    }

    fn write_string_fragment<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        fragment: &str,
    ) -> io::Result<()> {
        let mut units = [0_u16; 2];
        for ch in fragment.chars() {
            if matches!(ch, ' '..='~') {
                let mut utf8 = [0_u8; 4];
                writer.write_all(ch.encode_utf8(&mut utf8).as_bytes())?;
            } else {
                for unit in ch.encode_utf16(&mut units).iter() {
                    write!(writer, "\\u{unit:04x}")?;
                }
            }
        }
        Ok(())
    }
}
