//! Inline JSON display for non-string default values.
//!
//! Values are written on one line with `", "` between items and `": "`
//! between keys and values, e.g. `{"max": 5, "tags": ["a", "b"]}`.
//! Non-ASCII text is written as-is and object keys keep their input order.
//! Numbers keep the exact text they had in the input file.

use std::io;

use serde::Serialize;
use serde_json::Value;
use serde_json::ser::Formatter;

/// `serde_json` formatter producing single-line output with spaced separators.
#[derive(Debug, Clone, Copy, Default)]
pub struct InlineFormatter;

impl Formatter for InlineFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }
}

/// Renders `value` as inline JSON.
#[must_use]
pub fn to_inline_json(value: &Value) -> String {
    let mut buf = Vec::new();
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, InlineFormatter);
    value
        .serialize(&mut serializer)
        .expect("serializing a JSON value into memory is infallible");
    String::from_utf8_lossy(&buf).into_owned()
}
