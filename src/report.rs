//! Console rendering of saved servers.
//!
//! Text mode prints every stored value as is: text and blob bytes verbatim,
//! numbers in decimal and `NULL` as `None`, so a missing value never looks
//! like an empty string.

use std::io::{self, Write};

use crate::error::Result;
use crate::reader::{Field, ServerRecord};

/// Width of the dash line written after every record block.
pub const SEPARATOR_WIDTH: usize = 30;

/// Marker printed for a `NULL` column.
pub const NULL_MARKER: &str = "None";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

pub fn write_records<W: Write>(out: &mut W, records: &[ServerRecord], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => write_text(out, records),
        OutputFormat::Json => write_json(out, records),
    }
}

fn write_field<W: Write>(out: &mut W, label: &str, field: &Field) -> io::Result<()> {
    write!(out, "{label}: ")?;
    match field {
        Field::Null => out.write_all(NULL_MARKER.as_bytes())?,
        Field::Integer(i) => write!(out, "{i}")?,
        Field::Real(r) => write!(out, "{r:?}")?,
        Field::Text(s) => out.write_all(s.as_bytes())?,
        Field::Blob(b) => out.write_all(b)?,
    }
    out.write_all(b"\n")
}

/// One four-line block per record, each followed by a dash separator.
pub fn write_text<W: Write>(out: &mut W, records: &[ServerRecord]) -> Result<()> {
    let separator = "-".repeat(SEPARATOR_WIDTH);
    for record in records {
        write_field(out, "Server", &record.name)?;
        write_field(out, "Host", &record.host)?;
        write_field(out, "Username", &record.username)?;
        write_field(out, "Password (encrypted)", &record.encrypted_password)?;
        writeln!(out, "{separator}")?;
    }
    out.flush()?;
    Ok(())
}

/// Pretty JSON array. `NULL` is `null` and a blob is an array of byte values.
pub fn write_json<W: Write>(out: &mut W, records: &[ServerRecord]) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, records)?;
    writeln!(out)?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, password: Option<&str>) -> ServerRecord {
        ServerRecord {
            name: name.into(),
            host: "10.0.0.5".into(),
            username: "admin".into(),
            encrypted_password: password.map_or(Field::Null, Field::from),
        }
    }

    fn render(records: &[ServerRecord], format: OutputFormat) -> String {
        let mut out = Vec::new();
        write_records(&mut out, records, format).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn text_block_layout() {
        let out = render(&[record("staging", Some("Z0FBQUFB"))], OutputFormat::Text);
        assert_eq!(
            out,
            "Server: staging\n\
             Host: 10.0.0.5\n\
             Username: admin\n\
             Password (encrypted): Z0FBQUFB\n\
             ------------------------------\n"
        );
    }

    #[test]
    fn text_keeps_result_order() {
        let out = render(&[record("b", None), record("a", None)], OutputFormat::Text);
        let names: Vec<&str> = out
            .lines()
            .filter_map(|line| line.strip_prefix("Server: "))
            .collect();
        assert_eq!(names, ["b", "a"]);
        assert_eq!(out.lines().filter(|l| *l == "-".repeat(30)).count(), 2);
    }

    #[test]
    fn null_password_prints_none() {
        let out = render(&[record("x", None)], OutputFormat::Text);
        assert!(out.lines().any(|line| line == "Password (encrypted): None"));

        let out = render(&[record("x", Some(""))], OutputFormat::Text);
        assert!(out.lines().any(|line| line == "Password (encrypted): "));
    }

    #[test]
    fn blob_and_numbers_print_as_stored() {
        let records = [ServerRecord {
            name: Field::Integer(42),
            host: Field::Real(2.0),
            username: Field::Null,
            encrypted_password: Field::Blob(vec![b'g', 0xff, b'A']),
        }];
        let mut out = Vec::new();
        write_text(&mut out, &records).unwrap();

        let mut expected = b"Server: 42\nHost: 2.0\nUsername: None\nPassword (encrypted): g".to_vec();
        expected.push(0xff);
        expected.extend_from_slice(b"A\n------------------------------\n");
        assert_eq!(out, expected);
    }

    #[test]
    fn empty_text_prints_nothing() {
        assert_eq!(render(&[], OutputFormat::Text), "");
    }

    #[test]
    fn json_uses_field_names() {
        let out = render(&[record("prod", Some("abc"))], OutputFormat::Json);
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value[0]["name"], "prod");
        assert_eq!(value[0]["encrypted_password"], "abc");
        assert_eq!(render(&[], OutputFormat::Json).trim(), "[]");

        let out = render(&[record("none", None)], OutputFormat::Json);
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert!(value[0]["encrypted_password"].is_null());
    }
}
