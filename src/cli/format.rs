// Copyright (c) 2026 Jan Holthuis <jan.holthuis@rub.de>
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0. If a copy
// of the MPL was not distributed with this file, You can obtain one at
// http://mozilla.org/MPL/2.0/.
//
// SPDX-License-Identifier: MPL-2.0

//! Output formatting for column/value pairs.

use clap::ValueEnum;
use itertools::Itertools;
use serde_json::Value;
use std::borrow::Cow;
use std::io::Write;
use unicode_width::UnicodeWidthStr;

/// Header of the field column in tables.
const FIELD_HEADER: &str = "Field";
/// Header of the value column in tables.
const VALUE_HEADER: &str = "Value";

/// How column/value pairs are written to the terminal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Two-column table.
    #[default]
    Table,
    /// JSON object.
    Json,
    /// Only the values, one per line.
    Value,
}

impl OutputFormat {
    /// Write the column/value pairs to `out`.
    ///
    /// # Errors
    ///
    /// Fails if writing to `out` or JSON serialization fails.
    pub fn write<W: Write>(
        self,
        out: &mut W,
        columns: &[String],
        values: &[Value],
    ) -> crate::Result<()> {
        match self {
            Self::Table => write_table(out, columns, values)?,
            Self::Json => {
                let object: serde_json::Map<String, Value> =
                    columns.iter().cloned().zip(values.iter().cloned()).collect();
                serde_json::to_writer_pretty(&mut *out, &object)?;
                writeln!(out)?;
            }
            Self::Value => {
                for value in values {
                    writeln!(out, "{}", display_value(value))?;
                }
            }
        }
        Ok(())
    }
}

/// Render a single value as text.
///
/// Strings are shown without quotes, null as an empty string and everything else as JSON.
#[must_use]
pub fn display_value(value: &Value) -> Cow<'_, str> {
    match value {
        Value::Null => Cow::Borrowed(""),
        Value::String(text) => Cow::Borrowed(text),
        other => Cow::Owned(other.to_string()),
    }
}

/// Keep only the given columns (and their values). An empty selection keeps everything.
#[must_use]
pub fn select_columns(
    columns: Vec<String>,
    values: Vec<Value>,
    selected: &[String],
) -> (Vec<String>, Vec<Value>) {
    if selected.is_empty() {
        return (columns, values);
    }
    columns
        .into_iter()
        .zip(values)
        .filter(|(column, _)| selected.contains(column))
        .unzip()
}

/// Write a cell padded to `width` terminal columns.
fn write_cell<W: Write>(out: &mut W, text: &str, width: usize) -> std::io::Result<()> {
    let padding = width.saturating_sub(text.width());
    write!(out, " {text}{:padding$} |", "")
}

/// Write the pairs as a two-column table.
fn write_table<W: Write>(out: &mut W, columns: &[String], values: &[Value]) -> std::io::Result<()> {
    let values: Vec<Cow<'_, str>> = values.iter().map(display_value).collect();
    let field_width = columns
        .iter()
        .map(|column| column.width())
        .chain([FIELD_HEADER.width()])
        .max()
        .unwrap_or_default();
    let value_width = values
        .iter()
        .map(|value| value.width())
        .chain([VALUE_HEADER.width()])
        .max()
        .unwrap_or_default();
    let border = format!(
        "+{}+",
        [field_width, value_width]
            .iter()
            .map(|width| "-".repeat(width + 2))
            .join("+")
    );

    writeln!(out, "{border}")?;
    write!(out, "|")?;
    write_cell(out, FIELD_HEADER, field_width)?;
    write_cell(out, VALUE_HEADER, value_width)?;
    writeln!(out)?;
    writeln!(out, "{border}")?;
    for (column, value) in columns.iter().zip(&values) {
        write!(out, "|")?;
        write_cell(out, column, field_width)?;
        write_cell(out, value, value_width)?;
        writeln!(out)?;
    }
    writeln!(out, "{border}")
}
