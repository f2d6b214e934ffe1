//! Response bodies from the school data proxy.
//!
//! The proxy normally answers with a JSON array of records. Some
//! feeds fall back to a markdown table instead:
//!
//! ```text
//! | id | mealDate   | menu       |
//! |----|------------|------------|
//! | 1  | 2025-03-04 | 김치찌개   |
//! ```
//!
//! One header row, one separator row made of dashes and colons, then
//! zero or more data rows. Cells are `|` delimited and trimmed. The
//! table ends at the first line that is not a row, so a trailing
//! footer such as `총 3건` is ignored.
use serde_json::{Map, Value};

#[derive(Clone, Debug, PartialEq)]
pub struct MarkdownTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum ProxyBody {
    Json(Vec<Value>),
    // Any other JSON value. Passed on untouched but holds no records
    OtherJson(Value),
    Table(MarkdownTable),
    Unrecognized,
}

fn split_row(line: &str) -> Option<Vec<String>> {
    let line = line.trim();
    if !line.contains('|') {
        return None;
    }
    let inner = line.strip_prefix('|').unwrap_or(line);
    let inner = inner.strip_suffix('|').unwrap_or(inner);
    Some(inner.split('|').map(|cell| cell.trim().to_string()).collect())
}

fn is_separator(cells: &[String]) -> bool {
    !cells.is_empty()
        && cells.iter().all(|cell| {
            let cell = cell.trim_matches(':');
            !cell.is_empty() && cell.chars().all(|c| c == '-')
        })
}

impl MarkdownTable {
    pub fn parse(text: &str) -> Option<Self> {
        let mut lines = text.lines().map(str::trim).filter(|l| !l.is_empty());

        let headers = split_row(lines.next()?)?;
        if headers.iter().all(|h| h.is_empty()) {
            return None;
        }
        let separator = split_row(lines.next()?)?;
        if !is_separator(&separator) || separator.len() != headers.len() {
            return None;
        }

        let mut rows = Vec::new();
        for line in lines {
            let Some(mut cells) = split_row(line) else {
                break;
            };
            // Short rows are padded, long rows are cut to the header width
            cells.resize(headers.len(), String::new());
            rows.push(cells);
        }

        Some(Self { headers, rows })
    }

    /// Rows as JSON objects keyed by header. Cells that look like
    /// integers become numbers so they line up with JSON records.
    pub fn records(&self) -> Vec<Value> {
        self.rows
            .iter()
            .map(|row| {
                let object: Map<String, Value> = self
                    .headers
                    .iter()
                    .zip(row)
                    .map(|(header, cell)| {
                        let value = match cell.parse::<i64>() {
                            Ok(n) => Value::from(n),
                            // Multi-line cells are written with <br>
                            Err(_) => Value::from(cell.replace("<br>", "\n")),
                        };
                        (header.clone(), value)
                    })
                    .collect();
                Value::Object(object)
            })
            .collect()
    }
}

impl ProxyBody {
    pub fn parse(text: &str) -> Self {
        match serde_json::from_str::<Value>(text) {
            Ok(Value::Array(items)) => return ProxyBody::Json(items),
            Ok(other) => return ProxyBody::OtherJson(other),
            Err(_) => {}
        }
        match MarkdownTable::parse(text) {
            Some(table) => ProxyBody::Table(table),
            None => ProxyBody::Unrecognized,
        }
    }

    pub fn into_records(self) -> Option<Vec<Value>> {
        match self {
            ProxyBody::Json(items) => Some(items),
            ProxyBody::Table(table) => Some(table.records()),
            ProxyBody::OtherJson(_) | ProxyBody::Unrecognized => None,
        }
    }

    /// The body as JSON for passing on to a client. Tables become an
    /// array of records.
    pub fn into_json(self) -> Option<Value> {
        match self {
            ProxyBody::Json(items) => Some(Value::Array(items)),
            ProxyBody::OtherJson(value) => Some(value),
            ProxyBody::Table(table) => Some(Value::Array(table.records())),
            ProxyBody::Unrecognized => None,
        }
    }
}
