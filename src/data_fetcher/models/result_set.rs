use crate::error::AppError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One table from a stats.nba.com response: column names plus positional rows.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecordSet {
    pub name: String,
    pub headers: Vec<String>,
    #[serde(rename = "rowSet")]
    pub rows: Vec<Vec<Value>>,
}

/// Response envelope. Most endpoints return `resultSets`, a few return a single `resultSet`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsResponse {
    #[serde(rename = "resultSets", default)]
    pub result_sets: Vec<RecordSet>,
    #[serde(rename = "resultSet", default, skip_serializing_if = "Option::is_none")]
    pub result_set: Option<RecordSet>,
}

impl StatsResponse {
    /// Returns the primary (first) record set, which is the only one the pipeline reads.
    pub fn into_primary(self) -> Option<RecordSet> {
        self.result_sets.into_iter().next().or(self.result_set)
    }
}

impl RecordSet {
    /// Resolves a column by header name. A missing column means the provider changed its schema.
    pub fn column(&self, name: &str) -> Result<usize, AppError> {
        self.headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| AppError::missing_column(&self.name, name))
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> impl Iterator<Item = Row<'_>> {
        self.rows.iter().enumerate().map(|(index, cells)| Row {
            set: self,
            index,
            cells,
        })
    }
}

/// Borrowed view of a single row with typed cell accessors.
#[derive(Debug, Clone, Copy)]
pub struct Row<'a> {
    set: &'a RecordSet,
    index: usize,
    cells: &'a [Value],
}

impl<'a> Row<'a> {
    fn cell(&self, col: usize) -> &'a Value {
        self.cells.get(col).unwrap_or(&Value::Null)
    }

    fn invalid(&self, col: usize, message: impl Into<String>) -> AppError {
        let column = self.set.headers.get(col).map(String::as_str).unwrap_or("?");
        AppError::invalid_cell(&self.set.name, column, self.index, message)
    }

    pub fn string(&self, col: usize) -> Result<String, AppError> {
        self.optional_string(col)?
            .ok_or_else(|| self.invalid(col, "expected text, found null"))
    }

    pub fn optional_string(&self, col: usize) -> Result<Option<String>, AppError> {
        match self.cell(col) {
            Value::Null => Ok(None),
            Value::String(s) => Ok(Some(s.clone())),
            other => Err(self.invalid(col, format!("expected text, found {other}"))),
        }
    }

    /// Identifiers arrive as numbers (`TEAM_ID`) or zero-padded strings (`GAME_ID`).
    pub fn identifier(&self, col: usize) -> Result<String, AppError> {
        match self.cell(col) {
            Value::String(s) if !s.is_empty() => Ok(s.clone()),
            Value::Number(n) => Ok(n.to_string()),
            other => Err(self.invalid(col, format!("expected an identifier, found {other}"))),
        }
    }

    pub fn integer(&self, col: usize) -> Result<i64, AppError> {
        match self.cell(col) {
            Value::Number(n) => n
                .as_i64()
                .ok_or_else(|| self.invalid(col, format!("expected an integer, found {n}"))),
            other => Err(self.invalid(col, format!("expected an integer, found {other}"))),
        }
    }

    pub fn count(&self, col: usize) -> Result<u32, AppError> {
        let value = self.integer(col)?;
        u32::try_from(value)
            .map_err(|_| self.invalid(col, format!("expected a non-negative count, found {value}")))
    }

    pub fn decimal(&self, col: usize) -> Result<f64, AppError> {
        self.optional_decimal(col)?
            .ok_or_else(|| self.invalid(col, "expected a number, found null"))
    }

    pub fn optional_decimal(&self, col: usize) -> Result<Option<f64>, AppError> {
        match self.cell(col) {
            Value::Null => Ok(None),
            Value::Number(n) => Ok(n.as_f64()),
            other => Err(self.invalid(col, format!("expected a number, found {other}"))),
        }
    }
}
