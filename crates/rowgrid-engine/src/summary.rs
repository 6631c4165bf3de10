#![forbid(unsafe_code)]

//! Footer summary row.

use rowgrid_core::{Column, Row, SummaryFunc, Value};

/// Sum of the truthy cells.
///
/// Null when no cell is truthy or when any truthy cell is not a number.
#[must_use]
pub fn default_sum(cells: &[&Value]) -> Value {
    let mut total = 0.0;
    let mut seen = false;
    for cell in cells.iter().filter(|c| c.is_truthy()) {
        match cell {
            Value::Number(n) => {
                total += n;
                seen = true;
            }
            _ => return Value::Null,
        }
    }
    if seen { Value::Number(total) } else { Value::Null }
}

/// One cell of the summary row.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryCell {
    /// Column id.
    pub column: String,
    pub value: Value,
    /// `value` through the column formatter; empty for null.
    pub display: String,
}

/// Summarise every column over `rows`.
pub fn summary_row<R: AsRef<Row>>(columns: &[Column], rows: &[R]) -> Vec<SummaryCell> {
    columns
        .iter()
        .map(|column| {
            let value = match &column.summary {
                SummaryFunc::Off => Value::Null,
                SummaryFunc::Sum => default_sum(&cells(column, rows)),
                SummaryFunc::Custom(f) => f(&cells(column, rows)),
            };
            let display = if value.is_null() {
                String::new()
            } else {
                column.format_value(&value)
            };
            SummaryCell {
                column: column.id.clone(),
                value,
                display,
            }
        })
        .collect()
}

fn cells<'r, R: AsRef<Row>>(column: &Column, rows: &'r [R]) -> Vec<&'r Value> {
    rows.iter().map(|r| column.cell(r.as_ref())).collect()
}
