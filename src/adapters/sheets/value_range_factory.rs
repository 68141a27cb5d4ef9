use google_sheets4::api::ValueRange;
use serde_json::{Number, Value};
use std::borrow::Cow;

use crate::domain::table::{CellValue, RowSet};

pub trait ValueRangeFactory {
    fn from_single_cell<'a, T: Into<Cow<'a, str>>>(cell_value: T) -> Self;
    /// The header row followed by every data row.
    fn from_table(table: &RowSet) -> Self;
}

fn wrap_value(value: &CellValue) -> Value {
    match value {
        CellValue::Null => Value::String(String::new()),
        CellValue::Bool(value) => Value::Bool(*value),
        CellValue::Integer(value) => Value::Number((*value).into()),
        CellValue::Real(value) => Number::from_f64(*value)
            .map(Value::Number)
            .unwrap_or_else(|| Value::String(value.to_string())),
        CellValue::Text(value) => Value::String(value.clone()),
    }
}

impl ValueRangeFactory for ValueRange {
    fn from_single_cell<'a, T: Into<Cow<'a, str>>>(cell_value: T) -> Self {
        ValueRange {
            major_dimension: None,
            range: None,
            values: Some(vec![vec![Value::String(cell_value.into().into_owned())]]),
        }
    }

    fn from_table(table: &RowSet) -> Self {
        let header = table
            .columns()
            .iter()
            .map(|name| Value::String(name.clone()))
            .collect::<Vec<_>>();

        let mut values = Vec::with_capacity(table.len() + 1);
        values.push(header);
        values.extend(
            table
                .rows()
                .iter()
                .map(|row| row.iter().map(wrap_value).collect::<Vec<_>>()),
        );

        Self {
            major_dimension: Some("ROWS".to_string()),
            range: None,
            values: Some(values),
        }
    }
}
