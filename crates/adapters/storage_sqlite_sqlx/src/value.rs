//! Binding and decoding of loosely typed column values.
//!
//! Values are bound with the `SQLite` storage class closest to their JSON
//! type and read back from the storage class the store kept. Column affinity
//! does the rest: `"2"` written to an `INTEGER` column reads back as `2`.

use serde_json::Value;
use sqlx::sqlite::{SqliteArguments, SqliteRow};
use sqlx::{ColumnIndex, Row, Sqlite, TypeInfo, ValueRef};

use assetdesk_domain::field::Field;

pub(crate) type Query<'q> = sqlx::query::Query<'q, Sqlite, SqliteArguments<'q>>;

/// Bind one JSON value. Arrays and objects are stored as their JSON text.
pub(crate) fn bind_value(query: Query<'_>, value: Value) -> Query<'_> {
    match value {
        Value::Null => query.bind(None::<String>),
        Value::Bool(flag) => query.bind(flag),
        Value::Number(number) => match number.as_i64() {
            Some(integer) => query.bind(integer),
            None => query.bind(number.as_f64()),
        },
        Value::String(text) => query.bind(text),
        nested @ (Value::Array(_) | Value::Object(_)) => query.bind(nested.to_string()),
    }
}

/// Bind an optional field; an absent one is NULL.
pub(crate) fn bind_field(query: Query<'_>, field: Option<Field>) -> Query<'_> {
    bind_value(query, field.unwrap_or(Value::Null))
}

/// Decode one column using the storage class of the stored value.
pub(crate) fn decode_value<I>(row: &SqliteRow, index: I) -> Result<Value, sqlx::Error>
where
    I: ColumnIndex<SqliteRow> + Copy,
{
    let raw = row.try_get_raw(index)?;
    if raw.is_null() {
        return Ok(Value::Null);
    }
    let value = match raw.type_info().name() {
        "INTEGER" => Value::from(row.try_get::<i64, _>(index)?),
        "REAL" => Value::from(row.try_get::<f64, _>(index)?),
        "BLOB" => {
            let bytes: Vec<u8> = row.try_get(index)?;
            Value::String(String::from_utf8_lossy(&bytes).into_owned())
        }
        _ => Value::String(row.try_get::<String, _>(index)?),
    };
    Ok(value)
}

/// Decode a named column into an optional field; NULL is `None`.
pub(crate) fn decode_field(row: &SqliteRow, name: &str) -> Result<Option<Field>, sqlx::Error> {
    decode_value(row, name).map(|value| Some(value).filter(|value| !value.is_null()))
}
