//! DuckDB SQL pagination
//!
//! Paginates an arbitrary `SELECT` by wrapping it with `LIMIT`/`OFFSET` and,
//! when the total cannot be inferred from a short page, a `COUNT(*)`.

use super::types::PaginateArgs;
use crate::collection::{Collection, Paginated};
use crate::config::PaginateConfig;
use crate::error::{Error, Result};
use crate::types::JsonValue;
use duckdb::types::Value as DuckValue;
use duckdb::Connection;
use regex::Regex;
use serde_json::{Map, Number};
use std::path::Path;
use std::sync::LazyLock;

/// A table or column name, optionally schema-qualified
static IDENTIFIER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*(\.[A-Za-z_][A-Za-z0-9_]*)?$").unwrap()
});

/// Model name for rows of a raw query
pub const DEFAULT_MODEL_NAME: &str = "Row";

/// A `SELECT` statement and the model name of its rows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SqlQuery {
    sql: String,
    model_name: String,
}

impl SqlQuery {
    /// Wrap a `SELECT` statement; a trailing `;` is dropped
    pub fn new(sql: impl Into<String>) -> Self {
        let sql = sql.into();
        let sql = sql.trim().trim_end_matches(';').trim_end().to_string();
        Self {
            sql,
            model_name: DEFAULT_MODEL_NAME.to_string(),
        }
    }

    /// `SELECT * FROM <table>`, with the table name as model name
    pub fn table(name: &str) -> Result<Self> {
        if !IDENTIFIER.is_match(name) {
            return Err(Error::invalid_argument(
                "table",
                format!("'{name}' is not a valid table name"),
            ));
        }
        Ok(Self::new(format!("SELECT * FROM {name}")).with_model_name(name))
    }

    /// Append `ORDER BY <column> [DESC]`
    pub fn order_by(self, column: &str, descending: bool) -> Result<Self> {
        if !IDENTIFIER.is_match(column) {
            return Err(Error::invalid_argument(
                "order_by",
                format!("'{column}' is not a valid column name"),
            ));
        }
        let direction = if descending { " DESC" } else { "" };
        Ok(Self {
            sql: format!("{} ORDER BY {column}{direction}", self.sql),
            model_name: self.model_name,
        })
    }

    #[must_use]
    pub fn with_model_name(mut self, name: impl Into<String>) -> Self {
        self.model_name = name.into();
        self
    }

    pub fn sql(&self) -> &str {
        &self.sql
    }

    pub fn model_name(&self) -> &str {
        &self.model_name
    }

    /// The statement limited to one page
    pub fn page_sql(&self, limit: u64, offset: u64) -> String {
        format!("{} LIMIT {limit} OFFSET {offset}", self.sql)
    }

    /// The statement counting all rows
    pub fn count_sql(&self) -> String {
        format!("SELECT COUNT(*) FROM ({}) AS count_table", self.sql)
    }
}

/// Runs paginated queries on a DuckDB connection
pub struct SqlFinder {
    conn: Connection,
}

impl SqlFinder {
    pub fn new(conn: Connection) -> Self {
        Self { conn }
    }

    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .map_err(|e| Error::config(format!("Failed to create DuckDB connection: {e}")))?;
        Ok(Self::new(conn))
    }

    /// Open a DuckDB database file
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let conn = Connection::open(path).map_err(|e| {
            Error::config(format!(
                "Failed to open DuckDB database '{}': {e}",
                path.display()
            ))
        })?;
        Ok(Self::new(conn))
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Run one or more statements (schema setup, inserts)
    pub fn execute_batch(&self, sql: &str) -> Result<()> {
        self.conn
            .execute_batch(sql)
            .map_err(|e| Error::query(format!("Failed to execute SQL: {e}")))
    }

    /// Count all rows of `query`
    pub fn count(&self, query: &SqlQuery) -> Result<u64> {
        let sql = query.count_sql();
        tracing::debug!("Executing count query: {}", sql);
        let count: i64 = self
            .conn
            .query_row(&sql, [], |row| row.get(0))
            .map_err(|e| Error::query(format!("Failed to count rows: {e}")))?;
        Ok(u64::try_from(count).unwrap_or(0))
    }

    /// Fetch one page of `query` as JSON objects
    pub fn paginate(
        &self,
        query: &SqlQuery,
        args: &PaginateArgs,
        config: &PaginateConfig,
    ) -> Result<Collection<JsonValue>> {
        let page = args.resolve_page(None)?;
        let per_page = args.resolve_per_page(None, config)?;
        let collection = Collection::with_page(page, per_page, args.total_entries)?
            .with_item_type(query.model_name().to_string());

        let sql = query.page_sql(per_page, collection.offset());
        let rows = self.select(&sql)?;
        let mut collection = collection.replace(rows);

        if collection.known_total_entries().is_none() {
            let total = self.count(query)?;
            collection.set_total_entries(total);
        }
        Ok(collection)
    }

    /// Run a query and convert every row into a JSON object keyed by column name
    pub fn select(&self, sql: &str) -> Result<Vec<JsonValue>> {
        tracing::debug!("Executing query: {}", sql);

        let mut stmt = self
            .conn
            .prepare(sql)
            .map_err(|e| Error::query(format!("Failed to prepare query: {e}")))?;
        let mut rows = stmt
            .query([])
            .map_err(|e| Error::query(format!("Failed to run query: {e}")))?;
        let columns: Vec<String> = rows
            .as_ref()
            .map(|stmt| stmt.column_names())
            .unwrap_or_default();

        let mut records = Vec::new();
        while let Some(row) = rows.next()? {
            let mut record = Map::new();
            for (i, column) in columns.iter().enumerate() {
                let value: DuckValue = row.get(i)?;
                record.insert(column.clone(), duck_to_json(value));
            }
            records.push(JsonValue::Object(record));
        }
        Ok(records)
    }
}

fn float_to_json(value: f64) -> JsonValue {
    Number::from_f64(value).map_or(JsonValue::Null, JsonValue::Number)
}

/// Convert a DuckDB value into JSON; exotic types fall back to their debug text
fn duck_to_json(value: DuckValue) -> JsonValue {
    match value {
        DuckValue::Null => JsonValue::Null,
        DuckValue::Boolean(b) => JsonValue::Bool(b),
        DuckValue::TinyInt(n) => n.into(),
        DuckValue::SmallInt(n) => n.into(),
        DuckValue::Int(n) => n.into(),
        DuckValue::BigInt(n) => n.into(),
        DuckValue::HugeInt(n) => {
            i64::try_from(n).map_or_else(|_| JsonValue::String(n.to_string()), JsonValue::from)
        }
        DuckValue::UTinyInt(n) => n.into(),
        DuckValue::USmallInt(n) => n.into(),
        DuckValue::UInt(n) => n.into(),
        DuckValue::UBigInt(n) => n.into(),
        DuckValue::Float(f) => float_to_json(f64::from(f)),
        DuckValue::Double(f) => float_to_json(f),
        DuckValue::Text(s) | DuckValue::Enum(s) => JsonValue::String(s),
        DuckValue::List(items) => {
            JsonValue::Array(items.into_iter().map(duck_to_json).collect())
        }
        other => JsonValue::String(format!("{other:?}")),
    }
}
