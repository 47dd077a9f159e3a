use sea_orm::prelude::TimeDateTimeWithTimeZone;
use sea_orm::{
    ColumnTrait, ConnectionTrait, DatabaseConnection, DbBackend, EntityTrait, QueryFilter, Set,
    Statement,
};
use sea_query::{Alias, Asterisk, Expr, Index, IndexOrder, OnConflict, Query};

use crate::indexes::{
    Clause, Direction, FieldMode, IndexFile, IndexSpec, QueryRunner, StoreError, TriggerQuery,
};
use frenzy_db as db;

/// Trigger queries against the SQLite store. A query whose composite index
/// is missing is refused with "requires an index" and the missing index is
/// written to `index_requests`; `deploy` builds the indexes.
pub struct SqliteIndexStore {
    db: DatabaseConnection,
}

impl SqliteIndexStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn index_exists(&self, name: &str) -> Result<bool, StoreError> {
        let row = self
            .db
            .query_one(Statement::from_sql_and_values(
                DbBackend::Sqlite,
                "SELECT name FROM sqlite_master WHERE type = 'index' AND name = ?",
                [name.into()],
            ))
            .await?;
        Ok(row.is_some())
    }

    async fn record_request(&self, name: &str, query: &TriggerQuery) -> Result<(), StoreError> {
        let fields = query
            .clauses
            .iter()
            .map(|c| serde_json::Value::String(c.to_string()))
            .collect::<Vec<_>>();
        let request = db::index_requests::ActiveModel {
            index_name: Set(name.to_owned()),
            collection: Set(query.collection.clone()),
            fields: Set(serde_json::Value::Array(fields)),
            requested_at: Set(TimeDateTimeWithTimeZone::now_utc()),
            ..Default::default()
        };
        db::index_requests::Entity::insert(request)
            .on_conflict(
                OnConflict::column(db::index_requests::Column::IndexName)
                    .update_column(db::index_requests::Column::RequestedAt)
                    .to_owned(),
            )
            .exec(&self.db)
            .await?;
        Ok(())
    }
}

#[async_trait::async_trait]
impl QueryRunner for SqliteIndexStore {
    async fn run(&self, query: &TriggerQuery) -> Result<usize, StoreError> {
        check_schema(&self.db, &query.collection, &query.clauses).await?;
        let name = index_name(&query.collection, &query.clauses)?;
        if !query.clauses.is_empty() && !self.index_exists(&name).await? {
            self.record_request(&name, query).await?;
            return Err(StoreError::FailedPrecondition(format!(
                "The query requires an index. Requested as {name}; run deploy-indexes to build it."
            )));
        }
        let mut select = Query::select();
        select
            .column(Asterisk)
            .from(Alias::new(query.collection.as_str()))
            .limit(query.limit);
        for c in query.clauses.iter() {
            match c {
                Clause::ArrayContains { field, value } => {
                    let column = column_name(field)?;
                    select.and_where(Expr::cust_with_values(
                        format!(
                            "EXISTS (SELECT 1 FROM json_each(\"{column}\") WHERE json_each.value = ?)"
                        ),
                        [value.clone()],
                    ));
                }
                Clause::OrderBy { field, direction } => {
                    let order = match direction {
                        Direction::Asc => sea_query::Order::Asc,
                        Direction::Desc => sea_query::Order::Desc,
                    };
                    select.order_by(Alias::new(column_name(field)?), order);
                }
            }
        }
        let builder = self.db.get_database_backend();
        let rows = self.db.query_all(builder.build(&select)).await?;
        Ok(rows.len())
    }
}

/// Creates every index in the file directly and drops the matching requests.
/// Returns the names of the indexes that were ensured.
pub async fn deploy(db: &DatabaseConnection, file: &IndexFile) -> Result<Vec<String>, StoreError> {
    // Nothing is built unless every index names real columns.
    for spec in file.indexes.iter() {
        let clauses = TriggerQuery::for_index(spec).clauses;
        check_schema(db, &spec.collection_group, &clauses).await?;
    }
    let builder = db.get_database_backend();
    let mut deployed = vec![];
    for spec in file.indexes.iter() {
        let name = spec_index_name(spec)?;
        let mut index = Index::create();
        index
            .name(name.as_str())
            .table(Alias::new(spec.collection_group.as_str()))
            .if_not_exists();
        for f in spec.fields.iter() {
            let column = Alias::new(column_name(&f.field_path)?);
            match f.mode {
                FieldMode::Order { order } => {
                    let order = match Direction::from(order) {
                        Direction::Asc => IndexOrder::Asc,
                        Direction::Desc => IndexOrder::Desc,
                    };
                    index.col((column, order));
                }
                // json_each lookups never use this column; it only keeps the
                // built index the same shape as the declared one.
                FieldMode::Array { .. } => {
                    index.col(column);
                }
            }
        }
        db.execute(builder.build(&index)).await?;
        db::index_requests::Entity::delete_many()
            .filter(db::index_requests::Column::IndexName.eq(name.as_str()))
            .exec(db)
            .await?;
        log::info!("Index {name} is deployed on {}", spec.collection_group);
        deployed.push(name);
    }
    Ok(deployed)
}

async fn table_columns<C: ConnectionTrait>(
    db: &C,
    table: &str,
) -> Result<Vec<String>, StoreError> {
    let rows = db
        .query_all(Statement::from_sql_and_values(
            DbBackend::Sqlite,
            "SELECT name FROM pragma_table_info(?)",
            [table.into()],
        ))
        .await?;
    rows.iter()
        .map(|r| r.try_get::<String>("", "name").map_err(StoreError::from))
        .collect()
}

// SQLite reads an unknown double-quoted identifier as a string literal, so
// a misspelled column would otherwise order by a constant.
async fn check_schema<C: ConnectionTrait>(
    db: &C,
    collection: &str,
    clauses: &[Clause],
) -> Result<(), StoreError> {
    check_identifier(collection)?;
    let columns = table_columns(db, collection).await?;
    if columns.is_empty() {
        return Err(StoreError::InvalidArgument(format!(
            "Unknown collection: {collection}"
        )));
    }
    for c in clauses {
        let column = column_name(c.field())?;
        if !columns.contains(&column) {
            return Err(StoreError::InvalidArgument(format!(
                "Unknown field {} in {collection}",
                c.field()
            )));
        }
    }
    Ok(())
}

fn spec_index_name(spec: &IndexSpec) -> Result<String, StoreError> {
    index_name(
        &spec.collection_group,
        &TriggerQuery::for_index(spec).clauses,
    )
}

// Deterministic, so a trigger query and the deploy step agree on the name.
pub fn index_name(collection: &str, clauses: &[Clause]) -> Result<String, StoreError> {
    check_identifier(collection)?;
    let mut name = collection.to_owned();
    for c in clauses {
        let (field, suffix) = match c {
            Clause::ArrayContains { field, .. } => (field, "contains".to_owned()),
            Clause::OrderBy { field, direction } => (field, direction.to_string()),
        };
        name.push_str(&format!("__{}_{suffix}", column_name(field)?));
    }
    Ok(name)
}

/// Maps a camelCase field path onto its snake_case column.
pub fn column_name(field_path: &str) -> Result<String, StoreError> {
    if field_path.contains('.') {
        return Err(StoreError::InvalidArgument(format!(
            "Nested field paths are not indexable: {field_path}"
        )));
    }
    check_identifier(field_path)?;
    let mut column = String::with_capacity(field_path.len() + 4);
    for c in field_path.chars() {
        if c.is_ascii_uppercase() {
            column.push('_');
            column.push(c.to_ascii_lowercase());
        } else {
            column.push(c);
        }
    }
    Ok(column)
}

fn check_identifier(s: &str) -> Result<(), StoreError> {
    let valid = s.chars().next().is_some_and(|c| c.is_ascii_alphabetic())
        && s.chars().all(|c| c.is_ascii_alphanumeric() || c == '_');
    if valid {
        Ok(())
    } else {
        Err(StoreError::InvalidArgument(format!("Invalid identifier: {s:?}")))
    }
}
