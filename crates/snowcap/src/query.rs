use crate::{result, Logger};

use snowcap_core::{
    driver::{self, Connection, Rows},
    stmt::{ParamValue, SelectedField, Value},
    Error, Result,
};
use snowcap_sql::{Query, TypeHint};

use indexmap::IndexMap;
use std::{collections::HashMap, fmt, sync::Arc};

/// Values for named placeholders, supplied when a prepared query executes.
pub type Placeholders = HashMap<String, Value>;

/// Replaces field-based mapping of returned rows.
pub type ResultMapper = Arc<dyn Fn(Rows) -> Result<Vec<Value>> + Send + Sync>;

/// A compiled statement bound to a connection.
///
/// Everything needed to map results is captured when the query is prepared;
/// executing it only fills placeholders and submits the statement.
#[derive(Clone)]
pub struct PreparedQuery {
    connection: Arc<dyn Connection>,
    logger: Arc<dyn Logger>,
    query: Query,

    /// Selected fields, in column order of the returned rows.
    fields: Option<Vec<SelectedField>>,

    joins_not_nullable: Option<IndexMap<String, bool>>,

    array_mode: bool,

    mapper: Option<ResultMapper>,
}

impl PreparedQuery {
    pub(crate) fn new(
        connection: Arc<dyn Connection>,
        logger: Arc<dyn Logger>,
        query: Query,
    ) -> PreparedQuery {
        PreparedQuery {
            connection,
            logger,
            query,
            fields: None,
            joins_not_nullable: None,
            array_mode: false,
            mapper: None,
        }
    }

    /// Maps each returned row through `fields`, nullifying objects of
    /// nullable joins according to `joins_not_nullable`.
    pub fn with_fields(
        mut self,
        fields: Vec<SelectedField>,
        joins_not_nullable: Option<IndexMap<String, bool>>,
    ) -> PreparedQuery {
        self.fields = Some(fields);
        self.joins_not_nullable = joins_not_nullable;
        self
    }

    /// Unmapped rows are returned as lists instead of records.
    pub fn array_mode(mut self, array_mode: bool) -> PreparedQuery {
        self.array_mode = array_mode;
        self
    }

    pub fn map_with(
        mut self,
        mapper: impl Fn(Rows) -> Result<Vec<Value>> + Send + Sync + 'static,
    ) -> PreparedQuery {
        self.mapper = Some(Arc::new(mapper));
        self
    }

    pub fn sql(&self) -> &str {
        &self.query.sql
    }

    pub fn typings(&self) -> &[TypeHint] {
        &self.query.typings
    }

    pub fn fields(&self) -> Option<&[SelectedField]> {
        self.fields.as_deref()
    }

    pub fn is_response_in_array_mode(&self) -> bool {
        self.array_mode
    }

    /// Runs the query and maps the returned rows.
    pub async fn execute(&self, placeholders: &Placeholders) -> Result<Vec<Value>> {
        let rows = self.all(placeholders).await?;

        if let Some(mapper) = &self.mapper {
            return mapper(rows);
        }

        let Some(fields) = &self.fields else {
            return Ok(if self.array_mode {
                rows.values.into_iter().map(Value::List).collect()
            } else {
                rows.into_records().into_iter().map(Value::Record).collect()
            });
        };

        rows.values
            .into_iter()
            .map(|row| result::map_result_row(fields, row, self.joins_not_nullable.as_ref()))
            .collect()
    }

    /// Runs the query and returns the rows as the connection produced them.
    pub async fn all(&self, placeholders: &Placeholders) -> Result<Rows> {
        let binds = self.binds(placeholders)?;

        self.logger.log_query(&self.query.sql, &binds);

        self.connection
            .execute(driver::Statement::new(self.query.sql.clone(), binds))
            .await
    }

    fn binds(&self, placeholders: &Placeholders) -> Result<Vec<Value>> {
        self.query
            .params
            .iter()
            .map(|param| match &param.value {
                ParamValue::Value(value) => Ok(value.clone()),
                ParamValue::Placeholder(name) => {
                    let Some(value) = placeholders.get(name) else {
                        return Err(Error::missing_placeholder(name));
                    };

                    match &param.encoder {
                        Some(ty) => ty.encode(value.clone()),
                        None => Ok(value.clone()),
                    }
                }
            })
            .collect()
    }
}

impl fmt::Debug for PreparedQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PreparedQuery")
            .field("query", &self.query)
            .field("fields", &self.fields)
            .field("joins_not_nullable", &self.joins_not_nullable)
            .field("array_mode", &self.array_mode)
            .finish_non_exhaustive()
    }
}
