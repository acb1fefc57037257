use super::{Casing, ColumnType, DateMode, ForeignKeyDef, Table};
use crate::stmt::{Expr, Fragment, Value};

use std::{borrow::Cow, fmt, sync::Arc};

/// Produces a value at statement-build time, used for insert defaults and
/// update hooks.
pub type ValueFn = Arc<dyn Fn() -> Expr + Send + Sync>;

/// Static column default, rendered in DDL.
#[derive(Debug, Clone)]
pub enum DefaultValue {
    Value(Value),
    Sql(Fragment),
}

#[derive(Clone)]
pub struct Column {
    /// Logical name used by the application.
    pub key: String,

    /// Name of the column in the warehouse.
    pub name: String,

    /// True when `name` was derived from `key`, in which case the casing
    /// policy applies.
    pub key_as_name: bool,

    pub ty: ColumnType,

    pub nullable: bool,

    /// True if the column is part of the table's primary key
    pub primary_key: bool,

    pub default: Option<DefaultValue>,

    /// Called for every inserted row that does not supply a value.
    pub default_fn: Option<ValueFn>,

    /// Called for every updated row that does not supply a value, and for
    /// inserts when there is neither a value nor a static default.
    pub on_update_fn: Option<ValueFn>,

    pub unique: bool,

    /// Resolved by `TableBuilder::build` when `unique` is set.
    pub unique_name: Option<String>,

    pub autoincrement: bool,

    /// Computed column expression.
    pub generated: Option<Fragment>,

    pub(super) references: Option<ForeignKeyDef>,
}

/// A column reached through the table that owns it.
#[derive(Clone)]
pub struct ColumnRef {
    pub table: Arc<Table>,
    pub key: String,
}

impl Column {
    pub fn new(key: impl Into<String>, ty: ColumnType) -> Column {
        let key = key.into();
        Column {
            name: key.clone(),
            key,
            key_as_name: true,
            ty,
            nullable: true,
            primary_key: false,
            default: None,
            default_fn: None,
            on_update_fn: None,
            unique: false,
            unique_name: None,
            autoincrement: false,
            generated: None,
            references: None,
        }
    }

    pub fn varchar(key: impl Into<String>) -> Column {
        Column::new(key, ColumnType::Varchar { length: None })
    }

    pub fn char(key: impl Into<String>) -> Column {
        Column::new(key, ColumnType::Char { length: None })
    }

    pub fn number(key: impl Into<String>) -> Column {
        Column::new(
            key,
            ColumnType::Number {
                precision: None,
                scale: None,
            },
        )
    }

    pub fn integer(key: impl Into<String>) -> Column {
        Column::new(key, ColumnType::Integer)
    }

    pub fn boolean(key: impl Into<String>) -> Column {
        Column::new(key, ColumnType::Boolean)
    }

    pub fn timestamp(key: impl Into<String>) -> Column {
        Column::new(
            key,
            ColumnType::Timestamp {
                precision: None,
                with_timezone: false,
                mode: DateMode::Date,
            },
        )
    }

    pub fn date(key: impl Into<String>) -> Column {
        Column::new(
            key,
            ColumnType::Date {
                mode: DateMode::Date,
            },
        )
    }

    /// Sets the SQL name explicitly. The casing policy no longer applies.
    pub fn name(mut self, name: impl Into<String>) -> Column {
        self.name = name.into();
        self.key_as_name = false;
        self
    }

    #[track_caller]
    pub fn length(mut self, len: u32) -> Column {
        match &mut self.ty {
            ColumnType::Varchar { length } | ColumnType::Char { length } => *length = Some(len),
            ty => panic!("length does not apply to {ty:?}"),
        }
        self
    }

    #[track_caller]
    pub fn precision(mut self, value: u32) -> Column {
        match &mut self.ty {
            ColumnType::Number { precision, .. } => *precision = Some(value),
            ColumnType::Timestamp { precision, .. } => match u8::try_from(value) {
                Ok(value) => *precision = Some(value),
                Err(_) => panic!("timestamp precision out of range: {value}"),
            },
            ty => panic!("precision does not apply to {ty:?}"),
        }
        self
    }

    #[track_caller]
    pub fn scale(mut self, value: u32) -> Column {
        match &mut self.ty {
            ColumnType::Number { scale, .. } => *scale = Some(value),
            ty => panic!("scale does not apply to {ty:?}"),
        }
        self
    }

    #[track_caller]
    pub fn with_timezone(mut self) -> Column {
        match &mut self.ty {
            ColumnType::Timestamp { with_timezone, .. } => *with_timezone = true,
            ty => panic!("with_timezone does not apply to {ty:?}"),
        }
        self
    }

    /// Temporal values are exchanged as strings instead of date values.
    #[track_caller]
    pub fn mode_string(mut self) -> Column {
        match &mut self.ty {
            ColumnType::Timestamp { mode, .. } | ColumnType::Date { mode } => {
                *mode = DateMode::String
            }
            ty => panic!("mode does not apply to {ty:?}"),
        }
        self
    }

    pub fn not_null(mut self) -> Column {
        self.nullable = false;
        self
    }

    pub fn primary_key(mut self) -> Column {
        self.primary_key = true;
        self.nullable = false;
        self
    }

    pub fn unique(mut self) -> Column {
        self.unique = true;
        self
    }

    pub fn unique_named(mut self, name: impl Into<String>) -> Column {
        self.unique = true;
        self.unique_name = Some(name.into());
        self
    }

    pub fn default(mut self, value: impl Into<Value>) -> Column {
        self.default = Some(DefaultValue::Value(value.into()));
        self
    }

    pub fn default_sql(mut self, sql: Fragment) -> Column {
        self.default = Some(DefaultValue::Sql(sql));
        self
    }

    pub fn default_fn<E: Into<Expr>>(mut self, f: impl Fn() -> E + Send + Sync + 'static) -> Column {
        self.default_fn = Some(Arc::new(move || f().into()));
        self
    }

    pub fn on_update_fn<E: Into<Expr>>(
        mut self,
        f: impl Fn() -> E + Send + Sync + 'static,
    ) -> Column {
        self.on_update_fn = Some(Arc::new(move || f().into()));
        self
    }

    pub fn autoincrement(mut self) -> Column {
        self.autoincrement = true;
        self
    }

    pub fn generated_always_as(mut self, sql: Fragment) -> Column {
        self.generated = Some(sql);
        self
    }

    /// Declares an inline foreign key to `key` on `table`.
    pub fn references(mut self, table: &Arc<Table>, key: impl Into<String>) -> Column {
        self.references = Some(ForeignKeyDef::new(
            [self.key.clone()],
            table,
            [key.into()],
        ));
        self
    }

    /// Identity and generated columns never appear in INSERT column lists.
    pub fn is_insert_disabled(&self) -> bool {
        self.autoincrement || self.generated.is_some()
    }

    pub fn has_default(&self) -> bool {
        self.default.is_some()
    }

    pub fn sql_name(&self, casing: Option<Casing>) -> Cow<'_, str> {
        match casing {
            Some(casing) if self.key_as_name => Cow::Owned(casing.convert(&self.name)),
            _ => Cow::Borrowed(&self.name),
        }
    }
}

impl fmt::Debug for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("key", &self.key)
            .field("name", &self.name)
            .field("ty", &self.ty)
            .field("nullable", &self.nullable)
            .field("primary_key", &self.primary_key)
            .field("unique", &self.unique)
            .field("autoincrement", &self.autoincrement)
            .finish_non_exhaustive()
    }
}

impl ColumnRef {
    pub fn column(&self) -> &Column {
        &self.table.columns[self.key.as_str()]
    }

    /// Name of the owning table as it appears in the query, the alias when
    /// the table is aliased.
    pub fn table_name(&self) -> &str {
        &self.table.name
    }
}

impl fmt::Debug for ColumnRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ColumnRef({}.{})", self.table.name, self.key)
    }
}
