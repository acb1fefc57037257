mod decoder;
pub use decoder::Decoder;

mod delete;
pub use delete::Delete;

mod expr;
pub use expr::Expr;

mod expr_aliased;
pub use expr_aliased::ExprAliased;

mod expr_and;
pub use expr_and::ExprAnd;

mod expr_between;
pub use expr_between::ExprBetween;

mod expr_binary_op;
pub use expr_binary_op::ExprBinaryOp;

mod expr_exists;
pub use expr_exists::ExprExists;

mod expr_in_list;
pub use expr_in_list::ExprInList;

mod expr_in_subquery;
pub use expr_in_subquery::ExprInSubquery;

mod expr_is_null;
pub use expr_is_null::ExprIsNull;

mod expr_like;
pub use expr_like::ExprLike;

mod expr_not;
pub use expr_not::ExprNot;

mod expr_or;
pub use expr_or::ExprOr;

mod expr_stmt;
pub use expr_stmt::ExprStmt;

mod fragment;
pub use fragment::{Chunk, Fragment};

mod insert;
pub use insert::{Insert, InsertRow, InsertSource, OnConflict};

mod join;
pub use join::{Join, JoinType};

mod limit;
pub use limit::Limit;

mod op_binary;
pub use op_binary::BinaryOp;

mod op_set;
pub use op_set::{SetOperation, SetOperator};

mod order_by;
pub use order_by::{Direction, OrderByExpr};

mod param;
pub use param::{Param, ParamValue};

mod select;
pub use select::Select;

mod selection;
pub use selection::{SelectedField, Selection, SelectionItem};

mod source;
pub use source::TableSource;

mod statement;
pub use statement::Statement;

mod subquery;
pub use subquery::Subquery;

mod update;
pub use update::Update;

mod value;
pub use value::Value;

mod value_chrono;

mod value_record;
pub use value_record::ValueRecord;

mod with;
pub use with::With;
