mod create_table;
pub use create_table::CreateTable;

mod drop_table;
pub use drop_table::DropTable;

pub use snowcap_core::stmt::*;

/// A statement the dialect can serialize: queries plus DDL.
#[derive(Debug, Clone)]
pub enum Statement {
    CreateTable(CreateTable),
    DropTable(DropTable),
    Delete(Delete),
    Insert(Insert),
    Raw(Fragment),
    Select(Select),
    Update(Update),
}

impl Statement {
    pub fn is_select(&self) -> bool {
        matches!(self, Statement::Select(_))
    }

    pub fn as_select(&self) -> Option<&Select> {
        match self {
            Statement::Select(select) => Some(select),
            _ => None,
        }
    }
}

impl From<snowcap_core::stmt::Statement> for Statement {
    fn from(value: snowcap_core::stmt::Statement) -> Self {
        match value {
            snowcap_core::stmt::Statement::Delete(stmt) => Statement::Delete(stmt),
            snowcap_core::stmt::Statement::Insert(stmt) => Statement::Insert(stmt),
            snowcap_core::stmt::Statement::Raw(stmt) => Statement::Raw(stmt),
            snowcap_core::stmt::Statement::Select(stmt) => Statement::Select(stmt),
            snowcap_core::stmt::Statement::Update(stmt) => Statement::Update(stmt),
        }
    }
}

impl From<Delete> for Statement {
    fn from(value: Delete) -> Self {
        Statement::Delete(value)
    }
}

impl From<Insert> for Statement {
    fn from(value: Insert) -> Self {
        Statement::Insert(value)
    }
}

impl From<Select> for Statement {
    fn from(value: Select) -> Self {
        Statement::Select(value)
    }
}

impl From<Update> for Statement {
    fn from(value: Update) -> Self {
        Statement::Update(value)
    }
}

impl From<Fragment> for Statement {
    fn from(value: Fragment) -> Self {
        Statement::Raw(value)
    }
}
