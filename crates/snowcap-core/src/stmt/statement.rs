use super::*;

#[derive(Debug, Clone)]
pub enum Statement {
    Delete(Delete),
    Insert(Insert),
    Select(Select),
    Update(Update),

    /// Caller-written SQL
    Raw(Fragment),
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

    pub fn is_insert(&self) -> bool {
        matches!(self, Statement::Insert(_))
    }

    pub fn is_update(&self) -> bool {
        matches!(self, Statement::Update(_))
    }

    pub fn is_delete(&self) -> bool {
        matches!(self, Statement::Delete(_))
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
