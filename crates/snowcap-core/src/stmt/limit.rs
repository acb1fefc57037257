/// A LIMIT or OFFSET bound: a literal count or a named placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Limit {
    Count(u64),
    Placeholder(String),
}

impl Limit {
    /// A literal zero offset is omitted from the statement.
    pub fn is_zero(&self) -> bool {
        matches!(self, Limit::Count(0))
    }
}

impl From<u64> for Limit {
    fn from(value: u64) -> Self {
        Limit::Count(value)
    }
}
