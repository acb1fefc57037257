use super::Subquery;

/// Common table expressions prefixed to a statement.
#[derive(Debug, Clone, Default)]
pub struct With {
    pub ctes: Vec<Subquery>,
}

impl With {
    pub fn is_empty(&self) -> bool {
        self.ctes.is_empty()
    }
}

impl From<Vec<Subquery>> for With {
    fn from(ctes: Vec<Subquery>) -> Self {
        With { ctes }
    }
}
