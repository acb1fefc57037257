#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UniqueConstraint {
    pub name: String,

    /// Column keys covered by the constraint.
    pub columns: Vec<String>,
}
