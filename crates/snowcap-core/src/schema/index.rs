/// Index metadata. Standard warehouse tables do not support indexes, so
/// these are carried for introspection and never rendered in DDL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Index {
    pub name: String,

    /// Column keys covered by the index.
    pub columns: Vec<String>,

    pub unique: bool,
}
