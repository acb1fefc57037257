use heck::{ToLowerCamelCase, ToSnakeCase};

/// Naming policy applied to columns whose SQL name was derived from their
/// key. Explicitly named columns are never renamed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Casing {
    SnakeCase,
    CamelCase,
}

impl Casing {
    pub fn convert(self, name: &str) -> String {
        match self {
            Casing::SnakeCase => name.to_snake_case(),
            Casing::CamelCase => name.to_lower_camel_case(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_keys() {
        assert_eq!(Casing::SnakeCase.convert("createdAt"), "created_at");
        assert_eq!(Casing::SnakeCase.convert("userId"), "user_id");
        assert_eq!(Casing::CamelCase.convert("created_at"), "createdAt");
        assert_eq!(Casing::CamelCase.convert("id"), "id");
    }
}
