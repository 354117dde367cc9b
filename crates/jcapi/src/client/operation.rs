//! Logical operation kinds and their transport verbs.

use std::fmt;

/// A logical API operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Read,
    Insert,
    Update,
    Delete,
    /// Collection listing. The service expects the non-standard `LIST` verb.
    List,
}

impl Operation {
    /// Returns the HTTP verb for this operation.
    pub fn verb(self) -> &'static str {
        match self {
            Operation::Read => "GET",
            Operation::Insert => "POST",
            Operation::Update => "PUT",
            Operation::Delete => "DELETE",
            Operation::List => "LIST",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.verb())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verb_mapping() {
        assert_eq!(Operation::Read.verb(), "GET");
        assert_eq!(Operation::Insert.verb(), "POST");
        assert_eq!(Operation::Update.verb(), "PUT");
        assert_eq!(Operation::Delete.verb(), "DELETE");
        assert_eq!(Operation::List.verb(), "LIST");
    }

    #[test]
    fn display_is_verb() {
        assert_eq!(Operation::List.to_string(), "LIST");
    }

    #[test]
    fn list_verb_is_a_valid_method_token() {
        let method = reqwest::Method::from_bytes(Operation::List.verb().as_bytes()).unwrap();
        assert_eq!(method.as_str(), "LIST");
    }
}
