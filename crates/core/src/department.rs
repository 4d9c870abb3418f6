//! Department references as they arrive from the presentation layer.
//!
//! The UI's department field is a combo box whose value may be a numeric id
//! or a display name. Instead of inspecting types at runtime, the boundary
//! parses the raw value once into a tagged [`DeptRef`] and the service layer
//! resolves it against the `departments` table.

use serde::{Deserialize, Serialize};

use crate::types::DbId;

/// A department reference supplied by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeptRef {
    /// A known department id. Not existence-checked at parse time; an
    /// invalid id surfaces as a foreign-key violation at write time.
    ById(DbId),
    /// A display name, resolved by exact match against the department
    /// table. An unmatched name is a validation error.
    ByName(String),
}

impl DeptRef {
    /// Parse a raw department field.
    ///
    /// Empty input means "no department" and returns `None`; a
    /// numeric-looking string is treated as an id, anything else as a name.
    pub fn parse(raw: &str) -> Option<DeptRef> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        match trimmed.parse::<DbId>() {
            Ok(id) => Some(DeptRef::ById(id)),
            Err(_) => Some(DeptRef::ByName(trimmed.to_string())),
        }
    }
}

impl From<DbId> for DeptRef {
    fn from(id: DbId) -> Self {
        DeptRef::ById(id)
    }
}

impl From<&str> for DeptRef {
    fn from(name: &str) -> Self {
        DeptRef::ByName(name.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_field_is_no_department() {
        assert_eq!(DeptRef::parse(""), None);
        assert_eq!(DeptRef::parse("   "), None);
    }

    #[test]
    fn numeric_field_is_an_id() {
        assert_eq!(DeptRef::parse("7"), Some(DeptRef::ById(7)));
        assert_eq!(DeptRef::parse(" 12 "), Some(DeptRef::ById(12)));
    }

    #[test]
    fn text_field_is_a_name() {
        assert_eq!(
            DeptRef::parse("Finance"),
            Some(DeptRef::ByName("Finance".to_string()))
        );
    }

    #[test]
    fn mixed_field_is_a_name() {
        // "3rd Floor Ops" starts with a digit but is not numeric.
        assert_eq!(
            DeptRef::parse("3rd Floor Ops"),
            Some(DeptRef::ByName("3rd Floor Ops".to_string()))
        );
    }
}
