//! Newtype ids for type-safe identifiers.
//!
//! Using newtypes prevents accidentally mixing up different code types,
//! e.g., passing a color code where a variation id is expected.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Macro to generate newtype id structs.
macro_rules! define_id {
    ($name:ident) => {
        /// A domain identifier.
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(String);

        impl $name {
            /// Create a new id from a string.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the id as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume and return the inner string.
            pub fn into_inner(self) -> String {
                self.0
            }

            /// Check if the id is empty.
            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

// Define all id types
define_id!(VariationId);
define_id!(ColorCode);
define_id!(BrandCode);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_creation() {
        let id = VariationId::new("cama-box");
        assert_eq!(id.as_str(), "cama-box");
    }

    #[test]
    fn test_id_from_string() {
        let code: ColorCode = "01".into();
        assert_eq!(code.as_str(), "01");
    }

    #[test]
    fn test_id_display() {
        let code = BrandCode::new("0041");
        assert_eq!(format!("{}", code), "0041");
    }

    #[test]
    fn test_id_equality() {
        let a = ColorCode::new("03");
        let b = ColorCode::new("03");
        let c = ColorCode::new("18");

        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
