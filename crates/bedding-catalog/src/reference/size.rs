//! Mattress size catalog.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A mattress size.
///
/// Each size carries a display label and a fixed `width x length`
/// dimensions string in centimeters. The mattress height is chosen per
/// form, so it is not part of the size itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Size {
    Solteiro,
    Solteirinho,
    Casal,
    SolteiroKing,
    Queen,
    King,
}

impl Size {
    /// All sizes in catalog order.
    pub const ALL: [Size; 6] = [
        Size::Solteiro,
        Size::Solteirinho,
        Size::Casal,
        Size::SolteiroKing,
        Size::Queen,
        Size::King,
    ];

    /// Get the size identifier (e.g., "solteiroKing").
    pub fn as_str(&self) -> &'static str {
        match self {
            Size::Solteiro => "solteiro",
            Size::Solteirinho => "solteirinho",
            Size::Casal => "casal",
            Size::SolteiroKing => "solteiroKing",
            Size::Queen => "queen",
            Size::King => "king",
        }
    }

    /// Parse a size identifier string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "solteiro" => Some(Size::Solteiro),
            "solteirinho" => Some(Size::Solteirinho),
            "casal" => Some(Size::Casal),
            "solteiroKing" => Some(Size::SolteiroKing),
            "queen" => Some(Size::Queen),
            "king" => Some(Size::King),
            _ => None,
        }
    }

    /// Get the display label (e.g., "Solteiro King").
    pub fn label(&self) -> &'static str {
        match self {
            Size::Solteiro => "Solteiro",
            Size::Solteirinho => "Solteirinho",
            Size::Casal => "Casal",
            Size::SolteiroKing => "Solteiro King",
            Size::Queen => "Queen",
            Size::King => "King",
        }
    }

    /// Get the `width x length` dimensions string in centimeters.
    pub fn dimensions(&self) -> &'static str {
        match self {
            Size::Solteiro => "88x188",
            Size::Solteirinho => "78x188",
            Size::Casal => "138x188",
            Size::SolteiroKing => "96x203",
            Size::Queen => "158x198",
            Size::King => "193x203",
        }
    }

    /// Check if this is the single size that restricted variations allow.
    pub fn is_single(&self) -> bool {
        matches!(self, Size::Solteiro)
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_roundtrip() {
        for size in Size::ALL {
            assert_eq!(Size::from_str(size.as_str()), Some(size));
        }
        assert_eq!(Size::from_str("futon"), None);
    }

    #[test]
    fn test_size_dimensions() {
        assert_eq!(Size::Solteiro.dimensions(), "88x188");
        assert_eq!(Size::King.dimensions(), "193x203");
        assert_eq!(Size::SolteiroKing.label(), "Solteiro King");
    }

    #[test]
    fn test_single_size() {
        assert!(Size::Solteiro.is_single());
        assert!(!Size::Queen.is_single());
    }
}
