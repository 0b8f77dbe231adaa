//! Product kind, mattress core and pillow option catalogs.

use serde::{Deserialize, Serialize};

/// The kind of product a form registers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum ProductKind {
    /// A standalone mattress.
    #[default]
    Colchao,
    /// A box bed base.
    BaseBox,
    /// A box bed base with storage compartment.
    BaseBoxBau,
}

impl ProductKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductKind::Colchao => "colchao",
            ProductKind::BaseBox => "baseBox",
            ProductKind::BaseBoxBau => "baseBoxBau",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "colchao" => Some(ProductKind::Colchao),
            "baseBox" => Some(ProductKind::BaseBox),
            "baseBoxBau" => Some(ProductKind::BaseBoxBau),
            _ => None,
        }
    }

    /// Get the display label used in composed descriptions.
    pub fn label(&self) -> &'static str {
        match self {
            ProductKind::Colchao => "Colchão",
            ProductKind::BaseBox => "Base Box",
            ProductKind::BaseBoxBau => "Base Box Baú",
        }
    }
}

/// The internal material composition of a mattress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MattressCore {
    Espuma,
    EspumaD28,
    EspumaD33,
    EspumaD45,
    EspumaD60,
    MolasEnsacadas,
}

impl MattressCore {
    pub fn as_str(&self) -> &'static str {
        match self {
            MattressCore::Espuma => "espuma",
            MattressCore::EspumaD28 => "espumaD28",
            MattressCore::EspumaD33 => "espumaD33",
            MattressCore::EspumaD45 => "espumaD45",
            MattressCore::EspumaD60 => "espumaD60",
            MattressCore::MolasEnsacadas => "molasEnsacadas",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "espuma" => Some(MattressCore::Espuma),
            "espumaD28" => Some(MattressCore::EspumaD28),
            "espumaD33" => Some(MattressCore::EspumaD33),
            "espumaD45" => Some(MattressCore::EspumaD45),
            "espumaD60" => Some(MattressCore::EspumaD60),
            "molasEnsacadas" => Some(MattressCore::MolasEnsacadas),
            _ => None,
        }
    }

    /// Get the display label used in composed descriptions.
    pub fn label(&self) -> &'static str {
        match self {
            MattressCore::Espuma => "Espuma",
            MattressCore::EspumaD28 => "Espuma D28",
            MattressCore::EspumaD33 => "Espuma D33",
            MattressCore::EspumaD45 => "Espuma D45",
            MattressCore::EspumaD60 => "Espuma D60",
            MattressCore::MolasEnsacadas => "Molas Ensacadas",
        }
    }
}

/// A pillow/comfort-layer add-on appended to the description text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PillowOption {
    PillowIn,
    PillowTop,
    EuroPillow,
    DoubleFace,
    OneFace,
}

impl PillowOption {
    pub fn as_str(&self) -> &'static str {
        match self {
            PillowOption::PillowIn => "pillowIn",
            PillowOption::PillowTop => "pillowTop",
            PillowOption::EuroPillow => "euroPillow",
            PillowOption::DoubleFace => "doubleFace",
            PillowOption::OneFace => "oneFace",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "pillowIn" => Some(PillowOption::PillowIn),
            "pillowTop" => Some(PillowOption::PillowTop),
            "euroPillow" => Some(PillowOption::EuroPillow),
            "doubleFace" => Some(PillowOption::DoubleFace),
            "oneFace" => Some(PillowOption::OneFace),
            _ => None,
        }
    }

    /// Get the text fragment joined into the description.
    pub fn text(&self) -> &'static str {
        match self {
            PillowOption::PillowIn => "Pillow In",
            PillowOption::PillowTop => "Pillow Top",
            PillowOption::EuroPillow => "Euro Pillow",
            PillowOption::DoubleFace => "Double Face",
            PillowOption::OneFace => "One Face",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_kind_labels() {
        assert_eq!(ProductKind::Colchao.label(), "Colchão");
        assert_eq!(ProductKind::BaseBoxBau.label(), "Base Box Baú");
    }

    #[test]
    fn test_mattress_core_roundtrip() {
        assert_eq!(MattressCore::from_str("espumaD33"), Some(MattressCore::EspumaD33));
        assert_eq!(MattressCore::EspumaD33.label(), "Espuma D33");
        assert_eq!(MattressCore::from_str("latex"), None);
    }

    #[test]
    fn test_pillow_text() {
        assert_eq!(PillowOption::EuroPillow.text(), "Euro Pillow");
        assert_eq!(PillowOption::from_str("pillowTop"), Some(PillowOption::PillowTop));
    }
}
