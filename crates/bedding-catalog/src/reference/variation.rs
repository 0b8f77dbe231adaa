//! Base/auxiliary variation catalog.
//!
//! A variation describes a composite product shape: a bed base, possibly
//! carrying an auxiliary insert layer, combined with a mattress. The
//! catalog mixes the two categories through a shared shape with a
//! discriminant field and optional attributes.

use serde::{Deserialize, Serialize};

/// Variation id of the standard box base.
pub const CAMA_BOX_ID: &str = "cama-box";
/// Variation id of the standard storage box base.
pub const CAMA_BOX_BAU_ID: &str = "cama-box-bau";

/// Discriminant between standard bases and auxiliary-layer variations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VariationCategory {
    /// A standard bed base; base weight depends on the mattress size.
    Base,
    /// A base with an auxiliary insert layer; base weight is flat per id.
    Auxiliary,
}

/// A composite-product shape in the static catalog.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VariationSpec {
    /// Catalog id (e.g., "cama-box-aux-espuma").
    pub id: &'static str,
    /// Display label (e.g., "Cama Box com Auxiliar de Espuma").
    pub label: &'static str,
    /// Base text used when composing kit names (e.g., "Cama Box").
    pub base_label: &'static str,
    /// Height of the base in centimeters.
    pub height_cm: u32,
    pub category: VariationCategory,
    /// Auxiliary layer text appended to kit names, when present.
    pub auxiliary_label: Option<&'static str>,
    /// Restrict kit expansion to the single ("solteiro") mattress size.
    pub requires_single_size: bool,
    /// Restrict eligible color codes, when present.
    pub allowed_colors: Option<&'static [&'static str]>,
}

/// All variations in catalog order.
pub const VARIATIONS: [VariationSpec; 6] = [
    VariationSpec {
        id: CAMA_BOX_ID,
        label: "Cama Box",
        base_label: "Cama Box",
        height_cm: 39,
        category: VariationCategory::Base,
        auxiliary_label: None,
        requires_single_size: false,
        allowed_colors: None,
    },
    VariationSpec {
        id: CAMA_BOX_BAU_ID,
        label: "Cama Box Bau",
        base_label: "Cama Box Bau",
        height_cm: 42,
        category: VariationCategory::Base,
        auxiliary_label: None,
        requires_single_size: false,
        allowed_colors: None,
    },
    VariationSpec {
        id: "cama-box-aux-espuma",
        label: "Cama Box com Auxiliar de Espuma",
        base_label: "Cama Box",
        height_cm: 49,
        category: VariationCategory::Auxiliary,
        auxiliary_label: Some("Auxiliar de Espuma"),
        requires_single_size: true,
        allowed_colors: Some(&["01", "02", "03", "18"]),
    },
    VariationSpec {
        id: "cama-box-aux-molas",
        label: "Cama Box com Auxiliar de Molas",
        base_label: "Cama Box",
        height_cm: 49,
        category: VariationCategory::Auxiliary,
        auxiliary_label: Some("Auxiliar de Molas"),
        requires_single_size: true,
        allowed_colors: Some(&["01", "02", "03", "18"]),
    },
    VariationSpec {
        id: "cama-box-bau-aux-espuma",
        label: "Cama Box Bau com Auxiliar de Espuma",
        base_label: "Cama Box Bau",
        height_cm: 44,
        category: VariationCategory::Auxiliary,
        auxiliary_label: Some("Auxiliar de Espuma"),
        requires_single_size: true,
        allowed_colors: Some(&["00", "01", "02", "03"]),
    },
    VariationSpec {
        id: "cama-box-bau-aux-molas",
        label: "Cama Box Bau com Auxiliar de Molas",
        base_label: "Cama Box Bau",
        height_cm: 44,
        category: VariationCategory::Auxiliary,
        auxiliary_label: Some("Auxiliar de Molas"),
        requires_single_size: true,
        allowed_colors: Some(&["00", "01", "02", "03"]),
    },
];

/// Look up a variation by its catalog id.
pub fn variation_by_id(id: &str) -> Option<&'static VariationSpec> {
    VARIATIONS.iter().find(|v| v.id == id)
}

/// Iterate the standard base variations in catalog order.
pub fn standard_variations() -> impl Iterator<Item = &'static VariationSpec> {
    VARIATIONS
        .iter()
        .filter(|v| v.category == VariationCategory::Base)
}

/// Iterate the auxiliary variations in catalog order.
pub fn auxiliary_variations() -> impl Iterator<Item = &'static VariationSpec> {
    VARIATIONS
        .iter()
        .filter(|v| v.category == VariationCategory::Auxiliary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_by_id() {
        let spec = variation_by_id(CAMA_BOX_ID).unwrap();
        assert_eq!(spec.height_cm, 39);
        assert_eq!(spec.category, VariationCategory::Base);
        assert!(variation_by_id("cama-box-aux-agua").is_none());
    }

    #[test]
    fn test_category_split() {
        assert_eq!(standard_variations().count(), 2);
        assert_eq!(auxiliary_variations().count(), 4);
    }

    #[test]
    fn test_auxiliary_restrictions() {
        let spec = variation_by_id("cama-box-bau-aux-molas").unwrap();
        assert!(spec.requires_single_size);
        assert_eq!(spec.auxiliary_label, Some("Auxiliar de Molas"));
        assert_eq!(spec.allowed_colors, Some(&["00", "01", "02", "03"][..]));
    }
}
